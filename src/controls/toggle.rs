//! Toggle control
//!
//! An on/off switch with a sliding thumb. The boolean value flips on
//! pointer-up, so a press that gets cancelled (disabled mid-press, gesture
//! interrupted) leaves the value untouched.

use iced::Color;
use tracing::debug;

use crate::interaction::Interaction;
use crate::style::{OnOffColors, StateOpacities, palette};

/// Toggle configuration
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ToggleModel {
    pub layout: ToggleLayout,
    pub colors: ToggleColors,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ToggleLayout {
    pub width: f32,
    pub height: f32,
    pub thumb_dimension: f32,
    /// Gap between the thumb and the fill edge on both ends
    pub thumb_margin: f32,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ToggleColors {
    pub fill: OnOffColors,
    pub thumb: OnOffColors,
    /// Applied to the caption next to the toggle
    pub text_opacities: StateOpacities,
}

impl Default for ToggleModel {
    fn default() -> Self {
        Self {
            layout: ToggleLayout {
                width: 51.0,
                height: 31.0,
                thumb_dimension: 27.0,
                thumb_margin: 2.0,
            },
            colors: ToggleColors {
                fill: OnOffColors {
                    off: palette::SURFACE_LIGHT,
                    on: palette::ACCENT,
                    pressed_off: palette::SURFACE_LIGHT,
                    pressed_on: palette::ACCENT_PRESSED,
                    disabled: palette::DISABLED,
                },
                thumb: OnOffColors::uniform(Color::WHITE),
                text_opacities: StateOpacities::default(),
            },
        }
    }
}

impl ToggleModel {
    /// Left edge of the thumb for the given value
    ///
    /// Off parks the thumb at the leading margin, on at the trailing one.
    pub fn thumb_offset(&self, is_on: bool) -> f32 {
        if is_on {
            self.layout.width - self.layout.thumb_dimension - self.layout.thumb_margin
        } else {
            self.layout.thumb_margin
        }
    }
}

/// Value and interaction state of one toggle
#[derive(Debug, Clone, Copy, Default)]
pub struct ToggleState {
    is_on: bool,
    interaction: Interaction,
}

impl ToggleState {
    pub fn new(is_on: bool) -> Self {
        Self {
            is_on,
            interaction: Interaction::Enabled,
        }
    }

    pub fn is_on(&self) -> bool {
        self.is_on
    }

    pub fn interaction(&self) -> Interaction {
        self.interaction
    }

    /// Pointer-down; no value change yet
    pub fn press(&mut self) {
        self.interaction.press();
    }

    /// Pointer-up; flips the value if this ended an active press
    ///
    /// Returns the new value when it flipped.
    pub fn release(&mut self) -> Option<bool> {
        if self.interaction.release() {
            self.is_on = !self.is_on;
            debug!(is_on = self.is_on, "toggle flipped");
            Some(self.is_on)
        } else {
            None
        }
    }

    /// External value assignment, e.g. from a settings load
    pub fn set_on(&mut self, is_on: bool) {
        self.is_on = is_on;
    }

    pub fn set_disabled(&mut self, disabled: bool) {
        self.interaction.set_disabled(disabled);
    }

    pub fn fill_color(&self, model: &ToggleModel) -> Color {
        model.colors.fill.resolve(self.is_on, self.interaction)
    }

    pub fn thumb_color(&self, model: &ToggleModel) -> Color {
        model.colors.thumb.resolve(self.is_on, self.interaction)
    }

    pub fn text_color(&self, model: &ToggleModel, base: Color) -> Color {
        model.colors.text_opacities.apply(base, self.interaction)
    }
}
