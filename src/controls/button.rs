//! Button control
//!
//! Press-and-release activation: the click fires on pointer-up ending an
//! active press, never on pointer-down. Style resolution mirrors the
//! `(theme, status) -> Style` shape iced widgets use, with the table coming
//! from the model instead of a closure.

use iced::{Background, Border, Color};
use tracing::debug;

use crate::interaction::Interaction;
use crate::style::{StateColors, StateOpacities, palette};

/// Button configuration
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ButtonModel {
    pub layout: ButtonLayout,
    pub colors: ButtonColors,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ButtonLayout {
    pub height: f32,
    pub corner_radius: f32,
    pub border_width: f32,
    /// Horizontal content padding
    pub padding: f32,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ButtonColors {
    pub background: StateColors,
    pub border: StateColors,
    pub text: StateColors,
    pub text_opacities: StateOpacities,
}

impl Default for ButtonModel {
    fn default() -> Self {
        Self {
            layout: ButtonLayout {
                height: 50.0,
                corner_radius: 25.0,
                border_width: 0.0,
                padding: 15.0,
            },
            colors: ButtonColors {
                background: StateColors {
                    enabled: palette::ACCENT,
                    pressed: palette::ACCENT_PRESSED,
                    disabled: palette::DISABLED,
                },
                border: StateColors::uniform(Color::TRANSPARENT),
                text: StateColors::uniform(Color::WHITE),
                text_opacities: StateOpacities::default(),
            },
        }
    }
}

/// Fully resolved appearance for one render pass
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ButtonStyle {
    pub background: Background,
    pub text_color: Color,
    pub border: Border,
}

impl ButtonModel {
    /// Secondary variant: transparent with a visible border
    pub fn secondary() -> Self {
        let mut model = Self::default();
        model.colors.background = StateColors::uniform(Color::TRANSPARENT);
        model.colors.border = StateColors {
            enabled: palette::DIVIDER,
            pressed: palette::TEXT_SECONDARY,
            disabled: palette::DISABLED,
        };
        model.colors.text = StateColors {
            enabled: palette::TEXT_PRIMARY,
            pressed: palette::TEXT_PRIMARY,
            disabled: palette::DISABLED,
        };
        model.layout.border_width = 1.0;
        model
    }

    pub fn style(&self, state: Interaction) -> ButtonStyle {
        ButtonStyle {
            background: Background::Color(self.colors.background.resolve(state)),
            text_color: self
                .colors
                .text_opacities
                .apply(self.colors.text.resolve(state), state),
            border: Border {
                radius: self.layout.corner_radius.into(),
                width: self.layout.border_width,
                color: self.colors.border.resolve(state),
            },
        }
    }
}

/// Interaction state of one button
#[derive(Debug, Clone, Copy, Default)]
pub struct ButtonState {
    interaction: Interaction,
}

impl ButtonState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn interaction(&self) -> Interaction {
        self.interaction
    }

    pub fn press(&mut self) {
        self.interaction.press();
    }

    /// Pointer-up; returns true when this counts as a click
    pub fn release(&mut self) -> bool {
        let clicked = self.interaction.release();
        if clicked {
            debug!("button clicked");
        }
        clicked
    }

    pub fn set_disabled(&mut self, disabled: bool) {
        self.interaction.set_disabled(disabled);
    }

    pub fn style(&self, model: &ButtonModel) -> ButtonStyle {
        model.style(self.interaction)
    }
}
