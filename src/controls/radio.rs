//! Radio button control
//!
//! Behaves like a toggle over the same state machine, except selection
//! latches: tapping a selected radio button keeps it selected. Deselection
//! only happens externally, when another member of the group is picked.

use iced::Color;
use tracing::debug;

use crate::interaction::Interaction;
use crate::style::{OnOffColors, StateColors, StateOpacities, palette};

/// Radio button configuration
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RadioModel {
    pub layout: RadioLayout,
    pub colors: RadioColors,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RadioLayout {
    /// Outer ring diameter
    pub dimension: f32,
    pub ring_width: f32,
    /// Inner dot diameter when selected
    pub dot_dimension: f32,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RadioColors {
    pub ring: OnOffColors,
    pub dot: StateColors,
    pub text_opacities: StateOpacities,
}

impl Default for RadioModel {
    fn default() -> Self {
        Self {
            layout: RadioLayout {
                dimension: 20.0,
                ring_width: 2.0,
                dot_dimension: 10.0,
            },
            colors: RadioColors {
                ring: OnOffColors {
                    off: palette::SURFACE_LIGHT,
                    on: palette::ACCENT,
                    pressed_off: palette::SURFACE_LIGHT,
                    pressed_on: palette::ACCENT_PRESSED,
                    disabled: palette::DISABLED,
                },
                dot: StateColors {
                    enabled: palette::ACCENT,
                    pressed: palette::ACCENT_PRESSED,
                    disabled: palette::DISABLED,
                },
                text_opacities: StateOpacities::default(),
            },
        }
    }
}

/// Selection and interaction state of one radio button
#[derive(Debug, Clone, Copy, Default)]
pub struct RadioState {
    is_on: bool,
    interaction: Interaction,
}

impl RadioState {
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

    pub fn press(&mut self) {
        self.interaction.press();
    }

    /// Pointer-up; selects if this ended an active press
    ///
    /// Returns true when the tap newly selected this button, which is the
    /// group's cue to deselect the others.
    pub fn release(&mut self) -> bool {
        if self.interaction.release() && !self.is_on {
            self.is_on = true;
            debug!("radio button selected");
            true
        } else {
            false
        }
    }

    /// External deselection, when another group member is picked
    pub fn set_on(&mut self, is_on: bool) {
        self.is_on = is_on;
    }

    pub fn set_disabled(&mut self, disabled: bool) {
        self.interaction.set_disabled(disabled);
    }

    pub fn ring_color(&self, model: &RadioModel) -> Color {
        model.colors.ring.resolve(self.is_on, self.interaction)
    }

    /// Dot color, or `None` while unselected (no dot is drawn)
    pub fn dot_color(&self, model: &RadioModel) -> Option<Color> {
        self.is_on
            .then(|| model.colors.dot.resolve(self.interaction))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tap_selects_once() {
        let mut state = RadioState::new(false);
        state.press();
        assert!(state.release());
        assert!(state.is_on());

        // Selection latches; a second tap reports no change
        state.press();
        assert!(!state.release());
        assert!(state.is_on());
    }

    #[test]
    fn deselection_is_external_only() {
        let mut state = RadioState::new(true);
        state.set_on(false);
        assert!(!state.is_on());
    }

    #[test]
    fn disabled_radio_cannot_be_selected() {
        let mut state = RadioState::new(false);
        state.set_disabled(true);
        state.press();
        assert!(!state.release());
        assert!(!state.is_on());
    }

    #[test]
    fn dot_only_exists_while_selected() {
        let model = RadioModel::default();
        let mut state = RadioState::new(false);
        assert_eq!(state.dot_color(&model), None);

        state.press();
        state.release();
        assert_eq!(state.dot_color(&model), Some(model.colors.dot.enabled));

        state.set_disabled(true);
        assert_eq!(state.dot_color(&model), Some(model.colors.dot.disabled));
    }
}
