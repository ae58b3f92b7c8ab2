//! Accordion control
//!
//! A header row that expands and collapses a content area. Expansion is a
//! two-state machine with the usual external disabled override; the model
//! contributes the header metrics and the total-height arithmetic the view
//! layer sizes itself with.

use iced::Color;
use tracing::debug;

use crate::interaction::Interaction;
use crate::style::{StateColors, palette};

/// Accordion configuration
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AccordionModel {
    pub layout: AccordionLayout,
    pub colors: AccordionColors,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AccordionLayout {
    pub header_height: f32,
    pub corner_radius: f32,
    /// Vertical margin around the expanded content
    pub content_margin: f32,
    pub chevron_dimension: f32,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AccordionColors {
    pub background: Color,
    pub header_text: StateColors,
    pub chevron: StateColors,
    pub divider: Color,
}

impl Default for AccordionModel {
    fn default() -> Self {
        Self {
            layout: AccordionLayout {
                header_height: 40.0,
                corner_radius: 10.0,
                content_margin: 10.0,
                chevron_dimension: 12.0,
            },
            colors: AccordionColors {
                background: palette::SURFACE,
                header_text: StateColors {
                    enabled: palette::TEXT_PRIMARY,
                    pressed: palette::TEXT_SECONDARY,
                    disabled: palette::DISABLED,
                },
                chevron: StateColors {
                    enabled: palette::TEXT_SECONDARY,
                    pressed: palette::TEXT_SECONDARY,
                    disabled: palette::DISABLED,
                },
                divider: palette::DIVIDER,
            },
        }
    }
}

impl AccordionModel {
    /// Total control height for the given content height
    pub fn height(&self, state: &AccordionState, content_height: f32) -> f32 {
        if state.is_expanded() {
            self.layout.header_height + 2.0 * self.layout.content_margin + content_height
        } else {
            self.layout.header_height
        }
    }
}

/// Which way the header chevron points
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChevronDirection {
    Up,
    Down,
}

/// Expansion and interaction state of one accordion
#[derive(Debug, Clone, Copy, Default)]
pub struct AccordionState {
    expanded: bool,
    interaction: Interaction,
}

impl AccordionState {
    pub fn new(expanded: bool) -> Self {
        Self {
            expanded,
            interaction: Interaction::Enabled,
        }
    }

    pub fn is_expanded(&self) -> bool {
        self.expanded
    }

    pub fn interaction(&self) -> Interaction {
        self.interaction
    }

    pub fn press(&mut self) {
        self.interaction.press();
    }

    /// Pointer-up on the header; flips expansion if it ended an active press
    pub fn release(&mut self) -> bool {
        if self.interaction.release() {
            self.expanded = !self.expanded;
            debug!(expanded = self.expanded, "accordion toggled");
            true
        } else {
            false
        }
    }

    pub fn set_expanded(&mut self, expanded: bool) {
        self.expanded = expanded;
    }

    pub fn set_disabled(&mut self, disabled: bool) {
        self.interaction.set_disabled(disabled);
    }

    /// Collapsed points down toward the hidden content, expanded points up
    pub fn chevron_direction(&self) -> ChevronDirection {
        if self.expanded {
            ChevronDirection::Up
        } else {
            ChevronDirection::Down
        }
    }

    pub fn chevron_color(&self, model: &AccordionModel) -> Color {
        model.colors.chevron.resolve(self.interaction)
    }

    pub fn header_text_color(&self, model: &AccordionModel) -> Color {
        model.colors.header_text.resolve(self.interaction)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn header_tap_toggles_expansion() {
        let mut state = AccordionState::new(false);
        state.press();
        assert!(state.release());
        assert!(state.is_expanded());
        assert_eq!(state.chevron_direction(), ChevronDirection::Up);

        state.press();
        assert!(state.release());
        assert!(!state.is_expanded());
        assert_eq!(state.chevron_direction(), ChevronDirection::Down);
    }

    #[test]
    fn disabled_accordion_stays_put() {
        let mut state = AccordionState::new(true);
        state.set_disabled(true);
        state.press();
        assert!(!state.release());
        assert!(state.is_expanded());
    }

    #[test]
    fn height_includes_content_only_when_expanded() {
        let model = AccordionModel::default();
        let mut state = AccordionState::new(false);
        assert_eq!(model.height(&state, 100.0), 40.0);

        state.set_expanded(true);
        // header 40 + margins 2*10 + content 100
        assert_eq!(model.height(&state, 100.0), 160.0);
    }
}
