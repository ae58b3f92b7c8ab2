//! Per-state color and opacity resolution
//!
//! Every control maps its interaction state to a color/opacity through a
//! small lookup table supplied by its model. The tables are plain structs
//! with one field per state and the resolvers are exhaustive matches, so
//! every `(state)` and `(is_on, state)` combination is covered by
//! construction.

pub mod palette;

use iced::Color;

use crate::interaction::Interaction;

/// One color per interaction state
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct StateColors {
    pub enabled: Color,
    pub pressed: Color,
    pub disabled: Color,
}

impl StateColors {
    /// Same color regardless of state
    pub const fn uniform(color: Color) -> Self {
        Self {
            enabled: color,
            pressed: color,
            disabled: color,
        }
    }

    pub fn resolve(&self, state: Interaction) -> Color {
        match state {
            Interaction::Enabled => self.enabled,
            Interaction::Pressed => self.pressed,
            Interaction::Disabled => self.disabled,
        }
    }
}

/// One color per `(is_on, interaction state)` combination
///
/// Used by on/off controls (toggle, radio button) whose fill depends on both
/// the boolean value and the pointer state. Disabled is a single color: a
/// disabled control does not advertise its value through the fill.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct OnOffColors {
    pub off: Color,
    pub on: Color,
    pub pressed_off: Color,
    pub pressed_on: Color,
    pub disabled: Color,
}

impl OnOffColors {
    pub const fn uniform(color: Color) -> Self {
        Self {
            off: color,
            on: color,
            pressed_off: color,
            pressed_on: color,
            disabled: color,
        }
    }

    pub fn resolve(&self, is_on: bool, state: Interaction) -> Color {
        match (state, is_on) {
            (Interaction::Enabled, false) => self.off,
            (Interaction::Enabled, true) => self.on,
            (Interaction::Pressed, false) => self.pressed_off,
            (Interaction::Pressed, true) => self.pressed_on,
            (Interaction::Disabled, _) => self.disabled,
        }
    }
}

/// One opacity per interaction state
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct StateOpacities {
    pub enabled: f32,
    pub pressed: f32,
    pub disabled: f32,
}

impl StateOpacities {
    pub fn resolve(&self, state: Interaction) -> f32 {
        match state {
            Interaction::Enabled => self.enabled,
            Interaction::Pressed => self.pressed,
            Interaction::Disabled => self.disabled,
        }
    }

    /// Applies the resolved opacity to a color's alpha channel
    pub fn apply(&self, color: Color, state: Interaction) -> Color {
        Color {
            a: color.a * self.resolve(state),
            ..color
        }
    }
}

impl Default for StateOpacities {
    fn default() -> Self {
        Self {
            enabled: 1.0,
            pressed: 1.0,
            disabled: 0.5,
        }
    }
}
