//! Alert control
//!
//! A modal dialog model: title, optional description, and one or two action
//! buttons built from [`ButtonModel`]s. The state is just presented or
//! dismissed; any button release dismisses, and the caller reacts to which
//! one fired.

use iced::Color;
use tracing::debug;

use super::button::ButtonModel;
use crate::style::palette;

/// Alert configuration
#[derive(Debug, Clone, PartialEq)]
pub struct AlertModel {
    pub layout: AlertLayout,
    pub colors: AlertColors,
    pub buttons: AlertButtons,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AlertLayout {
    pub width: f32,
    pub corner_radius: f32,
    pub margin: f32,
    /// Spacing between two side-by-side buttons
    pub button_spacing: f32,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AlertColors {
    pub background: Color,
    pub title: Color,
    pub description: Color,
    /// Scrim behind the dialog
    pub backdrop: Color,
}

/// Action buttons on the dialog
#[derive(Debug, Clone, PartialEq)]
pub enum AlertButtons {
    One {
        primary: ButtonModel,
    },
    Two {
        primary: ButtonModel,
        secondary: ButtonModel,
    },
}

impl Default for AlertModel {
    fn default() -> Self {
        Self {
            layout: AlertLayout {
                width: 300.0,
                corner_radius: 20.0,
                margin: 15.0,
                button_spacing: 10.0,
            },
            colors: AlertColors {
                background: palette::SURFACE,
                title: palette::TEXT_PRIMARY,
                description: palette::TEXT_SECONDARY,
                backdrop: Color::from_rgba(0.0, 0.0, 0.0, 0.5),
            },
            buttons: AlertButtons::Two {
                primary: ButtonModel::default(),
                secondary: ButtonModel::secondary(),
            },
        }
    }
}

impl AlertModel {
    /// Width of each button row entry for the dialog's inner width
    pub fn button_width(&self) -> f32 {
        let inner = self.layout.width - 2.0 * self.layout.margin;
        match self.buttons {
            AlertButtons::One { .. } => inner,
            AlertButtons::Two { .. } => (inner - self.layout.button_spacing) / 2.0,
        }
    }
}

/// Presentation state of one alert
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct AlertState {
    visible: bool,
}

impl AlertState {
    pub fn is_visible(&self) -> bool {
        self.visible
    }

    pub fn present(&mut self) {
        if !self.visible {
            debug!("alert presented");
        }
        self.visible = true;
    }

    pub fn dismiss(&mut self) {
        if self.visible {
            debug!("alert dismissed");
        }
        self.visible = false;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn present_and_dismiss() {
        let mut state = AlertState::default();
        assert!(!state.is_visible());
        state.present();
        assert!(state.is_visible());
        state.dismiss();
        assert!(!state.is_visible());
    }

    #[test]
    fn two_buttons_split_the_inner_width() {
        let model = AlertModel::default();
        // (300 - 2*15 - 10) / 2
        assert_eq!(model.button_width(), 130.0);
    }

    #[test]
    fn single_button_takes_the_full_inner_width() {
        let model = AlertModel {
            buttons: AlertButtons::One {
                primary: ButtonModel::default(),
            },
            ..AlertModel::default()
        };
        assert_eq!(model.button_width(), 270.0);
    }
}
