//! Pointer interaction state shared by every control
//!
//! Controls differ in what they do with a press; the state machine underneath
//! is the same everywhere: enabled, pressed while the pointer is held down,
//! and disabled as an externally-assigned absorbing state.

use tracing::debug;

/// Interaction state of a control
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Interaction {
    /// Idle and accepting pointer input
    #[default]
    Enabled,
    /// Pointer held down (a slider counts dragging as pressed)
    Pressed,
    /// Blocks all pointer transitions until re-enabled externally
    Disabled,
}

impl Interaction {
    /// Pointer-down transition
    ///
    /// Returns whether the control is now pressed. Calling this while
    /// already pressed is fine (an abandoned drag never released).
    pub fn press(&mut self) -> bool {
        match self {
            Self::Enabled => {
                *self = Self::Pressed;
                debug!("interaction: enabled -> pressed");
                true
            }
            Self::Pressed => true,
            Self::Disabled => false,
        }
    }

    /// Pointer-up / drag-end transition
    ///
    /// Returns true only when this call ended an active press, which is what
    /// tap-activated controls key their action on.
    pub fn release(&mut self) -> bool {
        match self {
            Self::Pressed => {
                *self = Self::Enabled;
                debug!("interaction: pressed -> enabled");
                true
            }
            Self::Enabled | Self::Disabled => false,
        }
    }

    /// External enable/disable assignment
    ///
    /// Disabling wins from any state, including mid-press.
    pub fn set_disabled(&mut self, disabled: bool) {
        if disabled {
            *self = Self::Disabled;
        } else if *self == Self::Disabled {
            *self = Self::Enabled;
        }
    }

    pub fn is_pressed(&self) -> bool {
        matches!(self, Self::Pressed)
    }

    pub fn is_disabled(&self) -> bool {
        matches!(self, Self::Disabled)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn press_and_release_cycle() {
        let mut state = Interaction::default();
        assert_eq!(state, Interaction::Enabled);

        assert!(state.press());
        assert_eq!(state, Interaction::Pressed);

        assert!(state.release());
        assert_eq!(state, Interaction::Enabled);

        // Release without a press does nothing
        assert!(!state.release());
        assert_eq!(state, Interaction::Enabled);
    }

    #[test]
    fn repeated_press_is_tolerated() {
        let mut state = Interaction::Enabled;
        assert!(state.press());
        // A second pointer-down without a release (abandoned drag) keeps
        // the control pressed rather than getting stuck.
        assert!(state.press());
        assert_eq!(state, Interaction::Pressed);
    }

    #[test]
    fn disabled_blocks_pointer_transitions() {
        let mut state = Interaction::Disabled;
        assert!(!state.press());
        assert_eq!(state, Interaction::Disabled);
        assert!(!state.release());
        assert_eq!(state, Interaction::Disabled);
    }

    #[test]
    fn disabling_wins_mid_press() {
        let mut state = Interaction::Enabled;
        state.press();
        state.set_disabled(true);
        assert_eq!(state, Interaction::Disabled);

        // Re-enabling lands back in enabled, not pressed
        state.set_disabled(false);
        assert_eq!(state, Interaction::Enabled);
    }

    #[test]
    fn enabling_an_enabled_control_is_a_no_op() {
        let mut state = Interaction::Enabled;
        state.press();
        state.set_disabled(false);
        assert_eq!(state, Interaction::Pressed);
    }
}
