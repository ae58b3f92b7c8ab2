//! Control models and controllers
//!
//! One module per control. Each follows the same split:
//!
//! - **Model**: immutable configuration with defaults — layout metrics and
//!   per-state color tables. Pure data, cheap to copy.
//! - **State/controller**: the control's small state machine. It never owns
//!   the control's value; that stays with the caller, which feeds events in
//!   and applies the values coming back out.
//! - **Resolution**: methods turning `(model, state)` into the colors,
//!   fractions, and offsets a view layer renders with.
//!
//! No module here draws anything or handles raw platform events; the
//! embedding view layer does both.

pub mod accordion;
pub mod alert;
pub mod button;
pub mod list;
pub mod progress;
pub mod radio;
pub mod slider;
pub mod toggle;

pub use accordion::{AccordionModel, AccordionState};
pub use alert::{AlertButtons, AlertModel, AlertState};
pub use button::{ButtonModel, ButtonState};
pub use list::ListModel;
pub use progress::ProgressBarModel;
pub use radio::{RadioModel, RadioState};
pub use slider::{DragEvent, SliderController, SliderModel};
pub use toggle::{ToggleModel, ToggleState};
