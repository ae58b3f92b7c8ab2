//! Model-driven control logic for iced applications
//!
//! Headless building blocks for the usual visual controls: buttons, sliders,
//! toggles, radio buttons, accordions, alerts, progress bars, and lists.
//! Each control is a model struct (layout metrics and per-state color tables
//! with sensible defaults) plus a small state machine; the slider and
//! progress bar share a bounded value-mapping engine that turns raw drag
//! coordinates into clamped, optionally stepped values and back into
//! fractions and pixel offsets.
//!
//! Nothing here draws. The embedding view layer feeds pointer and drag
//! events in, stores the values coming back, and renders with the resolved
//! colors and geometry on each pass.
//!
//! # Example
//!
//! ```
//! use controlkit::controls::{DragEvent, SliderController, SliderModel};
//! use controlkit::range::ValueRange;
//!
//! let model = SliderModel::new(ValueRange::new(0.0, 8.0).with_step(2.0));
//! let mut controller = SliderController::new();
//! let mut value = 2.0;
//!
//! // Drag update at 146px on a 200px track
//! if let Some(v) = controller.update(
//!     DragEvent::Began { position: 146.0 },
//!     &model.range,
//!     200.0,
//! ) {
//!     value = v;
//! }
//! assert_eq!(value, 4.0);
//!
//! let geometry = model.geometry(value, 200.0);
//! assert_eq!(geometry.fill_width, 100.0);
//! ```

pub mod controls;
pub mod interaction;
pub mod range;
pub mod style;

pub use interaction::Interaction;
pub use range::{RangeError, ValueRange};
pub use style::{OnOffColors, StateColors, StateOpacities};
