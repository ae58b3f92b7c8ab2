//! Slider control
//!
//! An interactive horizontal value picker over a [`ValueRange`]. The
//! controller consumes a stream of raw drag coordinates from the embedding
//! view layer and hands back clamped, stepped values; the model resolves the
//! track/thumb geometry and per-state colors for rendering.

use iced::Color;
use tracing::{debug, warn};

use crate::interaction::Interaction;
use crate::range::{RangeError, ValueRange};
use crate::style::{StateColors, palette};

/// Slider configuration
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SliderModel {
    pub range: ValueRange,
    pub layout: SliderLayout,
    pub colors: SliderColors,
}

/// Track and thumb metrics
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SliderLayout {
    /// Track height in pixels
    pub height: f32,
    pub corner_radius: f32,
    /// Thumb side length along the track axis
    pub thumb_dimension: f32,
    pub thumb_corner_radius: f32,
    pub thumb_border_width: f32,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SliderColors {
    /// Unfilled portion of the track
    pub track: StateColors,
    /// Filled portion, from the left edge to the thumb
    pub progress: StateColors,
    pub thumb: StateColors,
    pub thumb_border: StateColors,
}

impl Default for SliderModel {
    fn default() -> Self {
        Self {
            range: ValueRange::new(0.0, 1.0),
            layout: SliderLayout::default(),
            colors: SliderColors::default(),
        }
    }
}

impl Default for SliderLayout {
    fn default() -> Self {
        Self {
            height: 10.0,
            corner_radius: 5.0,
            thumb_dimension: 20.0,
            thumb_corner_radius: 10.0,
            thumb_border_width: 0.0,
        }
    }
}

impl Default for SliderColors {
    fn default() -> Self {
        Self {
            track: StateColors {
                enabled: palette::SURFACE_LIGHT,
                pressed: palette::SURFACE_LIGHT,
                disabled: palette::DISABLED,
            },
            progress: StateColors {
                enabled: palette::ACCENT,
                pressed: palette::ACCENT,
                disabled: palette::DISABLED,
            },
            thumb: StateColors::uniform(Color::WHITE),
            thumb_border: StateColors::uniform(Color::TRANSPARENT),
        }
    }
}

impl SliderModel {
    pub fn new(range: ValueRange) -> Self {
        Self {
            range,
            ..Self::default()
        }
    }

    /// Construction-time configuration check
    ///
    /// An inverted range is a contract violation; a degenerate one is legal
    /// but pointless on an interactive control, so it only logs.
    pub fn validate(&self) -> Result<(), RangeError> {
        self.range.validate()?;
        if self.range.is_degenerate() {
            warn!(
                min = self.range.min,
                max = self.range.max,
                "slider range is degenerate, every drag maps to min"
            );
        }
        Ok(())
    }

    /// Geometry for one render pass
    ///
    /// # Arguments
    /// * `value` - Current value, owned by the caller
    /// * `extent` - Track length in pixels
    pub fn geometry(&self, value: f32, extent: f32) -> SliderGeometry {
        let value = self.range.clamp(value);
        let fraction = self.range.fraction(value);
        SliderGeometry {
            fraction,
            fill_width: fraction * extent,
            thumb_offset: self
                .range
                .thumb_offset(value, extent, self.layout.thumb_dimension),
        }
    }

    pub fn track_color(&self, state: Interaction) -> Color {
        self.colors.track.resolve(state)
    }

    pub fn progress_color(&self, state: Interaction) -> Color {
        self.colors.progress.resolve(state)
    }

    pub fn thumb_color(&self, state: Interaction) -> Color {
        self.colors.thumb.resolve(state)
    }

    pub fn thumb_border_color(&self, state: Interaction) -> Color {
        self.colors.thumb_border.resolve(state)
    }
}

/// Resolved per-frame geometry: fraction for the fill, offset for the thumb
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SliderGeometry {
    /// Value's normalized position in the range
    pub fraction: f32,
    /// Width of the filled track portion in pixels
    pub fill_width: f32,
    /// Left edge of the thumb, centered on the progress point
    pub thumb_offset: f32,
}

/// A raw drag event reported by the view layer
///
/// Positions are linear coordinates along the track in the same unit as the
/// extent, already relative to the track origin.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum DragEvent {
    Began { position: f32 },
    Moved { position: f32 },
    Ended,
}

/// Drag state machine for a slider
///
/// Owns only the interaction flags, never the value. Feed it the platform's
/// drag events; every event that lands inside an active drag yields the next
/// value for the caller to store.
#[derive(Debug, Clone, Copy, Default)]
pub struct SliderController {
    interaction: Interaction,
}

impl SliderController {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn interaction(&self) -> Interaction {
        self.interaction
    }

    pub fn set_disabled(&mut self, disabled: bool) {
        self.interaction.set_disabled(disabled);
    }

    pub fn is_dragging(&self) -> bool {
        self.interaction.is_pressed()
    }

    /// Feeds one drag event through the mapper
    ///
    /// Returns the new value when the event produced one. The platform may
    /// abandon a drag without ever sending [`DragEvent::Ended`]; the last
    /// returned value simply stays current, and the next `Began` starts a
    /// fresh drag from wherever the pointer lands.
    pub fn update(&mut self, event: DragEvent, range: &ValueRange, extent: f32) -> Option<f32> {
        match event {
            DragEvent::Began { position } => {
                if !self.interaction.press() {
                    return None;
                }
                debug!(position, extent, "drag began");
                Some(range.value_at(position, extent))
            }
            DragEvent::Moved { position } => {
                if !self.interaction.is_pressed() {
                    // Stray move without a press, e.g. after disabling mid-drag
                    return None;
                }
                Some(range.value_at(position, extent))
            }
            DragEvent::Ended => {
                if self.interaction.release() {
                    debug!("drag ended");
                }
                None
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPSILON: f32 = 1e-5;

    fn assert_close(a: f32, b: f32) {
        assert!((a - b).abs() < EPSILON, "expected {b}, got {a}");
    }

    #[test]
    fn drag_produces_clamped_values() {
        let range = ValueRange::new(0.0, 1.0);
        let mut controller = SliderController::new();

        let value = controller.update(DragEvent::Began { position: 146.0 }, &range, 200.0);
        assert_close(value.unwrap(), 0.73);
        assert!(controller.is_dragging());

        let value = controller.update(DragEvent::Moved { position: 260.0 }, &range, 200.0);
        assert_close(value.unwrap(), 1.0);

        assert_eq!(controller.update(DragEvent::Ended, &range, 200.0), None);
        assert!(!controller.is_dragging());
    }

    #[test]
    fn repeated_moves_at_one_position_agree() {
        let range = ValueRange::new(0.0, 10.0).with_step(0.5);
        let mut controller = SliderController::new();
        controller.update(DragEvent::Began { position: 33.0 }, &range, 100.0);

        let first = controller.update(DragEvent::Moved { position: 33.0 }, &range, 100.0);
        let second = controller.update(DragEvent::Moved { position: 33.0 }, &range, 100.0);
        assert_eq!(first, second);
    }

    #[test]
    fn abandoned_drag_keeps_last_value_and_allows_a_new_one() {
        let range = ValueRange::new(0.0, 1.0);
        let mut controller = SliderController::new();

        controller.update(DragEvent::Began { position: 50.0 }, &range, 200.0);
        let last = controller.update(DragEvent::Moved { position: 80.0 }, &range, 200.0);
        assert_close(last.unwrap(), 0.4);

        // Gesture interrupted: no Ended ever arrives. The next press still
        // starts a drag and produces values.
        let value = controller.update(DragEvent::Began { position: 100.0 }, &range, 200.0);
        assert_close(value.unwrap(), 0.5);
    }

    #[test]
    fn disabled_slider_ignores_drags() {
        let range = ValueRange::new(0.0, 1.0);
        let mut controller = SliderController::new();
        controller.set_disabled(true);

        assert_eq!(
            controller.update(DragEvent::Began { position: 50.0 }, &range, 200.0),
            None
        );
        assert_eq!(
            controller.update(DragEvent::Moved { position: 80.0 }, &range, 200.0),
            None
        );
        assert!(!controller.is_dragging());
    }

    #[test]
    fn disabling_mid_drag_stops_value_updates() {
        let range = ValueRange::new(0.0, 1.0);
        let mut controller = SliderController::new();
        controller.update(DragEvent::Began { position: 50.0 }, &range, 200.0);

        controller.set_disabled(true);
        assert_eq!(
            controller.update(DragEvent::Moved { position: 80.0 }, &range, 200.0),
            None
        );
    }

    #[test]
    fn geometry_centers_the_thumb() {
        let model = SliderModel::default();
        let geometry = model.geometry(0.5, 200.0);
        assert_close(geometry.fraction, 0.5);
        assert_close(geometry.fill_width, 100.0);
        assert_close(geometry.thumb_offset, 90.0);
    }

    #[test]
    fn geometry_clamps_out_of_range_values() {
        let model = SliderModel::new(ValueRange::new(0.0, 1.0));
        let geometry = model.geometry(3.0, 200.0);
        assert_close(geometry.fraction, 1.0);
        assert_close(geometry.fill_width, 200.0);
    }

    #[test]
    fn validate_accepts_default_and_rejects_inverted() {
        assert!(SliderModel::default().validate().is_ok());
        let inverted = SliderModel::new(ValueRange::new(5.0, 1.0));
        assert!(inverted.validate().is_err());
    }
}
