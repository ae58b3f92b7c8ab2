//! Bounded value mapping for slider-like controls
//!
//! Maps raw drag coordinates into a configured `[min, max]` range, optionally
//! snapped to a step lattice, and maps values back into normalized fractions
//! and pixel offsets for rendering. Shared by the slider (interactive) and
//! the progress bar (display-only).

use thiserror::Error;

/// Error raised when a range is configured inside-out.
///
/// Mapping functions themselves never fail; this only surfaces from the
/// construction-time validators.
#[derive(Debug, Clone, Copy, PartialEq, Error)]
pub enum RangeError {
    #[error("range minimum {min} exceeds maximum {max}")]
    Inverted { min: f32, max: f32 },
}

/// A closed numeric range with an optional quantization step
///
/// Immutable configuration for a control. The current value is owned by the
/// caller; this type only transforms it.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ValueRange {
    pub min: f32,
    pub max: f32,
    /// Quantization increment measured from `min`. Non-positive steps are
    /// treated as "no step" (continuous values).
    pub step: Option<f32>,
}

impl ValueRange {
    /// Creates a continuous range
    pub const fn new(min: f32, max: f32) -> Self {
        Self {
            min,
            max,
            step: None,
        }
    }

    /// Sets the quantization step
    pub const fn with_step(mut self, step: f32) -> Self {
        self.step = Some(step);
        self
    }

    /// Checks the `min <= max` contract
    ///
    /// Call this when constructing the owning control; the mapping functions
    /// below stay total either way.
    pub fn validate(&self) -> Result<(), RangeError> {
        if self.min <= self.max {
            Ok(())
        } else {
            Err(RangeError::Inverted {
                min: self.min,
                max: self.max,
            })
        }
    }

    /// Full width of the range (0 when degenerate)
    pub fn span(&self) -> f32 {
        self.max - self.min
    }

    /// Whether the range cannot represent more than one value
    pub fn is_degenerate(&self) -> bool {
        self.span() <= 0.0
    }

    fn effective_step(&self) -> Option<f32> {
        self.step.filter(|step| *step > 0.0)
    }

    /// Clamps a value into the range and snaps it onto the step lattice
    ///
    /// Snapping always rounds toward the lower multiple of the step measured
    /// from `min`, then re-clamps so floating-point overshoot can never land
    /// past `max`. Out-of-range inputs are normalized, not rejected.
    pub fn clamp(&self, value: f32) -> f32 {
        let clamped = value.max(self.min).min(self.max);

        match self.effective_step() {
            Some(step) => {
                // f64 keeps the division stable for small steps
                let steps = (f64::from(clamped) - f64::from(self.min)) / f64::from(step);
                // Values already sitting on the lattice must stay put, so a
                // result within float tolerance of a multiple counts as that
                // multiple instead of being floored down a whole step.
                let nearest = steps.round();
                let k = if (steps - nearest).abs() < 1e-6 {
                    nearest
                } else {
                    steps.floor()
                };
                let snapped = f64::from(self.min) + k * f64::from(step);
                (snapped as f32).max(self.min).min(self.max)
            }
            None => clamped,
        }
    }

    /// Converts a raw drag coordinate into a value
    ///
    /// # Arguments
    /// * `position` - Linear coordinate along the track (e.g. pixels)
    /// * `extent` - Total track length in the same unit
    ///
    /// Pure per-event mapping: feeding the same position twice yields the
    /// same value, so repeated drag updates cannot drift. A non-positive
    /// extent is treated as position 0.
    pub fn value_at(&self, position: f32, extent: f32) -> f32 {
        let raw = if extent > 0.0 {
            (position / extent) * self.span()
        } else {
            0.0
        };
        self.clamp(raw)
    }

    /// Value's proportional location in the range, 0 at `min` and 1 at `max`
    ///
    /// Degenerate ranges report 0 rather than dividing by zero.
    pub fn fraction(&self, value: f32) -> f32 {
        let span = self.span();
        if span <= 0.0 {
            0.0
        } else {
            (value - self.min) / span
        }
    }

    /// Pixel offset of a thumb centered on the progress point
    ///
    /// # Arguments
    /// * `extent` - Track length in pixels
    /// * `thumb_extent` - Thumb length along the track axis
    pub fn thumb_offset(&self, value: f32, extent: f32, thumb_extent: f32) -> f32 {
        self.fraction(value) * extent - thumb_extent / 2.0
    }
}
