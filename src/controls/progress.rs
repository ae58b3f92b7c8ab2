//! Progress bar control
//!
//! Display-only counterpart of the slider. There is no interaction state;
//! the caller supplies a total and a current amount and the model maps them
//! through the same range engine the slider uses.

use iced::Color;

use crate::range::ValueRange;
use crate::style::palette;

/// Progress bar configuration
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ProgressBarModel {
    pub layout: ProgressBarLayout,
    pub colors: ProgressBarColors,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ProgressBarLayout {
    /// Bar height in pixels
    pub height: f32,
    pub corner_radius: f32,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ProgressBarColors {
    pub track: Color,
    pub fill: Color,
}

impl Default for ProgressBarModel {
    fn default() -> Self {
        Self {
            layout: ProgressBarLayout {
                height: 10.0,
                corner_radius: 5.0,
            },
            colors: ProgressBarColors {
                track: palette::SURFACE_LIGHT,
                fill: palette::ACCENT,
            },
        }
    }
}

impl ProgressBarModel {
    /// Completed share of `total`, in `[0, 1]`
    ///
    /// Negative and overshooting currents are clamped; a non-positive total
    /// reports 0 (nothing to complete yet).
    pub fn fraction(total: f32, current: f32) -> f32 {
        let range = ValueRange::new(0.0, total.max(0.0));
        range.fraction(range.clamp(current))
    }

    /// Width of the fill rectangle for a track of the given extent
    pub fn fill_width(&self, total: f32, current: f32, extent: f32) -> f32 {
        Self::fraction(total, current) * extent
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
    fn fraction_is_current_over_total() {
        assert_close(ProgressBarModel::fraction(10.0, 2.5), 0.25);
        assert_close(ProgressBarModel::fraction(10.0, 0.0), 0.0);
        assert_close(ProgressBarModel::fraction(10.0, 10.0), 1.0);
    }

    #[test]
    fn fraction_clamps_out_of_range_progress() {
        assert_close(ProgressBarModel::fraction(10.0, -3.0), 0.0);
        assert_close(ProgressBarModel::fraction(10.0, 14.0), 1.0);
    }

    #[test]
    fn empty_total_reports_zero() {
        assert_close(ProgressBarModel::fraction(0.0, 5.0), 0.0);
        assert_close(ProgressBarModel::fraction(-1.0, 5.0), 0.0);
    }

    #[test]
    fn fill_width_scales_with_extent() {
        let model = ProgressBarModel::default();
        assert_close(model.fill_width(100.0, 50.0, 400.0), 200.0);
        assert_close(model.fill_width(100.0, 120.0, 400.0), 400.0);
    }
}
