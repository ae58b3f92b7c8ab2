//! List control
//!
//! Row layout arithmetic for a separated list: row heights, separator
//! placement, and total content height. The view layer renders rows however
//! it likes; this only answers where they go.

use iced::Color;

use crate::style::palette;

/// List configuration
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ListModel {
    pub row_height: f32,
    pub separator_height: f32,
    /// Leading/trailing inset of each separator line
    pub separator_margin: f32,
    pub separator_color: Color,
}

impl Default for ListModel {
    fn default() -> Self {
        Self {
            row_height: 44.0,
            separator_height: 1.0,
            separator_margin: 15.0,
            separator_color: palette::DIVIDER,
        }
    }
}

impl ListModel {
    /// Separators sit between rows, so there is one fewer than rows
    pub fn separator_count(&self, rows: usize) -> usize {
        rows.saturating_sub(1)
    }

    /// Total content height for `rows` rows
    pub fn content_height(&self, rows: usize) -> f32 {
        rows as f32 * self.row_height + self.separator_count(rows) as f32 * self.separator_height
    }

    /// Top edge of the row at `index`
    pub fn row_offset(&self, index: usize) -> f32 {
        index as f32 * (self.row_height + self.separator_height)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_list_has_no_height() {
        let model = ListModel::default();
        assert_eq!(model.content_height(0), 0.0);
        assert_eq!(model.separator_count(0), 0);
    }

    #[test]
    fn separators_sit_between_rows() {
        let model = ListModel::default();
        assert_eq!(model.separator_count(1), 0);
        assert_eq!(model.separator_count(4), 3);
        // 3 rows of 44 plus 2 separators of 1
        assert_eq!(model.content_height(3), 134.0);
    }

    #[test]
    fn row_offsets_stack_rows_and_separators() {
        let model = ListModel::default();
        assert_eq!(model.row_offset(0), 0.0);
        assert_eq!(model.row_offset(2), 90.0);
    }
}
