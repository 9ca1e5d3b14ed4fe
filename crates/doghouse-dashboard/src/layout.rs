//! Grid and ordered layout computation.
//!
//! Callers declare [`Row`]s (a vertical offset, a height, and the widgets
//! that share the row); [`grid`] turns them into explicit layout cells
//! over a 12-column grid, [`ordered`] flattens them for documents where
//! the consuming system auto-flows positions.
//!
//! Rows stack by their caller-chosen offsets. The engine does not detect
//! overlap between rows; overlapping offsets are a caller error.

use serde::{Deserialize, Serialize};
use serde_json::{json, Value};

use crate::defaults::GRID_COLUMNS;
use crate::error::{DashboardError, Result};
use crate::widget::Widget;

/// The positioning assignment for one widget in a grid document.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct LayoutCell {
    /// Column offset from the left edge.
    pub x: u32,
    /// Row offset from the top edge.
    pub y: u32,
    /// Width in columns.
    pub width: u32,
    /// Height in rows.
    pub height: u32,
}

impl LayoutCell {
    /// Creates a layout cell.
    ///
    /// # Errors
    ///
    /// Returns `DashboardError::InvalidCell` if width or height is zero.
    pub fn new(x: u32, y: u32, width: u32, height: u32) -> Result<Self> {
        if width == 0 {
            return Err(DashboardError::InvalidCell {
                reason: "width must be positive".to_string(),
            });
        }
        if height == 0 {
            return Err(DashboardError::InvalidCell {
                reason: "height must be positive".to_string(),
            });
        }
        Ok(Self {
            x,
            y,
            width,
            height,
        })
    }

    /// Serializes the cell into its wire object.
    #[must_use]
    pub fn to_value(self) -> Value {
        json!({
            "x": self.x,
            "y": self.y,
            "width": self.width,
            "height": self.height,
        })
    }
}

/// One declared row of widgets, consumed by the layout engine.
///
/// Not part of the output document: [`grid`] turns rows into
/// [`LayoutCell`]s, [`ordered`] discards the grouping.
#[derive(Debug, Clone)]
pub struct Row {
    y_offset: u32,
    height: u32,
    widgets: Vec<Widget>,
}

impl Row {
    /// Creates a row at the given vertical offset.
    ///
    /// # Errors
    ///
    /// Returns `DashboardError::InvalidRow` if the height is zero or the
    /// row holds more widgets than the grid has columns (every widget
    /// needs a positive width, so more than 12 cannot fit).
    pub fn new(y_offset: u32, height: u32, widgets: Vec<Widget>) -> Result<Self> {
        if height == 0 {
            return Err(DashboardError::InvalidRow {
                reason: "height must be positive".to_string(),
            });
        }
        if widgets.len() > GRID_COLUMNS as usize {
            return Err(DashboardError::InvalidRow {
                reason: format!(
                    "{} widgets exceed the {GRID_COLUMNS}-column capacity",
                    widgets.len()
                ),
            });
        }
        Ok(Self {
            y_offset,
            height,
            widgets,
        })
    }

    /// Creates a single-widget row spanning the full grid width.
    ///
    /// # Errors
    ///
    /// Returns `DashboardError::InvalidRow` if the height is zero.
    pub fn full_width(y_offset: u32, height: u32, widget: Widget) -> Result<Self> {
        Self::new(y_offset, height, vec![widget])
    }

    /// Returns the row's vertical offset.
    #[must_use]
    pub const fn y_offset(&self) -> u32 {
        self.y_offset
    }

    /// Returns the row's height.
    #[must_use]
    pub const fn height(&self) -> u32 {
        self.height
    }

    /// Returns the number of widgets in the row.
    #[must_use]
    pub fn len(&self) -> usize {
        self.widgets.len()
    }

    /// Returns true if the row holds no widgets.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.widgets.is_empty()
    }
}

/// Splits the grid capacity evenly over `n` widgets, leftmost-first.
///
/// The remainder of `12 mod n` is distributed one extra column to the
/// first widgets, so the widths always sum exactly to the capacity:
/// 5 widgets yield `[3, 3, 2, 2, 2]`.
fn split_columns(n: usize) -> Vec<u32> {
    let n_u32 = n as u32;
    let base = GRID_COLUMNS / n_u32;
    let remainder = (GRID_COLUMNS % n_u32) as usize;
    (0..n)
        .map(|i| if i < remainder { base + 1 } else { base })
        .collect()
}

/// Positions rows of widgets onto the grid.
///
/// Every widget in a row receives the row's `y_offset` and `height`; the
/// widths divide the 12 columns evenly with the remainder going to the
/// leftmost widgets, and `x` accumulates left to right. Empty rows
/// contribute nothing. Output order equals declaration order.
#[must_use]
pub fn grid(rows: Vec<Row>) -> Vec<Widget> {
    let mut positioned = Vec::new();
    for row in rows {
        if row.widgets.is_empty() {
            continue;
        }
        let widths = split_columns(row.widgets.len());
        let mut x = 0;
        for (mut widget, width) in row.widgets.into_iter().zip(widths) {
            widget.set_layout(LayoutCell {
                x,
                y: row.y_offset,
                width,
                height: row.height,
            });
            x += width;
            positioned.push(widget);
        }
    }
    positioned
}

/// Flattens rows into a single widget sequence with no coordinates.
///
/// Declaration order is preserved: rows in order, widgets within a row in
/// order.
#[must_use]
pub fn ordered(rows: Vec<Row>) -> Vec<Widget> {
    rows.into_iter().flat_map(|row| row.widgets).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::builders::decoration::{note, NoteOptions};
    use proptest::prelude::*;

    fn notes(n: usize) -> Vec<Widget> {
        (0..n)
            .map(|i| note(format!("note {i}"), &NoteOptions::default()))
            .collect()
    }

    #[test]
    fn cell_rejects_zero_width() {
        let cell = LayoutCell::new(0, 0, 0, 2);
        match cell {
            Err(DashboardError::InvalidCell { reason }) => {
                assert!(reason.contains("width"));
            }
            _ => panic!("expected InvalidCell error"),
        }
    }

    #[test]
    fn cell_rejects_zero_height() {
        assert!(LayoutCell::new(0, 0, 4, 0).is_err());
    }

    #[test]
    fn row_rejects_zero_height() {
        let row = Row::new(0, 0, notes(2));
        match row {
            Err(DashboardError::InvalidRow { reason }) => {
                assert!(reason.contains("height"));
            }
            _ => panic!("expected InvalidRow error"),
        }
    }

    #[test]
    fn row_rejects_more_widgets_than_columns() {
        let row = Row::new(0, 2, notes(13));
        match row {
            Err(DashboardError::InvalidRow { reason }) => {
                assert!(reason.contains("13 widgets"));
            }
            _ => panic!("expected InvalidRow error"),
        }
    }

    #[test]
    fn row_accepts_exactly_twelve_widgets() {
        let row = Row::new(0, 2, notes(12)).unwrap();
        let positioned = grid(vec![row]);
        assert_eq!(positioned.len(), 12);
        for widget in &positioned {
            assert_eq!(widget.layout().unwrap().width, 1);
        }
    }

    #[test]
    fn single_widget_row_spans_full_width() {
        let row = Row::full_width(0, 3, notes(1).remove(0)).unwrap();
        let positioned = grid(vec![row]);
        let cell = positioned[0].layout().unwrap();
        assert_eq!(cell.x, 0);
        assert_eq!(cell.width, 12);
        assert_eq!(cell.height, 3);
    }

    #[test]
    fn five_widget_row_splits_three_three_two_two_two() {
        let row = Row::new(4, 2, notes(5)).unwrap();
        let positioned = grid(vec![row]);

        let widths: Vec<u32> = positioned
            .iter()
            .map(|w| w.layout().unwrap().width)
            .collect();
        assert_eq!(widths, vec![3, 3, 2, 2, 2]);

        let xs: Vec<u32> = positioned.iter().map(|w| w.layout().unwrap().x).collect();
        assert_eq!(xs, vec![0, 3, 6, 8, 10]);
    }

    #[test]
    fn row_offset_and_height_apply_uniformly() {
        let row = Row::new(6, 4, notes(3)).unwrap();
        let positioned = grid(vec![row]);
        for widget in &positioned {
            let cell = widget.layout().unwrap();
            assert_eq!(cell.y, 6);
            assert_eq!(cell.height, 4);
        }
    }

    #[test]
    fn empty_row_contributes_nothing() {
        let rows = vec![
            Row::new(0, 2, vec![]).unwrap(),
            Row::new(2, 2, notes(2)).unwrap(),
        ];
        let positioned = grid(rows);
        assert_eq!(positioned.len(), 2);
        assert_eq!(positioned[0].layout().unwrap().y, 2);
    }

    #[test]
    fn grid_preserves_declaration_order() {
        let first = note("first", &NoteOptions::default());
        let second = note("second", &NoteOptions::default());
        let third = note("third", &NoteOptions::default());

        let rows = vec![
            Row::new(0, 2, vec![first, second]).unwrap(),
            Row::full_width(2, 2, third).unwrap(),
        ];
        let positioned = grid(rows);

        let contents: Vec<&str> = positioned
            .iter()
            .map(|w| w.definition()["content"].as_str().unwrap())
            .collect();
        assert_eq!(contents, vec!["first", "second", "third"]);
    }

    #[test]
    fn ordered_flattens_without_coordinates() {
        let rows = vec![
            Row::new(0, 2, notes(2)).unwrap(),
            Row::new(2, 2, notes(3)).unwrap(),
        ];
        let flat = ordered(rows);
        assert_eq!(flat.len(), 5);
        for widget in &flat {
            assert!(widget.layout().is_none());
        }
    }

    proptest! {
        #[test]
        fn row_widths_always_sum_to_capacity(n in 1usize..=12) {
            let row = Row::new(0, 2, notes(n)).unwrap();
            let positioned = grid(vec![row]);

            let total: u32 = positioned.iter().map(|w| w.layout().unwrap().width).sum();
            prop_assert_eq!(total, GRID_COLUMNS);
        }

        #[test]
        fn row_x_offsets_are_strictly_increasing(n in 2usize..=12) {
            let row = Row::new(0, 2, notes(n)).unwrap();
            let positioned = grid(vec![row]);

            for pair in positioned.windows(2) {
                let left = pair[0].layout().unwrap();
                let right = pair[1].layout().unwrap();
                prop_assert!(left.x < right.x);
                prop_assert_eq!(left.x + left.width, right.x);
            }
        }

        #[test]
        fn leftmost_widgets_absorb_the_remainder(n in 1usize..=12) {
            let row = Row::new(0, 2, notes(n)).unwrap();
            let positioned = grid(vec![row]);

            let widths: Vec<u32> = positioned.iter().map(|w| w.layout().unwrap().width).collect();
            for pair in widths.windows(2) {
                prop_assert!(pair[0] >= pair[1]);
                prop_assert!(pair[0] - pair[1] <= 1);
            }
        }
    }
}
