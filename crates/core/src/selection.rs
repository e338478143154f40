use serde::{Deserialize, Serialize};

use crate::position::CellPosition;

/// A rectangular range of cells, inclusive on both ends.
///
/// `start` and `end` are opposite corners in any order; `start` may sit
/// below/right of `end`. Use [`CellRange::normalized`] when a top-left
/// origin is needed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct CellRange {
    pub start: CellPosition,
    pub end: CellPosition,
}

impl CellRange {
    pub fn new(start: CellPosition, end: CellPosition) -> Self {
        Self { start, end }
    }

    /// Create a single-cell range.
    pub fn single(col: i32, row: i32) -> Self {
        let pos = CellPosition::new(col, row);
        Self { start: pos, end: pos }
    }

    /// Copy of this range with `start` at the top-left corner.
    pub fn normalized(&self) -> Self {
        Self {
            start: CellPosition::new(self.start.col.min(self.end.col), self.start.row.min(self.end.row)),
            end: CellPosition::new(self.start.col.max(self.end.col), self.start.row.max(self.end.row)),
        }
    }

    /// Check if this range contains a cell.
    pub fn contains(&self, col: i32, row: i32) -> bool {
        let n = self.normalized();
        col >= n.start.col && col <= n.end.col && row >= n.start.row && row <= n.end.row
    }

    /// Exactly one cell: both corners coincide.
    ///
    /// Deliberately corner-exact rather than area-based; a collapsed range
    /// entered backwards still counts, a 1x1 drawn any other way does not
    /// exist.
    pub fn is_single(&self) -> bool {
        self.start == self.end
    }

    /// Number of cells in this range.
    pub fn cell_count(&self) -> usize {
        let n = self.normalized();
        ((n.end.row - n.start.row + 1) * (n.end.col - n.start.col + 1)) as usize
    }
}

/// The selection model: an active cell plus an ordered list of ranges.
///
/// Invariant: when `ranges` is non-empty, `cell_pos` lies inside their
/// union (it is the anchor of the most recent range). The mutators below
/// maintain this; nothing else may write the fields.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SelectionState {
    cell_pos: CellPosition,
    ranges: Vec<CellRange>,
}

impl SelectionState {
    pub fn new() -> Self {
        Self::default()
    }

    /// The active cell, `CellPosition::NONE` when nothing is selected.
    pub fn cell_pos(&self) -> CellPosition {
        self.cell_pos
    }

    /// All selected ranges, in selection order.
    pub fn ranges(&self) -> &[CellRange] {
        &self.ranges
    }

    /// Check if a cell is selected.
    pub fn contains(&self, col: i32, row: i32) -> bool {
        self.ranges.iter().any(|r| r.contains(col, row))
    }

    /// Exactly one range, and that range is a single cell.
    pub fn is_single_cell(&self) -> bool {
        self.ranges.len() == 1 && self.ranges[0].is_single()
    }

    /// Set selection to a single cell, collapsing any prior ranges.
    ///
    /// Coordinates must already be in-bounds; clamping is the caller's job.
    pub fn select_cell(&mut self, col: i32, row: i32) {
        self.cell_pos = CellPosition::new(col, row);
        self.ranges = vec![CellRange::single(col, row)];
    }

    /// Replace the selection with one range, anchored at its start corner.
    pub fn select_range(&mut self, range: CellRange) {
        self.cell_pos = range.start;
        self.ranges = vec![range];
    }

    /// Add a range to the selection, moving the anchor to its start corner.
    pub fn add_range(&mut self, range: CellRange) {
        self.cell_pos = range.start;
        self.ranges.push(range);
    }

    /// Select the entire grid. No-op on an empty grid.
    pub fn select_all(&mut self, col_count: i32, row_count: i32) {
        if col_count <= 0 || row_count <= 0 {
            return;
        }
        self.cell_pos = CellPosition::new(0, 0);
        self.ranges = vec![CellRange::new(
            CellPosition::new(0, 0),
            CellPosition::new(col_count - 1, row_count - 1),
        )];
    }

    /// Back to no selection at all.
    pub fn clear(&mut self) {
        self.cell_pos = CellPosition::NONE;
        self.ranges.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_range_single() {
        let r = CellRange::single(3, 5);
        assert!(r.contains(3, 5));
        assert!(!r.contains(4, 5));
        assert!(r.is_single());
        assert_eq!(r.cell_count(), 1);
    }

    #[test]
    fn test_range_reversed_corners() {
        // start below/right of end is legal and contains the same cells
        let r = CellRange::new(CellPosition::new(5, 5), CellPosition::new(1, 1));
        assert!(r.contains(1, 1));
        assert!(r.contains(3, 2));
        assert!(r.contains(5, 5));
        assert!(!r.contains(0, 0));
        assert_eq!(r.normalized().start, CellPosition::new(1, 1));
        assert_eq!(r.normalized().end, CellPosition::new(5, 5));
        assert_eq!(r.cell_count(), 25);
    }

    #[test]
    fn test_select_cell_collapses_ranges() {
        let mut sel = SelectionState::new();
        sel.select_all(10, 10);
        sel.select_cell(2, 3);
        assert_eq!(sel.cell_pos(), CellPosition::new(2, 3));
        assert_eq!(sel.ranges().len(), 1);
        assert!(sel.is_single_cell());
    }

    #[test]
    fn test_add_range_moves_anchor() {
        let mut sel = SelectionState::new();
        sel.select_cell(0, 0);
        sel.add_range(CellRange::new(CellPosition::new(2, 2), CellPosition::new(4, 3)));
        assert_eq!(sel.ranges().len(), 2);
        assert_eq!(sel.cell_pos(), CellPosition::new(2, 2));
        assert!(sel.contains(0, 0));
        assert!(sel.contains(3, 3));
        assert!(!sel.is_single_cell());
    }

    #[test]
    fn test_select_all_covers_grid() {
        let mut sel = SelectionState::new();
        sel.select_all(5, 10);
        assert_eq!(sel.cell_pos(), CellPosition::new(0, 0));
        assert!(sel.contains(0, 0));
        assert!(sel.contains(4, 9));
        assert!(!sel.contains(5, 9));
        assert!(!sel.is_single_cell());
    }

    #[test]
    fn test_select_all_empty_grid_is_noop() {
        let mut sel = SelectionState::new();
        sel.select_all(0, 10);
        assert_eq!(sel.cell_pos(), CellPosition::NONE);
        assert!(sel.ranges().is_empty());
    }

    #[test]
    fn test_clear() {
        let mut sel = SelectionState::new();
        sel.select_cell(1, 1);
        sel.clear();
        assert_eq!(sel.cell_pos(), CellPosition::NONE);
        assert!(sel.ranges().is_empty());
    }
}
