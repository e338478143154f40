use serde::{Deserialize, Serialize};

/// A cell coordinate in grid space. `-1` on either axis means "no cell".
///
/// Positions are never validated against grid bounds here; callers clamp
/// before constructing one (the interaction layer owns that policy).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct CellPosition {
    #[serde(default = "none_axis")]
    pub col: i32,
    #[serde(default = "none_axis")]
    pub row: i32,
}

fn none_axis() -> i32 {
    -1
}

impl CellPosition {
    /// The "no selection" sentinel.
    pub const NONE: CellPosition = CellPosition { col: -1, row: -1 };

    pub fn new(col: i32, row: i32) -> Self {
        Self { col, row }
    }

    /// True when both axes point at a real cell.
    pub fn is_some(&self) -> bool {
        self.col >= 0 && self.row >= 0
    }
}

impl Default for CellPosition {
    fn default() -> Self {
        Self::NONE
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_none_sentinel() {
        assert!(!CellPosition::NONE.is_some());
        assert_eq!(CellPosition::default(), CellPosition::NONE);
    }

    #[test]
    fn test_partial_sentinel_is_not_some() {
        // A row-only selection (e.g. header hit) is still "no cell".
        assert!(!CellPosition::new(-1, 3).is_some());
        assert!(!CellPosition::new(3, -1).is_some());
        assert!(CellPosition::new(0, 0).is_some());
    }
}
