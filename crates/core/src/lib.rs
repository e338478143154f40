pub mod position;
pub mod selection;

pub use position::CellPosition;
pub use selection::{CellRange, SelectionState};
