//! The tile grid.

pub mod grid;

pub use grid::{is_cell_value, Board, EmptyCells};
