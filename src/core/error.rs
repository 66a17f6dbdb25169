//! Engine error types.
//!
//! Only configuration and addressing mistakes are errors. Benign no-ops
//! (moving with nothing selected, sliding into a wall, selecting an empty
//! cell) are reported through outcome enums instead.

use super::config::{MAX_BOARD_SIZE, MIN_BOARD_SIZE};

/// Errors raised by the board engine.
#[derive(thiserror::Error, Debug, Clone, PartialEq)]
pub enum EngineError {
    #[error("board size {size} is outside {}..={}", MIN_BOARD_SIZE, MAX_BOARD_SIZE)]
    InvalidBoardSize { size: usize },

    #[error("position ({row}, {col}) is outside a {size}x{size} board")]
    InvalidPosition { row: usize, col: usize, size: usize },

    #[error("win target must be at least 1, got {0}")]
    InvalidTarget(u32),

    #[error("spawn probability must be within [0, 1], got {0}")]
    InvalidSpawnProbability(f64),

    #[error("cell ({row}, {col}) holds {value}, which is not 0 or a power of two >= 2")]
    InvalidTile { row: usize, col: usize, value: u32 },

    #[error("board rows are not square: {rows} rows, row of {cols} cells")]
    NotSquare { rows: usize, cols: usize },
}
