//! Win/lose detection.

use serde::{Deserialize, Serialize};

use super::slide::can_step;
use crate::board::Board;
use crate::core::Direction;

/// Game progress.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum GameStatus {
    #[default]
    InProgress,
    /// Some tile reached the target.
    Won,
    /// Board is full and no tile can move.
    Lost,
}

impl GameStatus {
    /// True for `Won` and `Lost`.
    #[must_use]
    pub fn is_over(self) -> bool {
        !matches!(self, GameStatus::InProgress)
    }
}

impl std::fmt::Display for GameStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let text = match self {
            GameStatus::InProgress => "in progress",
            GameStatus::Won => "won",
            GameStatus::Lost => "lost",
        };
        f.write_str(text)
    }
}

/// Check whether any tile has a legal single step in any direction.
///
/// A step is legal into an empty neighbour or onto an equal neighbour.
/// Only the immediate neighbour is inspected: every longer slide starts
/// with such a step.
#[must_use]
pub fn has_any_move(board: &Board) -> bool {
    board
        .iter()
        .filter(|&(_, v)| v != 0)
        .any(|(pos, _)| Direction::ALL.iter().any(|&dir| can_step(board, pos, dir)))
}

/// Classify a board.
///
/// Winning takes precedence: a full, stuck board that holds the target is
/// `Won`.
#[must_use]
pub fn evaluate(board: &Board, target: u32) -> GameStatus {
    if board.max_tile() >= target {
        GameStatus::Won
    } else if board.is_full() && !has_any_move(board) {
        GameStatus::Lost
    } else {
        GameStatus::InProgress
    }
}
