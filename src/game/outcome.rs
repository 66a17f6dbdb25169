//! Results of engine operations.
//!
//! No-ops are ordinary outcomes rather than errors, so a UI can tell
//! "nothing selected" from "tile is blocked" without matching on errors.

use serde::{Deserialize, Serialize};

use crate::core::{BoardSize, Position};
use crate::rules::{GameStatus, Spawn};

/// Result of [`GameState::select`](super::GameState::select).
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum SelectOutcome {
    /// The tile at this position is now selected.
    Selected(Position),
    /// The already-selected tile was clicked again and is no longer selected.
    Deselected,
    /// The cell was empty; selection is unchanged.
    IgnoredEmpty,
}

/// Details of a move that changed the board.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct MoveReport {
    pub from: Position,
    pub to: Position,
    /// Value of the merged tile, if the move merged.
    pub merged: Option<u32>,
    /// Score added by this move.
    pub gained: u64,
    /// Tile spawned after the move. `None` only if the board was full.
    pub spawned: Option<Spawn>,
    /// Status after the move.
    pub status: GameStatus,
    /// Whether this move raised the best score.
    pub new_best: bool,
}

/// Result of [`GameState::move_selected`](super::GameState::move_selected).
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum MoveOutcome {
    /// Nothing was selected.
    NoSelection,
    /// The selected tile could not take a single step.
    Blocked,
    /// The game is lost; no move can apply.
    GameOver,
    /// The tile moved (and possibly merged), and a new tile spawned.
    Moved(MoveReport),
}

impl MoveOutcome {
    /// Did the board change?
    #[must_use]
    pub fn moved(&self) -> bool {
        matches!(self, MoveOutcome::Moved(_))
    }

    /// Report of a board-changing move.
    #[must_use]
    pub fn report(&self) -> Option<&MoveReport> {
        match self {
            MoveOutcome::Moved(report) => Some(report),
            _ => None,
        }
    }
}

/// Result of [`GameState::apply`](super::GameState::apply).
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum CommandOutcome {
    Select(SelectOutcome),
    Deselected,
    Move(MoveOutcome),
    Restarted,
    Resized(BoardSize),
}
