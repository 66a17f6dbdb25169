//! Player commands.
//!
//! Each input event from a UI maps to exactly one `Command`, and each
//! `Command` to exactly one engine operation.

use serde::{Deserialize, Serialize};

use crate::core::{Direction, Position};

/// A single player input.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Command {
    /// Select (or toggle off) the tile at a position.
    Select { position: Position },
    /// Clear the selection.
    Deselect,
    /// Slide the selected tile.
    Move { direction: Direction },
    /// Fresh board of the current size.
    Restart,
    /// Fresh board of a new size.
    Resize { size: usize },
}

impl Command {
    /// Shorthand for `Command::Select`.
    #[must_use]
    pub const fn select(row: usize, col: usize) -> Self {
        Command::Select {
            position: Position::new(row, col),
        }
    }

    /// Shorthand for `Command::Move`.
    #[must_use]
    pub const fn slide(direction: Direction) -> Self {
        Command::Move { direction }
    }
}
