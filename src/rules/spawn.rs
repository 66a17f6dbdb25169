//! Random tile spawning.

use serde::{Deserialize, Serialize};

use crate::board::Board;
use crate::core::{GameRng, Position};

/// A tile placed by [`spawn`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Spawn {
    pub position: Position,
    pub value: u32,
}

/// Place a 2 (or a 4 with `four_probability`) in a uniformly random empty cell.
///
/// Returns `None` and leaves the board alone when it is full.
pub fn spawn(board: &mut Board, rng: &mut GameRng, four_probability: f64) -> Option<Spawn> {
    let empty = board.empty_cells();
    let position = *rng.choose(&empty)?;
    let value = if rng.gen_bool(four_probability) { 4 } else { 2 };
    board.set(position, value);

    log::debug!("spawned {value} at {position}");
    Some(Spawn { position, value })
}
