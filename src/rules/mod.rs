//! Movement, spawn and termination rules.
//!
//! These are free functions over a `Board`:
//! - `plan_slide` / `apply_slide`: walk one tile, merging at most once
//! - `spawn`: drop a 2 or 4 into a random empty cell
//! - `has_any_move` / `evaluate`: detect Won and Lost boards
//!
//! `GameState` in the `game` module sequences them into a full move.

pub mod slide;
pub mod spawn;
pub mod status;

pub use slide::{apply_slide, can_step, plan_slide, Slide};
pub use spawn::{spawn, Spawn};
pub use status::{evaluate, has_any_move, GameStatus};
