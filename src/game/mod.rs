//! Game state and command dispatch.
//!
//! - `GameState`: owned board + selection + scores + status
//! - `Command`: one player input
//! - `SelectOutcome`, `MoveOutcome`, `CommandOutcome`: what an input did

pub mod command;
pub mod outcome;
pub mod state;

pub use command::Command;
pub use outcome::{CommandOutcome, MoveOutcome, MoveReport, SelectOutcome};
pub use state::{GameState, GameView};
