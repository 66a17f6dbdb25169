//! Core engine types: positions, directions, configuration, RNG, errors.
//!
//! Nothing here knows about tiles or scoring; the board and rules modules
//! build on these.

pub mod config;
pub mod error;
pub mod position;
pub mod rng;

pub use config::{
    BoardSize, ConfigError, GameConfig, DEFAULT_BOARD_SIZE, DEFAULT_SPAWN_FOUR_PROBABILITY,
    DEFAULT_TARGET, MAX_BOARD_SIZE, MIN_BOARD_SIZE,
};
pub use error::EngineError;
pub use position::{Direction, Position};
pub use rng::GameRng;
