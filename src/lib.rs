//! # slide2048
//!
//! A 2048 variant where the player selects one tile and slides only that
//! tile. It travels until it hits a wall, a different tile, or merges once
//! with an equal tile. Every move that changes the board spawns a new 2 or 4.
//!
//! ## Design Principles
//!
//! 1. **Owned State**: `GameState` is a plain value. No globals, no
//!    interior mutability; the caller owns the only instance.
//!
//! 2. **Benign No-ops**: moving with nothing selected, sliding into a wall
//!    and clicking an empty cell are outcomes, not errors.
//!
//! 3. **Validate Up Front**: sizes, targets and positions are checked
//!    before any state changes.
//!
//! ## Modules
//!
//! - `core`: positions, directions, configuration, RNG, errors
//! - `board`: the square grid of cell values
//! - `rules`: slide planning, spawning, win/lose evaluation
//! - `game`: `GameState`, commands and outcomes
//! - `persistence`: best-score storage
//! - `display`: tile colour palette
//! - `shell`: terminal command parsing and rendering

pub mod board;
pub mod core;
pub mod display;
pub mod game;
pub mod persistence;
pub mod rules;
pub mod shell;

// Re-export commonly used types
pub use crate::core::{BoardSize, Direction, EngineError, GameConfig, GameRng, Position};

pub use crate::board::Board;

pub use crate::rules::{GameStatus, Slide, Spawn};

pub use crate::game::{Command, CommandOutcome, GameState, GameView, MoveOutcome, MoveReport, SelectOutcome};

pub use crate::persistence::{BestScoreStore, FileBestScore, MemoryBestScore, StoreError};

pub use crate::display::{Palette, Rgb, TileStyle};
