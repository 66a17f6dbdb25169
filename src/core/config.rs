//! Game configuration types.
//!
//! - `BoardSize`: validated board edge length in `2..=8`
//! - `GameConfig`: board size, win target, spawn odds and seed
//!
//! Configs can be built in code with the `with_*` builders or loaded from a
//! TOML file. Either way, `GameConfig::validate` runs before a game is
//! created, so a bad value never reaches a half-built `GameState`.

use std::path::Path;

use serde::{Deserialize, Serialize};

use super::error::EngineError;

/// Smallest supported board edge.
pub const MIN_BOARD_SIZE: usize = 2;

/// Largest supported board edge.
pub const MAX_BOARD_SIZE: usize = 8;

/// Default board edge.
pub const DEFAULT_BOARD_SIZE: usize = 4;

/// Default win target. Not a power of two; any cell `>=` this wins.
pub const DEFAULT_TARGET: u32 = 100;

/// Default probability that a spawned tile is a 4 rather than a 2.
pub const DEFAULT_SPAWN_FOUR_PROBABILITY: f64 = 0.1;

/// Board edge length, guaranteed to lie in `MIN_BOARD_SIZE..=MAX_BOARD_SIZE`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "usize", into = "usize")]
pub struct BoardSize(usize);

impl BoardSize {
    /// Validate a raw edge length.
    ///
    /// ```
    /// use slide2048::core::BoardSize;
    ///
    /// assert_eq!(BoardSize::new(4).unwrap().get(), 4);
    /// assert!(BoardSize::new(1).is_err());
    /// assert!(BoardSize::new(9).is_err());
    /// ```
    pub fn new(size: usize) -> Result<Self, EngineError> {
        if (MIN_BOARD_SIZE..=MAX_BOARD_SIZE).contains(&size) {
            Ok(Self(size))
        } else {
            Err(EngineError::InvalidBoardSize { size })
        }
    }

    /// Raw edge length.
    #[must_use]
    pub const fn get(self) -> usize {
        self.0
    }

    /// Total number of cells.
    #[must_use]
    pub const fn cells(self) -> usize {
        self.0 * self.0
    }
}

impl Default for BoardSize {
    fn default() -> Self {
        Self(DEFAULT_BOARD_SIZE)
    }
}

impl TryFrom<usize> for BoardSize {
    type Error = EngineError;

    fn try_from(size: usize) -> Result<Self, Self::Error> {
        Self::new(size)
    }
}

impl From<BoardSize> for usize {
    fn from(size: BoardSize) -> Self {
        size.0
    }
}

impl std::fmt::Display for BoardSize {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}x{}", self.0, self.0)
    }
}

/// Errors raised while loading a configuration file.
#[derive(thiserror::Error, Debug)]
pub enum ConfigError {
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
    #[error("invalid TOML: {0}")]
    Parse(#[from] toml::de::Error),
    #[error(transparent)]
    Invalid(#[from] EngineError),
}

/// Complete game configuration.
///
/// Every field has a default, so a TOML file only needs the keys it
/// overrides:
///
/// ```toml
/// board_size = 5
/// target = 256
/// ```
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct GameConfig {
    /// Board edge length.
    pub board_size: BoardSize,

    /// A cell value `>=` target wins the game.
    pub target: u32,

    /// Probability that a spawned tile is a 4.
    pub spawn_four_probability: f64,

    /// Tiles spawned onto a fresh board.
    pub initial_tiles: usize,

    /// RNG seed. `None` draws one from the OS at game creation.
    pub seed: Option<u64>,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            board_size: BoardSize::default(),
            target: DEFAULT_TARGET,
            spawn_four_probability: DEFAULT_SPAWN_FOUR_PROBABILITY,
            initial_tiles: 1,
            seed: None,
        }
    }
}

impl GameConfig {
    /// Set the board size.
    #[must_use]
    pub fn with_board_size(mut self, size: BoardSize) -> Self {
        self.board_size = size;
        self
    }

    /// Set the win target.
    #[must_use]
    pub fn with_target(mut self, target: u32) -> Self {
        self.target = target;
        self
    }

    /// Set the probability of spawning a 4.
    #[must_use]
    pub fn with_spawn_four_probability(mut self, probability: f64) -> Self {
        self.spawn_four_probability = probability;
        self
    }

    /// Set how many tiles a fresh board starts with.
    #[must_use]
    pub fn with_initial_tiles(mut self, count: usize) -> Self {
        self.initial_tiles = count;
        self
    }

    /// Fix the RNG seed.
    #[must_use]
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Check the values a `BoardSize` cannot enforce by construction.
    pub fn validate(&self) -> Result<(), EngineError> {
        if self.target == 0 {
            return Err(EngineError::InvalidTarget(self.target));
        }
        let p = self.spawn_four_probability;
        if !(0.0..=1.0).contains(&p) {
            return Err(EngineError::InvalidSpawnProbability(p));
        }
        Ok(())
    }

    /// Parse and validate a TOML document.
    pub fn from_toml_str(contents: &str) -> Result<Self, ConfigError> {
        let cfg: Self = toml::from_str(contents)?;
        cfg.validate()?;
        Ok(cfg)
    }

    /// Read, parse and validate a TOML file.
    pub fn from_toml<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path)?;
        Self::from_toml_str(&contents)
    }
}
