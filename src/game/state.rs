//! Game state: board, selection, scores and status.
//!
//! `GameState` is a plain owned value. A UI holds one instance and calls
//! into it from a single thread; there are no globals and no interior
//! mutability.
//!
//! ## Lifecycle
//!
//! - `new` / `restart` / `resize` build a fresh board and spawn the
//!   configured number of starting tiles
//! - `select` picks the tile the next move acts on
//! - `move_selected` slides that tile, spawns a new tile and re-evaluates
//!   the status
//!
//! The best score survives restarts and resizes; the current score does not.

use serde::Serialize;

use super::command::Command;
use super::outcome::{CommandOutcome, MoveOutcome, MoveReport, SelectOutcome};
use crate::board::Board;
use crate::core::{BoardSize, Direction, EngineError, GameConfig, GameRng, Position};
use crate::rules::{self, GameStatus};

/// Full single-player game state.
#[derive(Clone, Debug, PartialEq)]
pub struct GameState {
    config: GameConfig,
    board: Board,
    selection: Option<Position>,
    score: u64,
    best_score: u64,
    status: GameStatus,
    moves: u32,
    rng: GameRng,
}

impl GameState {
    /// Create a game from a configuration.
    ///
    /// Fails before allocating anything if the configuration is invalid.
    ///
    /// ```
    /// use slide2048::core::GameConfig;
    /// use slide2048::game::GameState;
    ///
    /// let game = GameState::new(GameConfig::default().with_seed(1)).unwrap();
    /// assert_eq!(game.board().tile_count(), 1);
    /// assert_eq!(game.score(), 0);
    /// ```
    pub fn new(config: GameConfig) -> Result<Self, EngineError> {
        config.validate()?;
        let rng = config.seed.map_or_else(GameRng::from_entropy, GameRng::new);
        let mut state = Self {
            board: Board::empty(config.board_size),
            config,
            selection: None,
            score: 0,
            best_score: 0,
            status: GameStatus::InProgress,
            moves: 0,
            rng,
        };
        state.reset_board(state.config.board_size);
        Ok(state)
    }

    /// Create a game with a default configuration of the given size.
    pub fn with_size(size: usize) -> Result<Self, EngineError> {
        let size = BoardSize::new(size)?;
        Self::new(GameConfig::default().with_board_size(size))
    }

    /// Create a game around an existing board, without spawning.
    ///
    /// The configured board size is replaced by the board's own size.
    pub fn from_board(config: GameConfig, board: Board) -> Result<Self, EngineError> {
        config.validate()?;
        let config = config.with_board_size(board.size());
        let rng = config.seed.map_or_else(GameRng::from_entropy, GameRng::new);
        let status = rules::evaluate(&board, config.target);
        Ok(Self {
            config,
            board,
            selection: None,
            score: 0,
            best_score: 0,
            status,
            moves: 0,
            rng,
        })
    }

    /// Seed the best score, e.g. from a persisted value.
    #[must_use]
    pub fn with_best_score(mut self, best: u64) -> Self {
        self.best_score = self.best_score.max(best);
        self
    }

    // === Accessors ===

    #[must_use]
    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    #[must_use]
    pub fn board(&self) -> &Board {
        &self.board
    }

    #[must_use]
    pub fn size(&self) -> BoardSize {
        self.board.size()
    }

    #[must_use]
    pub fn selection(&self) -> Option<Position> {
        self.selection
    }

    #[must_use]
    pub fn score(&self) -> u64 {
        self.score
    }

    #[must_use]
    pub fn best_score(&self) -> u64 {
        self.best_score
    }

    #[must_use]
    pub fn status(&self) -> GameStatus {
        self.status
    }

    /// Number of board-changing moves since the last fresh board.
    #[must_use]
    pub fn moves(&self) -> u32 {
        self.moves
    }

    #[must_use]
    pub fn rng(&self) -> &GameRng {
        &self.rng
    }

    // === Selection ===

    /// Select the tile at `pos`.
    ///
    /// - empty cell: ignored, selection unchanged
    /// - the selected tile: toggled off
    /// - any other tile: becomes the selection
    pub fn select(&mut self, pos: Position) -> Result<SelectOutcome, EngineError> {
        self.board.check(pos)?;

        if self.board.at(pos) == 0 {
            return Ok(SelectOutcome::IgnoredEmpty);
        }
        if self.selection == Some(pos) {
            self.selection = None;
            return Ok(SelectOutcome::Deselected);
        }
        self.selection = Some(pos);
        Ok(SelectOutcome::Selected(pos))
    }

    /// Clear the selection.
    pub fn deselect(&mut self) {
        self.selection = None;
    }

    // === Moves ===

    /// Slide the selected tile in `direction`.
    ///
    /// A move that changes the board clears the selection, spawns one tile
    /// and re-evaluates the status. A move that cannot take a single step
    /// changes nothing and keeps the selection.
    pub fn move_selected(&mut self, direction: Direction) -> MoveOutcome {
        if self.status == GameStatus::Lost {
            return MoveOutcome::GameOver;
        }
        let Some(from) = self.selection else {
            return MoveOutcome::NoSelection;
        };
        let Some(slide) = rules::plan_slide(&self.board, from, direction) else {
            return MoveOutcome::NoSelection;
        };
        if !slide.moved() {
            log::debug!("tile at {from} blocked moving {direction}");
            return MoveOutcome::Blocked;
        }

        rules::apply_slide(&mut self.board, &slide);
        self.selection = None;
        self.moves += 1;

        let gained = slide.gained();
        self.score += gained;
        let new_best = self.score > self.best_score;
        if new_best {
            self.best_score = self.score;
        }

        let spawned = rules::spawn(&mut self.board, &mut self.rng, self.config.spawn_four_probability);

        let previous = self.status;
        self.status = rules::evaluate(&self.board, self.config.target);
        if self.status != previous {
            log::info!(
                "game {} after {} moves, score {}",
                self.status,
                self.moves,
                self.score
            );
        }

        log::debug!(
            "moved {} from {} to {}{}",
            slide.value,
            slide.from,
            slide.to,
            if slide.merged { " (merged)" } else { "" }
        );

        MoveOutcome::Moved(MoveReport {
            from: slide.from,
            to: slide.to,
            merged: slide.merged.then(|| slide.final_value()),
            gained,
            spawned,
            status: self.status,
            new_best,
        })
    }

    /// Drop a random tile into an empty cell, if any, and re-evaluate the
    /// status.
    pub fn spawn(&mut self) -> Option<rules::Spawn> {
        let spawned = rules::spawn(&mut self.board, &mut self.rng, self.config.spawn_four_probability);
        self.status = rules::evaluate(&self.board, self.config.target);
        spawned
    }

    /// Check whether any tile on the board can still move.
    #[must_use]
    pub fn has_any_move(&self) -> bool {
        rules::has_any_move(&self.board)
    }

    // === Fresh boards ===

    /// Start over on a board of the current size. Best score is kept.
    pub fn restart(&mut self) {
        self.reset_board(self.board.size());
        log::info!("restarted {} game", self.board.size());
    }

    /// Start over on a board of a new size. Best score is kept.
    ///
    /// An invalid size is rejected before any state changes.
    pub fn resize(&mut self, size: usize) -> Result<BoardSize, EngineError> {
        let size = BoardSize::new(size)?;
        self.config.board_size = size;
        self.reset_board(size);
        log::info!("resized to {size}");
        Ok(size)
    }

    fn reset_board(&mut self, size: BoardSize) {
        self.board = Board::empty(size);
        self.selection = None;
        self.score = 0;
        self.moves = 0;
        for _ in 0..self.config.initial_tiles {
            rules::spawn(&mut self.board, &mut self.rng, self.config.spawn_four_probability);
        }
        self.status = rules::evaluate(&self.board, self.config.target);
    }

    // === Dispatch ===

    /// Run one command.
    ///
    /// ```
    /// use slide2048::core::{Direction, GameConfig};
    /// use slide2048::game::{Command, CommandOutcome, GameState, MoveOutcome};
    ///
    /// let mut game = GameState::new(GameConfig::default().with_seed(3)).unwrap();
    /// let outcome = game.apply(Command::slide(Direction::Left)).unwrap();
    /// assert_eq!(outcome, CommandOutcome::Move(MoveOutcome::NoSelection));
    /// ```
    pub fn apply(&mut self, command: Command) -> Result<CommandOutcome, EngineError> {
        let outcome = match command {
            Command::Select { position } => CommandOutcome::Select(self.select(position)?),
            Command::Deselect => {
                self.deselect();
                CommandOutcome::Deselected
            }
            Command::Move { direction } => CommandOutcome::Move(self.move_selected(direction)),
            Command::Restart => {
                self.restart();
                CommandOutcome::Restarted
            }
            Command::Resize { size } => CommandOutcome::Resized(self.resize(size)?),
        };
        Ok(outcome)
    }

    // === Views ===

    /// Borrowed, serializable snapshot for rendering.
    #[must_use]
    pub fn view(&self) -> GameView<'_> {
        GameView {
            size: self.board.size().get(),
            board: self.board.rows().collect(),
            selection: self.selection,
            score: self.score,
            best_score: self.best_score,
            status: self.status,
            target: self.config.target,
            moves: self.moves,
            seed: self.rng.seed(),
        }
    }
}

/// What a UI needs to draw one frame.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct GameView<'a> {
    pub size: usize,
    pub board: Vec<&'a [u32]>,
    pub selection: Option<Position>,
    pub score: u64,
    pub best_score: u64,
    pub status: GameStatus,
    pub target: u32,
    pub moves: u32,
    pub seed: u64,
}
