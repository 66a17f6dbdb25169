//! Grid coordinates and move directions.
//!
//! ## Position
//!
//! A 0-based (row, column) pair. Positions are plain values; bounds are
//! checked against a `BoardSize` when they reach the board.
//!
//! ## Direction
//!
//! The four slide directions with their unit step vectors.

use serde::{Deserialize, Serialize};

use super::config::BoardSize;

/// Cell coordinate on the board, 0-indexed.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Position {
    pub row: usize,
    pub col: usize,
}

impl Position {
    /// Create a new position.
    #[must_use]
    pub const fn new(row: usize, col: usize) -> Self {
        Self { row, col }
    }

    /// Check whether this position lies on a board of the given size.
    #[must_use]
    pub fn in_bounds(self, size: BoardSize) -> bool {
        self.row < size.get() && self.col < size.get()
    }

    /// Row-major index into a board of the given size.
    #[must_use]
    pub fn index(self, size: BoardSize) -> usize {
        self.row * size.get() + self.col
    }

    /// Inverse of [`Position::index`].
    #[must_use]
    pub fn from_index(index: usize, size: BoardSize) -> Self {
        Self::new(index / size.get(), index % size.get())
    }

    /// The neighbouring position one step in `direction`.
    ///
    /// Returns `None` when the step leaves the board.
    ///
    /// ```
    /// use slide2048::core::{BoardSize, Direction, Position};
    ///
    /// let size = BoardSize::new(4).unwrap();
    /// assert_eq!(Position::new(0, 0).step(Direction::Right, size), Some(Position::new(0, 1)));
    /// assert_eq!(Position::new(0, 0).step(Direction::Up, size), None);
    /// assert_eq!(Position::new(3, 3).step(Direction::Down, size), None);
    /// ```
    #[must_use]
    pub fn step(self, direction: Direction, size: BoardSize) -> Option<Self> {
        let (dr, dc) = direction.delta();
        let row = self.row.checked_add_signed(dr)?;
        let col = self.col.checked_add_signed(dc)?;
        let next = Self::new(row, col);
        next.in_bounds(size).then_some(next)
    }
}

impl std::fmt::Display for Position {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}

/// Slide direction.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
}

impl Direction {
    /// All four directions.
    pub const ALL: [Direction; 4] = [Direction::Up, Direction::Down, Direction::Left, Direction::Right];

    /// Unit step as (row delta, column delta).
    #[must_use]
    pub const fn delta(self) -> (isize, isize) {
        match self {
            Direction::Up => (-1, 0),
            Direction::Down => (1, 0),
            Direction::Left => (0, -1),
            Direction::Right => (0, 1),
        }
    }
}

impl std::fmt::Display for Direction {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            Direction::Up => "up",
            Direction::Down => "down",
            Direction::Left => "left",
            Direction::Right => "right",
        };
        f.write_str(name)
    }
}
