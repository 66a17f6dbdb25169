//! Square tile grid.
//!
//! Cells are stored row-major in a flat `Vec<u32>`. `0` is an empty cell,
//! any other value is a tile and must be a power of two `>= 2`. The public
//! API never lets a caller write an invalid value; the rules module mutates
//! cells through crate-private setters.

use serde::Serialize;
use smallvec::SmallVec;

use crate::core::{BoardSize, EngineError, Position};

/// Positions of empty cells. Inline capacity covers a typical 4x4 board.
pub type EmptyCells = SmallVec<[Position; 16]>;

/// Check whether `value` may appear in a cell.
#[must_use]
pub fn is_cell_value(value: u32) -> bool {
    value == 0 || (value >= 2 && value.is_power_of_two())
}

/// An n×n board of tiles.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize)]
pub struct Board {
    size: BoardSize,
    cells: Vec<u32>,
}

impl Board {
    /// Create an all-empty board.
    #[must_use]
    pub fn empty(size: BoardSize) -> Self {
        Self {
            size,
            cells: vec![0; size.cells()],
        }
    }

    /// Build a board from explicit rows.
    ///
    /// ```
    /// use slide2048::board::Board;
    ///
    /// let board = Board::from_rows(vec![vec![2, 0], vec![0, 4]]).unwrap();
    /// assert_eq!(board.tile_count(), 2);
    /// assert!(Board::from_rows(vec![vec![3, 0], vec![0, 0]]).is_err());
    /// ```
    pub fn from_rows(rows: Vec<Vec<u32>>) -> Result<Self, EngineError> {
        let size = BoardSize::new(rows.len())?;
        let mut cells = Vec::with_capacity(size.cells());

        for (row, values) in rows.into_iter().enumerate() {
            if values.len() != size.get() {
                return Err(EngineError::NotSquare {
                    rows: size.get(),
                    cols: values.len(),
                });
            }
            for (col, value) in values.into_iter().enumerate() {
                if !is_cell_value(value) {
                    return Err(EngineError::InvalidTile { row, col, value });
                }
                cells.push(value);
            }
        }

        Ok(Self { size, cells })
    }

    /// Board edge length.
    #[must_use]
    pub fn size(&self) -> BoardSize {
        self.size
    }

    /// Value at `pos`, or `None` when off the board.
    #[must_use]
    pub fn get(&self, pos: Position) -> Option<u32> {
        pos.in_bounds(self.size).then(|| self.cells[pos.index(self.size)])
    }

    /// Value at an in-bounds position.
    pub(crate) fn at(&self, pos: Position) -> u32 {
        self.cells[pos.index(self.size)]
    }

    /// Overwrite an in-bounds cell.
    pub(crate) fn set(&mut self, pos: Position, value: u32) {
        debug_assert!(is_cell_value(value));
        let index = pos.index(self.size);
        self.cells[index] = value;
    }

    /// Ensure `pos` lies on this board.
    pub fn check(&self, pos: Position) -> Result<(), EngineError> {
        if pos.in_bounds(self.size) {
            Ok(())
        } else {
            Err(EngineError::InvalidPosition {
                row: pos.row,
                col: pos.col,
                size: self.size.get(),
            })
        }
    }

    /// Flat row-major view of all cells.
    #[must_use]
    pub fn cells(&self) -> &[u32] {
        &self.cells
    }

    /// Iterate over rows.
    pub fn rows(&self) -> impl Iterator<Item = &[u32]> {
        self.cells.chunks(self.size.get())
    }

    /// Iterate over every position with its value.
    pub fn iter(&self) -> impl Iterator<Item = (Position, u32)> + '_ {
        let size = self.size;
        self.cells
            .iter()
            .enumerate()
            .map(move |(i, &v)| (Position::from_index(i, size), v))
    }

    /// Positions of all empty cells, in row-major order.
    #[must_use]
    pub fn empty_cells(&self) -> EmptyCells {
        self.iter().filter(|&(_, v)| v == 0).map(|(p, _)| p).collect()
    }

    /// True when no cell is empty.
    #[must_use]
    pub fn is_full(&self) -> bool {
        self.cells.iter().all(|&v| v != 0)
    }

    /// Number of tiles on the board.
    #[must_use]
    pub fn tile_count(&self) -> usize {
        self.cells.iter().filter(|&&v| v != 0).count()
    }

    /// Sum of all tile values.
    #[must_use]
    pub fn tile_sum(&self) -> u64 {
        self.cells.iter().map(|&v| u64::from(v)).sum()
    }

    /// Largest tile, or 0 on an empty board.
    #[must_use]
    pub fn max_tile(&self) -> u32 {
        self.cells.iter().copied().max().unwrap_or(0)
    }
}

impl std::fmt::Display for Board {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for row in self.rows() {
            let line: Vec<String> = row
                .iter()
                .map(|&v| if v == 0 { ".".to_string() } else { v.to_string() })
                .collect();
            writeln!(f, "{}", line.join(" "))?;
        }
        Ok(())
    }
}
