//! Single-tile slide.
//!
//! The selected tile walks one cell at a time in the chosen direction:
//!
//! - off the board: stop on the last cell reached
//! - empty cell: step into it and keep walking
//! - equal tile: merge into it (value doubles) and stop
//! - equal tile at `2^31`: treated as unequal, the double does not fit a cell
//! - unequal tile: stop on the last cell reached
//!
//! A merge always ends the walk, so a move merges at most once.
//!
//! Planning and applying are split so callers can inspect a slide without
//! mutating the board.

use serde::{Deserialize, Serialize};

use crate::board::Board;
use crate::core::{Direction, Position};

/// Result of walking one tile across the board.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Slide {
    /// Starting cell.
    pub from: Position,
    /// Final cell. Equal to `from` when the tile is blocked.
    pub to: Position,
    /// Value of the tile before the move.
    pub value: u32,
    /// Whether the walk ended in a merge.
    pub merged: bool,
}

impl Slide {
    /// Did the tile leave its cell?
    #[must_use]
    pub fn moved(&self) -> bool {
        self.from != self.to
    }

    /// Value sitting at `to` after the slide is applied.
    #[must_use]
    pub fn final_value(&self) -> u32 {
        if self.merged {
            self.value * 2
        } else {
            self.value
        }
    }

    /// Score earned by this slide: the merged value, or nothing.
    #[must_use]
    pub fn gained(&self) -> u64 {
        if self.merged {
            u64::from(self.final_value())
        } else {
            0
        }
    }
}

/// An equal neighbour merges only if the doubled value still fits a cell.
fn can_merge(value: u32, occupant: u32) -> bool {
    occupant == value && value.checked_mul(2).is_some()
}

/// Walk the tile at `from` in `direction` without touching the board.
///
/// Returns `None` when `from` is off the board or empty.
///
/// ```
/// use slide2048::board::Board;
/// use slide2048::core::{Direction, Position};
/// use slide2048::rules::plan_slide;
///
/// let board = Board::from_rows(vec![
///     vec![2, 0, 2, 0],
///     vec![0, 0, 0, 0],
///     vec![0, 0, 0, 0],
///     vec![0, 0, 0, 0],
/// ]).unwrap();
///
/// let slide = plan_slide(&board, Position::new(0, 0), Direction::Right).unwrap();
/// assert_eq!(slide.to, Position::new(0, 2));
/// assert!(slide.merged);
/// assert_eq!(slide.gained(), 4);
/// ```
#[must_use]
pub fn plan_slide(board: &Board, from: Position, direction: Direction) -> Option<Slide> {
    let value = board.get(from).filter(|&v| v != 0)?;
    let size = board.size();

    let mut to = from;
    let mut merged = false;

    while let Some(next) = to.step(direction, size) {
        let occupant = board.at(next);
        if occupant == 0 {
            to = next;
            continue;
        }
        if can_merge(value, occupant) {
            to = next;
            merged = true;
        }
        break;
    }

    Some(Slide { from, to, value, merged })
}

/// Write a planned slide into the board.
///
/// Blocked slides leave the board untouched.
pub fn apply_slide(board: &mut Board, slide: &Slide) {
    if !slide.moved() {
        return;
    }
    board.set(slide.from, 0);
    board.set(slide.to, slide.final_value());
}

/// Check whether the tile at `pos` can take at least one step in `direction`:
/// the neighbour is empty or holds an equal value it can merge with.
#[must_use]
pub fn can_step(board: &Board, pos: Position, direction: Direction) -> bool {
    let value = match board.get(pos) {
        Some(v) if v != 0 => v,
        _ => return false,
    };
    match pos.step(direction, board.size()) {
        Some(next) => {
            let neighbour = board.at(next);
            neighbour == 0 || can_merge(value, neighbour)
        }
        None => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn row_board(row: [u32; 4]) -> Board {
        Board::from_rows(vec![row.to_vec(), vec![0; 4], vec![0; 4], vec![0; 4]]).unwrap()
    }

    #[test]
    fn test_slide_to_wall() {
        let board = row_board([2, 0, 0, 0]);
        let slide = plan_slide(&board, Position::new(0, 0), Direction::Right).unwrap();

        assert_eq!(slide.to, Position::new(0, 3));
        assert!(!slide.merged);
        assert_eq!(slide.gained(), 0);
        assert!(slide.moved());
    }

    #[test]
    fn test_slide_merges_equal() {
        let board = row_board([2, 0, 2, 0]);
        let slide = plan_slide(&board, Position::new(0, 0), Direction::Right).unwrap();

        assert_eq!(slide.to, Position::new(0, 2));
        assert!(slide.merged);
        assert_eq!(slide.final_value(), 4);
        assert_eq!(slide.gained(), 4);
    }

    #[test]
    fn test_slide_blocked_by_unequal_neighbour() {
        let board = row_board([2, 4, 0, 0]);
        let slide = plan_slide(&board, Position::new(0, 0), Direction::Right).unwrap();

        assert_eq!(slide.to, Position::new(0, 0));
        assert!(!slide.moved());
        assert!(!slide.merged);
    }

    #[test]
    fn test_slide_stops_before_unequal_tile() {
        let board = row_board([2, 0, 0, 8]);
        let slide = plan_slide(&board, Position::new(0, 0), Direction::Right).unwrap();

        assert_eq!(slide.to, Position::new(0, 2));
        assert!(!slide.merged);
    }

    #[test]
    fn test_slide_blocked_by_wall() {
        let board = row_board([0, 0, 0, 2]);
        let slide = plan_slide(&board, Position::new(0, 3), Direction::Right).unwrap();
        assert!(!slide.moved());

        let slide = plan_slide(&board, Position::new(0, 3), Direction::Up).unwrap();
        assert!(!slide.moved());
    }

    #[test]
    fn test_merge_only_nearest_tile() {
        // Only the first equal tile in the path is consumed.
        let board = row_board([2, 2, 2, 0]);
        let slide = plan_slide(&board, Position::new(0, 0), Direction::Right).unwrap();

        assert_eq!(slide.to, Position::new(0, 1));
        assert!(slide.merged);
    }

    #[test]
    fn test_slide_vertical() {
        let board = Board::from_rows(vec![
            vec![0, 0, 0, 0],
            vec![0, 4, 0, 0],
            vec![0, 0, 0, 0],
            vec![0, 4, 0, 0],
        ])
        .unwrap();

        let slide = plan_slide(&board, Position::new(3, 1), Direction::Up).unwrap();
        assert_eq!(slide.to, Position::new(1, 1));
        assert!(slide.merged);

        let slide = plan_slide(&board, Position::new(1, 1), Direction::Up).unwrap();
        assert_eq!(slide.to, Position::new(0, 1));
        assert!(!slide.merged);
    }

    #[test]
    fn test_plan_empty_or_offboard() {
        let board = row_board([2, 0, 0, 0]);
        assert!(plan_slide(&board, Position::new(0, 1), Direction::Left).is_none());
        assert!(plan_slide(&board, Position::new(9, 9), Direction::Left).is_none());
    }

    #[test]
    fn test_apply_slide() {
        let mut board = row_board([2, 0, 2, 0]);
        let slide = plan_slide(&board, Position::new(0, 0), Direction::Right).unwrap();
        apply_slide(&mut board, &slide);

        assert_eq!(board.rows().next().unwrap(), &[0, 0, 4, 0]);
        assert_eq!(board.tile_sum(), 4);
    }

    #[test]
    fn test_apply_blocked_slide_is_noop() {
        let mut board = row_board([2, 4, 0, 0]);
        let before = board.clone();
        let slide = plan_slide(&board, Position::new(0, 0), Direction::Right).unwrap();
        apply_slide(&mut board, &slide);

        assert_eq!(board, before);
    }

    #[test]
    fn test_largest_tiles_do_not_merge() {
        let top = 1 << 31;
        let board = Board::from_rows(vec![vec![top, top], vec![0, 0]]).unwrap();

        let slide = plan_slide(&board, Position::new(0, 0), Direction::Right).unwrap();
        assert!(!slide.moved());
        assert!(!slide.merged);
        assert!(!can_step(&board, Position::new(0, 0), Direction::Right));
        assert!(can_step(&board, Position::new(0, 0), Direction::Down));
    }

    #[test]
    fn test_merge_into_largest_tile() {
        let half = 1 << 30;
        let mut board = Board::from_rows(vec![vec![half, half], vec![0, 0]]).unwrap();

        let slide = plan_slide(&board, Position::new(0, 0), Direction::Right).unwrap();
        assert!(slide.merged);
        assert_eq!(slide.final_value(), 1 << 31);
        assert_eq!(slide.gained(), 1 << 31);

        apply_slide(&mut board, &slide);
        assert_eq!(board.get(Position::new(0, 1)), Some(1 << 31));
    }

    #[test]
    fn test_can_step() {
        let board = row_board([2, 4, 4, 0]);
        assert!(!can_step(&board, Position::new(0, 0), Direction::Right));
        assert!(can_step(&board, Position::new(0, 0), Direction::Down));
        assert!(can_step(&board, Position::new(0, 1), Direction::Right));
        assert!(!can_step(&board, Position::new(0, 0), Direction::Left));
        assert!(!can_step(&board, Position::new(0, 3), Direction::Left));
    }
}
