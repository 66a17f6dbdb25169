//! Text rendering of a game.

use std::fmt::Write as _;

use crate::display::{Palette, TileStyle};
use crate::game::{CommandOutcome, GameState, MoveOutcome, SelectOutcome};
use crate::rules::GameStatus;

/// Help text printed by the `help` command.
pub const HELP: &str = "\
commands:
  select R C | R C        select the tile at row R, column C (0-based)
  w a s d | up left ...   slide the selected tile
  deselect | x            clear the selection
  restart | new           start a new game
  size N                  start a new N x N game (2-8)
  help | ?                show this help
  quit | q                leave";

fn paint(text: &str, style: TileStyle) -> String {
    let bg = style.background;
    let fg = style.foreground;
    format!(
        "\x1b[48;2;{};{};{}m\x1b[38;2;{};{};{}m{text}\x1b[0m",
        bg.0, bg.1, bg.2, fg.0, fg.1, fg.2
    )
}

/// Draw the board, scores and status.
///
/// The selected tile is wrapped in brackets. With `colour`, cells get
/// 24-bit ANSI colours from `palette`.
#[must_use]
pub fn render(state: &GameState, palette: &Palette, colour: bool) -> String {
    let board = state.board();
    let width = board.max_tile().max(state.config().target).to_string().len().max(4);
    let mut out = String::new();

    let header: Vec<String> = (0..board.size().get())
        .map(|c| format!(" {c:^width$} "))
        .collect();
    let _ = writeln!(out, "   {}", header.join(""));

    for (r, row) in board.rows().enumerate() {
        let _ = write!(out, "{r:>2} ");
        for (c, &value) in row.iter().enumerate() {
            let text = if value == 0 { ".".to_string() } else { value.to_string() };
            let selected = state.selection().is_some_and(|p| p.row == r && p.col == c);
            let (open, close) = if selected { ('[', ']') } else { (' ', ' ') };
            let cell = format!("{open}{text:^width$}{close}");
            if colour {
                out.push_str(&paint(&cell, palette.style(value)));
            } else {
                out.push_str(&cell);
            }
        }
        out.push('\n');
    }

    let _ = writeln!(
        out,
        "score: {}  best: {}  target: {}",
        state.score(),
        state.best_score(),
        state.config().target
    );
    match state.status() {
        GameStatus::InProgress => {}
        GameStatus::Won => {
            let _ = writeln!(out, "You reached {}! Keep going or type 'restart'.", state.config().target);
        }
        GameStatus::Lost => {
            let _ = writeln!(out, "No more moves. Game over, type 'restart'.");
        }
    }
    out
}

/// One-line feedback for a command, if it deserves any.
#[must_use]
pub fn describe(outcome: &CommandOutcome) -> Option<String> {
    let text = match outcome {
        CommandOutcome::Select(SelectOutcome::Selected(pos)) => format!("selected {pos}"),
        CommandOutcome::Select(SelectOutcome::Deselected) | CommandOutcome::Deselected => {
            "selection cleared".to_string()
        }
        CommandOutcome::Select(SelectOutcome::IgnoredEmpty) => "that cell is empty".to_string(),
        CommandOutcome::Move(MoveOutcome::NoSelection) => {
            "select a tile first (e.g. 'select 0 0')".to_string()
        }
        CommandOutcome::Move(MoveOutcome::Blocked) => "that tile can't move that way".to_string(),
        CommandOutcome::Move(MoveOutcome::GameOver) => "game over, type 'restart'".to_string(),
        CommandOutcome::Move(MoveOutcome::Moved(report)) => match report.merged {
            Some(value) => format!("merged into {value} at {} (+{})", report.to, report.gained),
            None => return None,
        },
        CommandOutcome::Restarted => "new game".to_string(),
        CommandOutcome::Resized(size) => format!("new {size} game"),
    };
    Some(text)
}

/// Single-line JSON object carrying an error message, for `--json` output.
#[must_use]
pub fn error_json(message: &str) -> String {
    serde_json::json!({ "error": message }).to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::Board;
    use crate::core::{GameConfig, Position};
    use crate::game::MoveReport;

    fn state(rows: Vec<Vec<u32>>) -> GameState {
        let board = Board::from_rows(rows).unwrap();
        GameState::from_board(GameConfig::default().with_seed(1), board).unwrap()
    }

    #[test]
    fn test_render_plain() {
        let mut game = state(vec![vec![2, 0], vec![0, 16]]);
        game.select(Position::new(1, 1)).unwrap();

        let text = render(&game, &Palette::classic(), false);
        let lines: Vec<&str> = text.lines().collect();

        assert_eq!(lines[0], "     0     1   ");
        assert_eq!(lines[1], " 0   2     .   ");
        assert_eq!(lines[2], " 1   .   [ 16 ]");
        assert_eq!(lines[3], "score: 0  best: 0  target: 100");
        assert_eq!(lines.len(), 4);
    }

    #[test]
    fn test_render_colour_uses_ansi() {
        let game = state(vec![vec![2, 0], vec![0, 0]]);
        let text = render(&game, &Palette::classic(), true);
        assert!(text.contains("\x1b[48;2;238;228;218m"));
        assert!(text.contains("\x1b[0m"));
    }

    #[test]
    fn test_render_status_lines() {
        let won = state(vec![vec![128, 0], vec![0, 0]]);
        assert!(render(&won, &Palette::classic(), false).contains("You reached 100!"));

        let lost = state(vec![vec![2, 4], vec![4, 2]]);
        assert!(render(&lost, &Palette::classic(), false).contains("Game over"));
    }

    #[test]
    fn test_error_json_is_one_parseable_line() {
        let line = error_json("unknown command \"jump\",\ntype 'help'");
        assert!(!line.contains('\n'));

        let value: serde_json::Value = serde_json::from_str(&line).unwrap();
        assert_eq!(value["error"], "unknown command \"jump\",\ntype 'help'");
    }

    #[test]
    fn test_describe() {
        assert_eq!(
            describe(&CommandOutcome::Move(MoveOutcome::Blocked)).as_deref(),
            Some("that tile can't move that way")
        );
        assert_eq!(
            describe(&CommandOutcome::Select(SelectOutcome::Selected(Position::new(0, 1)))).as_deref(),
            Some("selected (0, 1)")
        );

        let slide = MoveReport {
            from: Position::new(0, 0),
            to: Position::new(0, 3),
            merged: None,
            gained: 0,
            spawned: None,
            status: GameStatus::InProgress,
            new_best: false,
        };
        assert_eq!(describe(&CommandOutcome::Move(MoveOutcome::Moved(slide))), None);

        let merge = MoveReport { merged: Some(8), gained: 8, ..slide };
        assert_eq!(
            describe(&CommandOutcome::Move(MoveOutcome::Moved(merge))).as_deref(),
            Some("merged into 8 at (0, 3) (+8)")
        );
    }
}
