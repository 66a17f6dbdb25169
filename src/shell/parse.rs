//! Text command parsing for the terminal shell.
//!
//! | input                         | command           |
//! |-------------------------------|-------------------|
//! | `w` `a` `s` `d`, `up` `left`… | move              |
//! | `select R C`, `R C`           | select            |
//! | `deselect`, `x`               | clear selection   |
//! | `restart`, `new`              | restart           |
//! | `size N`, `resize N`          | resize            |
//! | `help`, `?`                   | help              |
//! | `quit`, `exit`, `q`           | quit              |

use crate::core::Direction;
use crate::game::Command;

/// One line of shell input.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ShellCommand {
    Game(Command),
    Help,
    Quit,
}

/// Errors from parsing a shell line.
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum ParseError {
    #[error("empty input")]
    Empty,
    #[error("unknown command {0:?}, type 'help' for a list")]
    Unknown(String),
    #[error("'{0}' needs {1}")]
    MissingArgument(&'static str, &'static str),
    #[error("{0:?} is not a number")]
    InvalidNumber(String),
    #[error("'{0}' takes no more than {1} argument(s)")]
    TooManyArguments(&'static str, usize),
}

fn parse_direction(word: &str) -> Option<Direction> {
    match word {
        "w" | "up" | "k" => Some(Direction::Up),
        "s" | "down" | "j" => Some(Direction::Down),
        "a" | "left" | "h" => Some(Direction::Left),
        "d" | "right" | "l" => Some(Direction::Right),
        _ => None,
    }
}

fn parse_number(word: &str) -> Result<usize, ParseError> {
    word.parse()
        .map_err(|_| ParseError::InvalidNumber(word.to_string()))
}

fn expect_args(
    name: &'static str,
    args: &[&str],
    count: usize,
    what: &'static str,
) -> Result<(), ParseError> {
    if args.len() < count {
        return Err(ParseError::MissingArgument(name, what));
    }
    if args.len() > count {
        return Err(ParseError::TooManyArguments(name, count));
    }
    Ok(())
}

/// Parse one line of input. Case and surrounding whitespace are ignored.
///
/// ```
/// use slide2048::core::Direction;
/// use slide2048::game::Command;
/// use slide2048::shell::{parse_command, ShellCommand};
///
/// assert_eq!(parse_command("W").unwrap(), ShellCommand::Game(Command::slide(Direction::Up)));
/// assert_eq!(parse_command("select 1 2").unwrap(), ShellCommand::Game(Command::select(1, 2)));
/// assert_eq!(parse_command(" 0 3 ").unwrap(), ShellCommand::Game(Command::select(0, 3)));
/// ```
pub fn parse_command(line: &str) -> Result<ShellCommand, ParseError> {
    let lowered = line.trim().to_ascii_lowercase();
    let words: Vec<&str> = lowered.split_whitespace().collect();
    let (&head, args) = words.split_first().ok_or(ParseError::Empty)?;

    if let Some(direction) = parse_direction(head) {
        expect_args("move", args, 0, "nothing")?;
        return Ok(ShellCommand::Game(Command::slide(direction)));
    }

    let command = match head {
        "select" | "sel" => {
            expect_args("select", args, 2, "a row and a column")?;
            Command::select(parse_number(args[0])?, parse_number(args[1])?)
        }
        "deselect" | "x" => {
            expect_args("deselect", args, 0, "nothing")?;
            Command::Deselect
        }
        "restart" | "new" => {
            expect_args("restart", args, 0, "nothing")?;
            Command::Restart
        }
        "size" | "resize" => {
            expect_args("size", args, 1, "a board size")?;
            Command::Resize {
                size: parse_number(args[0])?,
            }
        }
        "help" | "?" => return Ok(ShellCommand::Help),
        "quit" | "exit" | "q" => return Ok(ShellCommand::Quit),
        _ if head.chars().all(|c| c.is_ascii_digit()) => {
            expect_args("select", args, 1, "a row and a column")?;
            Command::select(parse_number(head)?, parse_number(args[0])?)
        }
        _ => return Err(ParseError::Unknown(head.to_string())),
    };

    Ok(ShellCommand::Game(command))
}
