//! Terminal front end: parse a line, render a frame.

pub mod parse;
pub mod render;

pub use parse::{parse_command, ParseError, ShellCommand};
pub use render::{describe, error_json, render, HELP};
