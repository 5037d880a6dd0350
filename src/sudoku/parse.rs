#![warn(clippy::all, clippy::pedantic, clippy::nursery, clippy::cargo)]
//! A parser for the plain-text sudoku board format.
//!
//! The format is nine lines of nine cells, where `.` or `0` denotes an
//! empty cell and `1`–`9` a fixed clue:
//!
//! ```text
//! 53..7....
//! 6..195...
//! .98....6.
//! 8...6...3
//! 4..8.3..1
//! 7...2...6
//! .6....28.
//! ...419..5
//! ....8..79
//! ```
//!
//! Whitespace is insignificant, so the 81-character single-line compact form
//! parses too, and lines starting with `#` are comments. Any other character
//! and any total other than 81 cells is rejected. The parser enforces shape
//! only; clue consistency (no duplicate digit in a row, column or block) is
//! checked by the solver when it builds its constraint state.

use crate::sudoku::board::Board;
use std::fmt;
use std::io::{self, BufRead};
use std::path::Path;

/// Reasons a board fails to parse.
#[derive(Debug)]
pub enum ParseError {
    /// The underlying reader failed.
    Io(io::Error),
    /// A character that is not a digit, `.`, whitespace or comment.
    InvalidCharacter {
        /// The offending character.
        found: char,
        /// One-based line number it appeared on.
        line: usize,
    },
    /// The input did not contain exactly 81 cells.
    CellCount(usize),
}

impl fmt::Display for ParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Io(e) => write!(f, "failed to read board: {e}"),
            Self::InvalidCharacter { found, line } => {
                write!(f, "invalid character {found:?} on line {line}")
            }
            Self::CellCount(count) => {
                write!(f, "expected 81 cells, found {count}")
            }
        }
    }
}

impl std::error::Error for ParseError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Io(e) => Some(e),
            _ => None,
        }
    }
}

impl From<io::Error> for ParseError {
    fn from(e: io::Error) -> Self {
        Self::Io(e)
    }
}

/// Parses a board from a string.
///
/// # Errors
///
/// Returns [`ParseError::InvalidCharacter`] on the first character outside
/// the format, or [`ParseError::CellCount`] if the input does not hold
/// exactly 81 cells.
pub fn parse_text(input: &str) -> Result<Board, ParseError> {
    let mut cells = [0u8; 81];
    let mut index = 0;

    for (line_number, line) in input.lines().enumerate() {
        if line.trim_start().starts_with('#') {
            continue;
        }
        for ch in line.chars() {
            let digit = match ch {
                '.' | '0' => 0,
                '1'..='9' => ch as u8 - b'0',
                c if c.is_whitespace() => continue,
                c => {
                    return Err(ParseError::InvalidCharacter {
                        found: c,
                        line: line_number + 1,
                    });
                }
            };
            if index < 81 {
                cells[index] = digit;
            }
            index += 1;
        }
    }

    if index == 81 {
        Ok(cells.into())
    } else {
        Err(ParseError::CellCount(index))
    }
}

/// Parses a board from a `BufRead` source.
///
/// # Errors
///
/// Returns [`ParseError::Io`] if reading fails, otherwise as
/// [`parse_text`].
pub fn parse_board<R: BufRead>(reader: R) -> Result<Board, ParseError> {
    let lines: Vec<String> = reader.lines().collect::<io::Result<_>>()?;
    parse_text(&lines.join("\n"))
}

/// Parses the board file at `path`.
///
/// # Errors
///
/// Returns [`ParseError::Io`] if the file cannot be opened or read,
/// otherwise as [`parse_text`].
pub fn parse_file<P: AsRef<Path>>(path: P) -> Result<Board, ParseError> {
    let file = std::fs::File::open(path)?;
    parse_board(io::BufReader::new(file))
}
