//! Free-text command parsing.
//!
//! Turns a raw input line into either a candidate placement or a structured
//! command. This is the translation boundary: coordinates and digit values
//! are range-checked here, before a [`Position`] or [`Digit`] exists.

use std::path::PathBuf;

use quindici_core::{Digit, Position};

/// A parsed input line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Place a digit at a position (input is `row col number`, zero-based).
    Place {
        /// The target cell.
        position: Position,
        /// The digit to place.
        digit: Digit,
    },
    /// Revert the most recent move.
    Undo,
    /// Re-apply the most recently undone move.
    Redo,
    /// Save the game to a file.
    Save(PathBuf),
    /// Load a game from a file.
    Load(PathBuf),
    /// Show the current player's available digits.
    Hint,
    /// Reprint the board.
    Board,
    /// Show the rules and command reference.
    Help,
    /// Leave the game.
    Quit,
}

/// Why an input line could not be parsed.
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display, derive_more::Error)]
pub enum ParseError {
    /// The line was empty.
    #[display("enter a move or a command (try 'help')")]
    Empty,
    /// The line is neither a known command nor a `row col number` triple.
    #[display("unrecognized input (try 'help')")]
    Unrecognized,
    /// `save`/`load` without a file name.
    #[display("expected a file name, e.g. 'save game1'")]
    MissingPath,
    /// A coordinate is outside the board.
    #[display("row and column must be between 0 and 2")]
    PositionOutOfRange,
    /// The digit is outside 1-9.
    #[display("the number must be between 1 and 9")]
    DigitOutOfRange,
}

/// Parses one input line.
///
/// # Errors
///
/// Returns a [`ParseError`] describing the first problem found; placements
/// are checked position first, then digit.
pub fn parse(input: &str) -> Result<Command, ParseError> {
    let trimmed = input.trim();
    if trimmed.is_empty() {
        return Err(ParseError::Empty);
    }

    let (head, rest) = match trimmed.split_once(char::is_whitespace) {
        Some((head, rest)) => (head, rest.trim()),
        None => (trimmed, ""),
    };

    match head.to_ascii_lowercase().as_str() {
        "undo" => Ok(Command::Undo),
        "redo" => Ok(Command::Redo),
        "hint" => Ok(Command::Hint),
        "board" => Ok(Command::Board),
        "help" => Ok(Command::Help),
        "quit" | "exit" => Ok(Command::Quit),
        "save" | "load" => {
            if rest.is_empty() {
                return Err(ParseError::MissingPath);
            }
            let path = PathBuf::from(rest);
            if head.eq_ignore_ascii_case("save") {
                Ok(Command::Save(path))
            } else {
                Ok(Command::Load(path))
            }
        }
        _ => parse_placement(trimmed),
    }
}

fn parse_placement(input: &str) -> Result<Command, ParseError> {
    let parts: Vec<&str> = input.split_whitespace().collect();
    let [row, col, value] = parts[..] else {
        return Err(ParseError::Unrecognized);
    };
    let number = |token: &str| token.parse::<i32>().map_err(|_| ParseError::Unrecognized);
    let (row, col, value) = (number(row)?, number(col)?, number(value)?);

    let position = u8::try_from(row)
        .ok()
        .zip(u8::try_from(col).ok())
        .and_then(|(row, col)| Position::try_new(row, col))
        .ok_or(ParseError::PositionOutOfRange)?;
    let digit = u8::try_from(value)
        .ok()
        .and_then(Digit::try_from_value)
        .ok_or(ParseError::DigitOutOfRange)?;

    Ok(Command::Place { position, digit })
}
