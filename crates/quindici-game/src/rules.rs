//! Pure move validation and win detection.
//!
//! Everything in this module is a side-effect-free function of a board and a
//! set of used digits; the session (and, for hints, the front-end) delegates
//! here.

use quindici_core::{Board, Digit, DigitSet, Move, Parity, Position, Seat};

/// The sum a fully occupied line must reach to win.
pub const WIN_SUM: u8 = 15;

/// The 8 win lines: 3 rows, 3 columns, 2 diagonals.
pub const LINES: [[Position; 3]; 8] = [
    // Rows
    [Position::new(0, 0), Position::new(0, 1), Position::new(0, 2)],
    [Position::new(1, 0), Position::new(1, 1), Position::new(1, 2)],
    [Position::new(2, 0), Position::new(2, 1), Position::new(2, 2)],
    // Columns
    [Position::new(0, 0), Position::new(1, 0), Position::new(2, 0)],
    [Position::new(0, 1), Position::new(1, 1), Position::new(2, 1)],
    [Position::new(0, 2), Position::new(1, 2), Position::new(2, 2)],
    // Diagonals
    [Position::new(0, 0), Position::new(1, 1), Position::new(2, 2)],
    [Position::new(0, 2), Position::new(1, 1), Position::new(2, 0)],
];

/// Why a candidate move was rejected.
///
/// All rejections are recoverable; the caller re-prompts. Out-of-range
/// coordinates and digits are unrepresentable in [`Move`] and are reported by
/// the input parser before a move exists.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display, derive_more::Error)]
pub enum InvalidMove {
    /// The target cell already holds a digit.
    #[display("cell {_0} is already occupied")]
    CellOccupied(#[error(not(source))] Position),
    /// The digit's parity does not match the player's constraint.
    #[display("digit {digit} is not {parity}")]
    ParityMismatch {
        /// The offending digit.
        digit: Digit,
        /// The parity the player is constrained to.
        parity: Parity,
    },
    /// The digit has already been placed somewhere on the board.
    #[display("digit {_0} has already been used")]
    DigitAlreadyUsed(#[error(not(source))] Digit),
    /// The move was made by a seat whose turn it is not.
    #[display("it is not {_0}'s turn")]
    OutOfTurn(#[error(not(source))] Seat),
}

/// Validates a candidate move against the board, the used digits, and the
/// moving player's parity constraint.
///
/// Checks run in order: cell emptiness, digit parity, digit uniqueness. The
/// first failing check determines the error.
///
/// # Errors
///
/// Returns the first failing [`InvalidMove`] check.
pub fn validate(
    mv: Move,
    board: &Board,
    used: DigitSet,
    parity: Parity,
) -> Result<(), InvalidMove> {
    if !board.is_empty(mv.position()) {
        return Err(InvalidMove::CellOccupied(mv.position()));
    }
    if !parity.admits(mv.digit()) {
        return Err(InvalidMove::ParityMismatch {
            digit: mv.digit(),
            parity,
        });
    }
    if used.contains(mv.digit()) {
        return Err(InvalidMove::DigitAlreadyUsed(mv.digit()));
    }
    Ok(())
}

/// Returns the first fully occupied line summing to [`WIN_SUM`], if any.
#[must_use]
pub fn winning_line(board: &Board) -> Option<[Position; 3]> {
    LINES.into_iter().find(|line| {
        let mut sum = 0u8;
        for &pos in line {
            match board.get(pos) {
                Some(digit) => sum += digit.value(),
                None => return false,
            }
        }
        sum == WIN_SUM
    })
}

/// Returns whether the board contains a winning line.
#[must_use]
pub fn is_win(board: &Board) -> bool {
    winning_line(board).is_some()
}

/// Returns the digits of `parity` not yet in `used`, ascending.
///
/// Used for computer-player move generation and for hints.
#[must_use]
pub fn available_digits(used: DigitSet, parity: Parity) -> DigitSet {
    parity
        .pool()
        .iter()
        .copied()
        .filter(|digit| !used.contains(*digit))
        .collect()
}
