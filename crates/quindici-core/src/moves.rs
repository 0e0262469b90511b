//! Immutable move records.

use derive_more::Display;

use crate::{digit::Digit, position::Position, seat::Seat};

/// A single placement: a digit written to a position by a seat.
///
/// Moves are immutable once created; accepted moves are pushed onto the game
/// history and dropped only when permanently discarded from it.
///
/// # Examples
///
/// ```
/// use quindici_core::{Digit, Move, Position, Seat};
///
/// let mv = Move::new(Position::new(0, 0), Digit::D5, Seat::P1);
/// assert_eq!(mv.digit(), Digit::D5);
/// assert_eq!(mv.seat(), Seat::P1);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display)]
#[display("{seat} places {digit} at {position}")]
pub struct Move {
    position: Position,
    digit: Digit,
    seat: Seat,
}

impl Move {
    /// Creates a move record.
    #[must_use]
    pub const fn new(position: Position, digit: Digit, seat: Seat) -> Self {
        Self {
            position,
            digit,
            seat,
        }
    }

    /// Returns the target position.
    #[must_use]
    pub const fn position(self) -> Position {
        self.position
    }

    /// Returns the digit placed.
    #[must_use]
    pub const fn digit(self) -> Digit {
        self.digit
    }

    /// Returns the seat that made the move.
    #[must_use]
    pub const fn seat(self) -> Seat {
        self.seat
    }
}
