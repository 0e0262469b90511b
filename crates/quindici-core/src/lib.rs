//! Core data structures for quindici, a numerical tic-tac-toe.
//!
//! This crate provides the leaf types shared by the game engine and the
//! front-end: digits and their parity, board positions, the board itself,
//! digit sets, move records, and seat identifiers.
//!
//! # Overview
//!
//! - [`digit`]: Type-safe digits 1-9 and the odd/even [`Parity`] constraint
//! - [`position`]: Zero-based (row, col) coordinates on the 3x3 board
//! - [`digit_set`]: A bitset of digits, used to track used numbers
//! - [`board`]: The 3x3 grid container (no rule enforcement)
//! - [`moves`]: Immutable move records
//! - [`seat`]: Player seat identifiers
//!
//! # Examples
//!
//! ```
//! use quindici_core::{Board, Digit, Move, Position, Seat};
//!
//! let mut board = Board::new();
//! board.place(Move::new(Position::new(0, 0), Digit::D5, Seat::P1));
//! assert_eq!(board.get(Position::new(0, 0)), Some(Digit::D5));
//! ```

pub mod board;
pub mod digit;
pub mod digit_set;
pub mod moves;
pub mod position;
pub mod seat;

pub use self::{
    board::Board,
    digit::{Digit, Parity},
    digit_set::DigitSet,
    moves::Move,
    position::Position,
    seat::Seat,
};
