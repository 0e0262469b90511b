//! Game engine for quindici, a numerical tic-tac-toe.
//!
//! Two players alternately place digits on a 3x3 board: the first player is
//! constrained to odd digits, the second to even digits, and every digit may
//! be used once across the whole board. A fully occupied row, column, or
//! diagonal summing to 15 wins; a full board with no such line is a draw.
//!
//! # Overview
//!
//! - [`rules`]: Pure move validation and win detection
//! - [`history`]: Undo/redo stacks of applied moves
//! - [`player`]: Player identity and human/computer capability
//! - [`session`]: The state machine owning board, history, and turn order
//! - [`save`]: The persistence codec (JSON snapshots, file round-trip)
//!
//! # Examples
//!
//! ```
//! use quindici_core::{Digit, Move, Parity, Position, Seat};
//! use quindici_game::{GameSession, Player, Status};
//!
//! let mut session = GameSession::new([
//!     Player::human("Ada", Parity::Odd),
//!     Player::computer("CPU", Parity::Even),
//! ]);
//!
//! session
//!     .apply(Move::new(Position::new(0, 0), Digit::D5, Seat::P1))
//!     .unwrap();
//! assert_eq!(session.status(), Status::InProgress);
//! assert_eq!(session.current_seat(), Seat::P2);
//! ```

pub mod history;
pub mod player;
pub mod rules;
pub mod save;
pub mod session;

pub use self::{
    history::MoveHistory,
    player::{Player, PlayerKind},
    rules::InvalidMove,
    save::SaveError,
    session::{GameSession, PlayError, StateError, Status},
};
