//! The game state machine.

use quindici_core::{Board, Digit, DigitSet, Move, Position, Seat};
use rand::RngExt;

use crate::{
    history::MoveHistory,
    player::Player,
    rules::{self, InvalidMove},
};

/// Terminal status of a session.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::IsVariant)]
pub enum Status {
    /// The game accepts moves.
    InProgress,
    /// The seat completed a line summing to 15. The winning seat stays
    /// current; the turn does not advance into a terminal state.
    Won(Seat),
    /// The board filled with no winning line.
    Drawn,
}

impl Status {
    /// Returns whether the game has ended.
    #[must_use]
    pub const fn is_terminal(self) -> bool {
        !matches!(self, Self::InProgress)
    }
}

/// A precondition violation on [`GameSession::apply`], [`GameSession::undo`],
/// or [`GameSession::redo`].
///
/// Distinct from [`InvalidMove`]: these are not rule rejections of a
/// candidate move but misuse of the state machine. All are recoverable; the
/// session is left unchanged.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display, derive_more::Error)]
pub enum StateError {
    /// A move was applied after the game ended.
    #[display("the game is over")]
    GameOver,
    /// Undo was requested with an empty undo stack.
    #[display("nothing to undo")]
    NothingToUndo,
    /// Redo was requested with an empty redo stack.
    #[display("nothing to redo")]
    NothingToRedo,
}

/// Why [`GameSession::apply`] refused a move.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display, derive_more::Error, derive_more::From)]
pub enum PlayError {
    /// The move failed rule validation.
    #[display("{_0}")]
    Invalid(#[from] InvalidMove),
    /// A state-machine precondition was violated.
    #[display("{_0}")]
    State(#[from] StateError),
}

/// The non-I/O core of a running game.
///
/// Owns the board, the move history, the cache of used digits, the two
/// players, the current seat, and the terminal status. Every field is
/// mutated only through [`apply`](Self::apply), [`undo`](Self::undo), and
/// [`redo`](Self::redo), so validate-then-apply is a single logical step:
/// nothing else can interleave.
///
/// # Examples
///
/// ```
/// use quindici_core::{Digit, Move, Parity, Position, Seat};
/// use quindici_game::{GameSession, Player, Status};
///
/// let mut session = GameSession::new([
///     Player::human("Ada", Parity::Odd),
///     Player::human("Max", Parity::Even),
/// ]);
///
/// let mv = Move::new(Position::new(0, 0), Digit::D5, Seat::P1);
/// session.validate(mv).unwrap();
/// assert_eq!(session.apply(mv).unwrap(), Status::InProgress);
/// assert_eq!(session.current_seat(), Seat::P2);
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct GameSession {
    board: Board,
    history: MoveHistory,
    used: DigitSet,
    players: [Player; 2],
    current: Seat,
    status: Status,
}

impl GameSession {
    /// Starts a fresh game: empty board, empty history, first seat to move.
    #[must_use]
    pub const fn new(players: [Player; 2]) -> Self {
        Self {
            board: Board::new(),
            history: MoveHistory::new(),
            used: DigitSet::EMPTY,
            players,
            current: Seat::P1,
            status: Status::InProgress,
        }
    }

    /// Rebuilds a session from persisted parts. The save codec is
    /// responsible for checking that the parts agree with each other.
    pub(crate) const fn from_parts(
        board: Board,
        history: MoveHistory,
        used: DigitSet,
        players: [Player; 2],
        current: Seat,
        status: Status,
    ) -> Self {
        Self {
            board,
            history,
            used,
            players,
            current,
            status,
        }
    }

    /// The board.
    #[must_use]
    pub const fn board(&self) -> &Board {
        &self.board
    }

    /// The move history.
    #[must_use]
    pub const fn history(&self) -> &MoveHistory {
        &self.history
    }

    /// The digits currently placed on the board.
    #[must_use]
    pub const fn used_digits(&self) -> DigitSet {
        self.used
    }

    /// Both players, in seat order.
    #[must_use]
    pub const fn players(&self) -> &[Player; 2] {
        &self.players
    }

    /// The player at `seat`.
    #[must_use]
    pub const fn player(&self, seat: Seat) -> &Player {
        &self.players[seat.index()]
    }

    /// The seat whose turn it is. After a terminal move this remains the
    /// seat that made it.
    #[must_use]
    pub const fn current_seat(&self) -> Seat {
        self.current
    }

    /// The player whose turn it is.
    #[must_use]
    pub const fn current_player(&self) -> &Player {
        self.player(self.current)
    }

    /// The terminal status.
    #[must_use]
    pub const fn status(&self) -> Status {
        self.status
    }

    /// Returns whether the game has ended.
    #[must_use]
    pub const fn is_terminal(&self) -> bool {
        self.status.is_terminal()
    }

    /// The winning player, if the game has been won.
    #[must_use]
    pub const fn winner(&self) -> Option<&Player> {
        match self.status {
            Status::Won(seat) => Some(self.player(seat)),
            Status::InProgress | Status::Drawn => None,
        }
    }

    /// Builds a candidate move for the current seat.
    #[must_use]
    pub const fn candidate(&self, position: Position, digit: Digit) -> Move {
        Move::new(position, digit, self.current)
    }

    /// Validates a candidate move against the rules for the current player.
    ///
    /// Does not mutate state and does not consider terminal status; see
    /// [`apply`](Self::apply) for the full precondition.
    ///
    /// # Errors
    ///
    /// Returns the first failing [`InvalidMove`] check.
    pub fn validate(&self, mv: Move) -> Result<(), InvalidMove> {
        if mv.seat() != self.current {
            return Err(InvalidMove::OutOfTurn(mv.seat()));
        }
        rules::validate(mv, &self.board, self.used, self.current_player().parity())
    }

    /// Applies a move: places it, records it in the history (discarding any
    /// redoable moves), updates the used digits, and re-evaluates the
    /// terminal status.
    ///
    /// A winning or drawing move leaves the mover as the current seat;
    /// otherwise the turn advances. On rejection nothing is mutated.
    ///
    /// # Errors
    ///
    /// [`StateError::GameOver`] if the game has ended, or the rule rejection
    /// from [`validate`](Self::validate).
    pub fn apply(&mut self, mv: Move) -> Result<Status, PlayError> {
        if self.is_terminal() {
            return Err(StateError::GameOver.into());
        }
        self.validate(mv)?;

        self.history.push(mv);
        Ok(self.settle(mv))
    }

    /// Reverts the most recent move: clears its cell, releases its digit,
    /// moves it to the redo stack, restores the mover as the current seat,
    /// and reverts any terminal status.
    ///
    /// # Errors
    ///
    /// [`StateError::NothingToUndo`] if no move has been applied; the
    /// session is unchanged.
    pub fn undo(&mut self) -> Result<Move, StateError> {
        let mv = self.history.undo().ok_or(StateError::NothingToUndo)?;
        self.board.remove(mv);
        self.used.remove(mv.digit());
        // The mover was current when the move was made, whether or not the
        // turn advanced afterwards.
        self.current = mv.seat();
        self.status = Status::InProgress;
        log::debug!("undone: {mv}");
        Ok(mv)
    }

    /// Re-applies the most recently undone move without re-validating it:
    /// it was legal when first applied and undo restored its cell and digit.
    ///
    /// # Errors
    ///
    /// [`StateError::NothingToRedo`] if the redo stack is empty; the session
    /// is unchanged.
    pub fn redo(&mut self) -> Result<Move, StateError> {
        let mv = self.history.redo().ok_or(StateError::NothingToRedo)?;
        self.settle(mv);
        log::debug!("redone: {mv}");
        Ok(mv)
    }

    /// Shared effects of apply and redo: place the move, mark its digit
    /// used, re-evaluate terminal status, and advance the turn unless the
    /// move ended the game.
    fn settle(&mut self, mv: Move) -> Status {
        self.board.place(mv);
        self.used.insert(mv.digit());

        if rules::is_win(&self.board) {
            // The winner is the seat that just moved; do not advance.
            self.current = mv.seat();
            self.status = Status::Won(mv.seat());
            log::info!("{} wins", self.player(mv.seat()).name());
        } else if self.board.is_full() {
            self.current = mv.seat();
            self.status = Status::Drawn;
            log::info!("board full: draw");
        } else {
            self.current = mv.seat().other();
            self.status = Status::InProgress;
        }
        self.status
    }

    /// Every legal move currently open to `seat`: the cross product of empty
    /// positions and the seat's unused parity digits. Empty when the game is
    /// terminal.
    ///
    /// An empty result for the seat to move on a non-full board means the
    /// player is blocked by parity exhaustion; the orchestrator treats that
    /// as a draw-like stoppage.
    #[must_use]
    pub fn legal_moves(&self, seat: Seat) -> Vec<Move> {
        if self.is_terminal() {
            return Vec::new();
        }
        let digits = rules::available_digits(self.used, self.player(seat).parity());
        self.board
            .empty_positions()
            .flat_map(|pos| digits.iter().map(move |digit| Move::new(pos, digit, seat)))
            .collect()
    }

    /// Draws a uniformly random legal move for the current seat, or `None`
    /// when the current player has no legal move.
    pub fn random_move<R: RngExt + ?Sized>(&self, rng: &mut R) -> Option<Move> {
        let moves = self.legal_moves(self.current);
        if moves.is_empty() {
            return None;
        }
        let index = rng.random_range(0..moves.len());
        Some(moves[index])
    }
}

#[cfg(test)]
mod tests {
    use quindici_core::{Digit, Parity};
    use rand::SeedableRng;
    use rand_pcg::Pcg64Mcg;

    use super::*;

    fn session() -> GameSession {
        GameSession::new([
            Player::human("Ada", Parity::Odd),
            Player::human("Max", Parity::Even),
        ])
    }

    fn mv(row: u8, col: u8, value: u8, seat: Seat) -> Move {
        Move::new(
            Position::new(row, col),
            Digit::from_value(value),
            seat,
        )
    }

    /// Plays row 0 = [2, 7, 6] with filler moves elsewhere; the move
    /// completing the row is made by P2.
    fn play_p2_win(session: &mut GameSession) {
        session.apply(mv(0, 1, 7, Seat::P1)).unwrap();
        session.apply(mv(0, 0, 2, Seat::P2)).unwrap();
        session.apply(mv(1, 1, 5, Seat::P1)).unwrap();
        let status = session.apply(mv(0, 2, 6, Seat::P2)).unwrap();
        assert_eq!(status, Status::Won(Seat::P2));
    }

    #[test]
    fn first_move_places_digit_and_advances_turn() {
        let mut session = session();
        let mv = mv(0, 0, 5, Seat::P1);

        session.validate(mv).unwrap();
        assert_eq!(session.apply(mv).unwrap(), Status::InProgress);

        let grid = session.board().grid();
        assert_eq!(grid[0][0], Some(Digit::D5));
        for pos in Position::ALL.into_iter().skip(1) {
            assert!(session.board().is_empty(pos));
        }
        assert_eq!(
            session.used_digits().iter().collect::<Vec<_>>(),
            vec![Digit::D5]
        );
        assert_eq!(session.current_seat(), Seat::P2);
        assert_eq!(session.current_seat().index(), 1);
    }

    #[test]
    fn win_goes_to_the_completing_player() {
        let mut session = session();
        play_p2_win(&mut session);

        assert_eq!(session.status(), Status::Won(Seat::P2));
        assert_eq!(session.winner().map(Player::name), Some("Max"));
        // The turn did not advance past the winning move
        assert_eq!(session.current_seat(), Seat::P2);
    }

    #[test]
    fn parity_mismatch_is_rejected() {
        let session = session();
        let err = session.validate(mv(0, 0, 4, Seat::P1)).unwrap_err();
        assert_eq!(
            err,
            InvalidMove::ParityMismatch {
                digit: Digit::D4,
                parity: Parity::Odd,
            }
        );
    }

    #[test]
    fn reused_digit_is_rejected() {
        let mut session = session();
        session.apply(mv(1, 1, 5, Seat::P1)).unwrap();
        session.apply(mv(1, 0, 2, Seat::P2)).unwrap();

        // (0, 0) is empty, but 5 is already on the board
        let err = session.validate(mv(0, 0, 5, Seat::P1)).unwrap_err();
        assert_eq!(err, InvalidMove::DigitAlreadyUsed(Digit::D5));
    }

    #[test]
    fn undo_with_empty_history_is_an_error() {
        let mut session = session();
        let before = session.clone();

        assert_eq!(session.undo(), Err(StateError::NothingToUndo));
        assert_eq!(session, before);
    }

    #[test]
    fn rejected_apply_has_no_effects() {
        let mut session = session();
        session.apply(mv(0, 0, 5, Seat::P1)).unwrap();
        let before = session.clone();

        // Occupied cell
        let err = session.apply(mv(0, 0, 4, Seat::P2)).unwrap_err();
        assert_eq!(
            err,
            PlayError::Invalid(InvalidMove::CellOccupied(Position::new(0, 0)))
        );
        assert_eq!(session, before);

        // Out of turn
        let err = session.apply(mv(1, 1, 3, Seat::P1)).unwrap_err();
        assert_eq!(err, PlayError::Invalid(InvalidMove::OutOfTurn(Seat::P1)));
        assert_eq!(session, before);
    }

    #[test]
    fn apply_after_game_over_is_a_state_error() {
        let mut session = session();
        play_p2_win(&mut session);
        let before = session.clone();

        let err = session.apply(mv(2, 2, 9, Seat::P2)).unwrap_err();
        assert_eq!(err, PlayError::State(StateError::GameOver));
        assert_eq!(session, before);
    }

    #[test]
    fn undo_reverts_a_win_to_the_winners_turn() {
        let mut session = session();
        play_p2_win(&mut session);

        let undone = session.undo().unwrap();
        assert_eq!(undone, mv(0, 2, 6, Seat::P2));
        assert_eq!(session.status(), Status::InProgress);
        assert!(session.winner().is_none());
        // P2 made the winning move, so it is P2's turn again
        assert_eq!(session.current_seat(), Seat::P2);
        assert!(session.board().is_empty(Position::new(0, 2)));
        assert!(!session.used_digits().contains(Digit::D6));
    }

    #[test]
    fn undo_then_redo_restores_the_exact_state() {
        let mut session = session();
        session.apply(mv(0, 0, 5, Seat::P1)).unwrap();
        session.apply(mv(0, 1, 2, Seat::P2)).unwrap();
        let before = session.clone();

        session.undo().unwrap();
        assert_ne!(session, before);
        session.redo().unwrap();
        assert_eq!(session, before);

        // Redo past the end is a state error and a no-op
        assert_eq!(session.redo(), Err(StateError::NothingToRedo));
        assert_eq!(session, before);
    }

    #[test]
    fn redo_replays_a_winning_move() {
        let mut session = session();
        play_p2_win(&mut session);
        let won = session.clone();

        session.undo().unwrap();
        session.redo().unwrap();
        assert_eq!(session, won);
        assert_eq!(session.status(), Status::Won(Seat::P2));
    }

    #[test]
    fn new_move_after_undo_clears_redo() {
        let mut session = session();
        session.apply(mv(0, 0, 5, Seat::P1)).unwrap();
        session.undo().unwrap();
        session.apply(mv(2, 2, 3, Seat::P1)).unwrap();

        assert_eq!(session.redo(), Err(StateError::NothingToRedo));
        assert!(session.board().is_empty(Position::new(0, 0)));
        assert_eq!(session.board().get(Position::new(2, 2)), Some(Digit::D3));
    }

    #[test]
    fn draw_on_full_board_without_win() {
        // Full board with no line summing to 15:
        //   1 2 4
        //   8 7 3
        //   5 9 6
        let mut session = session();
        let moves = [
            mv(0, 0, 1, Seat::P1),
            mv(0, 1, 2, Seat::P2),
            mv(1, 2, 3, Seat::P1),
            mv(0, 2, 4, Seat::P2),
            mv(2, 0, 5, Seat::P1),
            mv(2, 2, 6, Seat::P2),
            mv(1, 1, 7, Seat::P1),
            mv(1, 0, 8, Seat::P2),
        ];
        for m in moves {
            assert_eq!(session.apply(m).unwrap(), Status::InProgress);
        }
        let status = session.apply(mv(2, 1, 9, Seat::P1)).unwrap();
        assert_eq!(status, Status::Drawn);
        assert!(session.winner().is_none());
        // The drawing mover stays current for reporting
        assert_eq!(session.current_seat(), Seat::P1);
    }

    #[test]
    fn legal_moves_cross_product() {
        let mut session = session();
        session.apply(mv(0, 0, 5, Seat::P1)).unwrap();

        // P2: 8 empty cells x 4 even digits
        let moves = session.legal_moves(Seat::P2);
        assert_eq!(moves.len(), 8 * 4);
        assert!(moves.iter().all(|m| m.seat() == Seat::P2));
        assert!(moves.iter().all(|m| session.board().is_empty(m.position())));

        // P1: 8 empty cells x 4 remaining odd digits
        assert_eq!(session.legal_moves(Seat::P1).len(), 8 * 4);
    }

    #[test]
    fn random_moves_are_legal_and_blocked_player_gets_none() {
        let mut rng = Pcg64Mcg::seed_from_u64(42);
        let mut session = session();

        // Random self-play stays legal until the game ends
        while !session.is_terminal() {
            let Some(m) = session.random_move(&mut rng) else {
                break;
            };
            session.validate(m).unwrap();
            session.apply(m).unwrap();
        }

        // A terminal session offers no moves
        if session.is_terminal() {
            assert!(session.legal_moves(session.current_seat()).is_empty());
            assert_eq!(session.random_move(&mut rng), None);
        }
    }

    #[test]
    fn parity_exhaustion_blocks_a_player_on_a_non_full_board() {
        // All four even digits placed on a non-full, non-winning board:
        //   1 2 4
        //   8 7 3
        //   5 . 6
        let mut session = session();
        let moves = [
            mv(0, 0, 1, Seat::P1),
            mv(0, 1, 2, Seat::P2),
            mv(1, 2, 3, Seat::P1),
            mv(0, 2, 4, Seat::P2),
            mv(2, 0, 5, Seat::P1),
            mv(2, 2, 6, Seat::P2),
            mv(1, 1, 7, Seat::P1),
            mv(1, 0, 8, Seat::P2),
        ];
        for m in moves {
            session.apply(m).unwrap();
        }

        assert_eq!(session.status(), Status::InProgress);
        assert!(!session.board().is_full());
        // P1 still has 9 available; P2's even pool is exhausted
        assert!(!session.legal_moves(Seat::P1).is_empty());
        assert!(session.legal_moves(Seat::P2).is_empty());
    }

    mod props {
        use proptest::prelude::*;

        use super::*;

        /// Plays up to `steps` random legal moves from a fresh session.
        fn random_session(seed: u64, steps: usize) -> GameSession {
            let mut rng = Pcg64Mcg::seed_from_u64(seed);
            let mut session = session();
            for _ in 0..steps {
                let Some(m) = session.random_move(&mut rng) else {
                    break;
                };
                session.apply(m).unwrap();
            }
            session
        }

        proptest! {
            #[test]
            fn used_digits_always_match_the_undo_history(
                seed in any::<u64>(),
                steps in 0usize..=9,
            ) {
                let session = random_session(seed, steps);
                let from_history: DigitSet = session
                    .history()
                    .undo_moves()
                    .iter()
                    .map(|m| m.digit())
                    .collect();
                prop_assert_eq!(session.used_digits(), from_history);

                // Board occupancy matches the history as well
                let occupied = Position::ALL
                    .iter()
                    .filter(|&&pos| !session.board().is_empty(pos))
                    .count();
                prop_assert_eq!(occupied, session.history().undo_moves().len());
            }

            #[test]
            fn undo_then_redo_is_identity(
                seed in any::<u64>(),
                steps in 1usize..=9,
                depth in 1usize..=9,
            ) {
                let mut session = random_session(seed, steps);
                let before = session.clone();

                let mut undone = 0;
                for _ in 0..depth {
                    if session.undo().is_ok() {
                        undone += 1;
                    } else {
                        break;
                    }
                }
                for _ in 0..undone {
                    session.redo().unwrap();
                }

                prop_assert_eq!(session, before);
            }
        }
    }
}
