//! The 3x3 board container.

use crate::{digit::Digit, moves::Move, position::Position};

/// A 3x3 grid of optionally occupied cells.
///
/// The board is a dumb container: it performs no legality checks beyond what
/// its types enforce. Digit uniqueness across the board and parity
/// constraints are the rules' responsibility, and callers are expected to
/// validate moves before placing them.
///
/// # Examples
///
/// ```
/// use quindici_core::{Board, Digit, Move, Position, Seat};
///
/// let mut board = Board::new();
/// assert!(board.is_empty(Position::new(1, 1)));
///
/// let mv = Move::new(Position::new(1, 1), Digit::D5, Seat::P1);
/// board.place(mv);
/// assert_eq!(board.get(Position::new(1, 1)), Some(Digit::D5));
///
/// board.remove(mv);
/// assert!(board.is_empty(Position::new(1, 1)));
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Board {
    cells: [[Option<Digit>; 3]; 3],
}

impl Board {
    /// Creates an empty board.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            cells: [[None; 3]; 3],
        }
    }

    /// Returns the digit at `pos`, or `None` for an empty cell.
    #[must_use]
    pub const fn get(&self, pos: Position) -> Option<Digit> {
        self.cells[pos.row() as usize][pos.col() as usize]
    }

    /// Returns whether the cell at `pos` is empty.
    #[must_use]
    pub const fn is_empty(&self, pos: Position) -> bool {
        self.get(pos).is_none()
    }

    /// Writes the move's digit into its target cell.
    ///
    /// No legality check is performed; any previous occupant is overwritten.
    pub const fn place(&mut self, mv: Move) {
        self.cells[mv.position().row() as usize][mv.position().col() as usize] = Some(mv.digit());
    }

    /// Resets the move's target cell to empty.
    pub const fn remove(&mut self, mv: Move) {
        self.cells[mv.position().row() as usize][mv.position().col() as usize] = None;
    }

    /// Returns whether no empty cells remain.
    #[must_use]
    pub fn is_full(&self) -> bool {
        Position::ALL.iter().all(|&pos| !self.is_empty(pos))
    }

    /// Returns a copy of the grid, row-major.
    ///
    /// The copy never aliases the board's internal storage.
    #[must_use]
    pub const fn grid(&self) -> [[Option<Digit>; 3]; 3] {
        self.cells
    }

    /// Returns an iterator over the empty positions, row-major.
    pub fn empty_positions(&self) -> impl Iterator<Item = Position> + '_ {
        Position::ALL.into_iter().filter(|&pos| self.is_empty(pos))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::seat::Seat;

    fn mv(row: u8, col: u8, value: u8, seat: Seat) -> Move {
        Move::new(
            Position::new(row, col),
            Digit::from_value(value),
            seat,
        )
    }

    #[test]
    fn test_place_and_remove() {
        let mut board = Board::new();
        let m = mv(0, 0, 5, Seat::P1);

        assert!(board.is_empty(Position::new(0, 0)));
        board.place(m);
        assert_eq!(board.get(Position::new(0, 0)), Some(Digit::D5));
        assert!(!board.is_empty(Position::new(0, 0)));

        board.remove(m);
        assert!(board.is_empty(Position::new(0, 0)));
    }

    #[test]
    fn test_is_full() {
        let mut board = Board::new();
        assert!(!board.is_full());

        for (i, pos) in Position::ALL.into_iter().enumerate() {
            #[expect(clippy::cast_possible_truncation)]
            board.place(Move::new(pos, Digit::from_value(i as u8 + 1), Seat::P1));
        }
        assert!(board.is_full());

        board.remove(mv(2, 2, 9, Seat::P1));
        assert!(!board.is_full());
    }

    #[test]
    fn test_grid_is_a_copy() {
        let mut board = Board::new();
        board.place(mv(1, 1, 5, Seat::P1));

        let grid = board.grid();
        board.remove(mv(1, 1, 5, Seat::P1));

        // The snapshot is unaffected by later mutation
        assert_eq!(grid[1][1], Some(Digit::D5));
        assert_eq!(board.get(Position::new(1, 1)), None);
    }

    #[test]
    fn test_empty_positions() {
        let mut board = Board::new();
        assert_eq!(board.empty_positions().count(), 9);

        board.place(mv(0, 0, 1, Seat::P1));
        board.place(mv(2, 2, 2, Seat::P2));
        let empties: Vec<_> = board.empty_positions().collect();
        assert_eq!(empties.len(), 7);
        assert!(!empties.contains(&Position::new(0, 0)));
        assert!(!empties.contains(&Position::new(2, 2)));
    }
}
