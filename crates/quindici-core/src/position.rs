//! Board position (row, col) coordinate type.

use derive_more::Display;

/// A position on the 3x3 board.
///
/// Coordinates are zero-based; row 0 is the top row and column 0 is the
/// leftmost column. The type guarantees at construction time that both
/// coordinates are in range, so a `Position` held anywhere in the program is
/// always a valid board cell.
///
/// # Examples
///
/// ```
/// use quindici_core::Position;
///
/// let pos = Position::new(0, 2);
/// assert_eq!(pos.row(), 0);
/// assert_eq!(pos.col(), 2);
///
/// // Fallible construction for parsed input
/// assert!(Position::try_new(3, 0).is_none());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Display)]
#[display("({row}, {col})")]
pub struct Position {
    row: u8,
    col: u8,
}

impl Position {
    /// The board edge length.
    pub const SIZE: u8 = 3;

    /// All 9 positions in row-major order.
    pub const ALL: [Self; 9] = [
        Self { row: 0, col: 0 },
        Self { row: 0, col: 1 },
        Self { row: 0, col: 2 },
        Self { row: 1, col: 0 },
        Self { row: 1, col: 1 },
        Self { row: 1, col: 2 },
        Self { row: 2, col: 0 },
        Self { row: 2, col: 1 },
        Self { row: 2, col: 2 },
    ];

    /// Creates a new position.
    ///
    /// # Panics
    ///
    /// Panics if either coordinate is out of range.
    #[must_use]
    pub const fn new(row: u8, col: u8) -> Self {
        assert!(row < Self::SIZE && col < Self::SIZE);
        Self { row, col }
    }

    /// Creates a new position, returning `None` if either coordinate is out
    /// of range.
    #[must_use]
    pub const fn try_new(row: u8, col: u8) -> Option<Self> {
        if row < Self::SIZE && col < Self::SIZE {
            Some(Self { row, col })
        } else {
            None
        }
    }

    /// Returns the zero-based row index (0-2).
    #[must_use]
    pub const fn row(self) -> u8 {
        self.row
    }

    /// Returns the zero-based column index (0-2).
    #[must_use]
    pub const fn col(self) -> u8 {
        self.col
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_construction_bounds() {
        assert_eq!(Position::try_new(0, 0), Some(Position::new(0, 0)));
        assert_eq!(Position::try_new(2, 2), Some(Position::new(2, 2)));
        assert_eq!(Position::try_new(3, 0), None);
        assert_eq!(Position::try_new(0, 3), None);
        assert_eq!(Position::try_new(255, 255), None);
    }

    #[test]
    #[should_panic(expected = "row < Self::SIZE")]
    fn test_new_out_of_range_panics() {
        let _ = Position::new(3, 0);
    }

    #[test]
    fn test_all_covers_board_in_row_major_order() {
        assert_eq!(Position::ALL.len(), 9);
        let mut iter = Position::ALL.iter();
        for row in 0..3 {
            for col in 0..3 {
                assert_eq!(iter.next(), Some(&Position::new(row, col)));
            }
        }
    }

    #[test]
    fn test_display() {
        assert_eq!(format!("{}", Position::new(1, 2)), "(1, 2)");
    }
}
