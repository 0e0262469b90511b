//! Player seat identifiers.

use derive_more::Display;

/// One of the two seats at the table.
///
/// A seat identifies a player slot independently of the player's name or
/// capability; moves record the seat that made them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display)]
pub enum Seat {
    /// The first player (moves first, places odd digits).
    #[display("player 1")]
    P1,
    /// The second player (places even digits).
    #[display("player 2")]
    P2,
}

impl Seat {
    /// Both seats, in turn order.
    pub const ALL: [Self; 2] = [Self::P1, Self::P2];

    /// Returns the zero-based index of this seat (0 or 1).
    #[must_use]
    pub const fn index(self) -> usize {
        match self {
            Self::P1 => 0,
            Self::P2 => 1,
        }
    }

    /// Returns the seat from its zero-based index, or `None` if out of range.
    #[must_use]
    pub const fn from_index(index: usize) -> Option<Self> {
        match index {
            0 => Some(Self::P1),
            1 => Some(Self::P2),
            _ => None,
        }
    }

    /// Returns the opposing seat.
    #[must_use]
    pub const fn other(self) -> Self {
        match self {
            Self::P1 => Self::P2,
            Self::P2 => Self::P1,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_index_round_trip() {
        for seat in Seat::ALL {
            assert_eq!(Seat::from_index(seat.index()), Some(seat));
        }
        assert_eq!(Seat::from_index(2), None);
    }

    #[test]
    fn test_other_alternates() {
        assert_eq!(Seat::P1.other(), Seat::P2);
        assert_eq!(Seat::P2.other(), Seat::P1);
    }
}
