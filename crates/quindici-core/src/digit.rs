//! Digit and parity representation.

use std::fmt::{self, Display};

/// A playable digit in the range 1-9.
///
/// This enum provides type-safe representation of the digits players place on
/// the board, preventing invalid values at compile time. Each variant
/// corresponds to exactly one digit value.
///
/// # Examples
///
/// ```
/// use quindici_core::Digit;
///
/// let digit = Digit::D5;
/// assert_eq!(digit.value(), 5);
///
/// // Create from a u8 value
/// let digit = Digit::try_from_value(7).unwrap();
/// assert_eq!(digit, Digit::D7);
///
/// // Iterate over all digits
/// for digit in Digit::ALL {
///     println!("{}", digit);
/// }
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[repr(u8)]
pub enum Digit {
    /// The digit 1.
    D1 = 1,
    /// The digit 2.
    D2 = 2,
    /// The digit 3.
    D3 = 3,
    /// The digit 4.
    D4 = 4,
    /// The digit 5.
    D5 = 5,
    /// The digit 6.
    D6 = 6,
    /// The digit 7.
    D7 = 7,
    /// The digit 8.
    D8 = 8,
    /// The digit 9.
    D9 = 9,
}

impl Digit {
    /// Array containing all digits from 1 to 9, ascending.
    pub const ALL: [Self; 9] = [
        Self::D1,
        Self::D2,
        Self::D3,
        Self::D4,
        Self::D5,
        Self::D6,
        Self::D7,
        Self::D8,
        Self::D9,
    ];

    /// Creates a digit from a u8 value, returning `None` outside 1-9.
    ///
    /// # Examples
    ///
    /// ```
    /// use quindici_core::Digit;
    ///
    /// assert_eq!(Digit::try_from_value(5), Some(Digit::D5));
    /// assert_eq!(Digit::try_from_value(0), None);
    /// assert_eq!(Digit::try_from_value(10), None);
    /// ```
    #[must_use]
    pub const fn try_from_value(value: u8) -> Option<Self> {
        match value {
            1 => Some(Self::D1),
            2 => Some(Self::D2),
            3 => Some(Self::D3),
            4 => Some(Self::D4),
            5 => Some(Self::D5),
            6 => Some(Self::D6),
            7 => Some(Self::D7),
            8 => Some(Self::D8),
            9 => Some(Self::D9),
            _ => None,
        }
    }

    /// Creates a digit from a u8 value in the range 1-9.
    ///
    /// # Panics
    ///
    /// Panics if `value` is not in the range 1-9.
    #[must_use]
    pub const fn from_value(value: u8) -> Self {
        match Self::try_from_value(value) {
            Some(digit) => digit,
            None => panic!("digit value must be between 1 and 9"),
        }
    }

    /// Returns the numeric value of this digit (1-9).
    #[must_use]
    pub const fn value(self) -> u8 {
        self as u8
    }

    /// Returns the parity (odd or even) of this digit.
    ///
    /// # Examples
    ///
    /// ```
    /// use quindici_core::{Digit, Parity};
    ///
    /// assert_eq!(Digit::D5.parity(), Parity::Odd);
    /// assert_eq!(Digit::D4.parity(), Parity::Even);
    /// ```
    #[must_use]
    pub const fn parity(self) -> Parity {
        if self.value() % 2 == 1 {
            Parity::Odd
        } else {
            Parity::Even
        }
    }
}

impl Display for Digit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        Display::fmt(&self.value(), f)
    }
}

impl From<Digit> for u8 {
    fn from(digit: Digit) -> u8 {
        digit.value()
    }
}

/// The digit parity a player is constrained to.
///
/// The first player places only odd digits, the second only even digits.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, derive_more::Display)]
pub enum Parity {
    /// Odd digits: 1, 3, 5, 7, 9.
    #[display("odd")]
    Odd,
    /// Even digits: 2, 4, 6, 8.
    #[display("even")]
    Even,
}

impl Parity {
    /// Returns the digits of this parity, ascending.
    ///
    /// # Examples
    ///
    /// ```
    /// use quindici_core::{Digit, Parity};
    ///
    /// assert_eq!(Parity::Odd.pool().len(), 5);
    /// assert_eq!(Parity::Even.pool(), [Digit::D2, Digit::D4, Digit::D6, Digit::D8]);
    /// ```
    #[must_use]
    pub const fn pool(self) -> &'static [Digit] {
        match self {
            Self::Odd => &[Digit::D1, Digit::D3, Digit::D5, Digit::D7, Digit::D9],
            Self::Even => &[Digit::D2, Digit::D4, Digit::D6, Digit::D8],
        }
    }

    /// Returns whether `digit` belongs to this parity.
    #[must_use]
    pub const fn admits(self, digit: Digit) -> bool {
        matches!(
            (self, digit.value() % 2),
            (Self::Odd, 1) | (Self::Even, 0)
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_basic_operations() {
        // try_from_value and value() round-trip for boundary values
        assert_eq!(Digit::try_from_value(1), Some(Digit::D1));
        assert_eq!(Digit::try_from_value(9), Some(Digit::D9));
        assert_eq!(Digit::D1.value(), 1);
        assert_eq!(Digit::D9.value(), 9);

        // ALL constant contains all 9 digits in order
        assert_eq!(Digit::ALL.len(), 9);
        assert_eq!(Digit::ALL[0], Digit::D1);
        assert_eq!(Digit::ALL[8], Digit::D9);

        // try_from_value/value round-trip for all digits
        for digit in Digit::ALL {
            let value = digit.value();
            assert_eq!(Digit::try_from_value(value), Some(digit));
        }

        // Display trait
        assert_eq!(format!("{}", Digit::D1), "1");
        assert_eq!(format!("{}", Digit::D9), "9");

        // From<Digit> for u8
        let value: u8 = Digit::D5.into();
        assert_eq!(value, 5);
    }

    #[test]
    fn test_out_of_range_rejected() {
        assert_eq!(Digit::try_from_value(0), None);
        assert_eq!(Digit::try_from_value(10), None);
        assert_eq!(Digit::try_from_value(255), None);
    }

    #[test]
    fn test_parity_of_digits() {
        for digit in Digit::ALL {
            let expected = if digit.value() % 2 == 1 {
                Parity::Odd
            } else {
                Parity::Even
            };
            assert_eq!(digit.parity(), expected);
            assert!(expected.admits(digit));
        }
        assert!(!Parity::Odd.admits(Digit::D2));
        assert!(!Parity::Even.admits(Digit::D9));
    }

    #[test]
    fn test_parity_pools() {
        assert_eq!(
            Parity::Odd.pool(),
            [Digit::D1, Digit::D3, Digit::D5, Digit::D7, Digit::D9]
        );
        assert_eq!(
            Parity::Even.pool(),
            [Digit::D2, Digit::D4, Digit::D6, Digit::D8]
        );
        for digit in Parity::Odd.pool() {
            assert_eq!(digit.parity(), Parity::Odd);
        }
        for digit in Parity::Even.pool() {
            assert_eq!(digit.parity(), Parity::Even);
        }
    }
}
