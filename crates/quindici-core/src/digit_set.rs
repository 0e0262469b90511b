//! A set of digits 1-9, represented as a bitset.

use crate::digit::Digit;

/// A set of digits from 1 to 9.
///
/// The implementation uses a 16-bit integer where bits 0-8 represent digits
/// 1-9 respectively, providing efficient storage and fast set operations.
/// Iteration yields digits in ascending order.
///
/// # Examples
///
/// ```
/// use quindici_core::{Digit, DigitSet};
///
/// let mut used = DigitSet::new();
/// used.insert(Digit::D1);
/// used.insert(Digit::D5);
/// used.insert(Digit::D9);
///
/// assert_eq!(used.len(), 3);
/// assert!(used.contains(Digit::D5));
///
/// let collected: Vec<_> = used.iter().collect();
/// assert_eq!(collected, vec![Digit::D1, Digit::D5, Digit::D9]);
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct DigitSet {
    bits: u16,
}

impl DigitSet {
    /// The empty set.
    pub const EMPTY: Self = Self { bits: 0 };

    /// The set containing all 9 digits.
    pub const FULL: Self = Self { bits: 0b1_1111_1111 };

    /// Creates an empty set.
    #[must_use]
    pub const fn new() -> Self {
        Self::EMPTY
    }

    const fn bit(digit: Digit) -> u16 {
        1 << (digit.value() - 1)
    }

    /// Inserts a digit into the set. Inserting an already present digit is a
    /// no-op.
    pub const fn insert(&mut self, digit: Digit) {
        self.bits |= Self::bit(digit);
    }

    /// Removes a digit from the set. Removing an absent digit is a no-op.
    pub const fn remove(&mut self, digit: Digit) {
        self.bits &= !Self::bit(digit);
    }

    /// Returns whether the set contains `digit`.
    #[must_use]
    pub const fn contains(self, digit: Digit) -> bool {
        self.bits & Self::bit(digit) != 0
    }

    /// Returns the number of digits in the set.
    #[must_use]
    pub const fn len(self) -> usize {
        self.bits.count_ones() as usize
    }

    /// Returns whether the set is empty.
    #[must_use]
    pub const fn is_empty(self) -> bool {
        self.bits == 0
    }

    /// Returns an iterator over the digits in the set, ascending.
    #[must_use]
    pub const fn iter(self) -> Iter {
        Iter { bits: self.bits }
    }
}

/// Iterator over the digits of a [`DigitSet`], ascending.
#[derive(Debug, Clone)]
pub struct Iter {
    bits: u16,
}

impl Iterator for Iter {
    type Item = Digit;

    fn next(&mut self) -> Option<Digit> {
        if self.bits == 0 {
            return None;
        }
        #[expect(clippy::cast_possible_truncation)]
        let index = self.bits.trailing_zeros() as u8;
        self.bits &= self.bits - 1;
        Some(Digit::from_value(index + 1))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let len = self.bits.count_ones() as usize;
        (len, Some(len))
    }
}

impl ExactSizeIterator for Iter {}

impl FromIterator<Digit> for DigitSet {
    fn from_iter<I: IntoIterator<Item = Digit>>(iter: I) -> Self {
        let mut set = Self::new();
        for digit in iter {
            set.insert(digit);
        }
        set
    }
}

impl IntoIterator for DigitSet {
    type Item = Digit;
    type IntoIter = Iter;

    fn into_iter(self) -> Iter {
        self.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_insert_remove_contains() {
        let mut set = DigitSet::new();
        assert!(set.is_empty());

        set.insert(Digit::D1);
        set.insert(Digit::D9);
        assert!(set.contains(Digit::D1));
        assert!(set.contains(Digit::D9));
        assert!(!set.contains(Digit::D5));
        assert_eq!(set.len(), 2);

        // Double insert is a no-op
        set.insert(Digit::D1);
        assert_eq!(set.len(), 2);

        set.remove(Digit::D1);
        assert!(!set.contains(Digit::D1));
        assert_eq!(set.len(), 1);

        // Removing an absent digit is a no-op
        set.remove(Digit::D1);
        assert_eq!(set.len(), 1);
    }

    #[test]
    fn test_from_iter_and_iteration_order() {
        let set: DigitSet = [Digit::D9, Digit::D1, Digit::D5, Digit::D3]
            .into_iter()
            .collect();
        let collected: Vec<_> = set.iter().collect();
        assert_eq!(collected, vec![Digit::D1, Digit::D3, Digit::D5, Digit::D9]);
    }

    #[test]
    fn test_constants() {
        assert_eq!(DigitSet::EMPTY.len(), 0);
        assert_eq!(DigitSet::FULL.len(), 9);

        for digit in Digit::ALL {
            assert!(DigitSet::FULL.contains(digit));
            assert!(!DigitSet::EMPTY.contains(digit));
        }
    }

    mod props {
        use proptest::prelude::*;

        use super::*;

        proptest! {
            #[test]
            fn set_matches_reference_implementation(
                values in prop::collection::vec(1u8..=9, 0..20),
            ) {
                let mut set = DigitSet::new();
                let mut reference = std::collections::BTreeSet::new();
                for value in values {
                    let digit = Digit::from_value(value);
                    set.insert(digit);
                    reference.insert(digit);
                }

                prop_assert_eq!(set.len(), reference.len());
                let collected: Vec<_> = set.iter().collect();
                let expected: Vec<_> = reference.into_iter().collect();
                prop_assert_eq!(collected, expected);
            }
        }
    }
}
