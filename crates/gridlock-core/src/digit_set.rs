//! Compact sets of candidate digits.

use std::{
    fmt::{self, Debug},
    iter::FusedIterator,
    ops::{BitAnd, BitAndAssign, BitOr, BitOrAssign},
};

use crate::digit::Digit;

/// A set of digits 1-9, stored as nine bits of a `u16`.
///
/// Bit `n` represents the digit `n + 1`. All set operations are O(1); this is
/// the workhorse type for candidate tracking in the solver and for house
/// coverage checks in [`Grid`](crate::Grid).
///
/// # Examples
///
/// ```
/// use gridlock_core::{Digit, DigitSet};
///
/// let mut candidates = DigitSet::FULL;
/// candidates.remove(Digit::D5);
/// candidates.remove(Digit::D7);
///
/// assert_eq!(candidates.len(), 7);
/// assert!(!candidates.contains(Digit::D5));
/// assert!(candidates.contains(Digit::D1));
///
/// // A singleton set reveals its only member.
/// let single = DigitSet::from_iter([Digit::D3]);
/// assert_eq!(single.as_single(), Some(Digit::D3));
/// assert_eq!(candidates.as_single(), None);
/// ```
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct DigitSet(u16);

const MASK: u16 = 0x1ff;

impl DigitSet {
    /// The empty set.
    pub const EMPTY: Self = Self(0);
    /// The set containing all nine digits.
    pub const FULL: Self = Self(MASK);

    /// Creates an empty set.
    #[must_use]
    pub const fn new() -> Self {
        Self::EMPTY
    }

    /// Creates a set containing just `digit`.
    #[must_use]
    pub const fn from_elem(digit: Digit) -> Self {
        Self(Self::bit(digit))
    }

    const fn bit(digit: Digit) -> u16 {
        1 << (digit.value() - 1)
    }

    /// Returns `true` if `digit` is a member of this set.
    #[must_use]
    pub const fn contains(self, digit: Digit) -> bool {
        self.0 & Self::bit(digit) != 0
    }

    /// Adds `digit` to this set.
    pub const fn insert(&mut self, digit: Digit) {
        self.0 |= Self::bit(digit);
    }

    /// Removes `digit` from this set.
    pub const fn remove(&mut self, digit: Digit) {
        self.0 &= !Self::bit(digit);
    }

    /// Returns the number of digits in this set.
    #[must_use]
    pub const fn len(self) -> usize {
        self.0.count_ones() as usize
    }

    /// Returns `true` if this set has no members.
    #[must_use]
    pub const fn is_empty(self) -> bool {
        self.0 == 0
    }

    /// Returns the sole member if this set has exactly one, `None` otherwise.
    ///
    /// This is the "naked single" test: an empty cell whose candidate set
    /// answers `Some` here has a forced value.
    #[must_use]
    pub fn as_single(self) -> Option<Digit> {
        if self.0.is_power_of_two() {
            #[expect(clippy::cast_possible_truncation)]
            let value = self.0.trailing_zeros() as u8 + 1;
            Digit::try_from_value(value)
        } else {
            None
        }
    }

    /// Returns an iterator over the members in ascending order.
    #[must_use]
    pub fn iter(self) -> Iter {
        Iter(self.0)
    }
}

impl Default for DigitSet {
    fn default() -> Self {
        Self::EMPTY
    }
}

impl Debug for DigitSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_set().entries(self.iter()).finish()
    }
}

impl FromIterator<Digit> for DigitSet {
    fn from_iter<T: IntoIterator<Item = Digit>>(iter: T) -> Self {
        let mut set = Self::EMPTY;
        for digit in iter {
            set.insert(digit);
        }
        set
    }
}

impl IntoIterator for DigitSet {
    type Item = Digit;
    type IntoIter = Iter;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl BitAnd for DigitSet {
    type Output = Self;

    fn bitand(self, rhs: Self) -> Self {
        Self(self.0 & rhs.0)
    }
}

impl BitAndAssign for DigitSet {
    fn bitand_assign(&mut self, rhs: Self) {
        self.0 &= rhs.0;
    }
}

impl BitOr for DigitSet {
    type Output = Self;

    fn bitor(self, rhs: Self) -> Self {
        Self(self.0 | rhs.0)
    }
}

impl BitOrAssign for DigitSet {
    fn bitor_assign(&mut self, rhs: Self) {
        self.0 |= rhs.0;
    }
}

/// Iterator over the digits of a [`DigitSet`], ascending.
#[derive(Debug, Clone)]
pub struct Iter(u16);

impl Iterator for Iter {
    type Item = Digit;

    fn next(&mut self) -> Option<Self::Item> {
        if self.0 == 0 {
            return None;
        }
        #[expect(clippy::cast_possible_truncation)]
        let value = self.0.trailing_zeros() as u8 + 1;
        self.0 &= self.0 - 1;
        Digit::try_from_value(value)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let len = self.0.count_ones() as usize;
        (len, Some(len))
    }
}

impl FusedIterator for Iter {}
impl ExactSizeIterator for Iter {}

#[cfg(test)]
mod tests {
    use crate::digit::Digit::{self, *};

    use super::*;

    #[test]
    fn test_insert_remove_contains() {
        let mut set = DigitSet::new();
        set.insert(D1);
        set.insert(D9);
        assert!(set.contains(D1));
        assert!(set.contains(D9));
        assert!(!set.contains(D5));
        assert_eq!(set.len(), 2);

        set.remove(D1);
        assert!(!set.contains(D1));
        assert_eq!(set.len(), 1);

        // Removing an absent digit is a no-op
        set.remove(D1);
        assert_eq!(set.len(), 1);
    }

    #[test]
    fn test_iteration_order() {
        let set = DigitSet::from_iter([D9, D1, D5, D3]);
        let collected: Vec<_> = set.iter().collect();
        assert_eq!(collected, vec![D1, D3, D5, D9]);
    }

    #[test]
    fn test_as_single() {
        assert_eq!(DigitSet::EMPTY.as_single(), None);
        assert_eq!(DigitSet::FULL.as_single(), None);
        assert_eq!(DigitSet::from_iter([D2, D7]).as_single(), None);
        for digit in Digit::ALL {
            assert_eq!(DigitSet::from_elem(digit).as_single(), Some(digit));
        }
    }

    #[test]
    fn test_bit_operations() {
        let a = DigitSet::from_iter([D1, D2, D3]);
        let b = DigitSet::from_iter([D2, D3, D4]);

        assert_eq!((a | b).len(), 4);
        assert_eq!((a & b).len(), 2);
        assert_eq!(a & b, DigitSet::from_iter([D2, D3]));
    }

    #[test]
    fn test_constants() {
        assert_eq!(DigitSet::EMPTY.len(), 0);
        assert!(DigitSet::EMPTY.is_empty());
        assert_eq!(DigitSet::FULL.len(), 9);

        for digit in Digit::ALL {
            assert!(DigitSet::FULL.contains(digit));
        }
    }

    #[test]
    fn test_debug_lists_members() {
        let set = DigitSet::from_iter([D4, D8]);
        assert_eq!(format!("{set:?}"), "{D4, D8}");
    }
}
