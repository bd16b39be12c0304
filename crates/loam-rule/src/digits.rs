//! Deduplicated sets of single decimal digits.

use std::fmt;

/// A set of decimal digits `0..=9`, backed by a bitmask.
///
/// Insertion order is irrelevant; iteration and [`Display`](fmt::Display)
/// always run ascending, which is what makes rulestring serialization
/// canonical.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct DigitSet(u16);

impl DigitSet {
    /// The empty set.
    pub fn empty() -> Self {
        Self(0)
    }

    /// Build a set from a slice of digits. Values above 9 are ignored.
    pub fn from_digits(digits: &[u8]) -> Self {
        let mut set = Self::empty();
        for &d in digits {
            set.insert(d);
        }
        set
    }

    /// Add a digit to the set. Values above 9 are ignored.
    pub fn insert(&mut self, digit: u8) {
        if digit <= 9 {
            self.0 |= 1 << digit;
        }
    }

    /// `true` when `digit` is in the set.
    pub fn contains(&self, digit: u8) -> bool {
        digit <= 9 && self.0 & (1 << digit) != 0
    }

    /// `true` when the set has no digits.
    pub fn is_empty(&self) -> bool {
        self.0 == 0
    }

    /// Number of digits in the set.
    pub fn len(&self) -> usize {
        self.0.count_ones() as usize
    }

    /// The digits in ascending order.
    pub fn digits(&self) -> Vec<u8> {
        (0..=9).filter(|&d| self.contains(d)).collect()
    }
}

impl fmt::Display for DigitSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for d in self.digits() {
            write!(f, "{d}")?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn insert_deduplicates() {
        let set = DigitSet::from_digits(&[2, 9, 3, 4, 2, 9]);
        assert_eq!(set.len(), 4);
        assert_eq!(set.digits(), vec![2, 3, 4, 9]);
    }

    #[test]
    fn display_is_sorted_concatenation() {
        let set = DigitSet::from_digits(&[7, 6, 4]);
        assert_eq!(set.to_string(), "467");
    }

    #[test]
    fn contains_checks_membership() {
        let set = DigitSet::from_digits(&[0, 8]);
        assert!(set.contains(0));
        assert!(set.contains(8));
        assert!(!set.contains(5));
        assert!(!set.contains(10));
    }

    #[test]
    fn out_of_range_digits_ignored() {
        let mut set = DigitSet::empty();
        set.insert(10);
        set.insert(255);
        assert!(set.is_empty());
    }
}
