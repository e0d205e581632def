//! Compact letter sets
//!
//! A `LetterSet` stores any subset of `a..=z` as bits of a `u32`, so the
//! per-position character classes of the matcher are single AND/OR operations.

use std::fmt;

const ALL_BITS: u32 = (1 << 26) - 1;

/// A set of lowercase ASCII letters
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct LetterSet(u32);

/// Bit for a lowercase ASCII letter, `None` for anything else
#[inline]
const fn bit(letter: u8) -> Option<u32> {
    if letter.is_ascii_lowercase() {
        Some(1 << (letter - b'a'))
    } else {
        None
    }
}

impl LetterSet {
    /// The empty set
    pub const EMPTY: Self = Self(0);

    /// Every letter `a..=z`
    pub const ALL: Self = Self(ALL_BITS);

    /// Set holding a single letter (empty if `letter` is not `a..=z`)
    #[inline]
    #[must_use]
    pub const fn single(letter: u8) -> Self {
        match bit(letter) {
            Some(b) => Self(b),
            None => Self::EMPTY,
        }
    }

    /// Collect the letters of a byte slice; non-letters are ignored
    #[must_use]
    pub fn from_bytes(bytes: &[u8]) -> Self {
        bytes
            .iter()
            .fold(Self::EMPTY, |set, &b| set.with(b))
    }

    #[inline]
    #[must_use]
    pub const fn with(self, letter: u8) -> Self {
        match bit(letter) {
            Some(b) => Self(self.0 | b),
            None => self,
        }
    }

    #[inline]
    pub fn insert(&mut self, letter: u8) {
        *self = self.with(letter);
    }

    #[inline]
    #[must_use]
    pub const fn contains(self, letter: u8) -> bool {
        match bit(letter) {
            Some(b) => self.0 & b != 0,
            None => false,
        }
    }

    #[inline]
    #[must_use]
    pub const fn union(self, other: Self) -> Self {
        Self(self.0 | other.0)
    }

    #[inline]
    #[must_use]
    pub const fn intersection(self, other: Self) -> Self {
        Self(self.0 & other.0)
    }

    /// Letters in `self` that are not in `other`
    #[inline]
    #[must_use]
    pub const fn difference(self, other: Self) -> Self {
        Self(self.0 & !other.0)
    }

    /// True if every letter of `self` is also in `other`
    #[inline]
    #[must_use]
    pub const fn is_subset(self, other: Self) -> bool {
        self.0 & !other.0 == 0
    }

    #[inline]
    #[must_use]
    pub const fn is_empty(self) -> bool {
        self.0 == 0
    }

    #[inline]
    #[must_use]
    pub const fn len(self) -> usize {
        self.0.count_ones() as usize
    }

    /// Letters in alphabetical order
    pub fn iter(self) -> impl Iterator<Item = u8> {
        (b'a'..=b'z').filter(move |&letter| self.contains(letter))
    }
}

impl FromIterator<u8> for LetterSet {
    fn from_iter<I: IntoIterator<Item = u8>>(iter: I) -> Self {
        iter.into_iter().fold(Self::EMPTY, Self::with)
    }
}

impl fmt::Display for LetterSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for letter in self.iter() {
            write!(f, "{}", letter as char)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn insert_and_contains() {
        let mut set = LetterSet::EMPTY;
        set.insert(b'c');
        set.insert(b'e');

        assert!(set.contains(b'c'));
        assert!(set.contains(b'e'));
        assert!(!set.contains(b'a'));
        assert_eq!(set.len(), 2);
    }

    #[test]
    fn non_letters_are_ignored() {
        let set = LetterSet::from_bytes(b"a1 B-z");
        assert_eq!(set.to_string(), "az");
        assert!(!set.contains(b'1'));
    }

    #[test]
    fn all_has_twenty_six_letters() {
        assert_eq!(LetterSet::ALL.len(), 26);
        assert!(LetterSet::ALL.contains(b'a'));
        assert!(LetterSet::ALL.contains(b'z'));
    }

    #[test]
    fn set_algebra() {
        let crane = LetterSet::from_bytes(b"crane");
        let train = LetterSet::from_bytes(b"train");

        assert_eq!(crane.intersection(train).to_string(), "anr");
        assert_eq!(crane.difference(train).to_string(), "ce");
        assert_eq!(crane.union(train).to_string(), "aceinrt");
        assert!(LetterSet::from_bytes(b"ran").is_subset(crane));
        assert!(!train.is_subset(crane));
    }

    #[test]
    fn duplicates_collapse() {
        let set = LetterSet::from_bytes(b"error");
        assert_eq!(set.len(), 3);
        assert_eq!(set.iter().collect::<Vec<_>>(), vec![b'e', b'o', b'r']);
    }
}
