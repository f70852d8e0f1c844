//! Letters of the A-Z puzzle alphabet and a compact set of them
//!
//! A `Letter` is an index into the fixed 26-letter alphabet. A `LetterSet`
//! stores membership as one bit per letter, so every set operation is
//! constant-time and iteration always runs in alphabet order.

use std::fmt;

/// Number of letters in the puzzle alphabet
pub const ALPHABET_LEN: usize = 26;

/// A single uppercase letter A-Z
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Letter(u8);

impl Letter {
    /// Create a letter from a character, ignoring case
    ///
    /// Returns `None` for anything outside A-Z.
    ///
    /// # Examples
    /// ```
    /// use solvle::core::Letter;
    ///
    /// assert_eq!(Letter::from_char('c'), Letter::from_char('C'));
    /// assert!(Letter::from_char('3').is_none());
    /// ```
    #[must_use]
    pub fn from_char(ch: char) -> Option<Self> {
        let upper = ch.to_ascii_uppercase();
        upper
            .is_ascii_uppercase()
            .then(|| Self(upper as u8 - b'A'))
    }

    /// Create a letter from its alphabet index (0 = A)
    #[inline]
    #[must_use]
    pub const fn from_index(index: usize) -> Option<Self> {
        if index < ALPHABET_LEN {
            Some(Self(index as u8))
        } else {
            None
        }
    }

    /// Alphabet index (0 = A, 25 = Z)
    #[inline]
    #[must_use]
    pub const fn index(self) -> usize {
        self.0 as usize
    }

    /// Uppercase character for this letter
    #[inline]
    #[must_use]
    pub const fn to_char(self) -> char {
        (b'A' + self.0) as char
    }

    /// Iterate the whole alphabet in order
    pub fn all() -> impl Iterator<Item = Self> {
        (0..ALPHABET_LEN as u8).map(Self)
    }
}

impl fmt::Display for Letter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_char())
    }
}

/// Set of letters stored as a 26-bit mask
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct LetterSet(u32);

impl LetterSet {
    const FULL_MASK: u32 = (1 << ALPHABET_LEN) - 1;

    /// The empty set
    #[must_use]
    pub const fn empty() -> Self {
        Self(0)
    }

    /// Every letter A-Z
    #[must_use]
    pub const fn full() -> Self {
        Self(Self::FULL_MASK)
    }

    #[inline]
    #[must_use]
    pub const fn contains(self, letter: Letter) -> bool {
        self.0 & (1 << letter.0) != 0
    }

    /// Add a letter, returning true if it was not already present
    #[inline]
    pub fn insert(&mut self, letter: Letter) -> bool {
        let added = !self.contains(letter);
        self.0 |= 1 << letter.0;
        added
    }

    /// Remove a letter, returning true if it was present
    #[inline]
    pub fn remove(&mut self, letter: Letter) -> bool {
        let removed = self.contains(letter);
        self.0 &= !(1 << letter.0);
        removed
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

    /// Iterate members in alphabet order
    pub fn iter(self) -> impl Iterator<Item = Letter> {
        Letter::all().filter(move |&letter| self.contains(letter))
    }
}

impl FromIterator<Letter> for LetterSet {
    fn from_iter<I: IntoIterator<Item = Letter>>(iter: I) -> Self {
        let mut set = Self::empty();
        for letter in iter {
            set.insert(letter);
        }
        set
    }
}

impl fmt::Display for LetterSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for letter in self.iter() {
            write!(f, "{letter}")?;
        }
        Ok(())
    }
}
