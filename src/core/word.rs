//! Puzzle word representation
//!
//! A Word is a validated run of 3-8 letters, used for bulk row entry,
//! auto-colour solutions and solve requests.

use super::letter::Letter;
use std::fmt;
use thiserror::Error;

/// Shortest supported word length
pub const MIN_WORD_LENGTH: usize = 3;

/// Longest supported word length
///
/// Positions are encoded as single digits in the restriction string, so this
/// must stay below 10.
pub const MAX_WORD_LENGTH: usize = 8;

/// A puzzle word of 3-8 letters
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Word {
    letters: Vec<Letter>,
}

/// Error type for invalid words
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum WordError {
    #[error("Word must be {MIN_WORD_LENGTH}-{MAX_WORD_LENGTH} letters, got {0}")]
    InvalidLength(usize),
    #[error("Word must be exactly {expected} letters, got {actual}")]
    LengthMismatch { expected: usize, actual: usize },
    #[error("Word contains invalid character '{0}'")]
    InvalidCharacter(char),
}

impl Word {
    /// Create a new Word from a string
    ///
    /// Surrounding whitespace is ignored and case is normalized.
    ///
    /// # Errors
    /// Returns `WordError` if:
    /// - Length is outside 3-8
    /// - Any character is not an ASCII letter
    ///
    /// # Examples
    /// ```
    /// use solvle::core::Word;
    ///
    /// let word = Word::new("crane").unwrap();
    /// assert_eq!(word.to_string(), "CRANE");
    ///
    /// assert!(Word::new("toolonger").is_err());
    /// assert!(Word::new("sh0rt").is_err());
    /// ```
    pub fn new(text: &str) -> Result<Self, WordError> {
        let text = text.trim();

        let letters = text
            .chars()
            .map(|ch| Letter::from_char(ch).ok_or(WordError::InvalidCharacter(ch)))
            .collect::<Result<Vec<_>, _>>()?;

        if !(MIN_WORD_LENGTH..=MAX_WORD_LENGTH).contains(&letters.len()) {
            return Err(WordError::InvalidLength(letters.len()));
        }

        Ok(Self { letters })
    }

    /// Create a word that must match the board's word length
    ///
    /// # Errors
    /// Returns `WordError::LengthMismatch` when the lengths differ, or any
    /// error from [`Word::new`].
    pub fn with_length(text: &str, expected: usize) -> Result<Self, WordError> {
        let word = Self::new(text)?;
        if word.len() != expected {
            return Err(WordError::LengthMismatch {
                expected,
                actual: word.len(),
            });
        }
        Ok(word)
    }

    #[inline]
    #[must_use]
    pub fn letters(&self) -> &[Letter] {
        &self.letters
    }

    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.letters.len()
    }

    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.letters.is_empty()
    }

    /// Get the letter at a specific position
    ///
    /// # Panics
    /// Panics if position >= len
    #[inline]
    #[must_use]
    pub fn letter_at(&self, position: usize) -> Letter {
        self.letters[position]
    }

    #[must_use]
    pub fn contains(&self, letter: Letter) -> bool {
        self.letters.contains(&letter)
    }

    /// Count of each letter, indexed by alphabet position
    ///
    /// Used for feedback calculation with duplicate letters.
    pub(crate) fn letter_counts(&self) -> [u8; super::letter::ALPHABET_LEN] {
        let mut counts = [0u8; super::letter::ALPHABET_LEN];
        for letter in &self.letters {
            counts[letter.index()] += 1;
        }
        counts
    }
}

impl fmt::Display for Word {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for letter in &self.letters {
            write!(f, "{letter}")?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn word_creation_valid() {
        let word = Word::new("crane").unwrap();
        assert_eq!(word.to_string(), "CRANE");
        assert_eq!(word.len(), 5);
    }

    #[test]
    fn word_creation_case_and_whitespace_normalized() {
        let word = Word::new("  CrAnE ").unwrap();
        assert_eq!(word.to_string(), "CRANE");
    }

    #[test]
    fn word_creation_invalid_length() {
        assert_eq!(Word::new("ab"), Err(WordError::InvalidLength(2)));
        assert_eq!(Word::new("abcdefghi"), Err(WordError::InvalidLength(9)));
        assert_eq!(Word::new(""), Err(WordError::InvalidLength(0)));
    }

    #[test]
    fn word_creation_invalid_characters() {
        assert_eq!(Word::new("cran3"), Err(WordError::InvalidCharacter('3')));
        assert!(Word::new("cr ne").is_err());
        assert!(Word::new("cran!").is_err());
    }

    #[test]
    fn word_with_length_checks_board_width() {
        assert!(Word::with_length("crane", 5).is_ok());
        assert_eq!(
            Word::with_length("crane", 6),
            Err(WordError::LengthMismatch {
                expected: 6,
                actual: 5
            })
        );
    }

    #[test]
    fn word_letter_at_and_contains() {
        let word = Word::new("speed").unwrap();
        assert_eq!(word.letter_at(2).to_char(), 'E');
        assert!(word.contains(Letter::from_char('d').unwrap()));
        assert!(!word.contains(Letter::from_char('z').unwrap()));
    }

    #[test]
    fn word_letter_counts_duplicates() {
        let word = Word::new("speed").unwrap();
        let counts = word.letter_counts();
        assert_eq!(counts[Letter::from_char('e').unwrap().index()], 2);
        assert_eq!(counts[Letter::from_char('s').unwrap().index()], 1);
        assert_eq!(counts.iter().map(|&c| usize::from(c)).sum::<usize>(), 5);
    }
}
