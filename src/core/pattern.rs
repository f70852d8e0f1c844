//! Wordle feedback patterns
//!
//! A pattern is the per-position colouring a guess receives:
//! - Absent (gray): letter not in the word, or every copy already accounted for
//! - Present (yellow): letter in the word, wrong position
//! - Correct (green): letter in the correct position
//!
//! Patterns drive auto-colouring against a known solution and manual
//! feedback entry for a completed row.

use super::word::{MAX_WORD_LENGTH, Word};
use std::fmt;

/// Colour of a single feedback square
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Mark {
    #[default]
    Absent,
    Present,
    Correct,
}

/// Feedback pattern for one guess
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Pattern {
    marks: [Mark; MAX_WORD_LENGTH],
    len: usize,
}

impl Pattern {
    /// Calculate the pattern when `guess` is played against `answer`
    ///
    /// Implements Wordle's duplicate-letter rules.
    ///
    /// # Algorithm
    /// 1. First pass: mark exact matches (greens) and remove them from the pool
    /// 2. Second pass: mark present-but-misplaced letters (yellows) from what is left
    ///
    /// Returns `None` when the words differ in length.
    ///
    /// # Examples
    /// ```
    /// use solvle::core::{Pattern, Word};
    ///
    /// let guess = Word::new("crane").unwrap();
    /// let answer = Word::new("slate").unwrap();
    /// let pattern = Pattern::calculate(&guess, &answer).unwrap();
    /// assert_eq!(pattern.to_string(), "--G-G");
    /// ```
    #[must_use]
    pub fn calculate(guess: &Word, answer: &Word) -> Option<Self> {
        if guess.len() != answer.len() {
            return None;
        }

        let mut marks = [Mark::Absent; MAX_WORD_LENGTH];
        let mut pool = answer.letter_counts();

        for (i, (g, a)) in guess.letters().iter().zip(answer.letters()).enumerate() {
            if g == a {
                marks[i] = Mark::Correct;
                pool[g.index()] -= 1;
            }
        }

        for (i, g) in guess.letters().iter().enumerate() {
            if marks[i] == Mark::Absent && pool[g.index()] > 0 {
                marks[i] = Mark::Present;
                pool[g.index()] -= 1;
            }
        }

        Some(Self {
            marks,
            len: guess.len(),
        })
    }

    /// Parse a pattern from a string like "GY-GY" or "🟩🟨⬜🟩🟨"
    ///
    /// Accepts:
    /// - 'G'/'g'/🟩 for correct
    /// - 'Y'/'y'/🟨 for present
    /// - '-'/'_'/'.'/⬜/⬛ for absent
    ///
    /// # Examples
    /// ```
    /// use solvle::core::Pattern;
    ///
    /// let p1 = Pattern::parse("GY-GY").unwrap();
    /// let p2 = Pattern::parse("🟩🟨⬜🟩🟨").unwrap();
    /// assert_eq!(p1, p2);
    /// ```
    #[must_use]
    pub fn parse(s: &str) -> Option<Self> {
        let mut marks = [Mark::Absent; MAX_WORD_LENGTH];
        let mut len = 0;

        for ch in s.trim().chars() {
            if len == MAX_WORD_LENGTH {
                return None;
            }
            marks[len] = match ch {
                'G' | 'g' | '🟩' => Mark::Correct,
                'Y' | 'y' | '🟨' => Mark::Present,
                '-' | '_' | '.' | '⬜' | '⬛' => Mark::Absent,
                _ => return None,
            };
            len += 1;
        }

        (len > 0).then_some(Self { marks, len })
    }

    #[inline]
    #[must_use]
    pub const fn len(&self) -> usize {
        self.len
    }

    #[inline]
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.len == 0
    }

    #[must_use]
    pub fn marks(&self) -> &[Mark] {
        &self.marks[..self.len]
    }

    /// All greens
    #[must_use]
    pub fn is_perfect(&self) -> bool {
        self.marks().iter().all(|&m| m == Mark::Correct)
    }

    /// Convert pattern to emoji string
    #[must_use]
    pub fn to_emoji(&self) -> String {
        self.marks()
            .iter()
            .map(|mark| match mark {
                Mark::Correct => '🟩',
                Mark::Present => '🟨',
                Mark::Absent => '⬜',
            })
            .collect()
    }
}

impl fmt::Display for Pattern {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for mark in self.marks() {
            let ch = match mark {
                Mark::Correct => 'G',
                Mark::Present => 'Y',
                Mark::Absent => '-',
            };
            write!(f, "{ch}")?;
        }
        Ok(())
    }
}

impl std::str::FromStr for Pattern {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s).ok_or_else(|| format!("Invalid pattern string: {s}"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pattern(guess: &str, answer: &str) -> Pattern {
        Pattern::calculate(&Word::new(guess).unwrap(), &Word::new(answer).unwrap()).unwrap()
    }

    #[test]
    fn pattern_all_gray() {
        let p = pattern("abcde", "fghij");
        assert_eq!(p.to_string(), "-----");
        assert!(!p.is_perfect());
    }

    #[test]
    fn pattern_all_green() {
        let p = pattern("crane", "crane");
        assert!(p.is_perfect());
    }

    #[test]
    fn pattern_duplicate_letters_green_takes_priority() {
        // SPEED vs ERASE: S yellow, both E's yellow
        assert_eq!(pattern("speed", "erase").to_string(), "Y-YY-");
    }

    #[test]
    fn pattern_duplicate_letters_complex() {
        // ROBOT vs FLOOR: first O yellow, second O green
        assert_eq!(pattern("robot", "floor").to_string(), "YY-G-");
    }

    #[test]
    fn pattern_extra_copies_are_gray() {
        // Only one L in PLANT, the green claims it
        assert_eq!(pattern("llama", "plant").to_string(), "-GG--");
    }

    #[test]
    fn pattern_other_lengths() {
        assert_eq!(pattern("cat", "act").to_string(), "YYG");
        assert_eq!(pattern("plumbers", "numbered").to_string(), "--YYYYY-");
    }

    #[test]
    fn pattern_length_mismatch_is_none() {
        let guess = Word::new("cat").unwrap();
        let answer = Word::new("crane").unwrap();
        assert!(Pattern::calculate(&guess, &answer).is_none());
    }

    #[test]
    fn pattern_parse_valid() {
        let p1 = Pattern::parse("GYG--").unwrap();
        let p2 = Pattern::parse("🟩🟨🟩⬜⬜").unwrap();
        let p3 = Pattern::parse("gyg__").unwrap();
        assert_eq!(p1, p2);
        assert_eq!(p1, p3);
        assert_eq!(p1.len(), 5);
    }

    #[test]
    fn pattern_parse_invalid() {
        assert!(Pattern::parse("GXGGY").is_none());
        assert!(Pattern::parse("").is_none());
        assert!(Pattern::parse("GGGGGGGGG").is_none());
    }

    #[test]
    fn pattern_emoji() {
        assert_eq!(Pattern::parse("GY-").unwrap().to_emoji(), "🟩🟨⬜");
    }
}
