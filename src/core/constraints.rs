//! Accumulated letter knowledge for the active puzzle
//!
//! The store tracks three things:
//! - `available`: letters not yet excluded from the solution
//! - `known`: the letter believed correct at each position
//! - `unsure`: letters present in the word but wrong at a position
//!
//! Every operation is total and idempotent. Keeping the sets consistent with
//! the board is the caller's job (see [`super::reconcile`]).

use super::letter::{Letter, LetterSet};
use super::word::MAX_WORD_LENGTH;

/// Letter knowledge for a board of `word_length` positions
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConstraintStore {
    word_length: usize,
    available: LetterSet,
    known: [Option<Letter>; MAX_WORD_LENGTH],
    unsure: [LetterSet; MAX_WORD_LENGTH],
}

impl ConstraintStore {
    /// Fresh store: full alphabet available, nothing known or unsure
    ///
    /// `word_length` is clamped to the supported maximum.
    #[must_use]
    pub fn new(word_length: usize) -> Self {
        Self {
            word_length: word_length.min(MAX_WORD_LENGTH),
            available: LetterSet::full(),
            known: [None; MAX_WORD_LENGTH],
            unsure: [LetterSet::empty(); MAX_WORD_LENGTH],
        }
    }

    #[inline]
    #[must_use]
    pub const fn word_length(&self) -> usize {
        self.word_length
    }

    #[inline]
    #[must_use]
    pub const fn available(&self) -> LetterSet {
        self.available
    }

    #[inline]
    #[must_use]
    pub fn is_available(&self, letter: Letter) -> bool {
        self.available.contains(letter)
    }

    /// Letter known at a position, if any
    #[must_use]
    pub fn known(&self, pos: usize) -> Option<Letter> {
        if pos < self.word_length {
            self.known[pos]
        } else {
            None
        }
    }

    /// Letters known to be misplaced at a position
    #[must_use]
    pub fn unsure(&self, pos: usize) -> LetterSet {
        if pos < self.word_length {
            self.unsure[pos]
        } else {
            LetterSet::empty()
        }
    }

    #[must_use]
    pub fn is_known_at(&self, pos: usize, letter: Letter) -> bool {
        self.known(pos) == Some(letter)
    }

    #[must_use]
    pub fn is_unsure_at(&self, pos: usize, letter: Letter) -> bool {
        self.unsure(pos).contains(letter)
    }

    /// True when the letter is known or unsure at any position
    #[must_use]
    pub fn is_placed_anywhere(&self, letter: Letter) -> bool {
        self.positions()
            .any(|pos| self.is_known_at(pos, letter) || self.is_unsure_at(pos, letter))
    }

    /// Mark `letter` as the correct letter at `pos`
    ///
    /// The letter is dropped from `unsure[pos]` so the two never overlap.
    pub fn set_known(&mut self, pos: usize, letter: Letter) {
        if pos < self.word_length {
            self.unsure[pos].remove(letter);
            self.known[pos] = Some(letter);
        }
    }

    /// Clear the known letter at `pos`, but only if it is still `letter`
    pub fn clear_known(&mut self, pos: usize, letter: Letter) {
        if pos < self.word_length && self.known[pos] == Some(letter) {
            self.known[pos] = None;
        }
    }

    /// Record that `letter` is in the word but not at `pos`
    ///
    /// Ignored while `letter` is the known letter at `pos`.
    pub fn add_unsure(&mut self, pos: usize, letter: Letter) {
        if pos < self.word_length && self.known[pos] != Some(letter) {
            self.unsure[pos].insert(letter);
        }
    }

    pub fn remove_unsure(&mut self, pos: usize, letter: Letter) {
        if pos < self.word_length {
            self.unsure[pos].remove(letter);
        }
    }

    pub fn exclude_available(&mut self, letter: Letter) {
        self.available.remove(letter);
    }

    pub fn restore_available(&mut self, letter: Letter) {
        self.available.insert(letter);
    }

    fn positions(&self) -> std::ops::Range<usize> {
        0..self.word_length
    }
}
