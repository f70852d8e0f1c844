//! Per-cell letter state machine
//!
//! A cell's state is never stored. It is derived from the cell's letter and
//! the constraint store, and a click applies the store edits that move the
//! cell to the next state in the cycle:
//!
//! ```text
//! Neutral -> Excluded -> Unsure -> Known -> Neutral
//! Contradiction -> cleared
//! ```

use super::constraints::ConstraintStore;
use super::letter::Letter;

/// Display state of one board cell
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CellState {
    /// No letter
    Blank,
    /// Available and not placed at this position
    Neutral,
    /// Not available and not placed, the letter is ruled out
    Excluded,
    /// In the word but not at this position
    Unsure,
    /// Correct at this position
    Known,
    /// Placed known or unsure here, yet excluded from `available`
    Contradiction,
}

impl CellState {
    /// Derive the state of `letter` at `pos`
    ///
    /// # Examples
    /// ```
    /// use solvle::core::{CellState, ConstraintStore, Letter};
    ///
    /// let a = Letter::from_char('a').unwrap();
    /// let mut store = ConstraintStore::new(5);
    /// assert_eq!(CellState::derive(&store, 2, Some(a)), CellState::Neutral);
    ///
    /// store.add_unsure(2, a);
    /// store.exclude_available(a);
    /// assert_eq!(CellState::derive(&store, 2, Some(a)), CellState::Contradiction);
    /// ```
    #[must_use]
    pub fn derive(store: &ConstraintStore, pos: usize, letter: Option<Letter>) -> Self {
        let Some(letter) = letter else {
            return Self::Blank;
        };

        let available = store.is_available(letter);
        let known = store.is_known_at(pos, letter);
        let unsure = store.is_unsure_at(pos, letter);

        match (available, known, unsure) {
            (false, true, _) | (false, _, true) => Self::Contradiction,
            (_, true, _) => Self::Known,
            (_, _, true) => Self::Unsure,
            (true, false, false) => Self::Neutral,
            (false, false, false) => Self::Excluded,
        }
    }

    /// The state a click moves this cell to, assuming the edits succeed
    #[must_use]
    pub const fn next(self) -> Self {
        match self {
            Self::Blank => Self::Blank,
            Self::Neutral => Self::Excluded,
            Self::Excluded => Self::Unsure,
            Self::Unsure => Self::Known,
            Self::Known => Self::Neutral,
            Self::Contradiction => Self::Excluded,
        }
    }

    /// Short label for status lines
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Blank => "blank",
            Self::Neutral => "neutral",
            Self::Excluded => "excluded",
            Self::Unsure => "unsure",
            Self::Known => "known",
            Self::Contradiction => "contradiction",
        }
    }
}

/// Apply a click on `letter` at `pos`, returning the state before the click
///
/// Blank cells are left alone. Permission checks (the row must not be past
/// the cursor) belong to the caller.
pub fn toggle(store: &mut ConstraintStore, pos: usize, letter: Option<Letter>) -> CellState {
    let state = CellState::derive(store, pos, letter);
    let Some(letter) = letter else {
        return state;
    };

    match state {
        CellState::Blank => {}
        CellState::Neutral => {
            store.exclude_available(letter);
            store.clear_known(pos, letter);
        }
        CellState::Excluded => {
            store.restore_available(letter);
            store.add_unsure(pos, letter);
        }
        CellState::Unsure => {
            store.remove_unsure(pos, letter);
            store.set_known(pos, letter);
        }
        CellState::Known => {
            store.clear_known(pos, letter);
        }
        CellState::Contradiction => {
            store.clear_known(pos, letter);
            store.remove_unsure(pos, letter);
        }
    }
    state
}
