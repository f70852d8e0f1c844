//! Core puzzle state
//!
//! Letters, words, the board, the constraint store and the rules that keep
//! them consistent. Nothing here performs I/O.

mod board;
pub mod cell;
mod constraints;
mod letter;
mod pattern;
pub mod reconcile;
mod word;

pub use board::{Board, Cursor};
pub use cell::CellState;
pub use constraints::ConstraintStore;
pub use letter::{ALPHABET_LEN, Letter, LetterSet};
pub use pattern::{Mark, Pattern};
pub use reconcile::Reconciliation;
pub use word::{MAX_WORD_LENGTH, MIN_WORD_LENGTH, Word, WordError};
