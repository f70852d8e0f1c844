//! Board controller
//!
//! Owns the board, the cursor and the constraint store and keeps them
//! consistent under every edit. Network traffic is described, not performed:
//! the controller queues `Outgoing` requests and accepts replies, and the
//! caller decides how to run them.

mod marking;
mod results;

pub use results::Outgoing;

use crate::core::{
    Board, CellState, ConstraintStore, Cursor, Letter, Reconciliation, Word, WordError, cell,
    reconcile,
};
use crate::query::Request;
use crate::recommender::{Analysis, RowScore};
use crate::settings::{Settings, SettingsError, SettingsRepository};

/// Row score cache entry
#[derive(Debug, Clone, PartialEq)]
enum ScoreSlot {
    Empty,
    Pending(Word),
    Ready(RowScore),
}

/// Interactive puzzle state
pub struct BoardController<R: SettingsRepository> {
    repository: R,
    settings: Settings,
    board: Board,
    store: ConstraintStore,
    cursor: Cursor,
    row_scores: Vec<ScoreSlot>,
    auto_color: Option<Word>,
    latest: Option<Analysis>,
    last_requested: Option<Request>,
    last_error: Option<String>,
    outbox: Vec<Outgoing>,
}

impl<R: SettingsRepository> BoardController<R> {
    /// Create a controller with settings loaded from `repository`
    ///
    /// # Errors
    /// Returns an error if stored settings cannot be read or are invalid.
    pub fn new(repository: R) -> Result<Self, SettingsError> {
        let settings = repository.load()?;
        settings.validate()?;
        Ok(Self::with_settings(repository, settings))
    }

    fn with_settings(repository: R, settings: Settings) -> Self {
        let board = Board::new(settings.attempts, settings.word_length);
        let store = ConstraintStore::new(settings.word_length);
        Self {
            repository,
            row_scores: vec![ScoreSlot::Empty; settings.attempts],
            settings,
            board,
            store,
            cursor: Cursor::default(),
            auto_color: None,
            latest: None,
            last_requested: None,
            last_error: None,
            outbox: Vec::new(),
        }
    }

    #[must_use]
    pub fn settings(&self) -> &Settings {
        &self.settings
    }

    #[must_use]
    pub fn board(&self) -> &Board {
        &self.board
    }

    #[must_use]
    pub fn store(&self) -> &ConstraintStore {
        &self.store
    }

    #[must_use]
    pub fn cursor(&self) -> Cursor {
        self.cursor
    }

    #[must_use]
    pub fn word_length(&self) -> usize {
        self.settings.word_length
    }

    #[must_use]
    pub fn attempts(&self) -> usize {
        self.settings.attempts
    }

    /// Display state of a cell
    #[must_use]
    pub fn cell_state(&self, attempt: usize, pos: usize) -> CellState {
        CellState::derive(&self.store, pos, self.board.get(attempt, pos))
    }

    /// Clear the board and the store, keeping settings
    pub fn reset(&mut self) {
        tracing::debug!(
            word_length = self.settings.word_length,
            attempts = self.settings.attempts,
            "reset board"
        );
        self.board = Board::new(self.settings.attempts, self.settings.word_length);
        self.store = ConstraintStore::new(self.settings.word_length);
        self.cursor = Cursor::default();
        self.row_scores = vec![ScoreSlot::Empty; self.settings.attempts];
        self.latest = None;
        self.last_requested = None;
        self.last_error = None;
        self.outbox.clear();
        if self
            .auto_color
            .as_ref()
            .is_some_and(|w| w.len() != self.settings.word_length)
        {
            self.auto_color = None;
        }
    }

    /// Type a letter at the cursor
    ///
    /// Returns `false` when the row is already full.
    pub fn select_letter(&mut self, letter: Letter) -> bool {
        let Cursor { attempt, letter: pos } = self.cursor;
        if pos >= self.settings.word_length {
            return false;
        }

        self.write_cell(attempt, pos, Some(letter));
        self.cursor.letter += 1;
        true
    }

    /// Delete the letter before the cursor
    ///
    /// At the start of a row the cursor moves to the end of the previous row
    /// without clearing anything. Returns `false` at the very start.
    pub fn delete_letter(&mut self) -> bool {
        let Cursor { attempt, letter: pos } = self.cursor;

        if pos > 0 {
            self.write_cell(attempt, pos - 1, None);
            self.cursor.letter -= 1;
            true
        } else if attempt > 0 {
            self.cursor = Cursor {
                attempt: attempt - 1,
                letter: self.settings.word_length,
            };
            self.row_scores[attempt - 1] = ScoreSlot::Empty;
            true
        } else {
            false
        }
    }

    /// Enter the current row if it is complete
    ///
    /// Applies auto-colour, queues a row score, then moves to the next row.
    /// On the last row the cursor stays at the end.
    pub fn enter_row(&mut self) -> bool {
        let Cursor { attempt, letter: pos } = self.cursor;
        if pos != self.settings.word_length {
            return false;
        }

        if let Some(word) = self.row_word(attempt) {
            self.apply_auto_color(attempt, &word);
            self.queue_row_score(attempt, word);
        }

        if attempt + 1 < self.settings.attempts {
            self.cursor = Cursor {
                attempt: attempt + 1,
                letter: 0,
            };
        }
        true
    }

    /// Fill the current row with `text` and enter it
    ///
    /// Returns `Ok(false)` when the last row is already complete.
    ///
    /// # Errors
    /// Returns a `WordError` if `text` is not a word of the board's length.
    pub fn select_word(&mut self, text: &str) -> Result<bool, WordError> {
        let word = Word::with_length(text, self.settings.word_length)?;

        let last = self.settings.attempts - 1;
        if self.cursor.attempt == last && self.board.is_row_complete(last) {
            return Ok(false);
        }

        let attempt = self.cursor.attempt;
        for (pos, &letter) in word.letters().iter().enumerate() {
            self.write_cell(attempt, pos, Some(letter));
        }
        self.cursor.letter = self.settings.word_length;
        self.enter_row();
        Ok(true)
    }

    /// Click a cell, cycling its state
    ///
    /// Returns the new state, or `None` when the cell is blank or below the
    /// cursor's row.
    pub fn toggle_cell(&mut self, attempt: usize, pos: usize) -> Option<CellState> {
        if attempt > self.cursor.attempt {
            return None;
        }
        let letter = self.board.get(attempt, pos)?;

        let before = cell::toggle(&mut self.store, pos, Some(letter));
        let after = self.cell_state(attempt, pos);
        tracing::debug!(attempt, pos, %letter, from = before.label(), to = after.label(), "toggle cell");
        Some(after)
    }

    /// Change the word length and start over
    ///
    /// # Errors
    /// Returns an error if the length is out of range or settings cannot be saved.
    pub fn set_word_length(&mut self, word_length: usize) -> Result<(), SettingsError> {
        self.update_settings(|s| s.word_length = word_length)
    }

    /// Change the number of rows and start over
    ///
    /// # Errors
    /// Returns an error if the count is too small or settings cannot be saved.
    pub fn set_attempts(&mut self, attempts: usize) -> Result<(), SettingsError> {
        self.update_settings(|s| s.attempts = attempts)
    }

    /// Edit settings, validate, persist, and reset if the board shape changed
    ///
    /// Invalid edits leave the current settings untouched.
    ///
    /// # Errors
    /// Returns an error if the edited settings are invalid or cannot be saved.
    pub fn update_settings(&mut self, edit: impl FnOnce(&mut Settings)) -> Result<(), SettingsError> {
        let mut next = self.settings.clone();
        edit(&mut next);
        next.validate()?;
        self.repository.save(&next)?;

        let reshaped = next.word_length != self.settings.word_length
            || next.attempts != self.settings.attempts;
        self.settings = next;
        if reshaped {
            self.reset();
        }
        Ok(())
    }

    /// Overwrite a cell, reconciling the letter it held
    fn write_cell(&mut self, attempt: usize, pos: usize, letter: Option<Letter>) {
        let outcome = reconcile::clear_position(&self.board, &mut self.store, attempt, pos, letter);
        if outcome != Reconciliation::Unchanged {
            tracing::debug!(attempt, pos, ?outcome, "reconciled overwritten letter");
        }
        if self.board.get(attempt, pos) != letter {
            self.row_scores[attempt] = ScoreSlot::Empty;
        }
        self.board.set(attempt, pos, letter);
    }

    fn row_word(&self, attempt: usize) -> Option<Word> {
        if !self.board.is_row_complete(attempt) {
            return None;
        }
        Word::new(&self.board.row_text(attempt)).ok()
    }
}
