//! Bulk marking: feedback patterns, auto-colour and exclude-all

use super::BoardController;
use crate::core::{CellState, Letter, LetterSet, Mark, Pattern, Word, WordError};
use crate::settings::SettingsRepository;

impl<R: SettingsRepository> BoardController<R> {
    /// Solution used to colour rows as they are entered
    #[must_use]
    pub fn auto_color(&self) -> Option<&Word> {
        self.auto_color.as_ref()
    }

    /// Set or clear (with empty text) the auto-colour solution
    ///
    /// # Errors
    /// Returns a `WordError` if the text is not a word of the board's length.
    pub fn set_auto_color(&mut self, text: &str) -> Result<(), WordError> {
        if text.trim().is_empty() {
            self.auto_color = None;
            return Ok(());
        }
        self.auto_color = Some(Word::with_length(text, self.settings.word_length)?);
        Ok(())
    }

    /// Mark a completed row from a feedback pattern
    ///
    /// Returns `Ok(false)` when the row is incomplete or below the cursor.
    ///
    /// # Errors
    /// Returns `WordError::LengthMismatch` if the pattern does not fit the row.
    pub fn apply_feedback(&mut self, attempt: usize, pattern: &Pattern) -> Result<bool, WordError> {
        if pattern.len() != self.settings.word_length {
            return Err(WordError::LengthMismatch {
                expected: self.settings.word_length,
                actual: pattern.len(),
            });
        }
        if attempt > self.cursor.attempt {
            return Ok(false);
        }
        let Some(word) = self.row_word(attempt) else {
            return Ok(false);
        };

        self.mark_row(&word, pattern);
        Ok(true)
    }

    /// Exclude every entered letter that is neutral and placed nowhere
    ///
    /// Returns the letters excluded.
    pub fn exclude_all(&mut self) -> LetterSet {
        let candidates: LetterSet = self
            .board
            .filled_cells(self.cursor.attempt)
            .filter(|&(attempt, pos, _)| self.cell_state(attempt, pos) == CellState::Neutral)
            .map(|(_, _, letter)| letter)
            .filter(|&letter| !self.store.is_placed_anywhere(letter))
            .collect();

        for letter in candidates.iter() {
            self.store.exclude_available(letter);
        }
        tracing::debug!(letters = %candidates, "excluded all neutral letters");
        candidates
    }

    pub(super) fn apply_auto_color(&mut self, attempt: usize, word: &Word) {
        let Some(solution) = self.auto_color.clone() else {
            return;
        };
        if let Some(pattern) = Pattern::calculate(word, &solution) {
            tracing::debug!(attempt, %word, %pattern, "auto-colour");
            self.mark_row(word, &pattern);
        }
    }

    /// Positives first, so a grey duplicate never excludes a placed letter
    fn mark_row(&mut self, word: &Word, pattern: &Pattern) {
        let marked = word.letters().iter().copied().zip(pattern.marks().iter().copied());

        for (pos, (letter, mark)) in marked.clone().enumerate() {
            match mark {
                Mark::Correct => {
                    self.store.restore_available(letter);
                    self.store.set_known(pos, letter);
                }
                Mark::Present => {
                    self.store.restore_available(letter);
                    self.store.clear_known(pos, letter);
                    self.store.add_unsure(pos, letter);
                }
                Mark::Absent => {}
            }
        }

        let absent: Vec<(usize, Letter)> = marked
            .enumerate()
            .filter(|(_, (_, mark))| *mark == Mark::Absent)
            .map(|(pos, (letter, _))| (pos, letter))
            .collect();
        for (pos, letter) in absent {
            if self.store.is_placed_anywhere(letter) {
                // Extra copy of a letter that is in the word
                self.store.clear_known(pos, letter);
                self.store.add_unsure(pos, letter);
            } else {
                self.store.exclude_available(letter);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::settings::MemorySettingsRepository;

    fn letter(ch: char) -> Letter {
        Letter::from_char(ch).unwrap()
    }

    fn controller() -> BoardController<MemorySettingsRepository> {
        BoardController::new(MemorySettingsRepository::default()).unwrap()
    }

    #[test]
    fn auto_colour_marks_entered_rows() {
        let mut c = controller();
        c.set_auto_color("crate").unwrap();
        c.select_word("trace").unwrap();

        // T R A C E vs C R A T E
        assert_eq!(c.cell_state(0, 0), CellState::Unsure);
        assert_eq!(c.cell_state(0, 1), CellState::Known);
        assert_eq!(c.cell_state(0, 2), CellState::Known);
        assert_eq!(c.cell_state(0, 3), CellState::Unsure);
        assert_eq!(c.cell_state(0, 4), CellState::Known);
    }

    #[test]
    fn auto_colour_excludes_missing_letters() {
        let mut c = controller();
        c.set_auto_color("crate").unwrap();
        c.select_word("moist").unwrap();

        for ch in ['m', 'o', 'i', 's'] {
            assert!(!c.store().is_available(letter(ch)));
        }
        assert!(c.store().is_unsure_at(4, letter('t')));
    }

    #[test]
    fn auto_colour_solution_is_validated() {
        let mut c = controller();
        assert!(matches!(
            c.set_auto_color("cranes"),
            Err(WordError::LengthMismatch { .. })
        ));
        assert!(c.auto_color().is_none());

        c.set_auto_color("crane").unwrap();
        c.set_auto_color("  ").unwrap();
        assert!(c.auto_color().is_none());
    }

    #[test]
    fn duplicate_grey_letter_is_not_excluded() {
        let mut c = controller();
        c.set_auto_color("crane").unwrap();
        c.select_word("eerie").unwrap();

        // only the last E is green
        assert!(c.store().is_available(letter('e')));
        assert_eq!(c.store().known(4), Some(letter('e')));
        assert!(c.store().is_unsure_at(0, letter('e')));
        assert!(!c.store().is_available(letter('i')));
    }

    #[test]
    fn manual_feedback_marks_row() {
        let mut c = controller();
        c.select_word("slate").unwrap();

        let pattern: Pattern = "-Y-GG".parse().unwrap();
        assert!(c.apply_feedback(0, &pattern).unwrap());
        assert!(!c.store().is_available(letter('s')));
        assert!(c.store().is_unsure_at(1, letter('l')));
        assert!(!c.store().is_available(letter('a')));
        assert_eq!(c.store().known(3), Some(letter('t')));
        assert_eq!(c.restriction().matches('!').count(), 1);
    }

    #[test]
    fn manual_feedback_needs_complete_row_and_matching_length() {
        let mut c = controller();
        let pattern: Pattern = "GGGGG".parse().unwrap();
        assert!(!c.apply_feedback(0, &pattern).unwrap());

        let short: Pattern = "GGG".parse().unwrap();
        assert!(c.apply_feedback(0, &short).is_err());
    }

    #[test]
    fn exclude_all_skips_placed_letters() {
        let mut c = controller();
        c.select_word("crane").unwrap();
        // R unsure at 1
        c.toggle_cell(0, 1);
        c.toggle_cell(0, 1);

        let excluded = c.exclude_all();
        assert_eq!(excluded.len(), 4);
        assert!(c.store().is_available(letter('r')));
        for ch in ['c', 'a', 'n', 'e'] {
            assert!(!c.store().is_available(letter(ch)));
        }
    }

    #[test]
    fn exclude_all_includes_current_partial_row() {
        let mut c = controller();
        c.select_letter(letter('q'));
        let excluded = c.exclude_all();
        assert!(excluded.contains(letter('q')));
        assert_eq!(excluded.len(), 1);
    }
}
