//! The grid of attempts and the write cursor

use super::letter::Letter;

/// Row and column currently being written
///
/// `letter == word_length` means the row is complete and waiting to be entered.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Cursor {
    pub attempt: usize,
    pub letter: usize,
}

/// Rows of guessed letters, empty cells are `None`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Board {
    word_length: usize,
    rows: Vec<Vec<Option<Letter>>>,
}

impl Board {
    #[must_use]
    pub fn new(attempts: usize, word_length: usize) -> Self {
        Self {
            word_length,
            rows: vec![vec![None; word_length]; attempts],
        }
    }

    #[inline]
    #[must_use]
    pub const fn word_length(&self) -> usize {
        self.word_length
    }

    #[inline]
    #[must_use]
    pub fn attempts(&self) -> usize {
        self.rows.len()
    }

    /// Letter at a cell, `None` when empty or out of range
    #[must_use]
    pub fn get(&self, attempt: usize, pos: usize) -> Option<Letter> {
        self.rows
            .get(attempt)
            .and_then(|row| row.get(pos))
            .copied()
            .flatten()
    }

    /// Write or clear a cell; out-of-range cells are ignored
    pub fn set(&mut self, attempt: usize, pos: usize, letter: Option<Letter>) {
        if let Some(cell) = self.rows.get_mut(attempt).and_then(|row| row.get_mut(pos)) {
            *cell = letter;
        }
    }

    /// The cells of one row
    #[must_use]
    pub fn row(&self, attempt: usize) -> &[Option<Letter>] {
        self.rows.get(attempt).map_or(&[], Vec::as_slice)
    }

    /// Row text with `_` for empty cells
    #[must_use]
    pub fn row_text(&self, attempt: usize) -> String {
        self.row(attempt)
            .iter()
            .map(|cell| cell.map_or('_', Letter::to_char))
            .collect()
    }

    /// Every cell is filled
    #[must_use]
    pub fn is_row_complete(&self, attempt: usize) -> bool {
        let row = self.row(attempt);
        !row.is_empty() && row.iter().all(Option::is_some)
    }

    /// Does any row before `attempt` hold `letter` at `pos`?
    #[must_use]
    pub fn earlier_has_at(&self, attempt: usize, pos: usize, letter: Letter) -> bool {
        (0..attempt.min(self.attempts())).any(|row| self.get(row, pos) == Some(letter))
    }

    /// Does any row before `attempt` hold `letter` in any position?
    #[must_use]
    pub fn earlier_has_anywhere(&self, attempt: usize, letter: Letter) -> bool {
        self.rows
            .iter()
            .take(attempt)
            .any(|row| row.contains(&Some(letter)))
    }

    /// Iterate `(attempt, pos, letter)` for every filled cell up to and including `last_attempt`
    pub fn filled_cells(&self, last_attempt: usize) -> impl Iterator<Item = (usize, usize, Letter)> + '_ {
        self.rows
            .iter()
            .enumerate()
            .take(last_attempt.saturating_add(1))
            .flat_map(|(attempt, row)| {
                row.iter()
                    .enumerate()
                    .filter_map(move |(pos, cell)| cell.map(|letter| (attempt, pos, letter)))
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn letter(ch: char) -> Letter {
        Letter::from_char(ch).unwrap()
    }

    fn write_row(board: &mut Board, attempt: usize, text: &str) {
        for (pos, ch) in text.chars().enumerate() {
            board.set(attempt, pos, Letter::from_char(ch));
        }
    }

    #[test]
    fn new_board_is_empty() {
        let board = Board::new(6, 5);
        assert_eq!(board.attempts(), 6);
        assert_eq!(board.word_length(), 5);
        assert_eq!(board.row_text(0), "_____");
        assert!(!board.is_row_complete(0));
    }

    #[test]
    fn set_and_get_cells() {
        let mut board = Board::new(2, 3);
        board.set(1, 2, Some(letter('x')));
        assert_eq!(board.get(1, 2), Some(letter('x')));
        assert_eq!(board.get(0, 2), None);

        board.set(5, 5, Some(letter('x')));
        assert_eq!(board.get(5, 5), None);
    }

    #[test]
    fn earlier_scans_exclude_current_row() {
        let mut board = Board::new(3, 5);
        write_row(&mut board, 0, "CRANE");
        write_row(&mut board, 1, "SLATE");

        assert!(board.earlier_has_at(1, 2, letter('a')));
        assert!(!board.earlier_has_at(0, 2, letter('a')));
        assert!(!board.earlier_has_at(1, 0, letter('s')));

        assert!(board.earlier_has_anywhere(1, letter('n')));
        assert!(!board.earlier_has_anywhere(1, letter('l')));
        assert!(board.earlier_has_anywhere(2, letter('l')));
    }

    #[test]
    fn filled_cells_stops_at_last_attempt() {
        let mut board = Board::new(3, 3);
        write_row(&mut board, 0, "CAT");
        write_row(&mut board, 1, "DO");
        write_row(&mut board, 2, "PIG");

        let cells: Vec<_> = board.filled_cells(1).collect();
        assert_eq!(cells.len(), 5);
        assert_eq!(cells[3], (1, 0, letter('d')));
    }
}
