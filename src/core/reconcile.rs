//! Reconciliation of letter knowledge when an entered letter is overwritten
//!
//! Retraction is position-scoped, availability restoration is board-scoped,
//! and both only consult attempts before the one being edited.

use super::board::Board;
use super::constraints::ConstraintStore;
use super::letter::Letter;

/// What `clear_position` did to the store
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Reconciliation {
    /// Cell was empty or keeps the same letter
    Unchanged,
    /// An earlier attempt has the same letter at this position
    StillEvidenced,
    /// Known/unsure marks at this position were retracted, but the letter
    /// still appears elsewhere in an earlier attempt
    Retracted,
    /// Marks retracted and the letter is available again
    Restored,
}

/// Retract the knowledge contributed by the letter at `(attempt, pos)`
///
/// Call before the cell is overwritten with `replacement` (or cleared, with
/// `None`). The board itself is not modified.
///
/// # Examples
/// ```
/// use solvle::core::{reconcile, Board, ConstraintStore, Letter};
///
/// let c = Letter::from_char('c').unwrap();
/// let mut board = Board::new(6, 5);
/// let mut store = ConstraintStore::new(5);
/// board.set(0, 0, Some(c));
/// store.set_known(0, c);
///
/// reconcile::clear_position(&board, &mut store, 0, 0, None);
/// assert_eq!(store.known(0), None);
/// ```
pub fn clear_position(
    board: &Board,
    store: &mut ConstraintStore,
    attempt: usize,
    pos: usize,
    replacement: Option<Letter>,
) -> Reconciliation {
    let Some(old) = board.get(attempt, pos) else {
        return Reconciliation::Unchanged;
    };
    if replacement == Some(old) {
        return Reconciliation::Unchanged;
    }

    if board.earlier_has_at(attempt, pos, old) {
        return Reconciliation::StillEvidenced;
    }

    store.remove_unsure(pos, old);
    store.clear_known(pos, old);

    if board.earlier_has_anywhere(attempt, old) {
        return Reconciliation::Retracted;
    }

    if !store.is_available(old) {
        store.restore_available(old);
    }
    Reconciliation::Restored
}

#[cfg(test)]
mod tests {
    use super::*;

    fn letter(ch: char) -> Letter {
        Letter::from_char(ch).unwrap()
    }

    fn board_with(rows: &[&str]) -> Board {
        let width = rows.first().map_or(5, |r| r.len());
        let mut board = Board::new(6, width);
        for (attempt, text) in rows.iter().enumerate() {
            for (pos, ch) in text.chars().enumerate() {
                board.set(attempt, pos, Letter::from_char(ch));
            }
        }
        board
    }

    #[test]
    fn empty_cell_is_unchanged() {
        let board = board_with(&[]);
        let mut store = ConstraintStore::new(5);
        let outcome = clear_position(&board, &mut store, 0, 0, Some(letter('a')));
        assert_eq!(outcome, Reconciliation::Unchanged);
        assert_eq!(store, ConstraintStore::new(5));
    }

    #[test]
    fn same_letter_replacement_is_unchanged() {
        let board = board_with(&["CRANE"]);
        let mut store = ConstraintStore::new(5);
        store.set_known(0, letter('c'));
        let outcome = clear_position(&board, &mut store, 0, 0, Some(letter('c')));
        assert_eq!(outcome, Reconciliation::Unchanged);
        assert_eq!(store.known(0), Some(letter('c')));
    }

    #[test]
    fn earlier_row_at_same_position_keeps_marks() {
        let board = board_with(&["CRANE", "CLOUD"]);
        let mut store = ConstraintStore::new(5);
        store.set_known(0, letter('c'));

        let outcome = clear_position(&board, &mut store, 1, 0, None);
        assert_eq!(outcome, Reconciliation::StillEvidenced);
        assert_eq!(store.known(0), Some(letter('c')));
    }

    #[test]
    fn later_rows_do_not_count_as_evidence() {
        let board = board_with(&["CRANE", "CLOUD"]);
        let mut store = ConstraintStore::new(5);
        store.set_known(0, letter('c'));

        let outcome = clear_position(&board, &mut store, 0, 0, None);
        assert_eq!(outcome, Reconciliation::Restored);
        assert_eq!(store.known(0), None);
    }

    #[test]
    fn retracts_locally_but_keeps_availability_when_seen_elsewhere() {
        let board = board_with(&["TRACE", "SLATE"]);
        let mut store = ConstraintStore::new(5);
        store.add_unsure(3, letter('t'));
        store.exclude_available(letter('t'));

        let outcome = clear_position(&board, &mut store, 1, 3, None);
        assert_eq!(outcome, Reconciliation::Retracted);
        assert!(!store.is_unsure_at(3, letter('t')));
        assert!(!store.is_available(letter('t')));
    }

    #[test]
    fn restores_availability_when_letter_is_gone() {
        let board = board_with(&["CRANE"]);
        let mut store = ConstraintStore::new(5);
        store.exclude_available(letter('n'));

        let outcome = clear_position(&board, &mut store, 0, 3, None);
        assert_eq!(outcome, Reconciliation::Restored);
        assert!(store.is_available(letter('n')));
    }

    #[test]
    fn clear_known_leaves_newer_known_letter() {
        let board = board_with(&["CRANE"]);
        let mut store = ConstraintStore::new(5);
        store.set_known(0, letter('s'));

        clear_position(&board, &mut store, 0, 0, None);
        assert_eq!(store.known(0), Some(letter('s')));
    }

    #[test]
    fn clear_position_is_idempotent() {
        let board = board_with(&["CRANE", "BRINE"]);
        let mut store = ConstraintStore::new(5);
        store.set_known(1, letter('r'));
        store.add_unsure(0, letter('b'));
        store.exclude_available(letter('b'));

        clear_position(&board, &mut store, 1, 0, None);
        let once = store.clone();
        clear_position(&board, &mut store, 1, 0, None);
        assert_eq!(store, once);
        assert!(store.is_available(letter('b')));
    }
}
