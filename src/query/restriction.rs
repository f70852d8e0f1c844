//! Restriction string encoding
//!
//! Grammar, one group per available letter in alphabet order:
//!
//! ```text
//! group = LETTER known-pos* ( "!" unsure-pos+ )?
//! ```
//!
//! Positions are 1-based single digits. Excluded letters are simply absent.

use crate::core::{ConstraintStore, Letter};
use std::fmt::Write;

/// Encode the store as a restriction string
///
/// # Examples
/// ```
/// use solvle::core::{ConstraintStore, Letter};
/// use solvle::query::build_restriction;
///
/// let mut store = ConstraintStore::new(5);
/// let c = Letter::from_char('c').unwrap();
/// let a = Letter::from_char('a').unwrap();
/// store.set_known(0, c);
/// store.add_unsure(2, a);
/// store.exclude_available(Letter::from_char('z').unwrap());
///
/// assert_eq!(build_restriction(&store), "A!3BC1DEFGHIJKLMNOPQRSTUVWXY");
/// ```
#[must_use]
pub fn build_restriction(store: &ConstraintStore) -> String {
    let mut out = String::with_capacity(64);

    for letter in store.available().iter() {
        push_group(&mut out, store, letter);
    }

    out
}

fn push_group(out: &mut String, store: &ConstraintStore, letter: Letter) {
    out.push(letter.to_char());

    let positions = 0..store.word_length();

    for pos in positions.clone().filter(|&pos| store.is_known_at(pos, letter)) {
        let _ = write!(out, "{}", pos + 1);
    }

    let mut unsure = positions
        .filter(|&pos| store.is_unsure_at(pos, letter))
        .peekable();
    if unsure.peek().is_some() {
        out.push('!');
        for pos in unsure {
            let _ = write!(out, "{}", pos + 1);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn letter(ch: char) -> Letter {
        Letter::from_char(ch).unwrap()
    }

    #[test]
    fn fresh_store_lists_whole_alphabet() {
        let store = ConstraintStore::new(5);
        assert_eq!(build_restriction(&store), "ABCDEFGHIJKLMNOPQRSTUVWXYZ");
    }

    #[test]
    fn excluded_letters_are_omitted() {
        let mut store = ConstraintStore::new(5);
        for ch in ['a', 'e', 'z'] {
            store.exclude_available(letter(ch));
        }
        assert_eq!(build_restriction(&store), "BCDFGHIJKLMNOPQRSTUVWXY");
    }

    #[test]
    fn known_then_unsure_positions() {
        let mut store = ConstraintStore::new(5);
        store.set_known(2, letter('e'));
        store.set_known(4, letter('e'));
        store.add_unsure(0, letter('e'));
        store.add_unsure(3, letter('e'));

        let restriction = build_restriction(&store);
        assert!(restriction.starts_with("ABCDE35!14F"));
    }

    #[test]
    fn unsure_only_letter_gets_bang_prefix() {
        let mut store = ConstraintStore::new(6);
        store.add_unsure(5, letter('s'));
        assert!(build_restriction(&store).contains("RS!6T"));
    }

    #[test]
    fn placed_but_excluded_letter_is_omitted() {
        let mut store = ConstraintStore::new(5);
        store.set_known(0, letter('c'));
        store.exclude_available(letter('c'));
        assert!(!build_restriction(&store).contains('C'));
    }

    #[test]
    fn encoding_is_deterministic() {
        let mut store = ConstraintStore::new(5);
        store.set_known(1, letter('r'));
        store.add_unsure(0, letter('a'));
        store.exclude_available(letter('q'));
        assert_eq!(build_restriction(&store), build_restriction(&store));
    }
}
