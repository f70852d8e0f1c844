//! Anagram command

use super::with_spinner;
use crate::query;
use crate::recommender::RecommenderClient;
use anyhow::{Result, bail};
use std::collections::BTreeMap;

/// Words buildable from a set of letters, grouped by length
pub struct AnagramResult {
    pub letters: String,
    pub by_length: BTreeMap<usize, Vec<String>>,
}

impl AnagramResult {
    #[must_use]
    pub fn total(&self) -> usize {
        self.by_length.values().map(Vec::len).sum()
    }
}

/// Find anagrams of `letters`
///
/// # Errors
/// Returns an error if no letters are given or the request fails.
pub fn find_anagrams(client: &RecommenderClient, letters: &str) -> Result<AnagramResult> {
    let request = query::anagram_request(letters);
    let Some(letters) = request.segments().last().filter(|s| !s.is_empty()).cloned() else {
        bail!("No letters given");
    };

    let by_length = with_spinner("Finding anagrams", client.anagrams(&request))?;
    Ok(AnagramResult { letters, by_length })
}
