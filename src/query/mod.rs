//! Query encoding for the recommender
//!
//! Pure functions turning the constraint store and settings into requests.
//! Nothing here touches the network.

mod params;
mod restriction;

pub use params::{ConfigParams, build_config_params};
pub use restriction::build_restriction;

use crate::core::{ConstraintStore, Word};
use crate::settings::Settings;
use std::fmt;

/// An encoded recommender request: path segments plus ordered query pairs
#[derive(Debug, Clone, PartialEq)]
pub struct Request {
    segments: Vec<String>,
    query: Vec<(&'static str, String)>,
}

impl Request {
    fn new(segments: Vec<String>) -> Self {
        Self {
            segments,
            query: Vec::new(),
        }
    }

    fn param(mut self, name: &'static str, value: impl ToString) -> Self {
        self.query.push((name, value.to_string()));
        self
    }

    fn config(mut self, params: &ConfigParams) -> Self {
        self.query.extend(params.pairs());
        self
    }

    /// Path segments, unescaped
    #[must_use]
    pub fn segments(&self) -> &[String] {
        &self.segments
    }

    /// Query pairs in wire order
    #[must_use]
    pub fn query(&self) -> &[(&'static str, String)] {
        &self.query
    }
}

/// Canonical `/path?query` form, as logged and shown to the user
impl fmt::Display for Request {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for segment in &self.segments {
            write!(f, "/{segment}")?;
        }
        for (i, (name, value)) in self.query.iter().enumerate() {
            let sep = if i == 0 { '?' } else { '&' };
            write!(f, "{sep}{name}={value}")?;
        }
        Ok(())
    }
}

/// `GET /solvle/{restriction}` for the current knowledge
///
/// The restriction is returned alongside so responses can be matched to it.
#[must_use]
pub fn analysis_request(store: &ConstraintStore, settings: &Settings) -> (String, Request) {
    let restriction = build_restriction(store);
    let request = Request::new(vec!["solvle".to_string(), restriction.clone()])
        .param("wordLength", settings.word_length)
        .param("wordList", &settings.dictionary)
        .config(&build_config_params(settings));
    (restriction, request)
}

/// `GET /solvle/{restriction}/{word}`: fishing score of an entered word
#[must_use]
pub fn score_request(restriction: &str, word: &Word, settings: &Settings) -> Request {
    Request::new(vec![
        "solvle".to_string(),
        restriction.to_string(),
        word.to_string(),
    ])
    .param("wordList", &settings.dictionary)
    .config(&build_config_params(settings))
}

/// `GET /solvle/solve/{solution}`: the recommender plays out a puzzle
#[must_use]
pub fn solve_request(solution: &Word, first_word: Option<&Word>, settings: &Settings) -> Request {
    Request::new(vec![
        "solvle".to_string(),
        "solve".to_string(),
        solution.to_string(),
    ])
    .param("firstWord", first_word.map(ToString::to_string).unwrap_or_default())
    .param("wordList", &settings.dictionary)
    .config(&build_config_params(settings))
}

/// `GET /solvescape/{letters}`: anagrams grouped by length
#[must_use]
pub fn anagram_request(letters: &str) -> Request {
    let letters: String = letters
        .chars()
        .filter(char::is_ascii_alphabetic)
        .map(|c| c.to_ascii_uppercase())
        .collect();
    Request::new(vec!["solvescape".to_string(), letters])
}
