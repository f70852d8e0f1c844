//! Response payloads returned by the recommender

use serde::{Deserialize, Serialize};

/// A ranked word
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WordScore {
    pub word: String,
    pub freq_score: f64,
}

/// A rut: viable words sharing letters in fixed positions
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct KnownPosition {
    /// Shared letters with `_` for open positions, e.g. `_IGHT`
    pub position: String,
    #[serde(default)]
    pub words: Vec<String>,
    #[serde(default)]
    pub recommendations: Option<Vec<WordScore>>,
}

/// Suggestions for one restriction string
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Analysis {
    /// Echo of the request's restriction path segment
    pub restriction_string: String,
    #[serde(default)]
    pub total_words: usize,
    /// Viable solutions, best first
    #[serde(default)]
    pub word_list: Vec<WordScore>,
    /// Guesses chosen to reveal new letters
    #[serde(default)]
    pub fishing_words: Vec<WordScore>,
    /// Guesses that best partition the remaining words, when computed
    #[serde(default)]
    pub best_words: Option<Vec<WordScore>>,
    #[serde(default)]
    pub known_positions: Option<Vec<KnownPosition>>,
}

/// Cached feedback for an entered row
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RowScore {
    /// Fishing quality of the word, 0.0-1.0
    #[serde(alias = "score")]
    pub fishing_score: f64,
    /// Average number of viable words left after playing it
    #[serde(alias = "remaining")]
    pub remaining_words: f64,
}
