//! Guess analysis command
//!
//! Replays guesses with their feedback on a scratch board, encodes the
//! resulting knowledge and asks the recommender for suggestions.

use super::with_spinner;
use crate::controller::BoardController;
use crate::core::{Pattern, Word};
use crate::query::{self, Request};
use crate::recommender::{Analysis, RecommenderClient};
use crate::settings::{MemorySettingsRepository, Settings};
use anyhow::{Context, Result, bail};
use std::str::FromStr;

/// A played word and the colours it received
#[derive(Debug, Clone, PartialEq)]
pub struct GuessFeedback {
    pub word: Word,
    pub pattern: Pattern,
}

/// Parses `WORD=PATTERN`, e.g. `crane=-Y--G`
impl FromStr for GuessFeedback {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (word, pattern) = s
            .split_once(['=', ':'])
            .ok_or_else(|| format!("Expected WORD=PATTERN, got '{s}'"))?;

        let word = Word::new(word).map_err(|e| e.to_string())?;
        let pattern: Pattern = pattern.parse()?;
        if pattern.len() != word.len() {
            return Err(format!(
                "Pattern '{pattern}' has {} marks but '{word}' has {} letters",
                pattern.len(),
                word.len()
            ));
        }
        Ok(Self { word, pattern })
    }
}

/// Configuration for an analysis
pub struct AnalyzeConfig {
    pub guesses: Vec<GuessFeedback>,
    pub settings: Settings,
}

/// Result of an analysis
pub struct AnalyzeResult {
    pub restriction: String,
    pub request: Request,
    /// `None` when run offline
    pub analysis: Option<Analysis>,
}

/// Encode the guesses without contacting the recommender
///
/// # Errors
/// Returns an error if the guesses have mixed lengths or do not fit the settings.
pub fn prepare_analysis(config: &AnalyzeConfig) -> Result<(String, Request)> {
    let mut settings = config.settings.clone();
    if let Some(first) = config.guesses.first() {
        settings.word_length = first.word.len();
    }
    settings.attempts = settings.attempts.max(config.guesses.len());

    let mut board = BoardController::new(MemorySettingsRepository::with(settings))
        .context("Invalid settings for analysis")?;

    for (attempt, guess) in config.guesses.iter().enumerate() {
        if guess.word.len() != board.word_length() {
            bail!(
                "'{}' has {} letters, expected {}",
                guess.word,
                guess.word.len(),
                board.word_length()
            );
        }
        board
            .select_word(&guess.word.to_string())
            .with_context(|| format!("Could not enter '{}'", guess.word))?;
        board.apply_feedback(attempt, &guess.pattern)?;
    }

    Ok(query::analysis_request(board.store(), board.settings()))
}

/// Analyze guesses, asking `client` for suggestions when given
///
/// # Errors
/// Returns an error if the guesses are inconsistent or the request fails.
pub fn analyze_guesses(
    config: &AnalyzeConfig,
    client: Option<&RecommenderClient>,
) -> Result<AnalyzeResult> {
    let (restriction, request) = prepare_analysis(config)?;

    let analysis = match client {
        Some(client) => Some(with_spinner(
            "Fetching suggestions",
            client.analyze(&request),
        )?),
        None => None,
    };

    Ok(AnalyzeResult {
        restriction,
        request,
        analysis,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn guess(s: &str) -> GuessFeedback {
        s.parse().unwrap()
    }

    fn config(guesses: &[&str]) -> AnalyzeConfig {
        AnalyzeConfig {
            guesses: guesses.iter().map(|g| guess(g)).collect(),
            settings: Settings::default(),
        }
    }

    #[test]
    fn parses_word_and_pattern() {
        let g = guess("crane=-Y--G");
        assert_eq!(g.word.to_string(), "CRANE");
        assert_eq!(g.pattern.to_string(), "-Y--G");

        let emoji: GuessFeedback = "slate:⬜🟨⬜⬜🟩".parse().unwrap();
        assert_eq!(emoji.pattern.to_string(), "-Y--G");
    }

    #[test]
    fn rejects_malformed_arguments() {
        assert!("crane".parse::<GuessFeedback>().is_err());
        assert!("crane=GGG".parse::<GuessFeedback>().is_err());
        assert!("cr4ne=GGGGG".parse::<GuessFeedback>().is_err());
        assert!("crane=GGXGG".parse::<GuessFeedback>().is_err());
    }

    #[test]
    fn no_guesses_means_whole_alphabet() {
        let (restriction, request) = prepare_analysis(&config(&[])).unwrap();
        assert_eq!(restriction, "ABCDEFGHIJKLMNOPQRSTUVWXYZ");
        assert!(request.to_string().contains("wordLength=5"));
    }

    #[test]
    fn feedback_is_encoded() {
        let (restriction, _) = prepare_analysis(&config(&["crane=-Y--G"])).unwrap();
        assert_eq!(restriction, "BDE5FGHIJKLMOPQR!2STUVWXYZ");
    }

    #[test]
    fn word_length_follows_guesses() {
        let (_, request) = prepare_analysis(&config(&["planet=------"])).unwrap();
        assert!(request.to_string().contains("wordLength=6"));
    }

    #[test]
    fn mixed_lengths_are_rejected() {
        assert!(prepare_analysis(&config(&["crane=-----", "planet=------"])).is_err());
    }

    #[test]
    fn more_guesses_than_rows_extends_board() {
        let rows = ["crane=-----"; 8];
        assert!(prepare_analysis(&config(&rows)).is_ok());
    }
}
