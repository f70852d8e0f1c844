//! Word solving command
//!
//! Asks the recommender to play out a puzzle and colours each of its guesses
//! against the solution.

use super::with_spinner;
use crate::core::{Pattern, Word};
use crate::query;
use crate::recommender::RecommenderClient;
use crate::settings::Settings;
use anyhow::{Context, Result, bail};

/// A single guess in the solution path
#[derive(Debug, Clone, PartialEq)]
pub struct SolveStep {
    pub word: Word,
    pub pattern: Pattern,
}

/// Result of solving a word
#[derive(Debug)]
pub struct SolveResult {
    pub solution: Word,
    pub steps: Vec<SolveStep>,
    pub success: bool,
}

/// Solve `solution` with the recommender's own guesses
///
/// # Errors
/// Returns an error if a word is invalid or the request fails.
pub fn solve_word(
    client: &RecommenderClient,
    solution: &str,
    first_word: Option<&str>,
    settings: &Settings,
) -> Result<SolveResult> {
    let solution = Word::new(solution).context("Invalid solution")?;
    let first_word = first_word
        .map(|w| Word::with_length(w, solution.len()))
        .transpose()
        .context("Invalid first word")?;

    let request = query::solve_request(&solution, first_word.as_ref(), settings);
    let guesses = with_spinner("Solving", client.solve(&request))?;

    build_result(solution, &guesses, settings.attempts)
}

fn build_result(solution: Word, guesses: &[String], attempts: usize) -> Result<SolveResult> {
    if guesses.is_empty() {
        bail!("Recommender returned no guesses for {solution}");
    }

    let steps = guesses
        .iter()
        .map(|guess| {
            let word = Word::new(guess)
                .with_context(|| format!("Recommender returned invalid word '{guess}'"))?;
            let pattern = Pattern::calculate(&word, &solution)
                .with_context(|| format!("'{word}' does not match the solution length"))?;
            Ok::<_, anyhow::Error>(SolveStep { word, pattern })
        })
        .collect::<Result<Vec<_>>>()?;

    let success = steps.len() <= attempts && steps.last().is_some_and(|s| s.pattern.is_perfect());
    Ok(SolveResult {
        solution,
        steps,
        success,
    })
}
