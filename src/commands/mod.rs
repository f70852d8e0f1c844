//! Command implementations

pub mod anagram;
pub mod analyze;
pub mod config;
pub mod solve;

pub use anagram::{AnagramResult, find_anagrams};
pub use analyze::{AnalyzeConfig, AnalyzeResult, GuessFeedback, analyze_guesses};
pub use config::{ConfigEdit, update_config};
pub use solve::{SolveResult, SolveStep, solve_word};

use anyhow::{Context, Result};
use indicatif::{ProgressBar, ProgressStyle};
use std::future::Future;
use std::time::Duration;

/// Run a recommender call to completion behind a spinner
///
/// # Errors
/// Returns an error if the runtime cannot start or the call fails.
pub fn with_spinner<T, E, F>(message: &str, call: F) -> Result<T>
where
    F: Future<Output = Result<T, E>>,
    E: std::error::Error + Send + Sync + 'static,
{
    let runtime = tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()
        .context("Failed to start async runtime")?;

    let spinner = ProgressBar::new_spinner();
    if let Ok(style) = ProgressStyle::default_spinner().template("{spinner:.green} {msg}") {
        spinner.set_style(style);
    }
    spinner.set_message(message.to_string());
    spinner.enable_steady_tick(Duration::from_millis(80));

    let result = runtime.block_on(call);
    spinner.finish_and_clear();

    result.with_context(|| format!("{message} failed"))
}
