//! Formatting utilities for terminal output

use crate::core::{Mark, Pattern, Word};
use crate::recommender::WordScore;
use colored::{ColoredString, Colorize};

/// Word with each letter coloured by its mark, Wordle style
#[must_use]
pub fn colored_word(word: &Word, pattern: &Pattern) -> String {
    word.letters()
        .iter()
        .zip(pattern.marks())
        .map(|(letter, mark)| {
            let tile = format!(" {letter} ");
            paint(&tile, *mark).to_string()
        })
        .collect()
}

fn paint(text: &str, mark: Mark) -> ColoredString {
    match mark {
        Mark::Correct => text.black().on_green().bold(),
        Mark::Present => text.black().on_yellow().bold(),
        Mark::Absent => text.white().on_bright_black(),
    }
}

/// Create a progress bar string
#[must_use]
pub fn create_progress_bar(value: f64, max: f64, width: usize) -> String {
    let ratio = if max > 0.0 { (value / max).clamp(0.0, 1.0) } else { 0.0 };
    // Cast is safe: ratio is clamped to [0, 1]
    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss, clippy::cast_precision_loss)]
    let filled = ((ratio * width as f64).round() as usize).min(width);

    format!("{}{}", "█".repeat(filled), "░".repeat(width - filled))
}

/// `WORD (score)` entries, at most `limit`
#[must_use]
pub fn format_word_scores(words: &[WordScore], limit: usize) -> Vec<String> {
    words
        .iter()
        .take(limit)
        .map(|ws| format!("{} ({:.3})", ws.word.to_uppercase(), ws.freq_score))
        .collect()
}

/// Lay out items in fixed-width columns
#[must_use]
pub fn columns(items: &[String], per_row: usize) -> Vec<String> {
    let width = items.iter().map(|s| s.chars().count()).max().unwrap_or(0) + 2;
    items
        .chunks(per_row.max(1))
        .map(|chunk| {
            chunk
                .iter()
                .map(|item| format!("{item:<width$}"))
                .collect::<String>()
                .trim_end()
                .to_string()
        })
        .collect()
}
