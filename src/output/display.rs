//! Display functions for command results

use super::formatters::{colored_word, columns, format_word_scores};
use crate::commands::{AnagramResult, AnalyzeResult, SolveResult};
use crate::recommender::Analysis;
use crate::settings::Settings;
use colored::Colorize;
use std::path::Path;

const WORDS_PER_ROW: usize = 4;

/// Print the result of an analysis
pub fn print_analyze_result(result: &AnalyzeResult, limit: usize) {
    println!("\n{}", "═".repeat(60).cyan());
    println!(
        " {} {}",
        "RESTRICTION:".bright_cyan().bold(),
        result.restriction.bright_yellow().bold()
    );
    println!("{}", "═".repeat(60).cyan());
    println!("   Request: {}", result.request.to_string().bright_black());

    match &result.analysis {
        Some(analysis) => print_analysis(analysis, limit),
        None => println!("\n   {}", "Offline: no request sent".yellow()),
    }
}

fn print_analysis(analysis: &Analysis, limit: usize) {
    println!(
        "\n📊 {} {}",
        "Viable words:".bright_cyan().bold(),
        analysis.total_words.to_string().bright_yellow()
    );
    print_word_list(&format_word_scores(&analysis.word_list, limit));

    if !analysis.fishing_words.is_empty() {
        println!("\n🎣 {}", "Fishing words:".bright_cyan().bold());
        print_word_list(&format_word_scores(&analysis.fishing_words, limit));
    }

    if let Some(best) = analysis.best_words.as_ref().filter(|b| !b.is_empty()) {
        println!("\n🏆 {}", "Best partitioning words:".bright_cyan().bold());
        print_word_list(&format_word_scores(best, limit));
    }

    if let Some(ruts) = analysis.known_positions.as_ref().filter(|k| !k.is_empty()) {
        println!("\n🕳  {}", "Ruts:".bright_cyan().bold());
        for rut in ruts {
            println!(
                "   {} {}",
                rut.position.bright_yellow(),
                rut.words.join(" ").to_uppercase()
            );
        }
    }
}

fn print_word_list(items: &[String]) {
    if items.is_empty() {
        println!("   {}", "(none)".bright_black());
    }
    for line in columns(items, WORDS_PER_ROW) {
        println!("   {line}");
    }
}

/// Print the recommender's solution path
pub fn print_solve_result(result: &SolveResult) {
    println!("\n{}", "─".repeat(60).cyan());
    println!(
        "Solving: {}",
        result.solution.to_string().bright_yellow().bold()
    );
    println!("{}", "─".repeat(60).cyan());

    for (i, step) in result.steps.iter().enumerate() {
        println!(
            "\nTurn {}: {} {}",
            i + 1,
            colored_word(&step.word, &step.pattern),
            step.pattern.to_emoji()
        );
    }

    println!();
    if result.success {
        println!(
            "{}",
            format!("✅ Solved in {} guesses!", result.steps.len())
                .green()
                .bold()
        );
    } else {
        println!(
            "{}",
            format!("❌ Not solved within the board ({} guesses)", result.steps.len())
                .red()
                .bold()
        );
    }
}

/// Print anagrams grouped by length, longest first
pub fn print_anagram_result(result: &AnagramResult) {
    println!("\n{}", "═".repeat(60).cyan());
    println!(
        " {} {} ({} words)",
        "ANAGRAMS OF".bright_cyan().bold(),
        result.letters.bright_yellow().bold(),
        result.total()
    );
    println!("{}", "═".repeat(60).cyan());

    for (length, words) in result.by_length.iter().rev() {
        println!("\n{} {}", length.to_string().bright_cyan().bold(), "letters:".bright_cyan());
        let upper: Vec<String> = words.iter().map(|w| w.to_uppercase()).collect();
        for line in columns(&upper, 8) {
            println!("   {line}");
        }
    }
}

/// Print the current settings and where they live
pub fn print_settings(settings: &Settings, path: Option<&Path>) {
    println!("\n{}", "SETTINGS".bright_cyan().bold());
    if let Some(path) = path {
        println!("   File:        {}", path.display().to_string().bright_black());
    }
    println!("   Word length: {}", settings.word_length);
    println!("   Attempts:    {}", settings.attempts);
    println!("   Dictionary:  {}", settings.dictionary);
    println!("   Hard mode:   {}", settings.hard_mode);
    println!("   Results:     {}", settings.results);

    let s = &settings.scoring;
    println!("\n{}", "SCORING".bright_cyan().bold());
    println!(
        "   Bias:         {} (location {}, uniqueness {}, viable {})",
        on_off(s.use_bias),
        s.right_location_multiplier,
        s.uniqueness_multiplier,
        s.viable_word_preference
    );
    println!(
        "   Partitioning: {} (threshold {})",
        on_off(s.use_partitioning),
        s.partition_threshold
    );
    println!(
        "   Fine tuning:  {} (location {}, unique {}, viable {}, vowel {})",
        on_off(s.use_fine_tuning),
        s.location_adjustment_scale,
        s.unique_adjustment_scale,
        s.viable_word_adjustment_scale,
        s.vowel_multiplier
    );
    println!(
        "   Rut break:    {} (multiplier {}, threshold {})",
        on_off(s.use_rut_break),
        s.rut_break_multiplier,
        s.rut_break_threshold
    );
}

fn on_off(enabled: bool) -> colored::ColoredString {
    if enabled { "on".green() } else { "off".bright_black() }
}
