//! Terminal output formatting
//!
//! Display utilities for CLI results and pretty-printing.

pub mod display;
pub mod formatters;

pub use display::{print_anagram_result, print_analyze_result, print_settings, print_solve_result};
