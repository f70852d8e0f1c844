//! Solvle
//!
//! A Wordle assistant: tracks what each guess revealed about the hidden word,
//! encodes that knowledge for a remote recommender and shows its suggestions.
//!
//! # Quick Start
//!
//! ```rust
//! use solvle::controller::BoardController;
//! use solvle::core::Pattern;
//! use solvle::settings::MemorySettingsRepository;
//!
//! let mut board = BoardController::new(MemorySettingsRepository::default()).unwrap();
//! board.select_word("crane").unwrap();
//! board.apply_feedback(0, &Pattern::parse("-Y--G").unwrap()).unwrap();
//!
//! assert_eq!(board.restriction(), "BDE5FGHIJKLMOPQR!2STUVWXYZ");
//! ```

// Core domain types
pub mod core;

// Persisted settings
pub mod settings;

// Request encoding
pub mod query;

// Recommender service client
pub mod recommender;

// Board state and reconciliation
pub mod controller;

// Command implementations
pub mod commands;

// Terminal output formatting
pub mod output;

// Interactive TUI interface
pub mod interactive;
