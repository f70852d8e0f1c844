//! Solvle - CLI
//!
//! Wordle assistant with TUI and CLI modes, backed by the Solvle recommender.

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use directories::ProjectDirs;
use solvle::{
    commands::{
        AnalyzeConfig, ConfigEdit, GuessFeedback, analyze_guesses, find_anagrams, solve_word,
        update_config,
    },
    controller::BoardController,
    interactive::{App, run_tui},
    output::{print_anagram_result, print_analyze_result, print_settings, print_solve_result},
    recommender::{DEFAULT_SERVER, Dispatcher, RecommenderClient},
    settings::{Preset, SettingsRepository, TomlSettingsRepository},
};
use std::fs::{self, File};
use std::path::PathBuf;
use std::sync::Mutex;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(
    name = "solvle",
    about = "Wordle assistant: track letter knowledge and get suggestions from a Solvle server",
    version,
    author
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Recommender base URL
    #[arg(long, global = true, env = "SOLVLE_SERVER", default_value = DEFAULT_SERVER)]
    server: String,

    /// Settings file (default: platform config directory)
    #[arg(long, global = true)]
    settings: Option<PathBuf>,
}

#[derive(Subcommand)]
enum Commands {
    /// Interactive TUI mode (default)
    Play,

    /// Suggestions for guesses played so far
    Analyze {
        /// Guesses with feedback, e.g. crane=-Y--G slate=GG---
        guesses: Vec<GuessFeedback>,

        /// Only print the encoded request
        #[arg(long)]
        offline: bool,
    },

    /// Watch the recommender solve a word
    Solve {
        /// The hidden word
        solution: String,

        /// Force the opening guess
        #[arg(short = 'f', long)]
        first_word: Option<String>,
    },

    /// Find words made from the given letters
    Anagram {
        /// Letters to use
        letters: String,
    },

    /// Show or change settings
    Config {
        /// Scoring preset: simple, optimal-mean, lowest-max, three-or-less, four-or-less, two-or-less
        #[arg(long)]
        preset: Option<Preset>,

        #[arg(long)]
        word_length: Option<usize>,

        #[arg(long)]
        attempts: Option<usize>,

        /// Recommender dictionary, e.g. simple, big, huge
        #[arg(long)]
        dictionary: Option<String>,

        #[arg(long)]
        hard_mode: Option<bool>,

        /// Restore defaults before applying other changes
        #[arg(long)]
        reset: bool,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    let command = cli.command.unwrap_or(Commands::Play);

    init_logging(matches!(command, Commands::Play));

    let repository = match cli.settings {
        Some(path) => TomlSettingsRepository::new(path),
        None => TomlSettingsRepository::default_location()?,
    };

    match command {
        Commands::Play => run_play_command(&cli.server, repository),
        Commands::Analyze { guesses, offline } => {
            run_analyze_command(&cli.server, &repository, guesses, offline)
        }
        Commands::Solve {
            solution,
            first_word,
        } => run_solve_command(&cli.server, &repository, &solution, first_word.as_deref()),
        Commands::Anagram { letters } => {
            let client = RecommenderClient::new(&cli.server)?;
            let result = find_anagrams(&client, &letters)?;
            print_anagram_result(&result);
            Ok(())
        }
        Commands::Config {
            preset,
            word_length,
            attempts,
            dictionary,
            hard_mode,
            reset,
        } => {
            let edit = ConfigEdit {
                preset,
                word_length,
                attempts,
                dictionary,
                hard_mode,
                reset,
            };
            let settings = update_config(&repository, &edit)?;
            print_settings(&settings, Some(repository.path()));
            Ok(())
        }
    }
}

/// Logs go to stderr, or to a file while the TUI owns the terminal
fn init_logging(to_file: bool) {
    let filter = EnvFilter::try_from_env("SOLVLE_LOG").unwrap_or_else(|_| EnvFilter::new("warn"));
    let builder = tracing_subscriber::fmt().with_env_filter(filter).with_target(false);

    if to_file {
        if let Some(file) = open_log_file() {
            builder.with_ansi(false).with_writer(Mutex::new(file)).init();
        }
        // No log file: stay silent rather than draw over the TUI
        return;
    }
    builder.with_writer(std::io::stderr).init();
}

fn open_log_file() -> Option<File> {
    let dirs = ProjectDirs::from("dev", "solvle", "solvle")?;
    let dir = dirs.data_local_dir();
    fs::create_dir_all(dir).ok()?;
    File::create(dir.join("solvle.log")).ok()
}

fn run_play_command(server: &str, repository: TomlSettingsRepository) -> Result<()> {
    let client = RecommenderClient::new(server)?;
    let dispatcher = Dispatcher::new(client).context("Failed to start background runtime")?;
    let board = BoardController::new(repository).context("Failed to load settings")?;

    tracing::info!(%server, "starting interactive session");
    run_tui(App::new(board), &dispatcher)
}

fn run_analyze_command(
    server: &str,
    repository: &TomlSettingsRepository,
    guesses: Vec<GuessFeedback>,
    offline: bool,
) -> Result<()> {
    let settings = repository.load().context("Failed to load settings")?;
    let limit = settings.results;
    let config = AnalyzeConfig { guesses, settings };

    let client = if offline {
        None
    } else {
        Some(RecommenderClient::new(server)?)
    };
    let result = analyze_guesses(&config, client.as_ref())?;
    print_analyze_result(&result, limit);
    Ok(())
}

fn run_solve_command(
    server: &str,
    repository: &TomlSettingsRepository,
    solution: &str,
    first_word: Option<&str>,
) -> Result<()> {
    let settings = repository.load().context("Failed to load settings")?;
    let client = RecommenderClient::new(server)?;
    let result = solve_word(&client, solution, first_word, &settings)?;
    print_solve_result(&result);
    Ok(())
}
