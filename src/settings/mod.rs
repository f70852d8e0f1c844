//! Puzzle and scoring settings
//!
//! Board dimensions and dictionary choice shape the local state; the scoring
//! configuration is passed through to the recommender untouched.

mod repository;

pub use repository::{MemorySettingsRepository, SettingsRepository, TomlSettingsRepository};

use crate::core::{MAX_WORD_LENGTH, MIN_WORD_LENGTH};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::PathBuf;
use std::str::FromStr;
use thiserror::Error;

/// Fewest rows a board may have
pub const MIN_ATTEMPTS: usize = 2;

#[derive(Debug, Error)]
pub enum SettingsError {
    #[error("Word length must be {MIN_WORD_LENGTH}-{MAX_WORD_LENGTH}, got {0}")]
    InvalidWordLength(usize),

    #[error("Board needs at least {MIN_ATTEMPTS} attempts, got {0}")]
    InvalidAttempts(usize),

    #[error("Dictionary name must not be empty")]
    EmptyDictionary,

    #[error("Unknown scoring preset '{0}'")]
    UnknownPreset(String),

    #[error("Could not determine a settings directory")]
    NoSettingsDir,

    #[error("Failed to access settings file {path}: {source}")]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Failed to parse settings: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("Failed to serialize settings: {0}")]
    Serialize(#[from] toml::ser::Error),
}

/// Everything the player can configure
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// Letters per word (3-8)
    pub word_length: usize,

    /// Rows on the board
    pub attempts: usize,

    /// Recommender dictionary identifier ("simple", "big", "huge", ...)
    pub dictionary: String,

    /// Only suggest words consistent with every revealed hint
    pub hard_mode: bool,

    /// How many suggestions to show per list
    pub results: usize,

    /// Request a fishing score for each entered row
    pub rate_entered_words: bool,

    /// Scoring knobs forwarded to the recommender
    pub scoring: ScoringConfig,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            word_length: 5,
            attempts: 6,
            dictionary: "simple".to_string(),
            hard_mode: false,
            results: 50,
            rate_entered_words: true,
            scoring: ScoringConfig::default(),
        }
    }
}

impl Settings {
    /// Check dimensions and dictionary name
    ///
    /// # Errors
    /// Returns the first invalid field as a `SettingsError`.
    pub fn validate(&self) -> Result<(), SettingsError> {
        if !(MIN_WORD_LENGTH..=MAX_WORD_LENGTH).contains(&self.word_length) {
            return Err(SettingsError::InvalidWordLength(self.word_length));
        }
        if self.attempts < MIN_ATTEMPTS {
            return Err(SettingsError::InvalidAttempts(self.attempts));
        }
        if self.dictionary.trim().is_empty() {
            return Err(SettingsError::EmptyDictionary);
        }
        Ok(())
    }
}

/// Recommender scoring configuration
///
/// Each group has its own toggle; a disabled group is sent as neutral values.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ScoringConfig {
    pub use_bias: bool,
    pub right_location_multiplier: f64,
    pub uniqueness_multiplier: f64,
    pub viable_word_preference: f64,

    pub use_partitioning: bool,
    pub partition_threshold: u32,

    pub use_fine_tuning: bool,
    pub location_adjustment_scale: f64,
    pub unique_adjustment_scale: f64,
    pub viable_word_adjustment_scale: f64,
    pub vowel_multiplier: f64,

    pub use_rut_break: bool,
    pub rut_break_multiplier: f64,
    pub rut_break_threshold: u32,
}

impl Default for ScoringConfig {
    fn default() -> Self {
        let mut config = Self {
            use_bias: true,
            right_location_multiplier: 0.0,
            uniqueness_multiplier: 0.0,
            viable_word_preference: 0.0,
            use_partitioning: true,
            partition_threshold: 0,
            use_fine_tuning: false,
            location_adjustment_scale: 0.0,
            unique_adjustment_scale: 0.0,
            viable_word_adjustment_scale: 0.0,
            vowel_multiplier: 1.0,
            use_rut_break: false,
            rut_break_multiplier: 1.0,
            rut_break_threshold: 6,
        };
        Preset::OptimalMean.apply(&mut config);
        config
    }
}

/// Named scoring configurations tuned on the recommender side
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Preset {
    /// No position bias, no partitioning
    Simple,
    /// Lowest mean guess count
    OptimalMean,
    /// Never needs more than five guesses
    LowestMax,
    /// Most solves in three or fewer
    ThreeOrLess,
    /// Most solves in four or fewer
    FourOrLess,
    /// Most solves in two, at any cost
    TwoOrLess,
}

impl Preset {
    pub const ALL: [Self; 6] = [
        Self::Simple,
        Self::OptimalMean,
        Self::LowestMax,
        Self::ThreeOrLess,
        Self::FourOrLess,
        Self::TwoOrLess,
    ];

    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Simple => "simple",
            Self::OptimalMean => "optimal-mean",
            Self::LowestMax => "lowest-max",
            Self::ThreeOrLess => "three-or-less",
            Self::FourOrLess => "four-or-less",
            Self::TwoOrLess => "two-or-less",
        }
    }

    /// (right location, uniqueness, partition threshold, viable preference)
    const fn values(self) -> (f64, f64, u32, f64) {
        match self {
            Self::Simple => (0.0, 0.0, 0, 0.0),
            Self::OptimalMean => (4.0, 9.0, 100, 0.007),
            Self::LowestMax => (1.0, 5.0, 50, 0.01),
            Self::ThreeOrLess => (4.0, 8.0, 50, 0.001),
            Self::FourOrLess => (3.0, 10.0, 50, 0.007),
            Self::TwoOrLess => (10.0, 3.0, 10, 0.25),
        }
    }

    /// Overwrite the bias and partition groups with this preset
    pub fn apply(self, config: &mut ScoringConfig) {
        let (right_location, uniqueness, partition, viable) = self.values();
        config.right_location_multiplier = right_location;
        config.uniqueness_multiplier = uniqueness;
        config.viable_word_preference = viable;
        config.partition_threshold = partition;
        config.use_bias = self != Self::Simple;
        config.use_partitioning = partition > 0;
    }
}

impl fmt::Display for Preset {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Preset {
    type Err = SettingsError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim().to_ascii_lowercase().replace('_', "-");
        Self::ALL
            .into_iter()
            .find(|preset| preset.name() == wanted)
            .ok_or_else(|| SettingsError::UnknownPreset(s.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_settings_are_valid() {
        let settings = Settings::default();
        assert!(settings.validate().is_ok());
        assert_eq!(settings.word_length, 5);
        assert_eq!(settings.attempts, 6);
    }

    #[test]
    fn validate_rejects_bad_dimensions() {
        let mut settings = Settings {
            word_length: 9,
            ..Settings::default()
        };
        assert!(matches!(
            settings.validate(),
            Err(SettingsError::InvalidWordLength(9))
        ));

        settings.word_length = 5;
        settings.attempts = 1;
        assert!(matches!(
            settings.validate(),
            Err(SettingsError::InvalidAttempts(1))
        ));

        settings.attempts = 6;
        settings.dictionary = "  ".to_string();
        assert!(matches!(
            settings.validate(),
            Err(SettingsError::EmptyDictionary)
        ));
    }

    #[test]
    fn default_scoring_uses_optimal_mean() {
        let config = ScoringConfig::default();
        assert!(config.use_bias);
        assert!((config.right_location_multiplier - 4.0).abs() < f64::EPSILON);
        assert!((config.uniqueness_multiplier - 9.0).abs() < f64::EPSILON);
        assert_eq!(config.partition_threshold, 100);
    }

    #[test]
    fn simple_preset_disables_bias_and_partitioning() {
        let mut config = ScoringConfig::default();
        Preset::Simple.apply(&mut config);
        assert!(!config.use_bias);
        assert!(!config.use_partitioning);
    }

    #[test]
    fn preset_names_round_trip() {
        for preset in Preset::ALL {
            assert_eq!(preset.name().parse::<Preset>().unwrap(), preset);
        }
        assert_eq!("OPTIMAL_MEAN".parse::<Preset>().unwrap(), Preset::OptimalMean);
        assert!("fastest".parse::<Preset>().is_err());
    }

    #[test]
    fn partial_toml_fills_defaults() {
        let settings: Settings =
            toml::from_str("word_length = 6\n[scoring]\nuse_rut_break = true\n").unwrap();
        assert_eq!(settings.word_length, 6);
        assert_eq!(settings.attempts, 6);
        assert!(settings.scoring.use_rut_break);
        assert_eq!(settings.scoring.partition_threshold, 100);
    }
}
