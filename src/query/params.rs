//! Scoring configuration parameters
//!
//! The recommender expects every parameter on every request, so a disabled
//! group is sent with neutral values instead of being left out.

use crate::settings::{ScoringConfig, Settings};
use std::fmt;

/// Scoring parameters in their fixed wire order
#[derive(Debug, Clone, PartialEq)]
pub struct ConfigParams {
    pub hard_mode: bool,
    pub right_location_multiplier: f64,
    pub uniqueness_multiplier: f64,
    pub viable_word_preference: f64,
    pub partition_threshold: u32,
    pub location_adjustment_scale: f64,
    pub unique_adjustment_scale: f64,
    pub viable_word_adjustment_scale: f64,
    pub vowel_multiplier: f64,
    pub rut_break_multiplier: f64,
    pub rut_break_threshold: u32,
}

impl ConfigParams {
    /// Name/value pairs in wire order
    #[must_use]
    pub fn pairs(&self) -> Vec<(&'static str, String)> {
        vec![
            ("hardMode", self.hard_mode.to_string()),
            (
                "rightLocationMultiplier",
                self.right_location_multiplier.to_string(),
            ),
            ("uniquenessMultiplier", self.uniqueness_multiplier.to_string()),
            ("viableWordPreference", self.viable_word_preference.to_string()),
            ("partitionThreshold", self.partition_threshold.to_string()),
            (
                "locationAdjustmentScale",
                self.location_adjustment_scale.to_string(),
            ),
            ("uniqueAdjustmentScale", self.unique_adjustment_scale.to_string()),
            (
                "viableWordAdjustmentScale",
                self.viable_word_adjustment_scale.to_string(),
            ),
            ("vowelMultiplier", self.vowel_multiplier.to_string()),
            ("rutBreakMultiplier", self.rut_break_multiplier.to_string()),
            ("rutBreakThreshold", self.rut_break_threshold.to_string()),
        ]
    }
}

/// Renders as `&name=value&name=value...`, ready to append to a query
impl fmt::Display for ConfigParams {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (name, value) in self.pairs() {
            write!(f, "&{name}={value}")?;
        }
        Ok(())
    }
}

/// Build the scoring parameters for a request
///
/// # Examples
/// ```
/// use solvle::query::build_config_params;
/// use solvle::settings::Settings;
///
/// let mut settings = Settings::default();
/// settings.scoring.use_bias = false;
/// let params = build_config_params(&settings);
/// assert!(params.to_string().starts_with(
///     "&hardMode=false&rightLocationMultiplier=0&uniquenessMultiplier=0&viableWordPreference=0"
/// ));
/// ```
#[must_use]
pub fn build_config_params(settings: &Settings) -> ConfigParams {
    let s: &ScoringConfig = &settings.scoring;

    let (right_location_multiplier, uniqueness_multiplier, viable_word_preference) = if s.use_bias
    {
        (
            s.right_location_multiplier,
            s.uniqueness_multiplier,
            s.viable_word_preference,
        )
    } else {
        (0.0, 0.0, 0.0)
    };

    let partition_threshold = if s.use_partitioning {
        s.partition_threshold
    } else {
        0
    };

    let (
        location_adjustment_scale,
        unique_adjustment_scale,
        viable_word_adjustment_scale,
        vowel_multiplier,
    ) = if s.use_fine_tuning {
        (
            s.location_adjustment_scale,
            s.unique_adjustment_scale,
            s.viable_word_adjustment_scale,
            s.vowel_multiplier,
        )
    } else {
        (0.0, 0.0, 0.0, 1.0)
    };

    let (rut_break_multiplier, rut_break_threshold) = if s.use_rut_break {
        (s.rut_break_multiplier, s.rut_break_threshold)
    } else {
        (0.0, 0)
    };

    ConfigParams {
        hard_mode: settings.hard_mode,
        right_location_multiplier,
        uniqueness_multiplier,
        viable_word_preference,
        partition_threshold,
        location_adjustment_scale,
        unique_adjustment_scale,
        viable_word_adjustment_scale,
        vowel_multiplier,
        rut_break_multiplier,
        rut_break_threshold,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_parameter_present_in_order() {
        let params = build_config_params(&Settings::default());
        let names: Vec<_> = params.pairs().into_iter().map(|(name, _)| name).collect();
        assert_eq!(
            names,
            vec![
                "hardMode",
                "rightLocationMultiplier",
                "uniquenessMultiplier",
                "viableWordPreference",
                "partitionThreshold",
                "locationAdjustmentScale",
                "uniqueAdjustmentScale",
                "viableWordAdjustmentScale",
                "vowelMultiplier",
                "rutBreakMultiplier",
                "rutBreakThreshold",
            ]
        );
    }

    #[test]
    fn default_settings_render() {
        let params = build_config_params(&Settings::default());
        assert_eq!(
            params.to_string(),
            "&hardMode=false&rightLocationMultiplier=4&uniquenessMultiplier=9\
             &viableWordPreference=0.007&partitionThreshold=100\
             &locationAdjustmentScale=0&uniqueAdjustmentScale=0\
             &viableWordAdjustmentScale=0&vowelMultiplier=1\
             &rutBreakMultiplier=0&rutBreakThreshold=0"
        );
    }

    #[test]
    fn disabled_groups_degrade_to_neutral() {
        let mut settings = Settings::default();
        settings.scoring.use_bias = false;
        settings.scoring.use_partitioning = false;
        settings.scoring.vowel_multiplier = 3.5;
        settings.scoring.rut_break_multiplier = 2.0;

        let params = build_config_params(&settings);
        assert!(params.right_location_multiplier.abs() < f64::EPSILON);
        assert_eq!(params.partition_threshold, 0);
        assert!((params.vowel_multiplier - 1.0).abs() < f64::EPSILON);
        assert!(params.rut_break_multiplier.abs() < f64::EPSILON);
    }

    #[test]
    fn enabled_groups_pass_values_through() {
        let mut settings = Settings::default();
        settings.hard_mode = true;
        settings.scoring.use_fine_tuning = true;
        settings.scoring.location_adjustment_scale = 0.5;
        settings.scoring.vowel_multiplier = 0.7;
        settings.scoring.use_rut_break = true;
        settings.scoring.rut_break_multiplier = 2.0;
        settings.scoring.rut_break_threshold = 5;

        let rendered = build_config_params(&settings).to_string();
        assert!(rendered.starts_with("&hardMode=true"));
        assert!(rendered.contains("&locationAdjustmentScale=0.5"));
        assert!(rendered.contains("&vowelMultiplier=0.7"));
        assert!(rendered.ends_with("&rutBreakMultiplier=2&rutBreakThreshold=5"));
    }
}
