//! Settings command

use crate::settings::{Preset, Settings, SettingsRepository};
use anyhow::{Context, Result};

/// Requested settings changes; `None` leaves a field alone
#[derive(Debug, Default)]
pub struct ConfigEdit {
    pub preset: Option<Preset>,
    pub word_length: Option<usize>,
    pub attempts: Option<usize>,
    pub dictionary: Option<String>,
    pub hard_mode: Option<bool>,
    pub reset: bool,
}

impl ConfigEdit {
    #[must_use]
    pub fn is_empty(&self) -> bool {
        !self.reset
            && self.preset.is_none()
            && self.word_length.is_none()
            && self.attempts.is_none()
            && self.dictionary.is_none()
            && self.hard_mode.is_none()
    }

    fn apply(&self, settings: &mut Settings) {
        if self.reset {
            *settings = Settings::default();
        }
        if let Some(preset) = self.preset {
            preset.apply(&mut settings.scoring);
        }
        if let Some(word_length) = self.word_length {
            settings.word_length = word_length;
        }
        if let Some(attempts) = self.attempts {
            settings.attempts = attempts;
        }
        if let Some(dictionary) = &self.dictionary {
            settings.dictionary.clone_from(dictionary);
        }
        if let Some(hard_mode) = self.hard_mode {
            settings.hard_mode = hard_mode;
        }
    }
}

/// Apply `edit` to stored settings and save them
///
/// Nothing is written when the edit is empty or invalid.
///
/// # Errors
/// Returns an error if settings cannot be loaded, are invalid, or cannot be saved.
pub fn update_config<R: SettingsRepository>(repository: &R, edit: &ConfigEdit) -> Result<Settings> {
    let mut settings = repository.load().context("Failed to load settings")?;
    if edit.is_empty() {
        return Ok(settings);
    }

    edit.apply(&mut settings);
    settings.validate()?;
    repository
        .save(&settings)
        .context("Failed to save settings")?;
    tracing::info!(?edit, "settings updated");
    Ok(settings)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::settings::MemorySettingsRepository;

    #[test]
    fn empty_edit_only_reads() {
        let repo = MemorySettingsRepository::default();
        let settings = update_config(&repo, &ConfigEdit::default()).unwrap();
        assert_eq!(settings, Settings::default());
        assert!(repo.stored().is_none());
    }

    #[test]
    fn edits_are_saved() {
        let repo = MemorySettingsRepository::default();
        let edit = ConfigEdit {
            word_length: Some(6),
            dictionary: Some("big".to_string()),
            preset: Some(Preset::LowestMax),
            ..ConfigEdit::default()
        };
        update_config(&repo, &edit).unwrap();

        let stored = repo.stored().unwrap();
        assert_eq!(stored.word_length, 6);
        assert_eq!(stored.dictionary, "big");
        assert!((stored.scoring.right_location_multiplier - 1.0).abs() < f64::EPSILON);
    }

    #[test]
    fn invalid_edit_is_not_saved() {
        let repo = MemorySettingsRepository::default();
        let edit = ConfigEdit {
            attempts: Some(1),
            ..ConfigEdit::default()
        };
        assert!(update_config(&repo, &edit).is_err());
        assert!(repo.stored().is_none());
    }

    #[test]
    fn reset_restores_defaults_before_other_edits() {
        let mut custom = Settings::default();
        custom.word_length = 7;
        custom.hard_mode = true;
        let repo = MemorySettingsRepository::with(custom);

        let edit = ConfigEdit {
            reset: true,
            attempts: Some(8),
            ..ConfigEdit::default()
        };
        let settings = update_config(&repo, &edit).unwrap();
        assert_eq!(settings.word_length, 5);
        assert!(!settings.hard_mode);
        assert_eq!(settings.attempts, 8);
    }
}
