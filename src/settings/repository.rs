//! Persistence for settings
//!
//! Settings live in `settings.toml` under the platform config directory
//! unless a path is given explicitly.

use super::{Settings, SettingsError};
use directories::ProjectDirs;
use std::cell::RefCell;
use std::fs;
use std::path::{Path, PathBuf};

/// Load/save capability for persisted settings
pub trait SettingsRepository {
    /// Load stored settings, falling back to defaults when nothing is stored
    ///
    /// # Errors
    /// Returns an error if stored settings exist but cannot be read or parsed.
    fn load(&self) -> Result<Settings, SettingsError>;

    /// Store settings
    ///
    /// # Errors
    /// Returns an error if the settings cannot be written.
    fn save(&self, settings: &Settings) -> Result<(), SettingsError>;
}

/// TOML file repository
#[derive(Debug, Clone)]
pub struct TomlSettingsRepository {
    path: PathBuf,
}

impl TomlSettingsRepository {
    #[must_use]
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Repository at the platform default location
    ///
    /// # Errors
    /// Returns `SettingsError::NoSettingsDir` if no home directory can be found.
    pub fn default_location() -> Result<Self, SettingsError> {
        Self::config_dir()
            .map(|dir| Self::new(dir.join("settings.toml")))
            .ok_or(SettingsError::NoSettingsDir)
    }

    /// Platform config directory for the application
    #[must_use]
    pub fn config_dir() -> Option<PathBuf> {
        ProjectDirs::from("dev", "solvle", "solvle").map(|dirs| dirs.config_dir().to_path_buf())
    }

    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    fn io_error(&self, source: std::io::Error) -> SettingsError {
        SettingsError::Io {
            path: self.path.clone(),
            source,
        }
    }
}

impl SettingsRepository for TomlSettingsRepository {
    fn load(&self) -> Result<Settings, SettingsError> {
        if !self.path.exists() {
            return Ok(Settings::default());
        }

        let content = fs::read_to_string(&self.path).map_err(|e| self.io_error(e))?;
        let settings: Settings = toml::from_str(&content)?;
        settings.validate()?;
        Ok(settings)
    }

    fn save(&self, settings: &Settings) -> Result<(), SettingsError> {
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent).map_err(|e| self.io_error(e))?;
        }

        let content = toml::to_string_pretty(settings)?;
        fs::write(&self.path, content).map_err(|e| self.io_error(e))
    }
}

/// In-memory repository, for tests and `--no-save` sessions
#[derive(Debug, Default)]
pub struct MemorySettingsRepository {
    stored: RefCell<Option<Settings>>,
}

impl MemorySettingsRepository {
    #[must_use]
    pub fn with(settings: Settings) -> Self {
        Self {
            stored: RefCell::new(Some(settings)),
        }
    }

    /// Last saved settings, if any
    #[must_use]
    pub fn stored(&self) -> Option<Settings> {
        self.stored.borrow().clone()
    }
}

impl SettingsRepository for MemorySettingsRepository {
    fn load(&self) -> Result<Settings, SettingsError> {
        Ok(self.stored().unwrap_or_default())
    }

    fn save(&self, settings: &Settings) -> Result<(), SettingsError> {
        *self.stored.borrow_mut() = Some(settings.clone());
        Ok(())
    }
}
