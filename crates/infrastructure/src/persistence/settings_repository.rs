//! Clock settings persistence.
//!
//! Stores settings in the platform-specific config directory:
//! - Linux: ~/.config/dynclock/settings.json
//! - macOS: ~/Library/Application Support/dynclock/settings.json
//! - Windows: %APPDATA%/dynclock/settings.json

use std::path::{Path, PathBuf};

use dynclock_domain::{ClockSettings, DomainError};
use tokio::fs;

/// Error type for settings operations.
#[derive(Debug, thiserror::Error)]
pub enum SettingsError {
    /// IO error during file operations.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// The settings file is not valid JSON for [`ClockSettings`].
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// The settings parsed but hold an invalid value.
    #[error("Invalid settings: {0}")]
    Invalid(#[from] DomainError),

    /// Could not determine config directory.
    #[error("Could not determine config directory")]
    NoConfigDir,
}

/// Repository for clock settings persistence.
#[derive(Debug, Clone)]
pub struct SettingsRepository {
    path: Option<PathBuf>,
}

impl Default for SettingsRepository {
    fn default() -> Self {
        Self::new()
    }
}

impl SettingsRepository {
    /// Creates a repository using the platform config directory.
    #[must_use]
    pub fn new() -> Self {
        Self {
            path: Self::default_path(),
        }
    }

    /// Creates a repository reading and writing `path`.
    #[must_use]
    pub fn at(path: impl Into<PathBuf>) -> Self {
        Self {
            path: Some(path.into()),
        }
    }

    /// Returns the default settings path, if a config directory exists.
    #[must_use]
    pub fn default_path() -> Option<PathBuf> {
        dirs::config_dir().map(|p| p.join("dynclock").join("settings.json"))
    }

    /// Returns the path this repository uses, if any.
    #[must_use]
    pub fn path(&self) -> Option<&Path> {
        self.path.as_deref()
    }

    /// Loads settings from disk.
    ///
    /// Returns default settings if there is no config directory or the
    /// file doesn't exist.
    ///
    /// # Errors
    ///
    /// Returns an error if the file can't be read, isn't valid JSON, or
    /// holds invalid values.
    pub async fn load(&self) -> Result<ClockSettings, SettingsError> {
        let Some(path) = &self.path else {
            return Ok(ClockSettings::default());
        };

        if !fs::try_exists(path).await? {
            tracing::debug!(path = %path.display(), "no settings file, using defaults");
            return Ok(ClockSettings::default());
        }

        let content = fs::read(path).await?;
        let settings: ClockSettings = serde_json::from_slice(&content)?;
        settings.validate()?;
        Ok(settings)
    }

    /// Saves settings to disk, creating the parent directory as needed.
    ///
    /// # Errors
    ///
    /// Returns an error if the settings are invalid or can't be written.
    pub async fn save(&self, settings: &ClockSettings) -> Result<(), SettingsError> {
        let Some(path) = &self.path else {
            return Err(SettingsError::NoConfigDir);
        };
        settings.validate()?;

        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).await?;
        }

        let mut content = serde_json::to_vec_pretty(settings)?;
        content.push(b'\n');
        fs::write(path, content).await?;

        Ok(())
    }
}
