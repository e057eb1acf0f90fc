use std::path::PathBuf;

use crate::domain::{DomainError, PrefsConfig};

/// Settings store port for persisting and loading preferences.
pub trait SettingsStore: Send + Sync {
    /// Load preferences from persistent storage.
    /// Creates default preferences if none exist.
    fn load(&self) -> Result<PrefsConfig, DomainError>;

    /// Save preferences to persistent storage.
    fn save(&self, config: &PrefsConfig) -> Result<(), DomainError>;

    /// Get the path to the preferences file.
    fn config_path(&self) -> PathBuf;

    /// Get the path to the logs directory.
    fn logs_dir(&self) -> PathBuf;
}
