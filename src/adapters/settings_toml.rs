use std::fs;
use std::path::PathBuf;

use tracing::{debug, info};

use crate::domain::{DomainError, PrefsConfig};
use crate::ports::SettingsStore;

/// TOML-based settings store with OS-specific paths.
pub struct TomlSettingsStore {
    config_dir: PathBuf,
}

impl TomlSettingsStore {
    /// Create a store rooted at the OS-specific config directory.
    /// - macOS: ~/Library/Application Support/Portside/
    /// - Windows: %APPDATA%\Portside\
    /// - Linux: ~/.config/Portside/
    pub fn new() -> Result<Self, DomainError> {
        let config_dir = dirs::config_dir()
            .map(|p| p.join("Portside"))
            .ok_or_else(|| {
                DomainError::Config("Could not find application config directory".to_string())
            })?;

        fs::create_dir_all(&config_dir)?;

        info!(config_dir = ?config_dir, "Settings store initialized");

        Ok(Self { config_dir })
    }

    /// Create a store rooted at an explicit directory. Used by tests and
    /// portable installs.
    pub fn at_dir(config_dir: PathBuf) -> Result<Self, DomainError> {
        fs::create_dir_all(&config_dir)?;
        Ok(Self { config_dir })
    }
}

impl SettingsStore for TomlSettingsStore {
    fn load(&self) -> Result<PrefsConfig, DomainError> {
        let config_path = self.config_path();

        if config_path.exists() {
            debug!(path = ?config_path, "Loading preferences");
            let content = fs::read_to_string(&config_path)?;
            let config: PrefsConfig = toml::from_str(&content)?;
            info!(path = ?config_path, "Preferences loaded");
            Ok(config)
        } else {
            info!(path = ?config_path, "Preferences file not found, creating default");
            let config = PrefsConfig::new();
            self.save(&config)?;
            Ok(config)
        }
    }

    fn save(&self, config: &PrefsConfig) -> Result<(), DomainError> {
        let config_path = self.config_path();

        if let Some(parent) = config_path.parent() {
            fs::create_dir_all(parent)?;
        }

        let content = toml::to_string_pretty(config)?;
        fs::write(&config_path, content)?;

        info!(path = ?config_path, "Preferences saved");
        Ok(())
    }

    fn config_path(&self) -> PathBuf {
        self.config_dir.join("preferences.toml")
    }

    fn logs_dir(&self) -> PathBuf {
        self.config_dir.join("logs")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::env;

    #[test]
    fn test_store_paths() {
        let temp_dir = env::temp_dir().join("portside_paths_test");
        let store = TomlSettingsStore::at_dir(temp_dir.clone()).unwrap();

        assert!(store.config_path().ends_with("preferences.toml"));
        assert!(store.logs_dir().starts_with(&temp_dir));

        let _ = fs::remove_dir_all(&temp_dir);
    }

    #[test]
    fn test_load_creates_default_file() {
        let temp_dir = env::temp_dir().join("portside_default_test");
        let _ = fs::remove_dir_all(&temp_dir);

        let store = TomlSettingsStore::at_dir(temp_dir.clone()).unwrap();
        let config = store.load().unwrap();

        assert!(store.config_path().exists());
        assert_eq!(config.serial.baud_rate, 38_400);

        let _ = fs::remove_dir_all(&temp_dir);
    }

    #[test]
    fn test_config_roundtrip() {
        let temp_dir = env::temp_dir().join("portside_roundtrip_test");
        let _ = fs::remove_dir_all(&temp_dir);

        let store = TomlSettingsStore::at_dir(temp_dir.clone()).unwrap();

        let mut config = PrefsConfig::new();
        config.serial.port = Some("/dev/cu.usbserial-A".to_string());
        config.update.check_interval_secs = 604_800;
        config.logging.log_to_file = true;

        store.save(&config).unwrap();

        let loaded = store.load().unwrap();
        assert_eq!(loaded.serial.port.as_deref(), Some("/dev/cu.usbserial-A"));
        assert_eq!(loaded.update.check_interval_secs, 604_800);
        assert!(loaded.logging.log_to_file);

        let _ = fs::remove_dir_all(&temp_dir);
    }
}
