use std::sync::Arc;

use parking_lot::RwLock;
use tracing::{info, warn};
use tracing_appender::non_blocking::WorkerGuard;

use crate::adapters::TomlSettingsStore;
use crate::domain::{
    resolve_selection, DeviceSelection, DomainError, PrefsConfig, UpdateCadence,
};
use crate::infrastructure::init_logging;
use crate::ports::{DeviceEnumerator, SettingsStore, UpdateEngine};

/// Orchestrates preference loading, resolution and persistence on behalf of
/// the host application's preferences UI.
pub struct PrefsController {
    config: RwLock<PrefsConfig>,
    settings: Arc<dyn SettingsStore>,
    enumerator: Arc<dyn DeviceEnumerator>,
    update_engine: Arc<dyn UpdateEngine>,
    _log_guard: Option<WorkerGuard>,
}

impl PrefsController {
    /// Initialize the controller with the default on-disk settings store.
    pub fn new(
        enumerator: Arc<dyn DeviceEnumerator>,
        update_engine: Arc<dyn UpdateEngine>,
    ) -> Result<Self, DomainError> {
        let settings = Arc::new(TomlSettingsStore::new()?);
        Self::with_store(settings, enumerator, update_engine)
    }

    /// Initialize the controller against an explicit settings store.
    pub fn with_store(
        settings: Arc<dyn SettingsStore>,
        enumerator: Arc<dyn DeviceEnumerator>,
        update_engine: Arc<dyn UpdateEngine>,
    ) -> Result<Self, DomainError> {
        // Step 1: Load preferences
        let config = settings.load()?;

        // Step 2: Initialize logging from the persisted logging section
        let log_guard = init_logging(
            &settings.logs_dir(),
            &config.logging.level,
            config.logging.log_to_file,
        )?;

        // Step 3: Make the engine's schedule agree with what we persisted
        // before its first scheduled check fires
        update_engine.set_check_interval(config.update.check_interval_secs);
        update_engine.set_auto_check(config.update.auto_check);

        info!(
            auto_check = config.update.auto_check,
            interval_secs = config.update.check_interval_secs,
            "PrefsController initialized"
        );

        Ok(Self {
            config: RwLock::new(config),
            settings,
            enumerator,
            update_engine,
            _log_guard: log_guard,
        })
    }

    /// Resolve the device menu state for the serial preferences pane.
    ///
    /// Enumerates devices fresh on every call. When enumeration is
    /// unavailable or lists nothing, the pane shows an empty menu with no
    /// selection.
    pub fn device_view_state(&self) -> DeviceSelection {
        if !self.enumerator.is_available() {
            warn!("Serial enumeration unavailable");
            return DeviceSelection::empty();
        }

        let available = self.enumerator.list_devices();
        if available.is_empty() {
            return DeviceSelection::empty();
        }

        let preferred = self.enumerator.preferred_device();
        let config = self.config.read();
        resolve_selection(
            &available,
            config.serial.port.as_deref(),
            preferred.as_ref().map(|p| p.path.as_str()),
        )
    }

    /// Cadence category and auto-check flag for the update preferences pane.
    pub fn cadence_view_state(&self) -> (UpdateCadence, bool) {
        let config = self.config.read();
        (
            UpdateCadence::from_interval(config.update.check_interval_secs),
            config.update.auto_check,
        )
    }

    /// Persist the device the user picked in the menu.
    ///
    /// Returns the persisted path, or `None` when `index` does not refer to
    /// a catalog entry; nothing is persisted in that case.
    pub fn apply_device_choice(
        &self,
        selection: &DeviceSelection,
        index: usize,
    ) -> Result<Option<String>, DomainError> {
        let Some(path) = selection.path_for(index) else {
            warn!(index, "Ignoring device pick outside the catalog");
            return Ok(None);
        };
        let path = path.to_string();

        {
            let mut config = self.config.write();
            config.serial.port = Some(path.clone());
            self.settings.save(&config)?;
        }

        info!(port = %path, "Serial port preference updated");
        Ok(Some(path))
    }

    /// Persist the cadence the user picked and reschedule the engine.
    ///
    /// `tag` is the raw menu-item tag; unrecognized tags fall back to the
    /// daily interval. Returns the interval that was applied.
    pub fn apply_cadence_choice(&self, tag: u8) -> Result<u64, DomainError> {
        let secs = UpdateCadence::interval_for_tag(tag);

        {
            let mut config = self.config.write();
            config.update.check_interval_secs = secs;
            self.settings.save(&config)?;
        }
        self.update_engine.set_check_interval(secs);

        info!(interval_secs = secs, "Update check interval updated");
        Ok(secs)
    }

    /// Enable or disable scheduled update checks.
    pub fn set_auto_check(&self, enabled: bool) -> Result<(), DomainError> {
        {
            let mut config = self.config.write();
            config.update.auto_check = enabled;
            self.settings.save(&config)?;
        }
        self.update_engine.set_auto_check(enabled);

        info!(enabled, "Scheduled update checks toggled");
        Ok(())
    }

    /// Current serial line speed.
    pub fn serial_baud(&self) -> u32 {
        self.config.read().serial.baud_rate
    }

    /// Persist a new serial line speed.
    pub fn set_serial_baud(&self, baud_rate: u32) -> Result<(), DomainError> {
        let mut config = self.config.write();
        config.serial.baud_rate = baud_rate;
        self.settings.save(&config)
    }

    /// Toggle mirroring of log output to a file. Takes effect on the next
    /// launch.
    pub fn set_log_to_file(&self, enabled: bool) -> Result<(), DomainError> {
        let mut config = self.config.write();
        config.logging.log_to_file = enabled;
        self.settings.save(&config)
    }

    /// Snapshot of the current preferences.
    pub fn config(&self) -> PrefsConfig {
        self.config.read().clone()
    }

    /// Path to the preferences file.
    pub fn config_path(&self) -> String {
        self.settings.config_path().to_string_lossy().to_string()
    }

    /// Path to the logs directory.
    pub fn logs_dir(&self) -> String {
        self.settings.logs_dir().to_string_lossy().to_string()
    }
}
