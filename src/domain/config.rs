use serde::{Deserialize, Serialize};

/// Serial connection configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct SerialConfig {
    /// Device path of the chosen serial port, once the user has picked one.
    pub port: Option<String>,
    /// Line speed in bits per second.
    pub baud_rate: u32,
}

impl Default for SerialConfig {
    fn default() -> Self {
        Self {
            port: None,
            baud_rate: 38_400,
        }
    }
}

/// Software update configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct UpdateConfig {
    /// Whether scheduled update checks run at all.
    pub auto_check: bool,
    /// Seconds between scheduled checks.
    pub check_interval_secs: u64,
}

impl Default for UpdateConfig {
    fn default() -> Self {
        Self {
            auto_check: true,
            check_interval_secs: 86_400,
        }
    }
}

/// Logging configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    /// Log level: "trace", "debug", "info", "warn", "error".
    pub level: String,
    /// Mirror log output to a rotating file.
    pub log_to_file: bool,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
            log_to_file: false,
        }
    }
}

/// Main preferences file.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct PrefsConfig {
    pub serial: SerialConfig,
    pub update: UpdateConfig,
    pub logging: LoggingConfig,
}

impl PrefsConfig {
    /// Create a new PrefsConfig with default values.
    pub fn new() -> Self {
        Self::default()
    }
}
