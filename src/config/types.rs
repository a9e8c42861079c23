use std::path::PathBuf;
use std::time::Duration;

use clap::ValueEnum;
use serde::{Deserialize, Serialize};

/// Root configuration container.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub display: DisplayConfig,
    #[serde(default)]
    pub notifications: NotificationConfig,
    #[serde(default)]
    pub logging: LoggingConfig,
}

/// Which keypad the terminal UI shows.
///
/// Both layouts drive the same engine; the scientific one only adds keys.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum KeypadLayout {
    #[default]
    Basic,
    Scientific,
}

impl KeypadLayout {
    pub fn toggled(self) -> Self {
        match self {
            KeypadLayout::Basic => KeypadLayout::Scientific,
            KeypadLayout::Scientific => KeypadLayout::Basic,
        }
    }

    pub fn display_name(self) -> &'static str {
        match self {
            KeypadLayout::Basic => "Basic",
            KeypadLayout::Scientific => "Scientific",
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct DisplayConfig {
    /// Keypad shown at startup (default: basic).
    #[serde(default)]
    pub layout: KeypadLayout,
}

/// Toast settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NotificationConfig {
    /// How long a toast stays visible, in milliseconds (default: 2500).
    #[serde(default = "default_duration_ms")]
    pub duration_ms: u64,
}

impl NotificationConfig {
    pub fn duration(&self) -> Duration {
        Duration::from_millis(self.duration_ms)
    }
}

/// Log output settings for the terminal UI.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// Default filter when `RUST_LOG` is unset (default: "info").
    #[serde(default = "default_log_level")]
    pub level: String,
    /// Log file path. Defaults to `<data_local_dir>/pocketcalc/pocketcalc.log`.
    #[serde(default)]
    pub file: Option<PathBuf>,
}

impl LoggingConfig {
    pub fn log_path(&self) -> PathBuf {
        match &self.file {
            Some(path) => path.clone(),
            None => dirs::data_local_dir()
                .unwrap_or_else(|| PathBuf::from("."))
                .join("pocketcalc")
                .join("pocketcalc.log"),
        }
    }
}

fn default_duration_ms() -> u64 {
    2500
}

fn default_log_level() -> String {
    "info".to_string()
}

impl Default for NotificationConfig {
    fn default() -> Self {
        Self {
            duration_ms: default_duration_ms(),
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            file: None,
        }
    }
}
