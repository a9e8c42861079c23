//! Configuration loaded from `config.toml`.

mod loader;
mod types;

pub use loader::{ConfigError, MAX_NOTIFICATION_MS};
pub use types::{Config, DisplayConfig, KeypadLayout, LoggingConfig, NotificationConfig};
