//! Process-wide settings.

use std::time::Duration;

use crate::ConfigError;

/// Default refresh interval (seconds).
pub const DEFAULT_INTERVAL_SECS: u64 = 60;

/// Default render tick (seconds).
pub const DEFAULT_TICK_SECS: u64 = 5;

/// Default limit for one unseen count query (seconds).
pub const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// Resolved process-wide settings.
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub struct Settings {
    /// How long a fetched count stays fresh.
    pub interval: Duration,

    /// How often the status line is rendered.
    pub tick: Duration,

    /// Limit for one whole unseen count query.
    pub timeout: Duration,
}

impl Settings {
    /// Resolve the settings from the root config.
    pub fn from_config(config: &config_core::Config) -> Result<Self, ConfigError> {
        let interval_secs = config.interval_secs.unwrap_or(DEFAULT_INTERVAL_SECS);
        if interval_secs == 0 {
            return Err(ConfigError::ZeroInterval);
        }

        let tick_secs = config.tick_secs.unwrap_or(DEFAULT_TICK_SECS);
        if tick_secs == 0 {
            return Err(ConfigError::ZeroTick);
        }

        let timeout_secs = config.timeout_secs.unwrap_or(DEFAULT_TIMEOUT_SECS);
        if timeout_secs == 0 {
            return Err(ConfigError::ZeroTimeout);
        }

        Ok(Self {
            interval: Duration::from_secs(interval_secs),
            tick: Duration::from_secs(tick_secs),
            timeout: Duration::from_secs(timeout_secs),
        })
    }
}
