//! Configuration loading: TOML file with environment variable overrides.
//!
//! Looks for `easypanel.toml` in the working directory unless a path is given
//! on the command line. Every field has a default so the file is optional.
//! Environment variables take precedence over file values.

use std::path::Path;
use std::time::Duration;

use easypanel_adapter_http_reqwest::HttpConfig;
use easypanel_app::services::status_poller::PollIntervals;
use easypanel_domain::binding::Binding;
use serde::Deserialize;

const DEFAULT_PATH: &str = "easypanel.toml";

/// Top-level configuration.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Panel location and request timeout.
    pub panel: HttpConfig,
    /// Poll periods.
    pub polling: PollingConfig,
    /// Notification settings.
    pub notifications: NotificationsConfig,
    /// Logging settings.
    pub logging: LoggingConfig,
    /// Elements shown on the board.
    pub bindings: BindingsConfig,
}

/// Poll periods in seconds.
#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct PollingConfig {
    pub services_interval_secs: u64,
    pub stats_interval_secs: u64,
}

#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct NotificationsConfig {
    /// Seconds a notification stays visible.
    pub dismiss_after_secs: u64,
}

/// Logging configuration.
#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    /// Filter directive (`RUST_LOG` syntax).
    pub filter: String,
}

/// Service names and stat keys to display.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct BindingsConfig {
    pub services: Vec<String>,
    pub stats: Vec<String>,
}

impl Config {
    /// Load configuration from `path` (or `easypanel.toml` if present), then
    /// apply environment-variable overrides.
    ///
    /// # Errors
    ///
    /// Returns an error if the file is malformed, if an explicitly given file
    /// cannot be read, or if the result fails validation.
    pub fn load(path: Option<&Path>) -> Result<Self, ConfigError> {
        let mut config = match path {
            Some(path) => Self::from_file(path, true)?,
            None => Self::from_file(Path::new(DEFAULT_PATH), false)?,
        };
        config.apply_env_overrides(|name| std::env::var(name).ok());
        config.validate()?;
        Ok(config)
    }

    fn from_file(path: &Path, required: bool) -> Result<Self, ConfigError> {
        match std::fs::read_to_string(path) {
            Ok(content) => toml::from_str(&content).map_err(ConfigError::Parse),
            Err(err) if err.kind() == std::io::ErrorKind::NotFound && !required => {
                Ok(Self::default())
            }
            Err(err) => Err(ConfigError::Io(err)),
        }
    }

    fn apply_env_overrides(&mut self, var: impl Fn(&str) -> Option<String>) {
        if let Some(val) = var("EASYPANEL_URL") {
            self.panel.base_url = val;
        }
        if let Some(secs) = var("EASYPANEL_TIMEOUT_SECS").and_then(|val| val.parse().ok()) {
            self.panel.timeout_secs = Some(secs);
        }
        if let Some(secs) = var("EASYPANEL_SERVICES_INTERVAL").and_then(|val| val.parse().ok()) {
            self.polling.services_interval_secs = secs;
        }
        if let Some(secs) = var("EASYPANEL_STATS_INTERVAL").and_then(|val| val.parse().ok()) {
            self.polling.stats_interval_secs = secs;
        }
        if let Some(val) = var("EASYPANEL_LOG") {
            self.logging.filter = val;
        }
        if let Some(val) = var("RUST_LOG") {
            self.logging.filter = val;
        }
    }

    fn validate(&self) -> Result<(), ConfigError> {
        if self.polling.services_interval_secs == 0 || self.polling.stats_interval_secs == 0 {
            return Err(ConfigError::Validation(
                "poll intervals must be non-zero".to_string(),
            ));
        }
        if self.notifications.dismiss_after_secs == 0 {
            return Err(ConfigError::Validation(
                "notification dismiss delay must be non-zero".to_string(),
            ));
        }
        self.panel
            .validate()
            .map_err(|err| ConfigError::Validation(err.to_string()))
    }

    #[must_use]
    pub fn poll_intervals(&self) -> PollIntervals {
        PollIntervals {
            services: Duration::from_secs(self.polling.services_interval_secs),
            stats: Duration::from_secs(self.polling.stats_interval_secs),
        }
    }

    #[must_use]
    pub fn dismiss_after(&self) -> Duration {
        Duration::from_secs(self.notifications.dismiss_after_secs)
    }

    /// Board bindings, services first.
    #[must_use]
    pub fn bindings(&self) -> Vec<Binding> {
        let services = self.bindings.services.iter().map(Binding::service);
        let stats = self.bindings.stats.iter().map(Binding::stat);
        services.chain(stats).collect()
    }
}

impl Default for PollingConfig {
    fn default() -> Self {
        Self {
            services_interval_secs: 30,
            stats_interval_secs: 10,
        }
    }
}

impl Default for NotificationsConfig {
    fn default() -> Self {
        Self {
            dismiss_after_secs: 5,
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            filter: "easypanel=info".to_string(),
        }
    }
}

/// Configuration errors.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// TOML parse failure.
    #[error("failed to parse config file")]
    Parse(#[from] toml::de::Error),
    /// File I/O failure.
    #[error("failed to read config file")]
    Io(#[from] std::io::Error),
    /// Semantic validation failure.
    #[error("invalid configuration: {0}")]
    Validation(String),
}
