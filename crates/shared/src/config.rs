//! Application configuration management.

use serde::Deserialize;

use crate::types::{Currency, RemainderPolicy};

/// Environment variable prefix, e.g. `EVENSPLIT__SPLIT__REMAINDER_POLICY`.
const ENV_PREFIX: &str = "EVENSPLIT";

/// Application configuration.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct AppConfig {
    /// Split calculation settings.
    #[serde(default)]
    pub split: SplitConfig,
    /// Logging settings.
    #[serde(default)]
    pub log: LogConfig,
}

/// Split calculation settings.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct SplitConfig {
    /// Who absorbs the leftover minor units of an equal split.
    #[serde(default)]
    pub remainder_policy: RemainderPolicy,
    /// Currency used when the caller does not name one.
    #[serde(default)]
    pub default_currency: Currency,
}

/// Logging configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct LogConfig {
    /// `tracing_subscriber::EnvFilter` directive; `RUST_LOG` takes precedence.
    #[serde(default = "default_log_filter")]
    pub filter: String,
    /// Emit JSON log lines instead of human-readable ones.
    #[serde(default)]
    pub json: bool,
}

impl Default for LogConfig {
    fn default() -> Self {
        Self {
            filter: default_log_filter(),
            json: false,
        }
    }
}

fn default_log_filter() -> String {
    "evensplit=info".to_string()
}

impl AppConfig {
    /// Loads configuration from environment and config files.
    ///
    /// # Errors
    ///
    /// Returns an error if configuration cannot be loaded.
    pub fn load() -> Result<Self, config::ConfigError> {
        dotenvy::dotenv().ok();

        let run_mode = std::env::var("RUN_MODE").unwrap_or_else(|_| "development".to_string());

        let config = config::Config::builder()
            .add_source(config::File::with_name("config/default").required(false))
            .add_source(config::File::with_name(&format!("config/{run_mode}")).required(false))
            .add_source(config::Environment::with_prefix(ENV_PREFIX).separator("__"))
            .build()?;

        config.try_deserialize()
    }
}
