//! Logger setup
//!
//! Installs `env_logger` as the `log` backend. `RUST_LOG` still wins over
//! the configured filter when it is set.

use serde::{Deserialize, Serialize};

/// Configuration for the process logger
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// Filter used when `RUST_LOG` is unset
    #[serde(default = "default_filter")]
    pub filter: String,

    /// Log at debug level regardless of `filter`
    #[serde(default = "default_false")]
    pub verbose: bool,
}

fn default_filter() -> String {
    "info".to_string()
}

fn default_false() -> bool {
    false
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            filter: default_filter(),
            verbose: false,
        }
    }
}

impl LoggingConfig {
    /// The filter handed to `env_logger` as its default
    pub fn effective_filter(&self) -> &str {
        if self.verbose {
            "debug"
        } else {
            &self.filter
        }
    }
}

/// Install the logger. Returns false if a logger was already installed.
pub fn init_logging(config: &LoggingConfig) -> bool {
    let env = env_logger::Env::default().default_filter_or(config.effective_filter());
    let mut builder = env_logger::Builder::from_env(env);
    builder.format_timestamp_millis();

    match builder.try_init() {
        Ok(()) => true,
        Err(err) => {
            log::debug!("Logger already initialised: {}", err);
            false
        }
    }
}
