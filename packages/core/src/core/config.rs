// Controller configuration

use serde::{Deserialize, Serialize};

/// What to do when `update`/`detach` is called on a detached handle
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MisusePolicy {
    /// Return `Error::InvalidState` and log a warning
    #[default]
    Error,
    /// Log at debug level and do nothing
    Ignore,
}

/// Configuration for the title controller
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ControllerConfig {
    /// Handling of calls on already-detached handles
    #[serde(default)]
    pub misuse: MisusePolicy,

    /// Whether to install the logging observer on construction
    #[serde(default = "default_true")]
    pub logging: bool,
}

fn default_true() -> bool {
    true
}

impl Default for ControllerConfig {
    fn default() -> Self {
        Self {
            misuse: MisusePolicy::default(),
            logging: true,
        }
    }
}
