//! Configuration for the doctitle middleware
//!
//! Loaded from JSON, then optionally overlaid with environment variables.

use std::fs;
use std::path::Path;

use doctitle_core::ControllerConfig;
use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};
use crate::logging::LoggingConfig;

/// Crash-reporting DSN
pub const SENTRY_DSN_VAR: &str = "DOCTITLE_SENTRY_DSN";
/// Crash-reporting switch; any non-empty value enables it
pub const SENTRY_ENABLED_VAR: &str = "DOCTITLE_SENTRY_ENABLED";
/// Runtime environment reported alongside crashes
pub const RUNTIME_ENV_VAR: &str = "DOCTITLE_RUNTIME_ENV";

/// Crash-reporting collaborator settings
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CrashReporting {
    #[serde(default)]
    pub dsn: Option<String>,

    #[serde(default)]
    pub enabled: bool,

    #[serde(default)]
    pub environment: Option<String>,
}

impl CrashReporting {
    /// Reporting only starts with both a DSN and the enabled switch
    pub fn is_active(&self) -> bool {
        self.enabled && self.dsn.as_deref().is_some_and(|dsn| !dsn.is_empty())
    }
}

/// Configuration for title history recording
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct HistoryConfig {
    /// Whether history recording is enabled
    #[serde(default = "default_true")]
    pub enabled: bool,

    /// Maximum number of events to keep in memory
    #[serde(default = "default_history_limit")]
    pub history_limit: usize,

    /// Whether to pretty-print history JSON
    #[serde(default = "default_false")]
    pub pretty_print: bool,
}

fn default_true() -> bool {
    true
}

fn default_false() -> bool {
    false
}

fn default_history_limit() -> usize {
    1000
}

impl Default for HistoryConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            history_limit: default_history_limit(),
            pretty_print: false,
        }
    }
}

/// Top-level configuration
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DoctitleConfig {
    #[serde(default)]
    pub controller: ControllerConfig,

    #[serde(default)]
    pub history: HistoryConfig,

    #[serde(default)]
    pub logging: LoggingConfig,

    #[serde(default)]
    pub crash_reporting: CrashReporting,
}

impl DoctitleConfig {
    pub fn from_json_str(json: &str) -> Result<Self> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    pub fn from_json_file(path: impl AsRef<Path>) -> Result<Self> {
        let text = fs::read_to_string(path)?;
        Self::from_json_str(&text)
    }

    /// Overlay crash-reporting settings from the process environment
    pub fn with_env_overrides(self) -> Self {
        self.apply_env(|key| std::env::var(key).ok())
    }

    /// Overlay crash-reporting settings from `lookup`
    pub fn apply_env<F>(mut self, lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(dsn) = lookup(SENTRY_DSN_VAR) {
            self.crash_reporting.dsn = Some(dsn);
        }
        if let Some(enabled) = lookup(SENTRY_ENABLED_VAR) {
            self.crash_reporting.enabled = !enabled.is_empty();
        }
        if let Some(environment) = lookup(RUNTIME_ENV_VAR) {
            self.crash_reporting.environment = Some(environment);
        }
        self
    }

    pub fn validate(&self) -> Result<()> {
        if self.history.enabled && self.history.history_limit == 0 {
            return Err(Error::Config(
                "history.history_limit must be greater than zero when history is enabled".to_string(),
            ));
        }
        Ok(())
    }

    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use doctitle_core::MisusePolicy;
    use std::collections::HashMap;

    fn env(pairs: &[(&str, &str)]) -> HashMap<String, String> {
        pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect()
    }

    #[test]
    fn test_empty_json_uses_defaults() {
        let config = DoctitleConfig::from_json_str("{}").unwrap();
        assert_eq!(config, DoctitleConfig::default());
        assert!(config.history.enabled);
        assert_eq!(config.history.history_limit, 1000);
        assert!(!config.crash_reporting.is_active());
    }

    #[test]
    fn test_nested_sections_parse() {
        let config = DoctitleConfig::from_json_str(
            r#"{
                "controller": { "misuse": "ignore" },
                "history": { "history_limit": 10, "pretty_print": true },
                "crash_reporting": { "dsn": "https://key@example.invalid/1", "enabled": true }
            }"#,
        )
        .unwrap();
        assert_eq!(config.controller.misuse, MisusePolicy::Ignore);
        assert!(config.controller.logging);
        assert_eq!(config.history.history_limit, 10);
        assert!(config.history.pretty_print);
        assert!(config.crash_reporting.is_active());
    }

    #[test]
    fn test_zero_history_limit_is_rejected() {
        let err = DoctitleConfig::from_json_str(r#"{ "history": { "history_limit": 0 } }"#)
            .unwrap_err();
        assert!(matches!(err, Error::Config(_)));
    }

    #[test]
    fn test_zero_history_limit_allowed_when_disabled() {
        let config =
            DoctitleConfig::from_json_str(r#"{ "history": { "enabled": false, "history_limit": 0 } }"#)
                .unwrap();
        assert!(!config.history.enabled);
    }

    #[test]
    fn test_malformed_json_is_json_error() {
        let err = DoctitleConfig::from_json_str("{ not json").unwrap_err();
        assert!(matches!(err, Error::Json(_)));
    }

    #[test]
    fn test_crash_reporting_needs_dsn_and_switch() {
        let dsn_only = CrashReporting {
            dsn: Some("https://key@example.invalid/1".to_string()),
            ..CrashReporting::default()
        };
        assert!(!dsn_only.is_active());

        let switch_only = CrashReporting {
            enabled: true,
            ..CrashReporting::default()
        };
        assert!(!switch_only.is_active());

        let empty_dsn = CrashReporting {
            dsn: Some(String::new()),
            enabled: true,
            environment: None,
        };
        assert!(!empty_dsn.is_active());
    }

    #[test]
    fn test_env_overlay() {
        let vars = env(&[
            (SENTRY_DSN_VAR, "https://key@example.invalid/1"),
            (SENTRY_ENABLED_VAR, "1"),
            (RUNTIME_ENV_VAR, "staging"),
        ]);
        let config = DoctitleConfig::default().apply_env(|key| vars.get(key).cloned());
        assert!(config.crash_reporting.is_active());
        assert_eq!(config.crash_reporting.environment.as_deref(), Some("staging"));
    }

    #[test]
    fn test_empty_enabled_var_disables() {
        let vars = env(&[(SENTRY_ENABLED_VAR, "")]);
        let mut config = DoctitleConfig::default();
        config.crash_reporting.enabled = true;
        let config = config.apply_env(|key| vars.get(key).cloned());
        assert!(!config.crash_reporting.enabled);
    }

    #[test]
    fn test_missing_vars_leave_config_alone() {
        let config = DoctitleConfig::default().apply_env(|_| None);
        assert_eq!(config, DoctitleConfig::default());
    }

    #[test]
    fn test_config_round_trips_through_json() {
        let config = DoctitleConfig::default();
        let json = config.to_json().unwrap();
        assert_eq!(DoctitleConfig::from_json_str(&json).unwrap(), config);
    }
}
