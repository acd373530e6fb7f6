//! doctitle middleware
//!
//! Wires a `doctitle-core` title controller to its environment: JSON/env
//! configuration, `env_logger` setup, crash-reporting settings and a
//! bounded history of title transitions.

mod config;
mod error;
mod history;
mod logging;

use std::rc::Rc;

use doctitle_core::{TitleController, TitleSink};
use log::info;

pub use config::{
    CrashReporting, DoctitleConfig, HistoryConfig, RUNTIME_ENV_VAR, SENTRY_DSN_VAR, SENTRY_ENABLED_VAR,
};
pub use error::{Error, Result};
pub use history::{HistoryObserver, TitleEvent, TitleEventKind};
pub use logging::{init_logging, LoggingConfig};

/// A configured title controller together with its history recorder
pub struct DoctitleMiddleware<S: TitleSink + ?Sized> {
    /// Controller over the host's title sink
    controller: TitleController<S>,

    /// History recorder, present when history is enabled
    history: Option<Rc<HistoryObserver>>,

    /// Configuration
    config: DoctitleConfig,
}

impl<S: TitleSink + ?Sized> DoctitleMiddleware<S> {
    /// Create a controller over `sink` with the specified configuration
    pub fn new(sink: Rc<S>, config: DoctitleConfig) -> Self {
        let mut controller = TitleController::with_config(sink, config.controller.clone());

        // Add history recording if enabled
        let history = if config.history.enabled {
            let history = Rc::new(HistoryObserver::new(config.history.clone()));
            controller.add_observer(history.clone());
            Some(history)
        } else {
            None
        };

        if config.crash_reporting.is_active() {
            info!(
                "Crash reporting active (environment: {})",
                config.crash_reporting.environment.as_deref().unwrap_or("unspecified")
            );
        }

        Self {
            controller,
            history,
            config,
        }
    }

    pub fn controller(&self) -> &TitleController<S> {
        &self.controller
    }

    pub fn history(&self) -> Option<&HistoryObserver> {
        self.history.as_deref()
    }

    pub fn config(&self) -> &DoctitleConfig {
        &self.config
    }

    /// Whether the crash-reporting collaborator should wrap the view tree
    pub fn crash_reporting_enabled(&self) -> bool {
        self.config.crash_reporting.is_active()
    }
}

/// Start the doctitle middleware over `sink` with the specified configuration
pub fn init_middleware<S: TitleSink + ?Sized>(sink: Rc<S>, config: DoctitleConfig) -> DoctitleMiddleware<S> {
    DoctitleMiddleware::new(sink, config)
}
