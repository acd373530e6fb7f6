// Logging observer
// Reports title transitions through the `log` facade

use log::info;

use super::TitleObserver;
use crate::core::handle::{DetachOutcome, HandleId};

pub struct LoggingObserver;

impl TitleObserver for LoggingObserver {
    fn on_attach(&self, handle: HandleId, previous: &str, title: &str) {
        info!("[doctitle] {}: attached {:?} (was {:?})", handle, title, previous);
    }

    fn on_update(&self, handle: HandleId, title: &str) {
        info!("[doctitle] {}: updated to {:?}", handle, title);
    }

    fn on_detach(&self, handle: HandleId, outcome: &DetachOutcome) {
        match outcome {
            DetachOutcome::Restored(title) => {
                info!("[doctitle] {}: detached, restored {:?}", handle, title)
            }
            DetachOutcome::Retained(title) => {
                info!("[doctitle] {}: detached, retained {:?}", handle, title)
            }
        }
    }
}
