//! Title history observer
//!
//! Records every title transition the controller performs into a bounded
//! in-memory buffer that can be dumped as JSON for diagnostics.

use std::cell::RefCell;
use std::collections::VecDeque;

use chrono::{DateTime, Utc};
use doctitle_core::{DetachOutcome, HandleId, TitleObserver};
use log::debug;
use serde::{Deserialize, Serialize};

use crate::config::HistoryConfig;
use crate::error::Result;

/// Kind of title transition
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TitleEventKind {
    /// A handle attached and wrote its title
    Attached,

    /// An attached handle wrote a new title
    Updated,

    /// A handle detached and wrote its snapshot back
    Restored,

    /// A handle detached and kept its title
    Retained,
}

/// One recorded title transition
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct TitleEvent {
    pub timestamp: DateTime<Utc>,

    pub handle_id: HandleId,

    pub kind: TitleEventKind,

    /// Title in effect after the transition
    pub title: String,

    /// Title replaced on attach
    #[serde(skip_serializing_if = "Option::is_none")]
    pub previous: Option<String>,
}

pub struct HistoryObserver {
    config: HistoryConfig,
    entries: RefCell<VecDeque<TitleEvent>>,
}

impl HistoryObserver {
    pub fn new(config: HistoryConfig) -> Self {
        let entries = RefCell::new(VecDeque::with_capacity(config.history_limit.min(64)));
        Self { config, entries }
    }

    fn record(&self, handle_id: HandleId, kind: TitleEventKind, title: &str, previous: Option<&str>) {
        if self.config.history_limit == 0 {
            return;
        }

        let mut entries = self.entries.borrow_mut();
        entries.push_back(TitleEvent {
            timestamp: Utc::now(),
            handle_id,
            kind,
            title: title.to_string(),
            previous: previous.map(str::to_string),
        });

        while entries.len() > self.config.history_limit {
            entries.pop_front();
        }
        debug!("Recorded {:?} for title handle {}", kind, handle_id);
    }

    /// Recorded events, oldest first
    pub fn history(&self) -> Vec<TitleEvent> {
        self.entries.borrow().iter().cloned().collect()
    }

    pub fn last(&self) -> Option<TitleEvent> {
        self.entries.borrow().back().cloned()
    }

    pub fn len(&self) -> usize {
        self.entries.borrow().len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.borrow().is_empty()
    }

    pub fn clear(&self) {
        self.entries.borrow_mut().clear();
    }

    /// Events recorded for one handle, oldest first
    pub fn for_handle(&self, handle_id: HandleId) -> Vec<TitleEvent> {
        self.entries
            .borrow()
            .iter()
            .filter(|event| event.handle_id == handle_id)
            .cloned()
            .collect()
    }

    pub fn to_json(&self) -> Result<String> {
        let entries = self.entries.borrow();
        let json = if self.config.pretty_print {
            serde_json::to_string_pretty(&*entries)?
        } else {
            serde_json::to_string(&*entries)?
        };
        Ok(json)
    }
}

impl TitleObserver for HistoryObserver {
    fn on_attach(&self, handle: HandleId, previous: &str, title: &str) {
        self.record(handle, TitleEventKind::Attached, title, Some(previous));
    }

    fn on_update(&self, handle: HandleId, title: &str) {
        self.record(handle, TitleEventKind::Updated, title, None);
    }

    fn on_detach(&self, handle: HandleId, outcome: &DetachOutcome) {
        let kind = match outcome {
            DetachOutcome::Restored(_) => TitleEventKind::Restored,
            DetachOutcome::Retained(_) => TitleEventKind::Retained,
        };
        self.record(handle, kind, outcome.title(), None);
    }
}
