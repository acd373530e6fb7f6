// Handle types for one attach/detach cycle

use std::fmt;

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Unique identifier of a title handle, used in logs and history
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct HandleId(Uuid);

impl HandleId {
    pub fn new() -> Self {
        HandleId(Uuid::new_v4())
    }

    pub fn as_uuid(&self) -> &Uuid {
        &self.0
    }
}

impl Default for HandleId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for HandleId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// What a detach did to the sink
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", content = "title", rename_all = "snake_case")]
pub enum DetachOutcome {
    /// The snapshot taken at attach time was written back
    Restored(String),
    /// Retention was requested; the sink was left as is, holding this title
    Retained(String),
}

impl DetachOutcome {
    /// The title left in the sink after detaching
    pub fn title(&self) -> &str {
        match self {
            DetachOutcome::Restored(title) | DetachOutcome::Retained(title) => title,
        }
    }
}

/// One scoped override of the title.
///
/// Returned by [`TitleController::attach`](crate::TitleController::attach)
/// and passed back to `update`/`detach`. The snapshot is captured once at
/// attach time and never changes afterwards.
#[derive(Debug)]
pub struct TitleHandle {
    pub(crate) id: HandleId,
    pub(crate) title: String,
    pub(crate) retain_on_detach: bool,
    pub(crate) snapshot: String,
    pub(crate) attached: bool,
}

impl TitleHandle {
    pub(crate) fn new(title: String, snapshot: String, retain_on_detach: bool) -> Self {
        TitleHandle {
            id: HandleId::new(),
            title,
            retain_on_detach,
            snapshot,
            attached: true,
        }
    }

    pub fn id(&self) -> HandleId {
        self.id
    }

    /// The title this handle last wrote
    pub fn title(&self) -> &str {
        &self.title
    }

    /// The title in effect immediately before this handle attached
    pub fn snapshot(&self) -> &str {
        &self.snapshot
    }

    pub fn retains_on_detach(&self) -> bool {
        self.retain_on_detach
    }

    pub fn is_attached(&self) -> bool {
        self.attached
    }
}
