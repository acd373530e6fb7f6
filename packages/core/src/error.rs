// Error types for doctitle-core

use std::fmt;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::core::handle::HandleId;

/// Result type for title override operations
pub type Result<T> = std::result::Result<T, Error>;

/// Operation attempted on a handle
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Operation {
    Update,
    Detach,
    SetRetain,
}

impl fmt::Display for Operation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Operation::Update => "update",
            Operation::Detach => "detach",
            Operation::SetRetain => "set retention on",
        };
        f.write_str(name)
    }
}

/// Errors that can occur while overriding the title
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum Error {
    /// The handle was already detached; this is a caller defect
    #[error("cannot {operation} title handle {handle}: already detached")]
    InvalidState { handle: HandleId, operation: Operation },
}

impl Error {
    pub fn invalid_state(handle: HandleId, operation: Operation) -> Self {
        Self::InvalidState { handle, operation }
    }
}
