// Main entry point for doctitle-core
// Scoped overrides of the host title, plus the thin host collaborators
// (routing, platform shim) that drive them.

pub mod core;
pub mod error;
pub mod host;
pub mod middleware;
pub mod platform;

#[cfg(feature = "tauri")]
pub mod wrappers;

// Re-export core types for convenience
pub use crate::core::config::{ControllerConfig, MisusePolicy};
pub use crate::core::controller::TitleController;
pub use crate::core::guard::TitleGuard;
pub use crate::core::handle::{DetachOutcome, HandleId, TitleHandle};
pub use crate::core::sink::{MemorySink, TitleSink};
pub use error::{Error, Operation, Result};
pub use host::routes::{Route, RouteTable, RouteTitles};
pub use host::view::ViewHost;
pub use middleware::{ObserverChain, TitleObserver};
