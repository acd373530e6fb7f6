// Platform-specific sinks
// Title sinks backed by real host windows

#[cfg(feature = "tauri")]
pub mod tauri;
