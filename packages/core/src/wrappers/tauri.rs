// Tauri window sink
// Drives a Tauri webview window's title through the controller

use log::warn;
use tauri::{Runtime, WebviewWindow};

use crate::core::sink::TitleSink;

pub struct WindowTitleSink<R: Runtime> {
    window: WebviewWindow<R>,
}

impl<R: Runtime> WindowTitleSink<R> {
    pub fn new(window: WebviewWindow<R>) -> Self {
        WindowTitleSink { window }
    }

    pub fn window(&self) -> &WebviewWindow<R> {
        &self.window
    }
}

// The title is cosmetic; window errors are logged rather than surfaced.
impl<R: Runtime> TitleSink for WindowTitleSink<R> {
    fn title(&self) -> String {
        match self.window.title() {
            Ok(title) => title,
            Err(err) => {
                warn!("Failed to read title of window {}: {}", self.window.label(), err);
                String::new()
            }
        }
    }

    fn set_title(&self, title: &str) {
        if let Err(err) = self.window.set_title(title) {
            warn!("Failed to set title of window {}: {}", self.window.label(), err);
        }
    }
}
