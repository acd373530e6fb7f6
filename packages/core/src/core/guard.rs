// Drop-based title scope

use log::warn;

use crate::core::controller::TitleController;
use crate::core::handle::{HandleId, TitleHandle};
use crate::core::sink::TitleSink;
use crate::error::Result;

/// Owns an attached handle and detaches it when dropped, so the title is
/// restored on every exit path of the owning scope.
#[must_use = "dropping the guard immediately restores the previous title"]
pub struct TitleGuard<'a, S: TitleSink + ?Sized> {
    controller: &'a TitleController<S>,
    handle: TitleHandle,
}

impl<'a, S: TitleSink + ?Sized> TitleGuard<'a, S> {
    pub(crate) fn new(controller: &'a TitleController<S>, handle: TitleHandle) -> Self {
        TitleGuard { controller, handle }
    }

    pub fn handle_id(&self) -> HandleId {
        self.handle.id()
    }

    pub fn title(&self) -> &str {
        self.handle.title()
    }

    pub fn snapshot(&self) -> &str {
        self.handle.snapshot()
    }

    pub fn set_title(&mut self, title: impl Into<String>) {
        self.controller.write_update(&mut self.handle, title.into());
    }

    pub fn set_retain(&mut self, retain_on_detach: bool) {
        self.handle.retain_on_detach = retain_on_detach;
    }

    /// Detach now instead of at drop
    pub fn release(mut self) -> Result<()> {
        self.controller.detach(&mut self.handle)
    }
}

impl<S: TitleSink + ?Sized> Drop for TitleGuard<'_, S> {
    fn drop(&mut self) {
        if !self.handle.is_attached() {
            return;
        }
        if let Err(err) = self.controller.detach(&mut self.handle) {
            warn!("Failed to detach title guard: {}", err);
        }
    }
}
