// UI lifecycle host
// Turns navigation into attach/detach cycles: the active view holds a guard
// for its route's title, and leaving the view drops that guard.

use log::debug;

use crate::core::controller::TitleController;
use crate::core::guard::TitleGuard;
use crate::core::handle::HandleId;
use crate::core::sink::TitleSink;
use crate::host::routes::{same_path, RouteTitles};

struct ActiveView<'a, S: TitleSink + ?Sized> {
    path: String,
    guard: Option<TitleGuard<'a, S>>,
}

pub struct ViewHost<'a, S: TitleSink + ?Sized, R: RouteTitles> {
    controller: &'a TitleController<S>,
    routes: R,
    active: Option<ActiveView<'a, S>>,
}

impl<'a, S: TitleSink + ?Sized, R: RouteTitles> ViewHost<'a, S, R> {
    pub fn new(controller: &'a TitleController<S>, routes: R) -> Self {
        ViewHost {
            controller,
            routes,
            active: None,
        }
    }

    /// Make the view at `path` active.
    ///
    /// The previous view is detached before the new one attaches, so the new
    /// view's snapshot is the title from before the previous view. Views whose
    /// path has no title leave the title alone. Navigating to the active path
    /// is a no-op.
    pub fn navigate(&mut self, path: &str) -> Option<HandleId> {
        if let Some(active) = &self.active {
            if same_path(&active.path, path) {
                return active.guard.as_ref().map(TitleGuard::handle_id);
            }
        }

        self.leave();

        let controller = self.controller;
        let guard = self
            .routes
            .title_for(path)
            .map(|title| controller.scoped(title));
        let id = guard.as_ref().map(TitleGuard::handle_id);
        debug!("Navigated to {} (title handle: {:?})", path, id);

        self.active = Some(ActiveView {
            path: path.to_string(),
            guard,
        });
        id
    }

    /// Change the active view's title without re-resolving its route
    pub fn retitle(&mut self, title: impl Into<String>) -> bool {
        match self.active.as_mut().and_then(|view| view.guard.as_mut()) {
            Some(guard) => {
                guard.set_title(title);
                true
            }
            None => false,
        }
    }

    /// Deactivate the current view, restoring the title it replaced
    pub fn leave(&mut self) {
        if let Some(view) = self.active.take() {
            debug!("Leaving view {}", view.path);
            drop(view.guard);
        }
    }

    pub fn active_path(&self) -> Option<&str> {
        self.active.as_ref().map(|view| view.path.as_str())
    }

    pub fn routes(&self) -> &R {
        &self.routes
    }
}
