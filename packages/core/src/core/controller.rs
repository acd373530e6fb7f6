// Title override controller
// Save/restore discipline over a single title slot. Each handle captures
// the title in effect when it attaches and writes that snapshot back when
// it detaches (unless retention was requested). There is no stack: nested
// handles unwind correctly only when detached in LIFO order, and an
// out-of-order detach simply writes that handle's own snapshot.

use std::rc::Rc;

use log::{debug, warn};

use crate::core::config::{ControllerConfig, MisusePolicy};
use crate::core::guard::TitleGuard;
use crate::core::handle::{DetachOutcome, TitleHandle};
use crate::core::sink::TitleSink;
use crate::error::{Error, Operation, Result};
use crate::middleware::logging::LoggingObserver;
use crate::middleware::{ObserverChain, TitleObserver};

/// Scoped, restorable mutation of the host title
pub struct TitleController<S: TitleSink + ?Sized> {
    /// Host-owned title slot
    sink: Rc<S>,

    /// Observers notified after each sink write
    observers: ObserverChain,

    /// Configuration
    config: ControllerConfig,
}

impl<S: TitleSink + ?Sized> TitleController<S> {
    /// Create a controller with the default configuration
    pub fn new(sink: Rc<S>) -> Self {
        Self::with_config(sink, ControllerConfig::default())
    }

    /// Create a controller with the specified configuration
    pub fn with_config(sink: Rc<S>, config: ControllerConfig) -> Self {
        let mut controller = Self {
            sink,
            observers: ObserverChain::new(),
            config,
        };

        if controller.config.logging {
            controller.add_observer(Rc::new(LoggingObserver));
        }

        controller
    }

    /// Add an observer to the notification chain
    pub fn add_observer(&mut self, observer: Rc<dyn TitleObserver>) -> &mut Self {
        self.observers.add(observer);
        self
    }

    pub fn config(&self) -> &ControllerConfig {
        &self.config
    }

    /// The title currently in effect
    pub fn current(&self) -> String {
        self.sink.title()
    }

    /// Snapshot the current title and write `title` in its place
    pub fn attach(&self, title: impl Into<String>, retain_on_detach: bool) -> TitleHandle {
        let title = title.into();
        let snapshot = self.sink.title();
        self.sink.set_title(&title);

        let handle = TitleHandle::new(title, snapshot, retain_on_detach);
        debug!(
            "Attached title handle {} (retain_on_detach: {})",
            handle.id, handle.retain_on_detach
        );
        self.observers
            .trigger_attach(handle.id, &handle.snapshot, &handle.title);
        handle
    }

    /// Write a new title for an attached handle. The snapshot is untouched.
    ///
    /// Updating to the title the handle already holds writes nothing.
    pub fn update(&self, handle: &mut TitleHandle, title: impl Into<String>) -> Result<()> {
        if !handle.attached {
            return self.misuse(handle, Operation::Update);
        }
        self.write_update(handle, title.into());
        Ok(())
    }

    /// Change whether detaching restores the snapshot
    pub fn set_retain(&self, handle: &mut TitleHandle, retain_on_detach: bool) -> Result<()> {
        if !handle.attached {
            return self.misuse(handle, Operation::SetRetain);
        }
        handle.retain_on_detach = retain_on_detach;
        Ok(())
    }

    /// End the handle's scope, restoring its snapshot unless it retains
    pub fn detach(&self, handle: &mut TitleHandle) -> Result<()> {
        if !handle.attached {
            return self.misuse(handle, Operation::Detach);
        }
        handle.attached = false;

        let outcome = if handle.retain_on_detach {
            DetachOutcome::Retained(self.sink.title())
        } else {
            self.sink.set_title(&handle.snapshot);
            DetachOutcome::Restored(handle.snapshot.clone())
        };

        debug!("Detached title handle {}", handle.id);
        self.observers.trigger_detach(handle.id, &outcome);
        Ok(())
    }

    /// Attach a handle owned by a guard that detaches when dropped
    pub fn scoped(&self, title: impl Into<String>) -> TitleGuard<'_, S> {
        TitleGuard::new(self, self.attach(title, false))
    }

    /// Like [`scoped`](Self::scoped), but the title is kept after the guard drops
    pub fn scoped_retained(&self, title: impl Into<String>) -> TitleGuard<'_, S> {
        TitleGuard::new(self, self.attach(title, true))
    }

    /// Write path shared with guards, whose handles are always attached
    pub(crate) fn write_update(&self, handle: &mut TitleHandle, title: String) {
        if handle.title == title {
            debug!("Title handle {} already at {:?}, skipping write", handle.id, title);
            return;
        }
        self.sink.set_title(&title);
        handle.title = title;
        self.observers.trigger_update(handle.id, &handle.title);
    }

    fn misuse(&self, handle: &TitleHandle, operation: Operation) -> Result<()> {
        match self.config.misuse {
            MisusePolicy::Error => {
                warn!("Cannot {} title handle {}: already detached", operation, handle.id);
                Err(Error::invalid_state(handle.id, operation))
            }
            MisusePolicy::Ignore => {
                debug!("Ignoring {} on detached title handle {}", operation, handle.id);
                Ok(())
            }
        }
    }
}
