// Title sink - the host-owned slot holding the displayed title

use std::cell::{Cell, RefCell};
use std::rc::Rc;

/// A read/write slot for the title shown by the host (browser tab, window
/// chrome, terminal tab).
///
/// Sinks use interior mutability: all access happens on the host's single
/// UI thread, and the controller only ever holds a shared reference.
pub trait TitleSink {
    /// The title currently in effect
    fn title(&self) -> String;

    /// Replace the title currently in effect
    fn set_title(&self, title: &str);
}

impl<S: TitleSink + ?Sized> TitleSink for Rc<S> {
    fn title(&self) -> String {
        (**self).title()
    }

    fn set_title(&self, title: &str) {
        (**self).set_title(title)
    }
}

/// In-process title slot. Also serves as the fake sink in tests.
#[derive(Debug, Default)]
pub struct MemorySink {
    title: RefCell<String>,
    writes: Cell<usize>,
}

impl MemorySink {
    pub fn new(initial: impl Into<String>) -> Self {
        MemorySink {
            title: RefCell::new(initial.into()),
            writes: Cell::new(0),
        }
    }

    /// Number of writes since construction
    pub fn write_count(&self) -> usize {
        self.writes.get()
    }
}

impl TitleSink for MemorySink {
    fn title(&self) -> String {
        self.title.borrow().clone()
    }

    fn set_title(&self, title: &str) {
        let mut current = self.title.borrow_mut();
        current.clear();
        current.push_str(title);
        self.writes.set(self.writes.get() + 1);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_memory_sink_starts_with_initial_title() {
        let sink = MemorySink::new("Home");
        assert_eq!(sink.title(), "Home");
        assert_eq!(sink.write_count(), 0);
    }

    #[test]
    fn test_memory_sink_set_title_counts_writes() {
        let sink = MemorySink::default();
        sink.set_title("a");
        sink.set_title("a");
        assert_eq!(sink.title(), "a");
        assert_eq!(sink.write_count(), 2);
    }

    #[test]
    fn test_rc_sink_delegates() {
        let sink = Rc::new(MemorySink::new("x"));
        let shared: Rc<dyn TitleSink> = sink.clone();
        shared.set_title("y");
        assert_eq!(sink.title(), "y");
    }
}
