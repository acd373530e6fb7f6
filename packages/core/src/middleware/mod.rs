// Observer trait and chain
// Observers are notified of every title transition the controller performs

pub mod logging;

use std::rc::Rc;

use crate::core::handle::{DetachOutcome, HandleId};

/// Hooks called by the controller after it writes the sink.
///
/// All methods default to doing nothing.
pub trait TitleObserver {
    /// A handle attached: `previous` is its snapshot, `title` was written
    fn on_attach(&self, _handle: HandleId, _previous: &str, _title: &str) {}

    /// An attached handle wrote a new title
    fn on_update(&self, _handle: HandleId, _title: &str) {}

    /// A handle detached
    fn on_detach(&self, _handle: HandleId, _outcome: &DetachOutcome) {}
}

pub struct ObserverChain {
    pub observers: Vec<Rc<dyn TitleObserver>>,
}

impl ObserverChain {
    pub fn new() -> Self {
        ObserverChain {
            observers: Vec::new(),
        }
    }

    pub fn add(&mut self, observer: Rc<dyn TitleObserver>) {
        self.observers.push(observer);
    }

    pub fn len(&self) -> usize {
        self.observers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.observers.is_empty()
    }

    pub fn trigger_attach(&self, handle: HandleId, previous: &str, title: &str) {
        for observer in &self.observers {
            observer.on_attach(handle, previous, title);
        }
    }

    pub fn trigger_update(&self, handle: HandleId, title: &str) {
        for observer in &self.observers {
            observer.on_update(handle, title);
        }
    }

    pub fn trigger_detach(&self, handle: HandleId, outcome: &DetachOutcome) {
        for observer in &self.observers {
            observer.on_detach(handle, outcome);
        }
    }
}

impl Default for ObserverChain {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;

    #[derive(Default)]
    struct Recorder {
        calls: RefCell<Vec<String>>,
    }

    impl TitleObserver for Recorder {
        fn on_attach(&self, _handle: HandleId, previous: &str, title: &str) {
            self.calls.borrow_mut().push(format!("attach {previous} -> {title}"));
        }

        fn on_update(&self, _handle: HandleId, title: &str) {
            self.calls.borrow_mut().push(format!("update {title}"));
        }

        fn on_detach(&self, _handle: HandleId, outcome: &DetachOutcome) {
            self.calls.borrow_mut().push(format!("detach {}", outcome.title()));
        }
    }

    #[test]
    fn test_observer_chain_new_creates_empty_chain() {
        let chain = ObserverChain::new();
        assert!(chain.is_empty());
    }

    #[test]
    fn test_observer_chain_add_observer() {
        let mut chain = ObserverChain::new();
        chain.add(Rc::new(logging::LoggingObserver));
        assert_eq!(chain.len(), 1);
    }

    #[test]
    fn test_chain_notifies_every_observer_in_order() {
        let first = Rc::new(Recorder::default());
        let second = Rc::new(Recorder::default());
        let mut chain = ObserverChain::new();
        chain.add(first.clone());
        chain.add(second.clone());

        let id = HandleId::new();
        chain.trigger_attach(id, "Home", "Settings");
        chain.trigger_update(id, "Profile");
        chain.trigger_detach(id, &DetachOutcome::Restored("Home".into()));

        let expected = vec![
            "attach Home -> Settings".to_string(),
            "update Profile".to_string(),
            "detach Home".to_string(),
        ];
        assert_eq!(*first.calls.borrow(), expected);
        assert_eq!(*second.calls.borrow(), expected);
    }

    #[test]
    fn test_default_observer_methods_are_noops() {
        struct Silent;
        impl TitleObserver for Silent {}

        let mut chain = ObserverChain::new();
        chain.add(Rc::new(Silent));
        chain.trigger_update(HandleId::new(), "anything");
    }
}
