//! ListenerManager implementation

use crate::listeners::HostListener;
use std::collections::BTreeMap;
use std::sync::Arc;

/// Registry of listeners keyed by qualified name.
///
/// Insertion order is deliberately not exposed; callers that need to compare
/// registered listeners must use `listener_names`, which is always sorted.
#[derive(Default)]
pub struct ListenerManager {
    listeners: BTreeMap<String, Arc<dyn HostListener>>,
}

impl std::fmt::Debug for ListenerManager {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ListenerManager")
            .field("listeners", &self.listeners.keys().collect::<Vec<_>>())
            .finish()
    }
}

impl ListenerManager {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a listener under its qualified name.
    ///
    /// Re-registering the same identity replaces the previous instance and
    /// is logged at debug level; it is not an error.
    pub fn register(&mut self, listener: Arc<dyn HostListener>) {
        let name = listener.qualified_name();
        if self.listeners.insert(name.clone(), listener).is_some() {
            log::debug!("Listener '{}' re-registered, replacing previous instance", name);
        }
    }

    pub fn has_listeners(&self) -> bool {
        !self.listeners.is_empty()
    }

    pub fn len(&self) -> usize {
        self.listeners.len()
    }

    pub fn is_empty(&self) -> bool {
        self.listeners.is_empty()
    }

    /// Qualified names of all registered listeners, sorted.
    pub fn listener_names(&self) -> Vec<String> {
        self.listeners.keys().cloned().collect()
    }

    /// Remove all registrations (test/reset hook).
    pub fn clear(&mut self) {
        self.listeners.clear();
    }

    /// Fan a run-started event out to every listener.
    pub fn notify_run_started(&self, run_id: &str) {
        for listener in self.listeners.values() {
            listener.on_run_started(run_id);
        }
    }

    /// Fan a run-finished event out to every listener.
    pub fn notify_run_finished(&self, run_id: &str, success: bool) {
        for listener in self.listeners.values() {
            listener.on_run_finished(run_id, success);
        }
    }
}
