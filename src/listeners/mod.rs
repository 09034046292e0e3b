//! Listener extension point
//!
//! Plugins can contribute listeners that observe workflow lifecycle events.
//! The manager keys every registration by the listener's qualified name so
//! that registration is idempotent and enumeration order is stable.

pub mod manager;

pub use manager::ListenerManager;

/// A hook-bearing object contributed by a plugin.
///
/// `qualified_name` must be a stable identity (conventionally the type or
/// module path of the listener); it is used for deduplication and for
/// ordering-independent comparison of registered listeners.
pub trait HostListener: Send + Sync {
    /// Stable identity for registration and diagnostics
    fn qualified_name(&self) -> String;

    /// Called when a workflow run starts
    fn on_run_started(&self, _run_id: &str) {}

    /// Called when a workflow run finishes
    fn on_run_finished(&self, _run_id: &str, _success: bool) {}
}
