//! UI extension point registries
//!
//! Holds the view and menu entries that survived integration; the web front
//! end consumes these lists and is out of scope here.

pub mod registry;

pub use registry::UiRegistry;
