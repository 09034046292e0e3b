//! Plugin Subsystem
//!
//! Discovery and registration engine for host plugins: source resolvers
//! populate the registry, capability integrators wire the result into the
//! host's extension points, and failures stay isolated per plugin.

// Internal modules - all access should go through the api module
pub(crate) mod catalog;
pub(crate) mod discovery;
pub(crate) mod error;
pub(crate) mod integration;
pub(crate) mod manager;
pub(crate) mod manifest;
pub(crate) mod registry;
pub(crate) mod settings;
pub(crate) mod source;
pub(crate) mod types;

// Public API module - the only public interface for the plugin subsystem
pub mod api;

#[cfg(test)]
mod tests;
