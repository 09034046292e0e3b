//! Test modules for the plugin subsystem
//!
//! Organizes the loading and integration suites plus shared helpers
//! (capture logger, descriptor builders, in-memory distribution index).

mod integration;
mod utils;
