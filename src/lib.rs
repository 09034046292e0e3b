pub mod app;
pub mod core;
pub mod listeners;
pub mod plugin;
pub mod templating;
pub mod ui;

include!(concat!(env!("OUT_DIR"), "/version.rs"));

/// Parse the API version string from the build script into u32
pub fn get_plugin_api_version() -> u32 {
    PLUGIN_API_VERSION.parse().unwrap_or(20260830)
}
