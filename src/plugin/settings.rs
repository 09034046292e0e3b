//! Plugin Loading Settings
//!
//! Configuration injected into the plugin manager: where the plugins folder
//! lives and which entry-point groups the resolvers scan.

use crate::plugin::discovery::{
    default_plugins_folder, PLUGIN_ENTRYPOINT_GROUP, PROVIDER_ENTRYPOINT_GROUP,
};
use std::path::PathBuf;

/// Settings for plugin discovery
#[derive(Debug, Clone)]
pub struct PluginSettings {
    /// Folder scanned for plugin manifests; None disables directory loading
    pub plugins_folder: Option<PathBuf>,

    /// Entry-point group for user plugins
    pub entrypoint_group: String,

    /// Entry-point group for provider-package plugins
    pub provider_group: String,
}

impl PluginSettings {
    /// Settings with an explicit plugins folder and default groups.
    pub fn with_folder(folder: impl Into<PathBuf>) -> Self {
        Self {
            plugins_folder: Some(folder.into()),
            ..Default::default()
        }
    }
}

impl Default for PluginSettings {
    fn default() -> Self {
        Self {
            plugins_folder: default_plugins_folder(),
            entrypoint_group: PLUGIN_ENTRYPOINT_GROUP.to_string(),
            provider_group: PROVIDER_ENTRYPOINT_GROUP.to_string(),
        }
    }
}
