//! Plugin manifest files
//!
//! Directory plugins are declared by TOML manifests under the configured
//! plugins folder. View entries are plain data; macros, listeners and the
//! optional on_load hook are referenced by capability symbol and resolved
//! against the host's `CapabilityCatalog` at load time.
//!
//! ```toml
//! name = "metrics"
//! macros = ["metrics.flatten"]
//! listeners = ["metrics.RunListener"]
//!
//! [[external_views]]
//! name = "Metrics Dashboard"
//! url_route = "/metrics"
//! ```

use crate::plugin::error::{PluginError, PluginResult};
use crate::plugin::types::ViewEntry;
use serde::Deserialize;
use std::path::Path;

/// Parsed plugin manifest
#[derive(Debug, Clone, Default, Deserialize)]
pub struct PluginManifest {
    pub name: String,

    /// Capability symbols resolved to macro callables
    #[serde(default)]
    pub macros: Vec<String>,

    /// Capability symbols resolved to listener instances
    #[serde(default)]
    pub listeners: Vec<String>,

    /// Capability symbol of a hook to run after the descriptor is built
    #[serde(default)]
    pub on_load: Option<String>,

    #[serde(default)]
    pub external_views: Vec<ViewEntry>,
    #[serde(default)]
    pub react_apps: Vec<ViewEntry>,
    #[serde(default)]
    pub admin_views: Vec<ViewEntry>,
    #[serde(default)]
    pub menu_links: Vec<ViewEntry>,
    #[serde(default)]
    pub appbuilder_views: Vec<ViewEntry>,
    #[serde(default)]
    pub appbuilder_menu_items: Vec<ViewEntry>,
}

impl PluginManifest {
    /// Read and parse a manifest file, enforcing descriptor invariants.
    pub fn from_path(path: &Path) -> PluginResult<Self> {
        let content = std::fs::read_to_string(path).map_err(|source| PluginError::ManifestRead {
            path: path.to_path_buf(),
            source,
        })?;
        let manifest: PluginManifest =
            toml::from_str(&content).map_err(|source| PluginError::ManifestParse {
                path: path.to_path_buf(),
                source,
            })?;

        if manifest.name.trim().is_empty() {
            return Err(PluginError::InvalidManifest {
                path: path.to_path_buf(),
                reason: "plugin name must be non-empty".to_string(),
            });
        }

        Ok(manifest)
    }
}
