//! Public API for the plugin subsystem
//!
//! The only interface other modules and embedding hosts should import from.
//! Everything needed to configure a scan, run it, inspect the registry and
//! integrate capabilities is re-exported here.

// Core plugin management
pub use crate::plugin::manager::PluginManager;
pub use crate::plugin::settings::PluginSettings;

// Error handling
pub use crate::plugin::error::{PluginError, PluginResult};

// Descriptors and capability records
pub use crate::plugin::types::{PluginDescriptor, PluginMacro, ViewEntry};

// Source provenance
pub use crate::plugin::source::{EntryPointSource, PluginSource, PluginsDirectorySource};

// Registry
pub use crate::plugin::registry::PluginRegistry;

// Discovery collaborators
pub use crate::plugin::catalog::{CapabilityCatalog, OnLoadHook};
pub use crate::plugin::discovery::{
    default_plugins_folder, Distribution, DistributionIndex, EntryPointLoader, PluginEntryPoint,
    StaticDistributionIndex, PLUGIN_ENTRYPOINT_GROUP, PROVIDER_ENTRYPOINT_GROUP,
};

// Manifest format for directory plugins
pub use crate::plugin::manifest::PluginManifest;

// Integration passes for hosts that drive them directly
pub use crate::plugin::integration::{
    integrate_admin_plugins, integrate_listener_plugins, integrate_macro_plugins,
    integrate_ui_plugins,
};
