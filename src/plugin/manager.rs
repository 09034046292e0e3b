//! Plugin Manager
//!
//! Central coordinator for the scan-then-integrate lifecycle. Owns the
//! registry, the capability catalog and the distribution index, and runs the
//! source resolvers in a fixed order: plugins folder, then user entry
//! points, then provider packages.

use crate::listeners::ListenerManager;
use crate::plugin::catalog::CapabilityCatalog;
use crate::plugin::discovery::{DirectoryResolver, DistributionIndex, EntryPointResolver};
use crate::plugin::integration;
use crate::plugin::registry::PluginRegistry;
use crate::plugin::settings::PluginSettings;
use crate::templating::MacroRegistry;
use crate::ui::UiRegistry;
use std::collections::BTreeMap;
use std::sync::Arc;

/// Central plugin manager owning the registry and discovery configuration
pub struct PluginManager {
    settings: PluginSettings,
    catalog: CapabilityCatalog,
    index: Arc<dyn DistributionIndex>,
    registry: PluginRegistry,
    loaded: bool,
}

impl std::fmt::Debug for PluginManager {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PluginManager")
            .field("settings", &self.settings)
            .field("registry", &self.registry)
            .field("loaded", &self.loaded)
            .finish()
    }
}

impl PluginManager {
    pub fn new(
        settings: PluginSettings,
        catalog: CapabilityCatalog,
        index: Arc<dyn DistributionIndex>,
    ) -> Self {
        Self {
            settings,
            catalog,
            index,
            registry: PluginRegistry::new(),
            loaded: false,
        }
    }

    /// Run all source resolvers exactly once per manager lifetime.
    ///
    /// Repeated calls are no-ops; use `reset` to force a fresh scan. The
    /// registry afterwards contains one descriptor per unique plugin found,
    /// with failures in the import-error map instead of the registry.
    pub fn ensure_plugins_loaded(&mut self) {
        if self.loaded {
            log::debug!("Plugins already loaded, skipping scan");
            return;
        }

        self.load_directory_plugins();
        self.load_entrypoint_plugins();
        self.load_provider_plugins();
        self.loaded = true;
    }

    /// Scan the configured plugins folder for manifest files.
    ///
    /// Safe to call repeatedly: already-seen manifests are skipped.
    pub fn load_directory_plugins(&mut self) {
        if let Some(folder) = &self.settings.plugins_folder {
            DirectoryResolver::new(folder, &self.catalog).load(&mut self.registry);
        }
    }

    /// Load plugins from the user entry-point group.
    ///
    /// Not idempotent on its own: a second direct call within one manager
    /// lifetime appends again. `ensure_plugins_loaded` is the idempotent
    /// entry point.
    pub fn load_entrypoint_plugins(&mut self) {
        let index = Arc::clone(&self.index);
        EntryPointResolver::user_plugins(index.as_ref())
            .with_group(&self.settings.entrypoint_group)
            .load(&mut self.registry);
    }

    /// Load plugins declared by provider packages, skipping modules already
    /// loaded from the user entry-point group.
    pub fn load_provider_plugins(&mut self) {
        let index = Arc::clone(&self.index);
        EntryPointResolver::provider_plugins(index.as_ref())
            .with_group(&self.settings.provider_group)
            .load(&mut self.registry);
    }

    pub fn registry(&self) -> &PluginRegistry {
        &self.registry
    }

    pub fn registry_mut(&mut self) -> &mut PluginRegistry {
        &mut self.registry
    }

    /// Import failures recorded during the last scan
    pub fn import_errors(&self) -> &BTreeMap<String, String> {
        self.registry.import_errors()
    }

    /// Wire plugin macros into the macro symbol table.
    pub fn integrate_macros(&self, macros: &mut MacroRegistry) {
        integration::integrate_macro_plugins(&self.registry, macros);
    }

    /// Register plugin listeners with the listener manager.
    pub fn integrate_listeners(&self, manager: &mut ListenerManager) {
        integration::integrate_listener_plugins(&self.registry, manager);
    }

    /// Integrate builder-style views and emit compatibility warnings.
    pub fn integrate_admin_ui(&self, ui: &mut UiRegistry) {
        integration::integrate_admin_plugins(&self.registry, ui);
    }

    /// Integrate route-claiming views with first-wins conflict resolution.
    pub fn integrate_ui_routes(&mut self, ui: &mut UiRegistry) {
        integration::integrate_ui_plugins(&mut self.registry, ui);
    }

    /// Explicit reset hook: clears the registry and allows a fresh scan.
    pub fn reset(&mut self) {
        self.registry.clear();
        self.loaded = false;
    }
}
