//! Plugin Source Resolvers
//!
//! Three origins feed the registry: manifest files under the configured
//! plugins folder, entry points declared by installed distributions, and the
//! provider-package entry-point namespace. Each resolver isolates per-plugin
//! failures: a broken plugin is logged at ERROR with its full cause chain,
//! recorded in the registry's import-error map, and never aborts the scan.

use crate::core::error_handling::error_chain;
use crate::plugin::catalog::CapabilityCatalog;
use crate::plugin::error::{PluginError, PluginResult};
use crate::plugin::manifest::PluginManifest;
use crate::plugin::registry::PluginRegistry;
use crate::plugin::source::{EntryPointSource, PluginSource, PluginsDirectorySource};
use crate::plugin::types::{PluginDescriptor, PluginMacro};
use std::path::{Path, PathBuf};
use std::sync::Arc;

/// Entry-point group for user plugins
pub const PLUGIN_ENTRYPOINT_GROUP: &str = "taskforge.plugins";

/// Entry-point group for provider-package plugins
pub const PROVIDER_ENTRYPOINT_GROUP: &str = "taskforge.provider_plugins";

/// Loader invoked to produce the descriptor an entry point refers to
pub type EntryPointLoader = Arc<dyn Fn() -> PluginResult<PluginDescriptor> + Send + Sync>;

/// One entry point declared by an installed distribution
#[derive(Clone)]
pub struct PluginEntryPoint {
    pub name: String,
    pub group: String,
    pub module: String,
    loader: EntryPointLoader,
}

impl PluginEntryPoint {
    pub fn new(
        name: impl Into<String>,
        group: impl Into<String>,
        module: impl Into<String>,
        loader: EntryPointLoader,
    ) -> Self {
        Self {
            name: name.into(),
            group: group.into(),
            module: module.into(),
            loader,
        }
    }

    /// Load the descriptor this entry point refers to.
    pub fn load(&self) -> PluginResult<PluginDescriptor> {
        (self.loader)()
    }
}

impl std::fmt::Debug for PluginEntryPoint {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PluginEntryPoint")
            .field("name", &self.name)
            .field("group", &self.group)
            .field("module", &self.module)
            .finish()
    }
}

impl std::fmt::Display for PluginEntryPoint {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} = {}", self.name, self.module)
    }
}

/// An installed distribution as reported by the package metadata index
#[derive(Debug, Clone)]
pub struct Distribution {
    pub name: String,
    pub version: String,
    pub entry_points: Vec<PluginEntryPoint>,
}

impl Distribution {
    pub fn new(
        name: impl Into<String>,
        version: impl Into<String>,
        entry_points: Vec<PluginEntryPoint>,
    ) -> Self {
        Self {
            name: name.into(),
            version: version.into(),
            entry_points,
        }
    }
}

/// External package-metadata collaborator enumerating installed distributions
pub trait DistributionIndex: Send + Sync {
    fn distributions(&self) -> Vec<Distribution>;
}

/// In-memory distribution index for embedding hosts and tests
#[derive(Debug, Clone, Default)]
pub struct StaticDistributionIndex {
    distributions: Vec<Distribution>,
}

impl StaticDistributionIndex {
    pub fn new(distributions: Vec<Distribution>) -> Self {
        Self { distributions }
    }
}

impl DistributionIndex for StaticDistributionIndex {
    fn distributions(&self) -> Vec<Distribution> {
        self.distributions.clone()
    }
}

/// Resolver for manifest files under the configured plugins folder
pub struct DirectoryResolver<'a> {
    folder: &'a Path,
    catalog: &'a CapabilityCatalog,
}

impl<'a> DirectoryResolver<'a> {
    pub fn new(folder: &'a Path, catalog: &'a CapabilityCatalog) -> Self {
        Self { folder, catalog }
    }

    /// Recursively scan the plugins folder and register every unique plugin.
    ///
    /// Files that fail to load are recorded in the import-error map and
    /// logged; they never poison the rest of the scan. Rescanning the same
    /// folder is a no-op for already-seen manifests.
    pub fn load(&self, registry: &mut PluginRegistry) {
        for path in self.manifest_paths() {
            let identity = path.to_string_lossy().to_string();
            if registry.is_seen(&identity) {
                continue;
            }
            match self.load_manifest(&path) {
                Ok(descriptor) => {
                    log::debug!("Loaded plugin '{}' from {}", descriptor.name, path.display());
                    registry.register(descriptor, identity);
                }
                Err(err) => {
                    log::error!(
                        "Failed to import plugin {}\n{}",
                        path.display(),
                        error_chain(&err)
                    );
                    registry.record_import_error(identity, err.to_string());
                }
            }
        }
    }

    /// Manifest files under the folder, sorted for deterministic load order.
    fn manifest_paths(&self) -> Vec<PathBuf> {
        let pattern = self.folder.join("**").join("*.toml");
        let mut paths: Vec<PathBuf> = match glob::glob(&pattern.to_string_lossy()) {
            Ok(entries) => entries.filter_map(Result::ok).collect(),
            Err(err) => {
                log::error!("Invalid plugins folder pattern {}: {}", pattern.display(), err);
                Vec::new()
            }
        };
        paths.sort();
        paths
    }

    fn load_manifest(&self, path: &Path) -> PluginResult<PluginDescriptor> {
        let manifest = PluginManifest::from_path(path)?;
        let descriptor = self.resolve_manifest(manifest, path)?;
        Ok(descriptor)
    }

    /// Turn a parsed manifest into a descriptor by resolving its capability
    /// symbols against the catalog, then run its on_load hook if declared.
    fn resolve_manifest(
        &self,
        manifest: PluginManifest,
        path: &Path,
    ) -> PluginResult<PluginDescriptor> {
        let mut descriptor = PluginDescriptor::new(&manifest.name);

        for symbol in &manifest.macros {
            let func = self.catalog.macro_fn(symbol).ok_or_else(|| {
                PluginError::UnknownCapability {
                    kind: "macro",
                    symbol: symbol.clone(),
                }
            })?;
            descriptor
                .macros
                .push(PluginMacro::new(symbol_basename(symbol), func.clone()));
        }

        for symbol in &manifest.listeners {
            let listener = self.catalog.listener(symbol).ok_or_else(|| {
                PluginError::UnknownCapability {
                    kind: "listener",
                    symbol: symbol.clone(),
                }
            })?;
            descriptor.listeners.push(Arc::clone(listener));
        }

        descriptor.external_views = manifest.external_views;
        descriptor.react_apps = manifest.react_apps;
        descriptor.admin_views = manifest.admin_views;
        descriptor.menu_links = manifest.menu_links;
        descriptor.appbuilder_views = manifest.appbuilder_views;
        descriptor.appbuilder_menu_items = manifest.appbuilder_menu_items;
        descriptor.source = Some(PluginSource::Directory(PluginsDirectorySource::new(
            path,
            self.folder,
        )));

        if let Some(symbol) = &manifest.on_load {
            let hook = self.catalog.on_load_hook(symbol).ok_or_else(|| {
                PluginError::UnknownCapability {
                    kind: "on_load",
                    symbol: symbol.clone(),
                }
            })?;
            hook(&descriptor).map_err(|err| PluginError::OnLoad {
                plugin: descriptor.name.clone(),
                message: err.to_string(),
            })?;
        }

        Ok(descriptor)
    }
}

/// Resolver for entry points in a fixed group of the distribution index
pub struct EntryPointResolver<'a> {
    index: &'a dyn DistributionIndex,
    group: &'a str,
    skip_seen: bool,
}

impl<'a> EntryPointResolver<'a> {
    /// Resolver for the user plugin group.
    ///
    /// Does not consult the seen set before loading: calling it twice within
    /// one registry lifetime appends again. Callers wanting idempotence go
    /// through `PluginManager::ensure_plugins_loaded`.
    pub fn user_plugins(index: &'a dyn DistributionIndex) -> Self {
        Self {
            index,
            group: PLUGIN_ENTRYPOINT_GROUP,
            skip_seen: false,
        }
    }

    /// Resolver for the provider-package group.
    ///
    /// Skips modules already loaded from the user entry-point group, so the
    /// two namespaces compose without double imports.
    pub fn provider_plugins(index: &'a dyn DistributionIndex) -> Self {
        Self {
            index,
            group: PROVIDER_ENTRYPOINT_GROUP,
            skip_seen: true,
        }
    }

    /// Override the entry-point group to scan (settings-driven hosts).
    pub fn with_group(mut self, group: &'a str) -> Self {
        self.group = group;
        self
    }

    /// Load every matching entry point, isolating per-entry failures.
    pub fn load(&self, registry: &mut PluginRegistry) {
        for dist in self.index.distributions() {
            for entry_point in dist.entry_points.iter().filter(|ep| ep.group == self.group) {
                if self.skip_seen && registry.is_seen(&entry_point.module) {
                    log::debug!(
                        "Skipping entry point {}: module '{}' already loaded",
                        entry_point.name,
                        entry_point.module
                    );
                    continue;
                }
                match entry_point.load() {
                    Ok(mut descriptor) => {
                        descriptor.source = Some(PluginSource::EntryPoint(EntryPointSource::new(
                            entry_point,
                            &dist,
                        )));
                        log::debug!(
                            "Loaded plugin '{}' from entry point {}",
                            descriptor.name,
                            entry_point.name
                        );
                        registry.register(descriptor, entry_point.module.clone());
                    }
                    Err(err) => {
                        log::error!(
                            "Failed to import plugin {}\n{}",
                            entry_point.name,
                            error_chain(&err)
                        );
                        registry.record_import_error(entry_point.module.clone(), err.to_string());
                    }
                }
            }
        }
    }
}

/// Default plugins folder under the platform config directory
pub fn default_plugins_folder() -> Option<PathBuf> {
    if let Some(config_dir) = dirs::config_dir() {
        return Some(config_dir.join("Taskforge").join("plugins"));
    }

    // Fallback to a local plugins directory
    Some(PathBuf::from("./plugins"))
}

fn symbol_basename(symbol: &str) -> &str {
    symbol.rsplit('.').next().unwrap_or(symbol)
}
