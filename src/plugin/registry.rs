//! Plugin Registry
//!
//! Ordered collection of loaded plugin descriptors plus the bookkeeping the
//! resolvers need: a set of already-seen source identities for dedup and an
//! append-only map of import failures for diagnostics. The registry is an
//! explicit object owned by the manager; there is no process-wide global.

use crate::plugin::types::PluginDescriptor;
use std::collections::{BTreeMap, HashSet};

/// Registry of loaded plugin descriptors
#[derive(Clone, Default)]
pub struct PluginRegistry {
    /// Descriptors in insertion order
    plugins: Vec<PluginDescriptor>,

    /// Source identities (manifest paths, entry-point modules) already loaded
    seen: HashSet<String>,

    /// Import failures keyed by module path / manifest file, append-only
    import_errors: BTreeMap<String, String>,
}

impl std::fmt::Debug for PluginRegistry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PluginRegistry")
            .field("plugins", &self.plugins.iter().map(|p| &p.name).collect::<Vec<_>>())
            .field("import_errors", &self.import_errors.keys().collect::<Vec<_>>())
            .finish()
    }
}

impl PluginRegistry {
    /// Create a new empty plugin registry
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a descriptor and remember its source identity.
    pub fn register(&mut self, descriptor: PluginDescriptor, identity: impl Into<String>) {
        self.seen.insert(identity.into());
        self.plugins.push(descriptor);
    }

    /// Whether a source identity has already been loaded in this registry.
    pub fn is_seen(&self, identity: &str) -> bool {
        self.seen.contains(identity)
    }

    /// Record an import failure without aborting the scan.
    pub fn record_import_error(&mut self, key: impl Into<String>, message: impl Into<String>) {
        self.import_errors.insert(key.into(), message.into());
    }

    pub fn import_errors(&self) -> &BTreeMap<String, String> {
        &self.import_errors
    }

    /// Descriptors in registration order
    pub fn descriptors(&self) -> &[PluginDescriptor] {
        &self.plugins
    }

    /// Mutable access for integrator-driven pruning of conflicting entries
    pub fn descriptors_mut(&mut self) -> &mut [PluginDescriptor] {
        &mut self.plugins
    }

    /// Find a descriptor by plugin name
    pub fn get(&self, name: &str) -> Option<&PluginDescriptor> {
        self.plugins.iter().find(|p| p.name == name)
    }

    pub fn names(&self) -> Vec<String> {
        self.plugins.iter().map(|p| p.name.clone()).collect()
    }

    pub fn len(&self) -> usize {
        self.plugins.len()
    }

    pub fn is_empty(&self) -> bool {
        self.plugins.is_empty()
    }

    /// Drop all descriptors, seen identities and recorded errors.
    pub fn clear(&mut self) {
        self.plugins.clear();
        self.seen.clear();
        self.import_errors.clear();
    }
}
