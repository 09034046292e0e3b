//! Macro symbol table implementation

use crate::templating::MacroFn;
use std::collections::BTreeMap;

/// Macros exported by a single plugin, keyed by macro name.
#[derive(Clone, Default)]
pub struct MacroNamespace {
    symbols: BTreeMap<String, MacroFn>,
}

impl std::fmt::Debug for MacroNamespace {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("MacroNamespace")
            .field("symbols", &self.symbols.keys().collect::<Vec<_>>())
            .finish()
    }
}

impl MacroNamespace {
    pub fn new() -> Self {
        Self::default()
    }

    /// Bind a macro under its name. Rebinding the same name replaces the
    /// previous callable, which keeps integration re-entrant.
    pub fn bind(&mut self, name: impl Into<String>, func: MacroFn) {
        self.symbols.insert(name.into(), func);
    }

    pub fn get(&self, name: &str) -> Option<&MacroFn> {
        self.symbols.get(name)
    }

    pub fn names(&self) -> Vec<String> {
        self.symbols.keys().cloned().collect()
    }

    pub fn is_empty(&self) -> bool {
        self.symbols.is_empty()
    }

    /// Invoke a macro by name, if bound.
    pub fn call(&self, name: &str, args: &[String]) -> Option<String> {
        self.symbols.get(name).map(|f| f(args))
    }
}

/// Root of the macro symbol table: plugin name -> namespace.
#[derive(Clone, Default)]
pub struct MacroRegistry {
    namespaces: BTreeMap<String, MacroNamespace>,
}

impl std::fmt::Debug for MacroRegistry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("MacroRegistry")
            .field("namespaces", &self.namespaces.keys().collect::<Vec<_>>())
            .finish()
    }
}

impl MacroRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Namespace for a plugin, if any of its macros have been integrated.
    pub fn namespace(&self, plugin: &str) -> Option<&MacroNamespace> {
        self.namespaces.get(plugin)
    }

    /// Namespace for a plugin, created on first use.
    pub fn namespace_mut(&mut self, plugin: &str) -> &mut MacroNamespace {
        self.namespaces.entry(plugin.to_string()).or_default()
    }

    pub fn plugin_names(&self) -> Vec<String> {
        self.namespaces.keys().cloned().collect()
    }

    pub fn is_empty(&self) -> bool {
        self.namespaces.is_empty()
    }

    /// Drop every namespace (host reload/test isolation hook).
    pub fn reset(&mut self) {
        self.namespaces.clear();
    }
}
