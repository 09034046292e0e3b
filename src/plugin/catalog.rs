//! Capability catalog
//!
//! The explicit interface between manifest-declared capability symbols and
//! executable host code. The host (or an embedding application) registers
//! macro callables, listener instances and on-load hooks under symbolic
//! names; the directory resolver looks manifest references up here instead
//! of scanning loaded modules for matching types.

use crate::listeners::HostListener;
use crate::plugin::error::PluginResult;
use crate::plugin::types::PluginDescriptor;
use crate::templating::MacroFn;
use std::collections::HashMap;
use std::sync::Arc;

/// Hook invoked after a directory plugin's descriptor is built
pub type OnLoadHook = Arc<dyn Fn(&PluginDescriptor) -> PluginResult<()> + Send + Sync>;

/// Host-registered capability tables keyed by symbol
#[derive(Clone, Default)]
pub struct CapabilityCatalog {
    macros: HashMap<String, MacroFn>,
    listeners: HashMap<String, Arc<dyn HostListener>>,
    on_load_hooks: HashMap<String, OnLoadHook>,
}

impl std::fmt::Debug for CapabilityCatalog {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CapabilityCatalog")
            .field("macros", &self.macros.keys().collect::<Vec<_>>())
            .field("listeners", &self.listeners.keys().collect::<Vec<_>>())
            .field("on_load_hooks", &self.on_load_hooks.keys().collect::<Vec<_>>())
            .finish()
    }
}

impl CapabilityCatalog {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn register_macro(&mut self, symbol: impl Into<String>, func: MacroFn) {
        self.macros.insert(symbol.into(), func);
    }

    pub fn register_listener(&mut self, symbol: impl Into<String>, listener: Arc<dyn HostListener>) {
        self.listeners.insert(symbol.into(), listener);
    }

    pub fn register_on_load(&mut self, symbol: impl Into<String>, hook: OnLoadHook) {
        self.on_load_hooks.insert(symbol.into(), hook);
    }

    pub fn macro_fn(&self, symbol: &str) -> Option<&MacroFn> {
        self.macros.get(symbol)
    }

    pub fn listener(&self, symbol: &str) -> Option<&Arc<dyn HostListener>> {
        self.listeners.get(symbol)
    }

    pub fn on_load_hook(&self, symbol: &str) -> Option<&OnLoadHook> {
        self.on_load_hooks.get(symbol)
    }
}
