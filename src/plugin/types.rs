//! Type definitions for the plugin subsystem
//!
//! The descriptor is the registry's record of one discovered plugin: its
//! identity, the capabilities it declares, and where it came from. Capability
//! lists are typed records rather than arbitrary runtime symbols.

use crate::listeners::HostListener;
use crate::plugin::source::PluginSource;
use crate::templating::MacroFn;
use serde::{Deserialize, Serialize};
use std::sync::Arc;

/// A named macro callable exported by a plugin
#[derive(Clone)]
pub struct PluginMacro {
    pub name: String,
    pub func: MacroFn,
}

impl PluginMacro {
    pub fn new(name: impl Into<String>, func: MacroFn) -> Self {
        Self {
            name: name.into(),
            func,
        }
    }
}

impl std::fmt::Debug for PluginMacro {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PluginMacro").field("name", &self.name).finish()
    }
}

/// One UI extension entry (view, menu link, react app)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ViewEntry {
    pub name: String,
    /// URL route claimed by this entry; entries without a route never conflict
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub url_route: Option<String>,
}

impl ViewEntry {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            url_route: None,
        }
    }

    pub fn with_route(name: impl Into<String>, route: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            url_route: Some(route.into()),
        }
    }
}

/// The registry's record of one discovered plugin
///
/// `name` is the dedup identity and must be non-empty. Capability lists
/// default to empty. A descriptor is immutable once registered except for
/// integrator-driven pruning of conflicting UI entries.
#[derive(Clone, Default)]
pub struct PluginDescriptor {
    pub name: String,
    pub macros: Vec<PluginMacro>,
    pub listeners: Vec<Arc<dyn HostListener>>,
    pub external_views: Vec<ViewEntry>,
    pub react_apps: Vec<ViewEntry>,
    pub admin_views: Vec<ViewEntry>,
    pub menu_links: Vec<ViewEntry>,
    pub appbuilder_views: Vec<ViewEntry>,
    pub appbuilder_menu_items: Vec<ViewEntry>,
    pub source: Option<PluginSource>,
}

impl PluginDescriptor {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Default::default()
        }
    }

    /// Total number of declared capabilities, for display purposes.
    pub fn capability_count(&self) -> usize {
        self.macros.len()
            + self.listeners.len()
            + self.external_views.len()
            + self.react_apps.len()
            + self.admin_views.len()
            + self.menu_links.len()
            + self.appbuilder_views.len()
            + self.appbuilder_menu_items.len()
    }
}

impl std::fmt::Debug for PluginDescriptor {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PluginDescriptor")
            .field("name", &self.name)
            .field("macros", &self.macros.iter().map(|m| &m.name).collect::<Vec<_>>())
            .field(
                "listeners",
                &self.listeners.iter().map(|l| l.qualified_name()).collect::<Vec<_>>(),
            )
            .field("external_views", &self.external_views)
            .field("react_apps", &self.react_apps)
            .field("admin_views", &self.admin_views)
            .field("menu_links", &self.menu_links)
            .field("appbuilder_views", &self.appbuilder_views)
            .field("appbuilder_menu_items", &self.appbuilder_menu_items)
            .field("source", &self.source)
            .finish()
    }
}
