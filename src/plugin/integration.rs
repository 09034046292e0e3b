//! Capability Integrators
//!
//! Consume the registry and wire discovered capabilities into the host's
//! extension points: template macros, listeners, and UI views. Each pass is
//! re-entrant: running it again against an unchanged registry reproduces the
//! same state. Conflict and compatibility policy lives here; losing UI
//! entries are pruned from their descriptor in place and a WARNING names
//! the losing plugin, the route and the winner.

use crate::listeners::ListenerManager;
use crate::plugin::registry::PluginRegistry;
use crate::plugin::types::ViewEntry;
use crate::templating::MacroRegistry;
use crate::ui::UiRegistry;
use std::collections::HashMap;
use std::sync::Arc;

/// Bind every plugin's macros into the macro symbol table.
///
/// Each plugin with macros gets a namespace keyed by its name; the macro
/// callables are bound under their own names inside it. Safe to re-run
/// after `MacroRegistry::reset`.
pub fn integrate_macro_plugins(registry: &PluginRegistry, macros: &mut MacroRegistry) {
    for descriptor in registry.descriptors() {
        if descriptor.macros.is_empty() {
            continue;
        }
        let namespace = macros.namespace_mut(&descriptor.name);
        for plugin_macro in &descriptor.macros {
            namespace.bind(&plugin_macro.name, plugin_macro.func.clone());
        }
    }
}

/// Register every plugin's listeners with the listener manager.
///
/// Registration is keyed by each listener's qualified name, so the result
/// is independent of descriptor order and re-registration is a no-op.
pub fn integrate_listener_plugins(registry: &PluginRegistry, manager: &mut ListenerManager) {
    for descriptor in registry.descriptors() {
        for listener in &descriptor.listeners {
            manager.register(Arc::clone(listener));
        }
    }
}

/// Integrate builder-style views and flag legacy-only plugins.
///
/// A descriptor declaring only legacy admin views or menu links, with no
/// framework-native counterpart, gets exactly one compatibility WARNING, in
/// registry order. Framework-native entries are collected into the UI
/// registry.
pub fn integrate_admin_plugins(registry: &PluginRegistry, ui: &mut UiRegistry) {
    ui.clear_builder_entries();

    for descriptor in registry.descriptors() {
        let legacy = !descriptor.admin_views.is_empty() || !descriptor.menu_links.is_empty();
        let native = !descriptor.appbuilder_views.is_empty()
            || !descriptor.appbuilder_menu_items.is_empty();
        if legacy && !native {
            log::warn!(
                "Plugin '{}' may not be compatible with the current version. \
                 Please contact the author of the plugin.",
                descriptor.name
            );
        }

        ui.appbuilder_views.extend(descriptor.appbuilder_views.iter().cloned());
        ui.appbuilder_menu_items
            .extend(descriptor.appbuilder_menu_items.iter().cloned());
    }
}

/// UI entry kinds that claim URL routes
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum RouteKind {
    ExternalView,
    ReactApp,
}

impl RouteKind {
    fn noun(self) -> &'static str {
        match self {
            RouteKind::ExternalView => "an external view",
            RouteKind::ReactApp => "a React App",
        }
    }

    fn subject(self) -> &'static str {
        match self {
            RouteKind::ExternalView => "The view",
            RouteKind::ReactApp => "The React App",
        }
    }
}

/// Integrate external views and react apps into the shared route table.
///
/// Descriptors are walked in registry order; the first entry to claim a URL
/// route wins and lands in the UI registry. A losing entry is removed from
/// its descriptor in place, and one WARNING per (entry kind, losing
/// descriptor) pair names the route and the winning plugin. External views
/// and react apps share one route table but are pruned independently.
pub fn integrate_ui_plugins(registry: &mut PluginRegistry, ui: &mut UiRegistry) {
    ui.clear_routes();

    // route -> plugin that first claimed it
    let mut route_table: HashMap<String, String> = HashMap::new();
    let mut external_views = Vec::new();
    let mut react_apps = Vec::new();

    for descriptor in registry.descriptors_mut() {
        let name = descriptor.name.clone();
        claim_routes(
            &name,
            RouteKind::ExternalView,
            &mut descriptor.external_views,
            &mut route_table,
            &mut external_views,
        );
        claim_routes(
            &name,
            RouteKind::ReactApp,
            &mut descriptor.react_apps,
            &mut route_table,
            &mut react_apps,
        );
    }

    ui.external_views = external_views;
    ui.react_apps = react_apps;
}

/// First-wins route claiming for one capability list of one descriptor.
///
/// Mutates the list in place: losing entries are dropped. Emits at most one
/// warning for this (kind, descriptor) pair.
fn claim_routes(
    plugin: &str,
    kind: RouteKind,
    entries: &mut Vec<ViewEntry>,
    route_table: &mut HashMap<String, String>,
    winners: &mut Vec<ViewEntry>,
) {
    let mut warned = false;

    entries.retain(|entry| {
        let Some(route) = entry.url_route.as_deref() else {
            // No route claimed, nothing to conflict with
            winners.push(entry.clone());
            return true;
        };

        if let Some(winner) = route_table.get(route) {
            if !warned {
                log::warn!(
                    "Plugin '{}' has {} with an URL route '{}' that conflicts with another \
                     plugin '{}'. {} will not be loaded.",
                    plugin,
                    kind.noun(),
                    route,
                    winner,
                    kind.subject()
                );
                warned = true;
            }
            false
        } else {
            route_table.insert(route.to_string(), plugin.to_string());
            winners.push(entry.clone());
            true
        }
    });
}
