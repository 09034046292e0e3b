//! Tests for capability integrators
//!
//! Covers the compatibility warning for legacy-only UI plugins, first-wins
//! route conflict resolution with in-place pruning, macro namespace
//! integration and order-independent listener registration.

use super::utils::*;
use crate::listeners::ListenerManager;
use crate::plugin::integration::{
    integrate_admin_plugins, integrate_listener_plugins, integrate_macro_plugins,
    integrate_ui_plugins,
};
use crate::plugin::registry::PluginRegistry;
use crate::plugin::types::{PluginDescriptor, PluginMacro, ViewEntry};
use crate::templating::{MacroFn, MacroRegistry};
use crate::ui::UiRegistry;
use serial_test::serial;
use std::sync::Arc;

#[test]
#[serial]
fn test_should_warn_about_incompatible_plugins() {
    init_log_capture();
    let mut registry = PluginRegistry::new();

    let mut admin_only = PluginDescriptor::new("test_admin_views_plugin");
    admin_only.admin_views.push(ViewEntry::new("legacy view"));
    registry.register(admin_only, "admin_views.toml");

    let mut links_only = PluginDescriptor::new("test_menu_links_plugin");
    links_only.menu_links.push(ViewEntry::new("legacy link"));
    registry.register(links_only, "menu_links.toml");

    let mut ui = UiRegistry::new();
    integrate_admin_plugins(&registry, &mut ui);

    assert_eq!(
        captured_warnings(),
        vec![
            "Plugin 'test_admin_views_plugin' may not be compatible with the current version. \
             Please contact the author of the plugin."
                .to_string(),
            "Plugin 'test_menu_links_plugin' may not be compatible with the current version. \
             Please contact the author of the plugin."
                .to_string(),
        ]
    );
}

#[test]
#[serial]
fn test_should_not_warn_about_builder_plugins() {
    init_log_capture();
    let mut registry = PluginRegistry::new();

    let mut views = PluginDescriptor::new("test_admin_views_plugin");
    views.appbuilder_views.push(ViewEntry::new("native view"));
    registry.register(views, "views.toml");

    let mut items = PluginDescriptor::new("test_menu_links_plugin");
    items.appbuilder_menu_items.push(ViewEntry::new("native item"));
    registry.register(items, "items.toml");

    let mut ui = UiRegistry::new();
    integrate_admin_plugins(&registry, &mut ui);

    assert!(captured_warnings().is_empty());
    assert_eq!(ui.appbuilder_views.len(), 1);
    assert_eq!(ui.appbuilder_menu_items.len(), 1);
}

#[test]
#[serial]
fn test_should_not_warn_when_both_styles_declared() {
    init_log_capture();
    let mut registry = PluginRegistry::new();

    let mut both = PluginDescriptor::new("test_admin_views_plugin");
    both.admin_views.push(ViewEntry::new("legacy view"));
    both.appbuilder_views.push(ViewEntry::new("native view"));
    registry.register(both, "both.toml");

    let mut links_both = PluginDescriptor::new("test_menu_links_plugin");
    links_both.menu_links.push(ViewEntry::new("legacy link"));
    links_both
        .appbuilder_menu_items
        .push(ViewEntry::new("native item"));
    registry.register(links_both, "links_both.toml");

    let mut ui = UiRegistry::new();
    integrate_admin_plugins(&registry, &mut ui);

    assert!(captured_warnings().is_empty());
}

#[test]
#[serial]
fn test_should_warn_about_conflicting_url_route() {
    init_log_capture();
    let mut registry = PluginRegistry::new();

    let mut plugin_a = PluginDescriptor::new("test_plugin_a");
    plugin_a
        .external_views
        .push(ViewEntry::with_route("view a", "/test_route"));
    registry.register(plugin_a, "a.toml");

    let mut plugin_b = PluginDescriptor::new("test_plugin_b");
    plugin_b
        .external_views
        .push(ViewEntry::with_route("view b", "/test_route"));
    plugin_b
        .react_apps
        .push(ViewEntry::with_route("app b", "/test_route"));
    registry.register(plugin_b, "b.toml");

    let mut ui = UiRegistry::new();
    integrate_ui_plugins(&mut registry, &mut ui);

    // The conflicting view and react app are pruned from the loser in place
    let plugin_b = registry.get("test_plugin_b").unwrap();
    assert!(plugin_b.external_views.is_empty());
    assert!(plugin_b.react_apps.is_empty());
    assert_eq!(ui.external_views.len(), 1);
    assert_eq!(ui.react_apps.len(), 0);

    assert_eq!(
        captured_warnings(),
        vec![
            "Plugin 'test_plugin_b' has an external view with an URL route '/test_route' \
             that conflicts with another plugin 'test_plugin_a'. The view will not be loaded."
                .to_string(),
            "Plugin 'test_plugin_b' has a React App with an URL route '/test_route' \
             that conflicts with another plugin 'test_plugin_a'. The React App will not be loaded."
                .to_string(),
        ]
    );
}

#[test]
#[serial]
fn test_entries_without_routes_never_conflict() {
    init_log_capture();
    let mut registry = PluginRegistry::new();

    let mut plugin_a = PluginDescriptor::new("plugin_a");
    plugin_a.external_views.push(ViewEntry::new("routeless a"));
    registry.register(plugin_a, "a.toml");

    let mut plugin_b = PluginDescriptor::new("plugin_b");
    plugin_b.external_views.push(ViewEntry::new("routeless b"));
    registry.register(plugin_b, "b.toml");

    let mut ui = UiRegistry::new();
    integrate_ui_plugins(&mut registry, &mut ui);

    assert_eq!(ui.external_views.len(), 2);
    assert!(captured_warnings().is_empty());
}

#[test]
#[serial]
fn test_ui_integration_is_reentrant() {
    init_log_capture();
    let mut registry = PluginRegistry::new();

    let mut plugin_a = PluginDescriptor::new("plugin_a");
    plugin_a
        .external_views
        .push(ViewEntry::with_route("view a", "/route"));
    registry.register(plugin_a, "a.toml");

    let mut ui = UiRegistry::new();
    integrate_ui_plugins(&mut registry, &mut ui);
    integrate_ui_plugins(&mut registry, &mut ui);

    assert_eq!(ui.external_views.len(), 1);
    assert!(captured_warnings().is_empty());
}

#[test]
fn test_registering_plugin_macros() {
    let custom_macro: MacroFn = Arc::new(|_: &[String]| "foo".to_string());

    let mut registry = PluginRegistry::new();
    let mut descriptor = PluginDescriptor::new("macro_plugin");
    descriptor
        .macros
        .push(PluginMacro::new("custom_macro", custom_macro.clone()));
    registry.register(descriptor, "macro_plugin.toml");

    let mut macros = MacroRegistry::new();
    integrate_macro_plugins(&registry, &mut macros);

    // The root exposes the plugin namespace, which exposes the callable
    assert_eq!(macros.plugin_names(), vec!["macro_plugin".to_string()]);
    let namespace = macros.namespace("macro_plugin").unwrap();
    let bound = namespace.get("custom_macro").unwrap();
    assert!(Arc::ptr_eq(bound, &custom_macro));
    assert_eq!(namespace.call("custom_macro", &[]), Some("foo".to_string()));
}

#[test]
fn test_macro_integration_survives_namespace_reset() {
    let custom_macro: MacroFn = Arc::new(|_: &[String]| "foo".to_string());

    let mut registry = PluginRegistry::new();
    let mut descriptor = PluginDescriptor::new("macro_plugin");
    descriptor
        .macros
        .push(PluginMacro::new("custom_macro", custom_macro.clone()));
    registry.register(descriptor, "macro_plugin.toml");

    let mut macros = MacroRegistry::new();
    integrate_macro_plugins(&registry, &mut macros);
    macros.reset();
    assert!(macros.namespace("macro_plugin").is_none());

    // Re-running integration reproduces the exact bindings
    integrate_macro_plugins(&registry, &mut macros);
    let namespace = macros.namespace("macro_plugin").unwrap();
    assert!(Arc::ptr_eq(namespace.get("custom_macro").unwrap(), &custom_macro));
}

#[test]
fn test_registering_plugin_listeners_is_order_independent() {
    let build_registry = |reversed: bool| {
        let mut registry = PluginRegistry::new();
        let mut first = PluginDescriptor::new("events");
        first
            .listeners
            .push(TestListener::new("events.run_listener"));
        first
            .listeners
            .push(TestListener::new("events.empty_listener"));
        let mut second = PluginDescriptor::new("auditing");
        second
            .listeners
            .push(TestListener::new("auditing.ClassBasedListener"));

        if reversed {
            registry.register(second, "auditing.toml");
            registry.register(first, "events.toml");
        } else {
            registry.register(first, "events.toml");
            registry.register(second, "auditing.toml");
        }
        registry
    };

    let mut forward = ListenerManager::new();
    integrate_listener_plugins(&build_registry(false), &mut forward);

    let mut backward = ListenerManager::new();
    integrate_listener_plugins(&build_registry(true), &mut backward);

    assert!(forward.has_listeners());
    assert!(backward.has_listeners());
    let expected = vec![
        "auditing.ClassBasedListener".to_string(),
        "events.empty_listener".to_string(),
        "events.run_listener".to_string(),
    ];
    assert_eq!(forward.listener_names(), expected);
    assert_eq!(backward.listener_names(), expected);
}
