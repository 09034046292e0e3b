//! Rendering for the `plugins` command

use crate::plugin::api::PluginRegistry;
use colored::Colorize;
use prettytable::{row, Table};

/// Render the registry as a table followed by any import errors.
pub fn render_plugins_table(registry: &PluginRegistry, use_color: bool) -> String {
    let mut output = String::new();

    if registry.is_empty() {
        output.push_str("No plugins loaded.\n");
    } else {
        let mut table = Table::new();
        table.set_titles(row!["NAME", "SOURCE", "CAPABILITIES"]);
        for descriptor in registry.descriptors() {
            let source = descriptor
                .source
                .as_ref()
                .map(|s| s.to_string())
                .unwrap_or_else(|| "-".to_string());
            table.add_row(row![
                descriptor.name,
                source,
                descriptor.capability_count()
            ]);
        }
        output.push_str(&table.to_string());
    }

    if !registry.import_errors().is_empty() {
        let heading = if use_color {
            "Import errors:".red().bold().to_string()
        } else {
            "Import errors:".to_string()
        };
        output.push('\n');
        output.push_str(&heading);
        output.push('\n');
        for (key, message) in registry.import_errors() {
            output.push_str(&format!("  {}: {}\n", key, message));
        }
    }

    output
}

/// Render the registry as JSON for machine consumption.
pub fn render_plugins_json(registry: &PluginRegistry) -> serde_json::Value {
    serde_json::json!({
        "plugins": registry
            .descriptors()
            .iter()
            .map(|descriptor| {
                serde_json::json!({
                    "name": descriptor.name,
                    "source": descriptor.source.as_ref().map(|s| s.to_string()),
                    "macros": descriptor.macros.iter().map(|m| m.name.clone()).collect::<Vec<_>>(),
                    "listeners": descriptor
                        .listeners
                        .iter()
                        .map(|l| l.qualified_name())
                        .collect::<Vec<_>>(),
                    "external_views": descriptor.external_views,
                    "react_apps": descriptor.react_apps,
                    "appbuilder_views": descriptor.appbuilder_views,
                    "appbuilder_menu_items": descriptor.appbuilder_menu_items,
                })
            })
            .collect::<Vec<_>>(),
        "import_errors": registry.import_errors(),
    })
}
