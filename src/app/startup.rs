//! Application startup
//!
//! Parses arguments, initialises logging, then dispatches the requested
//! command. Returns the process exit code.

use crate::app::cli::args::{Args, Command, OutputFormat};
use crate::app::display;
use crate::core::logging::init_logging;
use crate::plugin::api::{
    CapabilityCatalog, PluginManager, PluginSettings, StaticDistributionIndex,
};
use clap::Parser;
use std::sync::Arc;

pub fn run() -> i32 {
    let args = Args::parse();
    let use_color = !args.no_color;

    if let Err(err) = init_logging(
        args.log_level.as_deref(),
        args.log_file.as_deref().and_then(|p| p.to_str()),
        use_color,
    ) {
        eprintln!("Failed to initialise logging: {}", err);
        return 1;
    }

    match args.command {
        Command::Plugins { plugin_dir, output } => plugins_command(plugin_dir, output, use_color),
    }
}

fn plugins_command(
    plugin_dir: Option<std::path::PathBuf>,
    output: OutputFormat,
    use_color: bool,
) -> i32 {
    let mut settings = PluginSettings::default();
    if let Some(dir) = plugin_dir {
        settings.plugins_folder = Some(dir);
    }

    // The CLI has no embedding host, so the capability catalog is empty and
    // the distribution index sees no installed plugin packages. Manifests
    // referencing host capabilities will surface as import errors, which is
    // exactly what an operator debugging a plugin wants to see.
    let catalog = CapabilityCatalog::new();
    let index = Arc::new(StaticDistributionIndex::default());

    let mut manager = PluginManager::new(settings, catalog, index);
    manager.ensure_plugins_loaded();

    match output {
        OutputFormat::Table => {
            print!("{}", display::render_plugins_table(manager.registry(), use_color));
        }
        OutputFormat::Json => match serde_json::to_string_pretty(&display::render_plugins_json(
            manager.registry(),
        )) {
            Ok(json) => println!("{}", json),
            Err(err) => {
                log::error!("Failed to serialize plugin listing: {}", err);
                return 1;
            }
        },
    }

    if manager.import_errors().is_empty() {
        0
    } else {
        1
    }
}
