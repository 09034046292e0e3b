//! CLI argument definitions

use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

/// Workflow orchestration host tools
#[derive(Debug, Parser)]
#[command(name = "taskforge", version, about = "Taskforge workflow orchestration tools")]
pub struct Args {
    /// Log level (error, warn, info, debug, trace)
    #[arg(long, global = true)]
    pub log_level: Option<String>,

    /// Write logs to this file instead of stderr
    #[arg(long, global = true)]
    pub log_file: Option<PathBuf>,

    /// Disable colored output
    #[arg(long, global = true)]
    pub no_color: bool,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Scan plugin sources and list discovered plugins and import errors
    Plugins {
        /// Plugins folder to scan (defaults to the platform config directory)
        #[arg(long)]
        plugin_dir: Option<PathBuf>,

        /// Output format
        #[arg(long, value_enum, default_value_t = OutputFormat::Table)]
        output: OutputFormat,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    Table,
    Json,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_plugins_subcommand_parses() {
        let args = Args::try_parse_from(["taskforge", "plugins", "--plugin-dir", "/tmp/p"]).unwrap();
        match args.command {
            Command::Plugins { plugin_dir, output } => {
                assert_eq!(plugin_dir.as_deref(), Some(std::path::Path::new("/tmp/p")));
                assert_eq!(output, OutputFormat::Table);
            }
        }
    }

    #[test]
    fn test_output_format_json() {
        let args =
            Args::try_parse_from(["taskforge", "plugins", "--output", "json"]).unwrap();
        match args.command {
            Command::Plugins { output, .. } => assert_eq!(output, OutputFormat::Json),
        }
    }
}
