//! Plugin source provenance
//!
//! Records where a plugin was discovered, for diagnostics and display. Each
//! variant has a plain rendering (`Display`) and a rich rendering
//! (`as_html`) used by the host UI.

use crate::plugin::discovery::{Distribution, PluginEntryPoint};
use std::path::{Path, PathBuf};

/// Provenance of a discovered plugin
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PluginSource {
    Directory(PluginsDirectorySource),
    EntryPoint(EntryPointSource),
}

impl PluginSource {
    pub fn as_html(&self) -> String {
        match self {
            PluginSource::Directory(source) => source.as_html(),
            PluginSource::EntryPoint(source) => source.as_html(),
        }
    }
}

impl std::fmt::Display for PluginSource {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            PluginSource::Directory(source) => source.fmt(f),
            PluginSource::EntryPoint(source) => source.fmt(f),
        }
    }
}

/// Plugin loaded from a manifest under the configured plugins folder
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PluginsDirectorySource {
    path: PathBuf,
}

impl PluginsDirectorySource {
    /// Record the manifest path relative to the plugins folder.
    pub fn new(manifest_path: &Path, plugins_folder: &Path) -> Self {
        let path = manifest_path
            .strip_prefix(plugins_folder)
            .unwrap_or(manifest_path)
            .to_path_buf();
        Self { path }
    }

    /// Path relative to the plugins folder
    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn as_html(&self) -> String {
        format!("<em>$PLUGINS_FOLDER/</em>{}", self.path.display())
    }
}

impl std::fmt::Display for PluginsDirectorySource {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "$PLUGINS_FOLDER/{}", self.path.display())
    }
}

/// Plugin loaded from an installed distribution's entry point
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EntryPointSource {
    entrypoint: String,
    dist_name: String,
    dist_version: String,
}

impl EntryPointSource {
    pub fn new(entry_point: &PluginEntryPoint, dist: &Distribution) -> Self {
        Self {
            entrypoint: entry_point.to_string(),
            dist_name: dist.name.clone(),
            dist_version: dist.version.clone(),
        }
    }

    /// The entry-point specification as declared by the distribution
    pub fn entrypoint(&self) -> &str {
        &self.entrypoint
    }

    pub fn as_html(&self) -> String {
        format!(
            "<em>{}=={}:</em> {}",
            self.dist_name, self.dist_version, self.entrypoint
        )
    }
}

impl std::fmt::Display for EntryPointSource {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{}=={}: {}",
            self.dist_name, self.dist_version, self.entrypoint
        )
    }
}
