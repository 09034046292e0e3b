//! Plugin Error Handling
//!
//! Typed error channel for plugin loading. Every failure a resolver can hit
//! is represented here so that callers isolate it per plugin instead of
//! catching everything blindly.

use std::path::PathBuf;

/// Result type alias for plugin operations
pub type PluginResult<T> = std::result::Result<T, PluginError>;

/// Error types for plugin discovery and registration
#[derive(Debug, thiserror::Error)]
pub enum PluginError {
    /// Manifest file could not be read
    #[error("Failed to read plugin manifest {path}")]
    ManifestRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Manifest file is not valid TOML
    #[error("Invalid plugin manifest {path}")]
    ManifestParse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },

    /// Manifest parsed but violates a descriptor invariant
    #[error("Invalid plugin manifest {path}: {reason}")]
    InvalidManifest { path: PathBuf, reason: String },

    /// Manifest references a capability symbol the host has not registered
    #[error("Unknown {kind} capability '{symbol}'")]
    UnknownCapability { kind: &'static str, symbol: String },

    /// Plugin's load hook failed
    #[error("Plugin '{plugin}' on_load hook failed: {message}")]
    OnLoad { plugin: String, message: String },

    /// Entry-point loader failed
    #[error("{message}")]
    LoadFailed { message: String },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_messages() {
        let err = PluginError::UnknownCapability {
            kind: "macro",
            symbol: "metrics.missing".to_string(),
        };
        assert_eq!(err.to_string(), "Unknown macro capability 'metrics.missing'");

        let err = PluginError::OnLoad {
            plugin: "preload".to_string(),
            message: "oops".to_string(),
        };
        assert_eq!(err.to_string(), "Plugin 'preload' on_load hook failed: oops");
    }

    #[test]
    fn test_source_chain_preserved() {
        use std::error::Error;

        let err = PluginError::ManifestRead {
            path: PathBuf::from("p.toml"),
            source: std::io::Error::new(std::io::ErrorKind::NotFound, "no such file"),
        };
        assert!(err.source().is_some());
        assert_eq!(err.source().unwrap().to_string(), "no such file");
    }
}
