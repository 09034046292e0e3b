//! Template macro extension point
//!
//! Plugins contribute macros that the (out-of-scope) template renderer later
//! resolves by plugin name and macro name. Instead of injecting attributes
//! into a live namespace object, the host keeps an explicit two-level symbol
//! table: root -> plugin namespace -> macro.

pub mod macros;

pub use macros::{MacroNamespace, MacroRegistry};

use std::sync::Arc;

/// A macro callable contributed by a plugin.
pub type MacroFn = Arc<dyn Fn(&[String]) -> String + Send + Sync>;
