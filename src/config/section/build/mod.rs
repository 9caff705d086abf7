//! `[build]` section configuration.
//!
//! # Example
//!
//! ```toml
//! [build]
//! content = "content.json"    # Collection hand-off file (relative to site root)
//! output = "output"           # Output directory (relative to site root)
//!
//! [build.search]
//! enable = true               # Generate the Sphinx search feed
//! path = "sphinxsearch.xml"   # Feed file name inside `output`
//! ```

mod search;

pub use search::SearchConfig;

use crate::config::{ConfigDiagnostics, FieldPath};
use serde::{Deserialize, Serialize};
use std::path::{Component, PathBuf};

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct BuildSectionConfig {
    /// Content collection exported by the site generator (JSON).
    pub content: PathBuf,

    /// Build output directory.
    pub output: PathBuf,

    /// Search feed settings.
    pub search: SearchConfig,
}

impl BuildSectionConfig {
    pub const OUTPUT: FieldPath = FieldPath::new("build.output");
}

impl Default for BuildSectionConfig {
    fn default() -> Self {
        Self {
            content: "content.json".into(),
            output: "output".into(),
            search: SearchConfig::default(),
        }
    }
}

impl BuildSectionConfig {
    /// Validate build configuration.
    ///
    /// `search.path` must stay inside the output directory.
    pub fn validate(&self, diag: &mut ConfigDiagnostics) {
        let path = &self.search.path;

        if path.as_os_str().is_empty() {
            diag.error_with_hint(
                SearchConfig::PATH,
                "path is empty",
                "use a file name like \"sphinxsearch.xml\"",
            );
        } else if path.is_absolute() || path.has_root() {
            diag.error_with_hint(
                SearchConfig::PATH,
                format!("absolute path '{}' not allowed", path.display()),
                format!("paths are relative to {}", Self::OUTPUT),
            );
        } else if path.components().any(|c| matches!(c, Component::ParentDir)) {
            diag.error_with_hint(
                SearchConfig::PATH,
                format!("'{}' escapes the output directory", path.display()),
                "remove `..` components",
            );
        }
    }
}
