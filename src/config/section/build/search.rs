//! Search feed generation configuration.

use crate::config::FieldPath;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct SearchConfig {
    /// Enable search feed generation.
    pub enable: bool,
    /// Output path for the xmlpipe2 file, relative to the output directory.
    pub path: PathBuf,
}

impl SearchConfig {
    pub const PATH: FieldPath = FieldPath::new("build.search.path");
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            enable: true,
            path: "sphinxsearch.xml".into(),
        }
    }
}
