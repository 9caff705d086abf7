//! `[site]` section configuration.
//!
//! # Example
//!
//! ```toml
//! [site]
//! url = "https://myblog.com"
//! ```

use crate::config::{ConfigDiagnostics, FieldPath};
use serde::{Deserialize, Serialize};

/// Site-level settings shared by every generated document.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct SiteSectionConfig {
    /// Base URL, joined with each item's relative URL (e.g., "https://example.com/blog").
    ///
    /// May be empty; identifiers are then derived from root-relative URLs.
    pub url: String,
}

impl SiteSectionConfig {
    pub const URL: FieldPath = FieldPath::new("site.url");

    /// Drop trailing slashes so joining with `/` yields a single separator.
    pub fn normalize(&mut self) {
        let trimmed = self.url.trim().trim_end_matches('/');
        if trimmed.len() != self.url.len() {
            self.url = trimmed.to_string();
        }
    }

    /// Validate site configuration.
    ///
    /// # Checks
    /// - a non-empty `url` must be a valid URL with scheme (e.g., `https://example.com`)
    /// - scheme must be http or https, with a host
    pub fn validate(&self, diag: &mut ConfigDiagnostics) {
        if self.url.is_empty() {
            return;
        }

        match url::Url::parse(&self.url) {
            Ok(parsed) => {
                if !matches!(parsed.scheme(), "http" | "https") {
                    diag.error_with_hint(
                        Self::URL,
                        format!(
                            "scheme '{}' not supported, must be http or https",
                            parsed.scheme()
                        ),
                        "use format like https://example.com",
                    );
                }
                if parsed.host_str().is_none() {
                    diag.error_with_hint(
                        Self::URL,
                        "URL must have a valid host",
                        "use format like https://example.com",
                    );
                }
            }
            Err(e) => {
                diag.error_with_hint(
                    Self::URL,
                    format!("invalid URL: {}", e),
                    "use format like https://example.com",
                );
            }
        }
    }
}
