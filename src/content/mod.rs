//! Content model consumed by the search feed.
//!
//! The host site generator owns discovery and rendering; it hands this crate
//! a [`ContentCollection`] (pages, articles, translations) through a JSON
//! file. Nothing here mutates content.
//!
//! ```json
//! {
//!   "pages": [{ "status": "published", "title": "About", "url": "pages/about.html", ... }],
//!   "articles": [{ "status": "published", "url": "posts/1.html", "translations": [...] }]
//! }
//! ```

mod collection;
pub mod item;

pub use collection::ContentCollection;
pub use item::{ContentItem, Link};

use std::path::PathBuf;
use thiserror::Error;

/// Errors raised while reading the content hand-off.
#[derive(Debug, Error)]
pub enum ContentError {
    #[error("IO error when reading `{0}`")]
    Io(PathBuf, #[source] std::io::Error),

    #[error("invalid content collection in `{0}`")]
    Json(PathBuf, #[source] serde_json::Error),
}
