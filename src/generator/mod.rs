//! Content generators.
//!
//! - **Search**: Sphinx xmlpipe2 feed (`sphinxsearch.xml`)
//!
//! Generators read a [`ContentCollection`](crate::content::ContentCollection)
//! handed over by the host; they never rescan or re-render content.

pub mod search;
