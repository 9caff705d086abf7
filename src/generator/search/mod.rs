//! Sphinx search feed generation.
//!
//! Turns the published part of a [`ContentCollection`] into an xmlpipe2
//! document (`sphinxsearch.xml`) for the Sphinx indexer:
//!
//! - **normalize**: HTML -> escaped plain text
//! - **record**: one `DocumentRecord` per published item
//! - **xmlpipe**: schema preamble + documents
//!
//! Identifiers are CRC-32 checksums of timestamp + absolute URL. Two
//! documents can share an id; `check` reports such collisions, `build`
//! writes them as they are.

pub mod normalize;
pub mod record;
pub mod xmlpipe;

use crate::{config::SiteConfig, content::ContentCollection, debug, log};
use anyhow::{Context, Result};
use record::{DocumentRecord, RecordBuilder};
use rustc_hash::FxHashMap;
use std::{
    fs::{self, File},
    io::BufWriter,
    path::{Path, PathBuf},
};

/// Outcome of writing the feed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FeedSummary {
    pub path: PathBuf,
    pub documents: usize,
    pub skipped: usize,
}

/// Build the search feed if enabled. Returns `None` when disabled.
pub fn build_search_feed(
    config: &SiteConfig,
    collection: &ContentCollection,
) -> Result<Option<FeedSummary>> {
    if !config.build.search.enable {
        debug!("search"; "search feed disabled");
        return Ok(None);
    }

    let feed = SearchFeed::build(&config.site.url, collection);
    let summary = feed.write(&config.search_path())?;

    log!(
        "search";
        "{} ({} documents, {} skipped)",
        summary.path.file_name().unwrap_or_default().to_string_lossy(),
        summary.documents,
        summary.skipped
    );
    Ok(Some(summary))
}

/// Records for every published item, in item-universe order.
#[derive(Debug, Clone, Default)]
pub struct SearchFeed {
    pub records: Vec<DocumentRecord>,
    pub skipped: usize,
}

impl SearchFeed {
    pub fn build(site_url: &str, collection: &ContentCollection) -> Self {
        let builder = RecordBuilder::new(site_url);
        let mut feed = Self::default();

        for item in collection.universe() {
            match builder.build(item) {
                Some(record) => feed.records.push(record),
                None => {
                    debug!("search"; "skipped unpublished {}", item.url);
                    feed.skipped += 1;
                }
            }
        }

        feed
    }

    /// Write the feed to `path`, creating parent directories.
    ///
    /// The file is truncated first; an error leaves it incomplete.
    pub fn write(&self, path: &Path) -> Result<FeedSummary> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)
                .with_context(|| format!("Failed to create {}", parent.display()))?;
        }

        let file = File::create(path)
            .with_context(|| format!("Failed to create search feed {}", path.display()))?;
        let documents = xmlpipe::emit(&self.records, BufWriter::new(file))
            .with_context(|| format!("Failed to write search feed {}", path.display()))?;

        Ok(FeedSummary {
            path: path.to_path_buf(),
            documents,
            skipped: self.skipped,
        })
    }

    /// Identifiers shared by more than one record, with their absolute URLs.
    ///
    /// Sorted by identifier.
    pub fn collisions(&self) -> Vec<(u32, Vec<&str>)> {
        let mut by_id: FxHashMap<u32, Vec<&str>> = FxHashMap::default();
        for record in &self.records {
            by_id
                .entry(record.id)
                .or_default()
                .push(record.absolute_url.as_str());
        }

        let mut collisions: Vec<_> = by_id.into_iter().filter(|(_, urls)| urls.len() > 1).collect();
        collisions.sort_unstable_by_key(|(id, _)| *id);
        collisions
    }

    /// Absolute URLs of records whose identifier is 0.
    ///
    /// The indexer rejects document id 0, so these never reach the index.
    pub fn zero_ids(&self) -> Vec<&str> {
        self.records
            .iter()
            .filter(|record| record.id == 0)
            .map(|record| record.absolute_url.as_str())
            .collect()
    }
}
