//! `sphinxfeed check`: build records in memory and report on them.
//!
//! Identifier collisions and zero identifiers are reported, never fatal;
//! `build` writes those documents as they are.

use crate::{
    config::SiteConfig,
    content::ContentCollection,
    generator::search::SearchFeed,
    log,
    utils::plural_count,
};
use anyhow::Result;

/// Counts gathered by [`check_feed`].
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CheckReport {
    pub documents: usize,
    pub skipped: usize,
    pub collisions: usize,
    pub zero_ids: usize,
}

pub fn check_feed(config: &SiteConfig) -> Result<CheckReport> {
    let collection = ContentCollection::load(&config.build.content)?;
    let feed = SearchFeed::build(&config.site.url, &collection);
    Ok(report(&feed))
}

/// Log what `feed` would index and count its identifier problems.
fn report(feed: &SearchFeed) -> CheckReport {
    log!(
        "check";
        "{} published, {} skipped",
        plural_count(feed.records.len(), "document"),
        feed.skipped
    );

    let collisions = feed.collisions();
    for (id, urls) in &collisions {
        log!("collision"; "id {} shared by {}", id, urls.join(", "));
    }

    if collisions.is_empty() {
        log!("check"; "no identifier collisions");
    } else {
        log!("check"; "{}", plural_count(collisions.len(), "colliding identifier"));
    }

    let zero_ids = feed.zero_ids();
    for url in &zero_ids {
        log!("error"; "id 0 for {}, the indexer will reject it", url);
    }

    CheckReport {
        documents: feed.records.len(),
        skipped: feed.skipped,
        collisions: collisions.len(),
        zero_ids: zero_ids.len(),
    }
}
