//! `sphinxfeed build`: load the collection, write the feed.

use crate::{
    config::SiteConfig,
    content::ContentCollection,
    debug,
    generator::search::{FeedSummary, build_search_feed},
    log,
    utils::plural_count,
};
use anyhow::Result;

/// Write the search feed for the configured site.
pub fn build_feed(config: &SiteConfig) -> Result<Option<FeedSummary>> {
    if !config.build.search.enable {
        log!("search"; "disabled, nothing to write");
        return Ok(None);
    }

    let collection = ContentCollection::load(&config.build.content)?;
    if collection.is_empty() {
        log!("build"; "{} holds no content, writing an empty feed", config.build.content.display());
    }
    debug!(
        "build";
        "loaded {} from {}",
        plural_count(collection.len(), "item"),
        config.build.content.display()
    );

    build_search_feed(config, &collection)
}
