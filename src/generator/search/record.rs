//! Per-document attribute records.

use super::normalize::normalize;
use crate::{
    content::{ContentItem, Link},
    utils::{date::format_timestamp, hash},
};
use serde_json::{Map, Value};

/// One `<sphinx:document>` worth of data.
///
/// Text fields are already normalized (escaped); mapping fields hold JSON.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DocumentRecord {
    pub id: u32,
    pub title: String,
    pub content: String,
    pub summary: String,
    pub author: String,
    /// JSON object, author name -> URL.
    pub authors: String,
    pub category: String,
    pub category_url: String,
    pub slug: String,
    /// URL relative to the site root.
    pub url: String,
    pub absolute_url: String,
    /// Canonical timestamp string (e.g. `1700000000.0`).
    pub published: String,
    /// JSON object, tag name -> URL.
    pub tags: String,
}

/// Derives records from content items for one site URL.
#[derive(Debug, Clone)]
pub struct RecordBuilder {
    site_url: String,
}

impl RecordBuilder {
    pub fn new(site_url: impl Into<String>) -> Self {
        Self {
            site_url: site_url.into(),
        }
    }

    /// Build the record for `item`, or `None` if it is not published.
    pub fn build(&self, item: &ContentItem) -> Option<DocumentRecord> {
        if !item.is_published() {
            return None;
        }

        let absolute_url = self.absolute_url(&item.url);
        let published = format_timestamp(item.date.seconds());
        let id = document_id(&published, &absolute_url);

        let (category, category_url) = item
            .category
            .as_ref()
            .map(|c| (c.name.clone(), c.url.clone()))
            .unwrap_or_default();

        Some(DocumentRecord {
            id,
            title: normalize(&item.title),
            content: normalize(&item.content),
            summary: normalize(&item.summary),
            author: item
                .author
                .as_ref()
                .map(|a| a.name.clone())
                .unwrap_or_default(),
            authors: links_to_json(&item.authors),
            category,
            category_url,
            slug: item.slug.clone(),
            url: item.url.clone(),
            absolute_url,
            published,
            tags: links_to_json(&item.tags),
        })
    }

    /// Site URL and relative URL joined by a single `/`.
    pub fn absolute_url(&self, url: &str) -> String {
        format!("{}/{}", self.site_url, url)
    }
}

/// CRC-32 over the timestamp string followed by the absolute URL.
///
/// Stable across builds; distinct documents may collide (32 bits).
pub fn document_id(published: &str, absolute_url: &str) -> u32 {
    hash::checksum_parts(&[published, absolute_url])
}

/// Serialize links as a JSON object, name -> URL, in input order.
///
/// A repeated name keeps its first position and its last URL.
pub fn links_to_json(links: &[Link]) -> String {
    let map: Map<String, Value> = links
        .iter()
        .map(|link| (link.name.clone(), Value::String(link.url.clone())))
        .collect();
    Value::Object(map).to_string()
}
