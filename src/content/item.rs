//! Content items handed over by the host site generator.

use crate::utils::date::DateTime;
use serde::de::{self, Deserializer};
use serde::Deserialize;

/// Publication status of a content item.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Status {
    Published,
    Draft,
    Hidden,
    /// Any status the host invents; never published.
    #[serde(other)]
    Other,
}

/// A name with its site URL (author, category or tag).
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct Link {
    pub name: String,
    #[serde(default)]
    pub url: String,
}

#[cfg(test)]
impl Link {
    pub fn new(name: impl Into<String>, url: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            url: url.into(),
        }
    }
}

/// Publication instant as Unix seconds.
///
/// Deserializes from a number (seconds, fraction allowed) or from a date
/// string accepted by [`DateTime::parse`].
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Timestamp(pub f64);

impl Timestamp {
    pub const fn seconds(self) -> f64 {
        self.0
    }
}

impl<'de> Deserialize<'de> for Timestamp {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        #[derive(Deserialize)]
        #[serde(untagged)]
        enum Raw {
            Seconds(f64),
            Date(String),
        }

        match Raw::deserialize(deserializer)? {
            Raw::Seconds(secs) if secs.is_finite() => Ok(Self(secs)),
            Raw::Seconds(secs) => Err(de::Error::custom(format!(
                "timestamp is not a finite number: {secs}"
            ))),
            Raw::Date(s) => DateTime::parse(&s)
                .map(|dt| Self(dt.unix_seconds()))
                .ok_or_else(|| de::Error::custom(format!("invalid date `{s}`"))),
        }
    }
}

/// A page or article as exposed by the host adapter.
///
/// | Field          | Type              | Description                        |
/// |----------------|-------------------|------------------------------------|
/// | `status`       | `Status`          | Only `published` items are indexed |
/// | `title`        | HTML              | Page title                         |
/// | `content`      | HTML              | Rendered body (alias `body`)       |
/// | `summary`      | HTML              | Rendered summary                   |
/// | `author`       | `Link`            | Main author                        |
/// | `authors`      | `[Link]`          | All authors                        |
/// | `category`     | `Link`            | Category (articles only)           |
/// | `slug`         | `String`          | URL slug                           |
/// | `url`          | `String`          | URL relative to the site root      |
/// | `date`         | number or string  | Publication instant                |
/// | `tags`         | `[Link]`          | Tags                               |
/// | `translations` | `[ContentItem]`   | Translated variants (articles)     |
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct ContentItem {
    pub status: Option<Status>,
    pub title: String,
    #[serde(alias = "body")]
    pub content: String,
    pub summary: String,
    pub author: Option<Link>,
    pub authors: Vec<Link>,
    pub category: Option<Link>,
    pub slug: String,
    pub url: String,
    pub date: Timestamp,
    pub tags: Vec<Link>,
    pub translations: Vec<ContentItem>,
}

impl ContentItem {
    /// Only published items take part in the search feed.
    pub fn is_published(&self) -> bool {
        self.status == Some(Status::Published)
    }
}
