//! The host's content hand-off: pages, articles and their translations.

use super::{ContentError, ContentItem};
use serde::Deserialize;
use std::{fs, path::Path};

/// All content items of one site build.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct ContentCollection {
    pub pages: Vec<ContentItem>,
    pub articles: Vec<ContentItem>,
}

impl ContentCollection {
    /// Load a collection from a JSON file written by the host adapter.
    pub fn load(path: &Path) -> Result<Self, ContentError> {
        let content =
            fs::read_to_string(path).map_err(|err| ContentError::Io(path.to_path_buf(), err))?;
        serde_json::from_str(&content).map_err(|err| ContentError::Json(path.to_path_buf(), err))
    }

    /// Iterate the item universe in feed order.
    ///
    /// Pages first, then articles, then every translation of every article
    /// (in article order). Translations are independent items.
    pub fn universe(&self) -> impl Iterator<Item = &ContentItem> {
        self.pages
            .iter()
            .chain(&self.articles)
            .chain(self.articles.iter().flat_map(|article| &article.translations))
    }

    /// Number of items in the universe.
    pub fn len(&self) -> usize {
        self.pages.len()
            + self.articles.len()
            + self
                .articles
                .iter()
                .map(|article| article.translations.len())
                .sum::<usize>()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use std::io::Write;

    fn item(url: &str) -> ContentItem {
        ContentItem {
            url: url.to_string(),
            ..Default::default()
        }
    }

    fn urls(collection: &ContentCollection) -> Vec<&str> {
        collection.universe().map(|i| i.url.as_str()).collect()
    }

    #[test]
    fn test_universe_order() {
        let mut first = item("a1");
        first.translations = vec![item("a1-fr"), item("a1-de")];
        let mut second = item("a2");
        second.translations = vec![item("a2-fr")];

        let collection = ContentCollection {
            pages: vec![item("p1"), item("p2")],
            articles: vec![first, second],
        };

        assert_eq!(
            urls(&collection),
            ["p1", "p2", "a1", "a2", "a1-fr", "a1-de", "a2-fr"]
        );
        assert_eq!(collection.len(), 7);
    }

    #[test]
    fn test_empty_collection() {
        let collection = ContentCollection::default();
        assert!(collection.is_empty());
        assert_eq!(collection.universe().count(), 0);
    }

    #[test]
    fn test_page_translations_are_not_included() {
        let mut page = item("p1");
        page.translations = vec![item("p1-fr")];
        let collection = ContentCollection {
            pages: vec![page],
            articles: vec![],
        };
        assert_eq!(urls(&collection), ["p1"]);
    }

    #[test]
    fn test_load_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        let data = json!({
            "pages": [{"url": "about.html", "status": "published"}],
            "articles": [{
                "url": "posts/1.html",
                "status": "published",
                "translations": [{"url": "fr/posts/1.html", "status": "draft"}]
            }]
        });
        write!(file, "{data}").unwrap();

        let collection = ContentCollection::load(file.path()).unwrap();
        assert_eq!(urls(&collection), ["about.html", "posts/1.html", "fr/posts/1.html"]);
    }

    #[test]
    fn test_load_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let err = ContentCollection::load(&dir.path().join("missing.json")).unwrap_err();
        assert!(matches!(err, ContentError::Io(..)));
        assert!(err.to_string().contains("missing.json"));
    }

    #[test]
    fn test_load_invalid_json() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, "{{\"pages\": [").unwrap();
        let err = ContentCollection::load(file.path()).unwrap_err();
        assert!(matches!(err, ContentError::Json(..)));
    }
}
