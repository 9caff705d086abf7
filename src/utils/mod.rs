//! Shared helpers: HTML text handling, dates, checksums.

pub mod date;
pub mod hash;
pub mod html;

/// Format count with noun, handling pluralization
///
/// - `plural_count(1, "document")` -> `"1 document"`
/// - `plural_count(3, "document")` -> `"3 documents"`
pub fn plural_count(count: usize, noun: &str) -> String {
    let s = if count == 1 { "" } else { "s" };
    format!("{count} {noun}{s}")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_plural_count() {
        assert_eq!(plural_count(0, "item"), "0 items");
        assert_eq!(plural_count(1, "item"), "1 item");
        assert_eq!(plural_count(2, "colliding identifier"), "2 colliding identifiers");
    }
}
