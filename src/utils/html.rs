//! HTML utility functions.
//!
//! Provides common HTML processing functions:
//! - `escape()` - entity escaping for XML character data and attributes
//! - `strip_invalid_xml()` - removal of characters XML 1.0 forbids
//! - `is_raw_text_element()` - Raw text elements (script, style)

use std::borrow::Cow;

// =============================================================================
// HTML Escaping
// =============================================================================

/// Characters that require escaping.
///
/// The apostrophe is absent: it is legal in character data and inside the
/// double-quoted attributes this crate writes.
const ESCAPE_CHARS: [char; 4] = ['<', '>', '&', '"'];

/// Get the entity for a special character.
#[inline]
fn escape_char(c: char) -> Option<&'static str> {
    match c {
        '<' => Some("&lt;"),
        '>' => Some("&gt;"),
        '&' => Some("&amp;"),
        '"' => Some("&quot;"),
        _ => None,
    }
}

/// Escape special characters in text content.
///
/// Uses `Cow` to avoid allocation when no escaping is needed.
///
/// # Example
/// ```ignore
/// assert_eq!(escape("<script>"), "&lt;script&gt;");
/// assert_eq!(escape("hello"), "hello"); // No allocation
/// ```
#[inline]
pub fn escape(s: &str) -> Cow<'_, str> {
    if !s.contains(ESCAPE_CHARS) {
        return Cow::Borrowed(s);
    }

    let mut result = String::with_capacity(s.len() + 16);
    for c in s.chars() {
        match escape_char(c) {
            Some(entity) => result.push_str(entity),
            None => result.push(c),
        }
    }
    Cow::Owned(result)
}

// =============================================================================
// XML Character Range
// =============================================================================

/// Whether `c` matches the XML 1.0 `Char` production.
#[inline]
pub fn is_xml_char(c: char) -> bool {
    matches!(c, '\t' | '\n' | '\r')
        || (c >= ' ' && !matches!(c, '\u{FFFE}' | '\u{FFFF}'))
}

/// Drop characters that may not appear anywhere in an XML document.
pub fn strip_invalid_xml(s: &str) -> Cow<'_, str> {
    if s.chars().all(is_xml_char) {
        return Cow::Borrowed(s);
    }
    Cow::Owned(s.chars().filter(|&c| is_xml_char(c)).collect())
}

// =============================================================================
// Element Classification
// =============================================================================

/// Check if tag is a raw text element (content is not document text).
///
/// Script and style content is "raw text" in HTML, not document text.
#[inline]
pub fn is_raw_text_element(tag: &str) -> bool {
    matches!(tag, "script" | "style")
}

// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_escape_plain() {
        assert_eq!(escape("hello world"), "hello world");
        assert!(matches!(escape("hello world"), Cow::Borrowed(_)));
    }

    #[test]
    fn test_escape_special_chars() {
        assert_eq!(escape("<script>"), "&lt;script&gt;");
        assert_eq!(escape("a & b"), "a &amp; b");
        assert_eq!(escape("say \"hi\""), "say &quot;hi&quot;");
    }

    #[test]
    fn test_escape_keeps_apostrophe() {
        assert_eq!(escape("it's"), "it's");
    }

    #[test]
    fn test_escape_mixed() {
        assert_eq!(
            escape("<a href=\"#\">link & text</a>"),
            "&lt;a href=&quot;#&quot;&gt;link &amp; text&lt;/a&gt;"
        );
    }

    #[test]
    fn test_escape_empty() {
        assert_eq!(escape(""), "");
    }

    #[test]
    fn test_strip_invalid_xml() {
        assert_eq!(strip_invalid_xml("tab\tline\nok"), "tab\tline\nok");
        assert_eq!(strip_invalid_xml("bell\u{7}null\u{0}"), "bellnull");
        assert_eq!(strip_invalid_xml("x\u{FFFE}y"), "xy");
        assert_eq!(strip_invalid_xml("émoji 🎉"), "émoji 🎉");
    }

    #[test]
    fn test_raw_text_elements() {
        assert!(is_raw_text_element("script"));
        assert!(is_raw_text_element("style"));
        assert!(!is_raw_text_element("div"));
        assert!(!is_raw_text_element("pre"));
    }
}
