//! HTML -> XML-safe plain text for the search indexer.
//!
//! Pipeline: parse with an HTML5 parser (`scraper`, over `html5ever`),
//! collect text nodes in document order, strip each fragment, substitute a
//! few typographic characters, join with single spaces, escape for XML.
//!
//! The parser decodes character references and recovers from broken markup
//! the way a browser does: a stray `<` stays text, `script`/`style` bodies
//! end at their own closing tag.

use crate::utils::html::{escape, is_raw_text_element, strip_invalid_xml};
use scraper::{Html, Node};

/// Characters the indexer mangles or re-escapes, and their replacements.
///
/// The caret becomes a numeric reference before escaping, so the indexer
/// receives `&amp;#94;` and never sees a bare `^` (its query operator).
const SUBSTITUTIONS: [(char, &str); 5] = [
    ('\u{201C}', "\""), // “
    ('\u{201D}', "\""), // ”
    ('\u{2019}', "'"),  // ’
    ('^', "&#94;"),
    ('\u{00B6}', " "), // ¶
];

/// Extract clean, escaped text from an HTML fragment.
///
/// Never fails: malformed markup yields best-effort text, empty input
/// yields an empty string. Normalizing the output again changes nothing.
pub fn normalize(html: &str) -> String {
    if html.trim().is_empty() {
        return String::new();
    }

    let fragments: Vec<String> = text_nodes(html)
        .iter()
        .filter_map(|text| clean_fragment(text))
        .collect();

    escape(&fragments.join(" ")).into_owned()
}

/// Filter, strip and substitute one decoded text node. `None` if nothing is left.
fn clean_fragment(text: &str) -> Option<String> {
    // Before the emptiness check: a node holding only control characters
    // must not leave a separator behind.
    let valid = strip_invalid_xml(text);
    let stripped = valid.trim();
    if stripped.is_empty() {
        return None;
    }

    let substituted = substitute(stripped);
    // A substitution at either end (a lone `¶` permalink) may leave spaces.
    let cleaned = substituted.trim();
    (!cleaned.is_empty()).then(|| cleaned.to_string())
}

/// Apply [`SUBSTITUTIONS`] to a fragment.
fn substitute(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match SUBSTITUTIONS.iter().find(|(from, _)| *from == c) {
            Some((_, to)) => out.push_str(to),
            None => out.push(c),
        }
    }
    out
}

/// Decoded text nodes of `html` in document order.
///
/// Comments are not text nodes; `script` and `style` bodies are skipped.
fn text_nodes(html: &str) -> Vec<String> {
    let fragment = Html::parse_fragment(html);

    fragment
        .tree
        .root()
        .descendants()
        .filter(|node| {
            !node
                .parent()
                .and_then(|parent| parent.value().as_element())
                .is_some_and(|element| is_raw_text_element(element.name()))
        })
        .filter_map(|node| match node.value() {
            Node::Text(text) => Some(text.text.to_string()),
            _ => None,
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_input() {
        assert_eq!(normalize(""), "");
        assert_eq!(normalize("   \n\t"), "");
        assert_eq!(normalize("<p></p>"), "");
    }

    #[test]
    fn test_plain_text() {
        assert_eq!(normalize("hello world"), "hello world");
    }

    #[test]
    fn test_strips_tags_and_escapes_quotes() {
        assert_eq!(normalize("<b>Hello \"World\"</b>"), "Hello &quot;World&quot;");
    }

    #[test]
    fn test_smart_punctuation_and_pilcrow() {
        assert_eq!(
            normalize("<p>It\u{2019}s a test \u{00B6} done.</p>"),
            "It's a test   done."
        );
        assert_eq!(
            normalize("\u{201C}quoted\u{201D}"),
            "&quot;quoted&quot;"
        );
    }

    #[test]
    fn test_caret_becomes_reference() {
        assert_eq!(normalize("2^10"), "2&amp;#94;10");
    }

    #[test]
    fn test_fragments_joined_with_single_space() {
        assert_eq!(
            normalize("<h1>Title</h1>\n\n<p>  First  </p><p>Second</p>"),
            "Title First Second"
        );
        assert_eq!(normalize("<p>a<em>b</em>c</p>"), "a b c");
    }

    #[test]
    fn test_inner_whitespace_is_kept() {
        assert_eq!(normalize("<p>one\ntwo</p>"), "one\ntwo");
    }

    #[test]
    fn test_entities_decoded_then_escaped() {
        assert_eq!(normalize("<p>Fish &amp; Chips</p>"), "Fish &amp; Chips");
        assert_eq!(normalize("<p>a &lt;b&gt; c</p>"), "a &lt;b&gt; c");
        assert_eq!(normalize("<p>It&rsquo;s</p>"), "It's");
        assert_eq!(normalize("<p>&#8220;hi&#8221;</p>"), "&quot;hi&quot;");
    }

    #[test]
    fn test_accented_entities_decoded() {
        assert_eq!(
            normalize("<p>caf&eacute; &agrave; &ccedil;a</p>"),
            "café à ça"
        );
        assert_eq!(normalize("<p>&Uuml;ber &alpha;&rarr;&omega;</p>"), "Über α→ω");
    }

    #[test]
    fn test_escaped_reference_stays_literal() {
        // `&amp;lt;` is the text `&lt;`, not a `<`.
        assert_eq!(normalize("<p>&amp;lt;</p>"), "&amp;lt;");
    }

    #[test]
    fn test_headerlink_pilcrow_is_dropped() {
        let html = "<h2 id=\"intro\">Intro<a class=\"headerlink\" href=\"#intro\">\u{00B6}</a></h2>";
        assert_eq!(normalize(html), "Intro");
    }

    #[test]
    fn test_skips_comments_scripts_and_styles() {
        let html = "<p>Visible</p><!-- hidden --><script>var x = 1;</script><style>p{}</style><p>Also</p>";
        assert_eq!(normalize(html), "Visible Also");
    }

    #[test]
    fn test_attributes_are_discarded() {
        assert_eq!(
            normalize("<a href=\"/x?a=1&b=2\" title=\"t\">link</a>"),
            "link"
        );
    }

    #[test]
    fn test_malformed_html_keeps_text() {
        assert_eq!(normalize("<p>unclosed"), "unclosed");
        assert_eq!(normalize("</b>stray close"), "stray close");
        assert_eq!(normalize("<div <p>x</div>"), "x");
        for html in ["<<<>>>", "<p>a</b></i>b", "<table><td>cell"] {
            let out = normalize(html);
            assert!(!out.contains('<') && !out.contains('>'), "{html:?} -> {out:?}");
        }
    }

    #[test]
    fn test_bare_less_than_is_text() {
        assert_eq!(normalize("a < b & c"), "a &lt; b &amp; c");
        assert_eq!(
            normalize("<p>if a < b then</p><p>next</p>"),
            "if a &lt; b then next"
        );
        assert_eq!(normalize("<p>x <3 y</p>"), "x &lt;3 y");
    }

    #[test]
    fn test_script_with_markup_characters() {
        assert_eq!(
            normalize("<p>x</p><script>if (a < b) {}</script><p>after</p>"),
            "x after"
        );
        assert_eq!(
            normalize("<p>x</p><script>document.write('<p>no</p>')</script><p>after</p>"),
            "x after"
        );
        assert_eq!(
            normalize("<STYLE>a > b {}</STYLE>kept"),
            "kept"
        );
    }

    #[test]
    fn test_output_never_contains_markup_or_bare_ampersand() {
        let samples = [
            "<p>Tom & Jerry</p>",
            "<p>&amp;&amp;</p>",
            "<em>x</em> > y",
            "<p>AT&T</p>",
            "<p>\"quotes\" and 'apostrophes'</p>",
        ];
        for html in samples {
            let out = normalize(html);
            assert!(!out.contains('<') && !out.contains('>'), "{out}");
            for (i, _) in out.match_indices('&') {
                let rest = &out[i..];
                assert!(
                    ["&amp;", "&lt;", "&gt;", "&quot;"]
                        .iter()
                        .any(|e| rest.starts_with(e)),
                    "bare ampersand in {out:?}"
                );
            }
        }
    }

    #[test]
    fn test_idempotent() {
        let samples = [
            "<b>Hello \"World\"</b>",
            "<p>It\u{2019}s a test \u{00B6} done.</p>",
            "<p>2^10 &amp; more</p>",
            "<p>a &lt;tag&gt; here</p>",
            "<p>end \u{00B6}</p>",
            "<p>a</p><p>\u{7}</p>",
            "<p>caf&eacute; &amp;lt;</p>",
            "a < b",
            "plain",
        ];
        for html in samples {
            let once = normalize(html);
            assert_eq!(normalize(&once), once, "input: {html:?}");
        }
    }

    #[test]
    fn test_control_only_fragment_leaves_no_separator() {
        assert_eq!(normalize("<p>a</p><p>\u{7}</p>"), "a");
        assert_eq!(normalize("<p>\u{1}</p><p>b</p>"), "b");
    }

    #[test]
    fn test_control_characters_removed() {
        assert_eq!(normalize("<p>bell\u{7}ring</p>"), "bellring");
    }

    #[test]
    fn test_unicode_text_preserved() {
        assert_eq!(normalize("<p>Café — naïve 日本語</p>"), "Café — naïve 日本語");
    }
}
