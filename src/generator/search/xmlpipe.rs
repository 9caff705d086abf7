//! xmlpipe2 serialization.
//!
//! # Format
//!
//! ```xml
//! <?xml version="1.0" encoding="utf-8"?>
//! <sphinx:docset>
//! <sphinx:schema>
//! <sphinx:field name="content"/>
//! ...
//! </sphinx:schema>
//! <sphinx:document id="123"><title>…</title>…<content><![CDATA[…]]></content>…</sphinx:document>
//! </sphinx:docset>
//! ```
//!
//! Element names, order and attribute types are read by the indexer and
//! must not change.

use super::record::DocumentRecord;
use crate::utils::html::{escape, strip_invalid_xml};
use std::borrow::Cow;
use std::io::{self, Write};

/// Full-text fields declared in the schema, in order.
pub const FIELDS: [&str; 2] = ["content", "title"];

/// Attributes declared in the schema, in order, with their types.
pub const ATTRS: [(&str, &str); 10] = [
    ("title", "string"),
    ("author", "string"),
    ("authors", "json"),
    ("category", "string"),
    ("category_url", "string"),
    ("url", "string"),
    ("summary", "string"),
    ("slug", "string"),
    ("published", "timestamp"),
    ("tags", "json"),
];

/// XML declaration, docset opening and the in-stream schema.
pub fn schema() -> String {
    let mut xml = String::with_capacity(1024);

    xml.push_str("<?xml version=\"1.0\" encoding=\"utf-8\"?>\n");
    xml.push_str("<sphinx:docset>\n<sphinx:schema>\n");
    for name in FIELDS {
        xml.push_str("<sphinx:field name=\"");
        xml.push_str(name);
        xml.push_str("\"/>\n");
    }
    for (name, kind) in ATTRS {
        xml.push_str("<sphinx:attr name=\"");
        xml.push_str(name);
        xml.push_str("\" type=\"");
        xml.push_str(kind);
        xml.push_str("\"/>\n");
    }
    xml.push_str("</sphinx:schema>\n");
    xml
}

/// Write the complete docset to `sink`. Returns the number of documents.
pub fn emit<'a, W, I>(records: I, mut sink: W) -> io::Result<usize>
where
    W: Write,
    I: IntoIterator<Item = &'a DocumentRecord>,
{
    sink.write_all(schema().as_bytes())?;

    let mut count = 0;
    for record in records {
        write_document(&mut sink, record)?;
        count += 1;
    }

    sink.write_all(b"</sphinx:docset>\n")?;
    sink.flush()?;
    Ok(count)
}

/// Write one `<sphinx:document>` line.
fn write_document<W: Write>(sink: &mut W, record: &DocumentRecord) -> io::Result<()> {
    write!(sink, "<sphinx:document id=\"{}\">", record.id)?;
    write_text(sink, "title", &record.title)?;
    write_raw(sink, "author", &record.author)?;
    write_raw(sink, "authors", &record.authors)?;
    write_raw(sink, "category", &record.category)?;
    write_raw(sink, "category_url", &record.category_url)?;
    write_raw(sink, "url", &record.url)?;
    write_cdata(sink, "content", &record.content)?;
    write_cdata(sink, "summary", &record.summary)?;
    write_raw(sink, "slug", &record.slug)?;
    write_raw(sink, "published", &record.published)?;
    write_raw(sink, "tags", &record.tags)?;
    sink.write_all(b"</sphinx:document>\n")
}

/// Element holding already-normalized text.
fn write_text<W: Write>(sink: &mut W, tag: &str, text: &str) -> io::Result<()> {
    write!(sink, "<{tag}>{}</{tag}>", strip_invalid_xml(text))
}

/// Element holding text straight from the content item.
fn write_raw<W: Write>(sink: &mut W, tag: &str, text: &str) -> io::Result<()> {
    write!(sink, "<{tag}>{}</{tag}>", xml_text(text))
}

/// Element holding normalized text inside a CDATA block.
///
/// Normalized text has `>` escaped, so `]]>` cannot occur.
fn write_cdata<W: Write>(sink: &mut W, tag: &str, text: &str) -> io::Result<()> {
    let text = strip_invalid_xml(text);
    if text.contains("]]>") {
        // Only reachable with unnormalized input; split the terminator.
        let split = text.replace("]]>", "]]]]><![CDATA[>");
        return write!(sink, "<{tag}><![CDATA[{split}]]></{tag}>");
    }
    write!(sink, "<{tag}><![CDATA[{text}]]></{tag}>")
}

/// Escape text for character data and drop XML-illegal characters.
fn xml_text(s: &str) -> Cow<'_, str> {
    match strip_invalid_xml(s) {
        Cow::Borrowed(b) => escape(b),
        Cow::Owned(o) => Cow::Owned(escape(&o).into_owned()),
    }
}
