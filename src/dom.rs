//! DOM Operations Adapter
//!
//! Small helper layer over the `dom_query` crate. Extraction, annotation and
//! translation splicing all go through these functions so tag and attribute
//! handling stays consistent (lowercase tags, empty-string defaults).

// Re-export core types for external use
pub use dom_query::{Document, NodeRef, Selection};

pub use tendril::StrTendril;

// === Attribute Operations ===

/// Set an attribute value
#[inline]
pub fn set_attribute(sel: &Selection, name: &str, value: &str) {
    sel.set_attr(name, value);
}

// === Tag/Node Information ===

/// Get tag name (lowercase)
#[must_use]
pub fn tag_name(sel: &Selection) -> Option<String> {
    sel.nodes().first().and_then(node_tag)
}

/// Get the lowercase tag name of a node, `None` for non-elements.
#[must_use]
pub fn node_tag(node: &NodeRef) -> Option<String> {
    if !node.is_element() {
        return None;
    }
    node.node_name().map(|t| t.to_ascii_lowercase())
}

/// Get the class attribute of a node (empty string if missing).
#[must_use]
pub fn node_class(node: &NodeRef) -> String {
    node.attr("class").map(|c| c.to_string()).unwrap_or_default()
}

/// Returns true if the node holds an element or non-blank text.
///
/// Whitespace-only text and comments do not count.
#[must_use]
pub fn has_content(node: &NodeRef) -> bool {
    node.children().iter().any(NodeRef::is_element) || !node.text().trim().is_empty()
}

// === Text Content ===

/// Get all text content of node and descendants
///
/// Returns `StrTendril` for zero-copy passing. Use `.to_string()` only when
/// you need owned storage.
#[inline]
#[must_use]
pub fn text_content(sel: &Selection) -> StrTendril {
    sel.text()
}

/// Trimmed text of an element whose only child is a single text node.
///
/// Elements with mixed or element children return `None`, as do elements
/// whose text is only whitespace. Replacing the content of an element that
/// passes this check cannot destroy nested markup.
#[must_use]
pub fn direct_text(node: &NodeRef) -> Option<String> {
    let children = node.children();
    let [only] = children.as_slice() else {
        return None;
    };
    if !only.is_text() {
        return None;
    }

    let text = only.text();
    let trimmed = text.trim();
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed.to_string())
    }
}

/// Replace the content of an element with plain text.
pub fn set_text(sel: &Selection, text: &str) {
    sel.set_html(escape_text(text).as_str());
}

/// Escape text for insertion as HTML character data.
#[must_use]
pub fn escape_text(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            _ => out.push(c),
        }
    }
    out
}

// === Parsing & Serialization ===

/// Parse HTML string into document
///
/// html5ever recovers from any malformed input, so parsing never fails.
#[inline]
#[must_use]
pub fn parse(html: &str) -> Document {
    Document::from(html)
}

/// Serialize the whole document back to HTML.
#[inline]
#[must_use]
pub fn serialize(doc: &Document) -> String {
    doc.html().to_string()
}
