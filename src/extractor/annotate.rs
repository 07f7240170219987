//! Structure-preserving annotation.
//!
//! Both ends of the identifier protocol live here: [`annotate`] tags
//! text-bearing elements of a parsed document with `data-translate-id`, and
//! [`splice_text`] later writes replacement text back into those elements.
//!
//! The parsed document is already an arena of nodes, so the splice side
//! builds an id -> node side table once instead of running one selector
//! query per element.

use std::collections::HashMap;

use dom_query::{Document, NodeRef, Selection};
use tracing::debug;
use uuid::Uuid;

use crate::dom;
use crate::result::{AnnotatedElement, TRANSLATE_ID_ATTR};

/// Generate a fresh, globally unique element identifier.
#[must_use]
pub fn new_element_id() -> String {
    format!("translate-{}", Uuid::new_v4())
}

/// Tag every eligible element of the whole document and return the side table.
///
/// Eligible elements have a tag from `tags` and exactly one child, a
/// non-blank text node. Elements are visited in document order.
pub fn annotate(doc: &Document, tags: &[String]) -> Vec<AnnotatedElement> {
    let mut elements = Vec::new();

    for node in doc.select("*").nodes() {
        let Some(tag) = dom::node_tag(node) else {
            continue;
        };
        if !tags.iter().any(|t| *t == tag) {
            continue;
        }
        let Some(text) = dom::direct_text(node) else {
            continue;
        };

        let id = new_element_id();
        dom::set_attribute(&Selection::from(*node), TRANSLATE_ID_ATTR, &id);
        elements.push(AnnotatedElement { id, text, tag });
    }

    debug!(count = elements.len(), "annotated text elements");
    elements
}

/// Map every `data-translate-id` value in the document to its node.
#[must_use]
pub fn index_annotated<'a>(doc: &'a Document) -> HashMap<String, NodeRef<'a>> {
    let selector = format!("[{TRANSLATE_ID_ATTR}]");
    doc.select(&selector)
        .nodes()
        .iter()
        .filter_map(|node| node.attr(TRANSLATE_ID_ATTR).map(|id| (id.to_string(), *node)))
        .collect()
}

/// Replace the text of annotated elements and serialize the document.
///
/// `replacements` pairs an element id with its new text. Ids not present in
/// the document are skipped.
#[must_use]
pub fn splice_text<'r, I>(annotated_html: &str, replacements: I) -> String
where
    I: IntoIterator<Item = (&'r str, &'r str)>,
{
    let doc = dom::parse(annotated_html);
    let index = index_annotated(&doc);

    for (id, text) in replacements {
        match index.get(id) {
            Some(node) => dom::set_text(&Selection::from(*node), text),
            None => debug!(id, "annotated element missing from document"),
        }
    }

    dom::serialize(&doc)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::options::DEFAULT_ANNOTATE_TAGS;

    fn default_tags() -> Vec<String> {
        DEFAULT_ANNOTATE_TAGS.iter().map(ToString::to_string).collect()
    }

    #[test]
    fn ids_are_unique_and_prefixed() {
        let a = new_element_id();
        let b = new_element_id();
        assert!(a.starts_with("translate-"));
        assert_ne!(a, b);
    }

    #[test]
    fn annotates_leaf_text_elements_in_order() {
        let doc = dom::parse(
            r#"<html><head><title>Page</title></head><body>
                <h1>Heading</h1>
                <p>Mixed <b>content</b> paragraph</p>
                <ul><li>First item</li><li><a href="/x">Linked item</a></li></ul>
                <button>Click</button>
                <td>not eligible</td>
            </body></html>"#,
        );
        let elements = annotate(&doc, &default_tags());

        let summary: Vec<(&str, &str)> = elements
            .iter()
            .map(|e| (e.tag.as_str(), e.text.as_str()))
            .collect();
        assert_eq!(
            summary,
            vec![
                ("h1", "Heading"),
                ("li", "First item"),
                ("a", "Linked item"),
                ("button", "Click"),
            ]
        );
    }

    #[test]
    fn every_id_appears_once_in_serialized_html() {
        let doc = dom::parse(r#"<body><p>One</p><p>Two</p><span>Three</span></body>"#);
        let elements = annotate(&doc, &default_tags());
        let html = dom::serialize(&doc);

        assert_eq!(elements.len(), 3);
        for element in &elements {
            assert_eq!(html.matches(element.id.as_str()).count(), 1);
        }
    }

    #[test]
    fn splice_replaces_text_by_id() {
        let doc = dom::parse(r#"<body><p>Hello</p><div><span>World</span></div></body>"#);
        let elements = annotate(&doc, &default_tags());
        let html = dom::serialize(&doc);

        let replacements: Vec<(&str, &str)> = vec![
            (elements[0].id.as_str(), "ހެލޯ"),
            (elements[1].id.as_str(), "<dunya>"),
        ];
        let spliced = splice_text(&html, replacements);

        let result = dom::parse(&spliced);
        let index = index_annotated(&result);
        assert_eq!(index[&elements[0].id].text().to_string(), "ހެލޯ");
        assert_eq!(index[&elements[1].id].text().to_string(), "<dunya>");
        assert!(result.select("dunya").is_empty());
    }

    #[test]
    fn splice_skips_unknown_ids() {
        let html = r#"<html><head></head><body><p data-translate-id="translate-a">Keep</p></body></html>"#;
        let spliced = splice_text(html, [("translate-missing", "nope")]);
        assert!(spliced.contains("Keep"));
        assert!(!spliced.contains("nope"));
    }
}
