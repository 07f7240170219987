//! Core content extraction pipeline.
//!
//! Parse, read the title, pick a content container, run the paragraph
//! cascade, and optionally annotate the whole document for in-place
//! translation. Extraction is side-effect free and total: any input
//! produces a page, possibly with no paragraphs.

use tracing::{debug, info};

use crate::dom::{self, Document};
use crate::extractor::{annotate, collect_paragraphs};
use crate::options::Options;
use crate::result::{AnnotatedHtml, ScrapedPage};
use crate::selector::select_container;

/// Title used when the document has no `<title>` element.
pub const NO_TITLE: &str = "No title found";

/// Main entry point for content extraction.
pub(crate) fn extract_content(html: &str, options: &Options) -> ScrapedPage {
    debug!(html_len = html.len(), "starting content extraction");

    let document = dom::parse(html);
    let title = extract_title(&document);

    let (rule_index, container) = select_container(&document, &options.container_rules);
    match rule_index.and_then(|i| options.container_rules.get(i)) {
        Some(rule) => debug!(rule = %rule, "selected content container"),
        None => debug!("no container rule matched, using document body"),
    }

    let paragraphs = collect_paragraphs(&container, options);

    // Annotation mutates the tree, so it runs after paragraphs are read.
    let annotated = options.preserve_structure.then(|| {
        let elements = annotate(&document, &options.annotate_tags);
        AnnotatedHtml {
            html: dom::serialize(&document),
            elements,
        }
    });

    info!(
        title = title.as_str(),
        paragraphs = paragraphs.len(),
        annotated = annotated.as_ref().map_or(0, |a| a.elements.len()),
        "extraction complete"
    );

    ScrapedPage {
        url: options.url.clone().unwrap_or_default(),
        title,
        paragraphs,
        annotated,
    }
}

/// Trimmed text of the first `<title>`, or [`NO_TITLE`].
#[must_use]
pub fn extract_title(document: &Document) -> String {
    let title = document.select("title");
    match title.nodes().first() {
        Some(node) => node.text().trim().to_string(),
        None => NO_TITLE.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn title_is_trimmed() {
        let doc = dom::parse("<html><head><title>\n  My Page  \n</title></head></html>");
        assert_eq!(extract_title(&doc), "My Page");
    }

    #[test]
    fn missing_title_uses_fallback() {
        let doc = dom::parse("<html><body><p>No head here</p></body></html>");
        assert_eq!(extract_title(&doc), NO_TITLE);
    }

    #[test]
    fn url_is_recorded_from_options() {
        let options = Options {
            url: Some("https://dv.wikipedia.org/wiki/X".to_string()),
            ..Options::default()
        };
        let page = extract_content("<p>Paragraph of some length</p>", &options);
        assert_eq!(page.url, "https://dv.wikipedia.org/wiki/X");
    }

    #[test]
    fn annotation_does_not_leak_into_paragraphs() {
        let options = Options {
            preserve_structure: true,
            ..Options::default()
        };
        let page = extract_content(
            "<html><title>T</title><body><p>Hello world this is a test</p></body></html>",
            &options,
        );
        assert_eq!(page.paragraphs, vec!["Hello world this is a test"]);
        let Some(annotated) = page.annotated else {
            panic!("expected annotated html");
        };
        assert_eq!(annotated.elements.len(), 1);
        assert!(annotated.html.contains("data-translate-id"));
    }
}
