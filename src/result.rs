//! Result types for extraction and translation output.
//!
//! A [`ScrapedPage`] is what extraction produces for one document, a
//! [`TranslatedContent`] is the parallel structure the orchestrator builds
//! from it. Both are built fresh per request and never mutated afterwards.

use serde::{Deserialize, Serialize};

use crate::translation::Translation;

/// Attribute carrying the per-element identifier in annotated HTML.
pub const TRANSLATE_ID_ATTR: &str = "data-translate-id";

/// Extracted content of one document.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScrapedPage {
    /// Source location, empty when extracting from raw HTML.
    pub url: String,

    /// Trimmed `<title>` text, or `"No title found"`.
    pub title: String,

    /// Non-empty text blocks in document order. May be empty.
    pub paragraphs: Vec<String>,

    /// Annotated document, present only when structure was preserved.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub annotated: Option<AnnotatedHtml>,
}

/// A copy of the document in which text-bearing elements carry a
/// `data-translate-id` attribute, plus the side table of those elements.
///
/// Every id in `elements` appears exactly once in `html`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AnnotatedHtml {
    /// Serialized annotated document.
    pub html: String,

    /// Annotated elements in document order.
    pub elements: Vec<AnnotatedElement>,
}

/// One annotated element.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AnnotatedElement {
    /// Unique identifier, also the value of `data-translate-id`.
    pub id: String,

    /// Trimmed text of the element.
    pub text: String,

    /// Lowercase tag name.
    pub tag: String,
}

/// Whole-operation failure: the page could not be fetched or decoded.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, thiserror::Error)]
#[error("failed to scrape {url}: {error}")]
pub struct ScrapeFailure {
    /// Location that was requested.
    pub url: String,

    /// Human-readable reason.
    pub error: String,
}

impl ScrapeFailure {
    #[must_use]
    pub fn new(url: impl Into<String>, error: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            error: error.into(),
        }
    }
}

/// Outcome of scraping one location. Consumers check the error first.
pub type ScrapeResult = std::result::Result<ScrapedPage, ScrapeFailure>;

/// Translated counterpart of a [`ScrapedPage`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TranslatedContent {
    pub original_title: String,
    pub translated_title: Translation,

    /// Same length and order as the source paragraphs.
    pub paragraphs: Vec<TranslatedParagraph>,

    /// Present iff the source page carried annotated HTML.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub html: Option<TranslatedHtml>,
}

/// One paragraph and its translation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TranslatedParagraph {
    pub original: String,
    pub translated: Translation,
}

/// Annotated document with each tagged element's text replaced.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TranslatedHtml {
    /// Serialized document with translations spliced in.
    pub html: String,

    /// Same ids and order as the source elements.
    pub elements: Vec<TranslatedElement>,
}

/// One annotated element and its translation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TranslatedElement {
    pub id: String,
    pub original: String,
    pub translated: Translation,
    pub tag: String,
}
