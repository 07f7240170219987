//! # dhivehi-translator
//!
//! Scrape web pages and documents, detect Dhivehi (Thaana) text, and
//! translate the extracted content.
//!
//! The crate is split into a synchronous extraction core and asynchronous
//! collaborators around it:
//!
//! - **Extraction**: title, a prioritized content container, and a
//!   three-strategy paragraph cascade, optionally with every text element
//!   tagged for in-place translation
//! - **Script detection**: Thaana presence and `auto` source resolution
//! - **Translation**: a service-agnostic [`Translator`] seam, a gateway that
//!   turns failures into values, and page-level orchestration
//! - **Collaborators**: page fetching, random wiki articles, PDF/DOCX/text
//!   readers
//!
//! ## Quick Start
//!
//! ```rust
//! use dhivehi_translator::extract;
//!
//! let html = r#"<html><head><title>T</title></head>
//! <body><p>Hello world this is a test</p></body></html>"#;
//!
//! let page = extract(html);
//! assert_eq!(page.title, "T");
//! assert_eq!(page.paragraphs, vec!["Hello world this is a test"]);
//! ```

mod error;
mod extract;
mod options;
mod result;

/// DOM operations adapter over `dom_query`.
pub mod dom;

/// Container and exclusion rule tables.
pub mod selector;

/// Paragraph cascade and structure annotation.
pub mod extractor;

/// Thaana script detection.
pub mod script;

/// Character encoding detection and transcoding.
pub mod encoding;

/// HTTP page fetching.
pub mod fetch;

/// Random wiki articles.
pub mod random;

/// PDF, DOCX and text readers.
pub mod documents;

/// Translation service, gateway and orchestration.
pub mod translation;

/// Environment configuration.
pub mod config;

/// Tracing subscriber setup.
pub mod logging;

use std::time::Duration;

use tracing::{debug, warn};

// Public API - re-exports
pub use config::Config;
pub use error::{Error, Result};
pub use extract::{extract_title, NO_TITLE};
pub use fetch::Fetcher;
pub use options::{DedupeMode, Options, DEFAULT_ANNOTATE_TAGS};
pub use result::{
    AnnotatedElement, AnnotatedHtml, ScrapeFailure, ScrapeResult, ScrapedPage, TranslatedContent,
    TranslatedElement, TranslatedHtml, TranslatedParagraph, TRANSLATE_ID_ATTR,
};
pub use script::{is_dhivehi_script, resolve_source_language};
pub use translation::{Gateway, GoogleTranslate, Translation, Translator};

/// Extracts content from an HTML document using default options.
///
/// Extraction never fails: a page without usable text yields an empty
/// `paragraphs` list.
#[must_use]
pub fn extract(html: &str) -> ScrapedPage {
    extract_with_options(html, &Options::default())
}

/// Extracts content from an HTML document with custom options.
///
/// # Example
///
/// ```rust
/// use dhivehi_translator::{extract_with_options, Options};
///
/// let html = r#"<html><body><p>Hello world this is a test</p></body></html>"#;
/// let options = Options {
///     preserve_structure: true,
///     ..Options::default()
/// };
/// let page = extract_with_options(html, &options);
/// let annotated = page.annotated.expect("structure was requested");
/// assert_eq!(annotated.elements.len(), 1);
/// assert!(annotated.html.contains("data-translate-id"));
/// ```
#[must_use]
pub fn extract_with_options(html: &str, options: &Options) -> ScrapedPage {
    extract::extract_content(html, options)
}

/// Extracts content from raw HTML bytes, detecting the character encoding
/// from `content_type` or `<meta>` declarations.
///
/// # Example
///
/// ```rust
/// use dhivehi_translator::{extract_bytes, Options};
///
/// let html = b"<html><head><meta charset=\"ISO-8859-1\"></head><body><p>Caf\xE9 au lait, s'il vous pla\xEEt</p></body></html>";
/// let page = extract_bytes(html, None, &Options::default());
/// assert_eq!(page.paragraphs, vec!["Café au lait, s'il vous plaît"]);
/// ```
#[must_use]
pub fn extract_bytes(html: &[u8], content_type: Option<&str>, options: &Options) -> ScrapedPage {
    let html = encoding::decode_html(html, content_type);
    extract_with_options(&html, options)
}

/// Fetch a page and extract it.
///
/// Fetch failures (bad URL, transport error, non-success status, timeout)
/// become a [`ScrapeFailure`]; no partial content is returned with them.
pub async fn scrape_url(
    fetcher: &Fetcher,
    url: &str,
    timeout: Duration,
    options: &Options,
) -> ScrapeResult {
    let fetched = match fetcher.fetch(url, timeout).await {
        Ok(fetched) => fetched,
        Err(err) => {
            warn!(url, error = %err, "scrape failed");
            return Err(ScrapeFailure::new(url, err.to_string()));
        }
    };

    if fetched.final_url != url {
        debug!(url, final_url = fetched.final_url.as_str(), "followed redirects");
    }

    let options = Options {
        url: Some(url.to_string()),
        ..options.clone()
    };
    Ok(extract_with_options(&fetched.html, &options))
}
