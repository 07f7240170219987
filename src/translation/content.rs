//! Content translation orchestration.
//!
//! A page is flattened into independent units (title, each paragraph, each
//! annotated element), the units are translated with bounded concurrency,
//! and the results are put back in their original positions. A failed unit
//! carries its error in place; it never aborts the page.
//!
//! The annotated document is only parsed after every unit has come back, so
//! no parse tree is held across an await point.

use futures::stream::{self, StreamExt};
use tracing::{debug, info};

use super::{Gateway, Translation, Translator};
use crate::extractor::splice_text;
use crate::result::{
    ScrapeFailure, ScrapeResult, ScrapedPage, TranslatedContent, TranslatedElement,
    TranslatedHtml, TranslatedParagraph,
};

/// Translate a single piece of raw text.
pub async fn translate_text<T: Translator>(
    gateway: &Gateway<T>,
    text: &str,
    source: &str,
    target: &str,
) -> Translation {
    gateway.translate(text, source, target).await
}

/// Translate a scrape outcome, passing a failure through untouched.
pub async fn translate_content<T: Translator>(
    gateway: &Gateway<T>,
    scraped: ScrapeResult,
    source: &str,
    target: &str,
) -> Result<TranslatedContent, ScrapeFailure> {
    let page = scraped?;
    Ok(translate_page(gateway, &page, source, target).await)
}

/// Translate every unit of an extracted page.
///
/// `paragraphs` in the output has the same length and order as the page's.
/// When the page carries annotated HTML, the output HTML has each annotated
/// element's text replaced by its rendered translation.
pub async fn translate_page<T: Translator>(
    gateway: &Gateway<T>,
    page: &ScrapedPage,
    source: &str,
    target: &str,
) -> TranslatedContent {
    let element_texts = page
        .annotated
        .iter()
        .flat_map(|a| a.elements.iter().map(|e| e.text.as_str()));
    let units: Vec<&str> = std::iter::once(page.title.as_str())
        .chain(page.paragraphs.iter().map(String::as_str))
        .chain(element_texts)
        .collect();

    debug!(units = units.len(), source, target, "translating page");
    let mut translations = translate_units(gateway, &units, source, target)
        .await
        .into_iter();

    let translated_title = translations
        .next()
        .unwrap_or_else(|| Translation::translated(page.title.as_str()));

    let paragraphs: Vec<TranslatedParagraph> = page
        .paragraphs
        .iter()
        .zip(translations.by_ref())
        .map(|(original, translated)| TranslatedParagraph {
            original: original.clone(),
            translated,
        })
        .collect();

    let html = page.annotated.as_ref().map(|annotated| {
        let elements: Vec<TranslatedElement> = annotated
            .elements
            .iter()
            .zip(translations.by_ref())
            .map(|(element, translated)| TranslatedElement {
                id: element.id.clone(),
                original: element.text.clone(),
                translated,
                tag: element.tag.clone(),
            })
            .collect();

        let rendered: Vec<(&str, String)> = elements
            .iter()
            .map(|e| (e.id.as_str(), e.translated.rendered()))
            .collect();
        let html = splice_text(
            &annotated.html,
            rendered.iter().map(|(id, text)| (*id, text.as_str())),
        );

        TranslatedHtml { html, elements }
    });

    let failed = paragraphs.iter().filter(|p| p.translated.is_failed()).count()
        + html
            .as_ref()
            .map_or(0, |h| h.elements.iter().filter(|e| e.translated.is_failed()).count());
    info!(
        paragraphs = paragraphs.len(),
        elements = html.as_ref().map_or(0, |h| h.elements.len()),
        failed,
        "translation complete"
    );

    TranslatedContent {
        original_title: page.title.clone(),
        translated_title,
        paragraphs,
        html,
    }
}

/// Translate units concurrently and return results in input order.
async fn translate_units<T: Translator>(
    gateway: &Gateway<T>,
    units: &[&str],
    source: &str,
    target: &str,
) -> Vec<Translation> {
    let mut results: Vec<(usize, Translation)> = stream::iter(units.iter().enumerate())
        .map(|(index, text)| async move { (index, gateway.translate(text, source, target).await) })
        .buffer_unordered(gateway.concurrency())
        .collect()
        .await;

    results.sort_by_key(|(index, _)| *index);
    results.into_iter().map(|(_, translation)| translation).collect()
}
