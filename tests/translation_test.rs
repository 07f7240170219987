use std::sync::atomic::{AtomicUsize, Ordering};
use std::time::Duration;

use async_trait::async_trait;
use dhivehi_translator::translation::{translate_content, translate_page, translate_text};
use dhivehi_translator::{
    extract, Error, Gateway, Result, ScrapeFailure, ScrapedPage, Translation, Translator,
};

/// Tags each text with the target language and counts calls. Texts
/// containing "FAIL" are rejected like a quota error.
#[derive(Default)]
struct Tagging {
    calls: AtomicUsize,
}

impl Tagging {
    fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl Translator for Tagging {
    async fn translate(&self, text: &str, _source: Option<&str>, target: &str) -> Result<String> {
        let call = self.calls.fetch_add(1, Ordering::SeqCst);
        // finish out of order
        tokio::time::sleep(Duration::from_millis(((7 * call) % 5) as u64)).await;
        if text.contains("FAIL") {
            return Err(Error::Service {
                status: 403,
                message: "Daily Limit Exceeded".to_string(),
            });
        }
        Ok(format!("[{target}] {text}"))
    }
}

fn page(title: &str, paragraphs: &[&str]) -> ScrapedPage {
    ScrapedPage {
        url: "https://dv.wikipedia.org/wiki/Test".to_string(),
        title: title.to_string(),
        paragraphs: paragraphs.iter().map(ToString::to_string).collect(),
        annotated: None,
    }
}

#[tokio::test]
async fn same_language_returns_input_without_calls() {
    let gateway = Gateway::new(Tagging::default());

    let out = translate_text(&gateway, "Any text at all, unchanged.", "en", "en").await;
    assert_eq!(out, Translation::translated("Any text at all, unchanged."));
    assert_eq!(gateway.translator().calls(), 0);
}

#[tokio::test]
async fn scrape_failure_passes_through_untouched() {
    let gateway = Gateway::new(Tagging::default());
    let failure = ScrapeFailure::new("https://example.mv/story", "timeout");

    let result = translate_content(&gateway, Err(failure.clone()), "dv", "en").await;
    assert_eq!(result, Err(failure));
    assert_eq!(gateway.translator().calls(), 0);
}

#[tokio::test]
async fn paragraphs_keep_length_and_order() {
    let gateway = Gateway::new(Tagging::default()).with_concurrency(8);
    let texts: Vec<String> = (0..40).map(|i| format!("Paragraph number {i}")).collect();
    let refs: Vec<&str> = texts.iter().map(String::as_str).collect();

    let content = translate_page(&gateway, &page("Title", &refs), "dv", "en").await;

    assert_eq!(content.original_title, "Title");
    assert_eq!(content.translated_title, Translation::translated("[en] Title"));
    assert_eq!(content.paragraphs.len(), texts.len());
    for (paragraph, text) in content.paragraphs.iter().zip(&texts) {
        assert_eq!(&paragraph.original, text);
        assert_eq!(paragraph.translated, Translation::translated(format!("[en] {text}")));
    }
    assert!(content.html.is_none());
    assert_eq!(gateway.translator().calls(), 41);
}

#[tokio::test]
async fn empty_page_translates_to_empty_paragraphs() {
    let gateway = Gateway::new(Tagging::default());

    let content = translate_page(&gateway, &page("No title found", &[]), "auto", "en").await;
    assert!(content.paragraphs.is_empty());
    assert_eq!(gateway.translator().calls(), 1);
}

#[tokio::test]
async fn failed_units_do_not_stop_the_batch() {
    let gateway = Gateway::new(Tagging::default());
    let source = page(
        "Title",
        &["First paragraph", "FAIL in the middle", "Last paragraph"],
    );

    let content = translate_page(&gateway, &source, "dv", "en").await;

    let translated: Vec<String> = content
        .paragraphs
        .iter()
        .map(|p| p.translated.rendered())
        .collect();
    assert_eq!(
        translated,
        vec![
            "[en] First paragraph".to_string(),
            "Translation error: translation service error (403): Daily Limit Exceeded".to_string(),
            "[en] Last paragraph".to_string(),
        ]
    );
    assert!(content.paragraphs[1].translated.is_failed());
    assert_eq!(gateway.translator().calls(), 4);
}

#[tokio::test]
async fn auto_source_is_sent_as_detection() {
    let gateway = Gateway::new(Tagging::default());

    let out = translate_text(&gateway, "ދިވެހި", "auto", "en").await;
    assert_eq!(out, Translation::translated("[en] ދިވެހި"));
    assert_eq!(gateway.translator().calls(), 1);
}

#[tokio::test]
async fn extracted_page_round_trips_through_orchestrator() {
    let gateway = Gateway::new(Tagging::default());
    let scraped = extract(
        r#"<html><title>T</title><body><p>Hello world this is a test</p></body></html>"#,
    );

    let content = translate_content(&gateway, Ok(scraped), "en", "dv").await;
    let Ok(content) = content else {
        panic!("expected translated content");
    };
    assert_eq!(content.translated_title, Translation::translated("[dv] T"));
    assert_eq!(
        content.paragraphs[0].translated,
        Translation::translated("[dv] Hello world this is a test")
    );
}
