use async_trait::async_trait;
use dhivehi_translator::extractor::index_annotated;
use dhivehi_translator::translation::translate_page;
use dhivehi_translator::{
    dom, extract_with_options, Error, Gateway, Options, Result, Translator, TRANSLATE_ID_ATTR,
};

const PAGE: &str = r#"
<html>
  <head><title>ދިވެހި ބަސް</title></head>
  <body>
    <nav><a href="/">މައި ޞަފްޙާ</a></nav>
    <div id="mw-content-text">
      <h1>ދިވެހި ބަސް</h1>
      <p>ދިވެހި ބަހަކީ ދިވެހިރާއްޖޭގެ ރަސްމީ ބަހެވެ.</p>
      <p>Mixed <b>inline</b> markup is not annotated</p>
      <ul><li>ފުރަތަމަ</li><li>FAIL ދެވަނަ</li></ul>
    </div>
    <button>ފޮނުވާ</button>
  </body>
</html>
"#;

struct Echo;

#[async_trait]
impl Translator for Echo {
    async fn translate(&self, text: &str, _source: Option<&str>, target: &str) -> Result<String> {
        if text.starts_with("FAIL") {
            return Err(Error::Timeout);
        }
        Ok(format!("<{target}> {text}"))
    }
}

fn preserve() -> Options {
    Options {
        preserve_structure: true,
        ..Options::default()
    }
}

#[test]
fn annotation_covers_whole_document() {
    let page = extract_with_options(PAGE, &preserve());
    let Some(annotated) = page.annotated else {
        panic!("expected annotated html");
    };

    let tags: Vec<&str> = annotated.elements.iter().map(|e| e.tag.as_str()).collect();
    assert_eq!(tags, vec!["a", "h1", "p", "li", "li", "button"]);
    assert_eq!(annotated.elements[0].text, "މައި ޞަފްޙާ");

    // the nav link is annotated but never a paragraph
    assert!(!page.paragraphs.iter().any(|p| p.contains("މައި")));
}

#[test]
fn every_id_appears_exactly_once() {
    let page = extract_with_options(PAGE, &preserve());
    let Some(annotated) = page.annotated else {
        panic!("expected annotated html");
    };

    assert_eq!(
        annotated.html.matches(TRANSLATE_ID_ATTR).count(),
        annotated.elements.len()
    );
    for element in &annotated.elements {
        assert!(element.id.starts_with("translate-"));
        assert_eq!(annotated.html.matches(element.id.as_str()).count(), 1);
    }
}

#[test]
fn ids_differ_between_runs() {
    let first = extract_with_options(PAGE, &preserve()).annotated;
    let second = extract_with_options(PAGE, &preserve()).annotated;
    let (Some(first), Some(second)) = (first, second) else {
        panic!("expected annotated html");
    };
    assert_ne!(first.elements[0].id, second.elements[0].id);
}

#[tokio::test]
async fn translated_html_carries_each_translation() {
    let page = extract_with_options(PAGE, &preserve());
    let gateway = Gateway::new(Echo);

    let content = translate_page(&gateway, &page, "dv", "en").await;
    let Some(html) = content.html else {
        panic!("expected translated html");
    };

    let Some(annotated) = &page.annotated else {
        panic!("expected annotated html");
    };
    let ids: Vec<&str> = html.elements.iter().map(|e| e.id.as_str()).collect();
    let source_ids: Vec<&str> = annotated.elements.iter().map(|e| e.id.as_str()).collect();
    assert_eq!(ids, source_ids);

    let doc = dom::parse(&html.html);
    let index = index_annotated(&doc);
    assert_eq!(index.len(), html.elements.len());
    for element in &html.elements {
        let Some(node) = index.get(&element.id) else {
            panic!("{} missing from translated html", element.id);
        };
        assert_eq!(node.text().to_string(), element.translated.rendered());
    }

    // translated text is inserted as text, not markup
    assert!(doc.select("en").is_empty());

    let failed: Vec<&str> = html
        .elements
        .iter()
        .filter(|e| e.translated.is_failed())
        .map(|e| e.original.as_str())
        .collect();
    assert_eq!(failed, vec!["FAIL ދެވަނަ"]);
}

#[tokio::test]
async fn page_without_structure_has_no_html() {
    let page = extract_with_options(PAGE, &Options::default());
    let content = translate_page(&Gateway::new(Echo), &page, "dv", "en").await;
    assert!(content.html.is_none());
    assert_eq!(content.paragraphs.len(), page.paragraphs.len());
}
