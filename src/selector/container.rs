//! Content container rules
//!
//! These rules identify the single element that represents the main content
//! of a page. The table is a priority list, not a score: the first rule
//! whose first match is non-empty wins regardless of size.

use std::fmt;

use dom_query::{Document, NodeRef, Selection};

use crate::dom;
use crate::selector::query;

/// One entry of the container priority table.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ContainerRule {
    /// Element with the given `id`, optionally restricted to one tag.
    ElementId { tag: Option<String>, id: String },

    /// First element with the given tag name.
    Tag(String),

    /// Element whose class attribute contains any token (case-insensitive),
    /// optionally restricted to one tag.
    ClassTokens { tag: Option<String>, tokens: Vec<String> },

    /// The document body.
    Body,
}

impl ContainerRule {
    /// Rule matching an element id.
    #[must_use]
    pub fn element_id(tag: Option<&str>, id: &str) -> Self {
        ContainerRule::ElementId {
            tag: tag.map(str::to_ascii_lowercase),
            id: id.to_string(),
        }
    }

    /// Rule matching a tag name.
    #[must_use]
    pub fn tag(tag: &str) -> Self {
        ContainerRule::Tag(tag.to_ascii_lowercase())
    }

    /// Rule matching class tokens.
    #[must_use]
    pub fn class_tokens(tag: Option<&str>, tokens: &[&str]) -> Self {
        ContainerRule::ClassTokens {
            tag: tag.map(str::to_ascii_lowercase),
            tokens: tokens.iter().map(|t| t.to_lowercase()).collect(),
        }
    }

    /// Returns true if the node satisfies this rule.
    #[must_use]
    pub fn matches(&self, node: &NodeRef) -> bool {
        let Some(tag) = dom::node_tag(node) else {
            return false;
        };

        match self {
            ContainerRule::ElementId { tag: want, id } => {
                tag_allowed(want.as_deref(), &tag)
                    && node.attr("id").is_some_and(|value| &*value == id.as_str())
            }
            ContainerRule::Tag(want) => tag == *want,
            ContainerRule::ClassTokens { tag: want, tokens } => {
                if !tag_allowed(want.as_deref(), &tag) {
                    return false;
                }
                let class = dom::node_class(node).to_lowercase();
                !class.is_empty() && tokens.iter().any(|token| class.contains(token.as_str()))
            }
            ContainerRule::Body => tag == "body",
        }
    }

    /// First element in document order matching this rule.
    #[must_use]
    pub fn find<'a>(&self, doc: &'a Document) -> Option<NodeRef<'a>> {
        if let ContainerRule::Body = self {
            return doc.select("body").nodes().first().copied();
        }
        query(&doc.select("html"), |node| self.matches(node))
    }
}

fn tag_allowed(want: Option<&str>, tag: &str) -> bool {
    want.is_none_or(|want| want == tag)
}

impl fmt::Display for ContainerRule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ContainerRule::ElementId { tag, id } => {
                write!(f, "{}#{id}", tag.as_deref().unwrap_or("*"))
            }
            ContainerRule::Tag(tag) => write!(f, "{tag}"),
            ContainerRule::ClassTokens { tag, tokens } => {
                write!(f, "{}[class~{}]", tag.as_deref().unwrap_or("*"), tokens.join("|"))
            }
            ContainerRule::Body => write!(f, "body"),
        }
    }
}

/// Default container table, in priority order.
///
/// 1. MediaWiki content text (`div#mw-content-text`)
/// 2. `<main>`
/// 3. `<article>`
/// 4. `div#content`
/// 5. div with class containing content/main/article/body
/// 6. div with class containing post/entry/text/blog
/// 7. `<body>`
///
/// Rules 1 and 4-6 only match `div` elements, so an `id="content"` or a
/// `class="post"` on any other tag is not a container by default. Build the
/// rules with `None` as the tag to match any element.
#[must_use]
pub fn default_container_rules() -> Vec<ContainerRule> {
    vec![
        ContainerRule::element_id(Some("div"), "mw-content-text"),
        ContainerRule::tag("main"),
        ContainerRule::tag("article"),
        ContainerRule::element_id(Some("div"), "content"),
        ContainerRule::class_tokens(Some("div"), &["content", "main", "article", "body"]),
        ContainerRule::class_tokens(Some("div"), &["post", "entry", "text", "blog"]),
        ContainerRule::Body,
    ]
}

/// Pick the content container for a document.
///
/// Each rule contributes its first match; a match holding no element and
/// no non-blank text is skipped. Returns the index of the winning rule (`None` when nothing
/// matched and the body was used as a last resort) and the container.
#[must_use]
pub fn select_container<'a>(
    doc: &'a Document,
    rules: &[ContainerRule],
) -> (Option<usize>, Selection<'a>) {
    for (index, rule) in rules.iter().enumerate() {
        if let Some(node) = rule.find(doc) {
            if dom::has_content(&node) {
                return (Some(index), Selection::from(node));
            }
        }
    }

    let body = doc.select("body");
    if body.exists() {
        (None, body)
    } else {
        (None, doc.select("html"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn container_text(html: &str) -> (Option<usize>, String) {
        let doc = dom::parse(html);
        let (index, sel) = select_container(&doc, &default_container_rules());
        (index, dom::text_content(&sel).trim().to_string())
    }

    #[test]
    fn mediawiki_container_wins_over_main() {
        let (index, text) = container_text(
            r#"<body><main>MAIN</main><div id="mw-content-text">WIKI</div></body>"#,
        );
        assert_eq!(index, Some(0));
        assert_eq!(text, "WIKI");
    }

    #[test]
    fn main_wins_over_article() {
        let (index, text) =
            container_text(r#"<body><article>ARTICLE</article><main>MAIN</main></body>"#);
        assert_eq!(index, Some(1));
        assert_eq!(text, "MAIN");
    }

    #[test]
    fn first_match_wins_regardless_of_size() {
        let (_, text) = container_text(
            r#"<body>
                <div class="article-body">tiny</div>
                <div class="post">A much longer block of text that would win a size contest</div>
            </body>"#,
        );
        assert_eq!(text, "tiny");
    }

    #[test]
    fn class_tokens_are_case_insensitive() {
        let rule = ContainerRule::class_tokens(Some("div"), &["content"]);
        let doc = dom::parse(r#"<div class="MainContent">x</div>"#);
        let node = doc.select("div").nodes()[0];
        assert!(rule.matches(&node));
    }

    #[test]
    fn class_rule_respects_tag_restriction() {
        let rule = ContainerRule::class_tokens(Some("div"), &["text"]);
        let doc = dom::parse(r#"<a class="screen-reader-text">Skip</a>"#);
        let node = doc.select("a").nodes()[0];
        assert!(!rule.matches(&node));

        let any_tag = ContainerRule::class_tokens(None, &["text"]);
        assert!(any_tag.matches(&node));
    }

    #[test]
    fn empty_match_falls_through_to_next_rule() {
        let (index, text) =
            container_text(r#"<body><main></main><article>ARTICLE</article></body>"#);
        assert_eq!(index, Some(2));
        assert_eq!(text, "ARTICLE");
    }

    #[test]
    fn whitespace_only_match_falls_through() {
        let (index, text) = container_text(
            "<body><main>\n   </main><article><p>Article paragraph text here</p></article></body>",
        );
        assert_eq!(index, Some(2));
        assert_eq!(text, "Article paragraph text here");
    }

    #[test]
    fn comment_only_match_falls_through() {
        let (index, text) = container_text(
            r#"<body><main><!-- app root --></main><article><p>Article paragraph text here</p></article></body>"#,
        );
        assert_eq!(index, Some(2));
        assert_eq!(text, "Article paragraph text here");
    }

    #[test]
    fn body_is_the_last_resort() {
        let (index, text) = container_text(r#"<body><p>Only a paragraph</p></body>"#);
        assert_eq!(index, Some(6));
        assert_eq!(text, "Only a paragraph");
    }

    #[test]
    fn custom_table_without_body_still_returns_body() {
        let doc = dom::parse(r#"<body><p>Loose text</p></body>"#);
        let (index, sel) = select_container(&doc, &[ContainerRule::tag("main")]);
        assert_eq!(index, None);
        assert_eq!(dom::tag_name(&sel), Some("body".to_string()));
    }

    #[test]
    fn rule_display_is_readable() {
        let rules = default_container_rules();
        assert_eq!(rules[0].to_string(), "div#mw-content-text");
        assert_eq!(rules[1].to_string(), "main");
        assert_eq!(rules[4].to_string(), "div[class~content|main|article|body]");
        assert_eq!(rules[6].to_string(), "body");
    }
}
