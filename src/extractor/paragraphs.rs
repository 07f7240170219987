//! Paragraph cascade.
//!
//! Three strategies run against the selected container, each stricter one
//! first. A looser strategy only engages while the collected sequence is
//! still sparse, and it appends to the sequence rather than replacing it.
//!
//! 1. `Primary`: headings and paragraphs longer than `min_primary_len`.
//! 2. `Blocks`: divs longer than `min_fallback_len`, deduplicated.
//! 3. `TextNodes`: bare text nodes longer than `min_fallback_len`, deduplicated.

use std::fmt;

use dom_query::{NodeRef, Selection};
use tracing::debug;

use super::tags::{is_one_of, BLOCK_TAGS, NON_CONTENT_TEXT_PARENTS, PRIMARY_TAGS};
use crate::dom;
use crate::options::Options;
use crate::selector::query_all;

/// Extraction strategy, in order of decreasing precision.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Strategy {
    Primary,
    Blocks,
    TextNodes,
}

impl fmt::Display for Strategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Strategy::Primary => "primary",
            Strategy::Blocks => "blocks",
            Strategy::TextNodes => "text-nodes",
        };
        f.write_str(name)
    }
}

/// Accumulates paragraphs across strategies.
struct Collector<'o> {
    options: &'o Options,
    paragraphs: Vec<String>,
}

impl<'o> Collector<'o> {
    fn new(options: &'o Options) -> Self {
        Self {
            options,
            paragraphs: Vec::new(),
        }
    }

    fn is_sparse(&self) -> bool {
        self.paragraphs.len() <= self.options.sparse_threshold
    }

    /// Keep `text` if it is long enough; fallback strategies also dedupe.
    fn offer(&mut self, text: &str, strategy: Strategy) -> bool {
        let text = text.trim();
        let min_len = match strategy {
            Strategy::Primary => self.options.min_primary_len,
            Strategy::Blocks | Strategy::TextNodes => self.options.min_fallback_len,
        };
        if text.chars().count() <= min_len {
            return false;
        }
        if strategy != Strategy::Primary && self.options.dedupe.is_duplicate(text, &self.paragraphs)
        {
            return false;
        }
        self.paragraphs.push(text.to_string());
        true
    }

    fn run(&mut self, container: &Selection, strategy: Strategy) {
        let before = self.paragraphs.len();
        match strategy {
            Strategy::Primary => self.elements(container, PRIMARY_TAGS, strategy),
            Strategy::Blocks => self.elements(container, BLOCK_TAGS, strategy),
            Strategy::TextNodes => self.text_nodes(container),
        }
        debug!(
            strategy = %strategy,
            added = self.paragraphs.len() - before,
            total = self.paragraphs.len(),
            "paragraph strategy finished"
        );
    }

    fn elements(&mut self, container: &Selection, tags: &[&str], strategy: Strategy) {
        let options = self.options;
        let exclusions = &options.exclusions;
        let candidates = query_all(container, |node| {
            dom::node_tag(node).is_some_and(|tag| is_one_of(&tag, tags))
        });

        for node in candidates {
            if exclusions.excludes(&node) {
                continue;
            }
            self.offer(&node.text(), strategy);
        }
    }

    fn text_nodes(&mut self, container: &Selection) {
        let Some(root) = container.nodes().first().copied() else {
            return;
        };

        for node in root.descendants() {
            if !node.is_text() || has_non_content_parent(&node) {
                continue;
            }
            self.offer(&node.text(), Strategy::TextNodes);
        }
    }
}

fn has_non_content_parent(node: &NodeRef) -> bool {
    node.parent()
        .and_then(|parent| dom::node_tag(&parent))
        .is_some_and(|tag| is_one_of(&tag, NON_CONTENT_TEXT_PARENTS))
}

/// Run the cascade over a container and return paragraphs in order.
#[must_use]
pub fn collect_paragraphs(container: &Selection, options: &Options) -> Vec<String> {
    let mut collector = Collector::new(options);

    collector.run(container, Strategy::Primary);
    for strategy in [Strategy::Blocks, Strategy::TextNodes] {
        if !collector.is_sparse() {
            break;
        }
        collector.run(container, strategy);
    }

    collector.paragraphs
}
