//! Boilerplate exclusion rules
//!
//! Headings, paragraphs and divs that live in page chrome (navigation,
//! footers, headers, sidebars) are skipped during paragraph extraction.

use dom_query::NodeRef;

use crate::dom;

/// Regions whose content is treated as page chrome.
pub const DEFAULT_REGION_TAGS: &[&str] = &["nav", "footer", "header", "aside"];

/// Sectioning elements considered when looking for the enclosing region.
pub const DEFAULT_STRUCTURAL_TAGS: &[&str] = &[
    "nav", "footer", "header", "aside", "main", "article", "section", "body", "html",
];

/// Class substrings marking page chrome.
pub const DEFAULT_CLASS_TOKENS: &[&str] = &["nav", "menu", "footer", "header", "sidebar"];

/// Ancestor and class filters for candidate blocks.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExclusionRules {
    /// Excluded when the nearest structural ancestor has one of these tags.
    pub region_tags: Vec<String>,

    /// Tags that count as structural when walking up from a candidate.
    pub structural_tags: Vec<String>,

    /// Excluded when the candidate's class attribute contains any of these
    /// (case-insensitive).
    pub class_tokens: Vec<String>,
}

impl Default for ExclusionRules {
    fn default() -> Self {
        Self {
            region_tags: to_owned(DEFAULT_REGION_TAGS),
            structural_tags: to_owned(DEFAULT_STRUCTURAL_TAGS),
            class_tokens: to_owned(DEFAULT_CLASS_TOKENS),
        }
    }
}

fn to_owned(items: &[&str]) -> Vec<String> {
    items.iter().map(ToString::to_string).collect()
}

impl ExclusionRules {
    /// Returns true if the candidate should be skipped.
    #[must_use]
    pub fn excludes(&self, node: &NodeRef) -> bool {
        self.in_excluded_region(node) || self.has_excluded_class(node)
    }

    /// The nearest structural ancestor is one of the excluded regions.
    #[must_use]
    pub fn in_excluded_region(&self, node: &NodeRef) -> bool {
        let mut current = node.parent();
        while let Some(ancestor) = current {
            if let Some(tag) = dom::node_tag(&ancestor) {
                if self.structural_tags.iter().any(|t| *t == tag) {
                    return self.region_tags.iter().any(|t| *t == tag);
                }
            }
            current = ancestor.parent();
        }
        false
    }

    /// The class attribute contains an excluded token.
    #[must_use]
    pub fn has_excluded_class(&self, node: &NodeRef) -> bool {
        let class = dom::node_class(node).to_lowercase();
        if class.is_empty() {
            return false;
        }
        self.class_tokens
            .iter()
            .any(|token| class.contains(token.to_lowercase().as_str()))
    }
}
