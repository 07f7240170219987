//! Configuration options for content extraction.
//!
//! The `Options` struct controls how a content container is chosen, which
//! blocks count as paragraphs, and whether the document is annotated for
//! in-place translation.

use crate::selector::container::{default_container_rules, ContainerRule};
use crate::selector::exclusion::ExclusionRules;

/// How fallback strategies decide that a candidate is already collected.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DedupeMode {
    /// Skip a candidate only if the exact same string is already collected.
    #[default]
    Exact,

    /// Skip a candidate if any collected paragraph occurs inside it.
    ///
    /// Lower recall: a container `div` that wraps an already collected
    /// paragraph is dropped entirely.
    Substring,
}

impl DedupeMode {
    /// Returns true if `candidate` should be skipped given `collected`.
    #[must_use]
    pub fn is_duplicate(self, candidate: &str, collected: &[String]) -> bool {
        match self {
            DedupeMode::Exact => collected.iter().any(|p| p == candidate),
            DedupeMode::Substring => collected.iter().any(|p| candidate.contains(p.as_str())),
        }
    }
}

/// Tags that may be annotated with a translation id when structure is preserved.
pub const DEFAULT_ANNOTATE_TAGS: &[&str] = &[
    "p", "h1", "h2", "h3", "h4", "h5", "h6", "span", "div", "a", "button", "li",
];

/// Configuration options for content extraction.
///
/// All fields are public for easy configuration. Use `Default::default()`
/// for standard settings.
///
/// # Example
///
/// ```rust
/// use dhivehi_translator::Options;
///
/// let options = Options {
///     preserve_structure: true,
///     ..Options::default()
/// };
/// assert_eq!(options.min_primary_len, 10);
/// ```
#[derive(Debug, Clone)]
pub struct Options {
    /// Annotate text-bearing elements of the whole document with unique ids
    /// and return the annotated HTML alongside the paragraphs.
    ///
    /// Default: `false`
    pub preserve_structure: bool,

    /// Source URL recorded in the result.
    ///
    /// Default: `None`
    pub url: Option<String>,

    /// Container rules in priority order. First rule with a non-empty match wins.
    ///
    /// Default: [`default_container_rules`]
    pub container_rules: Vec<ContainerRule>,

    /// Ancestor and class filters applied to headings, paragraphs and divs.
    ///
    /// Default: [`ExclusionRules::default`]
    pub exclusions: ExclusionRules,

    /// Headings and paragraphs must be longer than this (characters).
    ///
    /// Default: `10`
    pub min_primary_len: usize,

    /// Div blocks and bare text nodes must be longer than this (characters).
    ///
    /// Default: `20`
    pub min_fallback_len: usize,

    /// A fallback strategy runs while at most this many paragraphs were found.
    ///
    /// Default: `1`
    pub sparse_threshold: usize,

    /// Duplicate detection used by the fallback strategies.
    ///
    /// Default: [`DedupeMode::Exact`]
    pub dedupe: DedupeMode,

    /// Tags eligible for annotation when `preserve_structure` is set.
    ///
    /// Default: [`DEFAULT_ANNOTATE_TAGS`]
    pub annotate_tags: Vec<String>,
}

impl Default for Options {
    fn default() -> Self {
        Self {
            preserve_structure: false,
            url: None,
            container_rules: default_container_rules(),
            exclusions: ExclusionRules::default(),
            min_primary_len: 10,
            min_fallback_len: 20,
            sparse_threshold: 1,
            dedupe: DedupeMode::Exact,
            annotate_tags: DEFAULT_ANNOTATE_TAGS.iter().map(ToString::to_string).collect(),
        }
    }
}
