//! Selector Infrastructure
//!
//! Rule tables that decide which element holds the main content of a page
//! and which blocks inside it are navigation noise. Rules are data (tagged
//! variants) rather than inline conditionals, so callers can reorder or
//! extend them through [`crate::Options`].

use dom_query::{NodeRef, Selection};

pub mod container;
pub mod exclusion;

pub use container::{default_container_rules, select_container, ContainerRule};
pub use exclusion::ExclusionRules;

/// Query for first element matching the rule
///
/// Iterates through all descendants in document order and returns the first
/// element for which the rule returns true.
///
/// # Example
///
/// ```rust
/// use dhivehi_translator::selector;
/// use dhivehi_translator::dom;
///
/// let doc = dom::parse(r#"<div><p class="content">text</p></div>"#);
/// let root = doc.select("div");
///
/// let result = selector::query(&root, |node| dom::node_class(node).contains("content"));
/// assert!(result.is_some());
/// ```
#[must_use]
pub fn query<'a, F>(root: &Selection<'a>, rule: F) -> Option<NodeRef<'a>>
where
    F: Fn(&NodeRef<'a>) -> bool,
{
    root.select("*").nodes().iter().find(|node| rule(*node)).copied()
}

/// Query for all elements matching the rule
///
/// Iterates through all descendants in document order and collects all
/// elements for which the rule returns true.
///
/// # Example
///
/// ```rust
/// use dhivehi_translator::selector;
/// use dhivehi_translator::dom;
///
/// let doc = dom::parse(r#"<div><p class="item">1</p><p class="item">2</p></div>"#);
/// let root = doc.select("div");
///
/// let results = selector::query_all(&root, |node| dom::node_class(node) == "item");
/// assert_eq!(results.len(), 2);
/// ```
#[must_use]
pub fn query_all<'a, F>(root: &Selection<'a>, rule: F) -> Vec<NodeRef<'a>>
where
    F: Fn(&NodeRef<'a>) -> bool,
{
    root.select("*")
        .nodes()
        .iter()
        .filter(|node| rule(*node))
        .copied()
        .collect()
}
