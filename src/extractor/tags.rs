//! Tag sets used by the paragraph cascade.

/// Tags visited by the primary strategy: headings and paragraphs.
pub const PRIMARY_TAGS: &[&str] = &["p", "h1", "h2", "h3", "h4", "h5", "h6"];

/// Generic block tags visited by the block fallback.
pub const BLOCK_TAGS: &[&str] = &["div"];

/// Text inside these elements is never content.
pub const NON_CONTENT_TEXT_PARENTS: &[&str] = &["script", "style", "meta", "link", "noscript"];

/// Returns true if `tag` is in `set`.
#[inline]
#[must_use]
pub fn is_one_of(tag: &str, set: &[&str]) -> bool {
    set.contains(&tag)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn primary_tags_cover_headings_and_paragraphs() {
        assert!(is_one_of("p", PRIMARY_TAGS));
        for heading in ["h1", "h2", "h3", "h4", "h5", "h6"] {
            assert!(is_one_of(heading, PRIMARY_TAGS));
        }
        assert!(!is_one_of("div", PRIMARY_TAGS));
    }

    #[test]
    fn non_content_parents() {
        assert!(is_one_of("script", NON_CONTENT_TEXT_PARENTS));
        assert!(is_one_of("noscript", NON_CONTENT_TEXT_PARENTS));
        assert!(!is_one_of("span", NON_CONTENT_TEXT_PARENTS));
    }
}
