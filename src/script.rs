//! Thaana script detection.
//!
//! Dhivehi is written in Thaana, which occupies its own Unicode block
//! (U+0780..=U+07BF). Presence of a single code point from that block is
//! enough to call a string Dhivehi.

use crate::translation::language::{AUTO_DETECT, DHIVEHI, ENGLISH};

/// First code point of the Thaana block.
pub const THAANA_START: char = '\u{0780}';

/// Last code point of the Thaana block.
pub const THAANA_END: char = '\u{07BF}';

/// Returns true if `c` lies in the Thaana block.
#[inline]
#[must_use]
pub fn is_thaana(c: char) -> bool {
    (THAANA_START..=THAANA_END).contains(&c)
}

/// Returns true if the text contains at least one Thaana code point.
///
/// No normalization and no minimum length: the empty string is `false`.
///
/// # Example
///
/// ```rust
/// use dhivehi_translator::is_dhivehi_script;
///
/// assert!(is_dhivehi_script("ދިވެހި"));
/// assert!(!is_dhivehi_script("Dhivehi"));
/// ```
#[must_use]
pub fn is_dhivehi_script(text: &str) -> bool {
    text.chars().any(is_thaana)
}

/// Resolve the `auto` sentinel into a concrete source language.
///
/// Explicit languages are returned as given. For `auto`, the page is taken
/// to be Dhivehi when either the title or the first paragraph carries
/// Thaana, and English otherwise.
#[must_use]
pub fn resolve_source_language<'a>(
    requested: &'a str,
    title: &str,
    first_paragraph: Option<&str>,
) -> &'a str {
    if requested != AUTO_DETECT {
        return requested;
    }

    if is_dhivehi_script(title) || first_paragraph.is_some_and(is_dhivehi_script) {
        DHIVEHI
    } else {
        ENGLISH
    }
}
