//! Supported language codes.

use serde::Serialize;

/// Sentinel asking the service to infer the source language.
pub const AUTO_DETECT: &str = "auto";

pub const DHIVEHI: &str = "dv";
pub const ENGLISH: &str = "en";
pub const ARABIC: &str = "ar";
pub const HINDI: &str = "hi";
pub const URDU: &str = "ur";

/// A display name paired with its language code.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Language {
    pub name: &'static str,
    pub code: &'static str,
}

/// Languages offered as a translation source.
pub const SOURCE_LANGUAGES: &[Language] = &[
    Language { name: "Auto-detect", code: AUTO_DETECT },
    Language { name: "Dhivehi", code: DHIVEHI },
    Language { name: "English", code: ENGLISH },
];

/// Languages offered as a translation target.
pub const TARGET_LANGUAGES: &[Language] = &[
    Language { name: "English", code: ENGLISH },
    Language { name: "Dhivehi", code: DHIVEHI },
    Language { name: "Arabic", code: ARABIC },
    Language { name: "Hindi", code: HINDI },
    Language { name: "Urdu", code: URDU },
];

/// Returns true for the auto-detect sentinel.
#[inline]
#[must_use]
pub fn is_auto(code: &str) -> bool {
    code == AUTO_DETECT
}
