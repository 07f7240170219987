//! Translation service seam, gateway and content orchestration.
//!
//! # Module Structure
//!
//! - `language`: Supported source/target codes
//! - `google`: Google Cloud Translation v2 client
//! - `gateway`: Per-unit translation that never fails past its boundary
//! - `content`: Translating a whole scraped page
//!
//! The external service is reached only through the [`Translator`] trait, so
//! tests and alternative backends plug in without touching the pipeline.

pub mod content;
pub mod gateway;
pub mod google;
pub mod language;

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use crate::error::Result;

pub use content::{translate_content, translate_page, translate_text};
pub use gateway::{Gateway, DEFAULT_CONCURRENCY};
pub use google::GoogleTranslate;

/// Prefix of the in-band marker rendered for a failed unit.
pub const ERROR_MARKER: &str = "Translation error:";

/// An external machine-translation service.
#[async_trait]
pub trait Translator: Send + Sync {
    /// Translate `text` into `target`. `source` is `None` to let the service
    /// detect the language.
    async fn translate(&self, text: &str, source: Option<&str>, target: &str) -> Result<String>;
}

#[async_trait]
impl<T: Translator + ?Sized> Translator for std::sync::Arc<T> {
    async fn translate(&self, text: &str, source: Option<&str>, target: &str) -> Result<String> {
        (**self).translate(text, source, target).await
    }
}

/// Outcome of translating one unit of text.
///
/// A failed unit is a value, not an error: callers composing many units keep
/// going and decide later how to present the failure.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum Translation {
    Translated { text: String },
    Failed { message: String },
}

impl Translation {
    #[must_use]
    pub fn translated(text: impl Into<String>) -> Self {
        Self::Translated { text: text.into() }
    }

    #[must_use]
    pub fn failed(message: impl Into<String>) -> Self {
        Self::Failed {
            message: message.into(),
        }
    }

    #[must_use]
    pub fn is_failed(&self) -> bool {
        matches!(self, Self::Failed { .. })
    }

    /// Text to show in place of the unit: the translation, or the error marker.
    #[must_use]
    pub fn rendered(&self) -> String {
        match self {
            Self::Translated { text } => text.clone(),
            Self::Failed { message } => format!("{ERROR_MARKER} {message}"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn failed_unit_renders_marker() {
        let t = Translation::failed("quota exceeded");
        assert!(t.is_failed());
        assert_eq!(t.rendered(), "Translation error: quota exceeded");
    }

    #[test]
    fn empty_translation_is_not_a_failure() {
        let t = Translation::translated("");
        assert!(!t.is_failed());
        assert_eq!(t.rendered(), "");
    }

    #[test]
    fn serializes_with_status_tag() {
        let json = serde_json::to_value(Translation::translated("hi")).unwrap_or_default();
        assert_eq!(json["status"], "translated");
        assert_eq!(json["text"], "hi");
    }
}
