//! Translation gateway.
//!
//! Wraps a [`Translator`] so that a single unit of text always yields a
//! [`Translation`]: identical source/target languages and blank text never
//! reach the service, and service failures come back as `Failed` values.

use tracing::{debug, warn};

use super::language::is_auto;
use super::{Translation, Translator};

/// Default number of in-flight service calls per page.
pub const DEFAULT_CONCURRENCY: usize = 4;

/// Per-unit translation front for a service.
#[derive(Debug, Clone)]
pub struct Gateway<T> {
    translator: T,
    concurrency: usize,
}

impl<T: Translator> Gateway<T> {
    pub fn new(translator: T) -> Self {
        Self {
            translator,
            concurrency: DEFAULT_CONCURRENCY,
        }
    }

    /// Bound the number of concurrent service calls. Zero is treated as one.
    #[must_use]
    pub fn with_concurrency(mut self, concurrency: usize) -> Self {
        self.concurrency = concurrency.max(1);
        self
    }

    #[must_use]
    pub fn concurrency(&self) -> usize {
        self.concurrency
    }

    pub fn translator(&self) -> &T {
        &self.translator
    }

    /// Translate one unit of text.
    pub async fn translate(&self, text: &str, source: &str, target: &str) -> Translation {
        if source == target && !is_auto(source) {
            return Translation::translated(text);
        }
        if text.trim().is_empty() {
            return Translation::translated(text);
        }

        let source = (!is_auto(source)).then_some(source);
        match self.translator.translate(text, source, target).await {
            Ok(translated) => {
                debug!(chars = text.chars().count(), target, "translated unit");
                Translation::translated(translated)
            }
            Err(err) => {
                warn!(error = %err, target, "translation failed");
                Translation::failed(err.to_string())
            }
        }
    }
}
