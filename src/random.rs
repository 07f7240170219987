//! Random wiki article selection.
//!
//! Wikipedia redirects `Special:Random` to an actual article; following the
//! redirect gives a concrete URL to scrape.

use std::time::Duration;

use tracing::warn;

use crate::fetch::Fetcher;

/// Dhivehi Wikipedia language code.
pub const DEFAULT_WIKI: &str = "dv";

/// Known-good Dhivehi article used when the random lookup fails.
pub const DHIVEHI_FALLBACK_ARTICLE: &str =
    "https://dv.wikipedia.org/wiki/%DE%89%DE%A6%DE%87%DE%A8_%DE%9E%DE%A6%DE%8A%DE%B0%DE%99%DE%A7";

/// Timeout for the redirect lookup.
pub const RANDOM_TIMEOUT: Duration = Duration::from_secs(5);

/// `Special:Random` URL for a wiki language code.
#[must_use]
pub fn random_page_url(wiki: &str) -> String {
    format!("https://{wiki}.wikipedia.org/wiki/Special:Random")
}

/// Article returned when the lookup fails.
#[must_use]
pub fn fallback_article(wiki: &str) -> String {
    if wiki == DEFAULT_WIKI {
        DHIVEHI_FALLBACK_ARTICLE.to_string()
    } else {
        format!("https://{wiki}.wikipedia.org/wiki/Main_Page")
    }
}

/// Resolve a random article URL, or the fallback article on any failure.
pub async fn random_article(fetcher: &Fetcher, wiki: &str) -> String {
    match fetcher.resolve(&random_page_url(wiki), RANDOM_TIMEOUT).await {
        Ok(url) => url,
        Err(err) => {
            warn!(wiki, error = %err, "random article lookup failed, using fallback");
            fallback_article(wiki)
        }
    }
}
