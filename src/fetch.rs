//! HTML fetching.
//!
//! Retrieves a page over HTTP(S), following redirects, and hands back the
//! decoded HTML together with the final resolved URL. Extraction never
//! fetches on its own; this is the collaborator in front of it.

use std::time::Duration;

use reqwest::header::CONTENT_TYPE;
use tracing::{debug, warn};
use url::Url;

use crate::encoding::decode_html;
use crate::error::{Error, Result};

/// Browser-like user agent; several sites refuse the reqwest default.
pub const DEFAULT_USER_AGENT: &str = "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/124.0 Safari/537.36";

/// A fetched page.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FetchedPage {
    /// Decoded HTML.
    pub html: String,

    /// URL after following redirects.
    pub final_url: String,
}

/// Parse and check that a location is an absolute http(s) URL.
pub fn parse_http_url(location: &str) -> Result<Url> {
    let url = Url::parse(location.trim()).map_err(|e| Error::InvalidUrl(format!("{location}: {e}")))?;
    match url.scheme() {
        "http" | "https" if url.host_str().is_some() => Ok(url),
        _ => Err(Error::InvalidUrl(location.to_string())),
    }
}

/// HTTP client for page fetches.
#[derive(Debug, Clone)]
pub struct Fetcher {
    client: reqwest::Client,
}

impl Fetcher {
    /// Build a fetcher sending the given user agent.
    pub fn new(user_agent: &str) -> Result<Self> {
        let client = reqwest::Client::builder()
            .user_agent(user_agent)
            .redirect(reqwest::redirect::Policy::limited(10))
            .build()?;
        Ok(Self { client })
    }

    /// Fetch a page, failing on transport errors, timeouts and non-2xx statuses.
    pub async fn fetch(&self, location: &str, timeout: Duration) -> Result<FetchedPage> {
        let url = parse_http_url(location)?;
        debug!(url = %url, timeout_secs = timeout.as_secs(), "fetching page");

        let response = self.client.get(url).timeout(timeout).send().await?;
        let status = response.status();
        let final_url = response.url().to_string();
        if !status.is_success() {
            warn!(status = status.as_u16(), url = final_url.as_str(), "fetch failed");
            return Err(Error::Status {
                status: status.as_u16(),
                url: final_url,
            });
        }

        let content_type = response
            .headers()
            .get(CONTENT_TYPE)
            .and_then(|v| v.to_str().ok())
            .map(ToString::to_string);
        let bytes = response.bytes().await?;

        Ok(FetchedPage {
            html: decode_html(&bytes, content_type.as_deref()),
            final_url,
        })
    }

    /// Follow redirects for `location` and return where they end.
    pub async fn resolve(&self, location: &str, timeout: Duration) -> Result<String> {
        let url = parse_http_url(location)?;
        let response = self.client.get(url).timeout(timeout).send().await?;
        Ok(response.url().to_string())
    }
}
