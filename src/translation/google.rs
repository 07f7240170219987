//! Google Cloud Translation (v2, REST) client.

use std::time::Duration;

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use tracing::debug;

use super::Translator;
use crate::config::Config;
use crate::error::{Error, Result};

/// Public endpoint of the service.
pub const DEFAULT_ENDPOINT: &str = "https://translation.googleapis.com";

const TRANSLATE_PATH: &str = "/language/translate/v2";

#[derive(Debug, Serialize)]
struct TranslateRequest<'a> {
    q: &'a str,
    target: &'a str,
    #[serde(skip_serializing_if = "Option::is_none")]
    source: Option<&'a str>,
    format: &'static str,
}

#[derive(Debug, Deserialize)]
struct TranslateResponse {
    data: TranslateData,
}

#[derive(Debug, Deserialize)]
struct TranslateData {
    translations: Vec<TranslatedText>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct TranslatedText {
    translated_text: String,
    #[serde(default)]
    detected_source_language: Option<String>,
}

#[derive(Debug, Deserialize)]
struct ErrorResponse {
    error: ErrorBody,
}

#[derive(Debug, Deserialize)]
struct ErrorBody {
    message: String,
}

/// Client for the v2 `translate` method.
#[derive(Debug, Clone)]
pub struct GoogleTranslate {
    client: reqwest::Client,
    endpoint: String,
    api_key: String,
}

impl GoogleTranslate {
    /// Build a client against the public endpoint.
    pub fn new(api_key: impl Into<String>, timeout: Duration) -> Result<Self> {
        let client = reqwest::Client::builder().timeout(timeout).build()?;
        Ok(Self {
            client,
            endpoint: DEFAULT_ENDPOINT.to_string(),
            api_key: api_key.into(),
        })
    }

    /// Point the client at another base URL (proxies, emulators).
    #[must_use]
    pub fn with_endpoint(mut self, endpoint: impl Into<String>) -> Self {
        self.endpoint = endpoint.into().trim_end_matches('/').to_string();
        self
    }

    /// Build from loaded configuration; fails when no API key is set.
    pub fn from_config(config: &Config) -> Result<Self> {
        let client = Self::new(config.require_api_key()?, config.translate_timeout)?;
        Ok(match &config.endpoint {
            Some(endpoint) => client.with_endpoint(endpoint.as_str()),
            None => client,
        })
    }

    #[must_use]
    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    fn url(&self) -> String {
        format!("{}{TRANSLATE_PATH}", self.endpoint)
    }
}

#[async_trait]
impl Translator for GoogleTranslate {
    async fn translate(&self, text: &str, source: Option<&str>, target: &str) -> Result<String> {
        let request = TranslateRequest {
            q: text,
            target,
            source,
            format: "text",
        };

        let response = self
            .client
            .post(self.url())
            .query(&[("key", self.api_key.as_str())])
            .json(&request)
            .send()
            .await?;

        let status = response.status();
        let body = response.text().await?;
        if !status.is_success() {
            return Err(Error::Service {
                status: status.as_u16(),
                message: error_message(&body),
            });
        }

        parse_response(&body)
    }
}

/// Pull the first translation out of a success body.
pub(crate) fn parse_response(body: &str) -> Result<String> {
    let parsed: TranslateResponse =
        serde_json::from_str(body).map_err(|e| Error::Decode(e.to_string()))?;
    let first = parsed
        .data
        .translations
        .into_iter()
        .next()
        .ok_or_else(|| Error::Decode("no translations in response".to_string()))?;

    if let Some(detected) = &first.detected_source_language {
        debug!(detected = detected.as_str(), "service detected source language");
    }
    Ok(first.translated_text)
}

/// `error.message` of an error body, or the raw body when it is not JSON.
pub(crate) fn error_message(body: &str) -> String {
    match serde_json::from_str::<ErrorResponse>(body) {
        Ok(parsed) => parsed.error.message,
        Err(_) if body.trim().is_empty() => "empty response".to_string(),
        Err(_) => body.trim().to_string(),
    }
}
