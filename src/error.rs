//! Error types for dhivehi-translator.
//!
//! Extraction itself never fails; these errors come from the collaborators
//! around it (page fetches, document readers, the translation service).

/// Error type for fetch, document and translation operations.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// Transport-level HTTP failure (DNS, TLS, connection reset).
    #[error("HTTP request failed: {0}")]
    Http(String),

    /// The server answered with a non-success status.
    #[error("HTTP {status} for {url}")]
    Status { status: u16, url: String },

    /// The request did not complete within its timeout.
    #[error("request timed out")]
    Timeout,

    /// The given location is not an absolute http(s) URL.
    #[error("invalid URL: {0}")]
    InvalidUrl(String),

    /// The translation service rejected the request.
    #[error("translation service error ({status}): {message}")]
    Service { status: u16, message: String },

    /// The translation service answered with an unexpected payload.
    #[error("unexpected translation response: {0}")]
    Decode(String),

    /// The document format is not one we can read.
    #[error("unsupported document format: {0}")]
    UnsupportedDocument(String),

    /// A PDF, DOCX or text document could not be read.
    #[error("failed to read document: {0}")]
    Document(String),

    /// Missing or malformed configuration.
    #[error("configuration error: {0}")]
    Config(String),
}

impl From<reqwest::Error> for Error {
    fn from(err: reqwest::Error) -> Self {
        if err.is_timeout() {
            return Error::Timeout;
        }
        if let Some(status) = err.status() {
            return Error::Status {
                status: status.as_u16(),
                url: err.url().map(ToString::to_string).unwrap_or_default(),
            };
        }
        Error::Http(err.to_string())
    }
}

/// Result type alias for fallible operations.
pub type Result<T> = std::result::Result<T, Error>;
