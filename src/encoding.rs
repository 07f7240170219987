//! Character encoding detection for fetched pages.
//!
//! Many Maldivian news and government sites still serve legacy charsets or
//! omit the HTTP charset entirely. The charset is taken from the
//! `Content-Type` header first, then from `<meta>` declarations in the first
//! kilobyte, and defaults to UTF-8.

use encoding_rs::{Encoding, UTF_16BE, UTF_16LE, UTF_8};
use regex::Regex;
use std::sync::LazyLock;

/// `charset=` parameter of a `Content-Type` header value.
#[allow(clippy::expect_used)]
static HEADER_CHARSET_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"(?i)charset\s*=\s*["']?([^"';\s]+)"#).expect("valid regex")
});

/// `<meta charset="...">` or the http-equiv form.
#[allow(clippy::expect_used)]
static META_CHARSET_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"(?i)<meta[^>]+charset\s*=\s*["']?([^"'\s;>/]+)"#).expect("valid regex")
});

/// Number of leading bytes searched for a `<meta>` declaration.
const META_SCAN_LEN: usize = 1024;

fn lookup(label: &str) -> Option<&'static Encoding> {
    Encoding::for_label(label.trim().as_bytes())
}

/// Charset named by a `Content-Type` header value, if any.
#[must_use]
pub fn header_encoding(content_type: &str) -> Option<&'static Encoding> {
    HEADER_CHARSET_RE
        .captures(content_type)
        .and_then(|c| c.get(1))
        .and_then(|m| lookup(m.as_str()))
}

/// Charset declared by a `<meta>` tag near the top of the document.
///
/// A UTF-16 declaration is read as UTF-8: the tag was found by scanning the
/// bytes as ASCII, so the document cannot be UTF-16.
#[must_use]
pub fn meta_encoding(html: &[u8]) -> Option<&'static Encoding> {
    let head = String::from_utf8_lossy(&html[..html.len().min(META_SCAN_LEN)]);
    META_CHARSET_RE
        .captures(&head)
        .and_then(|c| c.get(1))
        .and_then(|m| lookup(m.as_str()))
        .map(|encoding| {
            if encoding == UTF_16LE || encoding == UTF_16BE {
                UTF_8
            } else {
                encoding
            }
        })
}

/// Decode page bytes to a UTF-8 string.
///
/// Invalid sequences become U+FFFD rather than failing.
///
/// # Examples
///
/// ```
/// use dhivehi_translator::encoding::decode_html;
///
/// let html = b"<html><body>Caf\xE9</body></html>";
/// let text = decode_html(html, Some("text/html; charset=ISO-8859-1"));
/// assert!(text.contains("Café"));
/// ```
#[must_use]
pub fn decode_html(bytes: &[u8], content_type: Option<&str>) -> String {
    let encoding = content_type
        .and_then(header_encoding)
        .or_else(|| meta_encoding(bytes))
        .unwrap_or(UTF_8);

    if encoding == UTF_8 {
        return String::from_utf8_lossy(bytes).into_owned();
    }

    let (decoded, _used, _had_errors) = encoding.decode(bytes);
    decoded.into_owned()
}
