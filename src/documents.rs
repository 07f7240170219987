//! Plain text extraction from uploaded documents.
//!
//! Supports PDF, DOCX and UTF-8 text. The format comes from the file
//! extension when there is one, otherwise from the leading magic bytes.

use std::fmt;
use std::io::{Cursor, Read};
use std::path::Path;
use std::str::FromStr;

use quick_xml::events::Event;
use quick_xml::Reader;
use tracing::debug;
use zip::ZipArchive;

use crate::error::{Error, Result};

const PDF_MAGIC: &[u8] = b"%PDF";
const ZIP_MAGIC: &[u8] = b"PK\x03\x04";
const UTF8_BOM: &str = "\u{FEFF}";

/// Body part of a DOCX package.
const DOCX_BODY: &str = "word/document.xml";

/// Document formats we can read text from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DocumentFormat {
    Pdf,
    Docx,
    Text,
}

impl DocumentFormat {
    /// Format implied by a file extension (case-insensitive).
    #[must_use]
    pub fn from_path(path: &Path) -> Option<Self> {
        let ext = path.extension()?.to_str()?;
        ext.parse().ok()
    }

    /// Format implied by leading bytes. Anything that is neither PDF nor a
    /// zip container but is valid UTF-8 counts as text.
    #[must_use]
    pub fn sniff(bytes: &[u8]) -> Option<Self> {
        if bytes.starts_with(PDF_MAGIC) {
            Some(Self::Pdf)
        } else if bytes.starts_with(ZIP_MAGIC) {
            Some(Self::Docx)
        } else if std::str::from_utf8(bytes).is_ok() {
            Some(Self::Text)
        } else {
            None
        }
    }

    /// Extension first, then content.
    pub fn detect(path: &Path, bytes: &[u8]) -> Result<Self> {
        Self::from_path(path)
            .or_else(|| Self::sniff(bytes))
            .ok_or_else(|| Error::UnsupportedDocument(path.display().to_string()))
    }
}

impl FromStr for DocumentFormat {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "pdf" => Ok(Self::Pdf),
            "docx" => Ok(Self::Docx),
            "txt" | "text" => Ok(Self::Text),
            other => Err(Error::UnsupportedDocument(other.to_string())),
        }
    }
}

impl fmt::Display for DocumentFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Pdf => "pdf",
            Self::Docx => "docx",
            Self::Text => "txt",
        })
    }
}

/// Extract the text of a document.
pub fn extract_text(bytes: &[u8], format: DocumentFormat) -> Result<String> {
    debug!(%format, bytes = bytes.len(), "extracting document text");
    match format {
        DocumentFormat::Pdf => pdf_text(bytes),
        DocumentFormat::Docx => docx_text(bytes),
        DocumentFormat::Text => plain_text(bytes),
    }
}

/// Read a file and extract its text, detecting the format.
pub fn extract_file(path: &Path, format: Option<DocumentFormat>) -> Result<String> {
    let bytes = std::fs::read(path).map_err(|e| Error::Document(format!("{}: {e}", path.display())))?;
    let format = match format {
        Some(format) => format,
        None => DocumentFormat::detect(path, &bytes)?,
    };
    extract_text(&bytes, format)
}

fn pdf_text(bytes: &[u8]) -> Result<String> {
    pdf_extract::extract_text_from_mem(bytes).map_err(|e| Error::Document(format!("pdf: {e}")))
}

fn plain_text(bytes: &[u8]) -> Result<String> {
    let text = std::str::from_utf8(bytes).map_err(|e| Error::Document(format!("text: {e}")))?;
    Ok(text.strip_prefix(UTF8_BOM).unwrap_or(text).to_string())
}

fn docx_text(bytes: &[u8]) -> Result<String> {
    let mut archive =
        ZipArchive::new(Cursor::new(bytes)).map_err(|e| Error::Document(format!("docx: {e}")))?;
    let mut xml = String::new();
    archive
        .by_name(DOCX_BODY)
        .map_err(|e| Error::Document(format!("docx: {DOCX_BODY}: {e}")))?
        .read_to_string(&mut xml)
        .map_err(|e| Error::Document(format!("docx: {e}")))?;
    docx_body_text(&xml)
}

/// Text of a WordprocessingML body: runs joined, one line per paragraph.
fn docx_body_text(xml: &str) -> Result<String> {
    let mut reader = Reader::from_str(xml);
    reader.trim_text(false);

    let mut out = String::new();
    let mut in_text = false;

    loop {
        match reader.read_event() {
            Ok(Event::Start(e)) => {
                if e.local_name().as_ref() == b"t" {
                    in_text = true;
                }
            }
            Ok(Event::End(e)) => match e.local_name().as_ref() {
                b"t" => in_text = false,
                b"p" => out.push('\n'),
                _ => {}
            },
            Ok(Event::Empty(e)) => match e.local_name().as_ref() {
                b"tab" => out.push('\t'),
                b"br" | b"cr" | b"p" => out.push('\n'),
                _ => {}
            },
            Ok(Event::Text(e)) if in_text => {
                let text = e.unescape().map_err(|e| Error::Document(format!("docx: {e}")))?;
                out.push_str(&text);
            }
            Ok(Event::Eof) => break,
            Ok(_) => {}
            Err(err) => return Err(Error::Document(format!("docx: {err}"))),
        }
    }

    Ok(out)
}
