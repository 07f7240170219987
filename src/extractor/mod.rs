//! Paragraph extraction and structure annotation.
//!
//! # Module Structure
//!
//! - `tags`: Tag sets for each strategy
//! - `paragraphs`: The primary / blocks / text-nodes cascade
//! - `annotate`: `data-translate-id` tagging and translated-text splicing
//!
//! # Usage
//!
//! ```rust
//! use dhivehi_translator::extractor::paragraphs::collect_paragraphs;
//! use dhivehi_translator::{dom, Options};
//!
//! let doc = dom::parse("<body><p>Some paragraph text</p></body>");
//! let paragraphs = collect_paragraphs(&doc.select("body"), &Options::default());
//! assert_eq!(paragraphs, vec!["Some paragraph text"]);
//! ```

pub mod annotate;
pub mod paragraphs;
pub mod tags;

pub use annotate::{annotate, index_annotated, splice_text};
pub use paragraphs::{collect_paragraphs, Strategy};
