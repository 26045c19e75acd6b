//! Corpus loading and document representation.
//!
//! A corpus is a single UTF-8 text file holding short documents separated by
//! a `###` marker. Raw segments are tokenized through an [`Analyzer`] into
//! [`Document`]s before co-occurrence counting.
//!
//! [`Analyzer`]: crate::analysis::analyzer::Analyzer

pub mod document;
pub mod reader;

pub use document::Document;
pub use reader::{CorpusReader, tokenize_documents};
