//! Corpus file reading and tokenization.

use std::fs;
use std::path::{Path, PathBuf};

use rayon::prelude::*;

use crate::analysis::analyzer::Analyzer;
use crate::corpus::Document;
use crate::error::{Result, TermnetError};

/// Default marker separating documents inside a corpus file.
pub const DEFAULT_SEPARATOR: &str = "###";

/// A reader for `###`-separated corpus files.
///
/// # Examples
///
/// ```no_run
/// use termnet::corpus::CorpusReader;
///
/// let reader = CorpusReader::new("corpus.txt");
/// let segments = reader.read_raw().unwrap();
/// ```
#[derive(Clone, Debug)]
pub struct CorpusReader {
    path: PathBuf,
    separator: String,
}

impl CorpusReader {
    /// Create a reader for the given corpus file.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        CorpusReader {
            path: path.into(),
            separator: DEFAULT_SEPARATOR.to_string(),
        }
    }

    /// Use a custom document separator.
    pub fn with_separator(mut self, separator: impl Into<String>) -> Self {
        self.separator = separator.into();
        self
    }

    /// The corpus file path.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Read the corpus file and split it into raw document segments.
    ///
    /// Segments are trimmed; blank segments are dropped. An unreadable file
    /// is a fatal error carrying the underlying I/O cause.
    pub fn read_raw(&self) -> Result<Vec<String>> {
        let content = fs::read_to_string(&self.path).map_err(|e| {
            TermnetError::corpus(format!(
                "cannot read corpus file '{}': {e}",
                self.path.display()
            ))
        })?;

        Ok(split_segments(&content, &self.separator))
    }
}

/// Split corpus content into trimmed, non-empty document segments.
fn split_segments(content: &str, separator: &str) -> Vec<String> {
    content
        .split(separator)
        .map(str::trim)
        .filter(|segment| !segment.is_empty())
        .map(str::to_string)
        .collect()
}

/// Tokenize raw document segments into [`Document`]s.
///
/// Documents are analyzed in parallel; output order follows input order.
/// Documents left empty by the analyzer are dropped, and ids are assigned
/// after that filtering so they stay contiguous.
pub fn tokenize_documents(analyzer: &dyn Analyzer, segments: &[String]) -> Result<Vec<Document>> {
    let token_lists: Vec<Vec<String>> = segments
        .par_iter()
        .map(|segment| analyzer.analyze_terms(segment))
        .collect::<Result<_>>()?;

    Ok(token_lists
        .into_iter()
        .filter(|tokens| !tokens.is_empty())
        .enumerate()
        .map(|(id, tokens)| Document::new(id, tokens))
        .collect())
}
