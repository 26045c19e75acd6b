//! Error types for the termnet library.
//!
//! All fallible operations return [`Result`], whose error type is the
//! [`TermnetError`] enum.
//!
//! # Examples
//!
//! ```
//! use termnet::error::{Result, TermnetError};
//!
//! fn example_operation() -> Result<()> {
//!     Err(TermnetError::corpus("corpus file is empty"))
//! }
//!
//! match example_operation() {
//!     Ok(_) => println!("Success"),
//!     Err(e) => eprintln!("Error: {}", e),
//! }
//! ```

use std::io;

use anyhow;
use thiserror::Error;

/// The main error type for termnet operations.
///
/// Uses the `thiserror` crate for automatic `Error` trait implementation and
/// provides convenient constructor methods for the common variants.
#[derive(Error, Debug)]
pub enum TermnetError {
    /// I/O errors (corpus files, label files, rendering output)
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// Corpus-related errors (unreadable or malformed input)
    #[error("Corpus error: {0}")]
    Corpus(String),

    /// Analysis-related errors (tokenization, filtering)
    #[error("Analysis error: {0}")]
    Analysis(String),

    /// Graph construction or annotation errors
    #[error("Graph error: {0}")]
    Graph(String),

    /// Label-correction file errors (export, reimport, relabeling)
    #[error("Label error: {0}")]
    Labels(String),

    /// Rendering errors
    #[error("Render error: {0}")]
    Render(String),

    /// Configuration errors
    #[error("Configuration error: {0}")]
    Config(String),

    /// CSV read/write errors from the label-correction boundary
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    /// JSON serialization/deserialization errors
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Generic error for other cases
    #[error("Error: {0}")]
    Other(String),

    /// Generic anyhow error
    #[error("Anyhow error: {0}")]
    Anyhow(#[from] anyhow::Error),
}

/// Result type alias for operations that may fail with TermnetError.
pub type Result<T> = std::result::Result<T, TermnetError>;

impl TermnetError {
    /// Create a new corpus error.
    pub fn corpus<S: Into<String>>(msg: S) -> Self {
        TermnetError::Corpus(msg.into())
    }

    /// Create a new analysis error.
    pub fn analysis<S: Into<String>>(msg: S) -> Self {
        TermnetError::Analysis(msg.into())
    }

    /// Create a new graph error.
    pub fn graph<S: Into<String>>(msg: S) -> Self {
        TermnetError::Graph(msg.into())
    }

    /// Create a new label error.
    pub fn labels<S: Into<String>>(msg: S) -> Self {
        TermnetError::Labels(msg.into())
    }

    /// Create a new render error.
    pub fn render<S: Into<String>>(msg: S) -> Self {
        TermnetError::Render(msg.into())
    }

    /// Create a new configuration error.
    pub fn config<S: Into<String>>(msg: S) -> Self {
        TermnetError::Config(msg.into())
    }

    /// Create a new generic error.
    pub fn other<S: Into<String>>(msg: S) -> Self {
        TermnetError::Other(msg.into())
    }
}
