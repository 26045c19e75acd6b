//! Document representation after tokenization.

use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

/// A tokenized document.
///
/// Co-occurrence counting is document-presence based: duplicate tokens
/// within one document collapse to a single occurrence, which is what
/// [`unique_terms`](Document::unique_terms) returns.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Document {
    /// Position of the document in the corpus (0-based).
    pub id: usize,
    /// Normalized tokens in document order.
    pub tokens: Vec<String>,
}

impl Document {
    /// Create a new document.
    pub fn new(id: usize, tokens: Vec<String>) -> Self {
        Document { id, tokens }
    }

    /// The document's distinct terms in sorted order.
    pub fn unique_terms(&self) -> Vec<&str> {
        let set: BTreeSet<&str> = self.tokens.iter().map(|t| t.as_str()).collect();
        set.into_iter().collect()
    }

    /// Whether the document has no tokens.
    pub fn is_empty(&self) -> bool {
        self.tokens.is_empty()
    }
}
