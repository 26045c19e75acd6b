//! Term co-occurrence matrix construction.
//!
//! The matrix is square, symmetric, and indexed by the corpus vocabulary in
//! lexicographic order. The diagonal holds each term's document frequency;
//! an off-diagonal cell holds the number of documents where both terms
//! appear. Counting is document-presence based: duplicates inside one
//! document collapse before any cell is incremented.
//!
//! # Examples
//!
//! ```
//! use termnet::corpus::Document;
//! use termnet::matrix::CooccurrenceMatrix;
//!
//! let docs = vec![
//!     Document::new(0, vec!["a".into(), "b".into()]),
//!     Document::new(1, vec!["a".into()]),
//! ];
//! let matrix = CooccurrenceMatrix::from_documents(&docs);
//!
//! assert_eq!(matrix.document_frequency("a"), Some(2));
//! assert_eq!(matrix.document_frequency("b"), Some(1));
//! assert_eq!(matrix.pair_count("a", "b"), Some(1));
//! ```

use ahash::AHashMap;
use std::collections::BTreeSet;

use crate::corpus::Document;

/// The corpus vocabulary, fixed in lexicographic order.
///
/// The sort order doubles as the matrix index order and as the deterministic
/// tie-break order wherever nodes are ranked downstream.
#[derive(Clone, Debug, Default)]
pub struct Vocabulary {
    terms: Vec<String>,
    index: AHashMap<String, usize>,
}

impl Vocabulary {
    /// Build the vocabulary as the sorted union of all document terms.
    pub fn from_documents(documents: &[Document]) -> Self {
        let set: BTreeSet<&str> = documents
            .iter()
            .flat_map(|doc| doc.tokens.iter().map(|t| t.as_str()))
            .collect();

        let terms: Vec<String> = set.into_iter().map(str::to_string).collect();
        let index = terms
            .iter()
            .enumerate()
            .map(|(i, term)| (term.clone(), i))
            .collect();

        Vocabulary { terms, index }
    }

    /// Matrix index of a term.
    pub fn index_of(&self, term: &str) -> Option<usize> {
        self.index.get(term).copied()
    }

    /// Term at a matrix index.
    pub fn term(&self, index: usize) -> Option<&str> {
        self.terms.get(index).map(String::as_str)
    }

    /// All terms in index order.
    pub fn terms(&self) -> &[String] {
        &self.terms
    }

    /// Number of distinct terms.
    pub fn len(&self) -> usize {
        self.terms.len()
    }

    /// Whether the vocabulary is empty.
    pub fn is_empty(&self) -> bool {
        self.terms.is_empty()
    }
}

/// A symmetric term-by-term co-occurrence matrix.
///
/// Stored dense (row-major `Vec<u64>`); memory is O(vocabulary²), which is
/// acceptable for the short-document corpora this crate targets.
#[derive(Clone, Debug, Default)]
pub struct CooccurrenceMatrix {
    vocabulary: Vocabulary,
    counts: Vec<u64>,
}

impl CooccurrenceMatrix {
    /// Build the matrix from tokenized documents.
    ///
    /// The vocabulary is fixed before allocation so indexing is stable. For
    /// each document, every distinct term's diagonal cell is incremented
    /// once, and both symmetric cells are incremented for every unordered
    /// pair of distinct terms. An empty document set yields an empty matrix.
    pub fn from_documents(documents: &[Document]) -> Self {
        let vocabulary = Vocabulary::from_documents(documents);
        let n = vocabulary.len();
        let mut counts = vec![0u64; n * n];

        for doc in documents {
            let term_indices: Vec<usize> = doc
                .unique_terms()
                .iter()
                .filter_map(|term| vocabulary.index_of(term))
                .collect();

            for &i in &term_indices {
                counts[i * n + i] += 1;
            }

            // Combinations without repetition: a term never pairs with itself.
            for (pos, &i) in term_indices.iter().enumerate() {
                for &j in &term_indices[pos + 1..] {
                    counts[i * n + j] += 1;
                    counts[j * n + i] += 1;
                }
            }
        }

        CooccurrenceMatrix { vocabulary, counts }
    }

    /// The matrix vocabulary.
    pub fn vocabulary(&self) -> &Vocabulary {
        &self.vocabulary
    }

    /// Cell value by matrix indices.
    ///
    /// Returns 0 for out-of-range indices.
    pub fn count(&self, i: usize, j: usize) -> u64 {
        let n = self.vocabulary.len();
        if i < n && j < n {
            self.counts[i * n + j]
        } else {
            0
        }
    }

    /// Document frequency of a term (its diagonal cell).
    pub fn document_frequency(&self, term: &str) -> Option<u64> {
        let i = self.vocabulary.index_of(term)?;
        Some(self.count(i, i))
    }

    /// Number of documents containing both terms (an off-diagonal cell).
    ///
    /// Returns `Some(0)` for a known pair that never co-occurs and `None`
    /// when either term is outside the vocabulary.
    pub fn pair_count(&self, a: &str, b: &str) -> Option<u64> {
        let i = self.vocabulary.index_of(a)?;
        let j = self.vocabulary.index_of(b)?;
        Some(self.count(i, j))
    }

    /// Number of vocabulary terms (matrix dimension).
    pub fn len(&self) -> usize {
        self.vocabulary.len()
    }

    /// Whether the matrix is empty.
    pub fn is_empty(&self) -> bool {
        self.vocabulary.is_empty()
    }
}
