//! Token filter implementations for text analysis.
//!
//! Filters transform a token stream after tokenization: case folding,
//! diacritic stripping, lemma normalization, stopword removal, and length
//! bounds. Filters are applied in the order they are added to an analyzer.

use crate::analysis::token::TokenStream;
use crate::error::Result;

/// Trait for filters that transform a token stream.
pub trait TokenFilter: Send + Sync {
    /// Apply this filter to the given token stream.
    fn filter(&self, tokens: TokenStream) -> Result<TokenStream>;

    /// Get the name of this filter (for debugging and configuration).
    fn name(&self) -> &'static str;
}

// Individual filter modules
pub mod diacritic;
pub mod lemma;
pub mod length;
pub mod lowercase;
pub mod stop;

// Re-export all filters for convenient access
pub use diacritic::DiacriticFilter;
pub use lemma::LemmaFilter;
pub use length::LengthFilter;
pub use lowercase::LowercaseFilter;
pub use stop::StopFilter;
