//! Analyzer combining a tokenizer with a chain of token filters.
//!
//! # Architecture
//!
//! The [`PipelineAnalyzer`] applies processing in this order:
//! 1. Tokenizer: splits raw text into tokens
//! 2. Token filters: applied sequentially in the order they were added
//!
//! # Examples
//!
//! ```
//! use std::sync::Arc;
//! use termnet::analysis::analyzer::{Analyzer, PipelineAnalyzer};
//! use termnet::analysis::token_filter::{LowercaseFilter, StopFilter};
//! use termnet::analysis::tokenizer::UnicodeWordTokenizer;
//!
//! let analyzer = PipelineAnalyzer::new(Arc::new(UnicodeWordTokenizer::new()))
//!     .add_filter(Arc::new(LowercaseFilter::new()))
//!     .add_filter(Arc::new(StopFilter::from_words(vec!["de"])));
//!
//! let terms = analyzer.analyze_terms("Rede DE Termos").unwrap();
//! assert_eq!(terms, vec!["rede", "termos"]);
//! ```

use std::sync::Arc;

use crate::analysis::token::TokenStream;
use crate::analysis::token_filter::{
    DiacriticFilter, LemmaFilter, LengthFilter, LowercaseFilter, StopFilter, TokenFilter,
};
use crate::analysis::tokenizer::{Tokenizer, UnicodeWordTokenizer};
use crate::error::Result;

/// Trait for analyzers that convert raw text into normalized tokens.
///
/// This is the tokenization seam the network pipeline consumes: a function
/// from document text to an ordered sequence of normalized string tokens.
/// The normalization policy behind it is opaque to the pipeline.
pub trait Analyzer: Send + Sync {
    /// Analyze the given text into a stream of normalized tokens.
    fn analyze(&self, text: &str) -> Result<TokenStream>;

    /// Analyze the given text and collect the surviving token texts.
    fn analyze_terms(&self, text: &str) -> Result<Vec<String>> {
        Ok(self.analyze(text)?.map(|token| token.text).collect())
    }

    /// Get the name of this analyzer.
    fn name(&self) -> &'static str;
}

/// A configurable analyzer that combines a tokenizer with a filter chain.
#[derive(Clone)]
pub struct PipelineAnalyzer {
    tokenizer: Arc<dyn Tokenizer>,
    filters: Vec<Arc<dyn TokenFilter>>,
}

impl PipelineAnalyzer {
    /// Create a new pipeline analyzer with the given tokenizer.
    pub fn new(tokenizer: Arc<dyn Tokenizer>) -> Self {
        PipelineAnalyzer {
            tokenizer,
            filters: Vec::new(),
        }
    }

    /// Add a filter to the pipeline.
    pub fn add_filter(mut self, filter: Arc<dyn TokenFilter>) -> Self {
        self.filters.push(filter);
        self
    }

    /// Get the tokenizer used by this analyzer.
    pub fn tokenizer(&self) -> &Arc<dyn Tokenizer> {
        &self.tokenizer
    }

    /// Get the filters used by this analyzer.
    pub fn filters(&self) -> &[Arc<dyn TokenFilter>] {
        &self.filters
    }
}

impl Analyzer for PipelineAnalyzer {
    fn analyze(&self, text: &str) -> Result<TokenStream> {
        let mut tokens = self.tokenizer.tokenize(text)?;

        for filter in &self.filters {
            tokens = filter.filter(tokens)?;
        }

        Ok(tokens)
    }

    fn name(&self) -> &'static str {
        "pipeline"
    }
}

/// Build the default corpus analyzer.
///
/// Unicode word tokenization followed by lowercasing, diacritic stripping,
/// lemma normalization, stopword removal (default Portuguese list extended
/// with corpus-specific words), and a 3-character minimum length.
pub fn default_analyzer<I, S>(custom_stopwords: I, lemmas: &[(String, String)]) -> PipelineAnalyzer
where
    I: IntoIterator<Item = S>,
    S: Into<String>,
{
    PipelineAnalyzer::new(Arc::new(UnicodeWordTokenizer::new()))
        .add_filter(Arc::new(LowercaseFilter::new()))
        .add_filter(Arc::new(DiacriticFilter::new()))
        .add_filter(Arc::new(LemmaFilter::from_pairs(
            lemmas.iter().map(|(from, to)| (from.clone(), to.clone())),
        )))
        .add_filter(Arc::new(StopFilter::with_additional_words(custom_stopwords)))
        .add_filter(Arc::new(LengthFilter::new()))
}
