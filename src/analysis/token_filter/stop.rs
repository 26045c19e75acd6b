//! Stop filter implementation.
//!
//! Removes common function words that carry no co-occurrence signal. The
//! default list targets Portuguese corpora and contains each accented word
//! in both spellings, since the stop filter may run before or after
//! diacritic stripping depending on the pipeline order.
//!
//! # Examples
//!
//! ```
//! use termnet::analysis::token::Token;
//! use termnet::analysis::token_filter::TokenFilter;
//! use termnet::analysis::token_filter::stop::StopFilter;
//!
//! let filter = StopFilter::new(); // Uses the default Portuguese stop words
//! let tokens = vec![
//!     Token::new("rede", 0),
//!     Token::new("de", 1),
//!     Token::new("termos", 2),
//! ];
//!
//! let result: Vec<_> = filter.filter(Box::new(tokens.into_iter())).unwrap().collect();
//!
//! // "de" is removed as a stop word
//! assert_eq!(result.len(), 2);
//! assert_eq!(result[0].text, "rede");
//! assert_eq!(result[1].text, "termos");
//! ```

use std::collections::HashSet;
use std::sync::{Arc, LazyLock};

use crate::analysis::token::{Token, TokenStream};
use crate::analysis::token_filter::TokenFilter;
use crate::error::Result;

/// Default Portuguese stop words list.
///
/// Accented entries appear with and without diacritics.
const DEFAULT_PORTUGUESE_STOP_WORDS: &[&str] = &[
    "a", "ao", "as", "até", "ate", "à", "com", "como", "da", "das", "de", "depois", "do", "dos",
    "e", "ela", "ele", "em", "entre", "eu", "isso", "já", "ja", "mais", "mas", "mesmo", "muito",
    "na", "nas", "no", "nos", "não", "nao", "o", "os", "ou", "para", "pela", "pelo", "por",
    "quais", "quando", "que", "se", "sem", "seu", "sobre", "sua", "só", "so", "também", "tambem",
    "um", "uma",
];

/// Default Portuguese stop words as a HashSet.
pub static DEFAULT_PORTUGUESE_STOP_WORDS_SET: LazyLock<HashSet<String>> = LazyLock::new(|| {
    DEFAULT_PORTUGUESE_STOP_WORDS
        .iter()
        .map(|&s| s.to_string())
        .collect()
});

/// A filter that removes stop words from the token stream.
#[derive(Clone, Debug)]
pub struct StopFilter {
    /// The set of stop words to remove
    stop_words: Arc<HashSet<String>>,
}

impl StopFilter {
    /// Create a new stop filter with the default Portuguese stop words.
    pub fn new() -> Self {
        Self::with_stop_words(DEFAULT_PORTUGUESE_STOP_WORDS_SET.clone())
    }

    /// Create a new stop filter with custom stop words.
    pub fn with_stop_words(stop_words: HashSet<String>) -> Self {
        StopFilter {
            stop_words: Arc::new(stop_words),
        }
    }

    /// Create a new stop filter from a list of stop words.
    ///
    /// # Examples
    ///
    /// ```
    /// use termnet::analysis::token_filter::stop::StopFilter;
    ///
    /// let filter = StopFilter::from_words(vec!["foo", "bar", "baz"]);
    /// assert_eq!(filter.len(), 3);
    /// ```
    pub fn from_words<I, S>(words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let stop_words = words.into_iter().map(|s| s.into()).collect();
        Self::with_stop_words(stop_words)
    }

    /// Extend the default Portuguese list with corpus-specific words.
    pub fn with_additional_words<I, S>(words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut stop_words = DEFAULT_PORTUGUESE_STOP_WORDS_SET.clone();
        stop_words.extend(words.into_iter().map(|s| s.into()));
        Self::with_stop_words(stop_words)
    }

    /// Check if a word is a stop word.
    pub fn is_stop_word(&self, word: &str) -> bool {
        self.stop_words.contains(word)
    }

    /// Get the number of stop words.
    pub fn len(&self) -> usize {
        self.stop_words.len()
    }

    /// Check if the stop word set is empty.
    pub fn is_empty(&self) -> bool {
        self.stop_words.is_empty()
    }
}

impl Default for StopFilter {
    fn default() -> Self {
        Self::new()
    }
}

impl TokenFilter for StopFilter {
    fn filter(&self, tokens: TokenStream) -> Result<TokenStream> {
        let filtered: Vec<Token> = tokens
            .filter(|token| !self.is_stop_word(&token.text))
            .collect();

        Ok(Box::new(filtered.into_iter()))
    }

    fn name(&self) -> &'static str {
        "stop"
    }
}
