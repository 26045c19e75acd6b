//! Length filter implementation.

use crate::analysis::token::{Token, TokenStream};
use crate::analysis::token_filter::TokenFilter;
use crate::error::Result;

/// A filter that removes tokens shorter than a minimum character count.
///
/// Length is measured in characters, not bytes, so accented terms are not
/// penalized. The default minimum of 3 drops one- and two-letter residue
/// left over by earlier normalization stages.
///
/// # Examples
///
/// ```
/// use termnet::analysis::token::Token;
/// use termnet::analysis::token_filter::TokenFilter;
/// use termnet::analysis::token_filter::length::LengthFilter;
///
/// let filter = LengthFilter::new();
/// let tokens = vec![Token::new("ir", 0), Token::new("rede", 1)];
///
/// let result: Vec<_> = filter.filter(Box::new(tokens.into_iter())).unwrap().collect();
/// assert_eq!(result.len(), 1);
/// assert_eq!(result[0].text, "rede");
/// ```
#[derive(Clone, Debug)]
pub struct LengthFilter {
    min_chars: usize,
}

impl LengthFilter {
    /// Create a length filter with the default minimum of 3 characters.
    pub fn new() -> Self {
        LengthFilter { min_chars: 3 }
    }

    /// Create a length filter with a custom minimum character count.
    pub fn with_min_chars(min_chars: usize) -> Self {
        LengthFilter { min_chars }
    }
}

impl Default for LengthFilter {
    fn default() -> Self {
        Self::new()
    }
}

impl TokenFilter for LengthFilter {
    fn filter(&self, tokens: TokenStream) -> Result<TokenStream> {
        let min_chars = self.min_chars;
        let filtered: Vec<Token> = tokens
            .filter(|token| token.text.chars().count() >= min_chars)
            .collect();

        Ok(Box::new(filtered.into_iter()))
    }

    fn name(&self) -> &'static str {
        "length"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_length_filter() {
        let filter = LengthFilter::new();
        let tokens = vec![
            Token::new("a", 0),
            Token::new("ab", 1),
            Token::new("abc", 2),
            Token::new("abcd", 3),
        ];

        let result: Vec<Token> = filter.filter(Box::new(tokens.into_iter())).unwrap().collect();

        assert_eq!(result.len(), 2);
        assert_eq!(result[0].text, "abc");
        assert_eq!(result[1].text, "abcd");
    }

    #[test]
    fn test_length_counts_chars_not_bytes() {
        // "ré" is 2 chars but 3 bytes
        let filter = LengthFilter::with_min_chars(3);
        let tokens = vec![Token::new("ré", 0)];

        let result: Vec<Token> = filter.filter(Box::new(tokens.into_iter())).unwrap().collect();
        assert!(result.is_empty());
    }

    #[test]
    fn test_filter_name() {
        assert_eq!(LengthFilter::new().name(), "length");
    }
}
