//! Lowercase filter implementation.

use crate::analysis::token::{Token, TokenStream};
use crate::analysis::token_filter::TokenFilter;
use crate::error::Result;

/// A filter that lowercases token text.
///
/// # Examples
///
/// ```
/// use termnet::analysis::token::Token;
/// use termnet::analysis::token_filter::TokenFilter;
/// use termnet::analysis::token_filter::lowercase::LowercaseFilter;
///
/// let filter = LowercaseFilter::new();
/// let tokens = vec![Token::new("Educação", 0)];
///
/// let result: Vec<_> = filter.filter(Box::new(tokens.into_iter())).unwrap().collect();
/// assert_eq!(result[0].text, "educação");
/// ```
#[derive(Clone, Debug, Default)]
pub struct LowercaseFilter;

impl LowercaseFilter {
    /// Create a new lowercase filter.
    pub fn new() -> Self {
        LowercaseFilter
    }
}

impl TokenFilter for LowercaseFilter {
    fn filter(&self, tokens: TokenStream) -> Result<TokenStream> {
        let filtered: Vec<Token> = tokens
            .map(|token| {
                let text = token.text.to_lowercase();
                token.with_text(text)
            })
            .collect();

        Ok(Box::new(filtered.into_iter()))
    }

    fn name(&self) -> &'static str {
        "lowercase"
    }
}
