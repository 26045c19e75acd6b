//! Regex tokenizer implementation.

use regex::Regex;

use crate::analysis::token::{Token, TokenStream};
use crate::analysis::tokenizer::Tokenizer;
use crate::error::{Result, TermnetError};

/// Default token pattern: maximal runs of letters.
const DEFAULT_PATTERN: &str = r"\p{L}+";

/// A tokenizer that extracts tokens matching a regular expression.
///
/// The default pattern matches runs of letters, so punctuation and digits
/// are discarded.
///
/// # Examples
///
/// ```
/// use termnet::analysis::tokenizer::Tokenizer;
/// use termnet::analysis::tokenizer::regex::RegexTokenizer;
///
/// let tokenizer = RegexTokenizer::new().unwrap();
/// let tokens: Vec<_> = tokenizer.tokenize("rede de 10 termos").unwrap().collect();
///
/// assert_eq!(tokens.len(), 3);
/// assert_eq!(tokens[0].text, "rede");
/// ```
#[derive(Clone, Debug)]
pub struct RegexTokenizer {
    pattern: Regex,
}

impl RegexTokenizer {
    /// Create a tokenizer with the default letter-run pattern.
    pub fn new() -> Result<Self> {
        Self::with_pattern(DEFAULT_PATTERN)
    }

    /// Create a tokenizer with a custom token pattern.
    pub fn with_pattern(pattern: &str) -> Result<Self> {
        let pattern = Regex::new(pattern)
            .map_err(|e| TermnetError::analysis(format!("invalid token pattern: {e}")))?;
        Ok(RegexTokenizer { pattern })
    }
}

impl Tokenizer for RegexTokenizer {
    fn tokenize(&self, text: &str) -> Result<TokenStream> {
        let tokens: Vec<Token> = self
            .pattern
            .find_iter(text)
            .enumerate()
            .map(|(position, m)| Token::new(m.as_str(), position))
            .collect();

        Ok(Box::new(tokens.into_iter()))
    }

    fn name(&self) -> &'static str {
        "regex"
    }
}
