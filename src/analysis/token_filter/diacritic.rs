//! Diacritic-stripping filter implementation.
//!
//! Decomposes token text to NFD and removes combining marks, so "educação"
//! becomes "educacao". Co-occurrence counting then treats accented and
//! unaccented spellings of the same term as one vocabulary entry; the
//! label-correction workflow restores the preferred spelling at the
//! presentation boundary.

use unicode_normalization::UnicodeNormalization;
use unicode_normalization::char::is_combining_mark;

use crate::analysis::token::{Token, TokenStream};
use crate::analysis::token_filter::TokenFilter;
use crate::error::Result;

/// A filter that strips diacritics from token text.
///
/// # Examples
///
/// ```
/// use termnet::analysis::token::Token;
/// use termnet::analysis::token_filter::TokenFilter;
/// use termnet::analysis::token_filter::diacritic::DiacriticFilter;
///
/// let filter = DiacriticFilter::new();
/// let tokens = vec![Token::new("ciência", 0)];
///
/// let result: Vec<_> = filter.filter(Box::new(tokens.into_iter())).unwrap().collect();
/// assert_eq!(result[0].text, "ciencia");
/// ```
#[derive(Clone, Debug, Default)]
pub struct DiacriticFilter;

impl DiacriticFilter {
    /// Create a new diacritic filter.
    pub fn new() -> Self {
        DiacriticFilter
    }

    fn strip(text: &str) -> String {
        text.nfd().filter(|c| !is_combining_mark(*c)).collect()
    }
}

impl TokenFilter for DiacriticFilter {
    fn filter(&self, tokens: TokenStream) -> Result<TokenStream> {
        let filtered: Vec<Token> = tokens
            .map(|token| {
                let text = Self::strip(&token.text);
                token.with_text(text)
            })
            .collect();

        Ok(Box::new(filtered.into_iter()))
    }

    fn name(&self) -> &'static str {
        "diacritic"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_diacritic_filter() {
        let filter = DiacriticFilter::new();
        let tokens = vec![
            Token::new("não", 0),
            Token::new("coração", 1),
            Token::new("plain", 2),
        ];

        let result: Vec<Token> = filter.filter(Box::new(tokens.into_iter())).unwrap().collect();

        assert_eq!(result[0].text, "nao");
        assert_eq!(result[1].text, "coracao");
        assert_eq!(result[2].text, "plain");
    }

    #[test]
    fn test_decomposed_input() {
        // 'é' as 'e' + U+0301 combining acute
        let filter = DiacriticFilter::new();
        let tokens = vec![Token::new("caf\u{0065}\u{0301}", 0)];

        let result: Vec<Token> = filter.filter(Box::new(tokens.into_iter())).unwrap().collect();
        assert_eq!(result[0].text, "cafe");
    }

    #[test]
    fn test_filter_name() {
        assert_eq!(DiacriticFilter::new().name(), "diacritic");
    }
}
