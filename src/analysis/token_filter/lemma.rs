//! Lemma normalization filter implementation.
//!
//! Maps exact token spellings to a canonical form (e.g. folding a plural
//! onto its singular) so variant spellings count as one vocabulary term.
//! Unmapped tokens pass through unchanged.

use ahash::AHashMap;

use crate::analysis::token::{Token, TokenStream};
use crate::analysis::token_filter::TokenFilter;
use crate::error::Result;

/// A filter that rewrites tokens through an exact-match normalization map.
///
/// # Examples
///
/// ```
/// use termnet::analysis::token::Token;
/// use termnet::analysis::token_filter::TokenFilter;
/// use termnet::analysis::token_filter::lemma::LemmaFilter;
///
/// let filter = LemmaFilter::from_pairs([("pesquisas", "pesquisa")]);
/// let tokens = vec![Token::new("pesquisas", 0), Token::new("ensino", 1)];
///
/// let result: Vec<_> = filter.filter(Box::new(tokens.into_iter())).unwrap().collect();
/// assert_eq!(result[0].text, "pesquisa");
/// assert_eq!(result[1].text, "ensino");
/// ```
#[derive(Clone, Debug, Default)]
pub struct LemmaFilter {
    mapping: AHashMap<String, String>,
}

impl LemmaFilter {
    /// Create an empty lemma filter (identity mapping).
    pub fn new() -> Self {
        LemmaFilter {
            mapping: AHashMap::new(),
        }
    }

    /// Create a lemma filter from `(variant, canonical)` pairs.
    pub fn from_pairs<I, S>(pairs: I) -> Self
    where
        I: IntoIterator<Item = (S, S)>,
        S: Into<String>,
    {
        let mapping = pairs
            .into_iter()
            .map(|(from, to)| (from.into(), to.into()))
            .collect();
        LemmaFilter { mapping }
    }

    /// Number of mapped variants.
    pub fn len(&self) -> usize {
        self.mapping.len()
    }

    /// Check if the mapping is empty.
    pub fn is_empty(&self) -> bool {
        self.mapping.is_empty()
    }
}

impl TokenFilter for LemmaFilter {
    fn filter(&self, tokens: TokenStream) -> Result<TokenStream> {
        let filtered: Vec<Token> = tokens
            .map(|token| match self.mapping.get(&token.text) {
                Some(canonical) => token.with_text(canonical.clone()),
                None => token,
            })
            .collect();

        Ok(Box::new(filtered.into_iter()))
    }

    fn name(&self) -> &'static str {
        "lemma"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lemma_filter() {
        let filter = LemmaFilter::from_pairs([("escolas", "escola"), ("alunos", "aluno")]);
        let tokens = vec![
            Token::new("escolas", 0),
            Token::new("professores", 1),
            Token::new("alunos", 2),
        ];

        let result: Vec<Token> = filter.filter(Box::new(tokens.into_iter())).unwrap().collect();

        assert_eq!(result[0].text, "escola");
        assert_eq!(result[1].text, "professores");
        assert_eq!(result[2].text, "aluno");
    }

    #[test]
    fn test_empty_mapping_is_identity() {
        let filter = LemmaFilter::new();
        assert!(filter.is_empty());

        let tokens = vec![Token::new("rede", 0)];
        let result: Vec<Token> = filter.filter(Box::new(tokens.into_iter())).unwrap().collect();
        assert_eq!(result[0].text, "rede");
    }

    #[test]
    fn test_filter_name() {
        assert_eq!(LemmaFilter::new().name(), "lemma");
    }
}
