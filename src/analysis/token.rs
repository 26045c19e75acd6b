//! Token types for text analysis.
//!
//! A [`Token`] is the unit that flows through the analysis pipeline; a
//! [`TokenStream`] is a boxed iterator of tokens, which lets tokenizers and
//! filters compose without intermediate allocations at every stage.

use serde::{Deserialize, Serialize};

/// A token produced by tokenization.
///
/// # Examples
///
/// ```
/// use termnet::analysis::token::Token;
///
/// let token = Token::new("pesquisa", 0);
/// assert_eq!(token.text, "pesquisa");
/// assert_eq!(token.position, 0);
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Token {
    /// The text content of the token
    pub text: String,

    /// The position of the token in the original token stream (0-based)
    pub position: usize,
}

impl Token {
    /// Create a new token with the given text and position.
    pub fn new<S: Into<String>>(text: S, position: usize) -> Self {
        Token {
            text: text.into(),
            position,
        }
    }

    /// Replace the token text, keeping the position.
    pub fn with_text<S: Into<String>>(mut self, text: S) -> Self {
        self.text = text.into();
        self
    }
}

/// A stream of tokens flowing through the analysis pipeline.
pub type TokenStream = Box<dyn Iterator<Item = Token>>;
