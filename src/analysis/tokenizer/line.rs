//! Line tokenizer implementation.
//!
//! The normalization char filters collapse all whitespace runs into single
//! newlines, so by the time text reaches the tokenizer it holds one candidate
//! word per line. This tokenizer splits on newline and trims each line.
//!
//! # Examples
//!
//! ```
//! use lexifreq::analysis::token::Token;
//! use lexifreq::analysis::tokenizer::Tokenizer;
//! use lexifreq::analysis::tokenizer::line::LineTokenizer;
//!
//! let tokenizer = LineTokenizer::new();
//! let tokens: Vec<Token> = tokenizer.tokenize("one\ntwo\nthree").unwrap().collect();
//!
//! assert_eq!(tokens.len(), 3);
//! assert_eq!(tokens[1].text, "two");
//! ```

use super::Tokenizer;
use crate::analysis::token::{Token, TokenStream};
use crate::error::Result;

/// A tokenizer that emits one trimmed token per input line.
#[derive(Clone, Debug, Default)]
pub struct LineTokenizer;

impl LineTokenizer {
    /// Create a new line tokenizer.
    pub fn new() -> Self {
        LineTokenizer
    }
}

impl Tokenizer for LineTokenizer {
    fn tokenize(&self, text: &str) -> Result<TokenStream> {
        let tokens: Vec<Token> = text
            .split('\n')
            .enumerate()
            .map(|(position, line)| Token::new(line.trim(), position))
            .collect();

        Ok(Box::new(tokens.into_iter()))
    }

    fn name(&self) -> &'static str {
        "line"
    }
}
