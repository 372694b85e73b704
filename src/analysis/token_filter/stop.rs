//! Stop filter implementation.
//!
//! A handful of punctuation fragments slip through the char filter chain as
//! whole "words" (a lone hyphen from a dialogue dash, a lone colon from a
//! speaker label). They are never valid words, so this filter marks them as
//! stopped.
//!
//! # Examples
//!
//! ```
//! use lexifreq::analysis::token::Token;
//! use lexifreq::analysis::token_filter::TokenFilter;
//! use lexifreq::analysis::token_filter::stop::StopFilter;
//!
//! let filter = StopFilter::new();
//! let tokens = vec![Token::new("word", 0), Token::new("-", 1), Token::new(":", 2)];
//! let result: Vec<_> = filter.filter(Box::new(tokens.into_iter())).unwrap().collect();
//!
//! assert!(!result[0].is_stopped());
//! assert!(result[1].is_stopped());
//! assert!(result[2].is_stopped());
//! ```

use std::collections::HashSet;
use std::sync::LazyLock;

use crate::analysis::token::{Token, TokenStream};
use crate::analysis::token_filter::TokenFilter;
use crate::error::Result;

/// Tokens that are punctuation artifacts rather than words.
const INVALID_TOKENS: &[&str] = &["-", ":"];

static DEFAULT_STOP_SET: LazyLock<HashSet<&'static str>> =
    LazyLock::new(|| INVALID_TOKENS.iter().copied().collect());

/// A filter that marks invalid literal tokens as stopped.
#[derive(Clone, Debug, Default)]
pub struct StopFilter;

impl StopFilter {
    /// Create a new stop filter with the default invalid-token set.
    pub fn new() -> Self {
        StopFilter
    }
}

impl TokenFilter for StopFilter {
    fn filter(&self, tokens: TokenStream) -> Result<TokenStream> {
        let filtered: Vec<Token> = tokens
            .map(|token| {
                if !token.is_stopped() && DEFAULT_STOP_SET.contains(token.text.as_str()) {
                    token.stop()
                } else {
                    token
                }
            })
            .collect();

        Ok(Box::new(filtered.into_iter()))
    }

    fn name(&self) -> &'static str {
        "stop"
    }
}
