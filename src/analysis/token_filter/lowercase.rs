//! Lowercase filter implementation.
//!
//! Word counting is case-insensitive, so every candidate word is folded to
//! lowercase before it reaches the counter.
//!
//! # Examples
//!
//! ```
//! use lexifreq::analysis::token::Token;
//! use lexifreq::analysis::token_filter::TokenFilter;
//! use lexifreq::analysis::token_filter::lowercase::LowercaseFilter;
//!
//! let filter = LowercaseFilter::new();
//! let tokens = vec![Token::new("Paper", 0), Token::new("PAPERS", 1)];
//! let result: Vec<_> = filter.filter(Box::new(tokens.into_iter())).unwrap().collect();
//!
//! assert_eq!(result[0].text, "paper");
//! assert_eq!(result[1].text, "papers");
//! ```

use crate::analysis::token::TokenStream;
use crate::analysis::token_filter::TokenFilter;
use crate::error::Result;

/// A filter that converts token text to lowercase.
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
        let filtered: Vec<_> = tokens
            .map(|token| {
                if token.is_stopped() || token.text.chars().all(|c| c.is_lowercase() || !c.is_alphabetic()) {
                    token
                } else {
                    let lowered = token.text.to_lowercase();
                    token.with_text(lowered)
                }
            })
            .collect();

        Ok(Box::new(filtered.into_iter()))
    }

    fn name(&self) -> &'static str {
        "lowercase"
    }
}
