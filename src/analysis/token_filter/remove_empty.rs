//! Remove empty filter implementation.
//!
//! Drops empty tokens (blank lines from the tokenizer) and tokens marked as
//! stopped by earlier filters. Runs at the end of the pipeline so that the
//! counter only ever sees valid words.

use crate::analysis::token::{Token, TokenStream};
use crate::analysis::token_filter::TokenFilter;
use crate::error::Result;

/// A filter that removes empty and stopped tokens from the stream.
#[derive(Clone, Debug, Default)]
pub struct RemoveEmptyFilter;

impl RemoveEmptyFilter {
    /// Create a new remove empty filter.
    pub fn new() -> Self {
        RemoveEmptyFilter
    }
}

impl TokenFilter for RemoveEmptyFilter {
    fn filter(&self, tokens: TokenStream) -> Result<TokenStream> {
        let filtered: Vec<Token> = tokens
            .filter(|token| !token.is_stopped() && !token.is_empty())
            .collect();

        Ok(Box::new(filtered.into_iter()))
    }

    fn name(&self) -> &'static str {
        "remove_empty"
    }
}
