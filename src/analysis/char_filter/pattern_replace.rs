//! Regex-based replacement char filter.

use regex::Regex;

use super::CharFilter;
use crate::error::{LexifreqError, Result};

/// A char filter that replaces every match of a regex pattern.
///
/// The normalization chain is built from a fixed, ordered sequence of these
/// filters; ordering matters because later patterns operate on the output of
/// earlier ones.
pub struct PatternReplaceCharFilter {
    pattern: Regex,
    replacement: String,
}

impl PatternReplaceCharFilter {
    /// Create a new pattern replace char filter.
    pub fn new(pattern: &str, replacement: &str) -> Result<Self> {
        Ok(Self {
            pattern: Regex::new(pattern)
                .map_err(|e| LexifreqError::analysis(format!("invalid pattern: {e}")))?,
            replacement: replacement.to_string(),
        })
    }
}

impl CharFilter for PatternReplaceCharFilter {
    fn filter(&self, input: &str) -> String {
        self.pattern
            .replace_all(input, self.replacement.as_str())
            .into_owned()
    }

    fn name(&self) -> &'static str {
        "pattern_replace"
    }
}
