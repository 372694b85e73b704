//! Char filter implementations for raw text normalization.
//!
//! Char filters pre-process the text string before it reaches the tokenizer.
//! The plaintext that comes out of transcript and document records is messy
//! (ellipses, stage-direction parentheses, smart quotes), so the bulk of the
//! normalization happens here as an ordered chain of replacements.

/// Trait for character filters that transform text before tokenization.
pub trait CharFilter: Send + Sync {
    /// Apply this filter to the input text, returning the filtered text.
    fn filter(&self, input: &str) -> String;

    /// Get the name of this char filter.
    fn name(&self) -> &'static str;
}

pub mod pattern_replace;

pub use pattern_replace::PatternReplaceCharFilter;
