//! Pipeline analyzer that combines char filters, a tokenizer, and token filters.
//!
//! # Architecture
//!
//! The [`PipelineAnalyzer`] applies processing in this order:
//! 1. Char filters: normalize the raw text string
//! 2. Tokenizer: split text into tokens
//! 3. Token filters: applied sequentially in the order they were added
//!
//! The [`plaintext_analyzer`] preset builds the pipeline used for transcript
//! and document plaintext. Its char-filter chain is an ordered sequence of
//! replacements; the order is load-bearing (trailing-punctuation collapse
//! must run after the multi-punctuation collapse, and the final whitespace
//! rule turns the text into one candidate word per line for the tokenizer).
//!
//! # Examples
//!
//! ```
//! use lexifreq::analysis::analyzer::{Analyzer, plaintext_analyzer};
//!
//! let analyzer = plaintext_analyzer().unwrap();
//! let tokens: Vec<_> = analyzer.analyze("It was a (really) good paper.").unwrap().collect();
//! let words: Vec<&str> = tokens.iter().map(|t| t.text.as_str()).collect();
//!
//! assert_eq!(words, ["it", "was", "a", "really", "good", "paper"]);
//! ```

use std::sync::Arc;

use crate::analysis::char_filter::{CharFilter, PatternReplaceCharFilter};
use crate::analysis::token::TokenStream;
use crate::analysis::token_filter::{LowercaseFilter, RemoveEmptyFilter, StopFilter, TokenFilter};
use crate::analysis::tokenizer::{LineTokenizer, Tokenizer};
use crate::error::Result;

/// Trait for complete analysis pipelines that turn raw text into tokens.
pub trait Analyzer: Send + Sync {
    /// Analyze the given text and return a token stream.
    fn analyze(&self, text: &str) -> Result<TokenStream>;

    /// Get the name of this analyzer.
    fn name(&self) -> &'static str;
}

/// A configurable analyzer that chains char filters, a tokenizer, and token filters.
#[derive(Clone)]
pub struct PipelineAnalyzer {
    char_filters: Vec<Arc<dyn CharFilter>>,
    tokenizer: Arc<dyn Tokenizer>,
    token_filters: Vec<Arc<dyn TokenFilter>>,
}

impl PipelineAnalyzer {
    /// Create a new pipeline analyzer with the given tokenizer.
    pub fn new(tokenizer: Arc<dyn Tokenizer>) -> Self {
        PipelineAnalyzer {
            char_filters: Vec::new(),
            tokenizer,
            token_filters: Vec::new(),
        }
    }

    /// Add a char filter to the pipeline.
    pub fn add_char_filter(mut self, char_filter: Arc<dyn CharFilter>) -> Self {
        self.char_filters.push(char_filter);
        self
    }

    /// Add a token filter to the pipeline.
    pub fn add_token_filter(mut self, token_filter: Arc<dyn TokenFilter>) -> Self {
        self.token_filters.push(token_filter);
        self
    }

    /// Get the tokenizer used by this analyzer.
    pub fn tokenizer(&self) -> &Arc<dyn Tokenizer> {
        &self.tokenizer
    }
}

impl Analyzer for PipelineAnalyzer {
    fn analyze(&self, text: &str) -> Result<TokenStream> {
        let mut filtered_text = text.to_string();
        for char_filter in &self.char_filters {
            filtered_text = char_filter.filter(&filtered_text);
        }

        let mut tokens = self.tokenizer.tokenize(&filtered_text)?;
        for token_filter in &self.token_filters {
            tokens = token_filter.filter(tokens)?;
        }

        Ok(tokens)
    }

    fn name(&self) -> &'static str {
        "pipeline"
    }
}

/// Build the analyzer for record plaintext.
///
/// The char-filter chain applies, in order:
/// 1. collapse runs of two or more `.?:*+!-` characters into a space
/// 2. replace parentheses, brackets, braces, quotes, slashes, ampersands,
///    equals signs, asterisks, hash and angle brackets with a space
/// 3. drop an apostrophe preceded by whitespace (stray leading quote) while
///    leaving contractions such as `won't` intact
/// 4. remove smart punctuation glyphs (curly quotes, guillemets, bullet,
///    degree sign, arrows) outright
/// 5. collapse sentence-final punctuation followed by whitespace into a
///    space, preserving in-word punctuation such as `2.2` and `1,000`
/// 6. strip a single trailing `.?!'` at the very end of the text
/// 7. collapse remaining whitespace runs into single newlines
///
/// Tokenization then splits on newline and trims; the token filters fold
/// case and drop empty tokens and the literal punctuation leftovers `-`/`:`.
pub fn plaintext_analyzer() -> Result<PipelineAnalyzer> {
    let analyzer = PipelineAnalyzer::new(Arc::new(LineTokenizer::new()))
        .add_char_filter(Arc::new(PatternReplaceCharFilter::new(
            r"[.?:*+!-][.?:*+!-]+",
            " ",
        )?))
        .add_char_filter(Arc::new(PatternReplaceCharFilter::new(
            r#"[()\[\]{}"/&=*#<>]"#,
            " ",
        )?))
        .add_char_filter(Arc::new(PatternReplaceCharFilter::new(r"\s'", " ")?))
        .add_char_filter(Arc::new(PatternReplaceCharFilter::new(
            "[\u{00AB}\u{00B0}\u{00BB}\u{2018}\u{2019}\u{2022}\u{201C}\u{201D}\u{2039}\u{203A}\u{2191}\u{2193}]",
            "",
        )?))
        .add_char_filter(Arc::new(PatternReplaceCharFilter::new(
            r"[,.?!:;']\s",
            " ",
        )?))
        .add_char_filter(Arc::new(PatternReplaceCharFilter::new(r"[.?!']$", "")?))
        .add_char_filter(Arc::new(PatternReplaceCharFilter::new(r"\s+", "\n")?))
        .add_token_filter(Arc::new(LowercaseFilter::new()))
        .add_token_filter(Arc::new(StopFilter::new()))
        .add_token_filter(Arc::new(RemoveEmptyFilter::new()));

    Ok(analyzer)
}
