//! Text analysis module for lexifreq.
//!
//! This module turns raw record plaintext into normalized word tokens. It is
//! organized as a pipeline: char filters clean the raw string, a tokenizer
//! splits it into candidate words, and token filters normalize or discard
//! them. See [`analyzer::plaintext_analyzer`] for the standard pipeline.

pub mod analyzer;
pub mod char_filter;
pub mod token;
pub mod token_filter;
pub mod tokenizer;
