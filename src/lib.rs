//! # Lexifreq
//!
//! A word frequency and synonym grouping engine for qualitative text
//! analysis, inspired by Transana's word frequency reports.
//!
//! ## Features
//!
//! - Pure Rust implementation
//! - Regex-based plaintext normalization pipeline
//! - Corpus extraction over a pluggable content hierarchy
//! - Persistent synonym groups with a replayable lookup cache
//! - Suffix-based synonym suggestion
//! - Sortable, filterable report rows

pub mod analysis;
pub mod corpus;
pub mod count;
pub mod engine;
pub mod error;
pub mod report;
pub mod synonym;

// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
