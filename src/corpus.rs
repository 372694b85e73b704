//! Corpus extraction module for lexifreq.
//!
//! The corpus is the set of plaintext reachable from a chosen start node in
//! the application's content hierarchy. The hierarchy itself and the record
//! storage stay outside the crate, behind the [`node::CorpusTree`] and
//! [`loader::RecordLoader`] traits; [`extractor::CorpusExtractor`] walks
//! them and feeds every record through the analysis pipeline.

pub mod extractor;
pub mod fixture;
pub mod loader;
pub mod node;
