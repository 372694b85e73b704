//! Word frequency engine.
//!
//! [`WordFrequencyEngine`] is the facade a front-end talks to. It owns the
//! analysis pipeline, the synonym store, and the accumulated frequency map,
//! and tracks whether a grouping change has made the counts stale. Counts
//! are substituted through the grouping at count time, so after the grouping
//! changes the map can hold keys recorded under the old grouping; reports
//! stay correct because row building re-routes every key through the current
//! lookup, but the per-member breakdown is only exact again after a recount.

use crate::analysis::analyzer::{Analyzer, PipelineAnalyzer, plaintext_analyzer};
use crate::corpus::extractor::{CorpusExtractor, ExtractionReport};
use crate::corpus::loader::RecordLoader;
use crate::corpus::node::CorpusTree;
use crate::count::{FrequencyMap, count_words};
use crate::error::Result;
use crate::report::{ReportOptions, ReportRow, build_rows};
use crate::synonym::persistence::SynonymPersistence;
use crate::synonym::store::SynonymStore;

/// Owns one corpus worth of frequencies and their synonym grouping.
pub struct WordFrequencyEngine<P: SynonymPersistence> {
    analyzer: PipelineAnalyzer,
    store: SynonymStore<P>,
    frequencies: FrequencyMap,
    needs_recount: bool,
}

impl<P: SynonymPersistence> WordFrequencyEngine<P> {
    /// Create an engine with the standard plaintext analyzer.
    pub fn new(persistence: P) -> Result<Self> {
        Ok(WordFrequencyEngine {
            analyzer: plaintext_analyzer()?,
            store: SynonymStore::new(persistence)?,
            frequencies: FrequencyMap::new(),
            needs_recount: false,
        })
    }

    /// Create an engine with a custom analysis pipeline.
    pub fn with_analyzer(analyzer: PipelineAnalyzer, persistence: P) -> Result<Self> {
        Ok(WordFrequencyEngine {
            analyzer,
            store: SynonymStore::new(persistence)?,
            frequencies: FrequencyMap::new(),
            needs_recount: false,
        })
    }

    /// Walk `tree` from `start` and add its word counts to the engine.
    ///
    /// Counts accumulate across calls; use [`clear_counts`](Self::clear_counts)
    /// first to recount from scratch.
    pub fn extract_from<T, L>(
        &mut self,
        tree: &T,
        start: T::NodeId,
        loader: &L,
    ) -> Result<ExtractionReport>
    where
        T: CorpusTree,
        L: RecordLoader,
    {
        let extractor = CorpusExtractor::new(&self.analyzer);
        extractor.extract(tree, start, loader, &self.store, &mut self.frequencies)
    }

    /// Analyze a piece of plaintext and add its word counts to the engine.
    pub fn ingest_text(&mut self, text: &str) -> Result<()> {
        let tokens = self.analyzer.analyze(text)?;
        count_words(tokens, &self.store, &mut self.frequencies);
        Ok(())
    }

    /// Build the current report rows.
    pub fn rows(&self, options: &ReportOptions) -> Vec<ReportRow> {
        build_rows(&self.frequencies, &self.store, options)
    }

    /// The accumulated frequency map.
    pub fn frequencies(&self) -> &FrequencyMap {
        &self.frequencies
    }

    /// The synonym store.
    pub fn store(&self) -> &SynonymStore<P> {
        &self.store
    }

    /// True when the grouping changed since the counts were accumulated.
    pub fn needs_recount(&self) -> bool {
        self.needs_recount
    }

    /// Drop all accumulated counts and clear the recount flag.
    pub fn clear_counts(&mut self) {
        self.frequencies.clear();
        self.needs_recount = false;
    }

    /// Add `word` to the group labeled `group`.
    pub fn add_to_group(&mut self, group: &str, word: &str) -> Result<()> {
        self.store.add_member(group, word)?;
        self.needs_recount = true;
        Ok(())
    }

    /// Remove `word` from the group labeled `group`.
    pub fn delete_member(&mut self, group: &str, word: &str) -> Result<()> {
        self.store.delete_member(group, word)?;
        self.needs_recount = true;
        Ok(())
    }

    /// Rename the group labeled `old` to `new`.
    pub fn rename_group(&mut self, old: &str, new: &str) -> Result<()> {
        self.store.rename_group(old, new)?;
        self.needs_recount = true;
        Ok(())
    }

    /// Merge the selected items (group labels or bare words) under `target`.
    pub fn merge_checked(&mut self, target: &str, items: &[String]) -> Result<()> {
        self.store.merge_checked(target, items)?;
        self.needs_recount = true;
        Ok(())
    }

    /// Delete every synonym group.
    pub fn clear_groups(&mut self) -> Result<()> {
        self.store.clear_all()?;
        self.needs_recount = true;
        Ok(())
    }

    /// Propose and apply suffix-based synonym links over the current counts.
    pub fn suggest_by_suffix(&mut self, suffix: &str) -> Result<Vec<(String, String)>> {
        let pairs = {
            let vocabulary = self.frequencies.clone();
            self.store.suggest_by_suffix(suffix, &vocabulary)?
        };
        if !pairs.is_empty() {
            self.needs_recount = true;
        }
        Ok(pairs)
    }
}
