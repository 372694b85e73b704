//! Corpus extraction.
//!
//! Walks the content hierarchy from a chosen start node, loads the plaintext
//! of every reachable record, and folds the analyzed tokens into a frequency
//! map. The walk uses an explicit work-list, so hierarchy depth is bounded
//! only by memory, and an optional progress callback lets a caller display
//! indeterminate progress for large corpora. Extraction never mutates the
//! synonym store; it only consults the lookup for substitution.

use log::warn;

use crate::analysis::analyzer::Analyzer;
use crate::corpus::loader::RecordLoader;
use crate::corpus::node::{CorpusTree, NodeType, RecordRef};
use crate::count::{FrequencyMap, count_words};
use crate::error::Result;
use crate::synonym::SynonymLookup;

/// A node the extractor could not process, reported but not fatal.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SkippedNode {
    /// The unrecognized node type tag.
    pub node_type: NodeType,
    /// The record reference the node carried.
    pub record: RecordRef,
}

/// Summary of one extraction pass.
#[derive(Clone, Debug, Default)]
pub struct ExtractionReport {
    /// Number of tree nodes visited.
    pub nodes_visited: usize,
    /// Number of records whose plaintext was read.
    pub records_read: usize,
    /// Nodes of unknown type that were skipped.
    pub skipped: Vec<SkippedNode>,
}

/// Progress snapshot handed to the caller's callback, once per visited node.
#[derive(Clone, Copy, Debug)]
pub struct ExtractProgress {
    /// Nodes visited so far.
    pub nodes_visited: usize,
    /// Nodes currently queued in the work-list.
    pub nodes_pending: usize,
}

/// Extracts word frequencies from a corpus tree.
pub struct CorpusExtractor<'a> {
    analyzer: &'a dyn Analyzer,
}

impl<'a> CorpusExtractor<'a> {
    /// Create an extractor that analyzes record plaintext with `analyzer`.
    pub fn new(analyzer: &'a dyn Analyzer) -> Self {
        CorpusExtractor { analyzer }
    }

    /// Walk the tree from `start`, counting words into `accumulator`.
    pub fn extract<T, L>(
        &self,
        tree: &T,
        start: T::NodeId,
        loader: &L,
        lookup: &dyn SynonymLookup,
        accumulator: &mut FrequencyMap,
    ) -> Result<ExtractionReport>
    where
        T: CorpusTree,
        L: RecordLoader,
    {
        self.extract_with_progress(tree, start, loader, lookup, accumulator, |_| {})
    }

    /// Like [`extract`](Self::extract), invoking `progress` after each node.
    pub fn extract_with_progress<T, L, F>(
        &self,
        tree: &T,
        start: T::NodeId,
        loader: &L,
        lookup: &dyn SynonymLookup,
        accumulator: &mut FrequencyMap,
        mut progress: F,
    ) -> Result<ExtractionReport>
    where
        T: CorpusTree,
        L: RecordLoader,
        F: FnMut(ExtractProgress),
    {
        let mut report = ExtractionReport::default();
        let mut worklist = vec![start];

        while let Some(node) = worklist.pop() {
            report.nodes_visited += 1;
            let node_type = tree.node_type(node);

            if node_type.is_container() {
                // Reversed push keeps children in display order on the stack.
                let mut children = tree.children(node);
                children.reverse();
                for child in children {
                    if !tree.node_type(child).is_skipped() {
                        worklist.push(child);
                    }
                }
            } else if node_type.is_text_leaf() {
                let text = loader.plaintext(node_type, tree.record_ref(node))?;
                report.records_read += 1;
                let tokens = self.analyzer.analyze(&text)?;
                count_words(tokens, lookup, accumulator);
            } else if node_type.is_clip() {
                let segments = loader.clip_segments(tree.record_ref(node))?;
                report.records_read += 1;
                for segment in segments {
                    let tokens = self.analyzer.analyze(&segment)?;
                    count_words(tokens, lookup, accumulator);
                }
            } else if node_type.is_skipped() {
                // Notes and snapshots contribute no text.
            } else {
                let record = tree.record_ref(node);
                warn!("node with record {record} not processed: unhandled node type {node_type:?}");
                report.skipped.push(SkippedNode {
                    node_type,
                    record,
                });
            }

            progress(ExtractProgress {
                nodes_visited: report.nodes_visited,
                nodes_pending: worklist.len(),
            });
        }

        Ok(report)
    }
}
