//! In-memory corpus tree fixture.
//!
//! The real application implements [`CorpusTree`] and [`RecordLoader`] over
//! its live content hierarchy and database. This module provides the trivial
//! in-memory implementation used by tests and examples: build a node tree
//! with [`FixtureNode`], wrap it in a [`FixtureTree`], and the tree serves
//! as both collaborators at once.

use ahash::AHashMap;

use crate::corpus::loader::RecordLoader;
use crate::corpus::node::{CorpusTree, NodeType, RecordRef};
use crate::error::{LexifreqError, Result};

/// Builder for one fixture tree node.
#[derive(Clone, Debug)]
pub struct FixtureNode {
    node_type: NodeType,
    text: Option<String>,
    segments: Vec<String>,
    children: Vec<FixtureNode>,
}

impl FixtureNode {
    /// A container node (library, collection, episode...).
    pub fn container(node_type: NodeType) -> Self {
        FixtureNode {
            node_type,
            text: None,
            segments: Vec::new(),
            children: Vec::new(),
        }
    }

    /// A leaf node whose record holds the given plaintext.
    pub fn leaf<S: Into<String>>(node_type: NodeType, text: S) -> Self {
        FixtureNode {
            node_type,
            text: Some(text.into()),
            segments: Vec::new(),
            children: Vec::new(),
        }
    }

    /// A clip node owning the given transcript segments.
    pub fn clip(segments: &[&str]) -> Self {
        FixtureNode {
            node_type: NodeType::Clip,
            text: None,
            segments: segments.iter().map(|s| s.to_string()).collect(),
            children: Vec::new(),
        }
    }

    /// Append a child node.
    pub fn child(mut self, child: FixtureNode) -> Self {
        self.children.push(child);
        self
    }
}

struct StoredNode {
    node_type: NodeType,
    record: RecordRef,
    children: Vec<usize>,
}

/// An in-memory corpus tree that is its own record loader.
pub struct FixtureTree {
    nodes: Vec<StoredNode>,
    records: AHashMap<RecordRef, String>,
    clips: AHashMap<RecordRef, Vec<String>>,
}

impl FixtureTree {
    /// Flatten the builder tree into an addressable fixture.
    pub fn new(root: FixtureNode) -> Self {
        let mut tree = FixtureTree {
            nodes: Vec::new(),
            records: AHashMap::new(),
            clips: AHashMap::new(),
        };
        tree.store(root);
        tree
    }

    /// The node id of the tree root.
    pub fn root(&self) -> usize {
        0
    }

    fn store(&mut self, node: FixtureNode) -> usize {
        let id = self.nodes.len();
        let record = id as RecordRef;
        self.nodes.push(StoredNode {
            node_type: node.node_type,
            record,
            children: Vec::new(),
        });

        if let Some(text) = node.text {
            self.records.insert(record, text);
        }
        if !node.segments.is_empty() {
            self.clips.insert(record, node.segments);
        }

        for child in node.children {
            let child_id = self.store(child);
            self.nodes[id].children.push(child_id);
        }
        id
    }
}

impl CorpusTree for FixtureTree {
    type NodeId = usize;

    fn node_type(&self, node: usize) -> NodeType {
        self.nodes[node].node_type
    }

    fn record_ref(&self, node: usize) -> RecordRef {
        self.nodes[node].record
    }

    fn children(&self, node: usize) -> Vec<usize> {
        self.nodes[node].children.clone()
    }
}

impl RecordLoader for FixtureTree {
    fn plaintext(&self, _node_type: NodeType, record: RecordRef) -> Result<String> {
        self.records
            .get(&record)
            .cloned()
            .ok_or_else(|| LexifreqError::corpus(format!("no record {record}")))
    }

    fn clip_segments(&self, record: RecordRef) -> Result<Vec<String>> {
        self.clips
            .get(&record)
            .cloned()
            .ok_or_else(|| LexifreqError::corpus(format!("no clip record {record}")))
    }
}
