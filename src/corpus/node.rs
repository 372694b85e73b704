//! Corpus tree node types and the read-only tree interface.
//!
//! The application keeps its content hierarchy in an external tree widget;
//! the engine only needs a read-only view of it. [`CorpusTree`] abstracts
//! that view (node type, record reference, child enumeration) so extraction
//! can run against the live application tree or an in-memory fixture.

/// Reference number of a persisted record.
pub type RecordRef = u64;

/// The type tag carried by every corpus tree node.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum NodeType {
    /// Root of the library hierarchy.
    LibraryRoot,
    /// A library of episodes and documents.
    Library,
    /// A library node inside a search result.
    SearchLibrary,
    /// An episode holding transcripts.
    Episode,
    /// An episode node inside a search result.
    SearchEpisode,
    /// Root of the collections hierarchy.
    CollectionRoot,
    /// A collection of quotes and clips.
    Collection,
    /// A collection node inside a search result.
    SearchCollection,
    /// A document leaf.
    Document,
    /// A document leaf inside a search result.
    SearchDocument,
    /// A transcript leaf.
    Transcript,
    /// A transcript leaf inside a search result.
    SearchTranscript,
    /// A quote leaf.
    Quote,
    /// A quote leaf inside a search result.
    SearchQuote,
    /// A clip owning several transcript segments.
    Clip,
    /// A clip node inside a search result.
    SearchClip,
    /// A note attached to any other node. Contributes no text.
    Note,
    /// A snapshot node. Contributes no text.
    Snapshot,
    /// Anything the tree hands us that we do not recognize.
    Unknown,
}

impl NodeType {
    /// Container nodes are recursed into; their own records hold no text.
    pub fn is_container(self) -> bool {
        matches!(
            self,
            NodeType::LibraryRoot
                | NodeType::Library
                | NodeType::SearchLibrary
                | NodeType::Episode
                | NodeType::SearchEpisode
                | NodeType::CollectionRoot
                | NodeType::Collection
                | NodeType::SearchCollection
        )
    }

    /// Nodes that are skipped outright during extraction.
    pub fn is_skipped(self) -> bool {
        matches!(self, NodeType::Note | NodeType::Snapshot)
    }

    /// Leaf nodes whose record exposes a single plaintext field.
    pub fn is_text_leaf(self) -> bool {
        matches!(
            self,
            NodeType::Document
                | NodeType::SearchDocument
                | NodeType::Transcript
                | NodeType::SearchTranscript
                | NodeType::Quote
                | NodeType::SearchQuote
        )
    }

    /// Clip nodes own multiple transcript segments.
    pub fn is_clip(self) -> bool {
        matches!(self, NodeType::Clip | NodeType::SearchClip)
    }
}

/// Read-only view of the corpus tree.
///
/// `NodeId` is whatever handle the hosting tree uses to address a node; the
/// engine never interprets it beyond passing it back to the tree.
pub trait CorpusTree {
    /// Opaque node handle.
    type NodeId: Copy;

    /// The type tag of the given node.
    fn node_type(&self, node: Self::NodeId) -> NodeType;

    /// The record reference number carried by the given node.
    fn record_ref(&self, node: Self::NodeId) -> RecordRef;

    /// The children of the given node, in display order.
    fn children(&self, node: Self::NodeId) -> Vec<Self::NodeId>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_container_classification() {
        assert!(NodeType::Library.is_container());
        assert!(NodeType::SearchCollection.is_container());
        assert!(!NodeType::Document.is_container());
        assert!(!NodeType::Unknown.is_container());
    }

    #[test]
    fn test_skipped_classification() {
        assert!(NodeType::Note.is_skipped());
        assert!(NodeType::Snapshot.is_skipped());
        assert!(!NodeType::Transcript.is_skipped());
    }

    #[test]
    fn test_leaf_classification() {
        assert!(NodeType::Quote.is_text_leaf());
        assert!(NodeType::SearchTranscript.is_text_leaf());
        assert!(!NodeType::Clip.is_text_leaf());
        assert!(NodeType::SearchClip.is_clip());
    }
}
