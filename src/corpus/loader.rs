//! Record loading interface.
//!
//! Leaf nodes in the corpus tree reference persisted records by number; the
//! engine asks a [`RecordLoader`] for the plaintext of those records. The
//! real application backs this with its database layer; tests back it with a
//! map of canned strings.

use crate::corpus::node::{NodeType, RecordRef};
use crate::error::Result;

/// Loads record plaintext for corpus extraction.
pub trait RecordLoader {
    /// The plaintext of a document, transcript, or quote record.
    fn plaintext(&self, node_type: NodeType, record: RecordRef) -> Result<String>;

    /// The plaintext of each transcript segment owned by a clip record, in
    /// segment order.
    fn clip_segments(&self, record: RecordRef) -> Result<Vec<String>>;
}
