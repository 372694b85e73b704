//! Synonym grouping for word frequency reports.
//!
//! A synonym group is a named equivalence class of words whose counts are
//! aggregated together in the report. The [`store::SynonymStore`] owns the
//! group definitions and the derived word→group lookup; every mutation is
//! mirrored to a [`persistence::SynonymPersistence`] backend before the
//! in-memory state changes.

pub mod persistence;
pub mod store;
pub mod suggest;

/// Reserved group label whose members are hidden from report output.
///
/// Words in this group are still counted and tracked like any other group;
/// only the report row is suppressed.
pub const DO_NOT_SHOW_GROUP: &str = "Do Not Show Group";

/// Read-only word→group lookup, the seam between counting and grouping.
pub trait SynonymLookup {
    /// The label of the group `word` belongs to, if any.
    fn group_of(&self, word: &str) -> Option<&str>;
}

/// A lookup with no groups. Used for raw, substitution-free counts.
pub struct EmptyLookup;

impl SynonymLookup for EmptyLookup {
    fn group_of(&self, _word: &str) -> Option<&str> {
        None
    }
}
