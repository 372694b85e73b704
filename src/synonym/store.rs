//! The synonym grouping store.
//!
//! Owns the group definitions and the derived word→group lookup, and is the
//! single place grouping mutations happen. Every mutation is written to the
//! persistence backend first; the in-memory state only changes after the
//! corresponding write succeeds, so the store never advertises a lookup
//! entry whose backing record failed to persist. Multi-member operations
//! commit member by member, leaving already-committed members valid when a
//! later write fails.
//!
//! The lookup is a cache: it must always equal the union, over all groups,
//! of (member → group label), and a word belongs to at most one group. The
//! invariant is re-checked after every mutation in debug builds.

use ahash::AHashMap;
use log::warn;

use crate::error::{LexifreqError, Result};
use crate::synonym::persistence::{GroupMap, SynonymPersistence};
use crate::synonym::{DO_NOT_SHOW_GROUP, SynonymLookup};

/// Mutable store of synonym groups, mirrored to a persistence backend.
pub struct SynonymStore<P: SynonymPersistence> {
    persistence: P,
    groups: GroupMap,
    lookup: AHashMap<String, String>,
}

impl<P: SynonymPersistence> SynonymStore<P> {
    /// Load all groups from the backend and build the lookup.
    ///
    /// Membership is exclusive; if the backend hands back a word in two
    /// groups, the first group (in label order) keeps it and the duplicate
    /// is dropped with a warning.
    pub fn new(persistence: P) -> Result<Self> {
        let raw = persistence.load_all()?;
        let mut groups = GroupMap::new();
        let mut lookup = AHashMap::new();

        for (label, members) in raw {
            let mut kept: Vec<String> = Vec::with_capacity(members.len());
            for member in members {
                if let Some(other) = lookup.get(&member) {
                    warn!("word '{member}' appears in groups '{other}' and '{label}'; keeping '{other}'");
                    continue;
                }
                lookup.insert(member.clone(), label.clone());
                kept.push(member);
            }
            kept.sort();
            kept.dedup();
            if !kept.is_empty() {
                groups.insert(label, kept);
            }
        }

        Ok(SynonymStore {
            persistence,
            groups,
            lookup,
        })
    }

    /// Number of groups currently defined.
    pub fn group_count(&self) -> usize {
        self.groups.len()
    }

    /// Whether any groups are defined.
    pub fn is_empty(&self) -> bool {
        self.groups.is_empty()
    }

    /// Whether `label` names an existing group.
    pub fn is_group(&self, label: &str) -> bool {
        self.groups.contains_key(label)
    }

    /// The sorted member list of a group, if it exists.
    pub fn members(&self, label: &str) -> Option<&[String]> {
        self.groups.get(label).map(|m| m.as_slice())
    }

    /// Iterate over all groups in label order.
    pub fn groups(&self) -> impl Iterator<Item = (&str, &[String])> {
        self.groups
            .iter()
            .map(|(label, members)| (label.as_str(), members.as_slice()))
    }

    /// Add `word` to `group`.
    ///
    /// No-op when the word is already a member of this group. Rejected when
    /// the word belongs to a different group; the caller must detach it
    /// first.
    pub fn add_member(&mut self, group: &str, word: &str) -> Result<()> {
        match self.lookup.get(word) {
            Some(current) if current == group => return Ok(()),
            Some(current) => {
                return Err(LexifreqError::invalid_operation(format!(
                    "word '{word}' already belongs to group '{current}'"
                )));
            }
            None => {}
        }

        self.persistence.add_synonym(group, word)?;
        self.insert_member(group, word);
        debug_assert!(self.is_consistent());
        Ok(())
    }

    /// Remove `word` from `group`.
    ///
    /// A missing group or member is a no-op. When the deletion leaves the
    /// group holding exactly one member equal to its own label, the group
    /// has degenerated back into a plain word and is deleted entirely.
    pub fn delete_member(&mut self, group: &str, word: &str) -> Result<()> {
        let is_member = self
            .groups
            .get(group)
            .is_some_and(|members| members.iter().any(|m| m == word));
        if !is_member {
            return Ok(());
        }

        self.persistence.delete_synonym(group, word)?;
        self.remove_member(group, word);

        let collapses = self
            .groups
            .get(group)
            .is_some_and(|members| members.len() == 1 && members[0] == group);
        if collapses {
            self.persistence.delete_synonym(group, group)?;
            self.remove_member(group, group);
        }

        debug_assert!(self.is_consistent());
        Ok(())
    }

    /// Rename a group, moving every member's lookup entry and persisted
    /// record to the new label.
    ///
    /// A missing `old` label is a no-op. The reserved hidden group cannot be
    /// renamed. Renaming onto an existing label merges the member lists.
    pub fn rename_group(&mut self, old: &str, new: &str) -> Result<()> {
        if old == new || !self.groups.contains_key(old) {
            return Ok(());
        }
        if old == DO_NOT_SHOW_GROUP {
            return Err(LexifreqError::invalid_operation(
                "the hidden group cannot be renamed",
            ));
        }
        if new.trim().is_empty() {
            return Err(LexifreqError::invalid_operation(
                "group label must not be empty",
            ));
        }

        let members = self.groups.get(old).cloned().unwrap_or_default();
        for member in &members {
            self.persistence.update_synonym(old, member, new, member)?;
            self.remove_member(old, member);
            self.insert_member(new, member);
        }

        debug_assert!(self.is_consistent());
        Ok(())
    }

    /// Merge the checked report rows into `target`.
    ///
    /// Each item is a row label: either a bare (ungrouped) word or the label
    /// of an existing group. Group rows are flattened: all their members
    /// move to `target` and the emptied source group disappears. A row whose
    /// label equals `target` while `target` already exists is left alone, so
    /// re-merging a group into itself writes nothing. Duplicate items are
    /// ignored. An empty effective selection is a no-op and creates no group.
    pub fn merge_checked(&mut self, target: &str, items: &[String]) -> Result<()> {
        if target.trim().is_empty() {
            return Err(LexifreqError::invalid_operation(
                "group label must not be empty",
            ));
        }

        let mut seen: Vec<&str> = Vec::with_capacity(items.len());
        for item in items {
            let item = item.as_str();
            if seen.contains(&item) {
                continue;
            }
            seen.push(item);

            if item == target && self.groups.contains_key(target) {
                continue;
            }

            if let Some(members) = self.groups.get(item).cloned() {
                // A group row: flatten its members into the target.
                for member in &members {
                    self.persistence.update_synonym(item, member, target, member)?;
                    self.remove_member(item, member);
                    self.insert_member(target, member);
                }
            } else {
                match self.lookup.get(item) {
                    Some(current) if current == target => continue,
                    Some(current) => {
                        return Err(LexifreqError::invalid_operation(format!(
                            "word '{item}' already belongs to group '{current}'"
                        )));
                    }
                    None => {}
                }
                self.persistence.add_synonym(target, item)?;
                self.insert_member(target, item);
            }
        }

        debug_assert!(self.is_consistent());
        Ok(())
    }

    /// Delete every group, in persistence and in memory.
    pub fn clear_all(&mut self) -> Result<()> {
        self.persistence.clear_all()?;
        self.groups.clear();
        self.lookup.clear();
        debug_assert!(self.is_consistent());
        Ok(())
    }

    /// Rebuild the word→group lookup from the group definitions.
    ///
    /// The incremental lookup is a cache; this replay is the ground truth it
    /// must always agree with.
    pub fn rebuild_lookup(&self) -> AHashMap<String, String> {
        let mut lookup = AHashMap::new();
        for (label, members) in &self.groups {
            for member in members {
                lookup.insert(member.clone(), label.clone());
            }
        }
        lookup
    }

    /// Whether the incremental lookup matches a replay of all groups.
    pub fn is_consistent(&self) -> bool {
        self.lookup == self.rebuild_lookup()
    }

    fn insert_member(&mut self, group: &str, word: &str) {
        let members = self.groups.entry(group.to_string()).or_default();
        if !members.iter().any(|m| m == word) {
            members.push(word.to_string());
            members.sort();
        }
        self.lookup.insert(word.to_string(), group.to_string());
    }

    fn remove_member(&mut self, group: &str, word: &str) {
        if let Some(members) = self.groups.get_mut(group) {
            members.retain(|m| m != word);
            if members.is_empty() {
                self.groups.remove(group);
            }
        }
        if self.lookup.get(word).is_some_and(|g| g == group) {
            self.lookup.remove(word);
        }
    }
}

impl<P: SynonymPersistence> SynonymLookup for SynonymStore<P> {
    fn group_of(&self, word: &str) -> Option<&str> {
        self.lookup.get(word).map(|s| s.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::synonym::persistence::MemoryPersistence;

    fn empty_store() -> SynonymStore<MemoryPersistence> {
        SynonymStore::new(MemoryPersistence::new()).unwrap()
    }

    fn strings(items: &[&str]) -> Vec<String> {
        items.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_add_and_lookup() {
        let mut store = empty_store();
        store.add_member("paper", "paper").unwrap();
        store.add_member("paper", "papers").unwrap();

        assert_eq!(store.group_of("papers"), Some("paper"));
        assert_eq!(store.members("paper").unwrap(), &["paper", "papers"]);
        assert!(store.is_consistent());
    }

    #[test]
    fn test_add_rejects_word_in_other_group() {
        let mut store = empty_store();
        store.add_member("a", "word").unwrap();

        assert!(store.add_member("b", "word").is_err());
        // Re-adding to the same group is a quiet no-op.
        assert!(store.add_member("a", "word").is_ok());
    }

    #[test]
    fn test_delete_member_is_noop_when_absent() {
        let mut store = empty_store();
        assert!(store.delete_member("nope", "word").is_ok());

        store.add_member("g", "w1").unwrap();
        assert!(store.delete_member("g", "other").is_ok());
        assert_eq!(store.members("g").unwrap(), &["w1"]);
    }

    #[test]
    fn test_delete_collapses_degenerate_alias_group() {
        let mut store = empty_store();
        store.add_member("paper", "paper").unwrap();
        store.add_member("paper", "papers").unwrap();

        store.delete_member("paper", "papers").unwrap();

        // "paper" alone in group "paper" is just the word again.
        assert!(!store.is_group("paper"));
        assert_eq!(store.group_of("paper"), None);
        assert!(store.is_consistent());
    }

    #[test]
    fn test_delete_keeps_group_with_distinct_member() {
        let mut store = empty_store();
        store.add_member("stationery", "paper").unwrap();
        store.add_member("stationery", "pens").unwrap();

        store.delete_member("stationery", "pens").unwrap();

        // Sole remaining member differs from the label, so the group stays.
        assert_eq!(store.members("stationery").unwrap(), &["paper"]);
    }

    #[test]
    fn test_rename_group_moves_members_and_records() {
        let mut store = empty_store();
        store.add_member("old", "a").unwrap();
        store.add_member("old", "b").unwrap();

        store.rename_group("old", "new").unwrap();

        assert!(!store.is_group("old"));
        assert_eq!(store.members("new").unwrap(), &["a", "b"]);
        assert_eq!(store.group_of("a"), Some("new"));
        assert!(store.is_consistent());
    }

    #[test]
    fn test_rename_missing_group_is_noop() {
        let mut store = empty_store();
        assert!(store.rename_group("ghost", "new").is_ok());
        assert!(store.is_empty());
    }

    #[test]
    fn test_rename_hidden_group_rejected() {
        let mut store = empty_store();
        store.add_member(DO_NOT_SHOW_GROUP, "um").unwrap();

        assert!(store.rename_group(DO_NOT_SHOW_GROUP, "visible").is_err());
    }

    #[test]
    fn test_merge_checked_bare_words() {
        let mut store = empty_store();
        store
            .merge_checked("pronouns", &strings(&["i", "i'm", "my"]))
            .unwrap();

        assert_eq!(store.members("pronouns").unwrap(), &["i", "i'm", "my"]);
        assert!(store.is_consistent());
    }

    #[test]
    fn test_merge_checked_flattens_groups() {
        let mut store = empty_store();
        store.merge_checked("ab", &strings(&["a", "b"])).unwrap();
        store.merge_checked("cd", &strings(&["c", "d"])).unwrap();

        store.merge_checked("all", &strings(&["ab", "cd", "e"])).unwrap();

        assert!(!store.is_group("ab"));
        assert!(!store.is_group("cd"));
        assert_eq!(store.members("all").unwrap(), &["a", "b", "c", "d", "e"]);
        assert!(store.is_consistent());
    }

    #[test]
    fn test_merge_checked_skips_target_row() {
        let mut store = empty_store();
        store.merge_checked("paper", &strings(&["paper", "papers"])).unwrap();
        let before = store.members("paper").unwrap().to_vec();

        // Merging the group's own row back into itself changes nothing.
        store.merge_checked("paper", &strings(&["paper"])).unwrap();
        assert_eq!(store.members("paper").unwrap(), before.as_slice());
    }

    #[test]
    fn test_merge_checked_deduplicates_items() {
        let mut store = empty_store();
        store
            .merge_checked("g", &strings(&["w", "w", "w"]))
            .unwrap();
        assert_eq!(store.members("g").unwrap(), &["w"]);
    }

    #[test]
    fn test_merge_checked_rejects_empty_label() {
        let mut store = empty_store();
        assert!(store.merge_checked("", &strings(&["w"])).is_err());
        assert!(store.merge_checked("  ", &strings(&["w"])).is_err());
    }

    #[test]
    fn test_merge_checked_empty_selection_creates_nothing() {
        let mut store = empty_store();
        store.merge_checked(DO_NOT_SHOW_GROUP, &[]).unwrap();
        assert!(store.is_empty());
    }

    #[test]
    fn test_clear_all() {
        let mut store = empty_store();
        store.merge_checked("g", &strings(&["a", "b"])).unwrap();

        store.clear_all().unwrap();

        assert!(store.is_empty());
        assert_eq!(store.group_of("a"), None);
        assert!(store.persistence.load_all().unwrap().is_empty());
    }

    #[test]
    fn test_load_drops_duplicate_membership() {
        let mut seeded = GroupMap::new();
        seeded.insert("first".to_string(), strings(&["shared", "x"]));
        seeded.insert("second".to_string(), strings(&["shared", "y"]));

        let store = SynonymStore::new(MemoryPersistence::with_groups(seeded)).unwrap();

        assert_eq!(store.group_of("shared"), Some("first"));
        assert_eq!(store.members("second").unwrap(), &["y"]);
        assert!(store.is_consistent());
    }

    #[test]
    fn test_lookup_replay_matches_after_mutations() {
        let mut store = empty_store();
        store.merge_checked("ab", &strings(&["a", "b"])).unwrap();
        store.add_member("ab", "c").unwrap();
        store.delete_member("ab", "b").unwrap();
        store.rename_group("ab", "ac").unwrap();
        store.merge_checked("final", &strings(&["ac", "z"])).unwrap();

        assert_eq!(store.lookup, store.rebuild_lookup());
    }

    /// Backend that fails every write after the first `allow` successes.
    struct FlakyPersistence {
        inner: MemoryPersistence,
        allow: usize,
    }

    impl FlakyPersistence {
        fn countdown(&mut self) -> Result<()> {
            if self.allow == 0 {
                return Err(LexifreqError::persistence("backend unavailable"));
            }
            self.allow -= 1;
            Ok(())
        }
    }

    impl SynonymPersistence for FlakyPersistence {
        fn load_all(&self) -> Result<GroupMap> {
            self.inner.load_all()
        }
        fn add_synonym(&mut self, group: &str, word: &str) -> Result<()> {
            self.countdown()?;
            self.inner.add_synonym(group, word)
        }
        fn delete_synonym(&mut self, group: &str, word: &str) -> Result<()> {
            self.countdown()?;
            self.inner.delete_synonym(group, word)
        }
        fn update_synonym(&mut self, og: &str, ow: &str, ng: &str, nw: &str) -> Result<()> {
            self.countdown()?;
            self.inner.update_synonym(og, ow, ng, nw)
        }
        fn clear_all(&mut self) -> Result<()> {
            self.countdown()?;
            self.inner.clear_all()
        }
    }

    #[test]
    fn test_failed_write_leaves_store_consistent() {
        let backend = FlakyPersistence {
            inner: MemoryPersistence::new(),
            allow: 2,
        };
        let mut store = SynonymStore::new(backend).unwrap();

        // Third write fails partway through the merge.
        let result = store.merge_checked("g", &strings(&["a", "b", "c"]));
        assert!(result.is_err());

        // The two committed members are in place; the failed one is not.
        assert_eq!(store.members("g").unwrap(), &["a", "b"]);
        assert_eq!(store.group_of("c"), None);
        assert!(store.is_consistent());
        assert_eq!(
            store.persistence.load_all().unwrap()["g"],
            strings(&["a", "b"])
        );
    }
}
