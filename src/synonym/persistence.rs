//! Persistence backends for synonym group definitions.
//!
//! Every grouping mutation is written through to a backend before the
//! in-memory store changes, so a crash never leaves the store advertising a
//! group the backend does not hold. The [`JsonFilePersistence`] backend keeps
//! the whole mapping in a JSON file and rewrites it atomically on every
//! mutation; [`MemoryPersistence`] backs throwaway sessions and tests.

use std::collections::BTreeMap;
use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};

use log::debug;
use tempfile::NamedTempFile;

use crate::error::{LexifreqError, Result};

/// Mapping from group label to member list, as persisted.
pub type GroupMap = BTreeMap<String, Vec<String>>;

/// Storage backend for synonym group definitions.
///
/// Each mutation is an individual atomic unit: when a multi-member operation
/// fails partway, the members already written stay written.
pub trait SynonymPersistence {
    /// Load every group. Called once at session start.
    fn load_all(&self) -> Result<GroupMap>;

    /// Record `word` as a member of `group`.
    fn add_synonym(&mut self, group: &str, word: &str) -> Result<()>;

    /// Remove `word` from `group`. Absent records are not an error.
    fn delete_synonym(&mut self, group: &str, word: &str) -> Result<()>;

    /// Move a member record from one group/word pair to another.
    fn update_synonym(
        &mut self,
        old_group: &str,
        old_word: &str,
        new_group: &str,
        new_word: &str,
    ) -> Result<()>;

    /// Delete every group record.
    fn clear_all(&mut self) -> Result<()>;
}

impl SynonymPersistence for Box<dyn SynonymPersistence> {
    fn load_all(&self) -> Result<GroupMap> {
        self.as_ref().load_all()
    }

    fn add_synonym(&mut self, group: &str, word: &str) -> Result<()> {
        self.as_mut().add_synonym(group, word)
    }

    fn delete_synonym(&mut self, group: &str, word: &str) -> Result<()> {
        self.as_mut().delete_synonym(group, word)
    }

    fn update_synonym(
        &mut self,
        old_group: &str,
        old_word: &str,
        new_group: &str,
        new_word: &str,
    ) -> Result<()> {
        self.as_mut()
            .update_synonym(old_group, old_word, new_group, new_word)
    }

    fn clear_all(&mut self) -> Result<()> {
        self.as_mut().clear_all()
    }
}

fn insert_member(groups: &mut GroupMap, group: &str, word: &str) {
    let members = groups.entry(group.to_string()).or_default();
    if !members.iter().any(|m| m == word) {
        members.push(word.to_string());
        members.sort();
    }
}

fn remove_member(groups: &mut GroupMap, group: &str, word: &str) {
    if let Some(members) = groups.get_mut(group) {
        members.retain(|m| m != word);
        if members.is_empty() {
            groups.remove(group);
        }
    }
}

/// In-memory persistence backend.
#[derive(Debug, Default)]
pub struct MemoryPersistence {
    groups: GroupMap,
}

impl MemoryPersistence {
    /// Create an empty in-memory backend.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a backend pre-populated with the given groups.
    pub fn with_groups(groups: GroupMap) -> Self {
        MemoryPersistence { groups }
    }
}

impl SynonymPersistence for MemoryPersistence {
    fn load_all(&self) -> Result<GroupMap> {
        Ok(self.groups.clone())
    }

    fn add_synonym(&mut self, group: &str, word: &str) -> Result<()> {
        insert_member(&mut self.groups, group, word);
        Ok(())
    }

    fn delete_synonym(&mut self, group: &str, word: &str) -> Result<()> {
        remove_member(&mut self.groups, group, word);
        Ok(())
    }

    fn update_synonym(
        &mut self,
        old_group: &str,
        old_word: &str,
        new_group: &str,
        new_word: &str,
    ) -> Result<()> {
        remove_member(&mut self.groups, old_group, old_word);
        insert_member(&mut self.groups, new_group, new_word);
        Ok(())
    }

    fn clear_all(&mut self) -> Result<()> {
        self.groups.clear();
        Ok(())
    }
}

/// JSON-file persistence backend.
///
/// The file holds a single JSON object mapping group labels to member
/// arrays. Every mutation rewrites the file through a temp file in the same
/// directory followed by an atomic rename, so readers never observe a
/// partially written mapping.
#[derive(Debug)]
pub struct JsonFilePersistence {
    path: PathBuf,
    groups: GroupMap,
}

impl JsonFilePersistence {
    /// Open (or create) the synonym file at `path`.
    pub fn open<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref().to_path_buf();
        let groups = if path.exists() {
            let content = fs::read_to_string(&path)?;
            serde_json::from_str(&content).map_err(|e| {
                LexifreqError::persistence(format!(
                    "failed to parse synonym file '{}': {e}",
                    path.display()
                ))
            })?
        } else {
            GroupMap::new()
        };
        debug!(
            "loaded {} synonym group(s) from {}",
            groups.len(),
            path.display()
        );
        Ok(JsonFilePersistence { path, groups })
    }

    /// The path of the backing file.
    pub fn path(&self) -> &Path {
        &self.path
    }

    fn commit(&mut self, groups: GroupMap) -> Result<()> {
        let dir = self.path.parent().filter(|p| !p.as_os_str().is_empty());
        let mut tmp = match dir {
            Some(dir) => NamedTempFile::new_in(dir)?,
            None => NamedTempFile::new_in(".")?,
        };
        let content = serde_json::to_string_pretty(&groups)?;
        tmp.write_all(content.as_bytes())?;
        tmp.persist(&self.path).map_err(|e| {
            LexifreqError::persistence(format!(
                "failed to replace synonym file '{}': {e}",
                self.path.display()
            ))
        })?;
        self.groups = groups;
        Ok(())
    }
}

impl SynonymPersistence for JsonFilePersistence {
    fn load_all(&self) -> Result<GroupMap> {
        Ok(self.groups.clone())
    }

    fn add_synonym(&mut self, group: &str, word: &str) -> Result<()> {
        let mut groups = self.groups.clone();
        insert_member(&mut groups, group, word);
        self.commit(groups)
    }

    fn delete_synonym(&mut self, group: &str, word: &str) -> Result<()> {
        let mut groups = self.groups.clone();
        remove_member(&mut groups, group, word);
        self.commit(groups)
    }

    fn update_synonym(
        &mut self,
        old_group: &str,
        old_word: &str,
        new_group: &str,
        new_word: &str,
    ) -> Result<()> {
        let mut groups = self.groups.clone();
        remove_member(&mut groups, old_group, old_word);
        insert_member(&mut groups, new_group, new_word);
        self.commit(groups)
    }

    fn clear_all(&mut self) -> Result<()> {
        self.commit(GroupMap::new())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_memory_round_trip() {
        let mut backend = MemoryPersistence::new();
        backend.add_synonym("paper", "paper").unwrap();
        backend.add_synonym("paper", "papers").unwrap();

        let groups = backend.load_all().unwrap();
        assert_eq!(groups["paper"], vec!["paper", "papers"]);
    }

    #[test]
    fn test_memory_delete_drops_empty_group() {
        let mut backend = MemoryPersistence::new();
        backend.add_synonym("g", "w").unwrap();
        backend.delete_synonym("g", "w").unwrap();

        assert!(backend.load_all().unwrap().is_empty());
    }

    #[test]
    fn test_memory_update_moves_member() {
        let mut backend = MemoryPersistence::new();
        backend.add_synonym("old", "w").unwrap();
        backend.update_synonym("old", "w", "new", "w").unwrap();

        let groups = backend.load_all().unwrap();
        assert!(!groups.contains_key("old"));
        assert_eq!(groups["new"], vec!["w"]);
    }

    #[test]
    fn test_json_file_round_trip() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("synonyms.json");

        {
            let mut backend = JsonFilePersistence::open(&path).unwrap();
            backend.add_synonym("paper", "paper").unwrap();
            backend.add_synonym("paper", "papers").unwrap();
            backend.add_synonym("pronouns", "i").unwrap();
        }

        let reopened = JsonFilePersistence::open(&path).unwrap();
        let groups = reopened.load_all().unwrap();
        assert_eq!(groups["paper"], vec!["paper", "papers"]);
        assert_eq!(groups["pronouns"], vec!["i"]);
    }

    #[test]
    fn test_json_file_clear_all() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("synonyms.json");

        let mut backend = JsonFilePersistence::open(&path).unwrap();
        backend.add_synonym("g", "w").unwrap();
        backend.clear_all().unwrap();

        let reopened = JsonFilePersistence::open(&path).unwrap();
        assert!(reopened.load_all().unwrap().is_empty());
    }

    #[test]
    fn test_json_file_rejects_garbage() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("synonyms.json");
        fs::write(&path, "not json").unwrap();

        assert!(JsonFilePersistence::open(&path).is_err());
    }
}
