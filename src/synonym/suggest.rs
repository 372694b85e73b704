//! Suffix-based synonym suggestion.
//!
//! Proposes new synonym links by literal suffix matching over the current
//! vocabulary: if both `paper` and `papers` occur, `suggest_by_suffix("s")`
//! links them into a group labeled `paper`. This is deliberately dumb string
//! matching, not stemming; it only ever pairs words that both already occur
//! in the corpus.

use crate::count::FrequencyMap;
use crate::error::{LexifreqError, Result};
use crate::synonym::persistence::SynonymPersistence;
use crate::synonym::store::SynonymStore;
use crate::synonym::{DO_NOT_SHOW_GROUP, SynonymLookup};

impl<P: SynonymPersistence> SynonymStore<P> {
    /// Link every vocabulary word `w` whose longer form `w + suffix` also
    /// occurs, grouping both under the label `w`.
    ///
    /// Existing groups labeled `w` are extended; missing ones are created.
    /// Words already committed to an unrelated group are left where they
    /// are, and the hidden group label is never used as a target. Returns
    /// the `(word, matched word)` pairs that were linked, in lexicographic
    /// order of `word`.
    pub fn suggest_by_suffix(
        &mut self,
        suffix: &str,
        vocabulary: &FrequencyMap,
    ) -> Result<Vec<(String, String)>> {
        if suffix.is_empty() {
            return Err(LexifreqError::invalid_operation(
                "suffix must not be empty",
            ));
        }

        let mut words: Vec<&str> = vocabulary.keys().map(|s| s.as_str()).collect();
        words.sort_unstable();

        let mut pairs = Vec::new();
        for word in words {
            if word == DO_NOT_SHOW_GROUP {
                continue;
            }
            let longer = format!("{word}{suffix}");
            if !vocabulary.contains_key(&longer) {
                continue;
            }
            // Leave words alone when either side is already committed to a
            // group other than the one we would create.
            if self.group_of(word).is_some_and(|g| g != word) {
                continue;
            }
            if self.group_of(&longer).is_some_and(|g| g != word) {
                continue;
            }

            self.add_member(word, word)?;
            self.add_member(word, &longer)?;
            pairs.push((word.to_string(), longer));
        }

        Ok(pairs)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::synonym::SynonymLookup;
    use crate::synonym::persistence::MemoryPersistence;

    fn vocab(entries: &[(&str, u64)]) -> FrequencyMap {
        entries
            .iter()
            .map(|(w, c)| (w.to_string(), *c))
            .collect()
    }

    fn empty_store() -> SynonymStore<MemoryPersistence> {
        SynonymStore::new(MemoryPersistence::new()).unwrap()
    }

    #[test]
    fn test_suffix_links_pair() {
        let mut store = empty_store();
        let pairs = store
            .suggest_by_suffix("s", &vocab(&[("beep", 3), ("beeps", 1)]))
            .unwrap();

        assert_eq!(pairs, vec![("beep".to_string(), "beeps".to_string())]);
        assert_eq!(store.members("beep").unwrap(), &["beep", "beeps"]);
        assert!(store.is_consistent());
    }

    #[test]
    fn test_suffix_extends_existing_group() {
        let mut store = empty_store();
        store.add_member("beep", "beep").unwrap();
        store.add_member("beep", "bleep").unwrap();

        let pairs = store
            .suggest_by_suffix("s", &vocab(&[("beep", 3), ("beeps", 1)]))
            .unwrap();

        assert_eq!(pairs.len(), 1);
        assert_eq!(store.members("beep").unwrap(), &["beep", "beeps", "bleep"]);
    }

    #[test]
    fn test_suffix_finds_multiple_pairs_in_order() {
        let mut store = empty_store();
        let pairs = store
            .suggest_by_suffix(
                "s",
                &vocab(&[("word", 2), ("words", 1), ("paper", 5), ("papers", 2)]),
            )
            .unwrap();

        assert_eq!(
            pairs,
            vec![
                ("paper".to_string(), "papers".to_string()),
                ("word".to_string(), "words".to_string()),
            ]
        );
    }

    #[test]
    fn test_suffix_skips_words_grouped_elsewhere() {
        let mut store = empty_store();
        store.add_member("stationery", "paper").unwrap();

        let pairs = store
            .suggest_by_suffix("s", &vocab(&[("paper", 5), ("papers", 2)]))
            .unwrap();

        assert!(pairs.is_empty());
        assert_eq!(store.group_of("papers"), None);
    }

    #[test]
    fn test_suffix_never_targets_hidden_group() {
        let mut store = empty_store();
        let key = format!("{DO_NOT_SHOW_GROUP}s");
        let pairs = store
            .suggest_by_suffix(
                "s",
                &vocab(&[(DO_NOT_SHOW_GROUP, 1), (key.as_str(), 1)]),
            )
            .unwrap();

        assert!(pairs.is_empty());
        assert!(store.is_empty());
    }

    #[test]
    fn test_empty_suffix_rejected() {
        let mut store = empty_store();
        assert!(store.suggest_by_suffix("", &vocab(&[("a", 1)])).is_err());
    }
}
