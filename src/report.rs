//! Report row model.
//!
//! Combines a frequency map with the synonym grouping store into the rows a
//! report front-end displays: one row per group label or ungrouped word,
//! with an aggregate count and the group's member list. Rows are ephemeral;
//! they are recomputed whenever the frequencies or the grouping change and
//! are never persisted.
//!
//! Sorting lives here rather than in any widget: given a column and a
//! direction, rows are ordered by that column with a case-insensitive label
//! tie-break that stays ascending even when the primary sort is descending.

use std::cmp::Ordering;
use std::collections::BTreeMap;

use crate::count::FrequencyMap;
use crate::synonym::persistence::SynonymPersistence;
use crate::synonym::store::SynonymStore;
use crate::synonym::{DO_NOT_SHOW_GROUP, SynonymLookup};

/// One display row: a group label or ungrouped word with its aggregate count.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ReportRow {
    /// Group label, or the word itself for ungrouped words.
    pub label: String,
    /// Sum of the counts of every frequency-map key mapping to this label.
    pub count: u64,
    /// Sorted member list; empty for ungrouped words.
    pub members: Vec<String>,
}

impl ReportRow {
    /// The member list as the space-joined string the report displays.
    pub fn members_string(&self) -> String {
        self.members.join(" ")
    }
}

/// The report column a sort is keyed on.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum SortColumn {
    /// The word / group label column.
    Label,
    /// The count column.
    #[default]
    Count,
    /// The member list column.
    Members,
}

/// Sort direction for the primary column.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum SortDirection {
    /// Smallest first.
    Ascending,
    /// Largest first. The default, so the most frequent words lead.
    #[default]
    Descending,
}

/// Filtering and ordering options for a report build.
#[derive(Clone, Debug)]
pub struct ReportOptions {
    /// Rows with a smaller count are dropped. Default 1 (no filtering).
    pub min_frequency: u64,
    /// Rows with a shorter label are dropped. Default 1 (no filtering).
    pub min_word_length: u64,
    /// Primary sort column.
    pub sort_column: SortColumn,
    /// Primary sort direction.
    pub sort_direction: SortDirection,
}

impl Default for ReportOptions {
    fn default() -> Self {
        ReportOptions {
            min_frequency: 1,
            min_word_length: 1,
            sort_column: SortColumn::default(),
            sort_direction: SortDirection::default(),
        }
    }
}

/// Parse a threshold typed by a user.
///
/// Anything that does not parse as a positive integer falls back to the
/// default of 1 (no filtering) instead of failing the report build.
pub fn parse_threshold(text: &str) -> u64 {
    match text.trim().parse::<u64>() {
        Ok(value) if value >= 1 => value,
        _ => 1,
    }
}

/// Build the display rows for the given frequencies and grouping.
///
/// Every frequency-map key is routed through the store's *current* lookup
/// (keys may be raw words or group labels recorded by an earlier count) and
/// counts are summed per resulting label. Rows for the hidden group are
/// excluded from the output entirely.
pub fn build_rows<P: SynonymPersistence>(
    frequencies: &FrequencyMap,
    store: &SynonymStore<P>,
    options: &ReportOptions,
) -> Vec<ReportRow> {
    let mut aggregated: BTreeMap<&str, u64> = BTreeMap::new();
    for (key, count) in frequencies {
        let label = store.group_of(key).unwrap_or(key.as_str());
        *aggregated.entry(label).or_insert(0) += count;
    }

    let mut rows: Vec<ReportRow> = aggregated
        .into_iter()
        .filter(|(label, count)| {
            *label != DO_NOT_SHOW_GROUP
                && *count >= options.min_frequency
                && label.chars().count() as u64 >= options.min_word_length
        })
        .map(|(label, count)| ReportRow {
            label: label.to_string(),
            count,
            members: store.members(label).map(|m| m.to_vec()).unwrap_or_default(),
        })
        .collect();

    sort_rows(&mut rows, options.sort_column, options.sort_direction);
    rows
}

/// Sort rows by the given column and direction.
///
/// The direction applies to the primary key only; ties always break by
/// case-insensitive label, ascending, so flipping the primary direction
/// never flips the alphabetic sense of equal-valued rows.
pub fn sort_rows(rows: &mut [ReportRow], column: SortColumn, direction: SortDirection) {
    rows.sort_by(|a, b| {
        let primary = match column {
            SortColumn::Label => a.label.to_lowercase().cmp(&b.label.to_lowercase()),
            SortColumn::Count => a.count.cmp(&b.count),
            SortColumn::Members => a
                .members_string()
                .to_lowercase()
                .cmp(&b.members_string().to_lowercase()),
        };
        let primary = match direction {
            SortDirection::Ascending => primary,
            SortDirection::Descending => primary.reverse(),
        };
        primary.then_with(|| tie_break(a, b))
    });
}

fn tie_break(a: &ReportRow, b: &ReportRow) -> Ordering {
    a.label.to_lowercase().cmp(&b.label.to_lowercase())
}
