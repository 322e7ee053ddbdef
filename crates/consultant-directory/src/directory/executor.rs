use serde::Serialize;

use super::domain::{DirectoryEntry, EntryId};
use super::predicate::Predicate;
use super::store::StoreSnapshot;

/// Applies compiled predicates to a store snapshot.
#[derive(Debug, Clone, Copy, Default)]
pub struct QueryExecutor;

impl QueryExecutor {
    /// Stable linear scan; retained entries keep store order.
    pub fn execute<'a>(&self, snapshot: &'a StoreSnapshot, predicate: &Predicate) -> ResultSet<'a> {
        let entries = snapshot
            .entries()
            .iter()
            .filter(|entry| predicate.matches(entry))
            .collect();

        ResultSet {
            entries,
            generation: snapshot.generation(),
        }
    }
}

/// Entries matching one query, in store order.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ResultSet<'a> {
    entries: Vec<&'a DirectoryEntry>,
    generation: u64,
}

impl<'a> ResultSet<'a> {
    pub fn entries(&self) -> &[&'a DirectoryEntry] {
        &self.entries
    }

    pub fn iter(&self) -> impl Iterator<Item = &'a DirectoryEntry> + '_ {
        self.entries.iter().copied()
    }

    pub fn ids(&self) -> Vec<EntryId> {
        self.entries.iter().map(|entry| entry.id).collect()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Store generation the result was computed against.
    pub fn generation(&self) -> u64 {
        self.generation
    }

    pub fn summary(&self) -> String {
        match_summary(self.len())
    }

    pub fn to_owned_entries(&self) -> Vec<DirectoryEntry> {
        self.entries.iter().map(|entry| (*entry).clone()).collect()
    }
}

/// "1 consultant found" / "N consultants found".
pub fn match_summary(count: usize) -> String {
    if count == 1 {
        "1 consultant found".to_string()
    } else {
        format!("{count} consultants found")
    }
}
