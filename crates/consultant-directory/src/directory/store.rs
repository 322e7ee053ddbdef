use std::collections::HashSet;
use std::ops::Deref;
use std::sync::Arc;

use super::domain::{DirectoryEntry, TagVocabulary, ValidationError};

/// Immutable view of the store as of one load.
#[derive(Debug, Clone)]
pub struct StoreSnapshot {
    entries: Arc<[DirectoryEntry]>,
    generation: u64,
}

impl StoreSnapshot {
    pub fn entries(&self) -> &[DirectoryEntry] {
        &self.entries
    }

    /// Load counter the snapshot was taken at; zero before the first load.
    pub fn generation(&self) -> u64 {
        self.generation
    }
}

impl Deref for StoreSnapshot {
    type Target = [DirectoryEntry];

    fn deref(&self) -> &Self::Target {
        &self.entries
    }
}

/// Holds the candidate set for the session. Entries are replaced wholesale,
/// never edited in place.
#[derive(Debug, Clone)]
pub struct RecordStore {
    current: StoreSnapshot,
}

impl Default for RecordStore {
    fn default() -> Self {
        Self {
            current: StoreSnapshot {
                entries: Arc::from(Vec::new()),
                generation: 0,
            },
        }
    }
}

impl RecordStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Replaces the working set. All-or-nothing: on error the previous
    /// snapshot stays in place.
    pub fn load(&mut self, entries: Vec<DirectoryEntry>) -> Result<(), ValidationError> {
        validate_entries(&entries)?;
        self.current = StoreSnapshot {
            entries: Arc::from(entries),
            generation: self.current.generation + 1,
        };
        Ok(())
    }

    /// Full set in insertion order.
    pub fn all(&self) -> &[DirectoryEntry] {
        self.current.entries()
    }

    pub fn generation(&self) -> u64 {
        self.current.generation
    }

    pub fn snapshot(&self) -> StoreSnapshot {
        self.current.clone()
    }

    pub fn len(&self) -> usize {
        self.current.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.current.entries.is_empty()
    }

    /// Entries carrying tags outside the vocabulary, paired with those tags.
    pub fn unknown_tags<'a>(
        &'a self,
        vocabulary: &TagVocabulary,
    ) -> Vec<(&'a DirectoryEntry, Vec<&'a str>)> {
        self.all()
            .iter()
            .filter_map(|entry| {
                let unknown = vocabulary.unknown_tags(entry);
                (!unknown.is_empty()).then_some((entry, unknown))
            })
            .collect()
    }
}

fn validate_entries(entries: &[DirectoryEntry]) -> Result<(), ValidationError> {
    let mut seen = HashSet::with_capacity(entries.len());
    for entry in entries {
        if !entry.rate.is_finite() {
            return Err(ValidationError::NonFiniteRate { id: entry.id });
        }
        if entry.rate < 0.0 {
            return Err(ValidationError::NegativeRate {
                id: entry.id,
                rate: entry.rate,
            });
        }
        if !seen.insert(entry.id) {
            return Err(ValidationError::DuplicateId(entry.id));
        }
    }
    Ok(())
}
