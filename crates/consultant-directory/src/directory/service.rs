use std::sync::RwLock;

use serde::Serialize;
use tracing::{info, warn};

use super::domain::{
    DirectoryEntry, InvalidRangeError, RateRange, TagVocabulary, ValidationError,
};
use super::executor::{QueryExecutor, ResultSet};
use super::predicate::{MatchTrace, PredicateCompiler};
use super::query::QuerySpec;
use super::store::{RecordStore, StoreSnapshot};
use crate::config::DirectoryConfig;

/// Facade composing the record store, predicate compiler and executor.
///
/// `load` holds the store's write lock; `search` holds the read lock only
/// long enough to clone the current snapshot.
#[derive(Debug)]
pub struct DirectoryService {
    store: RwLock<RecordStore>,
    compiler: PredicateCompiler,
    executor: QueryExecutor,
    rate_bounds: RateRange,
}

impl DirectoryService {
    pub fn new(config: &DirectoryConfig) -> Self {
        Self::with_vocabulary(config.vocabulary.clone(), config.rate_bounds)
    }

    pub fn with_vocabulary(vocabulary: TagVocabulary, rate_bounds: RateRange) -> Self {
        Self {
            store: RwLock::new(RecordStore::new()),
            compiler: PredicateCompiler::new(vocabulary),
            executor: QueryExecutor,
            rate_bounds,
        }
    }

    pub fn vocabulary(&self) -> &TagVocabulary {
        self.compiler.vocabulary()
    }

    pub fn rate_bounds(&self) -> RateRange {
        self.rate_bounds
    }

    /// Identity query over the configured rate bounds.
    pub fn default_query(&self) -> QuerySpec {
        QuerySpec::match_all(self.rate_bounds)
    }

    /// Replaces the directory, returning the new generation.
    pub fn load(&self, entries: Vec<DirectoryEntry>) -> Result<u64, DirectoryError> {
        let mut store = self.store.write().map_err(|_| DirectoryError::Poisoned)?;
        let count = entries.len();

        if let Err(err) = store.load(entries) {
            warn!(error = %err, generation = store.generation(), "directory load rejected");
            return Err(err.into());
        }

        for (entry, unknown) in store.unknown_tags(self.compiler.vocabulary()) {
            warn!(
                entry = %entry.id,
                tags = ?unknown,
                "entry carries expertise tags outside the vocabulary"
            );
        }

        info!(entries = count, generation = store.generation(), "directory loaded");
        Ok(store.generation())
    }

    pub fn snapshot(&self) -> Result<StoreSnapshot, DirectoryError> {
        let store = self.store.read().map_err(|_| DirectoryError::Poisoned)?;
        Ok(store.snapshot())
    }

    pub fn entries(&self) -> Result<Vec<DirectoryEntry>, DirectoryError> {
        Ok(self.snapshot()?.entries().to_vec())
    }

    pub fn search(&self, spec: &QuerySpec) -> Result<SearchOutcome, DirectoryError> {
        let snapshot = self.snapshot()?;
        let predicate = self.compiler.compile(spec)?;
        let results = self.executor.execute(&snapshot, &predicate);

        info!(
            matches = results.len(),
            candidates = snapshot.len(),
            generation = results.generation(),
            "directory search executed"
        );

        Ok(SearchOutcome::from_results(&results))
    }

    /// Like [`search`](Self::search) but keeps the per-clause trail for
    /// every candidate, matched or not.
    pub fn explain(&self, spec: &QuerySpec) -> Result<Vec<ExplainedEntry>, DirectoryError> {
        let snapshot = self.snapshot()?;
        let predicate = self.compiler.compile(spec)?;

        Ok(snapshot
            .entries()
            .iter()
            .map(|entry| ExplainedEntry {
                entry: entry.clone(),
                trace: predicate.explain(entry),
            })
            .collect())
    }
}

/// Owned search result handed to hosts.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SearchOutcome {
    pub generation: u64,
    pub count: usize,
    pub summary: String,
    pub entries: Vec<DirectoryEntry>,
}

impl SearchOutcome {
    pub fn from_results(results: &ResultSet<'_>) -> Self {
        Self {
            generation: results.generation(),
            count: results.len(),
            summary: results.summary(),
            entries: results.to_owned_entries(),
        }
    }

    pub fn names(&self) -> Vec<&str> {
        self.entries.iter().map(|entry| entry.name.as_str()).collect()
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ExplainedEntry {
    pub entry: DirectoryEntry,
    pub trace: MatchTrace,
}

/// Error raised by the directory service.
#[derive(Debug, thiserror::Error)]
pub enum DirectoryError {
    #[error(transparent)]
    Validation(#[from] ValidationError),
    #[error(transparent)]
    InvalidRange(#[from] InvalidRangeError),
    #[error("directory store lock poisoned")]
    Poisoned,
}
