//! Consultant directory search: record store, predicate compiler, query
//! executor, and the filter state controller behind the listing page.

pub mod controller;
pub mod domain;
pub mod executor;
pub mod import;
pub mod predicate;
pub mod query;
pub mod seed;
pub mod service;
pub mod store;

#[cfg(test)]
mod tests;

pub use controller::{FilterState, FilterStateController};
pub use domain::{
    Availability, DirectoryEntry, EntryId, InvalidRangeError, RateRange, RateType, TagVocabulary,
    ValidationError,
};
pub use executor::{match_summary, QueryExecutor, ResultSet};
pub use import::{DirectoryImporter, ImportError};
pub use predicate::{ClauseKind, ClauseOutcome, MatchTrace, Predicate, PredicateCompiler};
pub use query::QuerySpec;
pub use service::{DirectoryError, DirectoryService, ExplainedEntry, SearchOutcome};
pub use store::{RecordStore, StoreSnapshot};
