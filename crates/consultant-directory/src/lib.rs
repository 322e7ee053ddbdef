//! Query engine behind the consultant marketplace listing page.
//!
//! Entries live in a [`RecordStore`](directory::RecordStore); a
//! [`FilterStateController`](directory::FilterStateController) tracks the
//! user's filter selection; the host pulls the derived
//! [`QuerySpec`](directory::QuerySpec), compiles it with a
//! [`PredicateCompiler`](directory::PredicateCompiler) and runs it through the
//! [`QueryExecutor`](directory::QueryExecutor).
//! [`DirectoryService`](directory::DirectoryService) bundles the three for
//! hosts that share one directory across threads.

pub mod config;
pub mod directory;
pub mod error;
pub mod telemetry;
