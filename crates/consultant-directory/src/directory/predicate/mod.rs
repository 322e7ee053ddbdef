//! Compiles a [`QuerySpec`] into an executable predicate.
//!
//! A compiled [`Predicate`] is the conjunction of four clause groups, always
//! in the same order:
//!
//! ```text
//! match = text ∧ tags ∧ remote ∧ rate
//! ```
//!
//! Within the tag group the rule is OR: an entry matches when it carries at
//! least one of the required tags. Every group treats its "empty" setting
//! (no text, no tags, `remote_only = false`) as trivially satisfied.

mod clauses;

pub use clauses::{Clause, ClauseKind, RateClause, RemoteClause, TagClause, TextClause};

use std::sync::Arc;

use serde::Serialize;
use tracing::debug;

use super::domain::{DirectoryEntry, InvalidRangeError, TagVocabulary};
use super::query::QuerySpec;

/// Stateless compiler bound to the configured tag vocabulary.
#[derive(Debug, Clone)]
pub struct PredicateCompiler {
    vocabulary: Arc<TagVocabulary>,
}

impl PredicateCompiler {
    pub fn new(vocabulary: TagVocabulary) -> Self {
        Self {
            vocabulary: Arc::new(vocabulary),
        }
    }

    pub fn vocabulary(&self) -> &TagVocabulary {
        &self.vocabulary
    }

    pub fn compile(&self, spec: &QuerySpec) -> Result<Predicate, InvalidRangeError> {
        spec.rate_range().validate()?;

        let clauses = vec![
            Clause::Text(TextClause::new(spec.effective_text())),
            Clause::Tags(TagClause::new(
                spec.required_tags(),
                Arc::clone(&self.vocabulary),
            )),
            Clause::Remote(RemoteClause::new(spec.remote_only())),
            Clause::Rate(RateClause::new(spec.rate_range())),
        ];

        debug!(
            text = spec.effective_text().unwrap_or(""),
            tags = spec.required_tags().len(),
            remote_only = spec.remote_only(),
            rate_range = %spec.rate_range(),
            "compiled directory predicate"
        );

        Ok(Predicate { clauses })
    }
}

/// Conjunction of clauses over a directory entry.
#[derive(Debug, Clone, PartialEq)]
pub struct Predicate {
    clauses: Vec<Clause>,
}

impl Predicate {
    pub fn matches(&self, entry: &DirectoryEntry) -> bool {
        self.clauses.iter().all(|clause| clause.matches(entry))
    }

    pub fn clauses(&self) -> &[Clause] {
        &self.clauses
    }

    /// Evaluates every clause without short-circuiting, for audit output.
    pub fn explain(&self, entry: &DirectoryEntry) -> MatchTrace {
        let outcomes: Vec<ClauseOutcome> = self
            .clauses
            .iter()
            .map(|clause| ClauseOutcome {
                kind: clause.kind(),
                matched: clause.matches(entry),
            })
            .collect();

        MatchTrace {
            matched: outcomes.iter().all(|outcome| outcome.matched),
            outcomes,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ClauseOutcome {
    pub kind: ClauseKind,
    pub matched: bool,
}

/// Per-clause evaluation trail for one entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MatchTrace {
    pub matched: bool,
    pub outcomes: Vec<ClauseOutcome>,
}

impl MatchTrace {
    pub fn failed(&self) -> impl Iterator<Item = ClauseKind> + '_ {
        self.outcomes
            .iter()
            .filter(|outcome| !outcome.matched)
            .map(|outcome| outcome.kind)
    }
}
