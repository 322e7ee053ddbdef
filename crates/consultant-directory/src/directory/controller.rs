use std::collections::BTreeSet;

use serde::Serialize;

use super::domain::{InvalidRangeError, RateRange};
use super::query::QuerySpec;

/// Snapshot of the user-adjustable filter controls.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FilterState {
    pub text_term: String,
    pub selected_tags: BTreeSet<String>,
    pub remote_only: bool,
    pub rate_range: RateRange,
}

impl FilterState {
    pub fn initial(rate_bounds: RateRange) -> Self {
        Self {
            text_term: String::new(),
            selected_tags: BTreeSet::new(),
            remote_only: false,
            rate_range: rate_bounds,
        }
    }

    fn with_text(&self, term: String) -> Self {
        Self {
            text_term: term,
            ..self.clone()
        }
    }

    fn with_toggled_tag(&self, tag: &str) -> Self {
        let mut selected_tags = self.selected_tags.clone();
        if !selected_tags.remove(tag) {
            selected_tags.insert(tag.to_string());
        }
        Self {
            selected_tags,
            ..self.clone()
        }
    }

    fn with_remote_only(&self, remote_only: bool) -> Self {
        Self {
            remote_only,
            ..self.clone()
        }
    }

    fn with_rate_range(&self, rate_range: RateRange) -> Self {
        Self {
            rate_range,
            ..self.clone()
        }
    }

    pub fn to_query_spec(&self) -> QuerySpec {
        QuerySpec::match_all(self.rate_range)
            .with_text(self.text_term.as_str())
            .with_tags(self.selected_tags.iter().cloned())
            .with_remote_only(self.remote_only)
    }
}

/// Owns the current filter selection for a listing session.
///
/// The controller never runs queries. Hosts pull [`current_query_spec`]
/// when the user asks for results, typically on a "search" or "apply" action.
///
/// [`current_query_spec`]: FilterStateController::current_query_spec
#[derive(Debug, Clone)]
pub struct FilterStateController {
    initial: FilterState,
    state: FilterState,
    revision: u64,
}

impl FilterStateController {
    pub fn new(rate_bounds: RateRange) -> Self {
        let initial = FilterState::initial(rate_bounds);
        Self {
            state: initial.clone(),
            initial,
            revision: 0,
        }
    }

    pub fn state(&self) -> &FilterState {
        &self.state
    }

    /// Bumped on every accepted transition, including `reset`.
    pub fn revision(&self) -> u64 {
        self.revision
    }

    pub fn set_text(&mut self, term: impl Into<String>) -> &FilterState {
        let next = self.state.with_text(term.into());
        self.replace(next)
    }

    /// Adds the tag when absent, removes it when present.
    pub fn toggle_tag(&mut self, tag: &str) -> &FilterState {
        let next = self.state.with_toggled_tag(tag);
        self.replace(next)
    }

    pub fn set_remote_only(&mut self, remote_only: bool) -> &FilterState {
        let next = self.state.with_remote_only(remote_only);
        self.replace(next)
    }

    /// Rejects `lo > hi` and keeps the current range.
    pub fn set_rate_range(&mut self, lo: f64, hi: f64) -> Result<&FilterState, InvalidRangeError> {
        let range = RateRange::new(lo, hi)?;
        let next = self.state.with_rate_range(range);
        Ok(self.replace(next))
    }

    pub fn reset(&mut self) -> &FilterState {
        let next = self.initial.clone();
        self.replace(next)
    }

    pub fn current_query_spec(&self) -> QuerySpec {
        self.state.to_query_spec()
    }

    fn replace(&mut self, next: FilterState) -> &FilterState {
        self.state = next;
        self.revision += 1;
        &self.state
    }
}
