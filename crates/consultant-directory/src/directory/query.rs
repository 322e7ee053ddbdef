use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

use super::domain::{InvalidRangeError, RateRange};

/// Complete description of one search request's filter criteria.
///
/// Never mutated in place: each `with_*` call returns a new spec.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct QuerySpec {
    #[serde(default)]
    text_term: Option<String>,
    #[serde(default)]
    required_tags: BTreeSet<String>,
    #[serde(default)]
    remote_only: bool,
    rate_range: RateRange,
}

impl QuerySpec {
    /// Spec that constrains nothing but the rate interval.
    pub fn match_all(rate_range: RateRange) -> Self {
        Self {
            text_term: None,
            required_tags: BTreeSet::new(),
            remote_only: false,
            rate_range,
        }
    }

    pub fn with_text(&self, term: impl Into<String>) -> Self {
        let term = term.into();
        Self {
            text_term: (!term.is_empty()).then_some(term),
            ..self.clone()
        }
    }

    pub fn with_tags<I, S>(&self, tags: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            required_tags: tags.into_iter().map(Into::into).collect(),
            ..self.clone()
        }
    }

    pub fn with_remote_only(&self, remote_only: bool) -> Self {
        Self {
            remote_only,
            ..self.clone()
        }
    }

    pub fn with_rate_range(&self, min: f64, max: f64) -> Result<Self, InvalidRangeError> {
        Ok(Self {
            rate_range: RateRange::new(min, max)?,
            ..self.clone()
        })
    }

    /// Text term with the empty string folded into "absent".
    pub fn effective_text(&self) -> Option<&str> {
        self.text_term.as_deref().filter(|term| !term.is_empty())
    }

    pub fn required_tags(&self) -> &BTreeSet<String> {
        &self.required_tags
    }

    pub fn remote_only(&self) -> bool {
        self.remote_only
    }

    pub fn rate_range(&self) -> RateRange {
        self.rate_range
    }
}
