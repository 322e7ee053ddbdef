use std::collections::BTreeSet;
use std::sync::Arc;

use serde::Serialize;

use crate::directory::domain::{DirectoryEntry, RateRange, TagVocabulary};

/// Predicate group a clause belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ClauseKind {
    Text,
    Tags,
    Remote,
    Rate,
}

impl ClauseKind {
    pub fn label(&self) -> &'static str {
        match self {
            ClauseKind::Text => "text",
            ClauseKind::Tags => "tags",
            ClauseKind::Remote => "remote",
            ClauseKind::Rate => "rate",
        }
    }
}

/// Case-insensitive substring match over name, title, description and location.
#[derive(Debug, Clone, PartialEq)]
pub struct TextClause {
    needle: Option<String>,
}

impl TextClause {
    pub fn new(term: Option<&str>) -> Self {
        Self {
            needle: term.filter(|term| !term.is_empty()).map(str::to_lowercase),
        }
    }

    pub fn matches(&self, entry: &DirectoryEntry) -> bool {
        let Some(needle) = &self.needle else {
            return true;
        };
        entry
            .searchable_text()
            .iter()
            .any(|field| field.to_lowercase().contains(needle.as_str()))
    }
}

/// Entry matches when it carries at least one of the required tags.
///
/// Only vocabulary tags on the entry count, so labels outside the vocabulary
/// never satisfy a filter.
#[derive(Debug, Clone, PartialEq)]
pub struct TagClause {
    required: BTreeSet<String>,
    vocabulary: Arc<TagVocabulary>,
}

impl TagClause {
    pub fn new(required: &BTreeSet<String>, vocabulary: Arc<TagVocabulary>) -> Self {
        Self {
            required: required.clone(),
            vocabulary,
        }
    }

    pub fn matches(&self, entry: &DirectoryEntry) -> bool {
        if self.required.is_empty() {
            return true;
        }
        self.required
            .iter()
            .any(|tag| entry.has_tag(tag) && self.vocabulary.contains(tag))
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RemoteClause {
    remote_only: bool,
}

impl RemoteClause {
    pub fn new(remote_only: bool) -> Self {
        Self { remote_only }
    }

    pub fn matches(&self, entry: &DirectoryEntry) -> bool {
        !self.remote_only || entry.remote
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RateClause {
    range: RateRange,
}

impl RateClause {
    pub fn new(range: RateRange) -> Self {
        Self { range }
    }

    pub fn matches(&self, entry: &DirectoryEntry) -> bool {
        self.range.contains(entry.rate)
    }
}

/// One independently evaluable filter unit.
#[derive(Debug, Clone, PartialEq)]
pub enum Clause {
    Text(TextClause),
    Tags(TagClause),
    Remote(RemoteClause),
    Rate(RateClause),
}

impl Clause {
    pub fn kind(&self) -> ClauseKind {
        match self {
            Clause::Text(_) => ClauseKind::Text,
            Clause::Tags(_) => ClauseKind::Tags,
            Clause::Remote(_) => ClauseKind::Remote,
            Clause::Rate(_) => ClauseKind::Rate,
        }
    }

    pub fn matches(&self, entry: &DirectoryEntry) -> bool {
        match self {
            Clause::Text(clause) => clause.matches(entry),
            Clause::Tags(clause) => clause.matches(entry),
            Clause::Remote(clause) => clause.matches(entry),
            Clause::Rate(clause) => clause.matches(entry),
        }
    }
}
