use std::collections::BTreeSet;

use crate::directory::domain::{
    Availability, DirectoryEntry, EntryId, RateRange, RateType, TagVocabulary,
};
use crate::directory::predicate::{Predicate, PredicateCompiler};
use crate::directory::query::QuerySpec;
use crate::directory::seed;
use crate::directory::store::{RecordStore, StoreSnapshot};

pub(super) fn rate_bounds() -> RateRange {
    RateRange::new(0.0, 200.0).expect("valid bounds")
}

pub(super) fn identity_spec() -> QuerySpec {
    QuerySpec::match_all(rate_bounds())
}

pub(super) fn compiler() -> PredicateCompiler {
    PredicateCompiler::new(seed::expertise_vocabulary())
}

pub(super) fn compile(spec: &QuerySpec) -> Predicate {
    compiler().compile(spec).expect("spec compiles")
}

pub(super) fn seeded_store() -> RecordStore {
    let mut store = RecordStore::new();
    store
        .load(seed::sample_entries())
        .expect("seed directory is valid");
    store
}

pub(super) fn seeded_snapshot() -> StoreSnapshot {
    seeded_store().snapshot()
}

pub(super) fn names<'a, I>(entries: I) -> Vec<&'a str>
where
    I: IntoIterator<Item = &'a DirectoryEntry>,
{
    entries.into_iter().map(|entry| entry.name.as_str()).collect()
}

pub(super) fn consultant(id: u64, rate: f64) -> DirectoryEntry {
    DirectoryEntry {
        id: EntryId(id),
        name: format!("Consultant {id}"),
        title: "Advisor".to_string(),
        location: "Winnipeg, Manitoba".to_string(),
        description: "Generalist".to_string(),
        remote: false,
        rate,
        rate_type: RateType::Hourly,
        expertise_tags: BTreeSet::new(),
        availability: Availability::Contract,
    }
}

pub(super) fn tagged(id: u64, tags: &[&str]) -> DirectoryEntry {
    DirectoryEntry {
        expertise_tags: tags.iter().map(|tag| tag.to_string()).collect(),
        ..consultant(id, 100.0)
    }
}

pub(super) fn vocabulary() -> TagVocabulary {
    seed::expertise_vocabulary()
}
