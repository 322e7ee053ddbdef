use super::normalizer::{normalize_entry, normalize_label, split_tags};
use crate::directory::domain::{Availability, DirectoryEntry, EntryId, RateType};
use serde::{Deserialize, Deserializer};
use std::io::Read;

pub(crate) fn parse_csv<R: Read>(reader: R) -> Result<Vec<DirectoryEntry>, csv::Error> {
    let mut csv_reader = csv::ReaderBuilder::new()
        .trim(csv::Trim::All)
        .from_reader(reader);
    let mut entries = Vec::new();

    for record in csv_reader.deserialize::<DirectoryRow>() {
        let row = record?;
        entries.push(row.into_entry());
    }

    Ok(entries)
}

pub(crate) fn parse_json<R: Read>(reader: R) -> Result<Vec<DirectoryEntry>, serde_json::Error> {
    let entries: Vec<DirectoryEntry> = serde_json::from_reader(reader)?;
    Ok(entries.into_iter().map(normalize_entry).collect())
}

#[derive(Debug, Deserialize)]
struct DirectoryRow {
    id: u64,
    name: String,
    title: String,
    location: String,
    #[serde(default)]
    description: String,
    #[serde(deserialize_with = "flexible_bool")]
    remote: bool,
    rate: f64,
    #[serde(default, deserialize_with = "empty_string_as_none")]
    rate_type: Option<String>,
    #[serde(default)]
    expertise: String,
    #[serde(default)]
    availability: String,
}

impl DirectoryRow {
    fn into_entry(self) -> DirectoryEntry {
        DirectoryEntry {
            id: EntryId(self.id),
            name: normalize_label(&self.name),
            title: normalize_label(&self.title),
            location: normalize_label(&self.location),
            description: self.description,
            remote: self.remote,
            rate: self.rate,
            rate_type: self.rate_type.as_deref().map(parse_rate_type).unwrap_or_default(),
            expertise_tags: split_tags(&self.expertise).collect(),
            availability: Availability::from(self.availability),
        }
    }
}

fn parse_rate_type(value: &str) -> RateType {
    match value.trim().to_ascii_lowercase().as_str() {
        "daily" | "day" => RateType::Daily,
        "fixed" | "project" => RateType::Fixed,
        _ => RateType::Hourly,
    }
}

fn flexible_bool<'de, D>(deserializer: D) -> Result<bool, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = String::deserialize(deserializer)?;
    match raw.trim().to_ascii_lowercase().as_str() {
        "true" | "yes" | "y" | "1" => Ok(true),
        "false" | "no" | "n" | "0" | "" => Ok(false),
        other => Err(serde::de::Error::custom(format!(
            "expected a yes/no value, got '{other}'"
        ))),
    }
}

fn empty_string_as_none<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let opt = Option::<String>::deserialize(deserializer)?;
    Ok(opt.filter(|value| !value.trim().is_empty()))
}
