use std::collections::BTreeSet;
use std::fmt;

use serde::{Deserialize, Serialize};

/// Identifier wrapper for directory entries.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct EntryId(pub u64);

impl fmt::Display for EntryId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Unit the advertised rate is quoted in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RateType {
    #[default]
    Hourly,
    Daily,
    Fixed,
}

impl RateType {
    pub fn label(&self) -> &'static str {
        match self {
            RateType::Hourly => "hourly",
            RateType::Daily => "daily",
            RateType::Fixed => "fixed",
        }
    }
}

/// Engagement availability advertised on a profile.
///
/// Profiles are edited as free text, so anything outside the known labels is
/// carried verbatim in [`Availability::Other`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum Availability {
    FullTime,
    PartTime,
    Contract,
    Other(String),
}

impl Availability {
    pub fn label(&self) -> &str {
        match self {
            Availability::FullTime => "Full-time",
            Availability::PartTime => "Part-time",
            Availability::Contract => "Contract",
            Availability::Other(label) => label,
        }
    }
}

impl From<String> for Availability {
    fn from(value: String) -> Self {
        match value.trim().to_ascii_lowercase().as_str() {
            "full-time" | "full time" | "fulltime" => Availability::FullTime,
            "part-time" | "part time" | "parttime" => Availability::PartTime,
            "contract" => Availability::Contract,
            _ => Availability::Other(value.trim().to_string()),
        }
    }
}

impl From<Availability> for String {
    fn from(value: Availability) -> Self {
        value.label().to_string()
    }
}

impl fmt::Display for Availability {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// One consultant's searchable profile record.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DirectoryEntry {
    pub id: EntryId,
    pub name: String,
    pub title: String,
    pub location: String,
    pub description: String,
    pub remote: bool,
    pub rate: f64,
    #[serde(default)]
    pub rate_type: RateType,
    #[serde(default)]
    pub expertise_tags: BTreeSet<String>,
    pub availability: Availability,
}

impl DirectoryEntry {
    /// Free-text fields the text clause searches, in match order.
    pub fn searchable_text(&self) -> [&str; 4] {
        [&self.name, &self.title, &self.description, &self.location]
    }

    pub fn has_tag(&self, tag: &str) -> bool {
        self.expertise_tags.contains(tag)
    }
}

/// Controlled vocabulary of expertise labels the filters understand.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct TagVocabulary {
    labels: Vec<String>,
}

impl TagVocabulary {
    /// Builds a vocabulary keeping the first occurrence of each label.
    pub fn new<I, S>(labels: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut seen = BTreeSet::new();
        let labels = labels
            .into_iter()
            .map(Into::into)
            .filter(|label: &String| !label.is_empty() && seen.insert(label.clone()))
            .collect();
        Self { labels }
    }

    pub fn contains(&self, tag: &str) -> bool {
        self.labels.iter().any(|label| label == tag)
    }

    /// Labels in configured display order.
    pub fn labels(&self) -> &[String] {
        &self.labels
    }

    pub fn len(&self) -> usize {
        self.labels.len()
    }

    pub fn is_empty(&self) -> bool {
        self.labels.is_empty()
    }

    /// Tags on the entry that fall outside the vocabulary.
    pub fn unknown_tags<'a>(&self, entry: &'a DirectoryEntry) -> Vec<&'a str> {
        entry
            .expertise_tags
            .iter()
            .filter(|tag| !self.contains(tag))
            .map(String::as_str)
            .collect()
    }
}

/// Closed rate interval; both bounds inclusive.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RateRange {
    min: f64,
    max: f64,
}

impl RateRange {
    /// Fails when `min > max` or either bound is NaN.
    pub fn new(min: f64, max: f64) -> Result<Self, InvalidRangeError> {
        // written as a negation so NaN bounds are rejected too
        if !(min <= max) {
            return Err(InvalidRangeError { min, max });
        }
        Ok(Self { min, max })
    }

    pub fn min(&self) -> f64 {
        self.min
    }

    pub fn max(&self) -> f64 {
        self.max
    }

    pub fn contains(&self, rate: f64) -> bool {
        rate >= self.min && rate <= self.max
    }

    /// Re-checks bounds for ranges that arrived through deserialization.
    pub fn validate(&self) -> Result<(), InvalidRangeError> {
        Self::new(self.min, self.max).map(|_| ())
    }
}

impl Default for RateRange {
    /// Listing-page slider bounds.
    fn default() -> Self {
        Self {
            min: 0.0,
            max: 200.0,
        }
    }
}

impl fmt::Display for RateRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}, {}]", self.min, self.max)
    }
}

/// Raised when a rate interval's minimum exceeds its maximum.
#[derive(Debug, Clone, Copy, PartialEq, thiserror::Error)]
#[error("rate range minimum {min} exceeds maximum {max}")]
pub struct InvalidRangeError {
    pub min: f64,
    pub max: f64,
}

/// Raised by the record store when an incoming entry breaks a load invariant.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ValidationError {
    #[error("entry {id} has negative rate {rate}")]
    NegativeRate { id: EntryId, rate: f64 },
    #[error("entry {id} has a non-finite rate")]
    NonFiniteRate { id: EntryId },
    #[error("entry id {0} appears more than once")]
    DuplicateId(EntryId),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn availability_parses_known_labels_and_keeps_free_text() {
        assert_eq!(
            Availability::from("Part-time".to_string()),
            Availability::PartTime
        );
        assert_eq!(
            Availability::from(" full time ".to_string()),
            Availability::FullTime
        );
        assert_eq!(
            Availability::from("Evenings only".to_string()),
            Availability::Other("Evenings only".to_string())
        );
        assert_eq!(String::from(Availability::Contract), "Contract");
    }

    #[test]
    fn rate_range_rejects_inverted_and_nan_bounds() {
        assert_eq!(
            RateRange::new(10.0, 5.0),
            Err(InvalidRangeError {
                min: 10.0,
                max: 5.0
            })
        );
        assert!(RateRange::new(f64::NAN, 5.0).is_err());
        let range = RateRange::new(5.0, 5.0).expect("degenerate range is valid");
        assert!(range.contains(5.0));
        assert!(!range.contains(5.5));
    }

    #[test]
    fn vocabulary_drops_duplicates_and_blank_labels() {
        let vocabulary = TagVocabulary::new([
            "Career Coaching",
            "",
            "Career Coaching",
            "Change Management",
        ]);
        assert_eq!(
            vocabulary.labels(),
            &["Career Coaching".to_string(), "Change Management".to_string()]
        );
    }
}
