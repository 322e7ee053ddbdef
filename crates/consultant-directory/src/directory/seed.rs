//! Sample directory used by the listing page before profiles are wired in.

use std::collections::BTreeSet;

use super::domain::{Availability, DirectoryEntry, EntryId, RateType, TagVocabulary};

pub const EXPERTISE_AREAS: [&str; 11] = [
    "Employment Strategy",
    "Diversity & Inclusion",
    "Workforce Development",
    "Training Program Design",
    "E-Learning Development",
    "Career Coaching",
    "Organizational Development",
    "Change Management",
    "Leadership Training",
    "Cultural Competency Training",
    "Workplace Culture",
];

pub fn expertise_vocabulary() -> TagVocabulary {
    TagVocabulary::new(EXPERTISE_AREAS)
}

pub fn sample_entries() -> Vec<DirectoryEntry> {
    vec![
        entry(
            1,
            "Jane Smith",
            "Senior HR Consultant",
            "Toronto, Ontario",
            true,
            150.0,
            &["Employment Strategy", "Diversity & Inclusion", "Workforce Development"],
            "Experienced HR consultant with over 15 years in the field, specializing in diverse workplace culture development and employment strategy.",
            Availability::PartTime,
        ),
        entry(
            2,
            "Robert Johnson",
            "Training Program Specialist",
            "Vancouver, BC",
            true,
            125.0,
            &["Training Program Design", "E-Learning Development", "Workforce Development"],
            "Expert in designing comprehensive training programs with a focus on e-learning solutions for corporate environments.",
            Availability::FullTime,
        ),
        entry(
            3,
            "Sarah Williams",
            "Workforce Development Expert",
            "Montreal, Quebec",
            false,
            175.0,
            &["Workforce Development", "Career Coaching", "Employment Strategy"],
            "Specialist in workforce development strategies with a background in government and non-profit sectors.",
            Availability::Contract,
        ),
        entry(
            4,
            "Michael Chen",
            "Organizational Development Consultant",
            "Ottawa, Ontario",
            true,
            140.0,
            &["Organizational Development", "Change Management", "Leadership Training"],
            "Helps organizations navigate complex transitions and build resilient leadership teams.",
            Availability::FullTime,
        ),
        entry(
            5,
            "Emma Rodriguez",
            "Diversity & Inclusion Specialist",
            "Toronto, Ontario",
            true,
            160.0,
            &["Diversity & Inclusion", "Cultural Competency Training", "Workplace Culture"],
            "Passionate about creating inclusive workplaces through training, policy development, and organizational culture change.",
            Availability::PartTime,
        ),
    ]
}

#[allow(clippy::too_many_arguments)]
fn entry(
    id: u64,
    name: &str,
    title: &str,
    location: &str,
    remote: bool,
    rate: f64,
    tags: &[&str],
    description: &str,
    availability: Availability,
) -> DirectoryEntry {
    DirectoryEntry {
        id: EntryId(id),
        name: name.to_string(),
        title: title.to_string(),
        location: location.to_string(),
        description: description.to_string(),
        remote,
        rate,
        rate_type: RateType::Hourly,
        expertise_tags: tags.iter().map(|tag| tag.to_string()).collect::<BTreeSet<_>>(),
        availability,
    }
}
