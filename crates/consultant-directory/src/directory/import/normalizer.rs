use crate::directory::domain::DirectoryEntry;

pub(crate) fn normalize_label(value: &str) -> String {
    let cleaned = value.replace(['\u{feff}', '\u{200b}'], "");
    cleaned.split_whitespace().collect::<Vec<_>>().join(" ")
}

/// Splits a `;`-separated expertise cell into normalized labels.
pub(crate) fn split_tags(value: &str) -> impl Iterator<Item = String> + '_ {
    value
        .split(';')
        .map(normalize_label)
        .filter(|label| !label.is_empty())
}

/// Applies the label cleanup CSV rows get to an entry decoded from JSON.
pub(crate) fn normalize_entry(mut entry: DirectoryEntry) -> DirectoryEntry {
    entry.name = normalize_label(&entry.name);
    entry.title = normalize_label(&entry.title);
    entry.location = normalize_label(&entry.location);
    entry.expertise_tags = entry
        .expertise_tags
        .iter()
        .map(|tag| normalize_label(tag))
        .filter(|tag| !tag.is_empty())
        .collect();
    entry
}
