mod normalizer;
mod parser;

use crate::directory::domain::DirectoryEntry;
use std::io::Read;
use std::path::Path;

#[derive(Debug)]
pub enum ImportError {
    Io(std::io::Error),
    Csv(csv::Error),
    Json(serde_json::Error),
    UnsupportedFormat(String),
}

impl std::fmt::Display for ImportError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ImportError::Io(err) => write!(f, "failed to read directory export: {}", err),
            ImportError::Csv(err) => write!(f, "invalid directory CSV data: {}", err),
            ImportError::Json(err) => write!(f, "invalid directory JSON data: {}", err),
            ImportError::UnsupportedFormat(path) => write!(
                f,
                "unsupported directory export '{}': expected a .csv or .json file",
                path
            ),
        }
    }
}

impl std::error::Error for ImportError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ImportError::Io(err) => Some(err),
            ImportError::Csv(err) => Some(err),
            ImportError::Json(err) => Some(err),
            ImportError::UnsupportedFormat(_) => None,
        }
    }
}

impl From<std::io::Error> for ImportError {
    fn from(err: std::io::Error) -> Self {
        Self::Io(err)
    }
}

impl From<csv::Error> for ImportError {
    fn from(err: csv::Error) -> Self {
        Self::Csv(err)
    }
}

impl From<serde_json::Error> for ImportError {
    fn from(err: serde_json::Error) -> Self {
        Self::Json(err)
    }
}

/// Reads directory entries exported by the profile store.
///
/// Parsing only; invariants are enforced when the entries are loaded.
pub struct DirectoryImporter;

impl DirectoryImporter {
    pub fn from_path<P: AsRef<Path>>(path: P) -> Result<Vec<DirectoryEntry>, ImportError> {
        let path = path.as_ref();
        let extension = path
            .extension()
            .and_then(|ext| ext.to_str())
            .map(str::to_ascii_lowercase);

        match extension.as_deref() {
            Some("csv") => Self::from_csv_reader(std::fs::File::open(path)?),
            Some("json") => Self::from_json_reader(std::fs::File::open(path)?),
            _ => Err(ImportError::UnsupportedFormat(path.display().to_string())),
        }
    }

    pub fn from_csv_reader<R: Read>(reader: R) -> Result<Vec<DirectoryEntry>, ImportError> {
        Ok(parser::parse_csv(reader)?)
    }

    pub fn from_json_reader<R: Read>(reader: R) -> Result<Vec<DirectoryEntry>, ImportError> {
        Ok(parser::parse_json(reader)?)
    }
}
