//! Errors raised while loading corpus assets

use std::fmt;
use std::io;
use std::path::PathBuf;

/// Error type for loading word lists and frequency tables
#[derive(Debug)]
pub enum CorpusError {
    /// A file could not be read
    Io { path: PathBuf, source: io::Error },
    /// A frequency table is not a JSON object of numbers
    Json {
        origin: String,
        source: serde_json::Error,
    },
    /// A word list contained no usable 5-letter words
    EmptyDictionary(String),
}

impl fmt::Display for CorpusError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Io { path, source } => {
                write!(f, "Failed to read {}: {source}", path.display())
            }
            Self::Json { origin, source } => {
                write!(f, "Invalid frequency table in {origin}: {source}")
            }
            Self::EmptyDictionary(origin) => {
                write!(f, "No valid 5-letter words found in {origin}")
            }
        }
    }
}

impl std::error::Error for CorpusError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Io { source, .. } => Some(source),
            Self::Json { source, .. } => Some(source),
            Self::EmptyDictionary(_) => None,
        }
    }
}
