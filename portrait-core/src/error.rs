use std::path::PathBuf;
use thiserror::Error;

/// The input document could not be turned into a record collection. Fatal:
/// raised before any page is fetched.
#[derive(Error, Debug)]
pub enum InputError {
    #[error("Failed to read {}: {source}", .path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Input is not valid JSON: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Input has no top-level 'objects' array")]
    MissingObjects,

    #[error("Record {index} is malformed: {source}")]
    InvalidRecord {
        index: usize,
        #[source]
        source: serde_json::Error,
    },
}

/// The final mapping could not be written. Fatal, raised after fetching.
#[derive(Error, Debug)]
pub enum OutputError {
    #[error("Failed to serialize output: {0}")]
    Serialize(#[from] serde_json::Error),

    #[error("Failed to write {}: {source}", .path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}
