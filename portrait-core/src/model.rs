// Legislator records as read from the input dump

use crate::error::InputError;
use portrait_scanner::ProfileTarget;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::fs;
use std::path::Path;

pub const DEFAULT_INPUT_PATH: &str = "./data/senators.json";
pub const DEFAULT_OUTPUT_PATH: &str = "./data/imgSources.json";

/// One legislator entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SourceRecord {
    pub id: String,
    pub profile_url: String,
    pub description: String,
    pub state: Option<String>,
}

pub type SourceCollection = Vec<SourceRecord>;

#[derive(Deserialize)]
struct RawRecord {
    person: RawPerson,
    #[serde(default)]
    description: String,
    #[serde(default)]
    state: Option<String>,
}

#[derive(Deserialize)]
struct RawPerson {
    bioguideid: String,
    link: String,
}

impl From<RawRecord> for SourceRecord {
    fn from(raw: RawRecord) -> Self {
        Self {
            id: raw.person.bioguideid,
            profile_url: raw.person.link,
            description: raw.description,
            state: raw.state,
        }
    }
}

impl SourceRecord {
    pub fn target(&self) -> ProfileTarget {
        ProfileTarget::new(self.id.clone(), self.profile_url.clone())
    }
}

/// Read and parse the input document at `path`.
pub fn load_collection(path: &Path) -> Result<SourceCollection, InputError> {
    let content = fs::read_to_string(path).map_err(|source| InputError::Read {
        path: path.to_path_buf(),
        source,
    })?;
    parse_collection(&content)
}

/// Parse an input document: `{"objects": [{"person": {"bioguideid", "link"}, "description", "state"}, ...]}`.
pub fn parse_collection(json: &str) -> Result<SourceCollection, InputError> {
    let mut document: Value = serde_json::from_str(json)?;

    let objects = match document.get_mut("objects").map(Value::take) {
        Some(Value::Array(objects)) => objects,
        _ => return Err(InputError::MissingObjects),
    };

    objects
        .into_iter()
        .enumerate()
        .map(|(index, value)| {
            serde_json::from_value::<RawRecord>(value)
                .map(SourceRecord::from)
                .map_err(|source| InputError::InvalidRecord { index, source })
        })
        .collect()
}

/// The first `limit` records, or all of them.
pub fn select_records(records: &[SourceRecord], limit: Option<usize>) -> &[SourceRecord] {
    match limit {
        Some(limit) if limit < records.len() => &records[..limit],
        _ => records,
    }
}
