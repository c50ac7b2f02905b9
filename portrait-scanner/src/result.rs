use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Id to portrait URL. Keys are unique; a later entry for the same id replaces
/// the earlier one.
pub type ResultMapping = BTreeMap<String, String>;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ArtifactEntry {
    pub id: String,
    pub artifact_url: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum FailureKind {
    /// Transport error or non-success status
    Fetch,
    /// Page fetched but no usable portrait in it
    Parse,
}

impl FailureKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            FailureKind::Fetch => "fetch",
            FailureKind::Parse => "parse",
        }
    }
}

/// A record that produced no entry, and why.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RecordFailure {
    pub id: String,
    pub profile_url: String,
    pub kind: FailureKind,
    pub reason: String,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ResolveReport {
    pub mapping: ResultMapping,
    pub failures: Vec<RecordFailure>,
}

impl ResolveReport {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, entry: ArtifactEntry) {
        self.mapping.insert(entry.id, entry.artifact_url);
    }

    pub fn into_mapping(self) -> ResultMapping {
        self.mapping
    }
}
