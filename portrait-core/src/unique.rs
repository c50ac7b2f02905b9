use crate::model::SourceRecord;
use std::collections::{BTreeSet, HashSet};

/// True when no two records share an id.
pub fn check_unique(records: &[SourceRecord]) -> bool {
    let ids: HashSet<&str> = records.iter().map(|r| r.id.as_str()).collect();
    ids.len() == records.len()
}

/// Ids that appear on more than one record, sorted, each listed once.
pub fn duplicate_ids(records: &[SourceRecord]) -> Vec<String> {
    let mut seen = HashSet::new();
    let mut duplicates = BTreeSet::new();
    for record in records {
        if !seen.insert(record.id.as_str()) {
            duplicates.insert(record.id.clone());
        }
    }
    duplicates.into_iter().collect()
}
