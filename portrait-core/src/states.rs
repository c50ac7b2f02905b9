use crate::model::SourceRecord;
use std::collections::BTreeMap;
use thiserror::Error;
use tracing::warn;

/// State code to the trailing word of its senators' description.
pub type StateMapping = BTreeMap<String, String>;

#[derive(Error, Debug, PartialEq, Eq)]
pub enum TokenError {
    #[error("Description is empty")]
    Empty,
}

/// Last whitespace-delimited token of `description`.
///
/// `"Senator from New York"` gives `"York"`.
pub fn extract_trailing_token(description: &str) -> Result<&str, TokenError> {
    description.split_whitespace().last().ok_or(TokenError::Empty)
}

/// Map each record's state code to the trailing token of its description.
///
/// Records without a state code or with a blank description are skipped.
pub fn build_state_map(records: &[SourceRecord]) -> StateMapping {
    let mut states = StateMapping::new();
    for record in records {
        let Some(ref state) = record.state else {
            warn!("Skipping {}: no state code", record.id);
            continue;
        };
        match extract_trailing_token(&record.description) {
            Ok(token) => {
                states.insert(state.clone(), token.to_string());
            }
            Err(e) => warn!("Skipping {}: {}", record.id, e),
        }
    }
    states
}
