// Tests for trailing-token extraction and the state map

use portrait_core::model::SourceRecord;
use portrait_core::states::{TokenError, build_state_map, extract_trailing_token};

fn record(id: &str, state: Option<&str>, description: &str) -> SourceRecord {
    SourceRecord {
        id: id.to_string(),
        profile_url: format!("https://www.govtrack.us/congress/members/{}", id),
        description: description.to_string(),
        state: state.map(str::to_string),
    }
}

// ============================================================================
// Trailing Token Tests
// ============================================================================

#[test]
fn test_extract_trailing_token() {
    assert_eq!(extract_trailing_token("Senator from New York"), Ok("York"));
}

#[test]
fn test_extract_trailing_token_single_word() {
    assert_eq!(extract_trailing_token("Ohio"), Ok("Ohio"));
}

#[test]
fn test_extract_trailing_token_surrounding_whitespace() {
    assert_eq!(
        extract_trailing_token("  Senior Senator for\tVermont \n"),
        Ok("Vermont")
    );
}

#[test]
fn test_extract_trailing_token_empty() {
    assert_eq!(extract_trailing_token(""), Err(TokenError::Empty));
}

#[test]
fn test_extract_trailing_token_whitespace_only() {
    assert_eq!(extract_trailing_token(" \t\n "), Err(TokenError::Empty));
}

// ============================================================================
// State Map Tests
// ============================================================================

#[test]
fn test_build_state_map() {
    let records = vec![
        record("G000555", Some("NY"), "Junior Senator for New York"),
        record("S000033", Some("VT"), "Senior Senator for Vermont"),
    ];
    let states = build_state_map(&records);

    assert_eq!(states.len(), 2);
    assert_eq!(states["NY"], "York");
    assert_eq!(states["VT"], "Vermont");
}

#[test]
fn test_build_state_map_skips_unusable_records() {
    let records = vec![
        record("A", None, "Senior Senator for Ohio"),
        record("B", Some("OH"), "   "),
        record("C", Some("WA"), "Junior Senator for Washington"),
    ];
    let states = build_state_map(&records);

    assert_eq!(states.len(), 1);
    assert_eq!(states["WA"], "Washington");
}

#[test]
fn test_build_state_map_last_write_wins() {
    let records = vec![
        record("A", Some("NY"), "Senator for New York"),
        record("B", Some("NY"), "Senator for Manhattan"),
    ];
    assert_eq!(build_state_map(&records)["NY"], "Manhattan");
}
