// Tests for loading the legislator dump

use portrait_core::error::InputError;
use portrait_core::model::{load_collection, parse_collection, select_records};
use std::io::Write;
use std::path::Path;
use tempfile::NamedTempFile;

const SENATORS: &str = r#"{
  "meta": {"limit": 100, "offset": 0, "total_count": 2},
  "objects": [
    {
      "description": "Junior Senator for New York",
      "state": "NY",
      "person": {
        "bioguideid": "G000555",
        "link": "https://www.govtrack.us/congress/members/kirsten_gillibrand/412223",
        "name": "Sen. Kirsten Gillibrand [D-NY]"
      }
    },
    {
      "description": "Senior Senator for Vermont",
      "state": "VT",
      "person": {
        "bioguideid": "S000033",
        "link": "https://www.govtrack.us/congress/members/bernard_sanders/400357"
      }
    }
  ]
}"#;

// ============================================================================
// Parsing Tests
// ============================================================================

#[test]
fn test_parse_collection_maps_nested_fields() {
    let records = parse_collection(SENATORS).unwrap();

    assert_eq!(records.len(), 2);
    assert_eq!(records[0].id, "G000555");
    assert_eq!(
        records[0].profile_url,
        "https://www.govtrack.us/congress/members/kirsten_gillibrand/412223"
    );
    assert_eq!(records[0].description, "Junior Senator for New York");
    assert_eq!(records[0].state.as_deref(), Some("NY"));
    assert_eq!(records[1].id, "S000033");
}

#[test]
fn test_parse_collection_keeps_input_order() {
    let records = parse_collection(SENATORS).unwrap();
    let ids: Vec<&str> = records.iter().map(|r| r.id.as_str()).collect();
    assert_eq!(ids, vec!["G000555", "S000033"]);
}

#[test]
fn test_parse_collection_optional_fields_default() {
    let json = r#"{"objects": [{"person": {"bioguideid": "A1", "link": "http://x/a"}}]}"#;
    let records = parse_collection(json).unwrap();
    assert_eq!(records[0].description, "");
    assert_eq!(records[0].state, None);
}

#[test]
fn test_parse_collection_empty_objects() {
    let records = parse_collection(r#"{"objects": []}"#).unwrap();
    assert!(records.is_empty());
}

#[test]
fn test_record_target_carries_id() {
    let records = parse_collection(SENATORS).unwrap();
    let target = records[1].target();
    assert_eq!(target.id, "S000033");
    assert_eq!(
        target.profile_url,
        "https://www.govtrack.us/congress/members/bernard_sanders/400357"
    );
}

// ============================================================================
// Fatal Input Tests
// ============================================================================

#[test]
fn test_parse_collection_invalid_json() {
    let result = parse_collection("{ not json");
    assert!(matches!(result, Err(InputError::Json(_))));
}

#[test]
fn test_parse_collection_missing_objects() {
    let result = parse_collection(r#"{"meta": {}}"#);
    assert!(matches!(result, Err(InputError::MissingObjects)));
}

#[test]
fn test_parse_collection_objects_not_array() {
    let result = parse_collection(r#"{"objects": {"a": 1}}"#);
    assert!(matches!(result, Err(InputError::MissingObjects)));
}

#[test]
fn test_parse_collection_malformed_record() {
    let json = r#"{"objects": [
        {"person": {"bioguideid": "A1", "link": "http://x/a"}},
        {"person": {"link": "http://x/b"}}
    ]}"#;
    let result = parse_collection(json);
    assert!(matches!(result, Err(InputError::InvalidRecord { index: 1, .. })));
}

#[test]
fn test_load_collection_missing_file() {
    let result = load_collection(Path::new("/definitely/not/here/senators.json"));
    match result {
        Err(InputError::Read { path, .. }) => {
            assert_eq!(path, Path::new("/definitely/not/here/senators.json"));
        }
        other => panic!("expected read error, got {:?}", other),
    }
}

#[test]
fn test_load_collection_from_file() -> Result<(), Box<dyn std::error::Error>> {
    let mut temp_file = NamedTempFile::new()?;
    temp_file.write_all(SENATORS.as_bytes())?;

    let records = load_collection(temp_file.path())?;
    assert_eq!(records.len(), 2);

    Ok(())
}

// ============================================================================
// Selection Tests
// ============================================================================

#[test]
fn test_select_records_limit() {
    let records = parse_collection(SENATORS).unwrap();

    assert_eq!(select_records(&records, Some(1)).len(), 1);
    assert_eq!(select_records(&records, Some(1))[0].id, "G000555");
    assert_eq!(select_records(&records, Some(10)).len(), 2);
    assert_eq!(select_records(&records, None).len(), 2);
    assert!(select_records(&records, Some(0)).is_empty());
}
