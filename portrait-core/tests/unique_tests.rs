// Tests for the id uniqueness check

use portrait_core::model::SourceRecord;
use portrait_core::unique::{check_unique, duplicate_ids};

fn record(id: &str) -> SourceRecord {
    SourceRecord {
        id: id.to_string(),
        profile_url: format!("https://www.govtrack.us/congress/members/{}", id),
        description: String::new(),
        state: None,
    }
}

#[test]
fn test_check_unique_distinct_ids() {
    assert!(check_unique(&[record("A"), record("B")]));
}

#[test]
fn test_check_unique_repeated_id() {
    assert!(!check_unique(&[record("A"), record("A")]));
}

#[test]
fn test_check_unique_empty_collection() {
    assert!(check_unique(&[]));
}

#[test]
fn test_check_unique_compares_ids_not_records() {
    // Two records that differ in every other field still collide on id.
    let mut second = record("A");
    second.profile_url = "https://example.com/other".to_string();
    second.description = "Senior Senator for Ohio".to_string();
    second.state = Some("OH".to_string());

    assert!(!check_unique(&[record("A"), second]));
}

#[test]
fn test_duplicate_ids_listed_once_sorted() {
    let records = vec![
        record("C"),
        record("A"),
        record("C"),
        record("B"),
        record("A"),
        record("C"),
    ];
    assert_eq!(duplicate_ids(&records), vec!["A".to_string(), "C".to_string()]);
}

#[test]
fn test_duplicate_ids_none() {
    assert!(duplicate_ids(&[record("A"), record("B")]).is_empty());
}
