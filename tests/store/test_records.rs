//! Tests for record identifiers and serialized shape.

use kodegen_tools_repo_analysis::store::RecordId;

#[test]
fn test_generated_ids_parse_back() {
    let id = RecordId::generate();
    assert_eq!(id.as_str().len(), RecordId::LEN);
    assert_eq!(RecordId::parse(id.as_str()), Some(id.clone()));
    assert_ne!(id, RecordId::generate());
}

#[test]
fn test_parse_rejects_malformed_ids() {
    assert!(RecordId::parse("0123456789abcdef01234567").is_some());
    assert!(RecordId::parse("0123456789ABCDEF01234567").is_none());
    assert!(RecordId::parse("0123456789abcdef0123456").is_none());
    assert!(RecordId::parse("0123456789abcdef012345678").is_none());
    assert!(RecordId::parse("0123456789abcdef0123456g").is_none());
    assert!(RecordId::parse("").is_none());
}

#[test]
fn test_id_serializes_as_plain_string() {
    let id = RecordId::parse("0123456789abcdef01234567").unwrap();
    assert_eq!(
        serde_json::to_string(&id).unwrap(),
        r#""0123456789abcdef01234567""#
    );
}
