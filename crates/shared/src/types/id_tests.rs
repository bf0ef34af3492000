use super::*;
use std::str::FromStr;

#[test]
fn test_typed_id_new() {
    let id = CategoryId::new(42);
    assert_eq!(id.into_inner(), 42);
}

#[test]
fn test_typed_id_from_raw() {
    let id: CategoryId = 7.into();
    assert_eq!(id, CategoryId(7));
}

#[test]
fn test_typed_id_display() {
    let id = CategoryId::new(1234);
    assert_eq!(format!("{}", id), "1234");
}

#[test]
fn test_typed_id_from_str() {
    let id = CategoryId::from_str(" 15 ").unwrap();
    assert_eq!(id.into_inner(), 15);
}

#[test]
fn test_typed_id_from_str_error() {
    assert!(CategoryId::from_str("groceries").is_err());
    assert!(CategoryId::from_str("").is_err());
}

#[test]
fn test_typed_id_serializes_transparently() {
    let json = serde_json::to_string(&CategoryId::new(9)).unwrap();
    assert_eq!(json, "9");

    let parsed: CategoryId = serde_json::from_str("9").unwrap();
    assert_eq!(parsed, CategoryId::new(9));
}
