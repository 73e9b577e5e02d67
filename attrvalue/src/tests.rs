//! Tests for attribute values.

use super::*;
use quickcheck_macros::quickcheck;
use std::collections::HashMap;

// ============================================================================
// AttributeValue tests
// ============================================================================

#[test]
fn test_number_json() {
    let av = AttributeValue::number("123");
    let data = serde_json::to_string(&av).unwrap();
    assert_eq!(data, r#"{"N":"123"}"#);

    let restored: AttributeValue = serde_json::from_str(&data).unwrap();
    assert_eq!(restored, av);
}

#[test]
fn test_binary_json() {
    let av = AttributeValue::binary(b"hello".as_slice());
    let data = serde_json::to_string(&av).unwrap();
    assert_eq!(data, r#"{"B":"aGVsbG8="}"#);

    let restored: AttributeValue = serde_json::from_str(&data).unwrap();
    assert_eq!(restored.as_b(), Some(b"hello".as_slice()));
}

#[test]
fn test_binary_json_invalid() {
    let result: Result<AttributeValue, _> = serde_json::from_str(r#"{"B":"!!"}"#);
    assert!(result.is_err());
}

#[test]
fn test_nested_json() {
    let data = r#"{"M":{"ttl":{"N":"60"},"tags":{"L":[{"S":"a"},{"NULL":true}]}}}"#;
    let av: AttributeValue = serde_json::from_str(data).unwrap();

    let m = av.as_m().unwrap();
    assert_eq!(m["ttl"].as_n(), Some("60"));
    let tags = m["tags"].l.as_ref().unwrap();
    assert_eq!(tags[0].as_s(), Some("a"));
    assert!(tags[1].is_null());
}

#[test]
fn test_map_json() {
    let mut m = HashMap::new();
    m.insert("ttl".to_string(), AttributeValue::number("60"));
    let av = AttributeValue::map(m);

    let data = serde_json::to_string(&av).unwrap();
    assert_eq!(data, r#"{"M":{"ttl":{"N":"60"}}}"#);

    let restored: AttributeValue = serde_json::from_str(&data).unwrap();
    assert_eq!(restored.as_m().unwrap()["ttl"].as_n(), Some("60"));
    assert_eq!(restored, av);
}

#[test]
fn test_empty_json() {
    let av: AttributeValue = serde_json::from_str("{}").unwrap();
    assert_eq!(av, AttributeValue::default());
    assert_eq!(serde_json::to_string(&av).unwrap(), "{}");
}

// ============================================================================
// i64 tests
// ============================================================================

#[test]
fn test_i64_marshal() {
    assert_eq!(marshal(&-42i64), AttributeValue::number("-42"));
}

#[test]
fn test_i64_unmarshal_missing() {
    let mut n: i64 = 7;
    n.unmarshal_attribute(None).unwrap();
    assert_eq!(n, 7);

    n.unmarshal_attribute(Some(&AttributeValue::default())).unwrap();
    assert_eq!(n, 7);

    n.unmarshal_attribute(Some(&AttributeValue::string("9"))).unwrap();
    assert_eq!(n, 7);
}

#[test]
fn test_i64_unmarshal_bad() {
    let mut n: i64 = 0;
    let err = n
        .unmarshal_attribute(Some(&AttributeValue::number("bad")))
        .unwrap_err();

    let Error::NumberFormat { value, .. } = &err;
    assert_eq!(value, "bad");
    assert!(std::error::Error::source(&err).is_some());
}

#[test]
fn test_i64_unmarshal_overflow() {
    let result: Result<i64, _> =
        unmarshal(&AttributeValue::number("9223372036854775808"));
    assert!(result.is_err());
}

#[quickcheck]
fn prop_i64_round_trip(n: i64) -> bool {
    unmarshal::<i64>(&marshal(&n)) == Ok(n)
}

// ============================================================================
// String / bool / Option tests
// ============================================================================

#[test]
fn test_string_round_trip() {
    let av = marshal("hello");
    assert_eq!(av.as_s(), Some("hello"));

    let s: String = unmarshal(&av).unwrap();
    assert_eq!(s, "hello");
}

#[test]
fn test_bool_unmarshal_missing() {
    let mut b = true;
    b.unmarshal_attribute(Some(&AttributeValue::number("0")))
        .unwrap();
    assert!(b);

    b.unmarshal_attribute(Some(&AttributeValue::bool(false)))
        .unwrap();
    assert!(!b);
}

#[test]
fn test_option_marshal() {
    assert!(marshal(&None::<i64>).is_null());
    assert_eq!(marshal(&Some(5i64)), AttributeValue::number("5"));
}

#[test]
fn test_option_unmarshal() {
    let mut v: Option<i64> = Some(3);
    v.unmarshal_attribute(None).unwrap();
    assert_eq!(v, Some(3));

    v.unmarshal_attribute(Some(&AttributeValue::null())).unwrap();
    assert_eq!(v, None);

    v.unmarshal_attribute(Some(&AttributeValue::number("11")))
        .unwrap();
    assert_eq!(v, Some(11));
}

// ============================================================================
// Item tests
// ============================================================================

#[test]
fn test_item_fields() {
    let mut item: Item = HashMap::new();
    marshal_field(&mut item, "count", &12i64);
    marshal_field(&mut item, "name", "widget");

    let mut count: i64 = 0;
    unmarshal_field(&item, "count", &mut count).unwrap();
    assert_eq!(count, 12);

    let mut name = String::new();
    unmarshal_field(&item, "name", &mut name).unwrap();
    assert_eq!(name, "widget");

    let mut missing: i64 = 99;
    unmarshal_field(&item, "missing", &mut missing).unwrap();
    assert_eq!(missing, 99);
}
