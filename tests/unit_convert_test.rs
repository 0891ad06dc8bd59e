// tests/unit_convert_test.rs

use attrmap::core::attrs::value::{AttributeAction, AttributeValue};
use attrmap::core::convert::{ConvertOutcome, convert};
use attrmap::core::errors::AttrMapError;
use attrmap::core::message::{HeaderValue, Message};
use attrmap::core::{Operation, ReturnValues, headers};
use serde_json::json;

#[test]
fn test_convert_insert_from_raw_bytes() {
    let mut msg = Message::from_bytes(r#"{"a":"x","b":1,"c":true,"d":null}"#);
    let outcome = convert(&mut msg).unwrap();
    assert_eq!(outcome, ConvertOutcome::Applied(Operation::Insert));

    assert_eq!(
        msg.header(headers::OPERATION),
        Some(&HeaderValue::Operation(Operation::Insert))
    );
    assert_eq!(
        msg.header(headers::RETURN_VALUES),
        Some(&HeaderValue::ReturnValues(ReturnValues::AllOld))
    );
    assert!(msg.header(headers::KEY).is_none());
    assert!(msg.header(headers::UPDATE_VALUES).is_none());

    let item = msg.header(headers::ITEM).unwrap().as_attribute_map().unwrap();
    assert_eq!(item["a"], AttributeValue::S("x".to_string()));
    assert_eq!(item["b"], AttributeValue::N("1".to_string()));
    assert_eq!(item["c"], AttributeValue::Bool(true));
    assert_eq!(item["d"], AttributeValue::Null);
}

#[test]
fn test_convert_update_with_explicit_key() {
    // Combined scenario: explicit key, item falls back to the body's
    // non-reserved entries.
    let mut msg = Message::from_json(json!({"key": {"id": "1"}, "status": "done"}));
    msg.set_property(headers::OPERATION_PROPERTY, "Update");

    let outcome = convert(&mut msg).unwrap();
    assert_eq!(outcome, ConvertOutcome::Applied(Operation::Update));

    let key = msg.header(headers::KEY).unwrap().as_attribute_map().unwrap();
    assert_eq!(key.len(), 1);
    assert_eq!(key["id"], AttributeValue::S("1".to_string()));

    let update = msg
        .header(headers::UPDATE_VALUES)
        .unwrap()
        .as_update_map()
        .unwrap();
    assert_eq!(update.len(), 1);
    assert_eq!(update["status"].action, AttributeAction::Replace);
    assert_eq!(update["status"].value, AttributeValue::S("done".to_string()));

    assert_eq!(
        msg.header(headers::RETURN_VALUES),
        Some(&HeaderValue::ReturnValues(ReturnValues::AllNew))
    );
    assert!(msg.header(headers::ITEM).is_none());
}

#[test]
fn test_convert_delete_via_operation_header() {
    let mut msg = Message::from_json(json!({"id": "1"}));
    msg.set_header(headers::OPERATION, HeaderValue::Operation(Operation::Delete));

    let outcome = convert(&mut msg).unwrap();
    assert_eq!(outcome, ConvertOutcome::Applied(Operation::Delete));

    let key = msg.header(headers::KEY).unwrap().as_attribute_map().unwrap();
    assert_eq!(key["id"], AttributeValue::S("1".to_string()));
    assert!(msg.header(headers::ITEM).is_none());
    assert!(msg.header(headers::UPDATE_VALUES).is_none());
}

#[test]
fn test_convert_key_item_aliasing_on_insert() {
    let mut msg = Message::from_json(json!({"k1": "v1"}));
    convert(&mut msg).unwrap();

    // Insert emits only the item map, built from the shared document.
    let item = msg.header(headers::ITEM).unwrap().as_attribute_map().unwrap();
    assert_eq!(item.len(), 1);
    assert_eq!(item["k1"], AttributeValue::S("v1".to_string()));
}

#[test]
fn test_convert_guard_skips_when_key_header_present() {
    let mut msg = Message::from_json(json!({"k1": "v1"}));
    msg.set_header(
        headers::KEY,
        HeaderValue::AttributeMap(Default::default()),
    );

    let before = msg.headers.clone();
    let outcome = convert(&mut msg).unwrap();

    assert_eq!(outcome, ConvertOutcome::Skipped);
    assert_eq!(msg.headers, before);
}

#[test]
fn test_convert_guard_skips_when_item_header_present() {
    // The guard also tolerates an unparseable body, since it never decodes.
    let mut msg = Message::from_bytes("not json");
    msg.set_header(
        headers::ITEM,
        HeaderValue::AttributeMap(Default::default()),
    );

    let outcome = convert(&mut msg).unwrap();
    assert_eq!(outcome, ConvertOutcome::Skipped);
}

#[test]
fn test_convert_is_idempotent_after_first_application() {
    let mut msg = Message::from_json(json!({"k1": "v1"}));
    convert(&mut msg).unwrap();
    let after_first = msg.headers.clone();

    let outcome = convert(&mut msg).unwrap();
    assert_eq!(outcome, ConvertOutcome::Skipped);
    assert_eq!(msg.headers, after_first);
}

#[test]
fn test_convert_header_precedence_with_all_signals() {
    let mut msg = Message::from_json(json!({"operation": "Delete", "id": "1"}));
    msg.set_property(headers::OPERATION_PROPERTY, "Update");
    msg.set_header(headers::OPERATION, HeaderValue::Operation(Operation::Insert));

    let outcome = convert(&mut msg).unwrap();
    assert_eq!(outcome, ConvertOutcome::Applied(Operation::Insert));
    assert!(msg.header(headers::ITEM).is_some());
}

#[test]
fn test_convert_unsupported_operation_writes_nothing() {
    let mut msg = Message::from_json(json!({"operation": "Scan"}));
    let err = convert(&mut msg).unwrap_err();

    assert_eq!(err, AttrMapError::UnsupportedOperation("Scan".to_string()));
    assert!(msg.headers.is_empty());
}

#[test]
fn test_convert_undecodable_body_writes_nothing() {
    let mut msg = Message::from_bytes("not json");
    let err = convert(&mut msg).unwrap_err();

    assert!(matches!(err, AttrMapError::BodyDecode(_)));
    assert!(msg.headers.is_empty());
}

#[test]
fn test_convert_non_object_body_fails() {
    let mut msg = Message::from_json(json!([1, 2, 3]));
    let err = convert(&mut msg).unwrap_err();
    assert!(matches!(err, AttrMapError::BodyDecode(_)));
    assert!(msg.headers.is_empty());
}
