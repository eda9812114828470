use crate::Value;
use crate::ValueError;
use serde_json::json;

#[test]
fn scalars_map_onto_their_counterparts() {
    assert_eq!(Value::try_from(json!(null)), Ok(Value::Null));
    assert_eq!(Value::try_from(json!(true)), Ok(Value::Bool(true)));
    assert_eq!(Value::try_from(json!(-3)), Ok(Value::Int(-3)));
    assert_eq!(Value::try_from(json!(2.5)), Ok(Value::Float(2.5)));
    assert_eq!(Value::try_from(json!("hi")), Ok(Value::from("hi")));
}

#[test]
fn raw_marker_becomes_a_raw_literal() {
    assert_eq!(Value::try_from(json!({"$raw": "ACTIVE"})), Ok(Value::raw("ACTIVE")));
}

#[test]
fn raw_marker_must_hold_a_string() {
    assert_eq!(
        Value::try_from(json!({"$raw": 5})),
        Err(ValueError::InvalidRawMarker { found: "5".to_string() }),
    );
}

#[test]
fn objects_and_lists_keep_their_order() {
    let value = Value::try_from(json!({
        "zeta": [1, {"$raw": "X"}],
        "alpha": {"nested": "y"},
    })).unwrap();

    assert_eq!(
        value,
        Value::object([
            ("zeta", Value::list([Value::Int(1), Value::raw("X")])),
            ("alpha", Value::object([("nested", "y")])),
        ]),
    );
}

#[test]
fn integers_beyond_i64_are_rejected() {
    assert_eq!(
        Value::try_from(json!(u64::MAX)),
        Err(ValueError::UnsupportedNumber {
            number: u64::MAX.to_string(),
        }),
    );
}

#[test]
fn invalid_object_keys_are_rejected() {
    assert_eq!(
        Value::try_from(json!({"not a name": 1})),
        Err(ValueError::InvalidObjectKey { key: "not a name".to_string() }),
    );
}
