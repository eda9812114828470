use crate::encoding::encode_string;
use crate::encoding::encode_value;
use crate::Value;
use indexmap::IndexMap;
use proptest::prelude::*;

// =============================================================================
// Scalars
// =============================================================================

#[test]
fn null_and_bools() {
    assert_eq!(encode_value(&Value::Null), "null");
    assert_eq!(encode_value(&Value::Bool(true)), "true");
    assert_eq!(encode_value(&Value::Bool(false)), "false");
}

#[test]
fn ints() {
    assert_eq!(encode_value(&Value::Int(5)), "5");
    assert_eq!(encode_value(&Value::Int(0)), "0");
    assert_eq!(encode_value(&Value::Int(-42)), "-42");
    assert_eq!(encode_value(&Value::Int(i64::MAX)), "9223372036854775807");
}

#[test]
fn floats_keep_a_fractional_part() {
    assert_eq!(encode_value(&Value::Float(1.5)), "1.5");
    assert_eq!(encode_value(&Value::Float(-0.25)), "-0.25");
    assert_eq!(encode_value(&Value::Float(3.0)), "3.0");
    assert_eq!(encode_value(&Value::Float(0.1)), "0.1");
}

#[test]
fn floats_with_extreme_magnitudes_use_exponents() {
    assert_eq!(encode_value(&Value::Float(1e300)), "1e300");
    assert_eq!(encode_value(&Value::Float(1.5e-7)), "1.5e-7");
}

#[test]
fn non_finite_floats_encode_as_null() {
    assert_eq!(encode_value(&Value::Float(f64::NAN)), "null");
    assert_eq!(encode_value(&Value::Float(f64::INFINITY)), "null");
    assert_eq!(encode_value(&Value::Float(f64::NEG_INFINITY)), "null");
}

// =============================================================================
// Strings
// =============================================================================

#[test]
fn string_is_quoted() {
    assert_eq!(encode_value(&Value::from("hello")), r#""hello""#);
    assert_eq!(encode_value(&Value::from("")), r#""""#);
}

#[test]
fn string_quotes_are_escaped() {
    assert_eq!(
        encode_value(&Value::from(r#"He said "hi""#)),
        r#""He said \"hi\"""#,
    );
}

#[test]
fn string_backslashes_are_escaped() {
    assert_eq!(encode_string(r"C:\temp"), r#""C:\\temp""#);
}

#[test]
fn string_control_characters_use_short_escapes() {
    assert_eq!(
        encode_string("a\nb\tc\rd\u{C}f"),
        r#""a\nb\tc\rd\ff""#,
    );
}

#[test]
fn string_backspace_uses_unicode_escape() {
    // `\b` is a legal GraphQL escape, but some parsers misread it.
    assert_eq!(encode_string("a\u{8}b"), r#""a\u0008b""#);
}

#[test]
fn string_other_control_characters_use_unicode_escapes() {
    assert_eq!(encode_string("\u{1}\u{1F}\u{7F}"), r#""\u0001\u001F\u007F""#);
}

#[test]
fn string_non_ascii_is_kept_verbatim() {
    assert_eq!(encode_string("héllo ✓"), "\"héllo ✓\"");
}

// =============================================================================
// Raw literals
// =============================================================================

#[test]
fn raw_literals_are_verbatim() {
    assert_eq!(encode_value(&Value::raw("ACTIVE")), "ACTIVE");
    assert_eq!(encode_value(&Value::variable("id")), "$id");
    assert_eq!(encode_value(&Value::raw(r#"{a: "b"}"#)), r#"{a: "b"}"#);
}

// =============================================================================
// Lists and objects
// =============================================================================

#[test]
fn lists() {
    assert_eq!(encode_value(&Value::list([1, 2, 3])), "[1, 2, 3]");
    assert_eq!(encode_value(&Value::list(["a", "b"])), r#"["a", "b"]"#);
    assert_eq!(encode_value(&Value::List(vec![])), "[]");
}

#[test]
fn nested_lists() {
    let value = Value::list([Value::list([1]), Value::List(vec![]), Value::Null]);
    assert_eq!(encode_value(&value), "[[1], [], null]");
}

#[test]
fn objects_preserve_insertion_order() {
    let value = Value::object([
        ("zeta", Value::Int(1)),
        ("alpha", Value::from("two")),
        ("mid", Value::raw("THREE")),
    ]);
    assert_eq!(encode_value(&value), r#"{zeta: 1, alpha: "two", mid: THREE}"#);
}

#[test]
fn empty_object() {
    assert_eq!(encode_value(&Value::Object(IndexMap::new())), "{}");
}

#[test]
fn numeric_looking_keys_stay_an_object() {
    // An ordered map whose keys happen to look like indices is still an
    // input object, never a list.
    let value = Value::object([("_0", "a"), ("_1", "b")]);
    assert_eq!(encode_value(&value), r#"{_0: "a", _1: "b"}"#);
}

#[test]
fn deeply_nested_object() {
    let value = Value::object([(
        "filter",
        Value::object([
            ("and", Value::list([
                Value::object([("age", Value::object([("gt", 18)]))]),
                Value::object([("name", Value::object([("in", Value::list(["a", "b"]))]))]),
            ])),
        ]),
    )]);
    assert_eq!(
        encode_value(&value),
        r#"{filter: {and: [{age: {gt: 18}}, {name: {in: ["a", "b"]}}]}}"#,
    );
}

#[test]
fn display_matches_encode_value() {
    let value = Value::object([("ids", Value::list([1, 2])), ("q", Value::from("x"))]);
    assert_eq!(value.to_string(), encode_value(&value));
}

// =============================================================================
// Properties
// =============================================================================

proptest! {
    #[test]
    fn ints_round_trip_through_their_text(int in any::<i64>()) {
        let text = encode_value(&Value::Int(int));
        prop_assert_eq!(text.parse::<i64>().ok(), Some(int));
    }

    #[test]
    fn finite_floats_round_trip_through_their_text(float in any::<f64>()) {
        prop_assume!(float.is_finite());
        let text = encode_value(&Value::Float(float));
        prop_assert_eq!(text.parse::<f64>().ok(), Some(float));
        prop_assert!(
            text.contains('.') || text.contains('e'),
            "float {:?} would read back as an Int",
            text,
        );
    }

    #[test]
    fn encoded_strings_contain_no_raw_control_characters(str in any::<String>()) {
        let text = encode_string(&str);
        prop_assert!(
            text.starts_with('"') && text.ends_with('"'),
            "unquoted string literal {:?}",
            text,
        );
        prop_assert!(
            !text.chars().any(|c| c < ' ' || c == '\u{7F}'),
            "unescaped control character in {:?}",
            text,
        );
    }
}
