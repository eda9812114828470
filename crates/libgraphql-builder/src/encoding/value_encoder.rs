use crate::Value;

/// Encodes `value` as GraphQL input-value text.
///
/// ```
/// use libgraphql_builder::Value;
/// use libgraphql_builder::encoding::encode_value;
///
/// let value = Value::object([
///     ("tags", Value::list(["a", "b"])),
///     ("status", Value::raw("ACTIVE")),
/// ]);
/// assert_eq!(encode_value(&value), r#"{tags: ["a", "b"], status: ACTIVE}"#);
/// ```
pub fn encode_value(value: &Value) -> String {
    let mut out = String::new();
    write_value(&mut out, value);
    out
}

/// Appends the GraphQL text for `value` to `out`.
pub fn write_value(out: &mut String, value: &Value) {
    match value {
        Value::Null => out.push_str("null"),
        Value::Bool(true) => out.push_str("true"),
        Value::Bool(false) => out.push_str("false"),
        Value::Int(int) => out.push_str(&int.to_string()),
        Value::Float(float) => write_float(out, *float),
        Value::String(str) => write_string(out, str),
        Value::Raw(text) => out.push_str(text),
        Value::List(items) => {
            out.push('[');
            for (i, item) in items.iter().enumerate() {
                if i > 0 {
                    out.push_str(", ");
                }
                write_value(out, item);
            }
            out.push(']');
        },
        Value::Object(entries) => {
            out.push('{');
            for (i, (key, item)) in entries.iter().enumerate() {
                if i > 0 {
                    out.push_str(", ");
                }
                out.push_str(key);
                out.push_str(": ");
                write_value(out, item);
            }
            out.push('}');
        },
    }
}

/// Appends the shortest decimal text that reads back as the same `f64`.
///
/// Integral values keep a `.0` so they remain Float literals, and very large
/// or very small magnitudes switch to exponent form (`1e300`, `1.5e-7`), both
/// of which are valid GraphQL `FloatValue`s. NaN and the infinities have no
/// GraphQL spelling and are written as `null`; builders reject them before
/// they ever reach this point.
pub fn write_float(out: &mut String, float: f64) {
    if float.is_finite() {
        // `Debug` (unlike `Display`) switches to exponent notation for
        // extreme magnitudes and always includes a fractional part or an
        // exponent.
        out.push_str(&format!("{float:?}"));
    } else {
        out.push_str("null");
    }
}

/// Encodes `str` as a double-quoted GraphQL string literal.
pub fn encode_string(str: &str) -> String {
    let mut out = String::with_capacity(str.len() + 2);
    write_string(&mut out, str);
    out
}

/// Appends `str` as a double-quoted GraphQL string literal, escaping `"`,
/// `\` and every control character. Backspace is written as `\u0008`
/// rather than `\b`, which `graphql-parser` decodes as U+0010.
///
/// <https://spec.graphql.org/September2025/#sec-String-Value>
pub fn write_string(out: &mut String, mut str: &str) {
    out.push('"');
    while let Some(i) = str.find(|c: char| c < ' ' || c == '\u{7F}' || c == '"' || c == '\\') {
        let (verbatim, rest) = str.split_at(i);
        out.push_str(verbatim);
        // Every character that needs escaping is ASCII, so it is one byte.
        match rest.as_bytes()[0] {
            b'\t' => out.push_str("\\t"),
            b'\n' => out.push_str("\\n"),
            b'\x0C' => out.push_str("\\f"),
            b'\r' => out.push_str("\\r"),
            b'"' => out.push_str("\\\""),
            b'\\' => out.push_str("\\\\"),
            byte => out.push_str(&format!("\\u{byte:04X}")),
        }
        str = &rest[1..];
    }
    out.push_str(str);
    out.push('"');
}
