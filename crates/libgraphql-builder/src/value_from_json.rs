use crate::Value;
use crate::ValueError;

/// The key of the single-entry JSON object used to mark a raw literal, e.g.
/// `{"$raw": "ACTIVE"}`.
pub const RAW_MARKER_KEY: &str = "$raw";

/// Converts an untyped JSON value into a [`Value`].
///
/// JSON has no way to distinguish a quoted string from an enum value or a
/// variable reference, so raw literals are spelled as an object with exactly
/// one `"$raw"` entry holding a string. Everything else maps onto its obvious
/// counterpart. Integers that do not fit an `i64` are rejected rather than
/// being silently turned into floats.
impl TryFrom<serde_json::Value> for Value {
    type Error = ValueError;

    fn try_from(json: serde_json::Value) -> Result<Self, Self::Error> {
        Ok(match json {
            serde_json::Value::Null => Value::Null,
            serde_json::Value::Bool(b) => Value::Bool(b),
            serde_json::Value::Number(number) => {
                if let Some(int) = number.as_i64() {
                    Value::Int(int)
                } else if number.is_f64()
                    && let Some(float) = number.as_f64() {
                    Value::Float(float)
                } else {
                    return Err(ValueError::UnsupportedNumber {
                        number: number.to_string(),
                    });
                }
            },
            serde_json::Value::String(str) => Value::String(str),
            serde_json::Value::Array(items) => Value::List(
                items.into_iter()
                    .map(Value::try_from)
                    .collect::<Result<_, _>>()?,
            ),
            serde_json::Value::Object(mut entries) => {
                if entries.len() == 1
                    && let Some(marker) = entries.remove(RAW_MARKER_KEY) {
                    return match marker {
                        serde_json::Value::String(text) => Ok(Value::Raw(text)),
                        other => Err(ValueError::InvalidRawMarker {
                            found: other.to_string(),
                        }),
                    };
                }
                let value = Value::Object(
                    entries.into_iter()
                        .map(|(key, json)| Ok((key, Value::try_from(json)?)))
                        .collect::<Result<_, ValueError>>()?,
                );
                value.validate()?;
                value
            },
        })
    }
}
