use thiserror::Error;

/// Describes why a [`Value`](crate::Value) (or an untyped value being
/// converted into one) cannot be encoded as a GraphQL input value.
#[derive(Clone, Debug, Error, PartialEq)]
pub enum ValueError {
    #[error("object key `{key}` is not a valid GraphQL name")]
    InvalidObjectKey {
        key: String,
    },

    #[error("a `$raw` marker must hold a string, found `{found}`")]
    InvalidRawMarker {
        found: String,
    },

    #[error("float value `{value}` has no GraphQL representation")]
    NonFiniteFloat {
        value: f64,
    },

    #[error("number `{number}` is outside the range of a GraphQL Int and is not a float")]
    UnsupportedNumber {
        number: String,
    },
}
