use crate::encoding;
use crate::name;
use crate::ValueError;
use indexmap::IndexMap;

/// A GraphQL input value as it will be written into argument position.
///
/// The variant is chosen by the caller when the value is constructed, so the
/// encoder never has to guess whether a string should be quoted or whether a
/// collection is a list or an input object.
#[derive(Clone, Debug, PartialEq)]
pub enum Value {
    Null,
    Bool(bool),
    Int(i64),
    Float(f64),
    String(String),

    /// Text written verbatim, without quoting or escaping. Used for enum
    /// values (`ACTIVE`), variable references (`$id`), or any other snippet
    /// of GraphQL the caller has already formed. The caller is responsible
    /// for its validity.
    Raw(String),

    List(Vec<Value>),
    Object(IndexMap<String, Value>),
}
impl Value {
    /// Shorthand for [`Value::Raw`].
    pub fn raw(text: impl Into<String>) -> Self {
        Self::Raw(text.into())
    }

    /// A [`Value::Raw`] referencing the operation variable `name`
    /// (`$name`).
    pub fn variable(name: &str) -> Self {
        Self::Raw(format!("${name}"))
    }

    /// Builds a [`Value::List`] from anything convertible into values.
    pub fn list<T: Into<Value>>(items: impl IntoIterator<Item = T>) -> Self {
        Self::List(items.into_iter().map(Into::into).collect())
    }

    /// Builds a [`Value::Object`], preserving the iteration order of
    /// `entries`.
    pub fn object<K, V>(entries: impl IntoIterator<Item = (K, V)>) -> Self
    where
        K: Into<String>,
        V: Into<Value>,
    {
        Self::Object(
            entries.into_iter()
                .map(|(key, value)| (key.into(), value.into()))
                .collect(),
        )
    }

    pub fn as_str(&self) -> Option<&str> {
        if let Self::String(str) = self {
            Some(str.as_str())
        } else {
            None
        }
    }

    pub fn is_null(&self) -> bool {
        matches!(self, Self::Null)
    }

    /// Checks that this value (recursively) has a GraphQL representation:
    /// floats must be finite and object keys must be GraphQL names.
    ///
    /// Builders call this for every argument they accept, so a tree that was
    /// built successfully always encodes to well-formed text.
    pub fn validate(&self) -> Result<(), ValueError> {
        match self {
            Self::Float(value) if !value.is_finite() =>
                Err(ValueError::NonFiniteFloat { value: *value }),

            Self::List(items) =>
                items.iter().try_for_each(Value::validate),

            Self::Object(entries) => {
                for (key, value) in entries {
                    if !name::is_valid_name(key) {
                        return Err(ValueError::InvalidObjectKey {
                            key: key.to_string(),
                        });
                    }
                    value.validate()?;
                }
                Ok(())
            },

            Self::Null
            | Self::Bool(_)
            | Self::Int(_)
            | Self::Float(_)
            | Self::String(_)
            | Self::Raw(_) => Ok(()),
        }
    }
}

impl std::fmt::Display for Value {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&encoding::encode_value(self))
    }
}

impl From<bool> for Value {
    fn from(value: bool) -> Self {
        Self::Bool(value)
    }
}

macro_rules! value_from_int {
    ($($int:ty),*) => {
        $(
            impl From<$int> for Value {
                fn from(value: $int) -> Self {
                    Self::Int(i64::from(value))
                }
            }
        )*
    };
}
value_from_int!(i8, i16, i32, i64, u8, u16, u32);

impl From<f32> for Value {
    fn from(value: f32) -> Self {
        Self::Float(f64::from(value))
    }
}

impl From<f64> for Value {
    fn from(value: f64) -> Self {
        Self::Float(value)
    }
}

impl From<&str> for Value {
    fn from(value: &str) -> Self {
        Self::String(value.to_string())
    }
}

impl From<String> for Value {
    fn from(value: String) -> Self {
        Self::String(value)
    }
}

impl<T: Into<Value>> From<Option<T>> for Value {
    fn from(value: Option<T>) -> Self {
        value.map_or(Self::Null, Into::into)
    }
}

impl<T: Into<Value>> From<Vec<T>> for Value {
    fn from(items: Vec<T>) -> Self {
        Self::list(items)
    }
}

impl From<IndexMap<String, Value>> for Value {
    fn from(entries: IndexMap<String, Value>) -> Self {
        Self::Object(entries)
    }
}
