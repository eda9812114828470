use crate::name;
use crate::Value;
use crate::ValueError;
use thiserror::Error;

/// A variable declared on an operation: `$name: Type = default`.
#[derive(Clone, Debug, PartialEq)]
pub struct VariableDefinition {
    default_value: Option<Value>,
    name: String,
    type_annotation: String,
}
impl VariableDefinition {
    /// `name` is given without the leading `$`. `type_annotation` uses GraphQL
    /// type syntax (`ID!`, `[String!]`, ...) and is checked for well-formedness
    /// but not against any schema.
    pub fn new(
        name: impl Into<String>,
        type_annotation: impl Into<String>,
    ) -> Result<Self, VariableDefinitionError> {
        let name = name.into();
        if !name::is_valid_name(&name) {
            return Err(VariableDefinitionError::InvalidVariableName {
                variable_name: name,
            });
        }

        let type_annotation = type_annotation.into();
        if !is_valid_type_annotation(&type_annotation) {
            return Err(VariableDefinitionError::InvalidTypeAnnotation {
                type_annotation,
                variable_name: name,
            });
        }

        Ok(Self {
            default_value: None,
            name,
            type_annotation,
        })
    }

    pub fn with_default_value(
        mut self,
        value: impl Into<Value>,
    ) -> Result<Self, VariableDefinitionError> {
        let value = value.into();
        if let Err(error) = value.validate() {
            return Err(VariableDefinitionError::InvalidDefaultValue {
                error,
                variable_name: self.name,
            });
        }
        self.default_value = Some(value);
        Ok(self)
    }

    pub fn default_value(&self) -> Option<&Value> {
        self.default_value.as_ref()
    }

    pub fn name(&self) -> &str {
        self.name.as_str()
    }

    pub fn type_annotation(&self) -> &str {
        self.type_annotation.as_str()
    }

    /// A [`Value::Raw`] referencing this variable, for use as an argument.
    pub fn as_value(&self) -> Value {
        Value::variable(&self.name)
    }
}

fn is_valid_type_annotation(type_annotation: &str) -> bool {
    matches!(consume_type_annotation(type_annotation), Some(""))
}

/// Consumes one `Type` from the front of `input` and returns what remains.
///
/// <https://spec.graphql.org/September2025/#Type>
fn consume_type_annotation(input: &str) -> Option<&str> {
    let rest = if let Some(inner) = input.strip_prefix('[') {
        consume_type_annotation(inner)?.strip_prefix(']')?
    } else {
        let name_len = input
            .find(|c: char| c != '_' && !c.is_ascii_alphanumeric())
            .unwrap_or(input.len());
        let (type_name, rest) = input.split_at(name_len);
        if !name::is_valid_name(type_name) {
            return None;
        }
        rest
    };
    Some(rest.strip_prefix('!').unwrap_or(rest))
}

#[derive(Clone, Debug, Error, PartialEq)]
pub enum VariableDefinitionError {
    #[error("invalid default value for variable `${variable_name}`: {error}")]
    InvalidDefaultValue {
        error: ValueError,
        variable_name: String,
    },

    #[error("`{type_annotation}` is not a valid type for variable `${variable_name}`")]
    InvalidTypeAnnotation {
        type_annotation: String,
        variable_name: String,
    },

    #[error("`{variable_name}` is not a valid variable name")]
    InvalidVariableName {
        variable_name: String,
    },
}
