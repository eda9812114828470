use crate::DirectiveAnnotation;
use crate::name;
use crate::Value;
use crate::ValueError;
use indexmap::IndexMap;
use thiserror::Error;

type Result<T> = std::result::Result<T, DirectiveAnnotationBuildError>;

#[derive(Clone, Debug, PartialEq)]
pub struct DirectiveAnnotationBuilder {
    arguments: IndexMap<String, Value>,
    name: String,
}
impl DirectiveAnnotationBuilder {
    /// Start building a [`DirectiveAnnotation`] named `name` (without the
    /// leading `@`).
    pub fn new(name: impl Into<String>) -> Result<Self> {
        let name = name.into();
        if name.is_empty() {
            return Err(DirectiveAnnotationBuildError::EmptyDirectiveName);
        }
        if !name::is_valid_name(&name) {
            return Err(DirectiveAnnotationBuildError::InvalidDirectiveName {
                directive_name: name,
            });
        }
        Ok(Self {
            arguments: IndexMap::new(),
            name,
        })
    }

    /// Add an argument after any previously added arguments.
    pub fn add_argument(
        mut self,
        name: impl Into<String>,
        value: impl Into<Value>,
    ) -> Result<Self> {
        let argument_name = name.into();
        if !name::is_valid_name(&argument_name) {
            return Err(DirectiveAnnotationBuildError::InvalidArgumentName {
                argument_name,
                directive_name: self.name,
            });
        }
        if self.arguments.contains_key(&argument_name) {
            return Err(DirectiveAnnotationBuildError::DuplicateArgument {
                argument_name,
                directive_name: self.name,
            });
        }
        let value = value.into();
        if let Err(error) = value.validate() {
            return Err(DirectiveAnnotationBuildError::InvalidArgumentValue {
                argument_name,
                directive_name: self.name,
                error,
            });
        }
        self.arguments.insert(argument_name, value);
        Ok(self)
    }

    pub fn build(self) -> DirectiveAnnotation {
        DirectiveAnnotation {
            arguments: self.arguments,
            name: self.name,
        }
    }
}

#[derive(Clone, Debug, Error, PartialEq)]
pub enum DirectiveAnnotationBuildError {
    #[error("argument `{argument_name}` was added twice to directive `@{directive_name}`")]
    DuplicateArgument {
        argument_name: String,
        directive_name: String,
    },

    #[error("directive names must not be empty")]
    EmptyDirectiveName,

    #[error("`{argument_name}` is not a valid argument name (on directive `@{directive_name}`)")]
    InvalidArgumentName {
        argument_name: String,
        directive_name: String,
    },

    #[error("invalid value for argument `{argument_name}` of directive `@{directive_name}`: {error}")]
    InvalidArgumentValue {
        argument_name: String,
        directive_name: String,
        error: ValueError,
    },

    #[error("`{directive_name}` is not a valid directive name")]
    InvalidDirectiveName {
        directive_name: String,
    },
}
