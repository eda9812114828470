use crate::DirectiveAnnotation;
use crate::name;
use crate::operation::FieldSelection;
use crate::operation::FragmentSpread;
use crate::operation::Selection;
use crate::operation::SelectionSetBuilderTrait;
use crate::Value;
use crate::ValueError;
use indexmap::IndexMap;
use inherent::inherent;
use thiserror::Error;

type Result<T> = std::result::Result<T, FieldSelectionBuildError>;

/// Accumulates the pieces of a [`FieldSelection`].
///
/// Every method that can observe malformed input validates it immediately,
/// so errors point at the exact call that introduced them and
/// [`build()`](FieldSelectionBuilder::build) itself cannot fail.
#[derive(Clone, Debug, PartialEq)]
pub struct FieldSelectionBuilder {
    alias: Option<String>,
    arguments: IndexMap<String, Value>,
    directives: Vec<DirectiveAnnotation>,
    field_name: String,
    selections: Vec<Selection>,
}
impl FieldSelectionBuilder {
    pub fn new(field_name: impl Into<String>) -> Result<Self> {
        let field_name = field_name.into();
        if field_name.is_empty() {
            return Err(FieldSelectionBuildError::EmptyFieldName);
        }
        if !name::is_valid_name(&field_name) {
            return Err(FieldSelectionBuildError::InvalidFieldName {
                field_name,
            });
        }
        Ok(Self {
            alias: None,
            arguments: IndexMap::new(),
            directives: vec![],
            field_name,
            selections: vec![],
        })
    }

    /// Set the alias the field's result will be keyed under
    /// (`alias: fieldName`).
    pub fn alias(mut self, alias: impl Into<String>) -> Result<Self> {
        let alias = alias.into();
        if alias.is_empty() {
            return Err(FieldSelectionBuildError::EmptyAlias {
                field_name: self.field_name,
            });
        }
        if !name::is_valid_name(&alias) {
            return Err(FieldSelectionBuildError::InvalidAlias {
                alias,
                field_name: self.field_name,
            });
        }
        self.alias = Some(alias);
        Ok(self)
    }

    /// Add an argument after any previously added arguments.
    pub fn add_argument(
        mut self,
        name: impl Into<String>,
        value: impl Into<Value>,
    ) -> Result<Self> {
        let argument_name = name.into();
        if !name::is_valid_name(&argument_name) {
            return Err(FieldSelectionBuildError::InvalidArgumentName {
                argument_name,
                field_name: self.field_name,
            });
        }
        if self.arguments.contains_key(&argument_name) {
            return Err(FieldSelectionBuildError::DuplicateArgument {
                argument_name,
                field_name: self.field_name,
            });
        }
        let value = value.into();
        if let Err(error) = value.validate() {
            return Err(FieldSelectionBuildError::InvalidArgumentValue {
                argument_name,
                error,
                field_name: self.field_name,
            });
        }
        self.arguments.insert(argument_name, value);
        Ok(self)
    }

    /// Add every `(name, value)` pair of `arguments`, in iteration order.
    pub fn add_arguments<K, V>(
        self,
        arguments: impl IntoIterator<Item = (K, V)>,
    ) -> Result<Self>
    where
        K: Into<String>,
        V: Into<Value>,
    {
        arguments.into_iter().try_fold(self, |builder, (name, value)| {
            builder.add_argument(name, value)
        })
    }

    /// Add a [`DirectiveAnnotation`] after any previously added
    /// `DirectiveAnnotation`s.
    pub fn add_directive(mut self, directive: DirectiveAnnotation) -> Self {
        self.directives.push(directive);
        self
    }

    pub fn build(self) -> FieldSelection {
        FieldSelection {
            alias: self.alias,
            arguments: self.arguments,
            directives: self.directives,
            field_name: self.field_name,
            selections: self.selections,
        }
    }
}

#[inherent]
impl SelectionSetBuilderTrait for FieldSelectionBuilder {
    /// Add a [`Selection`] after any previously added `Selection`s.
    pub fn add_selection(mut self, selection: Selection) -> Self {
        self.selections.push(selection);
        self
    }

    /// Add a child [`FieldSelection`] after any previously added
    /// `Selection`s.
    pub fn add_field(self, field: FieldSelection) -> Self {
        self.add_selection(Selection::Field(field))
    }

    pub fn add_fields<I: IntoIterator<Item = FieldSelection>>(self, fields: I) -> Self {
        fields.into_iter().fold(self, Self::add_field)
    }

    pub fn add_fragment_spread(self, spread: FragmentSpread) -> Self {
        self.add_selection(Selection::FragmentSpread(spread))
    }

    pub fn selections(&self) -> &[Selection] {
        self.selections.as_slice()
    }
}

#[derive(Clone, Debug, Error, PartialEq)]
pub enum FieldSelectionBuildError {
    #[error("argument `{argument_name}` was added twice to field `{field_name}`")]
    DuplicateArgument {
        argument_name: String,
        field_name: String,
    },

    #[error("the alias of field `{field_name}` must not be empty")]
    EmptyAlias {
        field_name: String,
    },

    #[error("field names must not be empty")]
    EmptyFieldName,

    #[error("field path `{path}` contains an empty segment")]
    EmptyPathSegment {
        path: String,
    },

    #[error("`{alias}` is not a valid alias (for field `{field_name}`)")]
    InvalidAlias {
        alias: String,
        field_name: String,
    },

    #[error("`{argument_name}` is not a valid argument name (on field `{field_name}`)")]
    InvalidArgumentName {
        argument_name: String,
        field_name: String,
    },

    #[error("invalid value for argument `{argument_name}` of field `{field_name}`: {error}")]
    InvalidArgumentValue {
        argument_name: String,
        error: ValueError,
        field_name: String,
    },

    #[error("`{field_name}` is not a valid field name")]
    InvalidFieldName {
        field_name: String,
    },
}
