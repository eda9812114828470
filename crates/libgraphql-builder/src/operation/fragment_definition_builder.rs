use crate::DirectiveAnnotation;
use crate::name;
use crate::operation::FieldSelection;
use crate::operation::FragmentDefinition;
use crate::operation::FragmentSpread;
use crate::operation::Selection;
use crate::operation::SelectionSetBuilderTrait;
use inherent::inherent;
use thiserror::Error;

type Result<T> = std::result::Result<T, FragmentBuildError>;

#[derive(Clone, Debug, PartialEq)]
pub struct FragmentDefinitionBuilder {
    directives: Vec<DirectiveAnnotation>,
    name: String,
    selections: Vec<Selection>,
    type_condition: String,
}
impl FragmentDefinitionBuilder {
    pub fn new(
        name: impl Into<String>,
        type_condition: impl Into<String>,
    ) -> Result<Self> {
        let name = name.into();
        Self::check_fragment_name(&name)?;

        let type_condition = type_condition.into();
        if !name::is_valid_name(&type_condition) {
            return Err(FragmentBuildError::InvalidTypeCondition {
                fragment_name: name,
                type_condition,
            });
        }

        Ok(Self {
            directives: vec![],
            name,
            selections: vec![],
            type_condition,
        })
    }

    /// Fragment names are GraphQL names other than `on`.
    ///
    /// <https://spec.graphql.org/September2025/#FragmentName>
    pub(super) fn check_fragment_name(fragment_name: &str) -> Result<()> {
        if fragment_name.is_empty() {
            return Err(FragmentBuildError::EmptyFragmentName);
        }
        if fragment_name == "on" || !name::is_valid_name(fragment_name) {
            return Err(FragmentBuildError::InvalidFragmentName {
                fragment_name: fragment_name.to_string(),
            });
        }
        Ok(())
    }

    /// Add a [`DirectiveAnnotation`] after any previously added
    /// `DirectiveAnnotation`s.
    pub fn add_directive(mut self, directive: DirectiveAnnotation) -> Self {
        self.directives.push(directive);
        self
    }

    /// Consume this [`FragmentDefinitionBuilder`] to produce a
    /// [`FragmentDefinition`]. A fragment must select at least one thing.
    pub fn build(self) -> Result<FragmentDefinition> {
        if self.selections.is_empty() {
            return Err(FragmentBuildError::EmptySelectionSet {
                fragment_name: self.name,
            });
        }
        Ok(FragmentDefinition {
            directives: self.directives,
            name: self.name,
            selections: self.selections,
            type_condition: self.type_condition,
        })
    }
}

#[inherent]
impl SelectionSetBuilderTrait for FragmentDefinitionBuilder {
    /// Add a [`Selection`] after any previously added `Selection`s.
    pub fn add_selection(mut self, selection: Selection) -> Self {
        self.selections.push(selection);
        self
    }

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
pub enum FragmentBuildError {
    #[error("fragment names must not be empty")]
    EmptyFragmentName,

    #[error("fragment `{fragment_name}` does not select anything")]
    EmptySelectionSet {
        fragment_name: String,
    },

    #[error("`{fragment_name}` is not a valid fragment name")]
    InvalidFragmentName {
        fragment_name: String,
    },

    #[error("`{type_condition}` is not a valid type condition (for fragment `{fragment_name}`)")]
    InvalidTypeCondition {
        fragment_name: String,
        type_condition: String,
    },
}
