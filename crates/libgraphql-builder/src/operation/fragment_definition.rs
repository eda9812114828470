use crate::DirectiveAnnotation;
use crate::operation::FragmentBuildError;
use crate::operation::FragmentDefinitionBuilder;
use crate::operation::Selection;

/// `fragment Name on TypeCondition @directives { ... }`
#[derive(Clone, Debug, PartialEq)]
pub struct FragmentDefinition {
    pub(super) directives: Vec<DirectiveAnnotation>,
    pub(super) name: String,
    pub(super) selections: Vec<Selection>,
    pub(super) type_condition: String,
}
impl FragmentDefinition {
    /// Convenience wrapper around [`FragmentDefinitionBuilder::new()`].
    pub fn builder(
        name: impl Into<String>,
        type_condition: impl Into<String>,
    ) -> Result<FragmentDefinitionBuilder, FragmentBuildError> {
        FragmentDefinitionBuilder::new(name, type_condition)
    }

    pub fn directives(&self) -> &Vec<DirectiveAnnotation> {
        &self.directives
    }

    pub fn name(&self) -> &str {
        self.name.as_str()
    }

    pub fn selections(&self) -> &Vec<Selection> {
        &self.selections
    }

    pub fn type_condition(&self) -> &str {
        self.type_condition.as_str()
    }
}
