use crate::DirectiveAnnotationBuilder;
use crate::DirectiveAnnotationBuildError;
use crate::Value;
use indexmap::IndexMap;

/// A directive applied to a selection, e.g. `@include(if: $withEmail)`.
#[derive(Clone, Debug, PartialEq)]
pub struct DirectiveAnnotation {
    pub(crate) arguments: IndexMap<String, Value>,
    pub(crate) name: String,
}
impl DirectiveAnnotation {
    /// Convenience wrapper around [`DirectiveAnnotationBuilder::new()`].
    pub fn builder(
        name: impl Into<String>,
    ) -> Result<DirectiveAnnotationBuilder, DirectiveAnnotationBuildError> {
        DirectiveAnnotationBuilder::new(name)
    }

    /// A directive without arguments, rendered as a bare `@name`.
    pub fn bare(
        name: impl Into<String>,
    ) -> Result<Self, DirectiveAnnotationBuildError> {
        Ok(DirectiveAnnotationBuilder::new(name)?.build())
    }

    /// `@include(if: <condition>)`
    pub fn include(
        condition: impl Into<Value>,
    ) -> Result<Self, DirectiveAnnotationBuildError> {
        Ok(DirectiveAnnotationBuilder::new("include")?
            .add_argument("if", condition)?
            .build())
    }

    /// `@skip(if: <condition>)`
    pub fn skip(
        condition: impl Into<Value>,
    ) -> Result<Self, DirectiveAnnotationBuildError> {
        Ok(DirectiveAnnotationBuilder::new("skip")?
            .add_argument("if", condition)?
            .build())
    }

    pub fn arguments(&self) -> &IndexMap<String, Value> {
        &self.arguments
    }

    pub fn name(&self) -> &str {
        self.name.as_str()
    }
}
