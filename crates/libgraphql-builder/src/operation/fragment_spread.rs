use crate::DirectiveAnnotation;
use crate::operation::FragmentBuildError;
use crate::operation::FragmentDefinitionBuilder;

/// A `...FragmentName` selection referring to a named fragment.
///
/// Only the name is emitted; whether a matching
/// [`FragmentDefinition`](crate::operation::FragmentDefinition) exists in the
/// document is left to the caller.
#[derive(Clone, Debug, PartialEq)]
pub struct FragmentSpread {
    pub(crate) directives: Vec<DirectiveAnnotation>,
    pub(crate) fragment_name: String,
}
impl FragmentSpread {
    pub fn new(fragment_name: impl Into<String>) -> Result<Self, FragmentBuildError> {
        let fragment_name = fragment_name.into();
        FragmentDefinitionBuilder::check_fragment_name(&fragment_name)?;
        Ok(Self {
            directives: vec![],
            fragment_name,
        })
    }

    /// Add a [`DirectiveAnnotation`] after any previously added
    /// `DirectiveAnnotation`s.
    pub fn add_directive(mut self, directive: DirectiveAnnotation) -> Self {
        self.directives.push(directive);
        self
    }

    pub fn directives(&self) -> &Vec<DirectiveAnnotation> {
        &self.directives
    }

    pub fn fragment_name(&self) -> &str {
        self.fragment_name.as_str()
    }
}
