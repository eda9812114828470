mod document_builder;
mod field_selection;
mod field_selection_builder;
mod fragment_definition;
mod fragment_definition_builder;
mod fragment_spread;
mod operation_kind;
mod selection;
mod selection_set_builder_trait;
mod variable_definition;

pub use document_builder::DocumentBuildError;
pub use document_builder::DocumentBuilder;
pub use field_selection::FieldSelection;
pub use field_selection_builder::FieldSelectionBuildError;
pub use field_selection_builder::FieldSelectionBuilder;
pub use fragment_definition::FragmentDefinition;
pub use fragment_definition_builder::FragmentBuildError;
pub use fragment_definition_builder::FragmentDefinitionBuilder;
pub use fragment_spread::FragmentSpread;
pub use operation_kind::OperationKind;
pub use selection::Selection;
use selection_set_builder_trait::SelectionSetBuilderTrait;
pub use variable_definition::VariableDefinition;
pub use variable_definition::VariableDefinitionError;

#[cfg(test)]
mod tests;
