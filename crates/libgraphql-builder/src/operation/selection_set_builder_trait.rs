use crate::operation::FieldSelection;
use crate::operation::FragmentSpread;
use crate::operation::Selection;

/// Shared surface of every builder that owns a selection set (fields and
/// fragment definitions).
pub(super) trait SelectionSetBuilderTrait where Self: Sized {
    fn add_selection(self, selection: Selection) -> Self;

    fn add_field(self, field: FieldSelection) -> Self;

    fn add_fields<I: IntoIterator<Item = FieldSelection>>(self, fields: I) -> Self;

    fn add_fragment_spread(self, spread: FragmentSpread) -> Self;

    fn selections(&self) -> &[Selection];
}
