use crate::DirectiveAnnotation;
use crate::operation::FieldSelectionBuildError;
use crate::operation::FieldSelectionBuilder;
use crate::operation::Selection;
use crate::Value;
use indexmap::IndexMap;

/// A single selected field: `alias: name(arguments) @directives { ... }`.
///
/// Instances are produced by [`FieldSelectionBuilder`] and are immutable
/// afterwards. Child selections are owned, so a tree of `FieldSelection`s can
/// never contain a cycle.
#[derive(Clone, Debug, PartialEq)]
pub struct FieldSelection {
    pub(super) alias: Option<String>,
    pub(super) arguments: IndexMap<String, Value>,
    pub(super) directives: Vec<DirectiveAnnotation>,
    pub(super) field_name: String,
    pub(super) selections: Vec<Selection>,
}
impl FieldSelection {
    /// Convenience wrapper around [`FieldSelectionBuilder::new()`].
    pub fn builder(
        field_name: impl Into<String>,
    ) -> Result<FieldSelectionBuilder, FieldSelectionBuildError> {
        FieldSelectionBuilder::new(field_name)
    }

    /// A field with no alias, arguments, directives, or sub-selections.
    pub fn leaf(
        field_name: impl Into<String>,
    ) -> Result<Self, FieldSelectionBuildError> {
        Ok(FieldSelectionBuilder::new(field_name)?.build())
    }

    /// Builds a chain of single-child fields from a dot-separated path, so
    /// `"viewer.profile.avatar"` becomes `viewer { profile { avatar } }`.
    ///
    /// Every segment must be a valid field name; empty segments (`"a..b"`,
    /// a leading or trailing `.`) are rejected.
    pub fn from_path(path: &str) -> Result<Self, FieldSelectionBuildError> {
        let mut segments = vec![];
        for segment in path.split('.') {
            if segment.is_empty() {
                return Err(FieldSelectionBuildError::EmptyPathSegment {
                    path: path.to_string(),
                });
            }
            segments.push(segment);
        }

        let mut field: Option<FieldSelection> = None;
        for segment in segments.into_iter().rev() {
            let builder = FieldSelectionBuilder::new(segment)?;
            field = Some(match field {
                Some(child) => builder.add_field(child).build(),
                None => builder.build(),
            });
        }

        // `str::split` always yields at least one segment, and an empty one
        // was rejected above.
        field.ok_or_else(|| FieldSelectionBuildError::EmptyPathSegment {
            path: path.to_string(),
        })
    }

    pub fn alias(&self) -> Option<&str> {
        self.alias.as_deref()
    }

    pub fn arguments(&self) -> &IndexMap<String, Value> {
        &self.arguments
    }

    pub fn directives(&self) -> &Vec<DirectiveAnnotation> {
        &self.directives
    }

    pub fn field_name(&self) -> &str {
        self.field_name.as_str()
    }

    /// Returns `true` if this field has no sub-selections and therefore
    /// renders without a `{ ... }` block.
    pub fn is_leaf(&self) -> bool {
        self.selections.is_empty()
    }

    /**
     * If an alias was specified for this selection, return the alias.
     * Otherwise return the name of the field.
     */
    pub fn selected_name(&self) -> &str {
        self.alias().unwrap_or_else(|| self.field_name())
    }

    pub fn selections(&self) -> &Vec<Selection> {
        &self.selections
    }
}
