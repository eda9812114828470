use crate::name;
use crate::encoding;
use crate::operation::FieldSelection;
use crate::operation::FieldSelectionBuildError;
use crate::operation::FragmentDefinition;
use crate::operation::OperationKind;
use crate::operation::Selection;
use crate::operation::VariableDefinition;
use crate::render::FieldTreeRenderer;
use crate::render::RenderOptions;
use indexmap::IndexMap;
use std::collections::HashSet;
use thiserror::Error;

type Result<T> = std::result::Result<T, DocumentBuildError>;

/// Assembles root selections (plus optional name, variables and fragment
/// definitions) into a complete GraphQL operation document.
///
/// The same builder serves every [`OperationKind`]; only the opening keyword
/// differs.
#[derive(Clone, Debug)]
pub struct DocumentBuilder {
    fragments: IndexMap<String, FragmentDefinition>,
    name: Option<String>,
    operation_kind: OperationKind,
    renderer: FieldTreeRenderer,
    selected_names: HashSet<String>,
    selections: Vec<Selection>,
    variables: IndexMap<String, VariableDefinition>,
}
impl DocumentBuilder {
    pub fn new(operation_kind: OperationKind) -> Self {
        Self {
            fragments: IndexMap::new(),
            name: None,
            operation_kind,
            renderer: FieldTreeRenderer::new(),
            selected_names: HashSet::new(),
            selections: vec![],
            variables: IndexMap::new(),
        }
    }

    pub fn query() -> Self {
        Self::new(OperationKind::Query)
    }

    pub fn mutation() -> Self {
        Self::new(OperationKind::Mutation)
    }

    pub fn subscription() -> Self {
        Self::new(OperationKind::Subscription)
    }

    pub fn with_render_options(mut self, options: RenderOptions) -> Self {
        self.renderer = FieldTreeRenderer::with_options(options);
        self
    }

    /// Name the operation (`query GetUser { ... }`).
    pub fn name(mut self, name: impl Into<String>) -> Result<Self> {
        let name = name.into();
        if !name::is_valid_name(&name) {
            return Err(DocumentBuildError::InvalidOperationName {
                operation_name: name,
            });
        }
        self.name = Some(name);
        Ok(self)
    }

    /// Add a [`VariableDefinition`] after any previously added
    /// `VariableDefinition`s.
    pub fn add_variable(mut self, variable: VariableDefinition) -> Result<Self> {
        if self.variables.contains_key(variable.name()) {
            return Err(DocumentBuildError::DuplicateVariableName {
                variable_name: variable.name().to_string(),
            });
        }
        self.variables.insert(variable.name().to_string(), variable);
        Ok(self)
    }

    /// Add a root [`FieldSelection`] after any previously added root
    /// selections. Fields added this way are never deduplicated.
    pub fn add_field(mut self, field: FieldSelection) -> Self {
        self.selections.push(Selection::Field(field));
        self
    }

    pub fn add_fields(self, fields: impl IntoIterator<Item = FieldSelection>) -> Self {
        fields.into_iter().fold(self, Self::add_field)
    }

    /// Add a root [`Selection`] of any kind (e.g. a fragment spread).
    pub fn add_selection(mut self, selection: Selection) -> Self {
        self.selections.push(selection);
        self
    }

    /// Append a [`FragmentDefinition`] to the document, after the operation.
    pub fn add_fragment(mut self, fragment: FragmentDefinition) -> Result<Self> {
        if self.fragments.contains_key(fragment.name()) {
            return Err(DocumentBuildError::DuplicateFragmentName {
                fragment_name: fragment.name().to_string(),
            });
        }
        self.fragments.insert(fragment.name().to_string(), fragment);
        Ok(self)
    }

    /// Select a root field by dot-separated path (see
    /// [`FieldSelection::from_path()`]).
    ///
    /// If a root field with the same top-level name was already selected
    /// through [`select()`](DocumentBuilder::select) or
    /// [`select_field()`](DocumentBuilder::select_field), the call is a
    /// no-op.
    pub fn select(self, path: &str) -> Result<Self> {
        let field = FieldSelection::from_path(path)?;
        let key = field.field_name().to_string();
        Ok(self.insert_selected(key, field))
    }

    /// Select an already-built root field under `key`, with the same
    /// duplicate suppression as [`select()`](DocumentBuilder::select).
    ///
    /// `key` must be a single field name: a dotted path would ask for nested
    /// fields to be built around an already-built field, which is ambiguous.
    /// It must also name `field` itself, since the duplicate set tracks the
    /// field names actually present at the root.
    pub fn select_field(self, key: &str, field: FieldSelection) -> Result<Self> {
        if key.contains('.') {
            return Err(DocumentBuildError::AmbiguousSelection {
                path: key.to_string(),
            });
        }
        if !name::is_valid_name(key) {
            return Err(FieldSelectionBuildError::InvalidFieldName {
                field_name: key.to_string(),
            }.into());
        }
        if key != field.field_name() {
            return Err(DocumentBuildError::SelectionKeyMismatch {
                field_name: field.field_name().to_string(),
                key: key.to_string(),
            });
        }
        Ok(self.insert_selected(key.to_string(), field))
    }

    fn insert_selected(mut self, key: String, field: FieldSelection) -> Self {
        if self.selected_names.contains(&key) {
            log::debug!("Skipping duplicate selection of root field `{key}`.");
            return self;
        }
        self.selected_names.insert(key);
        self.add_field(field)
    }

    pub fn fragments(&self) -> impl Iterator<Item = &FragmentDefinition> {
        self.fragments.values()
    }

    pub fn operation_kind(&self) -> OperationKind {
        self.operation_kind
    }

    pub fn selections(&self) -> &Vec<Selection> {
        &self.selections
    }

    pub fn variables(&self) -> impl Iterator<Item = &VariableDefinition> {
        self.variables.values()
    }

    /// Render the document.
    ///
    /// Root selections are rendered at indent level 1 inside the operation's
    /// braces; fragment definitions follow, each separated by a blank line.
    ///
    /// Rendering never fails, but a builder with no root selections renders
    /// as `query {\n}\n`, which is not valid GraphQL: an operation must
    /// select at least one field.
    pub fn build(&self) -> String {
        log::trace!(
            "Building {} document with {} root selections and {} fragments.",
            self.operation_kind,
            self.selections.len(),
            self.fragments.len(),
        );

        let mut out = String::new();
        out.push_str(self.operation_kind.keyword());
        if let Some(name) = &self.name {
            out.push(' ');
            out.push_str(name);
        }
        self.write_variable_definitions(&mut out);
        out.push_str(" {\n");
        for selection in &self.selections {
            self.renderer.write_selection(&mut out, selection, 1);
        }
        out.push_str("}\n");

        for fragment in self.fragments.values() {
            out.push('\n');
            self.renderer.write_fragment_definition(&mut out, fragment);
        }

        out
    }

    fn write_variable_definitions(&self, out: &mut String) {
        if self.variables.is_empty() {
            return;
        }
        out.push('(');
        for (i, variable) in self.variables.values().enumerate() {
            if i > 0 {
                out.push_str(", ");
            }
            out.push('$');
            out.push_str(variable.name());
            out.push_str(": ");
            out.push_str(variable.type_annotation());
            if let Some(default_value) = variable.default_value() {
                out.push_str(" = ");
                encoding::write_value(out, default_value);
            }
        }
        out.push(')');
    }
}

impl std::fmt::Display for DocumentBuilder {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.build())
    }
}

#[derive(Clone, Debug, Error, PartialEq)]
pub enum DocumentBuildError {
    #[error(
        "`{path}` is a nested path and cannot be combined with an \
        already-built field"
    )]
    AmbiguousSelection {
        path: String,
    },

    #[error("fragment `{fragment_name}` was added to the document twice")]
    DuplicateFragmentName {
        fragment_name: String,
    },

    #[error("variable `${variable_name}` was defined twice")]
    DuplicateVariableName {
        variable_name: String,
    },

    #[error(transparent)]
    FieldSelection(#[from] FieldSelectionBuildError),

    #[error("`{operation_name}` is not a valid operation name")]
    InvalidOperationName {
        operation_name: String,
    },

    #[error("selection key `{key}` does not match the selected field `{field_name}`")]
    SelectionKeyMismatch {
        field_name: String,
        key: String,
    },
}
