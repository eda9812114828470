use crate::DirectiveAnnotation;
use crate::encoding;
use crate::operation::FieldSelection;
use crate::operation::FragmentDefinition;
use crate::operation::FragmentSpread;
use crate::operation::Selection;
use crate::render::RenderOptions;

/// Renders [`FieldSelection`] trees as GraphQL selection text.
///
/// Each field occupies one line at `indent_level * indent_width` spaces:
///
/// ```text
/// alias: name(arg: value) @directive(arg: value) {
///   child
/// }
/// ```
///
/// Arguments, directive arguments and the `{ ... }` block are omitted
/// entirely when empty. Children are emitted in stored order at
/// `indent_level + 1`. Rendering cannot fail and always produces the same
/// bytes for the same tree.
#[derive(Clone, Debug, Default)]
pub struct FieldTreeRenderer {
    options: RenderOptions,
}
impl FieldTreeRenderer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_options(options: RenderOptions) -> Self {
        Self { options }
    }

    pub fn options(&self) -> &RenderOptions {
        &self.options
    }

    /// Renders `field` (and all of its sub-selections) starting at
    /// `indent_level`. The result always ends with a newline.
    pub fn render(&self, field: &FieldSelection, indent_level: usize) -> String {
        let mut out = String::new();
        self.write_field(&mut out, field, indent_level);
        out
    }

    /// Like [`render()`](FieldTreeRenderer::render), for any [`Selection`].
    pub fn render_selection(&self, selection: &Selection, indent_level: usize) -> String {
        let mut out = String::new();
        self.write_selection(&mut out, selection, indent_level);
        out
    }

    /// Renders a complete `fragment Name on Type { ... }` definition at
    /// indent level 0.
    pub fn render_fragment_definition(&self, fragment: &FragmentDefinition) -> String {
        let mut out = String::new();
        self.write_fragment_definition(&mut out, fragment);
        out
    }

    pub(crate) fn write_selection(
        &self,
        out: &mut String,
        selection: &Selection,
        indent_level: usize,
    ) {
        match selection {
            Selection::Field(field) =>
                self.write_field(out, field, indent_level),
            Selection::FragmentSpread(spread) =>
                self.write_fragment_spread(out, spread, indent_level),
        }
    }

    pub(crate) fn write_field(
        &self,
        out: &mut String,
        field: &FieldSelection,
        indent_level: usize,
    ) {
        self.write_indent(out, indent_level);
        if let Some(alias) = field.alias() {
            out.push_str(alias);
            out.push_str(": ");
        }
        out.push_str(field.field_name());

        if !field.arguments().is_empty() {
            out.push('(');
            encoding::write_arguments(out, field.arguments());
            out.push(')');
        }

        write_directives(out, field.directives());
        self.write_selection_set(out, field.selections(), indent_level);
    }

    pub(crate) fn write_fragment_definition(
        &self,
        out: &mut String,
        fragment: &FragmentDefinition,
    ) {
        out.push_str("fragment ");
        out.push_str(fragment.name());
        out.push_str(" on ");
        out.push_str(fragment.type_condition());
        write_directives(out, fragment.directives());
        self.write_selection_set(out, fragment.selections(), 0);
    }

    fn write_fragment_spread(
        &self,
        out: &mut String,
        spread: &FragmentSpread,
        indent_level: usize,
    ) {
        self.write_indent(out, indent_level);
        out.push_str("...");
        out.push_str(spread.fragment_name());
        write_directives(out, spread.directives());
        out.push('\n');
    }

    /// Terminates the current line, wrapping `selections` in a braced block
    /// when there are any.
    fn write_selection_set(
        &self,
        out: &mut String,
        selections: &[Selection],
        indent_level: usize,
    ) {
        if selections.is_empty() {
            out.push('\n');
            return;
        }

        out.push_str(" {\n");
        for selection in selections {
            self.write_selection(out, selection, indent_level + 1);
        }
        self.write_indent(out, indent_level);
        out.push_str("}\n");
    }

    fn write_indent(&self, out: &mut String, indent_level: usize) {
        let width = indent_level * self.options.indent_width;
        out.extend(std::iter::repeat_n(' ', width));
    }
}

/// Appends ` @name(args)` for each directive; a directive without arguments
/// is written as a bare ` @name`.
fn write_directives(out: &mut String, directives: &[DirectiveAnnotation]) {
    for directive in directives {
        out.push_str(" @");
        out.push_str(directive.name());
        if !directive.arguments().is_empty() {
            out.push('(');
            encoding::write_arguments(out, directive.arguments());
            out.push(')');
        }
    }
}
