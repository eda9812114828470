/// Formatting options for [`FieldTreeRenderer`](crate::render::FieldTreeRenderer).
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct RenderOptions {
    /// Number of spaces per nesting level.
    pub indent_width: usize,
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self {
            indent_width: 2,
        }
    }
}
