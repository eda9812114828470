//! Rendering of selection trees into indented GraphQL text.

mod field_tree_renderer;
mod render_options;

pub use field_tree_renderer::FieldTreeRenderer;
pub use render_options::RenderOptions;
