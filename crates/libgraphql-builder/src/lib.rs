//! Build GraphQL operation documents from an in-memory tree of field
//! selections.
//!
//! A [`FieldSelection`](operation::FieldSelection) tree is assembled through
//! builders that reject malformed input up front, and then rendered into
//! deterministic, indented GraphQL text by a
//! [`DocumentBuilder`](operation::DocumentBuilder):
//!
//! ```
//! use libgraphql_builder::Value;
//! use libgraphql_builder::operation::DocumentBuilder;
//! use libgraphql_builder::operation::FieldSelection;
//!
//! let user = FieldSelection::builder("user")?
//!     .add_argument("id", 5)?
//!     .add_argument("status", Value::raw("ACTIVE"))?
//!     .add_field(FieldSelection::leaf("name")?)
//!     .build();
//!
//! let doc = DocumentBuilder::query().add_field(user).build();
//! assert_eq!(doc, concat!(
//!     "query {\n",
//!     "  user(id: 5, status: ACTIVE) {\n",
//!     "    name\n",
//!     "  }\n",
//!     "}\n",
//! ));
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```
//!
//! This crate only emits GraphQL. It does not parse, validate against a
//! schema, or execute anything.

mod directive_annotation;
mod directive_annotation_builder;
pub mod encoding;
mod name;
pub mod operation;
pub mod render;
mod value;
mod value_error;
#[cfg(feature = "json")]
mod value_from_json;

pub use directive_annotation::DirectiveAnnotation;
pub use directive_annotation_builder::DirectiveAnnotationBuildError;
pub use directive_annotation_builder::DirectiveAnnotationBuilder;
pub use name::is_valid_name;
pub use value::Value;
pub use value_error::ValueError;
#[cfg(feature = "json")]
pub use value_from_json::RAW_MARKER_KEY;

#[cfg(test)]
mod tests;
