//! Encoding of [`Value`](crate::Value)s and argument lists into GraphQL
//! literal text.
//!
//! Every function here is pure and total. The `write_*` variants append to
//! a caller-owned `String` so that the renderer can build a whole document in
//! a single buffer; the `encode_*` variants are conveniences returning a
//! fresh `String`.

mod argument_list_encoder;
mod value_encoder;

pub use argument_list_encoder::encode_arguments;
pub use argument_list_encoder::write_arguments;
pub use value_encoder::encode_string;
pub use value_encoder::encode_value;
pub use value_encoder::write_float;
pub use value_encoder::write_string;
pub use value_encoder::write_value;

#[cfg(test)]
mod tests;
