//! Binary decoding for SQLite JSONB.
//!
//! See <https://sqlite.org/jsonb.html> for the format description.

pub mod decode;
pub mod header;
pub(crate) mod primitives;
pub(crate) mod scalar;

#[cfg(test)]
pub(crate) mod testing;

pub use decode::{
    DecodeOptions, Siblings, decode, decode_one, decode_one_with_options, decode_with_options,
    siblings, siblings_with_options,
};
pub use header::Header;
