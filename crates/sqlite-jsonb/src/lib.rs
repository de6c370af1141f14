//! Decoder for SQLite's JSONB binary encoding.
//!
//! SQLite stores JSON internally as JSONB: a tree of elements, each a
//! 1 to 9 byte header (element type plus payload size) followed by its
//! payload. This crate turns such a buffer back into an owned [`Value`]
//! tree. It only decodes; producing JSONB is left to SQLite.
//!
//! # Quick Start
//!
//! ```rust
//! use sqlite_jsonb::{Value, decode, decode_one};
//!
//! // [1, "a"]
//! let bytes = [0x4B, 0x13, b'1', 0x17, b'a'];
//!
//! let value = decode(&bytes).unwrap();
//! assert_eq!(value, Value::Array(vec![Value::Int(1), Value::from("a")]));
//!
//! // decode_one also reports how many bytes the value occupied.
//! let (_, consumed) = decode_one(&bytes).unwrap();
//! assert_eq!(consumed, bytes.len());
//! ```
//!
//! # Modules
//!
//! - [`model`]: Decoded values and element types
//! - [`codec`]: Header parsing and recursive decoding
//! - [`error`]: Error types
//! - [`limits`]: Security limits for decoding
//!
//! # Security
//!
//! The decoder is designed to safely handle untrusted input:
//! - Every read is bounds-checked against the enclosing payload window
//! - Container nesting is capped ([`limits::MAX_DEPTH`] by default)
//! - Invalid data is rejected with descriptive errors carrying byte offsets
//!
//! # Unsupported elements
//!
//! TEXTJ and TEXT5 elements (text with JSON or JSON5 escapes) are
//! recognized and rejected with [`DecodeError::UnsupportedEncoding`].

pub mod codec;
pub mod error;
pub mod limits;
pub mod model;

// Re-export commonly used types at crate root
pub use codec::{
    DecodeOptions, Header, Siblings, decode, decode_one, decode_one_with_options,
    decode_with_options, siblings, siblings_with_options,
};
pub use error::{DecodeError, ErrorKind};
pub use model::{ElementType, Object, Value};

/// Crate version.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
