//! Data model types for decoded JSONB.
//!
//! - Element types (header tags)
//! - Values (the decoded tree)

pub mod element;
pub mod value;

pub use element::ElementType;
pub use value::{Object, Value};
