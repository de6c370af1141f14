//! Security limits for decoding.
//!
//! The JSONB format itself places no cap on nesting, so a crafted buffer
//! of nested single-byte array headers could otherwise exhaust the stack.

/// Default maximum container nesting depth.
///
/// Matches the nesting limit SQLite applies to its own JSON functions.
pub const MAX_DEPTH: usize = 1000;

/// Largest literal size encoded directly in the size selector nibble.
pub const MAX_INLINE_PAYLOAD_LEN: u8 = 11;
