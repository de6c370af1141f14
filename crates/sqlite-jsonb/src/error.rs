//! Error types for JSONB decoding.

use thiserror::Error;

use crate::model::ElementType;

/// Broad classification of decode failures.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    EmptyInput,
    InvalidType,
    UnsupportedEncoding,
    TruncatedHeader,
    TruncatedPayload,
    MalformedScalar,
    NumericParseError,
    TextDecodeError,
    NonTextKey,
    DuplicateKey,
    TruncatedObject,
    MalformedComposite,
    DepthLimitExceeded,
    TrailingBytes,
}

impl ErrorKind {
    /// Returns the kind name (e.g., "TruncatedPayload").
    pub fn as_str(&self) -> &'static str {
        match self {
            ErrorKind::EmptyInput => "EmptyInput",
            ErrorKind::InvalidType => "InvalidType",
            ErrorKind::UnsupportedEncoding => "UnsupportedEncoding",
            ErrorKind::TruncatedHeader => "TruncatedHeader",
            ErrorKind::TruncatedPayload => "TruncatedPayload",
            ErrorKind::MalformedScalar => "MalformedScalar",
            ErrorKind::NumericParseError => "NumericParseError",
            ErrorKind::TextDecodeError => "TextDecodeError",
            ErrorKind::NonTextKey => "NonTextKey",
            ErrorKind::DuplicateKey => "DuplicateKey",
            ErrorKind::TruncatedObject => "TruncatedObject",
            ErrorKind::MalformedComposite => "MalformedComposite",
            ErrorKind::DepthLimitExceeded => "DepthLimitExceeded",
            ErrorKind::TrailingBytes => "TrailingBytes",
        }
    }
}

impl std::fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Error during JSONB decoding.
///
/// Offsets are absolute byte positions in the buffer passed to the
/// top-level entry point.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum DecodeError {
    #[error("input buffer is empty")]
    EmptyInput,

    #[error("reserved element type 0x{tag:X} at offset {offset}")]
    InvalidType { offset: usize, tag: u8 },

    #[error("unsupported element type {element_type} at offset {offset}")]
    UnsupportedEncoding {
        offset: usize,
        element_type: ElementType,
    },

    #[error("truncated header at offset {offset}: need {needed} bytes, {available} available")]
    TruncatedHeader {
        offset: usize,
        needed: usize,
        available: usize,
    },

    #[error("truncated payload at offset {offset}: need {needed} bytes, {available} available")]
    TruncatedPayload {
        offset: usize,
        needed: u64,
        available: usize,
    },

    #[error("{element_type} at offset {offset} has non-zero payload size {len}")]
    MalformedScalar {
        offset: usize,
        element_type: ElementType,
        len: u64,
    },

    #[error("invalid {element_type} literal {literal:?} at offset {offset}")]
    NumericParseError {
        offset: usize,
        element_type: ElementType,
        literal: String,
    },

    #[error("invalid UTF-8 in text at offset {offset} (valid up to byte {valid_up_to})")]
    TextDecodeError { offset: usize, valid_up_to: usize },

    #[error("object key at offset {offset} is {element_type}, expected text")]
    NonTextKey {
        offset: usize,
        element_type: ElementType,
    },

    #[error("duplicate object key {key:?} at offset {offset}")]
    DuplicateKey { offset: usize, key: String },

    #[error("object key {key:?} at offset {offset} has no value")]
    TruncatedObject { offset: usize, key: String },

    #[error("element at offset {offset} overruns its container: need {needed} bytes, {available} available")]
    MalformedComposite {
        offset: usize,
        needed: u64,
        available: usize,
    },

    #[error("nesting deeper than {max_depth} at offset {offset}")]
    DepthLimitExceeded { offset: usize, max_depth: usize },

    #[error("trailing bytes after value: consumed {consumed} of {len}")]
    TrailingBytes { consumed: usize, len: usize },
}

impl DecodeError {
    /// Returns the kind of this error.
    pub fn kind(&self) -> ErrorKind {
        match self {
            DecodeError::EmptyInput => ErrorKind::EmptyInput,
            DecodeError::InvalidType { .. } => ErrorKind::InvalidType,
            DecodeError::UnsupportedEncoding { .. } => ErrorKind::UnsupportedEncoding,
            DecodeError::TruncatedHeader { .. } => ErrorKind::TruncatedHeader,
            DecodeError::TruncatedPayload { .. } => ErrorKind::TruncatedPayload,
            DecodeError::MalformedScalar { .. } => ErrorKind::MalformedScalar,
            DecodeError::NumericParseError { .. } => ErrorKind::NumericParseError,
            DecodeError::TextDecodeError { .. } => ErrorKind::TextDecodeError,
            DecodeError::NonTextKey { .. } => ErrorKind::NonTextKey,
            DecodeError::DuplicateKey { .. } => ErrorKind::DuplicateKey,
            DecodeError::TruncatedObject { .. } => ErrorKind::TruncatedObject,
            DecodeError::MalformedComposite { .. } => ErrorKind::MalformedComposite,
            DecodeError::DepthLimitExceeded { .. } => ErrorKind::DepthLimitExceeded,
            DecodeError::TrailingBytes { .. } => ErrorKind::TrailingBytes,
        }
    }

    /// Reclassifies a truncation raised inside a container's payload window.
    ///
    /// The parent window was fully present, so a child that needs more
    /// bytes than the window holds means the container is corrupt rather
    /// than the buffer being short.
    pub(crate) fn within_container(self) -> DecodeError {
        match self {
            DecodeError::TruncatedHeader {
                offset,
                needed,
                available,
            } => DecodeError::MalformedComposite {
                offset,
                needed: needed as u64,
                available,
            },
            DecodeError::TruncatedPayload {
                offset,
                needed,
                available,
            } => DecodeError::MalformedComposite {
                offset,
                needed,
                available,
            },
            other => other,
        }
    }
}
