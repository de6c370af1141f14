//! Recursive JSONB decoding.
//!
//! A JSONB buffer is a single element: a header followed by a payload.
//! Arrays and objects hold further elements back to back in their payload,
//! so decoding a container walks its payload window with a nested reader
//! and advances by each child's total length.

use tracing::{debug, trace};

use crate::codec::header::{Header, read_header};
use crate::codec::primitives::{Reader, Section};
use crate::codec::scalar::{decode_float, decode_int, decode_int5, decode_literal, decode_text};
use crate::error::DecodeError;
use crate::limits::MAX_DEPTH;
use crate::model::{ElementType, Object, Value};

/// Options for decoding.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DecodeOptions {
    /// Maximum container nesting depth.
    ///
    /// A top-level array or object is at depth 1. Scalars do not count.
    pub max_depth: usize,

    /// Fail with [`DecodeError::TrailingBytes`] when the top-level value
    /// does not span the whole buffer.
    ///
    /// Off by default: SQLite blobs are often read out of larger pages, and
    /// callers that need exact framing can compare the consumed length
    /// returned by [`decode_one`] themselves.
    pub reject_trailing_bytes: bool,
}

impl Default for DecodeOptions {
    fn default() -> Self {
        Self {
            max_depth: MAX_DEPTH,
            reject_trailing_bytes: false,
        }
    }
}

impl DecodeOptions {
    /// Creates default (lenient) decoding options.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates options that reject trailing bytes.
    pub fn strict() -> Self {
        Self {
            reject_trailing_bytes: true,
            ..Self::default()
        }
    }

    /// Returns these options with a different nesting limit.
    pub fn with_max_depth(self, max_depth: usize) -> Self {
        Self { max_depth, ..self }
    }
}

/// Decodes the value at the head of `input`.
///
/// Bytes after the first complete value are ignored.
pub fn decode(input: &[u8]) -> Result<Value, DecodeError> {
    decode_with_options(input, &DecodeOptions::default())
}

/// Decodes the value at the head of `input` with the given options.
pub fn decode_with_options(input: &[u8], options: &DecodeOptions) -> Result<Value, DecodeError> {
    let (value, consumed) = decode_one_with_options(input, options)?;
    if options.reject_trailing_bytes && consumed != input.len() {
        return Err(DecodeError::TrailingBytes {
            consumed,
            len: input.len(),
        });
    }
    Ok(value)
}

/// Decodes one value and returns it with the number of bytes it occupied.
///
/// The length covers the header and the payload, so `&input[consumed..]`
/// starts at the next sibling encoding, if any.
pub fn decode_one(input: &[u8]) -> Result<(Value, usize), DecodeError> {
    decode_one_with_options(input, &DecodeOptions::default())
}

/// Decodes one value with the given options, returning it with its length.
pub fn decode_one_with_options(
    input: &[u8],
    options: &DecodeOptions,
) -> Result<(Value, usize), DecodeError> {
    if input.is_empty() {
        return Err(DecodeError::EmptyInput);
    }
    let mut reader = Reader::new(input);
    let value = Decoder::new(options).read_value(&mut reader, 0)?;
    let consumed = reader.position();
    debug!(consumed, len = input.len(), kind = value.type_name(), "decoded jsonb value");
    Ok((value, consumed))
}

/// Iterates over values encoded back to back in `input`.
///
/// Decoding stops after the first error, which is yielded once.
pub fn siblings(input: &[u8]) -> Siblings<'_> {
    siblings_with_options(input, &DecodeOptions::default())
}

/// Iterates over back-to-back values with the given options.
pub fn siblings_with_options<'a>(input: &'a [u8], options: &DecodeOptions) -> Siblings<'a> {
    Siblings {
        reader: Reader::new(input),
        options: *options,
        failed: false,
    }
}

/// Iterator returned by [`siblings`].
#[derive(Debug, Clone)]
pub struct Siblings<'a> {
    reader: Reader<'a>,
    options: DecodeOptions,
    failed: bool,
}

impl Siblings<'_> {
    /// Returns the number of bytes consumed by the values yielded so far.
    pub fn consumed(&self) -> usize {
        self.reader.position()
    }
}

impl Iterator for Siblings<'_> {
    type Item = Result<Value, DecodeError>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.failed || self.reader.is_empty() {
            return None;
        }
        let result = Decoder::new(&self.options).read_value(&mut self.reader, 0);
        self.failed = result.is_err();
        Some(result)
    }
}

/// Recursive decoder state: only the options, shared by every level.
struct Decoder<'o> {
    options: &'o DecodeOptions,
}

impl<'o> Decoder<'o> {
    fn new(options: &'o DecodeOptions) -> Self {
        Self { options }
    }

    /// Reads one complete element at the reader's cursor.
    fn read_value(&self, reader: &mut Reader<'_>, depth: usize) -> Result<Value, DecodeError> {
        let header = read_header(reader)?;
        self.read_payload(reader, header, depth)
    }

    /// Reads the payload announced by `header` and interprets it.
    fn read_payload(
        &self,
        reader: &mut Reader<'_>,
        header: Header,
        depth: usize,
    ) -> Result<Value, DecodeError> {
        let offset = reader.offset();
        let payload = reader.read_bytes_u64(header.payload_len, Section::Payload)?;

        match header.element_type {
            ElementType::Null | ElementType::True | ElementType::False => {
                decode_literal(header.element_type, payload, offset)
            }
            ElementType::Int => decode_int(payload, offset),
            ElementType::Int5 => decode_int5(payload, offset),
            ElementType::Float | ElementType::Float5 => {
                decode_float(header.element_type, payload, offset)
            }
            ElementType::Text | ElementType::TextRaw => decode_text(payload, offset).map(Value::Text),
            ElementType::Array => self.decode_array(payload, offset, depth + 1),
            ElementType::Object => self.decode_object(payload, offset, depth + 1),
            // read_header rejects these before the payload is reached.
            ElementType::TextJ | ElementType::Text5 => Err(DecodeError::UnsupportedEncoding {
                offset,
                element_type: header.element_type,
            }),
            ElementType::Reserved13 | ElementType::Reserved14 | ElementType::Reserved15 => {
                Err(DecodeError::InvalidType {
                    offset,
                    tag: header.element_type.tag(),
                })
            }
        }
    }

    fn check_depth(&self, offset: usize, depth: usize) -> Result<(), DecodeError> {
        if depth > self.options.max_depth {
            return Err(DecodeError::DepthLimitExceeded {
                offset,
                max_depth: self.options.max_depth,
            });
        }
        Ok(())
    }

    /// Decodes array elements until the payload window is exhausted.
    fn decode_array(&self, payload: &[u8], offset: usize, depth: usize) -> Result<Value, DecodeError> {
        self.check_depth(offset, depth)?;
        trace!(offset, len = payload.len(), depth, "decoding array");

        let mut children = Reader::with_base(payload, offset);
        let mut items = Vec::new();
        while !children.is_empty() {
            let item = self
                .read_value(&mut children, depth)
                .map_err(DecodeError::within_container)?;
            items.push(item);
        }
        Ok(Value::Array(items))
    }

    /// Decodes alternating key and value elements.
    ///
    /// Keys must be TEXT or TEXTRAW elements. The key's type is checked from
    /// its header, before its payload is read.
    fn decode_object(&self, payload: &[u8], offset: usize, depth: usize) -> Result<Value, DecodeError> {
        self.check_depth(offset, depth)?;
        trace!(offset, len = payload.len(), depth, "decoding object");

        let mut children = Reader::with_base(payload, offset);
        let mut object = Object::new();
        while !children.is_empty() {
            let key_offset = children.offset();
            let header = read_header(&mut children).map_err(DecodeError::within_container)?;
            if !header.element_type.is_text() {
                return Err(DecodeError::NonTextKey {
                    offset: key_offset,
                    element_type: header.element_type,
                });
            }
            let key_bytes = children
                .read_bytes_u64(header.payload_len, Section::Payload)
                .map_err(DecodeError::within_container)?;
            let key = decode_text(key_bytes, key_offset + header.header_len)?;

            if children.is_empty() {
                return Err(DecodeError::TruncatedObject {
                    offset: key_offset,
                    key,
                });
            }

            let value = self
                .read_value(&mut children, depth)
                .map_err(DecodeError::within_container)?;
            if object.contains_key(&key) {
                return Err(DecodeError::DuplicateKey {
                    offset: key_offset,
                    key,
                });
            }
            object.insert(key, value);
        }
        Ok(Value::Object(object))
    }
}
