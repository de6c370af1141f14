//! Element header parsing.
//!
//! Every element starts with one byte whose low nibble is the element type
//! and whose high nibble selects how the payload size is stored:
//!
//! | selector | payload size | header length |
//! |---|---|---|
//! | 0..=11 | the selector itself | 1 |
//! | 12 | next byte | 2 |
//! | 13 | next 2 bytes, big-endian | 3 |
//! | 14 | next 4 bytes, big-endian | 5 |
//! | 15 | next 8 bytes, big-endian | 9 |

use crate::codec::primitives::{Reader, Section};
use crate::error::DecodeError;
use crate::limits::MAX_INLINE_PAYLOAD_LEN;
use crate::model::ElementType;

/// A parsed element header.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Header {
    /// Element type from the low nibble.
    pub element_type: ElementType,
    /// Declared payload size in bytes.
    pub payload_len: u64,
    /// Bytes occupied by the header itself (1, 2, 3, 5 or 9).
    pub header_len: usize,
}

impl Header {
    /// Parses the header at the start of `input` without touching the payload.
    ///
    /// Fails on reserved and unsupported element types and on a buffer too
    /// short for the size field. Whether the payload is present is not
    /// checked.
    pub fn parse(input: &[u8]) -> Result<Header, DecodeError> {
        read_header(&mut Reader::new(input))
    }

    /// Total encoded length: header plus payload.
    ///
    /// Saturates for headers whose declared size cannot be addressed.
    pub fn total_len(&self) -> u64 {
        (self.header_len as u64).saturating_add(self.payload_len)
    }
}

/// Reads a header from the reader's cursor.
///
/// The element type is checked before any size bytes are read, so reserved
/// and unsupported types are reported even when the size field is cut off.
pub(crate) fn read_header(reader: &mut Reader<'_>) -> Result<Header, DecodeError> {
    let start = reader.position();
    let offset = reader.offset();
    let first = reader.read_byte(Section::Header)?;

    let element_type = ElementType::from_nibble(first);
    if element_type.is_reserved() {
        return Err(DecodeError::InvalidType {
            offset,
            tag: element_type.tag(),
        });
    }
    if !element_type.is_supported() {
        return Err(DecodeError::UnsupportedEncoding {
            offset,
            element_type,
        });
    }

    let selector = first >> 4;
    let payload_len = match selector {
        0..=MAX_INLINE_PAYLOAD_LEN => selector as u64,
        12 => reader.read_byte(Section::Header)? as u64,
        13 => u16::from_be_bytes(reader.read_array(Section::Header)?) as u64,
        14 => u32::from_be_bytes(reader.read_array(Section::Header)?) as u64,
        _ => u64::from_be_bytes(reader.read_array(Section::Header)?),
    };

    Ok(Header {
        element_type,
        payload_len,
        header_len: reader.position() - start,
    })
}
