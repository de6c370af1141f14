//! Minimal JSONB writer for building test fixtures.

use crate::limits::MAX_INLINE_PAYLOAD_LEN;
use crate::model::{ElementType, Value};

/// Width of the size field following the type byte.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum SizeWidth {
    Inline,
    U8,
    U16,
    U32,
    U64,
}

impl SizeWidth {
    /// Returns the smallest width able to hold `len`.
    pub(crate) fn minimal(len: u64) -> SizeWidth {
        if len <= MAX_INLINE_PAYLOAD_LEN as u64 {
            SizeWidth::Inline
        } else if len <= u8::MAX as u64 {
            SizeWidth::U8
        } else if len <= u16::MAX as u64 {
            SizeWidth::U16
        } else if len <= u32::MAX as u64 {
            SizeWidth::U32
        } else {
            SizeWidth::U64
        }
    }
}

/// Writes a header declaring `len` payload bytes using the given size width.
pub(crate) fn header(element_type: ElementType, len: u64, width: SizeWidth) -> Vec<u8> {
    let tag = element_type.tag();
    match width {
        SizeWidth::Inline => vec![((len as u8) << 4) | tag],
        SizeWidth::U8 => vec![0xC0 | tag, len as u8],
        SizeWidth::U16 => {
            let mut out = vec![0xD0 | tag];
            out.extend_from_slice(&(len as u16).to_be_bytes());
            out
        }
        SizeWidth::U32 => {
            let mut out = vec![0xE0 | tag];
            out.extend_from_slice(&(len as u32).to_be_bytes());
            out
        }
        SizeWidth::U64 => {
            let mut out = vec![0xF0 | tag];
            out.extend_from_slice(&len.to_be_bytes());
            out
        }
    }
}

/// Writes a complete element with an explicit size width.
pub(crate) fn element_with_width(element_type: ElementType, payload: &[u8], width: SizeWidth) -> Vec<u8> {
    let mut out = header(element_type, payload.len() as u64, width);
    out.extend_from_slice(payload);
    out
}

/// Writes a complete element using the smallest header.
pub(crate) fn element(element_type: ElementType, payload: &[u8]) -> Vec<u8> {
    element_with_width(element_type, payload, SizeWidth::minimal(payload.len() as u64))
}

pub(crate) fn text(s: &str) -> Vec<u8> {
    element(ElementType::Text, s.as_bytes())
}

pub(crate) fn int(v: i64) -> Vec<u8> {
    element(ElementType::Int, v.to_string().as_bytes())
}

/// Wraps already-encoded children in an array element.
pub(crate) fn array(children: &[Vec<u8>]) -> Vec<u8> {
    element(ElementType::Array, &children.concat())
}

/// Wraps already-encoded key/value pairs in an object element.
pub(crate) fn object(pairs: &[(Vec<u8>, Vec<u8>)]) -> Vec<u8> {
    let mut payload = Vec::new();
    for (key, value) in pairs {
        payload.extend_from_slice(key);
        payload.extend_from_slice(value);
    }
    element(ElementType::Object, &payload)
}

/// Encodes a value tree the way SQLite's canonical writer would.
pub(crate) fn encode(value: &Value) -> Vec<u8> {
    match value {
        Value::Null => element(ElementType::Null, &[]),
        Value::Bool(true) => element(ElementType::True, &[]),
        Value::Bool(false) => element(ElementType::False, &[]),
        Value::Int(v) => int(*v),
        // Debug formatting keeps enough digits to parse back exactly.
        Value::Float(v) => element(ElementType::Float, format!("{v:?}").as_bytes()),
        Value::Text(s) => text(s),
        Value::Array(items) => array(&items.iter().map(encode).collect::<Vec<_>>()),
        Value::Object(object) => {
            let pairs: Vec<_> = object.iter().map(|(k, v)| (text(k), encode(v))).collect();
            self::object(&pairs)
        }
    }
}
