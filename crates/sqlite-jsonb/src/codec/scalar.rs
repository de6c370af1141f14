//! Payload interpretation for scalar elements.
//!
//! Numbers are stored as ASCII text exactly as they appeared in the JSON
//! source; strings are stored as UTF-8 without escapes.

use crate::error::DecodeError;
use crate::model::{ElementType, Value};

/// Decodes the payload of a NULL, TRUE or FALSE element.
pub(crate) fn decode_literal(
    element_type: ElementType,
    payload: &[u8],
    offset: usize,
) -> Result<Value, DecodeError> {
    if !payload.is_empty() {
        return Err(DecodeError::MalformedScalar {
            offset,
            element_type,
            len: payload.len() as u64,
        });
    }
    Ok(match element_type {
        ElementType::True => Value::Bool(true),
        ElementType::False => Value::Bool(false),
        _ => Value::Null,
    })
}

/// Decodes an INT payload: decimal digits with an optional sign.
pub(crate) fn decode_int(payload: &[u8], offset: usize) -> Result<Value, DecodeError> {
    let literal = ascii_literal(ElementType::Int, payload, offset)?;
    literal
        .parse::<i64>()
        .map(Value::Int)
        .map_err(|_| numeric_error(ElementType::Int, literal, offset))
}

/// Decodes an INT5 payload.
///
/// A payload beginning with `0x` holds hexadecimal digits; anything else is
/// read as a decimal integer.
pub(crate) fn decode_int5(payload: &[u8], offset: usize) -> Result<Value, DecodeError> {
    let literal = ascii_literal(ElementType::Int5, payload, offset)?;
    let parsed = match literal.strip_prefix("0x") {
        Some(digits) => i64::from_str_radix(digits, 16),
        None => literal.parse::<i64>(),
    };
    parsed
        .map(Value::Int)
        .map_err(|_| numeric_error(ElementType::Int5, literal, offset))
}

/// Decodes a FLOAT or FLOAT5 payload.
///
/// JSON5 forms such as `.5` and `5.` are accepted by the float parser
/// directly.
pub(crate) fn decode_float(
    element_type: ElementType,
    payload: &[u8],
    offset: usize,
) -> Result<Value, DecodeError> {
    let literal = ascii_literal(element_type, payload, offset)?;
    literal
        .parse::<f64>()
        .map(Value::Float)
        .map_err(|_| numeric_error(element_type, literal, offset))
}

/// Decodes a TEXT or TEXTRAW payload verbatim.
pub(crate) fn decode_text(payload: &[u8], offset: usize) -> Result<String, DecodeError> {
    // Validate UTF-8 on borrowed slice, then allocate once
    std::str::from_utf8(payload)
        .map(|s| s.to_string())
        .map_err(|e| DecodeError::TextDecodeError {
            offset,
            valid_up_to: e.valid_up_to(),
        })
}

fn ascii_literal(
    element_type: ElementType,
    payload: &[u8],
    offset: usize,
) -> Result<&str, DecodeError> {
    std::str::from_utf8(payload)
        .ok()
        .filter(|s| s.is_ascii())
        .ok_or_else(|| numeric_error(element_type, &String::from_utf8_lossy(payload), offset))
}

fn numeric_error(element_type: ElementType, literal: &str, offset: usize) -> DecodeError {
    DecodeError::NumericParseError {
        offset,
        element_type,
        literal: literal.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ErrorKind;

    fn int(s: &str) -> Result<Value, DecodeError> {
        decode_int(s.as_bytes(), 0)
    }

    fn int5(s: &str) -> Result<Value, DecodeError> {
        decode_int5(s.as_bytes(), 0)
    }

    fn float5(s: &str) -> Result<Value, DecodeError> {
        decode_float(ElementType::Float5, s.as_bytes(), 0)
    }

    #[test]
    fn test_literals() {
        assert_eq!(decode_literal(ElementType::Null, &[], 0).unwrap(), Value::Null);
        assert_eq!(decode_literal(ElementType::True, &[], 0).unwrap(), Value::Bool(true));
        assert_eq!(decode_literal(ElementType::False, &[], 0).unwrap(), Value::Bool(false));
    }

    #[test]
    fn test_literal_with_payload() {
        let err = decode_literal(ElementType::True, b"x", 5).unwrap_err();
        assert_eq!(
            err,
            DecodeError::MalformedScalar {
                offset: 5,
                element_type: ElementType::True,
                len: 1
            }
        );
    }

    #[test]
    fn test_decimal_ints() {
        assert_eq!(int("0").unwrap(), Value::Int(0));
        assert_eq!(int("42").unwrap(), Value::Int(42));
        assert_eq!(int("-17").unwrap(), Value::Int(-17));
        assert_eq!(int("9223372036854775807").unwrap(), Value::Int(i64::MAX));
        assert_eq!(int("-9223372036854775808").unwrap(), Value::Int(i64::MIN));
    }

    #[test]
    fn test_int_overflow() {
        let err = int("9223372036854775808").unwrap_err();
        assert_eq!(
            err,
            DecodeError::NumericParseError {
                offset: 0,
                element_type: ElementType::Int,
                literal: "9223372036854775808".to_string()
            }
        );
    }

    #[test]
    fn test_invalid_ints() {
        for bad in ["", "1.5", "abc", "1e3", " 1"] {
            assert_eq!(int(bad).unwrap_err().kind(), ErrorKind::NumericParseError, "{bad:?}");
        }
    }

    #[test]
    fn test_non_ascii_int() {
        let err = decode_int("１".as_bytes(), 3).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::NumericParseError);
    }

    #[test]
    fn test_hex_int5() {
        assert_eq!(int5("0x1F").unwrap(), Value::Int(31));
        assert_eq!(int5("0xff").unwrap(), Value::Int(255));
        assert_eq!(int5("0x7FFFFFFFFFFFFFFF").unwrap(), Value::Int(i64::MAX));
    }

    #[test]
    fn test_decimal_int5() {
        assert_eq!(int5("+7").unwrap(), Value::Int(7));
        assert_eq!(int5("-12").unwrap(), Value::Int(-12));
    }

    #[test]
    fn test_invalid_int5() {
        for bad in ["0x", "0xZZ", "0X1F", "0xFFFFFFFFFFFFFFFF"] {
            assert_eq!(int5(bad).unwrap_err().kind(), ErrorKind::NumericParseError, "{bad:?}");
        }
    }

    #[test]
    fn test_floats() {
        let float = |s: &str| decode_float(ElementType::Float, s.as_bytes(), 0);
        assert_eq!(float("1.5").unwrap(), Value::Float(1.5));
        assert_eq!(float("-2.5e3").unwrap(), Value::Float(-2500.0));
        assert_eq!(float("1E-2").unwrap(), Value::Float(0.01));
        assert_eq!(float("nope").unwrap_err().kind(), ErrorKind::NumericParseError);
    }

    #[test]
    fn test_json5_floats() {
        assert_eq!(float5(".5").unwrap(), Value::Float(0.5));
        assert_eq!(float5("5.").unwrap(), Value::Float(5.0));
        assert_eq!(float5("+1.25").unwrap(), Value::Float(1.25));
        assert_eq!(float5("").unwrap_err().kind(), ErrorKind::NumericParseError);
    }

    #[test]
    fn test_text_is_verbatim() {
        assert_eq!(decode_text(br#"a\"b"#, 0).unwrap(), r#"a\"b"#);
        assert_eq!(decode_text("héllo".as_bytes(), 0).unwrap(), "héllo");
        assert_eq!(decode_text(b"", 0).unwrap(), "");
    }

    #[test]
    fn test_invalid_utf8() {
        let err = decode_text(&[b'o', b'k', 0xFF], 9).unwrap_err();
        assert_eq!(
            err,
            DecodeError::TextDecodeError {
                offset: 9,
                valid_up_to: 2
            }
        );
    }
}
