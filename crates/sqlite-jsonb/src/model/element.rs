//! Element types carried in the low nibble of a JSONB header byte.

/// JSONB element type (low 4 bits of the first header byte).
///
/// Every nibble value has a variant, so conversion from the wire is total.
/// Reserved and unsupported types are rejected by the decoder rather than
/// mapped to a fallback.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum ElementType {
    /// JSON `null`. Payload must be empty.
    Null = 0x0,
    /// JSON `true`. Payload must be empty.
    True = 0x1,
    /// JSON `false`. Payload must be empty.
    False = 0x2,
    /// Canonical decimal integer literal.
    Int = 0x3,
    /// JSON5 integer literal, possibly hexadecimal (`0x` prefix).
    Int5 = 0x4,
    /// Canonical floating-point literal.
    Float = 0x5,
    /// JSON5 floating-point literal (`.5`, `5.`, ...).
    Float5 = 0x6,
    /// UTF-8 text with no escapes.
    Text = 0x7,
    /// UTF-8 text containing JSON escapes. Not supported.
    TextJ = 0x8,
    /// UTF-8 text containing JSON5 escapes. Not supported.
    Text5 = 0x9,
    /// Raw UTF-8 text, taken verbatim.
    TextRaw = 0xA,
    /// Array of nested elements.
    Array = 0xB,
    /// Object of alternating key and value elements.
    Object = 0xC,
    Reserved13 = 0xD,
    Reserved14 = 0xE,
    Reserved15 = 0xF,
}

impl ElementType {
    /// Creates an ElementType from the low nibble of a header byte.
    ///
    /// Only the low 4 bits of `nibble` are considered.
    pub fn from_nibble(nibble: u8) -> ElementType {
        match nibble & 0x0F {
            0x0 => ElementType::Null,
            0x1 => ElementType::True,
            0x2 => ElementType::False,
            0x3 => ElementType::Int,
            0x4 => ElementType::Int5,
            0x5 => ElementType::Float,
            0x6 => ElementType::Float5,
            0x7 => ElementType::Text,
            0x8 => ElementType::TextJ,
            0x9 => ElementType::Text5,
            0xA => ElementType::TextRaw,
            0xB => ElementType::Array,
            0xC => ElementType::Object,
            0xD => ElementType::Reserved13,
            0xE => ElementType::Reserved14,
            _ => ElementType::Reserved15,
        }
    }

    /// Returns the wire tag.
    pub fn tag(self) -> u8 {
        self as u8
    }

    /// Returns true for tags 0xD through 0xF.
    pub fn is_reserved(self) -> bool {
        matches!(
            self,
            ElementType::Reserved13 | ElementType::Reserved14 | ElementType::Reserved15
        )
    }

    /// Returns true if the decoder can interpret this element type.
    pub fn is_supported(self) -> bool {
        !self.is_reserved() && !matches!(self, ElementType::TextJ | ElementType::Text5)
    }

    /// Returns true for the element types that decode to a string.
    pub fn is_text(self) -> bool {
        matches!(
            self,
            ElementType::Text | ElementType::TextJ | ElementType::Text5 | ElementType::TextRaw
        )
    }

    /// Returns true for arrays and objects.
    pub fn is_composite(self) -> bool {
        matches!(self, ElementType::Array | ElementType::Object)
    }

    /// Returns the SQLite name of this element type.
    pub fn name(self) -> &'static str {
        match self {
            ElementType::Null => "NULL",
            ElementType::True => "TRUE",
            ElementType::False => "FALSE",
            ElementType::Int => "INT",
            ElementType::Int5 => "INT5",
            ElementType::Float => "FLOAT",
            ElementType::Float5 => "FLOAT5",
            ElementType::Text => "TEXT",
            ElementType::TextJ => "TEXTJ",
            ElementType::Text5 => "TEXT5",
            ElementType::TextRaw => "TEXTRAW",
            ElementType::Array => "ARRAY",
            ElementType::Object => "OBJECT",
            ElementType::Reserved13 => "RESERVED-13",
            ElementType::Reserved14 => "RESERVED-14",
            ElementType::Reserved15 => "RESERVED-15",
        }
    }
}

impl std::fmt::Display for ElementType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_nibble_is_total() {
        for nibble in 0u8..16 {
            assert_eq!(ElementType::from_nibble(nibble).tag(), nibble);
        }
    }

    #[test]
    fn test_from_nibble_ignores_size_bits() {
        assert_eq!(ElementType::from_nibble(0xCB), ElementType::Array);
        assert_eq!(ElementType::from_nibble(0x17), ElementType::Text);
    }

    #[test]
    fn test_support_classes() {
        assert!(ElementType::Reserved13.is_reserved());
        assert!(!ElementType::Reserved15.is_supported());
        assert!(!ElementType::TextJ.is_supported());
        assert!(!ElementType::Text5.is_supported());
        assert!(!ElementType::TextJ.is_reserved());
        assert!(ElementType::TextRaw.is_supported());
        assert!(ElementType::TextRaw.is_text());
        assert!(!ElementType::Int.is_text());
        assert!(ElementType::Object.is_composite());
    }
}
