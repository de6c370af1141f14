//! Bounds-checked byte reading for the JSONB decoder.

use crate::error::DecodeError;

/// Which part of an element a read belongs to.
///
/// Selects the error reported when the buffer runs out.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Section {
    Header,
    Payload,
}

/// Reader for decoding binary data.
///
/// Wraps a byte slice and a cursor. `base` is the absolute offset of the
/// slice's first byte within the top-level buffer, so that nested readers
/// over a container's payload still report absolute offsets.
#[derive(Debug, Clone)]
pub(crate) struct Reader<'a> {
    data: &'a [u8],
    pos: usize,
    base: usize,
}

impl<'a> Reader<'a> {
    /// Creates a new reader from a byte slice.
    pub(crate) fn new(data: &'a [u8]) -> Self {
        Self::with_base(data, 0)
    }

    /// Creates a reader over a sub-slice that starts at absolute offset `base`.
    pub(crate) fn with_base(data: &'a [u8], base: usize) -> Self {
        Self { data, pos: 0, base }
    }

    /// Returns the number of bytes consumed so far.
    pub(crate) fn position(&self) -> usize {
        self.pos
    }

    /// Returns the absolute offset of the cursor.
    pub(crate) fn offset(&self) -> usize {
        self.base + self.pos
    }

    /// Returns the number of remaining bytes.
    pub(crate) fn remaining_len(&self) -> usize {
        self.data.len() - self.pos
    }

    /// Returns true if all data has been consumed.
    pub(crate) fn is_empty(&self) -> bool {
        self.pos >= self.data.len()
    }

    /// Reads a single byte.
    #[inline]
    pub(crate) fn read_byte(&mut self, section: Section) -> Result<u8, DecodeError> {
        let bytes = self.read_bytes(1, section)?;
        Ok(bytes[0])
    }

    /// Reads exactly n bytes.
    #[inline]
    pub(crate) fn read_bytes(&mut self, n: usize, section: Section) -> Result<&'a [u8], DecodeError> {
        let available = self.remaining_len();
        if n > available {
            return Err(self.truncated(n as u64, section));
        }
        let bytes = &self.data[self.pos..self.pos + n];
        self.pos += n;
        Ok(bytes)
    }

    /// Reads exactly `len` bytes where the length came off the wire as a u64.
    pub(crate) fn read_bytes_u64(&mut self, len: u64, section: Section) -> Result<&'a [u8], DecodeError> {
        // A length that does not fit in usize can never be satisfied.
        let n = usize::try_from(len).map_err(|_| self.truncated(len, section))?;
        self.read_bytes(n, section)
    }

    /// Reads a fixed-size big-endian field into an array.
    #[inline]
    pub(crate) fn read_array<const N: usize>(&mut self, section: Section) -> Result<[u8; N], DecodeError> {
        let bytes = self.read_bytes(N, section)?;
        let mut out = [0u8; N];
        out.copy_from_slice(bytes);
        Ok(out)
    }

    fn truncated(&self, needed: u64, section: Section) -> DecodeError {
        let offset = self.offset();
        let available = self.remaining_len();
        match section {
            Section::Header => DecodeError::TruncatedHeader {
                offset,
                // Header fields are at most 8 bytes.
                needed: needed as usize,
                available,
            },
            Section::Payload => DecodeError::TruncatedPayload {
                offset,
                needed,
                available,
            },
        }
    }
}
