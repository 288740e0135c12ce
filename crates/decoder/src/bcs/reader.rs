// Copyright (C) 2026 Parity Technologies (UK) Ltd.
// SPDX-License-Identifier: GPL-3.0-or-later

//! Bounds-checked cursor over a BCS byte buffer.

use crate::error::DecodeError;
use crate::types::{ADDRESS_LENGTH, Address};

/// A u64 never needs more than 10 ULEB128 bytes.
const MAX_ULEB128_BYTES: usize = 10;

/// Sequential reader over an immutable byte buffer.
///
/// Fields carry no names or tags on the wire, so callers must read them in
/// the exact order they were declared. Every read is bounds-checked and
/// returns [`DecodeError::BufferUnderrun`] instead of panicking.
///
/// ```
/// use agentwave_decoder::bcs::BcsReader;
///
/// let data = [0x04, b'B', b'o', b't', b'1', 0x01];
/// let mut reader = BcsReader::new(&data);
/// assert_eq!(reader.read_string().unwrap(), "Bot1");
/// assert!(reader.read_bool().unwrap());
/// assert_eq!(reader.remaining(), 0);
/// ```
#[derive(Debug, Clone)]
pub struct BcsReader<'a> {
    data: &'a [u8],
    pos: usize,
}

impl<'a> BcsReader<'a> {
    pub fn new(data: &'a [u8]) -> Self {
        Self { data, pos: 0 }
    }

    /// Current byte offset into the buffer.
    pub fn position(&self) -> usize {
        self.pos
    }

    /// Bytes left between the cursor and the end of the buffer.
    pub fn remaining(&self) -> usize {
        self.data.len().saturating_sub(self.pos)
    }

    fn underrun(&self, needed: usize) -> DecodeError {
        DecodeError::BufferUnderrun {
            offset: self.pos,
            needed,
            remaining: self.remaining(),
        }
    }

    /// Takes the next `len` bytes and advances the cursor past them.
    pub fn read_bytes(&mut self, len: usize) -> Result<&'a [u8], DecodeError> {
        if len > self.remaining() {
            return Err(self.underrun(len));
        }
        let bytes = &self.data[self.pos..self.pos + len];
        self.pos += len;
        Ok(bytes)
    }

    fn read_array<const N: usize>(&mut self) -> Result<[u8; N], DecodeError> {
        let mut out = [0u8; N];
        out.copy_from_slice(self.read_bytes(N)?);
        Ok(out)
    }

    /// Decodes an unsigned LEB128 varint (lengths and element counts).
    pub fn read_uleb128(&mut self) -> Result<u64, DecodeError> {
        let start = self.pos;
        let mut value: u64 = 0;

        for index in 0..MAX_ULEB128_BYTES {
            let Some(&byte) = self.data.get(self.pos) else {
                return Err(DecodeError::BufferUnderrun {
                    offset: start,
                    needed: index + 1,
                    remaining: index,
                });
            };
            self.pos += 1;

            let low = u64::from(byte & 0x7f);
            let shift = 7 * index as u32;
            // The tenth byte may only carry the single remaining bit of a u64.
            if index == MAX_ULEB128_BYTES - 1 && low > 1 {
                return Err(DecodeError::MalformedVarint { offset: start });
            }
            value |= low << shift;

            if byte & 0x80 == 0 {
                return Ok(value);
            }
        }

        Err(DecodeError::MalformedVarint { offset: start })
    }

    /// Reads a varint that is about to be used as a byte length or element count.
    pub fn read_length(&mut self) -> Result<usize, DecodeError> {
        let start = self.pos;
        let len = self.read_uleb128()?;
        usize::try_from(len).map_err(|_| DecodeError::MalformedVarint { offset: start })
    }

    pub fn read_u8(&mut self) -> Result<u8, DecodeError> {
        let [byte] = self.read_array::<1>()?;
        Ok(byte)
    }

    /// Little-endian u64, kept as a native integer over the full range.
    pub fn read_u64(&mut self) -> Result<u64, DecodeError> {
        Ok(u64::from_le_bytes(self.read_array::<8>()?))
    }

    /// Any nonzero byte is `true`.
    pub fn read_bool(&mut self) -> Result<bool, DecodeError> {
        Ok(self.read_u8()? != 0)
    }

    /// Length-prefixed UTF-8 string.
    pub fn read_string(&mut self) -> Result<String, DecodeError> {
        let len = self.read_length()?;
        let offset = self.pos;
        let bytes = self.read_bytes(len)?;
        std::str::from_utf8(bytes)
            .map(str::to_owned)
            .map_err(|source| DecodeError::Utf8DecodeError { offset, source })
    }

    /// Fixed 32-byte account or object address, no length prefix.
    pub fn read_address(&mut self) -> Result<Address, DecodeError> {
        Ok(Address::new(self.read_array::<ADDRESS_LENGTH>()?))
    }

    /// Count-prefixed sequence decoded with `element`.
    ///
    /// The first failing element aborts the whole vector.
    pub fn read_vec<T, F>(&mut self, mut element: F) -> Result<Vec<T>, DecodeError>
    where
        F: FnMut(&mut Self) -> Result<T, DecodeError>,
    {
        let count = self.read_length()?;
        // Every element occupies at least one byte, so the remaining length
        // bounds a sane count.
        let mut items = Vec::with_capacity(count.min(self.remaining()));
        for _ in 0..count {
            items.push(element(self)?);
        }
        Ok(items)
    }

    /// One presence byte, followed by the value when nonzero.
    pub fn read_option<T, F>(&mut self, element: F) -> Result<Option<T>, DecodeError>
    where
        F: FnOnce(&mut Self) -> Result<T, DecodeError>,
    {
        if self.read_u8()? == 0 {
            Ok(None)
        } else {
            element(self).map(Some)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_fixtures::to_bcs;

    #[test]
    fn test_uleb128_single_byte() {
        let mut reader = BcsReader::new(&[0x05]);
        assert_eq!(reader.read_uleb128().unwrap(), 5);
        assert_eq!(reader.position(), 1);
    }

    #[test]
    fn test_uleb128_multi_byte() {
        // 300 = 0b1_0010_1100 -> 0xac 0x02
        let mut reader = BcsReader::new(&[0xac, 0x02, 0xff]);
        assert_eq!(reader.read_uleb128().unwrap(), 300);
        assert_eq!(reader.position(), 2);
    }

    #[test]
    fn test_uleb128_u64_max() {
        let mut bytes = vec![0xff; 9];
        bytes.push(0x01);

        let mut reader = BcsReader::new(&bytes);
        assert_eq!(reader.read_uleb128().unwrap(), u64::MAX);
    }

    #[test]
    fn test_uleb128_missing_terminator() {
        let mut reader = BcsReader::new(&[0x80, 0x80]);
        assert!(matches!(
            reader.read_uleb128(),
            Err(DecodeError::BufferUnderrun { offset: 0, .. })
        ));
    }

    #[test]
    fn test_uleb128_too_long() {
        let data = [0xff; 11];
        let mut reader = BcsReader::new(&data);
        assert_eq!(
            reader.read_uleb128(),
            Err(DecodeError::MalformedVarint { offset: 0 })
        );
    }

    #[test]
    fn test_uleb128_overflowing_tenth_byte() {
        let mut data = [0xff; 10];
        data[9] = 0x02;
        let mut reader = BcsReader::new(&data);
        assert_eq!(
            reader.read_uleb128(),
            Err(DecodeError::MalformedVarint { offset: 0 })
        );
    }

    #[test]
    fn test_u64_above_float_precision() {
        let value = (1u64 << 53) + 1;
        let bytes = value.to_le_bytes();
        let mut reader = BcsReader::new(&bytes);
        assert_eq!(reader.read_u64().unwrap(), 9_007_199_254_740_993);
    }

    #[test]
    fn test_u64_max() {
        let bytes = u64::MAX.to_le_bytes();
        let mut reader = BcsReader::new(&bytes);
        assert_eq!(reader.read_u64().unwrap(), u64::MAX);
    }

    #[test]
    fn test_u64_truncated() {
        let mut reader = BcsReader::new(&[1, 2, 3]);
        assert_eq!(
            reader.read_u64(),
            Err(DecodeError::BufferUnderrun {
                offset: 0,
                needed: 8,
                remaining: 3
            })
        );
    }

    #[test]
    fn test_bool_nonzero_is_true() {
        let mut reader = BcsReader::new(&[0x00, 0x01, 0x7f]);
        assert!(!reader.read_bool().unwrap());
        assert!(reader.read_bool().unwrap());
        assert!(reader.read_bool().unwrap());
        assert!(reader.read_bool().is_err());
    }

    #[test]
    fn test_string_length_exceeds_buffer() {
        let data = [10, b'a', b'b', b'c'];
        let mut reader = BcsReader::new(&data);
        assert_eq!(
            reader.read_string(),
            Err(DecodeError::BufferUnderrun {
                offset: 1,
                needed: 10,
                remaining: 3
            })
        );
    }

    #[test]
    fn test_string_invalid_utf8() {
        let data = [2, 0xc3, 0x28];
        let mut reader = BcsReader::new(&data);
        assert!(matches!(
            reader.read_string(),
            Err(DecodeError::Utf8DecodeError { offset: 1, .. })
        ));
    }

    #[test]
    fn test_string_multibyte_utf8() {
        let bytes = to_bcs("héllo ✓");

        let mut reader = BcsReader::new(&bytes);
        assert_eq!(reader.read_string().unwrap(), "héllo ✓");
        assert_eq!(reader.remaining(), 0);
    }

    #[test]
    fn test_address_renders_hex() {
        let mut data = [0u8; 32];
        data[31] = 0xab;
        let mut reader = BcsReader::new(&data);
        let address = reader.read_address().unwrap();
        assert_eq!(address.to_string(), format!("0x{}ab", "00".repeat(31)));
    }

    #[test]
    fn test_address_truncated() {
        let data = [0u8; 31];
        let mut reader = BcsReader::new(&data);
        assert!(matches!(
            reader.read_address(),
            Err(DecodeError::BufferUnderrun { needed: 32, .. })
        ));
    }

    #[test]
    fn test_empty_vector_consumes_one_byte() {
        let data = [0x00, 0xff];
        let mut reader = BcsReader::new(&data);
        let items = reader.read_vec(|r| r.read_string()).unwrap();
        assert!(items.is_empty());
        assert_eq!(reader.position(), 1);
    }

    #[test]
    fn test_vector_preserves_order_and_duplicates() {
        let bytes = to_bcs(&["dev", "design", "dev"][..]);

        let mut reader = BcsReader::new(&bytes);
        let items = reader.read_vec(|r| r.read_string()).unwrap();
        assert_eq!(items, vec!["dev", "design", "dev"]);
    }

    #[test]
    fn test_vector_aborts_on_bad_element() {
        // Claims three strings but the second one is truncated.
        let data = [3, 1, b'a', 5, b'b'];
        let mut reader = BcsReader::new(&data);
        assert!(matches!(
            reader.read_vec(|r| r.read_string()),
            Err(DecodeError::BufferUnderrun { .. })
        ));
    }

    #[test]
    fn test_vector_huge_count_does_not_allocate() {
        // count u32::MAX, no elements
        let bytes = [0xff, 0xff, 0xff, 0xff, 0x0f];

        let mut reader = BcsReader::new(&bytes);
        assert!(matches!(
            reader.read_vec(|r| r.read_u64()),
            Err(DecodeError::BufferUnderrun { .. })
        ));
    }

    #[test]
    fn test_option_absent_and_present() {
        let data = [0x00, 0x01, 0x02, b'h', b'i'];
        let mut reader = BcsReader::new(&data);
        assert_eq!(reader.read_option(|r| r.read_string()).unwrap(), None);
        assert_eq!(
            reader.read_option(|r| r.read_string()).unwrap(),
            Some("hi".to_string())
        );
        assert_eq!(reader.remaining(), 0);
    }

    #[test]
    fn test_option_nonzero_tag_is_present() {
        let data = [0x05, 0x07];
        let mut reader = BcsReader::new(&data);
        assert_eq!(reader.read_option(|r| r.read_u8()).unwrap(), Some(7));
    }
}
