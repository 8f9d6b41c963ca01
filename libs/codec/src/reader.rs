//! Bounds-checked field extraction from raw account buffers
//!
//! Every primitive read validates `offset + width` against the buffer length
//! before touching memory and never assumes the buffer's start address is
//! aligned for any scalar width - account data arrives as arbitrary heap
//! bytes. All scalars are little-endian; 128-bit magnitudes are 16 raw
//! little-endian bytes interpreted as an unsigned integer.

use crate::error::{CodecError, CodecResult};
use types::AccountId;

/// Cursor-free reader over a raw account buffer
///
/// Decoders address fields by absolute offset from their layout tables, so
/// the reader is a thin bounds-checking view rather than a streaming cursor.
#[derive(Debug, Clone, Copy)]
pub struct ByteReader<'a> {
    buf: &'a [u8],
}

impl<'a> ByteReader<'a> {
    pub fn new(buf: &'a [u8]) -> Self {
        ByteReader { buf }
    }

    pub fn len(&self) -> usize {
        self.buf.len()
    }

    pub fn is_empty(&self) -> bool {
        self.buf.is_empty()
    }

    /// Borrow `len` bytes at `offset`, or fail without reading anything.
    pub fn bytes(&self, offset: usize, len: usize) -> CodecResult<&'a [u8]> {
        let end = offset
            .checked_add(len)
            .ok_or_else(|| CodecError::out_of_bounds(offset, len, self.buf.len()))?;
        if end > self.buf.len() {
            return Err(CodecError::out_of_bounds(offset, len, self.buf.len()));
        }
        Ok(&self.buf[offset..end])
    }

    pub fn u8(&self, offset: usize) -> CodecResult<u8> {
        Ok(self.bytes(offset, 1)?[0])
    }

    pub fn u16(&self, offset: usize) -> CodecResult<u16> {
        let raw = self.bytes(offset, 2)?;
        Ok(u16::from_le_bytes([raw[0], raw[1]]))
    }

    pub fn u32(&self, offset: usize) -> CodecResult<u32> {
        let raw = self.bytes(offset, 4)?;
        Ok(u32::from_le_bytes([raw[0], raw[1], raw[2], raw[3]]))
    }

    pub fn u64(&self, offset: usize) -> CodecResult<u64> {
        let raw = self.bytes(offset, 8)?;
        let mut le = [0u8; 8];
        le.copy_from_slice(raw);
        Ok(u64::from_le_bytes(le))
    }

    pub fn i32(&self, offset: usize) -> CodecResult<i32> {
        let raw = self.bytes(offset, 4)?;
        Ok(i32::from_le_bytes([raw[0], raw[1], raw[2], raw[3]]))
    }

    /// 16 raw bytes in little-endian order as an unsigned 128-bit magnitude.
    pub fn u128_le(&self, offset: usize) -> CodecResult<u128> {
        let raw = self.bytes(offset, 16)?;
        let mut le = [0u8; 16];
        le.copy_from_slice(raw);
        Ok(u128::from_le_bytes(le))
    }

    /// Raw 32-byte identifier at `offset`.
    pub fn id32(&self, offset: usize) -> CodecResult<AccountId> {
        Ok(AccountId::from_bytes(self.bytes(offset, 32)?))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn little_endian_scalars() {
        let buf = [0x01, 0x02, 0x03, 0x04, 0x05, 0x06, 0x07, 0x08];
        let r = ByteReader::new(&buf);
        assert_eq!(r.u8(0).unwrap(), 0x01);
        assert_eq!(r.u16(0).unwrap(), 0x0201);
        assert_eq!(r.u32(0).unwrap(), 0x04030201);
        assert_eq!(r.u64(0).unwrap(), 0x0807060504030201);
        assert_eq!(r.i32(4).unwrap(), 0x08070605);
    }

    #[test]
    fn negative_i32() {
        let buf = (-443636i32).to_le_bytes();
        let r = ByteReader::new(&buf);
        assert_eq!(r.i32(0).unwrap(), -443636);
    }

    #[test]
    fn u128_magnitude_matches_le_value() {
        // Little-endian byte sequence: value = 1 + 2*2^8 + 255*2^120
        let mut buf = [0u8; 16];
        buf[0] = 1;
        buf[1] = 2;
        buf[15] = 255;
        let r = ByteReader::new(&buf);
        let expected = 1u128 + (2u128 << 8) + (255u128 << 120);
        assert_eq!(r.u128_le(0).unwrap(), expected);
    }

    #[test]
    fn reads_fail_past_buffer_end() {
        let buf = [0u8; 8];
        let r = ByteReader::new(&buf);
        assert!(r.u64(0).is_ok());
        assert_eq!(
            r.u64(1).unwrap_err(),
            CodecError::out_of_bounds(1, 8, 8)
        );
        assert!(r.u128_le(0).is_err());
        assert!(r.id32(0).is_err());
        assert!(r.u8(8).is_err());
    }

    #[test]
    fn offset_overflow_is_out_of_bounds() {
        let buf = [0u8; 8];
        let r = ByteReader::new(&buf);
        assert!(r.bytes(usize::MAX, 2).is_err());
    }
}
