//! Address lookup table decoder
//!
//! Variable-length layout: a fixed 56-byte metadata header, then zero or
//! more 32-byte address entries. The tail must divide evenly into entries;
//! a 56-byte account is a valid empty table.

use crate::error::{CodecError, CodecResult};
use crate::reader::ByteReader;
use types::LookupTableState;

/// Fixed metadata header size.
pub const META_LEN: usize = 56;
/// Size of one address entry.
pub const ENTRY_LEN: usize = 32;

/// Decode a lookup table record; entry count is `(len - 56) / 32`.
pub fn decode(buf: &[u8]) -> CodecResult<LookupTableState> {
    if buf.len() < META_LEN {
        return Err(CodecError::layout_too_short(
            "lookup_table",
            META_LEN,
            buf.len(),
        ));
    }
    let tail = buf.len() - META_LEN;
    if tail % ENTRY_LEN != 0 {
        return Err(CodecError::InvalidTailLength {
            len: buf.len(),
            header: META_LEN,
            entry: ENTRY_LEN,
        });
    }

    let r = ByteReader::new(buf);
    let count = tail / ENTRY_LEN;
    let mut addresses = Vec::with_capacity(count);
    for i in 0..count {
        addresses.push(r.id32(META_LEN + i * ENTRY_LEN)?);
    }

    Ok(LookupTableState { addresses })
}
