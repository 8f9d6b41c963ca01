//! Tick-array bitmap extension decoder
//!
//! The extension account: 8-byte discriminator, the owning pool id, then two
//! 14x8 matrices of u64 words (positive side first) covering tick-array
//! ranges beyond the in-pool bitmap.

use crate::error::{CodecError, CodecResult};
use crate::reader::ByteReader;
use types::{TickArrayBitmap, BITMAP_COLS, BITMAP_ROWS};

/// Byte offset of the positive-side matrix.
const POSITIVE_BASE: usize = 40;
/// Byte offset of the negative-side matrix.
const NEGATIVE_BASE: usize = 936;
/// Bytes per matrix row (8 words).
const ROW_STRIDE: usize = BITMAP_COLS * 8;

/// Required total length of a bitmap extension account.
pub const LEN: usize = NEGATIVE_BASE + BITMAP_ROWS * ROW_STRIDE;

/// Decode a bitmap extension record.
pub fn decode(buf: &[u8]) -> CodecResult<TickArrayBitmap> {
    if buf.len() < LEN {
        return Err(CodecError::layout_too_short(
            "tick_array_bitmap_extension",
            LEN,
            buf.len(),
        ));
    }
    let r = ByteReader::new(buf);

    Ok(TickArrayBitmap {
        pool_id: r.id32(8)?,
        positive_tick_array_bitmap: decode_matrix(&r, POSITIVE_BASE)?,
        negative_tick_array_bitmap: decode_matrix(&r, NEGATIVE_BASE)?,
    })
}

fn decode_matrix(
    r: &ByteReader<'_>,
    base: usize,
) -> CodecResult<[[u64; BITMAP_COLS]; BITMAP_ROWS]> {
    let mut matrix = [[0u64; BITMAP_COLS]; BITMAP_ROWS];
    for (i, row) in matrix.iter_mut().enumerate() {
        for (j, word) in row.iter_mut().enumerate() {
            *word = r.u64(base + i * ROW_STRIDE + j * 8)?;
        }
    }
    Ok(matrix)
}
