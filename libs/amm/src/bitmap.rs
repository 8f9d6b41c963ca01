//! Lossless textual formatting of tick-array bitmaps
//!
//! Some downstream consumers cannot hold the full unsigned 64-bit range in
//! a native number, so the interchange form carries every bitmap word as
//! decimal text. Formatting is lossless: parsing each word back reproduces
//! the original magnitude exactly.

use serde::Serialize;
use types::{AccountId, TickArrayBitmap};

/// Both bitmap matrices with every word rendered as decimal text
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FormattedBitmap {
    pub pool_id: AccountId,
    pub positive_tick_array_bitmap: Vec<Vec<String>>,
    pub negative_tick_array_bitmap: Vec<Vec<String>>,
}

/// Render a word slice as decimal strings.
pub fn format_words(words: &[u64]) -> Vec<String> {
    words.iter().map(|word| word.to_string()).collect()
}

/// Render both sides of a bitmap extension record.
pub fn format_bitmap(bitmap: &TickArrayBitmap) -> FormattedBitmap {
    FormattedBitmap {
        pool_id: bitmap.pool_id,
        positive_tick_array_bitmap: bitmap
            .positive_tick_array_bitmap
            .iter()
            .map(|row| format_words(row))
            .collect(),
        negative_tick_array_bitmap: bitmap
            .negative_tick_array_bitmap
            .iter()
            .map(|row| format_words(row))
            .collect(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use types::{BITMAP_COLS, BITMAP_ROWS};

    #[test]
    fn every_word_round_trips_exactly() {
        let mut positive = [[0u64; BITMAP_COLS]; BITMAP_ROWS];
        let mut negative = [[0u64; BITMAP_COLS]; BITMAP_ROWS];
        for i in 0..BITMAP_ROWS {
            for j in 0..BITMAP_COLS {
                positive[i][j] = (i as u64) << 32 | j as u64;
                negative[i][j] = u64::MAX - ((i * BITMAP_COLS + j) as u64);
            }
        }
        let bitmap = TickArrayBitmap {
            pool_id: AccountId::new([1; 32]),
            positive_tick_array_bitmap: positive,
            negative_tick_array_bitmap: negative,
        };

        let formatted = format_bitmap(&bitmap);
        assert_eq!(formatted.positive_tick_array_bitmap.len(), BITMAP_ROWS);
        for i in 0..BITMAP_ROWS {
            for j in 0..BITMAP_COLS {
                let p: u64 = formatted.positive_tick_array_bitmap[i][j].parse().unwrap();
                let n: u64 = formatted.negative_tick_array_bitmap[i][j].parse().unwrap();
                assert_eq!(p, positive[i][j]);
                assert_eq!(n, negative[i][j]);
            }
        }
    }

    #[test]
    fn words_above_2_pow_53_stay_exact() {
        let boundary = (1u64 << 53) + 1; // first value a double cannot hold
        let formatted = format_words(&[boundary, u64::MAX]);
        assert_eq!(formatted, vec!["9007199254740993", "18446744073709551615"]);
    }
}
