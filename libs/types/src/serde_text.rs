//! Decimal-text serde helpers for wide integers
//!
//! JSON consumers routinely hold numbers as IEEE doubles, which lose
//! precision above 2^53. Every field that can exceed that bound - token
//! amounts, timestamps, cumulative counters, bitmap words, 128-bit
//! magnitudes - goes over the wire as a decimal string instead. These
//! modules plug into `#[serde(with = "...")]` attributes on the records.

use serde::{Deserialize, Deserializer, Serializer};

pub mod u64_text {
    use super::*;

    pub fn serialize<S: Serializer>(value: &u64, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(value)
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<u64, D::Error> {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(serde::de::Error::custom)
    }
}

pub mod u128_text {
    use super::*;

    pub fn serialize<S: Serializer>(value: &u128, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(value)
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<u128, D::Error> {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(serde::de::Error::custom)
    }
}

pub mod opt_u64_text {
    use super::*;

    pub fn serialize<S: Serializer>(value: &Option<u64>, serializer: S) -> Result<S::Ok, S::Error> {
        match value {
            Some(v) => serializer.collect_str(v),
            None => serializer.serialize_none(),
        }
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(
        deserializer: D,
    ) -> Result<Option<u64>, D::Error> {
        let s = Option::<String>::deserialize(deserializer)?;
        match s {
            Some(s) => s.parse().map(Some).map_err(serde::de::Error::custom),
            None => Ok(None),
        }
    }
}

/// Flat word arrays (the 16-word in-pool tick-array bitmap)
pub mod u64_words_text {
    use super::*;
    use serde::ser::SerializeSeq;

    pub fn serialize<S: Serializer>(words: &[u64; 16], serializer: S) -> Result<S::Ok, S::Error> {
        let mut seq = serializer.serialize_seq(Some(words.len()))?;
        for word in words {
            seq.serialize_element(&word.to_string())?;
        }
        seq.end()
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<[u64; 16], D::Error> {
        let strings = Vec::<String>::deserialize(deserializer)?;
        if strings.len() != 16 {
            return Err(serde::de::Error::custom(format!(
                "expected 16 bitmap words, got {}",
                strings.len()
            )));
        }
        let mut words = [0u64; 16];
        for (slot, s) in words.iter_mut().zip(&strings) {
            *slot = s.parse().map_err(serde::de::Error::custom)?;
        }
        Ok(words)
    }
}

/// 14x8 word matrices (the extension record's per-side bitmaps)
pub mod u64_matrix_text {
    use super::*;
    use serde::ser::SerializeSeq;

    pub fn serialize<S: Serializer>(
        matrix: &[[u64; 8]; 14],
        serializer: S,
    ) -> Result<S::Ok, S::Error> {
        let mut rows = serializer.serialize_seq(Some(matrix.len()))?;
        for row in matrix {
            let text: Vec<String> = row.iter().map(|w| w.to_string()).collect();
            rows.serialize_element(&text)?;
        }
        rows.end()
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(
        deserializer: D,
    ) -> Result<[[u64; 8]; 14], D::Error> {
        let rows = Vec::<Vec<String>>::deserialize(deserializer)?;
        if rows.len() != 14 {
            return Err(serde::de::Error::custom(format!(
                "expected 14 bitmap rows, got {}",
                rows.len()
            )));
        }
        let mut matrix = [[0u64; 8]; 14];
        for (out_row, in_row) in matrix.iter_mut().zip(&rows) {
            if in_row.len() != 8 {
                return Err(serde::de::Error::custom(format!(
                    "expected 8 bitmap words per row, got {}",
                    in_row.len()
                )));
            }
            for (slot, s) in out_row.iter_mut().zip(in_row) {
                *slot = s.parse().map_err(serde::de::Error::custom)?;
            }
        }
        Ok(matrix)
    }
}

#[cfg(test)]
mod tests {
    use serde::{Deserialize, Serialize};

    #[derive(Serialize, Deserialize, PartialEq, Debug)]
    struct Wide {
        #[serde(with = "super::u64_text")]
        amount: u64,
        #[serde(with = "super::u128_text")]
        magnitude: u128,
        #[serde(with = "super::opt_u64_text")]
        native: Option<u64>,
    }

    #[test]
    fn wide_integers_serialize_as_text() {
        let value = Wide {
            amount: u64::MAX,
            magnitude: u128::MAX,
            native: Some(1 << 60),
        };
        let json = serde_json::to_value(&value).unwrap();
        assert_eq!(json["amount"], "18446744073709551615");
        assert_eq!(json["magnitude"], "340282366920938463463374607431768211455");
        assert_eq!(json["native"], "1152921504606846976");

        let back: Wide = serde_json::from_value(json).unwrap();
        assert_eq!(back, value);
    }

    #[test]
    fn none_stays_null() {
        let value = Wide {
            amount: 0,
            magnitude: 0,
            native: None,
        };
        let json = serde_json::to_value(&value).unwrap();
        assert!(json["native"].is_null());
    }
}
