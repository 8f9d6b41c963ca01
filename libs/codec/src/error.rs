//! Decode errors for account layout processing
//!
//! Each variant carries enough context to diagnose a bad buffer without a
//! debugger: which layout was being decoded, what was required, what was
//! actually there. Failures are always per-record - a batch of accounts
//! keeps processing its remaining members when one buffer is malformed.

use thiserror::Error;

/// Account decoding errors with diagnostic context
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum CodecError {
    /// Buffer is smaller than the layout's required total length
    #[error("{layout} layout too short: need {need} bytes, got {got}")]
    LayoutTooShort {
        layout: &'static str,
        need: usize,
        got: usize,
    },

    /// A field read would run past the end of the buffer
    #[error("read out of bounds: {width} bytes at offset {offset} exceed buffer of {buffer_len}")]
    OutOfBounds {
        offset: usize,
        width: usize,
        buffer_len: usize,
    },

    /// Lookup-table tail is not an exact multiple of the entry size
    #[error(
        "invalid lookup table tail: {len} bytes total, {header}-byte header leaves a remainder \
         not divisible by {entry}"
    )]
    InvalidTailLength {
        len: usize,
        header: usize,
        entry: usize,
    },

    /// Program address derivation ran out of nonce attempts
    #[error("program address derivation exhausted after {attempts} nonce attempts")]
    DerivationExhausted { attempts: u8 },
}

impl CodecError {
    pub fn layout_too_short(layout: &'static str, need: usize, got: usize) -> Self {
        CodecError::LayoutTooShort { layout, need, got }
    }

    pub fn out_of_bounds(offset: usize, width: usize, buffer_len: usize) -> Self {
        CodecError::OutOfBounds {
            offset,
            width,
            buffer_len,
        }
    }
}

/// Result type for codec operations
pub type CodecResult<T> = std::result::Result<T, CodecError>;
