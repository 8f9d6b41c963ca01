//! 32-byte account identifiers
//!
//! Raw on-chain addresses are opaque 32-byte values. `AccountId` wraps them
//! with base58 display/parse (the chain's canonical text form) and serde
//! support, so decoded records never leak bare `[u8; 32]` arrays through
//! their public surface.

use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Errors from parsing identifier text
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum IdentifierError {
    /// Input is not valid base58
    #[error("invalid base58 identifier: {0}")]
    InvalidBase58(String),

    /// Base58 decoded to the wrong byte length
    #[error("identifier must decode to 32 bytes, got {got}")]
    InvalidLength { got: usize },
}

/// A raw 32-byte on-chain account identifier
///
/// Used for every address-valued field in decoded records: mints, vaults,
/// authorities, markets, queues, programs. Comparison is plain byte
/// equality; no on-curve validation happens here.
#[derive(Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct AccountId([u8; 32]);

impl AccountId {
    /// The system default key (all zeros). On-chain records use it as an
    /// "unset" sentinel, e.g. reward slots with no reward configured.
    pub const ZERO: AccountId = AccountId([0u8; 32]);

    pub const fn new(bytes: [u8; 32]) -> Self {
        AccountId(bytes)
    }

    /// Copy an identifier out of a 32-byte slice.
    ///
    /// # Panics
    /// Panics if `bytes` is not exactly 32 bytes long. Decoders only call
    /// this with bounds-checked slices.
    pub fn from_bytes(bytes: &[u8]) -> Self {
        let mut id = [0u8; 32];
        id.copy_from_slice(bytes);
        AccountId(id)
    }

    pub fn from_base58(s: &str) -> Result<Self, IdentifierError> {
        let decoded = bs58::decode(s)
            .into_vec()
            .map_err(|_| IdentifierError::InvalidBase58(s.to_string()))?;
        if decoded.len() != 32 {
            return Err(IdentifierError::InvalidLength { got: decoded.len() });
        }
        Ok(AccountId::from_bytes(&decoded))
    }

    pub fn as_bytes(&self) -> &[u8; 32] {
        &self.0
    }

    /// True for the all-zero sentinel key.
    pub fn is_zero(&self) -> bool {
        self.0 == [0u8; 32]
    }
}

impl fmt::Display for AccountId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&bs58::encode(self.0).into_string())
    }
}

impl fmt::Debug for AccountId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "AccountId({})", self)
    }
}

impl FromStr for AccountId {
    type Err = IdentifierError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        AccountId::from_base58(s)
    }
}

impl From<[u8; 32]> for AccountId {
    fn from(bytes: [u8; 32]) -> Self {
        AccountId(bytes)
    }
}

impl Serialize for AccountId {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for AccountId {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        AccountId::from_base58(&s).map_err(serde::de::Error::custom)
    }
}
