//! SPL token account state
//!
//! The fixed 165-byte token account record. The delegate, native-balance,
//! and close-authority fields are each guarded by a 32-bit option word in
//! the layout; they surface here as plain `Option`s.

use crate::identifiers::AccountId;
use crate::serde_text;
use serde::{Deserialize, Serialize};

/// Decoded SPL token account
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TokenAccountState {
    pub mint: AccountId,
    pub owner: AccountId,
    #[serde(with = "serde_text::u64_text")]
    pub amount: u64,
    /// Present only when the layout's delegate option word is set.
    pub delegate: Option<AccountId>,
    pub state: u8,
    /// Rent-exempt reserve for wrapped-native accounts; `None` for ordinary
    /// token accounts.
    #[serde(with = "serde_text::opt_u64_text")]
    pub is_native: Option<u64>,
    #[serde(with = "serde_text::u64_text")]
    pub delegated_amount: u64,
    pub close_authority: Option<AccountId>,
}
