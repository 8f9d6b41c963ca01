//! Order-book market state (serum v3 record)

use crate::identifiers::AccountId;
use crate::serde_text;
use serde::{Deserialize, Serialize};

/// Decoded v3 market record
///
/// Lives at a fixed offset inside a larger raw account; the codec skips the
/// unrelated header bytes before applying this field table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MarketState {
    pub own_address: AccountId,
    pub vault_signer_nonce: u64,
    pub base_mint: AccountId,
    pub quote_mint: AccountId,
    pub base_vault: AccountId,
    #[serde(with = "serde_text::u64_text")]
    pub base_deposits_total: u64,
    #[serde(with = "serde_text::u64_text")]
    pub base_fees_accrued: u64,
    pub quote_vault: AccountId,
    #[serde(with = "serde_text::u64_text")]
    pub quote_deposits_total: u64,
    #[serde(with = "serde_text::u64_text")]
    pub quote_fees_accrued: u64,
    #[serde(with = "serde_text::u64_text")]
    pub quote_dust_threshold: u64,
    pub request_queue: AccountId,
    pub event_queue: AccountId,
    pub bids: AccountId,
    pub asks: AccountId,
    #[serde(with = "serde_text::u64_text")]
    pub base_lot_size: u64,
    #[serde(with = "serde_text::u64_text")]
    pub quote_lot_size: u64,
    pub fee_rate_bps: u64,
    #[serde(with = "serde_text::u64_text")]
    pub referrer_rebates_accrued: u64,
}
