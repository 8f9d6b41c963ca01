//! Concentrated-liquidity pool state
//!
//! The 1544-byte CLMM pool record plus its two satellite shapes: the three
//! embedded reward slots and the tick-array-presence bitmap extension
//! account. All 128-bit magnitudes (liquidity, sqrt price, fee growth,
//! cumulative swap amounts, X64 emission rates) serialize as decimal text.

use crate::identifiers::AccountId;
use crate::serde_text;
use serde::{Deserialize, Serialize};

/// Rows per side in the extension bitmap matrices.
pub const BITMAP_ROWS: usize = 14;
/// 64-bit words per bitmap row.
pub const BITMAP_COLS: usize = 8;

/// One liquidity-mining reward slot embedded in a CLMM pool
///
/// A pool carries three of these; unused slots have the zero sentinel as
/// their mint. `emissions_per_second_x64` is 64.64 fixed point.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RewardInfo {
    pub reward_state: u8,
    #[serde(with = "serde_text::u64_text")]
    pub open_time: u64,
    #[serde(with = "serde_text::u64_text")]
    pub end_time: u64,
    #[serde(with = "serde_text::u64_text")]
    pub last_update_time: u64,
    #[serde(with = "serde_text::u128_text")]
    pub emissions_per_second_x64: u128,
    #[serde(with = "serde_text::u64_text")]
    pub reward_total_emissioned: u64,
    #[serde(with = "serde_text::u64_text")]
    pub reward_claimed: u64,
    pub token_mint: AccountId,
    pub token_vault: AccountId,
    pub creator: AccountId,
    /// Global growth accumulator, X64 fixed point. See the accrual engine
    /// for the replace-on-update behavior this field carries.
    #[serde(with = "serde_text::u128_text")]
    pub reward_growth_global_x64: u128,
}

impl RewardInfo {
    /// True when this slot has no reward configured.
    pub fn is_unset(&self) -> bool {
        self.token_mint.is_zero()
    }
}

/// Decoded CLMM pool account
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClmmPoolState {
    pub bump: u8,
    pub amm_config: AccountId,
    pub creator: AccountId,
    pub mint_a: AccountId,
    pub mint_b: AccountId,
    pub vault_a: AccountId,
    pub vault_b: AccountId,
    pub observation_id: AccountId,
    pub mint_decimals_a: u8,
    pub mint_decimals_b: u8,
    pub tick_spacing: u16,
    #[serde(with = "serde_text::u128_text")]
    pub liquidity: u128,
    #[serde(with = "serde_text::u128_text")]
    pub sqrt_price_x64: u128,
    pub tick_current: i32,
    pub observation_index: u16,
    pub observation_update_duration: u16,
    #[serde(with = "serde_text::u128_text")]
    pub fee_growth_global_x64_a: u128,
    #[serde(with = "serde_text::u128_text")]
    pub fee_growth_global_x64_b: u128,
    #[serde(with = "serde_text::u64_text")]
    pub protocol_fees_token_a: u64,
    #[serde(with = "serde_text::u64_text")]
    pub protocol_fees_token_b: u64,
    #[serde(with = "serde_text::u128_text")]
    pub swap_in_amount_token_a: u128,
    #[serde(with = "serde_text::u128_text")]
    pub swap_out_amount_token_b: u128,
    #[serde(with = "serde_text::u128_text")]
    pub swap_in_amount_token_b: u128,
    #[serde(with = "serde_text::u128_text")]
    pub swap_out_amount_token_a: u128,
    pub status: u8,
    pub reward_infos: [RewardInfo; 3],
    /// Flat in-pool bitmap: presence of initialized tick arrays around the
    /// current tick, one bit per array.
    #[serde(with = "serde_text::u64_words_text")]
    pub tick_array_bitmap: [u64; 16],
    #[serde(with = "serde_text::u64_text")]
    pub total_fees_token_a: u64,
    #[serde(with = "serde_text::u64_text")]
    pub total_fees_claimed_token_a: u64,
    #[serde(with = "serde_text::u64_text")]
    pub total_fees_token_b: u64,
    #[serde(with = "serde_text::u64_text")]
    pub total_fees_claimed_token_b: u64,
    #[serde(with = "serde_text::u64_text")]
    pub fund_fees_token_a: u64,
    #[serde(with = "serde_text::u64_text")]
    pub fund_fees_token_b: u64,
    #[serde(with = "serde_text::u64_text")]
    pub open_time: u64,
}

/// Tick-array bitmap extension account
///
/// Two 14x8 word matrices recording initialized tick-array segments beyond
/// the in-pool bitmap's range, one matrix per side of the current tick.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TickArrayBitmap {
    pub pool_id: AccountId,
    #[serde(with = "serde_text::u64_matrix_text")]
    pub positive_tick_array_bitmap: [[u64; BITMAP_COLS]; BITMAP_ROWS],
    #[serde(with = "serde_text::u64_matrix_text")]
    pub negative_tick_array_bitmap: [[u64; BITMAP_COLS]; BITMAP_ROWS],
}
