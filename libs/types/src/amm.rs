//! Constant-product pool state (v4 liquidity record)
//!
//! The 752-byte AMM account: configuration scalars, fee rate fractions, PnL
//! and volume bookkeeping, and the twelve identifier fields linking the pool
//! to its vaults, mints, and order-book market. Live reserves are NOT part
//! of this record - they live in the vault token accounts and are supplied
//! to the quoter separately.

use crate::identifiers::AccountId;
use crate::serde_text;
use serde::{Deserialize, Serialize};

/// Decoded v4 constant-product pool account
///
/// Field order matches the on-chain layout; cumulative swap volumes are
/// 128-bit magnitudes and serialize as decimal text.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AmmPoolState {
    #[serde(with = "serde_text::u64_text")]
    pub status: u64,
    pub nonce: u64,
    pub max_order: u64,
    pub depth: u64,
    pub base_decimal: u64,
    pub quote_decimal: u64,
    pub state: u64,
    pub reset_flag: u64,
    #[serde(with = "serde_text::u64_text")]
    pub min_size: u64,
    #[serde(with = "serde_text::u64_text")]
    pub vol_max_cut_ratio: u64,
    #[serde(with = "serde_text::u64_text")]
    pub amount_wave_ratio: u64,
    #[serde(with = "serde_text::u64_text")]
    pub base_lot_size: u64,
    #[serde(with = "serde_text::u64_text")]
    pub quote_lot_size: u64,
    #[serde(with = "serde_text::u64_text")]
    pub min_price_multiplier: u64,
    #[serde(with = "serde_text::u64_text")]
    pub max_price_multiplier: u64,
    #[serde(with = "serde_text::u64_text")]
    pub system_decimal_value: u64,
    pub min_separate_numerator: u64,
    pub min_separate_denominator: u64,
    pub trade_fee_numerator: u64,
    pub trade_fee_denominator: u64,
    pub pnl_numerator: u64,
    pub pnl_denominator: u64,
    pub swap_fee_numerator: u64,
    pub swap_fee_denominator: u64,
    #[serde(with = "serde_text::u64_text")]
    pub base_need_take_pnl: u64,
    #[serde(with = "serde_text::u64_text")]
    pub quote_need_take_pnl: u64,
    #[serde(with = "serde_text::u64_text")]
    pub quote_total_pnl: u64,
    #[serde(with = "serde_text::u64_text")]
    pub base_total_pnl: u64,
    #[serde(with = "serde_text::u64_text")]
    pub pool_open_time: u64,
    #[serde(with = "serde_text::u64_text")]
    pub punish_pc_amount: u64,
    #[serde(with = "serde_text::u64_text")]
    pub punish_coin_amount: u64,
    #[serde(with = "serde_text::u64_text")]
    pub orderbook_to_init_time: u64,
    #[serde(with = "serde_text::u128_text")]
    pub swap_base_in_amount: u128,
    #[serde(with = "serde_text::u128_text")]
    pub swap_quote_out_amount: u128,
    #[serde(with = "serde_text::u64_text")]
    pub swap_base_to_quote_fee: u64,
    #[serde(with = "serde_text::u128_text")]
    pub swap_quote_in_amount: u128,
    #[serde(with = "serde_text::u128_text")]
    pub swap_base_out_amount: u128,
    #[serde(with = "serde_text::u64_text")]
    pub swap_quote_to_base_fee: u64,
    pub base_vault: AccountId,
    pub quote_vault: AccountId,
    pub base_mint: AccountId,
    pub quote_mint: AccountId,
    pub lp_mint: AccountId,
    pub open_orders: AccountId,
    pub market_id: AccountId,
    pub market_program_id: AccountId,
    pub target_orders: AccountId,
    pub withdraw_queue: AccountId,
    pub lp_vault: AccountId,
    pub owner: AccountId,
    #[serde(with = "serde_text::u64_text")]
    pub lp_reserve: u64,
    // Trailing 24 reserved bytes are skipped at decode time and never
    // round-tripped.
}

impl AmmPoolState {
    /// True when `mint` is one of the pool's two trading sides.
    pub fn includes_mint(&self, mint: &AccountId) -> bool {
        self.base_mint == *mint || self.quote_mint == *mint
    }
}
