//! v4 constant-product pool decoder
//!
//! Fixed 752-byte record: a block of 32 u64 scalars, the u128 volume
//! counters interleaved with their fee fields, twelve 32-byte identifiers,
//! the LP reserve, and 24 reserved tail bytes. The total length doubles as
//! the pre-filter size for candidate accounts.

use crate::error::{CodecError, CodecResult};
use crate::reader::ByteReader;
use types::AmmPoolState;

/// Required total length of a v4 pool account.
pub const LEN: usize = 752;

/// Decode a v4 pool record from a raw account buffer.
pub fn decode(buf: &[u8]) -> CodecResult<AmmPoolState> {
    if buf.len() < LEN {
        return Err(CodecError::layout_too_short("amm_v4", LEN, buf.len()));
    }
    let r = ByteReader::new(buf);

    Ok(AmmPoolState {
        status: r.u64(0)?,
        nonce: r.u64(8)?,
        max_order: r.u64(16)?,
        depth: r.u64(24)?,
        base_decimal: r.u64(32)?,
        quote_decimal: r.u64(40)?,
        state: r.u64(48)?,
        reset_flag: r.u64(56)?,
        min_size: r.u64(64)?,
        vol_max_cut_ratio: r.u64(72)?,
        amount_wave_ratio: r.u64(80)?,
        base_lot_size: r.u64(88)?,
        quote_lot_size: r.u64(96)?,
        min_price_multiplier: r.u64(104)?,
        max_price_multiplier: r.u64(112)?,
        system_decimal_value: r.u64(120)?,
        min_separate_numerator: r.u64(128)?,
        min_separate_denominator: r.u64(136)?,
        trade_fee_numerator: r.u64(144)?,
        trade_fee_denominator: r.u64(152)?,
        pnl_numerator: r.u64(160)?,
        pnl_denominator: r.u64(168)?,
        swap_fee_numerator: r.u64(176)?,
        swap_fee_denominator: r.u64(184)?,
        base_need_take_pnl: r.u64(192)?,
        quote_need_take_pnl: r.u64(200)?,
        quote_total_pnl: r.u64(208)?,
        base_total_pnl: r.u64(216)?,
        pool_open_time: r.u64(224)?,
        punish_pc_amount: r.u64(232)?,
        punish_coin_amount: r.u64(240)?,
        orderbook_to_init_time: r.u64(248)?,
        swap_base_in_amount: r.u128_le(256)?,
        swap_quote_out_amount: r.u128_le(272)?,
        swap_base_to_quote_fee: r.u64(288)?,
        swap_quote_in_amount: r.u128_le(296)?,
        swap_base_out_amount: r.u128_le(312)?,
        swap_quote_to_base_fee: r.u64(328)?,
        base_vault: r.id32(336)?,
        quote_vault: r.id32(368)?,
        base_mint: r.id32(400)?,
        quote_mint: r.id32(432)?,
        lp_mint: r.id32(464)?,
        open_orders: r.id32(496)?,
        market_id: r.id32(528)?,
        market_program_id: r.id32(560)?,
        target_orders: r.id32(592)?,
        withdraw_queue: r.id32(624)?,
        lp_vault: r.id32(656)?,
        owner: r.id32(688)?,
        lp_reserve: r.u64(720)?,
        // 728..752 reserved
    })
}
