//! CLMM pool decoder
//!
//! Fixed 1544-byte record. The first 8 bytes are the account discriminator
//! (skipped); three reward slots decode as repeated sub-records at
//! `REWARDS_BASE + i * REWARD_STRIDE`; the in-pool tick-array bitmap is 16
//! consecutive u64 words. Reserved padding after the open time is never
//! interpreted.

use crate::error::{CodecError, CodecResult};
use crate::reader::ByteReader;
use types::{ClmmPoolState, RewardInfo};

/// Required total length of a CLMM pool account.
pub const LEN: usize = 1544;

/// Byte offset of the first reward slot.
const REWARDS_BASE: usize = 397;
/// Packed size of one reward slot.
const REWARD_STRIDE: usize = 169;
/// Byte offset of the 16-word in-pool bitmap.
const BITMAP_BASE: usize = 904;

/// Decode a CLMM pool record.
pub fn decode(buf: &[u8]) -> CodecResult<ClmmPoolState> {
    if buf.len() < LEN {
        return Err(CodecError::layout_too_short("clmm_pool", LEN, buf.len()));
    }
    let r = ByteReader::new(buf);

    let reward_infos = [
        decode_reward(&r, REWARDS_BASE)?,
        decode_reward(&r, REWARDS_BASE + REWARD_STRIDE)?,
        decode_reward(&r, REWARDS_BASE + 2 * REWARD_STRIDE)?,
    ];

    let mut tick_array_bitmap = [0u64; 16];
    for (i, word) in tick_array_bitmap.iter_mut().enumerate() {
        *word = r.u64(BITMAP_BASE + i * 8)?;
    }

    Ok(ClmmPoolState {
        bump: r.u8(8)?,
        amm_config: r.id32(9)?,
        creator: r.id32(41)?,
        mint_a: r.id32(73)?,
        mint_b: r.id32(105)?,
        vault_a: r.id32(137)?,
        vault_b: r.id32(169)?,
        observation_id: r.id32(201)?,
        mint_decimals_a: r.u8(233)?,
        mint_decimals_b: r.u8(234)?,
        tick_spacing: r.u16(235)?,
        liquidity: r.u128_le(237)?,
        sqrt_price_x64: r.u128_le(253)?,
        tick_current: r.i32(269)?,
        observation_index: r.u16(273)?,
        observation_update_duration: r.u16(275)?,
        fee_growth_global_x64_a: r.u128_le(277)?,
        fee_growth_global_x64_b: r.u128_le(293)?,
        protocol_fees_token_a: r.u64(309)?,
        protocol_fees_token_b: r.u64(317)?,
        swap_in_amount_token_a: r.u128_le(325)?,
        swap_out_amount_token_b: r.u128_le(341)?,
        swap_in_amount_token_b: r.u128_le(357)?,
        swap_out_amount_token_a: r.u128_le(373)?,
        status: r.u8(389)?,
        reward_infos,
        tick_array_bitmap,
        total_fees_token_a: r.u64(1032)?,
        total_fees_claimed_token_a: r.u64(1040)?,
        total_fees_token_b: r.u64(1048)?,
        total_fees_claimed_token_b: r.u64(1056)?,
        fund_fees_token_a: r.u64(1064)?,
        fund_fees_token_b: r.u64(1072)?,
        open_time: r.u64(1080)?,
    })
}

/// Decode one reward slot; the same field table applies at each stride.
fn decode_reward(r: &ByteReader<'_>, base: usize) -> CodecResult<RewardInfo> {
    Ok(RewardInfo {
        reward_state: r.u8(base)?,
        open_time: r.u64(base + 1)?,
        end_time: r.u64(base + 9)?,
        last_update_time: r.u64(base + 17)?,
        emissions_per_second_x64: r.u128_le(base + 25)?,
        reward_total_emissioned: r.u64(base + 41)?,
        reward_claimed: r.u64(base + 49)?,
        token_mint: r.id32(base + 57)?,
        token_vault: r.id32(base + 89)?,
        creator: r.id32(base + 121)?,
        reward_growth_global_x64: r.u128_le(base + 153)?,
    })
}
