//! Decode-then-derive pipeline: raw CLMM buffers through accrual and
//! bitmap formatting, the way a consumer of this workspace wires it up.

use solstate_amm::{accrue_pool_rewards, format_bitmap};
use types::AccountId;

fn put(buf: &mut [u8], offset: usize, bytes: &[u8]) {
    buf[offset..offset + bytes.len()].copy_from_slice(bytes);
}

/// A CLMM pool buffer with liquidity and one live reward slot.
fn clmm_buffer() -> Vec<u8> {
    let mut buf = vec![0u8; codec::clmm_pool::LEN];
    put(&mut buf, 237, &1_000u128.to_le_bytes()); // liquidity

    let base = 397; // first reward slot
    buf[base] = 2;
    put(&mut buf, base + 1, &1_000u64.to_le_bytes()); // open
    put(&mut buf, base + 9, &2_000u64.to_le_bytes()); // end
    put(&mut buf, base + 17, &1_200u64.to_le_bytes()); // last update
    put(&mut buf, base + 25, &(5u128 << 64).to_le_bytes()); // 5/s X64
    put(&mut buf, base + 57, &[0x0C; 32]); // reward mint
    buf
}

#[test]
fn decoded_pool_accrues_against_external_clock() {
    let pool = codec::clmm_pool::decode(&clmm_buffer()).unwrap();
    assert_eq!(pool.liquidity, 1_000);

    let known = config::init(config::Network::Mainnet);
    let updated = accrue_pool_rewards(&pool.reward_infos, pool.liquidity, 1_500, |_| {
        Some(known.token_program)
    });

    // Slots 1 and 2 are unset; only the live slot survives
    assert_eq!(updated.len(), 1);
    let slot = &updated[0];
    assert_eq!(slot.token_program_id, known.token_program);
    assert_eq!(slot.reward.last_update_time, 1_500);
    assert_eq!(slot.reward.reward_total_emissioned, 300 * 5);
    assert_eq!(
        slot.reward.reward_growth_global_x64,
        (300u128 * (5u128 << 64)) / 1_000
    );

    // Interchange form keeps wide values as text
    let json = serde_json::to_value(slot).unwrap();
    assert_eq!(json["reward_total_emissioned"], "1500");
    assert_eq!(
        json["emissions_per_second_x64"],
        (5u128 << 64).to_string()
    );
}

#[test]
fn decoded_extension_bitmap_formats_losslessly() {
    let mut buf = vec![0u8; codec::bitmap_extension::LEN];
    put(&mut buf, 8, &[0x77; 32]);
    put(&mut buf, 40, &u64::MAX.to_le_bytes()); // positive[0][0]
    put(&mut buf, 936 + 64 + 8, &((1u64 << 53) + 1).to_le_bytes()); // negative[1][1]

    let bitmap = codec::bitmap_extension::decode(&buf).unwrap();
    let formatted = format_bitmap(&bitmap);

    assert_eq!(formatted.pool_id, AccountId::new([0x77; 32]));
    assert_eq!(
        formatted.positive_tick_array_bitmap[0][0],
        "18446744073709551615"
    );
    assert_eq!(formatted.negative_tick_array_bitmap[1][1], "9007199254740993");
    assert_eq!(formatted.negative_tick_array_bitmap[0][0], "0");
}
