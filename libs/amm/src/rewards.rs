//! Time-weighted reward accrual for concentrated-liquidity pools
//!
//! Pure functions: accrual never mutates the decoded record, it returns a
//! new one. The emission rate is 64.64 fixed point; a 64-bit time delta
//! times a 128-bit rate needs up to 192 bits, so intermediates widen
//! through `U256`.

use ethereum_types::U256;
use serde::Serialize;
use types::{AccountId, RewardInfo};

/// A reward slot after accrual, enriched with its resolved owning program
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PoolRewardInfo {
    #[serde(flatten)]
    pub reward: RewardInfo,
    pub token_program_id: AccountId,
}

/// Accrue one reward slot up to `chain_time`.
///
/// Identity cases: before the reward window opens (`chain_time <=
/// open_time`) or while the pool holds no liquidity, the input is returned
/// unchanged - the liquidity guard is also what keeps the growth division
/// away from zero.
///
/// Otherwise, with `effective = min(chain_time, end_time)` and
/// `delta = effective - last_update_time` (clamped to zero on clock or data
/// skew; a negative delta must never reach the fixed-point multiply):
///
/// ```text
/// growth  = delta * emissions_per_second_x64 / pool_liquidity
/// emitted = delta * emissions_per_second_x64 / 2^64
/// ```
///
/// `reward_growth_global_x64` is REPLACED by `growth`, not accumulated onto
/// the prior value. That mirrors the reference behavior even though the
/// field name suggests a running total; do not "fix" it here without
/// confirming the intended semantics upstream.
pub fn accrue(reward: &RewardInfo, pool_liquidity: u128, chain_time: u64) -> RewardInfo {
    if chain_time <= reward.open_time || pool_liquidity == 0 {
        return reward.clone();
    }

    let effective = chain_time.min(reward.end_time);
    let delta = if reward.last_update_time > effective {
        tracing::warn!(
            mint = %reward.token_mint,
            last_update = reward.last_update_time,
            effective,
            "reward last update is ahead of chain time; clamping accrual delta to zero"
        );
        0u64
    } else {
        effective - reward.last_update_time
    };

    let scaled = U256::from(delta) * U256::from(reward.emissions_per_second_x64);
    let growth = saturating_u128(scaled / U256::from(pool_liquidity));
    let emitted = saturating_u64(scaled >> 64);

    let mut updated = reward.clone();
    updated.reward_growth_global_x64 = growth;
    updated.reward_total_emissioned = reward.reward_total_emissioned.saturating_add(emitted);
    updated.last_update_time = effective;
    updated
}

/// Accrue a pool's three reward slots, resolving each reward token's owning
/// program through `resolve_program` (an external lookup seam).
///
/// Unset slots (zero-sentinel mint) are skipped. A failed program lookup
/// skips that one slot - it is omitted from the result set rather than
/// aborting the whole pool's update.
pub fn accrue_pool_rewards<F>(
    rewards: &[RewardInfo; 3],
    pool_liquidity: u128,
    chain_time: u64,
    mut resolve_program: F,
) -> Vec<PoolRewardInfo>
where
    F: FnMut(&AccountId) -> Option<AccountId>,
{
    let mut updated = Vec::with_capacity(rewards.len());
    for reward in rewards {
        if reward.is_unset() {
            continue;
        }
        let token_program_id = match resolve_program(&reward.token_mint) {
            Some(program) => program,
            None => {
                tracing::warn!(
                    mint = %reward.token_mint,
                    "owning program lookup failed; skipping reward slot"
                );
                continue;
            }
        };
        updated.push(PoolRewardInfo {
            reward: accrue(reward, pool_liquidity, chain_time),
            token_program_id,
        });
    }
    updated
}

fn saturating_u128(value: U256) -> u128 {
    if value > U256::from(u128::MAX) {
        u128::MAX
    } else {
        value.as_u128()
    }
}

fn saturating_u64(value: U256) -> u64 {
    if value > U256::from(u64::MAX) {
        u64::MAX
    } else {
        value.as_u64()
    }
}
