//! Constant-product swap quoting
//!
//! Exact integer x*y=k math with a proportional fee taken from the input
//! side and a slippage tolerance applied to the output. All divisions
//! truncate (floor); intermediates widen through `U256` so no product can
//! overflow. No rounding beyond floor division, no clamping beyond the
//! natural non-negativity of the inputs.

use ethereum_types::U256;
use serde::Serialize;
use thiserror::Error;
use types::{AccountId, AmmPoolState};

/// Quoting errors - only malformed parameters, never arithmetic faults
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum QuoteError {
    /// Fee fraction is unusable: zero denominator or a fee above 100%
    #[error("invalid fee rate {numerator}/{denominator}")]
    InvalidFee { numerator: u64, denominator: u64 },

    /// Both the input reserve and the post-fee input amount are zero, which
    /// would make the swap denominator zero
    #[error("empty swap: input reserve and post-fee amount are both zero")]
    EmptySwap,
}

/// Proportional fee as an exact fraction
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct FeeRate {
    pub numerator: u64,
    pub denominator: u64,
}

impl FeeRate {
    /// The reference deployment's pool swap fee: 25/10000 (0.25%).
    pub const POOL_SWAP: FeeRate = FeeRate {
        numerator: 25,
        denominator: 10_000,
    };
}

/// Live vault balances supplied by the external fetcher
///
/// Reserves are not part of the decoded pool record; they are a separate
/// snapshot and must come from the same fetch round to quote coherently.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PoolReserves {
    pub base: u128,
    pub quote: u128,
}

/// A computed swap quote
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct SwapQuote {
    #[serde(with = "types::serde_text::u128_text")]
    pub amount_out: u128,
    #[serde(with = "types::serde_text::u128_text")]
    pub min_amount_out: u128,
    /// Advisory: the requested input mint matched neither side of the pool,
    /// and the quote proceeded with the pool's base-as-in orientation.
    pub token_mismatch: bool,
}

/// Raw constant-product quote over explicit reserves.
///
/// ```text
/// fee            = amount_in * fee_n / fee_d
/// after_fee      = amount_in - fee
/// amount_out     = reserve_out * after_fee / (reserve_in + after_fee)
/// min_amount_out = amount_out * 100 / (100 + slippage_percent)
/// ```
pub fn compute_amount_out(
    reserve_in: u128,
    reserve_out: u128,
    amount_in: u128,
    fee: FeeRate,
    slippage_percent: u64,
) -> Result<(u128, u128), QuoteError> {
    if fee.denominator == 0 || fee.numerator > fee.denominator {
        return Err(QuoteError::InvalidFee {
            numerator: fee.numerator,
            denominator: fee.denominator,
        });
    }

    let fee_amount = (U256::from(amount_in) * U256::from(fee.numerator)
        / U256::from(fee.denominator))
    .as_u128();
    let after_fee = amount_in - fee_amount; // fee <= amount_in since numerator <= denominator

    let denominator = U256::from(reserve_in) + U256::from(after_fee);
    if denominator.is_zero() {
        return Err(QuoteError::EmptySwap);
    }
    let amount_out = (U256::from(reserve_out) * U256::from(after_fee) / denominator).as_u128();

    // Divisor is at least 100.
    let min_amount_out = (U256::from(amount_out) * U256::from(100u64)
        / (U256::from(100u64) + U256::from(slippage_percent)))
    .as_u128();

    Ok((amount_out, min_amount_out))
}

/// Quote a swap against a decoded pool and its live reserves.
///
/// The reserve orientation is selected by matching `input_mint` against the
/// pool's recorded mints: the quote mint swaps the pair, the base mint (or
/// an unrecognized mint - the advisory case) keeps base-as-in. A mismatch
/// is surfaced on the quote, not raised as an error.
pub fn quote_swap(
    pool: &AmmPoolState,
    reserves: &PoolReserves,
    input_mint: &AccountId,
    amount_in: u128,
    fee: FeeRate,
    slippage_percent: u64,
) -> Result<SwapQuote, QuoteError> {
    let token_mismatch = !pool.includes_mint(input_mint);
    if token_mismatch {
        tracing::warn!(
            pool_base = %pool.base_mint,
            pool_quote = %pool.quote_mint,
            input = %input_mint,
            "input token matches neither pool mint; quoting base-as-in"
        );
    }

    let (reserve_in, reserve_out) = if *input_mint == pool.quote_mint {
        (reserves.quote, reserves.base)
    } else {
        (reserves.base, reserves.quote)
    };

    let (amount_out, min_amount_out) =
        compute_amount_out(reserve_in, reserve_out, amount_in, fee, slippage_percent)?;

    Ok(SwapQuote {
        amount_out,
        min_amount_out,
        token_mismatch,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reference_case() {
        // reserves 1_000_000 / 2_000_000, 1000 in, 0.25% fee, 1% slippage:
        // fee=2, after_fee=998, out=floor(2_000_000*998/1_000_998)=1994,
        // min=floor(1994*100/101)=1973
        let (out, min_out) =
            compute_amount_out(1_000_000, 2_000_000, 1000, FeeRate::POOL_SWAP, 1).unwrap();
        assert_eq!(out, 1994);
        assert_eq!(min_out, 1973);
    }

    #[test]
    fn zero_input_quotes_zero() {
        let (out, min_out) =
            compute_amount_out(1_000_000, 2_000_000, 0, FeeRate::POOL_SWAP, 1).unwrap();
        assert_eq!(out, 0);
        assert_eq!(min_out, 0);
    }

    #[test]
    fn output_never_reaches_reserve() {
        // Even an absurd input cannot drain the output reserve
        let (out, _) =
            compute_amount_out(1_000, 2_000_000, u64::MAX as u128, FeeRate::POOL_SWAP, 0).unwrap();
        assert!(out < 2_000_000);
    }

    #[test]
    fn wide_inputs_do_not_overflow() {
        let (out, min_out) = compute_amount_out(
            u128::MAX / 2,
            u128::MAX / 2,
            u128::MAX / 2,
            FeeRate::POOL_SWAP,
            100,
        )
        .unwrap();
        assert!(out < u128::MAX / 2);
        assert!(min_out <= out);
    }

    #[test]
    fn zero_fee_denominator_is_rejected() {
        let err = compute_amount_out(
            1,
            1,
            1,
            FeeRate {
                numerator: 0,
                denominator: 0,
            },
            0,
        )
        .unwrap_err();
        assert!(matches!(err, QuoteError::InvalidFee { .. }));
    }

    #[test]
    fn fee_above_one_is_rejected() {
        let err = compute_amount_out(
            1,
            1,
            1,
            FeeRate {
                numerator: 2,
                denominator: 1,
            },
            0,
        )
        .unwrap_err();
        assert!(matches!(err, QuoteError::InvalidFee { .. }));
    }

    #[test]
    fn empty_swap_is_rejected_not_divided() {
        let err = compute_amount_out(0, 5, 0, FeeRate::POOL_SWAP, 0).unwrap_err();
        assert_eq!(err, QuoteError::EmptySwap);
    }
}
