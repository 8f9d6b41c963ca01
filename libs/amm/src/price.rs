//! Display-only price derivation from sqrtPriceX64
//!
//! Quoting and accrual never touch floating point; this helper exists only
//! so callers can print a human-readable current price alongside a decoded
//! pool. Do not feed its output back into any value computation.

/// Approximate current price of token A in token B from a pool's
/// sqrtPriceX64, adjusted for the two mints' decimal scales.
pub fn sqrt_price_x64_to_price(sqrt_price_x64: u128, decimals_a: u8, decimals_b: u8) -> f64 {
    let sqrt_price = sqrt_price_x64 as f64 / (1u128 << 64) as f64;
    sqrt_price * sqrt_price * 10f64.powi(decimals_a as i32 - decimals_b as i32)
}
