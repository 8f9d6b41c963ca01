//! # Solstate AMM - Derived Economic Quantities
//!
//! Pure math over decoded pool state: constant-product swap quotes with fee
//! and slippage tolerance, time-weighted liquidity-mining reward accrual for
//! concentrated-liquidity pools, and lossless textual formatting of
//! tick-array bitmaps.
//!
//! All functions here are synchronous, allocation-light, and free of shared
//! mutable state - safe to call concurrently from any number of threads.
//! Arithmetic is exact integer math with truncating (floor) division,
//! widened through `U256` where intermediates can exceed 128 bits. Never
//! floating point on a value path; the one `f64` helper in [`price`] is
//! display-only.

pub mod bitmap;
pub mod price;
pub mod rewards;
pub mod swap;

pub use bitmap::{format_bitmap, format_words, FormattedBitmap};
pub use price::sqrt_price_x64_to_price;
pub use rewards::{accrue, accrue_pool_rewards, PoolRewardInfo};
pub use swap::{compute_amount_out, quote_swap, FeeRate, PoolReserves, QuoteError, SwapQuote};
