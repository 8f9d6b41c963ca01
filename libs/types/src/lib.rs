//! # Solstate Types - Account State Records
//!
//! Pure data structures for decoded on-chain DEX state. This crate holds no
//! decoding or math logic; the `codec` crate produces these records from raw
//! account buffers and the `solstate-amm` crate consumes them.
//!
//! ## Record semantics
//!
//! Every record is an immutable value snapshot: created once per decode call,
//! owned solely by the caller, never mutated in place. Derived computations
//! (reward accrual) return new records rather than mutating their input.
//! All types are `Send + Sync` by construction - plain owned data, no
//! interior mutability.
//!
//! ## Interchange rule
//!
//! Any integer whose value may exceed 2^53 (token amounts, timestamps,
//! cumulative counters, bitmap words, all 128-bit magnitudes) serializes as
//! decimal text, never as a native JSON number. Downstream consumers that
//! hold numbers as IEEE doubles would otherwise corrupt them. The
//! [`serde_text`] helper modules implement this rule.

pub mod amm;
pub mod clmm;
pub mod identifiers;
pub mod lookup_table;
pub mod market;
pub mod serde_text;
pub mod token_account;

pub use amm::AmmPoolState;
pub use clmm::{ClmmPoolState, RewardInfo, TickArrayBitmap, BITMAP_COLS, BITMAP_ROWS};
pub use identifiers::{AccountId, IdentifierError};
pub use lookup_table::LookupTableState;
pub use market::MarketState;
pub use token_account::TokenAccountState;
