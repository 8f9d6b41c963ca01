//! # Solstate Codec - Account Layout Decoders
//!
//! Decodes fixed-layout binary account records into the typed snapshots in
//! the `types` crate. Each account kind has a module with a fixed,
//! tightly packed, order-preserving field table and a `pub const LEN` - the
//! required total length, used here to validate input and by external
//! fetchers to pre-filter candidate accounts by raw size.
//!
//! ## Decode policy
//!
//! - Length is validated before any field is read; a short buffer fails
//!   with `LayoutTooShort` and no partial record ever escapes.
//! - Every field access goes through the bounds-checked [`reader::ByteReader`];
//!   nothing reinterprets raw memory or assumes buffer alignment.
//! - Repeated sub-records (reward slots, bitmap words/rows) decode element
//!   `i` at `base + i * stride` with one shared per-element table.
//! - Reserved and padding ranges are skipped, never interpreted, never
//!   round-tripped.
//! - Failures are per-record: one malformed buffer never aborts the decode
//!   of its batch siblings.
//!
//! ## What this crate does NOT contain
//!
//! Account fetching, transaction assembly, and key management are external
//! collaborators. The only cryptographic touchpoint is the
//! [`derive::ProgramAddressSource`] trait seam.

pub mod amm_v4;
pub mod bitmap_extension;
pub mod clmm_pool;
pub mod derive;
pub mod error;
pub mod lookup_table;
pub mod market_v3;
pub mod reader;
pub mod token_account;

pub use derive::{find_market_authority, find_program_address, ProgramAddressSource};
pub use error::{CodecError, CodecResult};
pub use reader::ByteReader;

use serde::Serialize;
use types::{
    AmmPoolState, ClmmPoolState, LookupTableState, MarketState, TickArrayBitmap,
    TokenAccountState,
};

/// Account-kind selector for [`decode`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AccountKind {
    AmmV4,
    MarketV3,
    TokenAccount,
    ClmmPool,
    TickArrayBitmapExtension,
    LookupTable,
}

impl AccountKind {
    /// Required buffer length for this kind, or `None` when the layout has
    /// a variable tail (lookup tables).
    pub fn required_len(&self) -> Option<usize> {
        match self {
            AccountKind::AmmV4 => Some(amm_v4::LEN),
            AccountKind::MarketV3 => Some(market_v3::LEN),
            AccountKind::TokenAccount => Some(token_account::LEN),
            AccountKind::ClmmPool => Some(clmm_pool::LEN),
            AccountKind::TickArrayBitmapExtension => Some(bitmap_extension::LEN),
            AccountKind::LookupTable => None,
        }
    }
}

/// A decoded account of any supported kind.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum DecodedAccount {
    AmmV4(AmmPoolState),
    MarketV3(MarketState),
    TokenAccount(TokenAccountState),
    ClmmPool(ClmmPoolState),
    TickArrayBitmapExtension(TickArrayBitmap),
    LookupTable(LookupTableState),
}

/// Decode a raw account buffer as the selected kind.
pub fn decode(kind: AccountKind, buf: &[u8]) -> CodecResult<DecodedAccount> {
    match kind {
        AccountKind::AmmV4 => amm_v4::decode(buf).map(DecodedAccount::AmmV4),
        AccountKind::MarketV3 => market_v3::decode(buf).map(DecodedAccount::MarketV3),
        AccountKind::TokenAccount => token_account::decode(buf).map(DecodedAccount::TokenAccount),
        AccountKind::ClmmPool => clmm_pool::decode(buf).map(DecodedAccount::ClmmPool),
        AccountKind::TickArrayBitmapExtension => {
            bitmap_extension::decode(buf).map(DecodedAccount::TickArrayBitmapExtension)
        }
        AccountKind::LookupTable => lookup_table::decode(buf).map(DecodedAccount::LookupTable),
    }
}
