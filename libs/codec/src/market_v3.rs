//! v3 order-book market decoder
//!
//! The market record is embedded at a fixed byte offset inside a larger raw
//! account: a 13-byte header of unrelated bytes precedes it, and a few
//! trailing pad bytes follow. All field offsets below are relative to the
//! record; every read still bounds-checks against the outer buffer.

use crate::error::{CodecError, CodecResult};
use crate::reader::ByteReader;
use types::MarketState;

/// Unrelated header bytes preceding the record in the raw account.
pub const HEADER_LEN: usize = 13;
/// Packed span of the record's own fields.
pub const RECORD_LEN: usize = 368;
/// Minimum outer account length required to decode.
pub const LEN: usize = HEADER_LEN + RECORD_LEN;
/// Raw size of a live v3 market account (record plus 7 trailing pad bytes),
/// exported for size pre-filtering.
pub const ACCOUNT_LEN: usize = 388;

/// Decode a v3 market record from the outer account buffer.
pub fn decode(buf: &[u8]) -> CodecResult<MarketState> {
    if buf.len() < LEN {
        return Err(CodecError::layout_too_short("market_v3", LEN, buf.len()));
    }
    let r = ByteReader::new(buf);
    let base = HEADER_LEN;

    Ok(MarketState {
        own_address: r.id32(base)?,
        vault_signer_nonce: r.u64(base + 32)?,
        base_mint: r.id32(base + 40)?,
        quote_mint: r.id32(base + 72)?,
        base_vault: r.id32(base + 104)?,
        base_deposits_total: r.u64(base + 136)?,
        base_fees_accrued: r.u64(base + 144)?,
        quote_vault: r.id32(base + 152)?,
        quote_deposits_total: r.u64(base + 184)?,
        quote_fees_accrued: r.u64(base + 192)?,
        quote_dust_threshold: r.u64(base + 200)?,
        request_queue: r.id32(base + 208)?,
        event_queue: r.id32(base + 240)?,
        bids: r.id32(base + 272)?,
        asks: r.id32(base + 304)?,
        base_lot_size: r.u64(base + 336)?,
        quote_lot_size: r.u64(base + 344)?,
        fee_rate_bps: r.u64(base + 352)?,
        referrer_rebates_accrued: r.u64(base + 360)?,
    })
}
