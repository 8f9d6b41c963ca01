//! SPL token account decoder
//!
//! Fixed 165-byte record. The delegate, native-balance, and close-authority
//! fields each sit behind a 32-bit option word: a zero word means the field
//! bytes that follow are uninitialized and must not surface in the record.

use crate::error::{CodecError, CodecResult};
use crate::reader::ByteReader;
use types::{AccountId, TokenAccountState};

/// Required total length of a token account.
pub const LEN: usize = 165;

/// Decode a token account record.
pub fn decode(buf: &[u8]) -> CodecResult<TokenAccountState> {
    if buf.len() < LEN {
        return Err(CodecError::layout_too_short("token_account", LEN, buf.len()));
    }
    let r = ByteReader::new(buf);

    let delegate_option = r.u32(72)?;
    let is_native_option = r.u32(109)?;
    let close_authority_option = r.u32(129)?;

    Ok(TokenAccountState {
        mint: r.id32(0)?,
        owner: r.id32(32)?,
        amount: r.u64(64)?,
        delegate: guarded_id(delegate_option, r.id32(76)?),
        state: r.u8(108)?,
        is_native: if is_native_option != 0 {
            Some(r.u64(113)?)
        } else {
            None
        },
        delegated_amount: r.u64(121)?,
        close_authority: guarded_id(close_authority_option, r.id32(133)?),
    })
}

fn guarded_id(option_word: u32, id: AccountId) -> Option<AccountId> {
    if option_word != 0 {
        Some(id)
    } else {
        None
    }
}
