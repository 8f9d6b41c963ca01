//! Address lookup table state

use crate::identifiers::AccountId;
use serde::{Deserialize, Serialize};

/// Decoded address lookup table
///
/// The on-chain account is a fixed 56-byte metadata header followed by zero
/// or more 32-byte address entries; only the entries are of interest here.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LookupTableState {
    pub addresses: Vec<AccountId>,
}

impl LookupTableState {
    pub fn len(&self) -> usize {
        self.addresses.len()
    }

    pub fn is_empty(&self) -> bool {
        self.addresses.is_empty()
    }
}
