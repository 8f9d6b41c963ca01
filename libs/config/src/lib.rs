//! # Solstate Configuration - Well-Known Identifiers
//!
//! A process-wide immutable table of the fixed program and system addresses
//! the decoders and derivation helpers care about, selected once per target
//! network at startup and never mutated thereafter.
//!
//! ## Usage
//!
//! ```rust
//! use config::{init, known, Network};
//!
//! init(Network::Mainnet);
//! let amm_program = known().amm_v4_program;
//! ```
//!
//! `init` is idempotent for the same network; the table lives in a
//! `OnceCell` and later calls with a different network are ignored (the
//! first initialization wins, as with any process-wide configuration).

use once_cell::sync::OnceCell;
use types::AccountId;

/// Target network selector.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Network {
    Mainnet,
}

/// Immutable well-known address table for one network
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KnownAddresses {
    pub network: Network,
    /// Constant-product pool program (owns the 752-byte v4 accounts).
    pub amm_v4_program: AccountId,
    /// Concentrated-liquidity pool program (owns the 1544-byte accounts).
    pub clmm_program: AccountId,
    /// Default order-book market program. Each decoded pool carries its own
    /// `market_program_id`, which takes precedence over this entry.
    pub market_program: AccountId,
    /// SPL token program.
    pub token_program: AccountId,
    /// Address lookup table program.
    pub lookup_table_program: AccountId,
    /// System program; doubles as the "unset" sentinel in on-chain records.
    pub system_program: AccountId,
}

/// PDA seed for the constant-product pool authority.
pub const AMM_AUTHORITY_SEED: &[u8] = b"amm authority";
/// PDA seed prefix for the tick-array bitmap extension account; the pool id
/// is appended as the second seed.
pub const BITMAP_EXTENSION_SEED: &[u8] = b"pool_tick_array_bitmap_extension";

static KNOWN: OnceCell<KnownAddresses> = OnceCell::new();

fn must_id(base58: &str) -> AccountId {
    AccountId::from_base58(base58).expect("well-known identifier table is malformed")
}

fn table_for(network: Network) -> KnownAddresses {
    match network {
        Network::Mainnet => KnownAddresses {
            network,
            amm_v4_program: must_id("675kPX9MHTjS2zt1qfr1NYHuzeLXfQM9H24wFSUt1Mp8"),
            clmm_program: must_id("CAMMCzo5YL8w4VFF8KVHrK22GGUsp5VTaW7grrKgrWqK"),
            market_program: must_id("srmqPvymJeFKQ4zGQed1GFppgkRHL9kaELCbyksJtPX"),
            token_program: must_id("TokenkegQfeZyiNwAJbNbGKPFXCWuBvf9Ss623VQ5DA"),
            lookup_table_program: must_id("AddressLookupTab1e1111111111111111111111111"),
            system_program: AccountId::ZERO,
        },
    }
}

/// Populate the process-wide table for `network`. First call wins.
pub fn init(network: Network) -> &'static KnownAddresses {
    KNOWN.get_or_init(|| table_for(network))
}

/// The initialized table.
///
/// # Panics
/// Panics when called before [`init`]; initialize once at startup.
pub fn known() -> &'static KnownAddresses {
    KNOWN
        .get()
        .expect("config::init(network) must run before config::known()")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn mainnet_table_decodes_and_first_init_wins() {
        let first = init(Network::Mainnet);
        assert_eq!(first.network, Network::Mainnet);
        assert_eq!(
            first.token_program.to_string(),
            "TokenkegQfeZyiNwAJbNbGKPFXCWuBvf9Ss623VQ5DA"
        );
        assert_eq!(
            first.market_program.to_string(),
            "srmqPvymJeFKQ4zGQed1GFppgkRHL9kaELCbyksJtPX"
        );
        assert!(first.system_program.is_zero());

        // Same cell on every later call
        let again = init(Network::Mainnet);
        assert_eq!(first, again);
        assert_eq!(known(), first);
    }

    #[test]
    fn seed_constants_match_reference_deployment() {
        assert_eq!(AMM_AUTHORITY_SEED, b"amm authority");
        assert_eq!(
            BITMAP_EXTENSION_SEED,
            b"pool_tick_array_bitmap_extension"
        );
    }
}
