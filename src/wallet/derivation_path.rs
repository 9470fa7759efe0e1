//! Derivation Path Builders
//!
//! Pure string templating of BIP-44/49/84/86 paths for the chains we
//! derive. Paths are returned as an opaque [`PathString`] so raw strings
//! cannot be confused with validated paths elsewhere in the crate.

use bitcoin::bip32::DerivationPath;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::CairnResult;
use crate::types::Network;

/// Standard BIP purposes
pub mod bip_purposes {
    /// Legacy multi-coin template; Stacks keys use this with coin type 5757.
    pub const BIP44: u32 = 44;
    /// SegWit compatible (P2SH-P2WPKH)
    pub const BIP49: u32 = 49;
    /// Native SegWit (P2WPKH)
    pub const BIP84: u32 = 84;
    /// Taproot (P2TR)
    pub const BIP86: u32 = 86;
}

/// Coin types from SLIP-0044
pub mod coin_types {
    pub const BITCOIN: u32 = 0;
    pub const BITCOIN_TESTNET: u32 = 1;
    /// Stacks registers 5757; testnet keeps the same coin type by
    /// convention, the network only selects the address version.
    pub const STACKS: u32 = 5757;
}

/// A formatted derivation path.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PathString(String);

impl PathString {
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Parse into a BIP32 path for derivation. Indices at or above the
    /// hardened boundary are rejected here, not in the builders.
    pub fn to_derivation_path(&self) -> CairnResult<DerivationPath> {
        Ok(DerivationPath::from_str(&self.0)?)
    }
}

impl fmt::Display for PathString {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Stacks account path: `m/44'/5757'/0'/0/{index}`.
pub fn get_stx_derivation_path(_network: Network, index: u32) -> PathString {
    PathString(format!(
        "m/{}'/{}'/0'/0/{}",
        bip_purposes::BIP44,
        coin_types::STACKS,
        index
    ))
}

/// Wrapped-segwit payment path: `m/49'/{coin}'/{account}'/0/{index}`.
pub fn get_bitcoin_derivation_path(
    account: Option<u32>,
    index: u32,
    network: Network,
) -> PathString {
    btc_path(bip_purposes::BIP49, account, index, network)
}

/// Native-segwit path: `m/84'/{coin}'/{account}'/0/{index}`.
pub fn get_segwit_derivation_path(
    account: Option<u32>,
    index: u32,
    network: Network,
) -> PathString {
    btc_path(bip_purposes::BIP84, account, index, network)
}

/// Taproot path: `m/86'/{coin}'/{account}'/0/{index}`.
pub fn get_taproot_derivation_path(
    account: Option<u32>,
    index: u32,
    network: Network,
) -> PathString {
    btc_path(bip_purposes::BIP86, account, index, network)
}

fn btc_path(purpose: u32, account: Option<u32>, index: u32, network: Network) -> PathString {
    PathString(format!(
        "m/{}'/{}'/{}'/0/{}",
        purpose,
        network.btc_coin_type(),
        account.unwrap_or(0),
        index
    ))
}
