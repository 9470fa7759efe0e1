//! Address and Mnemonic Validation
//!
//! Pure boolean predicates, safe on untrusted input: every decode or
//! parse failure maps to `false`, nothing here returns an error.

use bip39::Mnemonic;
use bitcoin::Address;
use std::str::FromStr;

use crate::stacks::c32::c32_address_decode;
use crate::types::Network;

/// Check if a mnemonic phrase is valid
pub fn is_valid_mnemonic(phrase: &str) -> bool {
    Mnemonic::parse(phrase).is_ok()
}

/// Validate a Stacks address for a network.
///
/// Accepts iff the address c32check-decodes and its version byte is one
/// of the network's two valid versions (single-sig or multi-sig).
pub fn validate_stx_address(address: &str, network: Network) -> bool {
    match c32_address_decode(address.trim()) {
        Ok((version, _hash160)) => network.stx_versions().contains(&version),
        Err(_) => false,
    }
}

/// Validate a Bitcoin address for a network.
pub fn validate_btc_address(address: &str, network: Network) -> bool {
    match Address::from_str(address.trim()) {
        Ok(parsed) => parsed.require_network(network.btc_network()).is_ok(),
        Err(_) => false,
    }
}
