//! Stacks Chain Support
//!
//! Address version bytes and public-key-to-address construction for the
//! Stacks chain. The underlying c32check codec lives in [`c32`].

pub mod c32;

use bitcoin::hashes::{hash160, Hash};
use bitcoin::secp256k1::PublicKey;

use crate::error::CairnResult;

/// Stacks address version bytes.
///
/// One single-sig and one multi-sig version per network; a valid address
/// carries exactly one of these.
pub mod address_versions {
    pub const MAINNET_SINGLE_SIG: u8 = 22; // 'P'
    pub const MAINNET_MULTI_SIG: u8 = 20; // 'M'
    pub const TESTNET_SINGLE_SIG: u8 = 26; // 'T'
    pub const TESTNET_MULTI_SIG: u8 = 21; // 'N'
}

/// Compute the single-sig Stacks address for a compressed public key.
///
/// hash160 over the 33-byte compressed serialization, c32check-encoded
/// under the given version byte.
pub fn stx_address_from_public_key(public_key: &PublicKey, version: u8) -> CairnResult<String> {
    let pubkey_hash = hash160::Hash::hash(&public_key.serialize());
    let address = c32::c32_address(version, pubkey_hash.as_byte_array())?;
    Ok(address)
}
