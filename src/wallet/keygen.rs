//! Mnemonic Generation and Root Key Derivation
//!
//! SECURITY: entropy and seed buffers are zeroized on drop.

use bip39::Mnemonic;
use bitcoin::bip32::Xpriv;
use rand::rngs::OsRng;
use rand::RngCore;
use zeroize::Zeroizing;

use crate::error::{CairnError, CairnResult};

/// Entropy drawn for new mnemonics: 256 bits, 24 words.
const MNEMONIC_ENTROPY_BYTES: usize = 32;

/// Generate a fresh BIP39 mnemonic from OS entropy.
pub fn generate_mnemonic() -> CairnResult<String> {
    let mut entropy = Zeroizing::new([0u8; MNEMONIC_ENTROPY_BYTES]);
    OsRng.fill_bytes(entropy.as_mut());

    let mnemonic = Mnemonic::from_entropy(entropy.as_ref())
        .map_err(|e| CairnError::crypto_error(format!("Failed to create mnemonic: {}", e)))?;

    Ok(mnemonic.to_string())
}

/// Derive the BIP32 master node from a mnemonic.
///
/// The seed is stretched with an empty passphrase and dropped as soon as
/// the master key exists. The master's network tag never reaches derived
/// output, so it is fixed to mainnet.
pub fn root_key_from_mnemonic(seed_phrase: &str) -> CairnResult<Xpriv> {
    let mnemonic = Mnemonic::parse(seed_phrase)
        .map_err(|e| CairnError::invalid_mnemonic(format!("Invalid mnemonic: {}", e)))?;

    let seed = Zeroizing::new(mnemonic.to_seed(""));
    let master = Xpriv::new_master(bitcoin::Network::Bitcoin, seed.as_ref())?;
    Ok(master)
}
