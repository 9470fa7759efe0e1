//! Wallet Module
//!
//! Handles mnemonic generation, key derivation, wallet assembly, and
//! address validation.

mod derivation;
mod derivation_path;
mod keygen;
mod validation;

pub use derivation::*;
pub use derivation_path::*;
pub use keygen::*;
pub use validation::*;

use bitcoin::secp256k1::Secp256k1;

use crate::error::CairnResult;
use crate::log_debug;
use crate::types::{Network, Wallet};

/// Assemble a complete wallet record for one account index on one network.
///
/// All-or-nothing: any failing sub-derivation aborts the assembly.
pub async fn wallet_from_seed_phrase(
    seed_phrase: &str,
    index: u32,
    network: Network,
) -> CairnResult<Wallet> {
    let secp = Secp256k1::new();
    let root = keygen::root_key_from_mnemonic(seed_phrase)?;
    let master_pub_key = hex::encode(root.private_key.public_key(&secp).serialize());

    let stx = derivation::derive_stx_account(&secp, &root, network, index)?;
    let btc = derivation::derive_btc_account(&secp, &root, network, None, index)?;
    let taproot = derivation::derive_taproot_account(&secp, &root, network, None, index)?;

    log_debug!(
        "wallet",
        "assembled wallet record",
        network = network,
        index = index,
        stx_address = stx.address,
        btc_address = btc.address,
    );

    Ok(Wallet {
        stx_address: stx.address,
        btc_address: btc.address,
        ordinals_address: taproot.address,
        master_pub_key,
        stx_public_key: stx.public_key,
        btc_public_key: btc.public_key,
        ordinals_public_key: taproot.public_key,
        seed_phrase: seed_phrase.to_string(),
    })
}

/// Create a brand new wallet: fresh mnemonic, account 0, mainnet.
pub async fn new_wallet() -> CairnResult<Wallet> {
    let seed_phrase = keygen::generate_mnemonic()?;
    wallet_from_seed_phrase(&seed_phrase, 0, Network::Mainnet).await
}
