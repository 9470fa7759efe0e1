//! Chain-Specific Key Derivation
//!
//! Derives Stacks and Bitcoin child keys from a BIP39 seed phrase and
//! encodes their addresses. Every function here recomputes from the
//! mnemonic; nothing is cached between calls.
//!
//! SECURITY: private key material is zeroized when no longer needed.

use bitcoin::bip32::Xpriv;
use bitcoin::key::{CompressedPublicKey, PublicKey as BitcoinPublicKey};
use bitcoin::secp256k1::{All, Keypair, Secp256k1, SecretKey};
use bitcoin::Address;

use crate::error::{CairnError, CairnResult};
use crate::stacks::stx_address_from_public_key;
use crate::types::{Network, StxKeyChain};
use crate::wallet::derivation_path::{
    get_bitcoin_derivation_path, get_stx_derivation_path, get_taproot_derivation_path, PathString,
};
use crate::wallet::keygen::root_key_from_mnemonic;

/// A derived Stacks account.
pub(crate) struct StxAccount {
    pub child_key: Xpriv,
    pub address: String,
    pub public_key: String,
    pub private_key: String,
}

/// A derived Bitcoin payment account (wrapped segwit).
pub(crate) struct BtcAccount {
    pub address: String,
    pub public_key: String,
}

/// A derived Bitcoin taproot account.
pub(crate) struct TaprootAccount {
    pub address: String,
    /// 32-byte x-only (schnorr) public key, the taproot internal key.
    pub public_key: String,
}

fn derive_child(secp: &Secp256k1<All>, root: &Xpriv, path: &PathString) -> CairnResult<Xpriv> {
    Ok(root.derive_priv(secp, &path.to_derivation_path()?)?)
}

pub(crate) fn derive_stx_account(
    secp: &Secp256k1<All>,
    root: &Xpriv,
    network: Network,
    index: u32,
) -> CairnResult<StxAccount> {
    let path = get_stx_derivation_path(network, index);
    let child = derive_child(secp, root, &path)?;
    let secret_key = child.private_key;
    let public_key = secret_key.public_key(secp);

    let address = stx_address_from_public_key(&public_key, network.stx_version_single_sig())?;

    Ok(StxAccount {
        child_key: child,
        address,
        public_key: hex::encode(public_key.serialize()),
        private_key: hex::encode(secret_key.secret_bytes()),
    })
}

pub(crate) fn derive_btc_account(
    secp: &Secp256k1<All>,
    root: &Xpriv,
    network: Network,
    account: Option<u32>,
    index: u32,
) -> CairnResult<BtcAccount> {
    let path = get_bitcoin_derivation_path(account, index, network);
    let child = derive_child(secp, root, &path)?;
    let secret_key = child.private_key;

    let public_key = BitcoinPublicKey::from(secret_key.public_key(secp));
    let compressed = CompressedPublicKey::try_from(public_key)
        .map_err(|e| CairnError::crypto_error(format!("Key compression failed: {}", e)))?;

    let address = Address::p2shwpkh(&compressed, network.btc_network());

    Ok(BtcAccount {
        address: address.to_string(),
        public_key: hex::encode(compressed.to_bytes()),
    })
}

pub(crate) fn derive_taproot_account(
    secp: &Secp256k1<All>,
    root: &Xpriv,
    network: Network,
    account: Option<u32>,
    index: u32,
) -> CairnResult<TaprootAccount> {
    let path = get_taproot_derivation_path(account, index, network);
    let child = derive_child(secp, root, &path)?;

    let keypair = Keypair::from_secret_key(secp, &child.private_key);
    let (x_only_pubkey, _parity) = keypair.x_only_public_key();

    // Key-path only, no script tree; p2tr applies the internal-key tweak.
    let address = Address::p2tr(secp, x_only_pubkey, None, network.btc_network());

    Ok(TaprootAccount {
        address: address.to_string(),
        public_key: hex::encode(x_only_pubkey.serialize()),
    })
}

fn child_secret_for_path(seed_phrase: &str, path: &PathString) -> CairnResult<SecretKey> {
    let secp = Secp256k1::new();
    let root = root_key_from_mnemonic(seed_phrase)?;
    let child = derive_child(&secp, &root, path)?;
    Ok(child.private_key)
}

/// Recover the wrapped-segwit private key for one account without
/// assembling a full wallet record.
pub async fn get_btc_private_key(
    seed_phrase: &str,
    index: u32,
    network: Network,
) -> CairnResult<String> {
    let path = get_bitcoin_derivation_path(None, index, network);
    let secret_key = child_secret_for_path(seed_phrase, &path)?;
    Ok(hex::encode(secret_key.secret_bytes()))
}

/// Recover the taproot private key for one account.
pub async fn get_btc_taproot_private_key(
    seed_phrase: &str,
    index: u32,
    network: Network,
) -> CairnResult<String> {
    let path = get_taproot_derivation_path(None, index, network);
    let secret_key = child_secret_for_path(seed_phrase, &path)?;
    Ok(hex::encode(secret_key.secret_bytes()))
}

/// Re-derive the Stacks key chain for one account: the BIP32 child node,
/// its c32 address for the given network, and the raw private key hex.
pub async fn get_stx_address_key_chain(
    seed_phrase: &str,
    network: Network,
    account_index: u32,
) -> CairnResult<StxKeyChain> {
    let secp = Secp256k1::new();
    let root = root_key_from_mnemonic(seed_phrase)?;
    let account = derive_stx_account(&secp, &root, network, account_index)?;

    Ok(StxKeyChain {
        child_key: account.child_key,
        address: account.address,
        private_key: account.private_key,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    const TEST_MNEMONIC: &str = "abandon abandon abandon abandon abandon abandon abandon abandon abandon abandon abandon about";

    fn root() -> (Secp256k1<All>, Xpriv) {
        (
            Secp256k1::new(),
            root_key_from_mnemonic(TEST_MNEMONIC).unwrap(),
        )
    }

    #[test]
    fn test_stx_account_mainnet_prefix() {
        let (secp, root) = root();
        let account = derive_stx_account(&secp, &root, Network::Mainnet, 0).unwrap();
        assert!(account.address.starts_with("SP"));
        assert_eq!(account.public_key.len(), 66);
        assert_eq!(account.private_key.len(), 64);
    }

    #[test]
    fn test_stx_account_testnet_prefix() {
        let (secp, root) = root();
        let account = derive_stx_account(&secp, &root, Network::Testnet, 0).unwrap();
        assert!(account.address.starts_with("ST"));
    }

    #[test]
    fn test_btc_account_wrapped_segwit() {
        let (secp, root) = root();
        let mainnet = derive_btc_account(&secp, &root, Network::Mainnet, None, 0).unwrap();
        assert!(mainnet.address.starts_with('3'), "P2SH mainnet starts with 3");
        assert_eq!(mainnet.public_key.len(), 66);

        let testnet = derive_btc_account(&secp, &root, Network::Testnet, None, 0).unwrap();
        assert!(testnet.address.starts_with('2'), "P2SH testnet starts with 2");
    }

    #[test]
    fn test_taproot_account_reference_vector() {
        // BIP86 reference mnemonic, first receiving address
        let (secp, root) = root();
        let account = derive_taproot_account(&secp, &root, Network::Mainnet, None, 0).unwrap();
        assert_eq!(
            account.address,
            "bc1p5cyxnuxmeuwuvkwfem96lqzszd02n6xdcjrs20cac6yqjjwudpxqkedrcr"
        );
        assert_eq!(account.public_key.len(), 64);
    }

    #[test]
    fn test_taproot_account_testnet_prefix() {
        let (secp, root) = root();
        let account = derive_taproot_account(&secp, &root, Network::Testnet, None, 0).unwrap();
        assert!(account.address.starts_with("tb1p"));
    }

    #[tokio::test]
    async fn test_private_key_lookups_are_deterministic() {
        let a = get_btc_private_key(TEST_MNEMONIC, 0, Network::Mainnet)
            .await
            .unwrap();
        let b = get_btc_private_key(TEST_MNEMONIC, 0, Network::Mainnet)
            .await
            .unwrap();
        assert_eq!(a, b);

        let taproot = get_btc_taproot_private_key(TEST_MNEMONIC, 0, Network::Mainnet)
            .await
            .unwrap();
        assert_ne!(a, taproot, "different purposes derive different keys");
    }

    #[tokio::test]
    async fn test_stx_key_chain_matches_account_derivation() {
        let chain = get_stx_address_key_chain(TEST_MNEMONIC, Network::Mainnet, 0)
            .await
            .unwrap();

        let (secp, root) = root();
        let account = derive_stx_account(&secp, &root, Network::Mainnet, 0).unwrap();
        assert_eq!(chain.address, account.address);
        assert_eq!(chain.private_key, account.private_key);
        assert_eq!(chain.child_key, account.child_key);
    }
}
