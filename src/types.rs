//! Shared types for Cairn Core
//!
//! All data structures that cross module boundaries are defined here
//! for consistent serialization.

use bitcoin::bip32::Xpriv;
use serde::{Deserialize, Serialize};
use std::fmt;
use zeroize::{Zeroize, ZeroizeOnDrop};

use crate::stacks::address_versions;

// =============================================================================
// Network
// =============================================================================

/// Target network for derivation and address encoding.
///
/// A closed two-valued type: invalid network states are unrepresentable.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Network {
    Mainnet,
    Testnet,
}

impl Network {
    /// The Bitcoin network used for address construction and parsing.
    pub fn btc_network(&self) -> bitcoin::Network {
        match self {
            Network::Mainnet => bitcoin::Network::Bitcoin,
            Network::Testnet => bitcoin::Network::Testnet,
        }
    }

    /// SLIP-0044 coin type for Bitcoin derivation paths.
    pub fn btc_coin_type(&self) -> u32 {
        match self {
            Network::Mainnet => 0,
            Network::Testnet => 1,
        }
    }

    /// Stacks c32 address version byte for single-sig (P2PKH) addresses.
    pub fn stx_version_single_sig(&self) -> u8 {
        match self {
            Network::Mainnet => address_versions::MAINNET_SINGLE_SIG,
            Network::Testnet => address_versions::TESTNET_SINGLE_SIG,
        }
    }

    /// The two Stacks address version bytes (single-sig, multi-sig)
    /// that are valid on this network.
    pub fn stx_versions(&self) -> [u8; 2] {
        match self {
            Network::Mainnet => [
                address_versions::MAINNET_SINGLE_SIG,
                address_versions::MAINNET_MULTI_SIG,
            ],
            Network::Testnet => [
                address_versions::TESTNET_SINGLE_SIG,
                address_versions::TESTNET_MULTI_SIG,
            ],
        }
    }

    pub fn is_testnet(&self) -> bool {
        matches!(self, Network::Testnet)
    }
}

impl fmt::Display for Network {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Network::Mainnet => write!(f, "Mainnet"),
            Network::Testnet => write!(f, "Testnet"),
        }
    }
}

impl std::str::FromStr for Network {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "mainnet" => Ok(Network::Mainnet),
            "testnet" => Ok(Network::Testnet),
            _ => Err(format!("Unknown network: {}", s)),
        }
    }
}

// =============================================================================
// Wallet record
// =============================================================================

/// Complete key and address set derived from one seed phrase at one
/// account index on one network.
///
/// Immutable once assembled; zeroized on drop. The serialized field names
/// are part of the wire contract and must not change.
#[derive(Clone, Serialize, Deserialize, Zeroize, ZeroizeOnDrop)]
#[serde(rename_all = "camelCase")]
pub struct Wallet {
    pub stx_address: String,
    pub btc_address: String,
    pub ordinals_address: String,
    pub master_pub_key: String,
    pub stx_public_key: String,
    pub btc_public_key: String,
    pub ordinals_public_key: String,
    pub seed_phrase: String,
}

impl fmt::Debug for Wallet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Wallet")
            .field("stx_address", &self.stx_address)
            .field("btc_address", &self.btc_address)
            .field("ordinals_address", &self.ordinals_address)
            .field("master_pub_key", &self.master_pub_key)
            .field("stx_public_key", &self.stx_public_key)
            .field("btc_public_key", &self.btc_public_key)
            .field("ordinals_public_key", &self.ordinals_public_key)
            .field("seed_phrase", &"[REDACTED]")
            .finish()
    }
}

// =============================================================================
// Stacks key chain
// =============================================================================

/// Result of a single Stacks account derivation: the BIP32 child node
/// plus its c32 address and raw private key hex.
#[derive(Clone)]
pub struct StxKeyChain {
    pub child_key: Xpriv,
    pub address: String,
    pub private_key: String,
}

impl fmt::Debug for StxKeyChain {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("StxKeyChain")
            .field("child_key", &"[REDACTED]")
            .field("address", &self.address)
            .field("private_key", &"[REDACTED]")
            .finish()
    }
}
