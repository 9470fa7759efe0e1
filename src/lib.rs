//! Cairn Core Library
//!
//! Key-derivation and address core for a Stacks + Bitcoin wallet.
//!
//! # Architecture
//!
//! This crate provides:
//! - **wallet**: mnemonic generation, HD key derivation, wallet assembly,
//!   address validation
//! - **stacks**: Stacks address versions and the c32check codec
//! - **utils**: seed phrase encryption, message hashing, logging
//!
//! Everything derives deterministically from a BIP39 mnemonic: the same
//! (mnemonic, account index, network) inputs always reproduce the same
//! wallet record.
//!
//! # Security
//!
//! This crate uses `zeroize` to clear sensitive data from memory.
//! Seeds, entropy, and derived key material are zeroed when dropped, and
//! `Debug`/log output redacts seed phrases and private keys.
//!
//! # Example
//!
//! ```rust,ignore
//! use cairn_core::{wallet_from_seed_phrase, Network};
//!
//! let wallet = wallet_from_seed_phrase(&phrase, 0, Network::Mainnet).await?;
//! println!("Stacks address: {}", wallet.stx_address);
//! println!("Ordinals address: {}", wallet.ordinals_address);
//! ```

pub mod error;
pub mod stacks;
pub mod types;
pub mod utils;
pub mod wallet;

// Re-export key types for convenience
pub use error::{CairnError, CairnResult, ErrorCode};
pub use types::{Network, StxKeyChain, Wallet};

// Re-export wallet functions
pub use wallet::{
    generate_mnemonic, get_bitcoin_derivation_path, get_btc_private_key,
    get_btc_taproot_private_key, get_segwit_derivation_path, get_stx_address_key_chain,
    get_stx_derivation_path, get_taproot_derivation_path, is_valid_mnemonic, new_wallet,
    validate_btc_address, validate_stx_address, wallet_from_seed_phrase, PathString,
};

// Re-export seed encryption surface
pub use utils::seed_encryption::{
    decrypt_mnemonic_with_callback, decrypt_seed_phrase, encrypt_mnemonic_with_callback,
    encrypt_seed_phrase, AesGcmCipher, Argon2idHasher, EncryptedSeed, KdfParams, PasswordDigest,
    PasswordHasher, SeedCipher,
};

// Re-export message hashing unchanged
pub use utils::crypto::hash_message;
