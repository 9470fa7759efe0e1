//! Seed Phrase Encryption
//!
//! A coordination shim over caller-supplied capabilities: a password
//! hasher (password -> {salt, hash}) and a symmetric cipher. The shim
//! performs no cryptography itself; callback errors propagate unmodified.
//!
//! Default implementations are provided: Argon2id key derivation and
//! AES-256-GCM with a random nonce prefixed to the ciphertext.

use aes_gcm::{
    aead::{Aead, KeyInit, OsRng},
    Aes256Gcm, Nonce,
};
use rand::RngCore;
use serde::{Deserialize, Serialize};
use zeroize::{Zeroize, ZeroizeOnDrop};

use crate::error::{CairnError, CairnResult};

/// Output of a password-hashing capability: the derived key material and
/// the salt it was computed under.
#[derive(Clone, Zeroize, ZeroizeOnDrop)]
pub struct PasswordDigest {
    /// Hex-encoded salt.
    pub salt: String,
    /// Derived key material, fed to the cipher as-is.
    pub hash: Vec<u8>,
}

/// Password-hashing capability. Must be deterministic for a given
/// password so that decryption can recompute the same key; persist the
/// salt alongside the ciphertext.
#[allow(async_fn_in_trait)]
pub trait PasswordHasher {
    async fn hash_password(&self, password: &str) -> CairnResult<PasswordDigest>;
}

/// Symmetric cipher capability keyed by a password hash.
#[allow(async_fn_in_trait)]
pub trait SeedCipher {
    async fn encrypt(&self, plaintext: &[u8], key: &[u8]) -> CairnResult<Vec<u8>>;
    async fn decrypt(&self, ciphertext: &[u8], key: &[u8]) -> CairnResult<Vec<u8>>;
}

/// Encrypt a seed phrase: hash the password, run the cipher, hex-encode.
pub async fn encrypt_mnemonic_with_callback<H, C>(
    password: &str,
    seed_phrase: &str,
    hasher: &H,
    cipher: &C,
) -> CairnResult<String>
where
    H: PasswordHasher,
    C: SeedCipher,
{
    let digest = hasher.hash_password(password).await?;
    let ciphertext = cipher.encrypt(seed_phrase.as_bytes(), &digest.hash).await?;
    Ok(hex::encode(ciphertext))
}

/// Decrypt a hex-encoded encrypted seed phrase back to the mnemonic.
pub async fn decrypt_mnemonic_with_callback<H, C>(
    password: &str,
    encrypted_seed: &str,
    hasher: &H,
    cipher: &C,
) -> CairnResult<String>
where
    H: PasswordHasher,
    C: SeedCipher,
{
    let digest = hasher.hash_password(password).await?;
    let ciphertext = hex::decode(encrypted_seed)?;
    let plaintext = cipher.decrypt(&ciphertext, &digest.hash).await?;
    String::from_utf8(plaintext)
        .map_err(|e| CairnError::parse_error(format!("Decrypted seed is not UTF-8: {}", e)))
}

// =============================================================================
// Default capability implementations
// =============================================================================

/// Key derivation parameters
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct KdfParams {
    /// Memory cost in KiB
    pub memory_cost: u32,
    /// Time cost (iterations)
    pub time_cost: u32,
    /// Parallelism
    pub parallelism: u32,
}

impl Default for KdfParams {
    fn default() -> Self {
        Self {
            // 64 MiB memory, 3 iterations, 4 parallel lanes
            memory_cost: 65536,
            time_cost: 3,
            parallelism: 4,
        }
    }
}

/// Argon2id password hasher over a caller-persisted salt.
pub struct Argon2idHasher {
    salt: Vec<u8>,
    params: KdfParams,
}

impl Argon2idHasher {
    /// Build over an existing salt (decryption path).
    pub fn new(salt: impl Into<Vec<u8>>) -> Self {
        Self {
            salt: salt.into(),
            params: KdfParams::default(),
        }
    }

    pub fn with_params(salt: impl Into<Vec<u8>>, params: KdfParams) -> Self {
        Self {
            salt: salt.into(),
            params,
        }
    }

    /// Build with a fresh random 32-byte salt (encryption path).
    pub fn generate() -> Self {
        let mut salt = vec![0u8; 32];
        OsRng.fill_bytes(&mut salt);
        Self {
            salt,
            params: KdfParams::default(),
        }
    }

    pub fn salt(&self) -> &[u8] {
        &self.salt
    }
}

impl PasswordHasher for Argon2idHasher {
    async fn hash_password(&self, password: &str) -> CairnResult<PasswordDigest> {
        use argon2::{Algorithm, Argon2, Params, Version};

        let params = Params::new(
            self.params.memory_cost,
            self.params.time_cost,
            self.params.parallelism,
            Some(32),
        )
        .map_err(|e| CairnError::encryption_error(format!("Invalid KDF params: {}", e)))?;

        let argon2 = Argon2::new(Algorithm::Argon2id, Version::V0x13, params);

        let mut key = vec![0u8; 32];
        argon2
            .hash_password_into(password.as_bytes(), &self.salt, &mut key)
            .map_err(|e| CairnError::encryption_error(format!("Key derivation failed: {}", e)))?;

        Ok(PasswordDigest {
            salt: hex::encode(&self.salt),
            hash: key,
        })
    }
}

/// Nonce length for AES-256-GCM.
const NONCE_LEN: usize = 12;

/// AES-256-GCM cipher. Ciphertext layout: 12-byte nonce, then the GCM
/// ciphertext with auth tag.
#[derive(Default)]
pub struct AesGcmCipher;

impl SeedCipher for AesGcmCipher {
    async fn encrypt(&self, plaintext: &[u8], key: &[u8]) -> CairnResult<Vec<u8>> {
        let cipher = Aes256Gcm::new_from_slice(key)
            .map_err(|e| CairnError::encryption_error(format!("Failed to create cipher: {}", e)))?;

        let mut nonce_bytes = [0u8; NONCE_LEN];
        OsRng.fill_bytes(&mut nonce_bytes);
        let nonce = Nonce::from_slice(&nonce_bytes);

        let ciphertext = cipher
            .encrypt(nonce, plaintext)
            .map_err(|e| CairnError::encryption_error(format!("Encryption failed: {}", e)))?;

        let mut out = Vec::with_capacity(NONCE_LEN + ciphertext.len());
        out.extend_from_slice(&nonce_bytes);
        out.extend_from_slice(&ciphertext);
        Ok(out)
    }

    async fn decrypt(&self, ciphertext: &[u8], key: &[u8]) -> CairnResult<Vec<u8>> {
        if ciphertext.len() < NONCE_LEN {
            return Err(CairnError::invalid_input("Ciphertext too short"));
        }
        let (nonce_bytes, body) = ciphertext.split_at(NONCE_LEN);

        let cipher = Aes256Gcm::new_from_slice(key)
            .map_err(|e| CairnError::encryption_error(format!("Failed to create cipher: {}", e)))?;

        let nonce = Nonce::from_slice(nonce_bytes);
        cipher.decrypt(nonce, body).map_err(|_| {
            CairnError::encryption_error("Decryption failed - incorrect password or corrupted data")
        })
    }
}

// =============================================================================
// Convenience wrappers over the defaults
// =============================================================================

/// Encrypted seed envelope produced by [`encrypt_seed_phrase`].
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EncryptedSeed {
    /// Salt used for key derivation (hex)
    pub salt: String,
    /// Nonce-prefixed AES-GCM ciphertext (hex)
    pub ciphertext: String,
    /// Key derivation parameters
    pub kdf_params: KdfParams,
}

/// Encrypt a seed phrase with the default Argon2id + AES-256-GCM pair.
pub async fn encrypt_seed_phrase(password: &str, seed_phrase: &str) -> CairnResult<EncryptedSeed> {
    if password.len() < 8 {
        return Err(CairnError::invalid_input(
            "Password must be at least 8 characters",
        ));
    }

    let hasher = Argon2idHasher::generate();
    let ciphertext =
        encrypt_mnemonic_with_callback(password, seed_phrase, &hasher, &AesGcmCipher).await?;

    Ok(EncryptedSeed {
        salt: hex::encode(hasher.salt()),
        ciphertext,
        kdf_params: KdfParams::default(),
    })
}

/// Decrypt an [`EncryptedSeed`] envelope back to the seed phrase.
pub async fn decrypt_seed_phrase(password: &str, encrypted: &EncryptedSeed) -> CairnResult<String> {
    let salt = hex::decode(&encrypted.salt)?;
    let hasher = Argon2idHasher::with_params(salt, encrypted.kdf_params.clone());
    decrypt_mnemonic_with_callback(password, &encrypted.ciphertext, &hasher, &AesGcmCipher).await
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Fixed-output hasher for exercising the shim without Argon2 cost.
    struct StubHasher;

    impl PasswordHasher for StubHasher {
        async fn hash_password(&self, password: &str) -> CairnResult<PasswordDigest> {
            let mut hash = password.as_bytes().to_vec();
            hash.resize(32, 0x5a);
            Ok(PasswordDigest {
                salt: "00".into(),
                hash,
            })
        }
    }

    /// Reversible XOR transform keyed by the hash.
    struct XorCipher;

    impl SeedCipher for XorCipher {
        async fn encrypt(&self, plaintext: &[u8], key: &[u8]) -> CairnResult<Vec<u8>> {
            Ok(plaintext
                .iter()
                .zip(key.iter().cycle())
                .map(|(p, k)| p ^ k)
                .collect())
        }

        async fn decrypt(&self, ciphertext: &[u8], key: &[u8]) -> CairnResult<Vec<u8>> {
            self.encrypt(ciphertext, key).await
        }
    }

    struct FailingHasher;

    impl PasswordHasher for FailingHasher {
        async fn hash_password(&self, _password: &str) -> CairnResult<PasswordDigest> {
            Err(CairnError::encryption_error("hasher exploded"))
        }
    }

    const PHRASE: &str = "abandon abandon abandon abandon abandon abandon abandon abandon abandon abandon abandon about";

    #[tokio::test]
    async fn test_callback_encrypt_decrypt_inverse() {
        let encrypted = encrypt_mnemonic_with_callback("pw", PHRASE, &StubHasher, &XorCipher)
            .await
            .unwrap();
        assert!(encrypted.chars().all(|c| c.is_ascii_hexdigit()));
        assert_ne!(encrypted, hex::encode(PHRASE));

        let decrypted = decrypt_mnemonic_with_callback("pw", &encrypted, &StubHasher, &XorCipher)
            .await
            .unwrap();
        assert_eq!(decrypted, PHRASE);
    }

    #[tokio::test]
    async fn test_callback_errors_propagate() {
        let result =
            encrypt_mnemonic_with_callback("pw", PHRASE, &FailingHasher, &XorCipher).await;
        assert!(result.is_err());
        assert!(result.unwrap_err().message.contains("hasher exploded"));
    }

    #[tokio::test]
    async fn test_non_hex_ciphertext_rejected() {
        let result =
            decrypt_mnemonic_with_callback("pw", "not hex!", &StubHasher, &XorCipher).await;
        assert!(result.is_err());
    }

    #[tokio::test]
    async fn test_default_pair_roundtrip() {
        let encrypted = encrypt_seed_phrase("correct_password", PHRASE).await.unwrap();
        let decrypted = decrypt_seed_phrase("correct_password", &encrypted)
            .await
            .unwrap();
        assert_eq!(decrypted, PHRASE);
    }

    #[tokio::test]
    async fn test_wrong_password_fails() {
        let encrypted = encrypt_seed_phrase("correct_password", PHRASE).await.unwrap();
        assert!(decrypt_seed_phrase("wrong_password", &encrypted)
            .await
            .is_err());
    }

    #[tokio::test]
    async fn test_short_password_rejected() {
        assert!(encrypt_seed_phrase("short", PHRASE).await.is_err());
    }

    #[tokio::test]
    async fn test_fresh_salts_differ() {
        let a = encrypt_seed_phrase("correct_password", PHRASE).await.unwrap();
        let b = encrypt_seed_phrase("correct_password", PHRASE).await.unwrap();
        assert_ne!(a.salt, b.salt);
        assert_ne!(a.ciphertext, b.ciphertext);
    }
}
