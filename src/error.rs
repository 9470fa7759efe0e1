//! Unified error types for Cairn Core
//!
//! All fallible operations flow through this module for consistent
//! handling and serialization.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Main error type for all Cairn operations
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CairnError {
    pub code: ErrorCode,
    pub message: String,
    pub details: Option<String>,
}

impl CairnError {
    pub fn new(code: ErrorCode, message: impl Into<String>) -> Self {
        Self {
            code,
            message: message.into(),
            details: None,
        }
    }

    pub fn with_details(mut self, details: impl Into<String>) -> Self {
        self.details = Some(details.into());
        self
    }

    // Convenience constructors

    pub fn invalid_input(msg: impl Into<String>) -> Self {
        Self::new(ErrorCode::InvalidInput, msg)
    }

    pub fn invalid_mnemonic(msg: impl Into<String>) -> Self {
        Self::new(ErrorCode::InvalidMnemonic, msg)
    }

    pub fn crypto_error(msg: impl Into<String>) -> Self {
        Self::new(ErrorCode::CryptoError, msg)
    }

    pub fn encryption_error(msg: impl Into<String>) -> Self {
        Self::new(ErrorCode::EncryptionError, msg)
    }

    pub fn parse_error(msg: impl Into<String>) -> Self {
        Self::new(ErrorCode::ParseError, msg)
    }

    pub fn internal(msg: impl Into<String>) -> Self {
        Self::new(ErrorCode::Internal, msg)
    }
}

impl fmt::Display for CairnError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{:?}] {}", self.code, self.message)?;
        if let Some(ref details) = self.details {
            write!(f, " ({})", details)?;
        }
        Ok(())
    }
}

impl std::error::Error for CairnError {}

/// Error codes for categorization
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ErrorCode {
    // Input errors
    InvalidInput,
    InvalidAddress,
    InvalidMnemonic,
    InvalidDerivationPath,

    // Crypto errors
    CryptoError,
    EncryptionError,

    // Parse errors
    ParseError,
    JsonError,
    HexError,

    // Internal
    Internal,
}

/// Result type alias for Cairn operations
pub type CairnResult<T> = Result<T, CairnError>;

// Conversions from common error types

impl From<serde_json::Error> for CairnError {
    fn from(e: serde_json::Error) -> Self {
        CairnError::new(ErrorCode::JsonError, e.to_string())
    }
}

impl From<hex::FromHexError> for CairnError {
    fn from(e: hex::FromHexError) -> Self {
        CairnError::new(ErrorCode::HexError, e.to_string())
    }
}

impl From<bitcoin::bip32::Error> for CairnError {
    fn from(e: bitcoin::bip32::Error) -> Self {
        CairnError::new(ErrorCode::CryptoError, format!("BIP32 error: {}", e))
    }
}

impl From<bitcoin::secp256k1::Error> for CairnError {
    fn from(e: bitcoin::secp256k1::Error) -> Self {
        CairnError::new(ErrorCode::CryptoError, format!("Secp256k1 error: {}", e))
    }
}

impl From<bip39::Error> for CairnError {
    fn from(e: bip39::Error) -> Self {
        CairnError::new(ErrorCode::InvalidMnemonic, format!("BIP39 error: {}", e))
    }
}

impl From<bitcoin::address::ParseError> for CairnError {
    fn from(e: bitcoin::address::ParseError) -> Self {
        CairnError::new(ErrorCode::InvalidAddress, e.to_string())
    }
}

impl From<crate::stacks::c32::C32Error> for CairnError {
    fn from(e: crate::stacks::c32::C32Error) -> Self {
        CairnError::new(ErrorCode::InvalidAddress, e.to_string())
    }
}
