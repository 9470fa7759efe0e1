//! c32check Encoding
//!
//! The Stacks address text encoding: a Crockford-style base32 alphabet over
//! big-integer digits, with a version byte and a 4-byte double-sha256
//! checksum. No crate in our dependency set provides it, so the codec
//! lives here.

use sha2::{Digest, Sha256};

/// The c32 alphabet. Excludes I, L, O and U to avoid misreading.
pub const C32_ALPHABET: &[u8; 32] = b"0123456789ABCDEFGHJKMNPQRSTVWXYZ";

/// Errors from c32 decoding. Converted to [`crate::CairnError`] at module
/// boundaries; validators map them to `false`.
#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum C32Error {
    #[error("invalid c32 character '{0}'")]
    InvalidCharacter(char),
    #[error("invalid c32 version byte {0}")]
    InvalidVersion(u8),
    #[error("malformed c32 address")]
    InvalidFormat,
    #[error("invalid decoded length {0}")]
    InvalidLength(usize),
    #[error("checksum mismatch")]
    ChecksumMismatch,
}

fn c32_value(ch: u8) -> Result<u8, C32Error> {
    // Normalization per the c32 standard: case-insensitive, O reads as 0,
    // L and I read as 1.
    let ch = match ch.to_ascii_uppercase() {
        b'O' => b'0',
        b'L' | b'I' => b'1',
        other => other,
    };
    C32_ALPHABET
        .iter()
        .position(|&a| a == ch)
        .map(|v| v as u8)
        .ok_or(C32Error::InvalidCharacter(ch as char))
}

/// Encode bytes as a c32 string.
///
/// Big-integer semantics: the minimal digit representation of the value,
/// with one leading `0` character per leading zero byte of the input.
pub fn c32_encode(data: &[u8]) -> String {
    // Collect 5-bit digits least-significant first.
    let mut digits: Vec<u8> = Vec::with_capacity(data.len() * 8 / 5 + 1);
    let mut acc: u32 = 0;
    let mut bits: u32 = 0;
    for &byte in data.iter().rev() {
        acc |= (byte as u32) << bits;
        bits += 8;
        while bits >= 5 {
            digits.push((acc & 0x1f) as u8);
            acc >>= 5;
            bits -= 5;
        }
    }
    if bits > 0 {
        digits.push((acc & 0x1f) as u8);
    }

    // Strip high-order zero digits down to the minimal representation.
    while digits.last() == Some(&0) {
        digits.pop();
    }

    let leading_zero_bytes = data.iter().take_while(|&&b| b == 0).count();
    let mut out = String::with_capacity(leading_zero_bytes + digits.len());
    for _ in 0..leading_zero_bytes {
        out.push('0');
    }
    for &digit in digits.iter().rev() {
        out.push(C32_ALPHABET[digit as usize] as char);
    }
    out
}

/// Decode a c32 string back into bytes. Strict inverse of [`c32_encode`]
/// on canonical encodings.
pub fn c32_decode(input: &str) -> Result<Vec<u8>, C32Error> {
    if !input.is_ascii() {
        return Err(C32Error::InvalidFormat);
    }

    let leading_zero_chars = input
        .bytes()
        .take_while(|&b| matches!(b.to_ascii_uppercase(), b'0' | b'O'))
        .count();

    // Accumulate bytes least-significant first.
    let mut bytes: Vec<u8> = Vec::with_capacity(input.len() * 5 / 8 + 1);
    let mut acc: u32 = 0;
    let mut bits: u32 = 0;
    for ch in input.bytes().rev() {
        let value = c32_value(ch)? as u32;
        acc |= value << bits;
        bits += 5;
        while bits >= 8 {
            bytes.push((acc & 0xff) as u8);
            acc >>= 8;
            bits -= 8;
        }
    }
    if bits > 0 && acc != 0 {
        bytes.push(acc as u8);
    }

    while bytes.last() == Some(&0) {
        bytes.pop();
    }
    for _ in 0..leading_zero_chars {
        bytes.push(0);
    }
    bytes.reverse();
    Ok(bytes)
}

fn c32_checksum(version: u8, payload: &[u8]) -> [u8; 4] {
    let mut buf = Vec::with_capacity(1 + payload.len());
    buf.push(version);
    buf.extend_from_slice(payload);
    let digest = Sha256::digest(Sha256::digest(&buf));
    [digest[0], digest[1], digest[2], digest[3]]
}

/// Build a Stacks address from a version byte and a hash160.
pub fn c32_address(version: u8, hash160: &[u8; 20]) -> Result<String, C32Error> {
    if version >= 32 {
        return Err(C32Error::InvalidVersion(version));
    }
    let checksum = c32_checksum(version, hash160);
    let mut payload = Vec::with_capacity(24);
    payload.extend_from_slice(hash160);
    payload.extend_from_slice(&checksum);
    Ok(format!(
        "S{}{}",
        C32_ALPHABET[version as usize] as char,
        c32_encode(&payload)
    ))
}

/// Decode a Stacks address into its version byte and hash160, verifying
/// the checksum.
pub fn c32_address_decode(address: &str) -> Result<(u8, [u8; 20]), C32Error> {
    if !address.is_ascii() || address.len() <= 5 || !address.starts_with('S') {
        return Err(C32Error::InvalidFormat);
    }

    let version = c32_value(address.as_bytes()[1])?;
    let decoded = c32_decode(&address[2..])?;
    if decoded.len() != 24 {
        return Err(C32Error::InvalidLength(decoded.len()));
    }

    let (payload, checksum) = decoded.split_at(20);
    if checksum != c32_checksum(version, payload) {
        return Err(C32Error::ChecksumMismatch);
    }

    let mut hash160 = [0u8; 20];
    hash160.copy_from_slice(payload);
    Ok((version, hash160))
}
