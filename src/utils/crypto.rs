//! Crypto Helpers
//!
//! Message hashing and digest utilities shared across the crate.

use sha2::{Digest, Sha256};

/// SHA256 helper
pub fn sha256(data: &[u8]) -> [u8; 32] {
    let mut hasher = Sha256::new();
    hasher.update(data);
    hasher.finalize().into()
}

/// Domain tag for Stacks structured message signing.
const STACKS_MESSAGE_PREFIX: &str = "Stacks Signed Message:\n";

/// Hash a message for Stacks signing.
///
/// sha256 over the signed-message envelope: length-prefixed domain tag,
/// CompactSize message length, message bytes.
pub fn hash_message(message: &[u8]) -> [u8; 32] {
    let mut buf = Vec::with_capacity(1 + STACKS_MESSAGE_PREFIX.len() + 9 + message.len());
    buf.push(STACKS_MESSAGE_PREFIX.len() as u8);
    buf.extend_from_slice(STACKS_MESSAGE_PREFIX.as_bytes());
    encode_compact_size(&mut buf, message.len() as u64);
    buf.extend_from_slice(message);
    sha256(&buf)
}

fn encode_compact_size(buf: &mut Vec<u8>, n: u64) {
    match n {
        0..=0xfc => buf.push(n as u8),
        0xfd..=0xffff => {
            buf.push(0xfd);
            buf.extend_from_slice(&(n as u16).to_le_bytes());
        }
        0x1_0000..=0xffff_ffff => {
            buf.push(0xfe);
            buf.extend_from_slice(&(n as u32).to_le_bytes());
        }
        _ => {
            buf.push(0xff);
            buf.extend_from_slice(&n.to_le_bytes());
        }
    }
}
