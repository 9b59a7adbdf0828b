//! Hashing utilities — SHA-256 and HMAC-SHA-256.
//!
//! The compat derivation hashes the step string with bare SHA-256; the
//! keyed derivation uses HMAC with the secret as key.

use hmac::{Hmac, Mac};
use sha2::{Digest, Sha256};

use crate::encoding;

type HmacSha256 = Hmac<Sha256>;

/// Compute SHA-256 hash of arbitrary data.
pub fn sha256(data: &[u8]) -> [u8; 32] {
    let mut hasher = Sha256::new();
    hasher.update(data);
    hasher.finalize().into()
}

/// Compute SHA-256 and return lowercase hex string.
pub fn sha256_hex(data: &[u8]) -> String {
    encoding::to_hex(&sha256(data))
}

/// Compute HMAC-SHA-256 of `message` under `key`.
///
/// HMAC accepts keys of any length, including empty.
pub fn hmac_sha256(key: &[u8], message: &[u8]) -> [u8; 32] {
    // `new_from_slice` only fails for fixed-size-key MACs; HMAC has none.
    let mut mac = match HmacSha256::new_from_slice(key) {
        Ok(mac) => mac,
        Err(_) => unreachable!("HMAC accepts keys of any length"),
    };
    mac.update(message);
    mac.finalize().into_bytes().into()
}
