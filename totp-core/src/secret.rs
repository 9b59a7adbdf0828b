//! Secret generation and format validation.
//!
//! A secret is 16 CSPRNG bytes shaped as a version-4 UUID, base58-encoded
//! and cut to 20 characters. The caller owns storage and distribution.

use rand_core::{OsRng, RngCore};
use uuid::Builder;

use crate::constants::{BASE58_ALPHABET, SECRET_ENTROPY_BYTES, SECRET_LENGTH};
use crate::encoding::to_base58;

/// Generate a fresh 20-character base58 secret.
///
/// Leading zero bytes shorten a base58 encoding. When a draw encodes to
/// fewer than 20 characters (odds around 2^-48) a new one is drawn.
pub fn generate_secret() -> String {
    loop {
        let mut bytes = [0u8; SECRET_ENTROPY_BYTES];
        OsRng.fill_bytes(&mut bytes);
        let uuid = Builder::from_random_bytes(bytes).into_uuid();

        let encoded = to_base58(uuid.as_bytes());
        if encoded.len() >= SECRET_LENGTH {
            return encoded[..SECRET_LENGTH].to_string();
        }
        tracing::trace!(len = encoded.len(), "short secret encoding, redrawing");
    }
}

/// Validate secret format: exactly 20 characters from the base58 alphabet.
///
/// Compat derivation is laxer than this and only rejects long secrets.
pub fn is_valid_secret(secret: &str) -> bool {
    secret.chars().count() == SECRET_LENGTH && secret.chars().all(|c| BASE58_ALPHABET.contains(c))
}
