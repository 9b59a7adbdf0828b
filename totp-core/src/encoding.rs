//! Encoding utilities — base58, big integers and hex.
//!
//! Base58 uses the Bitcoin alphabet via the `bs58` crate. Decoding a
//! base58 string "as an integer" is the standard positional reading:
//! decoded bytes interpreted big-endian, so leading `1` digits add zero.

use num_bigint::BigUint;

use crate::errors::TotpError;

/// Encode bytes to base58 (Bitcoin alphabet).
pub fn to_base58(data: &[u8]) -> String {
    bs58::encode(data).into_string()
}

/// Decode a base58 string to bytes.
///
/// # Errors
/// Returns `TotpError::Encoding` on characters outside the alphabet.
pub fn from_base58(encoded: &str) -> Result<Vec<u8>, TotpError> {
    bs58::decode(encoded)
        .into_vec()
        .map_err(|e| TotpError::Encoding(format!("invalid base58: {e}")))
}

/// Decode a base58 string as a big unsigned integer.
///
/// # Errors
/// Returns `TotpError::Encoding` on characters outside the alphabet.
pub fn base58_to_biguint(encoded: &str) -> Result<BigUint, TotpError> {
    Ok(BigUint::from_bytes_be(&from_base58(encoded)?))
}

/// Last `n` characters of the decimal representation of `value`.
///
/// Shorter than `n` when the decimal form itself is shorter; never padded.
pub fn last_decimal_digits(value: &BigUint, n: usize) -> String {
    let decimal = value.to_str_radix(10);
    decimal[decimal.len().saturating_sub(n)..].to_string()
}

/// Encode bytes to lowercase hex string.
pub fn to_hex(data: &[u8]) -> String {
    data.iter().map(|b| format!("{b:02x}")).collect()
}

/// Decode hex string to bytes.
///
/// # Errors
/// Returns `TotpError::Encoding` on invalid hex input.
pub fn from_hex(encoded: &str) -> Result<Vec<u8>, TotpError> {
    if encoded.len() % 2 != 0 {
        return Err(TotpError::Encoding("odd-length hex string".into()));
    }
    (0..encoded.len())
        .step_by(2)
        .map(|i| {
            encoded
                .get(i..i + 2)
                .ok_or_else(|| TotpError::Encoding("invalid hex: non-ascii input".into()))
                .and_then(|pair| {
                    u8::from_str_radix(pair, 16)
                        .map_err(|e| TotpError::Encoding(format!("invalid hex: {e}")))
                })
        })
        .collect()
}
