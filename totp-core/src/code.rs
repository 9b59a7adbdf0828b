//! Code derivation.
//!
//! ## Compat algorithm
//! ```text
//! step = floor(at / window)
//! hex  = lowercase_hex(SHA-256(decimal(step)))
//! n    = base58_decode_int(base58_encode(hex))
//! code = last 4 chars of decimal(n)
//! ```
//! The secret is length-checked but does not enter the hash, so every
//! secret yields the same code at a given instant. This is kept for
//! compatibility with codes issued by existing verifiers.
//!
//! ## Keyed algorithm
//! ```text
//! mac  = HMAC-SHA-256(key = secret, msg = decimal(step))
//! code = zero_pad_4(big_endian(mac) mod 10^4)
//! ```

use num_bigint::BigUint;

use crate::config::{Derivation, TotpConfig};
use crate::constants::{CODE_LENGTH, CODE_MODULUS, SECRET_LENGTH};
use crate::encoding::{base58_to_biguint, last_decimal_digits, to_base58};
use crate::errors::TotpError;
use crate::hash::{hmac_sha256, sha256_hex};
use crate::time_step::TimeStep;

/// Derive the code for `secret` at Unix second `at` (now if `None`),
/// using the default 15-second compat configuration.
///
/// # Errors
/// - `TotpError::InvalidSecret` if the secret exceeds 20 characters.
/// - `TotpError::Clock` if `at` is `None` and the clock is unusable.
pub fn generate_code(secret: &str, at: Option<i64>) -> Result<String, TotpError> {
    derive_code(&TotpConfig::default(), secret, at)
}

/// Derive the code for `secret` at Unix second `at` under `config`.
///
/// # Errors
/// - `TotpError::InvalidSecret` if the secret fails the scheme's length check.
/// - `TotpError::Clock` if `at` is `None` and the clock is unusable.
pub fn derive_code(config: &TotpConfig, secret: &str, at: Option<i64>) -> Result<String, TotpError> {
    derive_code_with_expiry(config, secret, at).map(|(code, _)| code)
}

/// Like [`derive_code`], also returning the first Unix second at which
/// the code is no longer current.
///
/// # Errors
/// Same as [`derive_code`].
pub fn derive_code_with_expiry(
    config: &TotpConfig,
    secret: &str,
    at: Option<i64>,
) -> Result<(String, i64), TotpError> {
    check_secret(config.derivation, secret)?;
    let step = TimeStep::resolve(config, at)?;

    tracing::trace!(
        step = step.index(),
        window = config.time_window.get(),
        derivation = ?config.derivation,
        "deriving code"
    );

    let code = match config.derivation {
        Derivation::Compat => compat_code(&step)?,
        Derivation::Keyed => keyed_code(secret, &step),
    };
    Ok((code, step.expires_at()))
}

fn check_secret(derivation: Derivation, secret: &str) -> Result<(), TotpError> {
    let length = secret.chars().count();
    let accepted = match derivation {
        // Shorter secrets pass; only overlong ones are rejected.
        Derivation::Compat => length <= SECRET_LENGTH,
        Derivation::Keyed => length == SECRET_LENGTH,
    };
    if accepted {
        Ok(())
    } else {
        tracing::debug!(length, derivation = ?derivation, "rejecting secret");
        Err(TotpError::InvalidSecret { length })
    }
}

fn compat_code(step: &TimeStep) -> Result<String, TotpError> {
    let hex = sha256_hex(step.to_message().as_bytes());
    let value = base58_to_biguint(&to_base58(hex.as_bytes()))?;
    Ok(last_decimal_digits(&value, CODE_LENGTH))
}

fn keyed_code(secret: &str, step: &TimeStep) -> String {
    let mac = hmac_sha256(secret.as_bytes(), step.to_message().as_bytes());
    let value = BigUint::from_bytes_be(&mac) % CODE_MODULUS;
    format!("{:0>width$}", value.to_str_radix(10), width = CODE_LENGTH)
}
