//! Code validation.
//!
//! Re-derives the expected code for the requested instant and compares
//! with plain string equality. Only the exact step for `at` is checked;
//! neighbouring windows are not accepted.

use crate::code::derive_code;
use crate::config::TotpConfig;
use crate::constants::CODE_LENGTH;
use crate::errors::TotpError;

/// Check `code` against `secret` at Unix second `at` (now if `None`),
/// using the default 15-second compat configuration.
///
/// # Errors
/// - `TotpError::InvalidCodeFormat` if `code` is not exactly 4 characters.
/// - Any error from [`crate::code::generate_code`].
pub fn check_code(secret: &str, code: &str, at: Option<i64>) -> Result<bool, TotpError> {
    verify_code(&TotpConfig::default(), secret, code, at)
}

/// Check `code` against `secret` at Unix second `at` under `config`.
///
/// # Errors
/// - `TotpError::InvalidCodeFormat` if `code` is not exactly 4 characters.
/// - Any error from [`derive_code`].
pub fn verify_code(
    config: &TotpConfig,
    secret: &str,
    code: &str,
    at: Option<i64>,
) -> Result<bool, TotpError> {
    let length = code.chars().count();
    if length != CODE_LENGTH {
        tracing::debug!(length, "rejecting malformed code");
        return Err(TotpError::InvalidCodeFormat { length });
    }

    let matches = derive_code(config, secret, at)? == code;
    if !matches {
        tracing::debug!(at = ?at, "code mismatch");
    }
    Ok(matches)
}
