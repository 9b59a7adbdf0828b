//! Error types for totp-core.
//!
//! Every failure is raised synchronously to the caller and never retried.
//! Messages carry lengths only: a rejected secret or code is never echoed.

use std::time::SystemTimeError;

/// Unified error type for all totp-core operations.
#[derive(Debug, thiserror::Error)]
pub enum TotpError {
    /// Secret length outside the accepted bound.
    #[error("Invalid secret: expected a 20-symbol base58 string, got {length} characters")]
    InvalidSecret { length: usize },

    /// Candidate code is not exactly four characters.
    #[error("Invalid code format: expected 4 digits, got {length} characters")]
    InvalidCodeFormat { length: usize },

    /// Time window of zero seconds.
    #[error("Invalid time window: must be at least one second")]
    InvalidWindow,

    /// Encoding error (base58, hex).
    #[error("Encoding error: {0}")]
    Encoding(String),

    /// Wall clock reports an instant before the Unix epoch.
    #[error("Clock error: {0}")]
    Clock(#[from] SystemTimeError),
}

impl TotpError {
    /// Stable identifier for this error, suitable for logs and API payloads.
    pub fn code(&self) -> &'static str {
        match self {
            Self::InvalidSecret { .. } => "INVALID_SECRET",
            Self::InvalidCodeFormat { .. } => "INVALID_CODE_FORMAT",
            Self::InvalidWindow => "INVALID_WINDOW",
            Self::Encoding(_) => "ENCODING_FAILED",
            Self::Clock(_) => "CLOCK_UNAVAILABLE",
        }
    }
}

/// Canonical error identifier registry — one entry per `TotpError` variant.
///
/// The first two are input errors surfaced by the public API; the rest
/// are configuration and environment failures.
pub const ERROR_CODES: [&str; 5] = [
    // Input class (2)
    "INVALID_SECRET",
    "INVALID_CODE_FORMAT",
    // Configuration / environment class (3)
    "INVALID_WINDOW",
    "ENCODING_FAILED",
    "CLOCK_UNAVAILABLE",
];

/// Returns `true` if the given string is a canonical error identifier.
pub fn is_valid_error_code(code: &str) -> bool {
    ERROR_CODES.contains(&code)
}
