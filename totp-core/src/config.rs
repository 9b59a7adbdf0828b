//! Configuration — time window and derivation scheme.
//!
//! `TotpConfig` is set once and read-only afterwards. It is passed by
//! reference into derivation and validation, so independent
//! configurations (per-tenant windows, say) can coexist in one process.

use std::num::NonZeroU32;

use crate::constants::DEFAULT_TIME_WINDOW;
use crate::errors::TotpError;

/// How a code is derived from a secret and a time step.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(rename_all = "lowercase")
)]
pub enum Derivation {
    /// Legacy scheme: SHA-256 of the step alone, last four decimal
    /// digits, unpadded. The secret only passes the length check.
    #[default]
    Compat,
    /// HMAC-SHA-256 keyed with the secret, reduced mod 10^4 and
    /// zero-padded. Requires a full-length secret.
    Keyed,
}

/// Immutable configuration for derivation and validation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TotpConfig {
    /// Length of one time step in seconds.
    pub time_window: NonZeroU32,
    /// Derivation scheme.
    #[cfg_attr(feature = "serde", serde(default))]
    pub derivation: Derivation,
}

impl TotpConfig {
    /// Build a configuration with the given window and the compat scheme.
    ///
    /// # Errors
    /// Returns `TotpError::InvalidWindow` if `window_secs` is zero.
    pub fn new(window_secs: u32) -> Result<Self, TotpError> {
        let time_window = NonZeroU32::new(window_secs).ok_or(TotpError::InvalidWindow)?;
        Ok(Self {
            time_window,
            derivation: Derivation::Compat,
        })
    }

    /// Replace the derivation scheme.
    pub fn with_derivation(mut self, derivation: Derivation) -> Self {
        self.derivation = derivation;
        self
    }

    /// Window length in seconds as a signed value for timestamp arithmetic.
    pub fn window_secs(&self) -> i64 {
        i64::from(self.time_window.get())
    }
}

impl Default for TotpConfig {
    fn default() -> Self {
        Self {
            time_window: NonZeroU32::new(DEFAULT_TIME_WINDOW).unwrap_or(NonZeroU32::MIN),
            derivation: Derivation::Compat,
        }
    }
}
