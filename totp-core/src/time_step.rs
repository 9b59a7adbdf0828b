//! Time step — which window an instant falls into.
//!
//! `step = floor(at / window)`. Floor division keeps pre-epoch instants
//! in the right window: `-1` belongs to step `-1`, not step `0`.
//!
//! The wall clock is only read when the caller passes no instant.

use std::time::{SystemTime, UNIX_EPOCH};

use crate::config::TotpConfig;
use crate::errors::TotpError;

/// Index of a time window together with the window length.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TimeStep {
    index: i64,
    window_secs: i64,
}

impl TimeStep {
    /// Step containing Unix second `at`.
    pub fn at(config: &TotpConfig, at: i64) -> Self {
        let window_secs = config.window_secs();
        Self {
            index: at.div_euclid(window_secs),
            window_secs,
        }
    }

    /// Step containing the current wall-clock second.
    ///
    /// # Errors
    /// Returns `TotpError::Clock` if the system clock is before the epoch.
    pub fn now(config: &TotpConfig) -> Result<Self, TotpError> {
        Ok(Self::at(config, unix_now()?))
    }

    /// Step for `at`, or for the current time when `at` is `None`.
    ///
    /// # Errors
    /// Returns `TotpError::Clock` if the clock has to be read and fails.
    pub fn resolve(config: &TotpConfig, at: Option<i64>) -> Result<Self, TotpError> {
        match at {
            Some(at) => Ok(Self::at(config, at)),
            None => Self::now(config),
        }
    }

    /// Window index.
    pub fn index(&self) -> i64 {
        self.index
    }

    /// First Unix second of this window.
    pub fn starts_at(&self) -> i64 {
        self.index.saturating_mul(self.window_secs)
    }

    /// First Unix second after this window.
    pub fn expires_at(&self) -> i64 {
        self.starts_at().saturating_add(self.window_secs)
    }

    /// Decimal rendering of the index, the hash input of both schemes.
    pub fn to_message(&self) -> String {
        self.index.to_string()
    }
}

/// Current wall-clock time in whole seconds since the Unix epoch.
///
/// # Errors
/// Returns `TotpError::Clock` if the system clock is before the epoch.
pub fn unix_now() -> Result<i64, TotpError> {
    let secs = SystemTime::now().duration_since(UNIX_EPOCH)?.as_secs();
    // u64 seconds past i64::MAX is ~292 billion years out.
    Ok(i64::try_from(secs).unwrap_or(i64::MAX))
}
