//! TOTP Core — time-step one-time codes.
//!
//! A secret is generated once and shared out of band. Prover and verifier
//! then independently derive a short numeric code for the current time
//! window; the verifier accepts when both codes match.
//!
//! # Module Map
//!
//! | Module | Role |
//! |--------|------|
//! | [`constants`] | Lengths, alphabet, default window |
//! | [`errors`] | `TotpError` and its stable identifiers |
//! | [`config`] | `TotpConfig` (window + derivation scheme) |
//! | [`encoding`] | base58, big-integer and hex helpers |
//! | [`hash`] | SHA-256 and HMAC-SHA-256 |
//! | [`time_step`] | Window arithmetic and wall-clock access |
//! | [`secret`] | Secret generation and format check |
//! | [`code`] | Code derivation |
//! | [`validate`] | Code validation |
//!
//! # Compatibility
//!
//! The default [`Derivation::Compat`] scheme reproduces the legacy
//! derivation bit for bit, including its known weaknesses: the secret does
//! not influence the code, short secrets are accepted and codes are not
//! zero-padded. Deployments that need the secret to matter should select
//! [`Derivation::Keyed`].
//!
//! ```
//! let secret = totp_core::generate_secret();
//! let code = totp_core::generate_code(&secret, Some(0)).unwrap();
//! assert_eq!(code, "3721");
//! assert!(totp_core::check_code(&secret, &code, Some(14)).unwrap());
//! ```

/// Constants — lengths, alphabet and default window.
pub mod constants;

/// Error types for totp-core operations.
pub mod errors;

/// Immutable configuration passed to derivation and validation.
pub mod config;

/// Encoding utilities — base58, big integers and hex.
pub mod encoding;

/// Hashing utilities — SHA-256 and HMAC-SHA-256.
pub mod hash;

/// Time step arithmetic.
pub mod time_step;

/// Secret generation.
pub mod secret;

/// Code derivation.
pub mod code;

/// Code validation.
pub mod validate;

pub use code::{derive_code, derive_code_with_expiry, generate_code};
pub use config::{Derivation, TotpConfig};
pub use errors::TotpError;
pub use secret::generate_secret;
pub use time_step::TimeStep;
pub use validate::{check_code, verify_code};
