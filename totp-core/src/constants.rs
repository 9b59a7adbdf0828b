//! Constants — fixed sizes and defaults shared by every module.
//!
//! Changing any of these breaks compatibility with codes and secrets
//! produced by existing deployments.

/// Secret length (characters).
pub const SECRET_LENGTH: usize = 20;

/// Random bytes drawn per secret (one UUID).
pub const SECRET_ENTROPY_BYTES: usize = 16;

/// Code length (characters).
pub const CODE_LENGTH: usize = 4;

/// `10^CODE_LENGTH`, the modulus used by the keyed derivation.
pub const CODE_MODULUS: u32 = 10_000;

/// Default time window (seconds).
pub const DEFAULT_TIME_WINDOW: u32 = 15;

/// Base58 alphabet (Bitcoin ordering, no 0/O/I/l).
pub const BASE58_ALPHABET: &str = "123456789ABCDEFGHJKLMNPQRSTUVWXYZabcdefghijkmnopqrstuvwxyz";
