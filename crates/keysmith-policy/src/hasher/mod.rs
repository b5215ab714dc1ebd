//! Credential hashing over bcrypt and Argon2.
//!
//! The cryptography lives in the `bcrypt` and `argon2` crates. This module
//! picks the algorithm, marshals cost parameters, and treats the encoded
//! hash strings as opaque storage values.

pub mod benchmark;
pub mod credential;
pub mod info;

pub use benchmark::{estimate_cost, estimate_cost_ms};
pub use credential::{CredentialHasher, HashSettings};
pub use info::{HashInfo, HashParams};

/// Smallest bcrypt work factor the primitive accepts.
pub const BCRYPT_MIN_COST: u32 = 4;

/// Largest bcrypt work factor the primitive accepts.
pub const BCRYPT_MAX_COST: u32 = 31;

/// Longest password, in bytes, bcrypt reads before truncating.
pub const BCRYPT_MAX_PASSWORD_BYTES: usize = 72;
