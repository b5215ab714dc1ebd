//! Metadata about stored hashes.

use argon2::{Params, password_hash::PasswordHash};
use serde::Serialize;
use tracing::warn;

use keysmith_core::types::HashAlgorithm;

use super::credential::HashSettings;

/// Cost parameters recovered from an encoded hash.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(tag = "family", rename_all = "snake_case")]
pub enum HashParams {
    /// bcrypt work factor.
    Bcrypt {
        /// Work factor (log2 rounds).
        cost: u32,
    },
    /// Argon2 costs.
    Argon2 {
        /// Memory cost in KiB.
        memory_cost: u32,
        /// Iteration count.
        time_cost: u32,
        /// Parallelism.
        threads: u32,
    },
    /// Not a hash this crate produces.
    Unknown,
}

/// What an encoded hash says about itself, relative to the current settings.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct HashInfo {
    /// Concrete algorithm, or `None` for unrecognized hashes.
    pub algorithm: Option<HashAlgorithm>,
    /// Cost parameters embedded in the hash.
    pub params: HashParams,
    /// Whether the hash should be replaced with one using the current settings.
    pub needs_rehash: bool,
}

impl HashInfo {
    /// Describes `hash` and compares it with `settings`.
    pub fn describe(hash: &str, settings: &HashSettings) -> Self {
        let (algorithm, params) = parse(hash);
        let needs_rehash = needs_rehash(algorithm, params, settings);
        Self {
            algorithm,
            params,
            needs_rehash,
        }
    }

    /// Algorithm name, or `"unknown"`.
    pub fn algorithm_name(&self) -> &'static str {
        self.algorithm.map_or("unknown", |a| a.as_str())
    }
}

/// Whether `hash` uses the modular-crypt bcrypt prefix.
pub(crate) fn is_bcrypt(hash: &str) -> bool {
    ["$2a$", "$2b$", "$2x$", "$2y$"]
        .iter()
        .any(|prefix| hash.starts_with(prefix))
}

fn parse(hash: &str) -> (Option<HashAlgorithm>, HashParams) {
    if is_bcrypt(hash) {
        return match bcrypt_cost(hash) {
            Some(cost) => (Some(HashAlgorithm::Bcrypt), HashParams::Bcrypt { cost }),
            None => {
                warn!("Malformed bcrypt hash");
                (None, HashParams::Unknown)
            }
        };
    }

    let Ok(parsed) = PasswordHash::new(hash) else {
        return (None, HashParams::Unknown);
    };
    let algorithm = match parsed.algorithm.as_str() {
        "argon2i" => HashAlgorithm::Argon2i,
        "argon2id" => HashAlgorithm::Argon2id,
        _ => return (None, HashParams::Unknown),
    };
    match Params::try_from(&parsed) {
        Ok(params) => (
            Some(algorithm),
            HashParams::Argon2 {
                memory_cost: params.m_cost(),
                time_cost: params.t_cost(),
                threads: params.p_cost(),
            },
        ),
        Err(e) => {
            warn!(error = %e, "Malformed Argon2 hash parameters");
            (None, HashParams::Unknown)
        }
    }
}

/// `$2b$10$<22 salt chars><31 hash chars>`
fn bcrypt_cost(hash: &str) -> Option<u32> {
    let mut parts = hash.splitn(4, '$').skip(2);
    let cost = parts.next()?;
    let payload = parts.next()?;
    if cost.len() != 2 || payload.len() != 53 {
        return None;
    }
    cost.parse().ok()
}

fn needs_rehash(
    algorithm: Option<HashAlgorithm>,
    params: HashParams,
    settings: &HashSettings,
) -> bool {
    let configured = settings.algorithm.resolve();
    if algorithm != Some(configured) {
        return true;
    }
    match params {
        HashParams::Bcrypt { cost } => cost != settings.work_cost,
        HashParams::Argon2 {
            memory_cost,
            time_cost,
            threads,
        } => {
            memory_cost != settings.argon2_memory_cost
                || time_cost != settings.argon2_time_cost
                || threads != settings.argon2_threads
        }
        HashParams::Unknown => true,
    }
}
