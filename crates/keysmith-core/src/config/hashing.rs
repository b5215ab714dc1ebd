//! Credential hashing configuration.

use serde::{Deserialize, Serialize};

use crate::types::HashAlgorithm;

/// Algorithm selection and cost parameters for stored password hashes.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HashingConfig {
    /// Algorithm used for new hashes.
    #[serde(default)]
    pub algorithm: HashAlgorithm,
    /// bcrypt work factor, used by `default` and `bcrypt`.
    #[serde(default = "default_work_cost", alias = "pass_cost")]
    pub work_cost: u32,
    /// Argon2 memory cost in KiB.
    #[serde(default = "default_memory_cost")]
    pub argon2_memory_cost: u32,
    /// Argon2 iteration count.
    #[serde(default = "default_time_cost")]
    pub argon2_time_cost: u32,
    /// Argon2 degree of parallelism.
    #[serde(default = "default_threads")]
    pub argon2_threads: u32,
}

impl Default for HashingConfig {
    fn default() -> Self {
        Self {
            algorithm: HashAlgorithm::default(),
            work_cost: default_work_cost(),
            argon2_memory_cost: default_memory_cost(),
            argon2_time_cost: default_time_cost(),
            argon2_threads: default_threads(),
        }
    }
}

/// Default bcrypt work factor.
pub fn default_work_cost() -> u32 {
    10
}

/// Default Argon2 memory cost (64 MiB).
pub fn default_memory_cost() -> u32 {
    65_536
}

/// Default Argon2 iteration count.
pub fn default_time_cost() -> u32 {
    4
}

/// Default Argon2 parallelism.
pub fn default_threads() -> u32 {
    1
}
