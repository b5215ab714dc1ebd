//! One-stop facade over a single policy.

use std::time::Duration;

use serde_json::{Map, Value};
use tracing::info;

use keysmith_core::config::AppConfig;
use keysmith_core::result::AppResult;

use crate::generator::{LengthMode, PasswordGenerator};
use crate::hasher::{self, CredentialHasher, HashInfo};
use crate::policy::PasswordPolicy;
use crate::validator::{PasswordValidator, ValidationResult};

/// Bundles a [`PasswordPolicy`] with generation, validation and hashing.
///
/// The engine owns only the policy. Each call builds what it needs and
/// returns fresh values, so validation results never leak between calls.
#[derive(Debug, Clone, Default)]
pub struct PasswordEngine {
    policy: PasswordPolicy,
}

impl PasswordEngine {
    /// Creates an engine for `policy`.
    pub fn new(policy: PasswordPolicy) -> Self {
        Self { policy }
    }

    /// Creates an engine from the `policy` and `hashing` configuration sections.
    pub fn from_config(config: &AppConfig) -> Self {
        let policy = PasswordPolicy::from_config(&config.policy, &config.hashing);
        info!(
            min_length = policy.min_length(),
            max_length = policy.max_length(),
            algorithm = %policy.algorithm(),
            "Password engine configured"
        );
        Self::new(policy)
    }

    /// Creates an engine from an untyped option map; see [`PasswordPolicy::apply_options`].
    pub fn from_options(options: &Map<String, Value>) -> AppResult<Self> {
        PasswordPolicy::from_options(options).map(Self::new)
    }

    /// The active policy.
    pub fn policy(&self) -> &PasswordPolicy {
        &self.policy
    }

    /// Mutable access to the active policy.
    pub fn policy_mut(&mut self) -> &mut PasswordPolicy {
        &mut self.policy
    }

    /// Generates a compliant password using the OS random source.
    pub fn generate(&self, mode: LengthMode) -> AppResult<String> {
        PasswordGenerator::new().generate(&self.policy, mode)
    }

    /// Validates `password` against the policy.
    pub fn validate(&self, password: &str) -> ValidationResult {
        PasswordValidator::new().validate(&self.policy, password)
    }

    /// Hashes `password` with the policy's algorithm and costs.
    pub fn hash(&self, password: &str) -> AppResult<String> {
        self.hasher().hash(password)
    }

    /// Verifies `password` against a stored hash.
    pub fn verify(&self, password: &str, hash: &str) -> bool {
        self.hasher().verify(password, hash)
    }

    /// Describes a stored hash relative to the policy's hashing settings.
    pub fn inspect(&self, hash: &str) -> HashInfo {
        self.hasher().inspect(hash)
    }

    /// Calibrates a bcrypt cost for this machine. Blocks while benchmarking.
    pub fn estimate_cost(&self, target: Duration, initial_cost: u32) -> AppResult<u32> {
        hasher::estimate_cost(target, initial_cost)
    }

    fn hasher(&self) -> CredentialHasher {
        CredentialHasher::from_policy(&self.policy)
    }
}
