//! Hashing and verification with the policy's algorithm and costs.

use argon2::{
    Algorithm, Argon2, Params, Version,
    password_hash::{
        PasswordHash, PasswordHasher as ArgonHasher, PasswordVerifier, SaltString,
        rand_core::OsRng,
    },
};
use tracing::{debug, warn};

use keysmith_core::config::hashing::{
    default_memory_cost, default_threads, default_time_cost, default_work_cost,
};
use keysmith_core::error::{AppError, ErrorKind};
use keysmith_core::result::AppResult;
use keysmith_core::types::HashAlgorithm;

use super::BCRYPT_MAX_PASSWORD_BYTES;
use super::info::{self, HashInfo};
use crate::policy::PasswordPolicy;

/// The subset of a policy the hasher reads.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HashSettings {
    /// Algorithm for new hashes.
    pub algorithm: HashAlgorithm,
    /// bcrypt work factor (`Default` and `Bcrypt`).
    pub work_cost: u32,
    /// Argon2 memory cost in KiB.
    pub argon2_memory_cost: u32,
    /// Argon2 iteration count.
    pub argon2_time_cost: u32,
    /// Argon2 parallelism.
    pub argon2_threads: u32,
}

impl Default for HashSettings {
    fn default() -> Self {
        Self {
            algorithm: HashAlgorithm::Default,
            work_cost: default_work_cost(),
            argon2_memory_cost: default_memory_cost(),
            argon2_time_cost: default_time_cost(),
            argon2_threads: default_threads(),
        }
    }
}

impl HashSettings {
    /// Extracts the hashing fields from a policy.
    pub fn from_policy(policy: &PasswordPolicy) -> Self {
        Self {
            algorithm: policy.algorithm(),
            work_cost: policy.work_cost(),
            argon2_memory_cost: policy.argon2_memory_cost(),
            argon2_time_cost: policy.argon2_time_cost(),
            argon2_threads: policy.argon2_threads(),
        }
    }
}

/// Hashes, verifies and inspects stored password hashes.
#[derive(Debug, Clone, Default)]
pub struct CredentialHasher {
    settings: HashSettings,
}

impl CredentialHasher {
    /// Creates a hasher with explicit settings.
    pub fn new(settings: HashSettings) -> Self {
        Self { settings }
    }

    /// Creates a hasher using the policy's algorithm and costs.
    pub fn from_policy(policy: &PasswordPolicy) -> Self {
        Self::new(HashSettings::from_policy(policy))
    }

    /// The settings new hashes are produced with.
    pub fn settings(&self) -> &HashSettings {
        &self.settings
    }

    /// Hashes `password` with a fresh random salt.
    ///
    /// Fails with a hashing error when the primitive rejects the cost
    /// parameters, or when a bcrypt password is longer than 72 bytes;
    /// never returns an empty or sentinel string.
    pub fn hash(&self, password: &str) -> AppResult<String> {
        match self.settings.algorithm {
            HashAlgorithm::Default | HashAlgorithm::Bcrypt => self.hash_bcrypt(password),
            HashAlgorithm::Argon2i => self.hash_argon2(password, Algorithm::Argon2i),
            HashAlgorithm::Argon2id => self.hash_argon2(password, Algorithm::Argon2id),
        }
    }

    /// Verifies `password` against a stored hash of any supported algorithm.
    ///
    /// Returns `false` for a mismatch and for hashes that cannot be parsed.
    /// A bcrypt hash never matches a password longer than 72 bytes.
    pub fn verify(&self, password: &str, hash: &str) -> bool {
        if info::is_bcrypt(hash) {
            if password.len() > BCRYPT_MAX_PASSWORD_BYTES {
                debug!(bytes = password.len(), "Password exceeds bcrypt input limit");
                return false;
            }
            return match bcrypt::verify(password, hash) {
                Ok(matches) => matches,
                Err(e) => {
                    warn!(error = %e, "Malformed bcrypt hash");
                    false
                }
            };
        }

        let parsed = match PasswordHash::new(hash) {
            Ok(parsed) => parsed,
            Err(e) => {
                warn!(error = %e, "Unrecognized password hash format");
                return false;
            }
        };

        match Argon2::default().verify_password(password.as_bytes(), &parsed) {
            Ok(()) => true,
            Err(argon2::password_hash::Error::Password) => false,
            Err(e) => {
                warn!(error = %e, algorithm = %parsed.algorithm, "Password hash verification failed");
                false
            }
        }
    }

    /// Describes a stored hash and whether it should be re-hashed with the
    /// current settings.
    pub fn inspect(&self, hash: &str) -> HashInfo {
        HashInfo::describe(hash, &self.settings)
    }

    /// Shorthand for `self.inspect(hash).needs_rehash`.
    pub fn needs_rehash(&self, hash: &str) -> bool {
        self.inspect(hash).needs_rehash
    }

    fn hash_bcrypt(&self, password: &str) -> AppResult<String> {
        let cost = self.settings.work_cost;
        if password.len() > BCRYPT_MAX_PASSWORD_BYTES {
            return Err(AppError::hashing(format!(
                "bcrypt accepts at most {BCRYPT_MAX_PASSWORD_BYTES} bytes, password has {}",
                password.len()
            )));
        }
        debug!(algorithm = %self.settings.algorithm, cost, "Hashing password with bcrypt");

        bcrypt::hash(password, cost).map_err(|e| {
            AppError::with_source(
                ErrorKind::Hashing,
                format!("bcrypt hashing failed with cost {cost}: {e}"),
                e,
            )
        })
    }

    fn hash_argon2(&self, password: &str, algorithm: Algorithm) -> AppResult<String> {
        let HashSettings {
            argon2_memory_cost: memory_cost,
            argon2_time_cost: time_cost,
            argon2_threads: threads,
            ..
        } = self.settings;
        debug!(
            algorithm = %self.settings.algorithm,
            memory_cost,
            time_cost,
            threads,
            "Hashing password with Argon2"
        );

        let params = Params::new(memory_cost, time_cost, threads, None)
            .map_err(|e| AppError::hashing(format!("Invalid Argon2 parameters: {e}")))?;
        let argon2 = Argon2::new(algorithm, Version::V0x13, params);
        let salt = SaltString::generate(&mut OsRng);

        let hash = argon2
            .hash_password(password.as_bytes(), &salt)
            .map_err(|e| AppError::hashing(format!("Password hashing failed: {e}")))?;

        Ok(hash.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn fast(algorithm: HashAlgorithm) -> CredentialHasher {
        CredentialHasher::new(HashSettings {
            algorithm,
            work_cost: 4,
            argon2_memory_cost: 8,
            argon2_time_cost: 1,
            argon2_threads: 1,
        })
    }

    #[test]
    fn test_roundtrip_every_algorithm() {
        for algorithm in HashAlgorithm::ALL {
            let hasher = fast(algorithm);
            let hash = hasher.hash("Tr0ub4dor&3").expect("hash");

            assert!(hasher.verify("Tr0ub4dor&3", &hash), "{algorithm} should verify");
            assert!(!hasher.verify("Tr0ub4dor&4", &hash), "{algorithm} accepted wrong password");
            assert!(!hasher.verify("", &hash));
        }
    }

    #[test]
    fn test_hash_formats() {
        assert!(fast(HashAlgorithm::Default).hash("pw").expect("hash").starts_with("$2b$04$"));
        assert!(fast(HashAlgorithm::Bcrypt).hash("pw").expect("hash").starts_with("$2b$04$"));
        assert!(
            fast(HashAlgorithm::Argon2i)
                .hash("pw")
                .expect("hash")
                .starts_with("$argon2i$v=19$m=8,t=1,p=1$")
        );
        assert!(
            fast(HashAlgorithm::Argon2id)
                .hash("pw")
                .expect("hash")
                .starts_with("$argon2id$v=19$m=8,t=1,p=1$")
        );
    }

    #[test]
    fn test_salts_differ() {
        let hasher = fast(HashAlgorithm::Argon2id);
        let first = hasher.hash("same").expect("hash");
        let second = hasher.hash("same").expect("hash");
        assert_ne!(first, second);
    }

    #[test]
    fn test_verify_works_across_configured_algorithms() {
        let bcrypt_hash = fast(HashAlgorithm::Bcrypt).hash("secret").expect("hash");
        assert!(fast(HashAlgorithm::Argon2id).verify("secret", &bcrypt_hash));

        let argon_hash = fast(HashAlgorithm::Argon2i).hash("secret").expect("hash");
        assert!(fast(HashAlgorithm::Default).verify("secret", &argon_hash));
    }

    #[test]
    fn test_invalid_bcrypt_cost_fails() {
        let mut settings = *fast(HashAlgorithm::Bcrypt).settings();
        settings.work_cost = 2;
        let err = CredentialHasher::new(settings).hash("pw").unwrap_err();
        assert!(err.is_hashing());
    }

    #[test]
    fn test_bcrypt_rejects_passwords_over_72_bytes() {
        let hasher = fast(HashAlgorithm::Bcrypt);
        let limit = "a".repeat(72);
        let hash = hasher.hash(&limit).expect("hash");
        assert!(hasher.verify(&limit, &hash));
        assert!(!hasher.verify(&format!("{limit}DIFFERENT"), &hash));

        let err = hasher.hash(&format!("{limit}b")).unwrap_err();
        assert!(err.is_hashing());

        // 36 two-byte characters already fill the limit.
        let wide = "é".repeat(37);
        assert!(fast(HashAlgorithm::Default).hash(&wide).unwrap_err().is_hashing());
        assert!(fast(HashAlgorithm::Argon2id).hash(&wide).is_ok());
    }

    #[test]
    fn test_invalid_argon2_params_fail() {
        let mut settings = *fast(HashAlgorithm::Argon2id).settings();
        settings.argon2_threads = 0;
        let err = CredentialHasher::new(settings).hash("pw").unwrap_err();
        assert!(err.is_hashing());
    }

    #[test]
    fn test_garbage_hash_does_not_verify() {
        let hasher = CredentialHasher::default();
        assert!(!hasher.verify("pw", ""));
        assert!(!hasher.verify("pw", "not-a-hash"));
        assert!(!hasher.verify("pw", "$2b$04$short"));
        assert!(!hasher.verify("pw", "$argon2id$v=19$m=8,t=1,p=1$broken"));
    }

    #[test]
    fn test_from_policy() {
        let mut policy = PasswordPolicy::default();
        policy
            .set_algorithm(HashAlgorithm::Argon2i)
            .set_argon2_memory_cost(16)
            .set_argon2_time_cost(2)
            .set_argon2_threads(2)
            .set_work_cost(5);

        let hasher = CredentialHasher::from_policy(&policy);
        assert_eq!(
            *hasher.settings(),
            HashSettings {
                algorithm: HashAlgorithm::Argon2i,
                work_cost: 5,
                argon2_memory_cost: 16,
                argon2_time_cost: 2,
                argon2_threads: 2,
            }
        );
        let hash = hasher.hash("pw").expect("hash");
        assert!(hash.starts_with("$argon2i$v=19$m=16,t=2,p=2$"));
    }
}
