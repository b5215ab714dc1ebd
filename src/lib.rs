//! keysmith — password policy engine.
//!
//! Generates passwords that satisfy a composition policy, validates
//! arbitrary passwords against the same policy, and hashes/verifies them
//! with bcrypt or Argon2. This crate wires configuration and logging to the
//! workspace crates and re-exports their public API.

use tracing_subscriber::{EnvFilter, fmt};

pub use keysmith_core::config::{AppConfig, HashingConfig, LoggingConfig, PolicyConfig};
pub use keysmith_core::error::{AppError, ErrorKind};
pub use keysmith_core::result::AppResult;
pub use keysmith_core::types::{HashAlgorithm, ViolationKind};
pub use keysmith_policy::{
    CharacterAlphabets, CredentialHasher, ErrorMessages, HashInfo, HashParams, HashSettings,
    LengthMode, PasswordEngine, PasswordGenerator, PasswordPolicy, PasswordValidator,
    ValidationResult, Violation, estimate_cost, validate,
};

/// Load configuration for the environment named by `KEYSMITH_ENV`
/// (default `development`).
pub fn load_configuration() -> AppResult<AppConfig> {
    let env = std::env::var("KEYSMITH_ENV").unwrap_or_else(|_| "development".to_string());

    tracing::info!("Loading config (env: {})", env);

    AppConfig::load(&env)
}

/// Initialize tracing/logging.
///
/// `RUST_LOG` takes precedence over the configured level. Returns `false`
/// if a global subscriber was already installed, in which case nothing
/// changes.
pub fn init_logging(config: &LoggingConfig) -> bool {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&config.level));

    let installed = match config.format.as_str() {
        "json" => fmt()
            .json()
            .with_env_filter(filter)
            .with_target(true)
            .with_thread_ids(true)
            .try_init(),
        _ => fmt()
            .pretty()
            .with_env_filter(filter)
            .with_target(true)
            .try_init(),
    };

    installed.is_ok()
}
