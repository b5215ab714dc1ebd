//! Configuration schemas.
//!
//! All configuration structs are deserialized from TOML files via the
//! `config` crate. Each sub-module represents a logical configuration
//! section, and every field has a default so an empty file is valid.

pub mod hashing;
pub mod logging;
pub mod policy;

use std::path::Path;

use serde::{Deserialize, Serialize};
use tracing::debug;

pub use self::hashing::HashingConfig;
pub use self::logging::LoggingConfig;
pub use self::policy::PolicyConfig;

use crate::error::AppError;

/// Root configuration.
///
/// This struct is the top-level deserialization target for the merged
/// TOML configuration files (default.toml + environment overlay).
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AppConfig {
    /// Password composition rules.
    #[serde(default)]
    pub policy: PolicyConfig,
    /// Hash algorithm and cost parameters.
    #[serde(default)]
    pub hashing: HashingConfig,
    /// Logging settings.
    #[serde(default)]
    pub logging: LoggingConfig,
}

impl AppConfig {
    /// Load configuration from TOML files.
    ///
    /// Merges the default configuration with an environment-specific overlay
    /// and environment variables prefixed with `KEYSMITH_`
    /// (e.g. `KEYSMITH__POLICY__MIN_LENGTH=10`).
    pub fn load(env: &str) -> Result<Self, AppError> {
        debug!(env, "Building layered configuration");
        let config = config::Config::builder()
            .add_source(config::File::with_name("config/default").required(false))
            .add_source(config::File::with_name(&format!("config/{env}")).required(false))
            .add_source(
                config::Environment::with_prefix("KEYSMITH")
                    .prefix_separator("__")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()
            .map_err(|e| AppError::configuration(format!("Failed to build config: {e}")))?;

        config
            .try_deserialize()
            .map_err(|e| AppError::configuration(format!("Failed to deserialize config: {e}")))
    }

    /// Load configuration from a single file, without environment overrides.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, AppError> {
        let path = path.as_ref();
        debug!(path = %path.display(), "Reading configuration file");
        let config = config::Config::builder()
            .add_source(config::File::from(path))
            .build()
            .map_err(|e| {
                AppError::configuration(format!(
                    "Failed to read config file '{}': {e}",
                    path.display()
                ))
            })?;

        config
            .try_deserialize()
            .map_err(|e| AppError::configuration(format!("Failed to deserialize config: {e}")))
    }
}
