//! Hash algorithm selection.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::AppError;

/// Credential-hashing algorithm a policy hashes new passwords with.
///
/// The numeric ids (`0..=3`) are stable and accepted wherever an algorithm
/// can be configured from untyped input.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum HashAlgorithm {
    /// The recommended algorithm of the hashing backend (currently bcrypt).
    Default,
    /// bcrypt with a work-factor cost.
    Bcrypt,
    /// Argon2i with memory, time and parallelism costs.
    Argon2i,
    /// Argon2id with memory, time and parallelism costs.
    Argon2id,
}

impl Default for HashAlgorithm {
    fn default() -> Self {
        Self::Default
    }
}

impl HashAlgorithm {
    /// All supported algorithms in id order.
    pub const ALL: [HashAlgorithm; 4] = [Self::Default, Self::Bcrypt, Self::Argon2i, Self::Argon2id];

    /// Stable numeric id.
    pub fn id(&self) -> u8 {
        match self {
            Self::Default => 0,
            Self::Bcrypt => 1,
            Self::Argon2i => 2,
            Self::Argon2id => 3,
        }
    }

    /// Lowercase name, matching the serde representation.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Default => "default",
            Self::Bcrypt => "bcrypt",
            Self::Argon2i => "argon2i",
            Self::Argon2id => "argon2id",
        }
    }

    /// The concrete algorithm actually computed. `Default` resolves to bcrypt.
    pub fn resolve(&self) -> HashAlgorithm {
        match self {
            Self::Default => Self::Bcrypt,
            other => *other,
        }
    }

    /// Whether this algorithm takes the Argon2 cost parameters.
    pub fn is_argon2(&self) -> bool {
        matches!(self, Self::Argon2i | Self::Argon2id)
    }
}

impl fmt::Display for HashAlgorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl TryFrom<i64> for HashAlgorithm {
    type Error = AppError;

    fn try_from(value: i64) -> Result<Self, Self::Error> {
        match value {
            0 => Ok(Self::Default),
            1 => Ok(Self::Bcrypt),
            2 => Ok(Self::Argon2i),
            3 => Ok(Self::Argon2id),
            other => Err(AppError::configuration(format!(
                "Unsupported hash algorithm id: {other}"
            ))),
        }
    }
}

impl FromStr for HashAlgorithm {
    type Err = AppError;

    /// Parse a name such as `"argon2id"` or `"PASSWORD_ARGON2ID"`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized = s.trim().to_ascii_lowercase();
        let name = normalized
            .strip_prefix("password_")
            .unwrap_or(normalized.as_str());
        match name {
            "default" => Ok(Self::Default),
            "bcrypt" => Ok(Self::Bcrypt),
            "argon2i" => Ok(Self::Argon2i),
            "argon2id" => Ok(Self::Argon2id),
            _ => Err(AppError::configuration(format!(
                "Unsupported hash algorithm: {s}"
            ))),
        }
    }
}
