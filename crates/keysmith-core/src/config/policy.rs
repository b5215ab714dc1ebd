//! Password composition configuration.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::types::ViolationKind;

/// Composition rules a password must satisfy.
///
/// Cross-field consistency (e.g. `min_length <= max_length`) is not checked
/// at load time.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PolicyConfig {
    /// Minimum password length, in characters.
    #[serde(default = "default_min_length")]
    pub min_length: usize,
    /// Maximum password length, in characters.
    #[serde(default = "default_max_length")]
    pub max_length: usize,
    /// Minimum number of digits.
    #[serde(default = "default_one")]
    pub min_numbers: usize,
    /// Minimum number of lowercase letters.
    #[serde(default = "default_one")]
    pub min_lowercase: usize,
    /// Minimum number of uppercase letters.
    #[serde(default = "default_one")]
    pub min_uppercase: usize,
    /// Minimum number of symbols. `0` together with `max_symbols = 0`
    /// forbids symbols entirely.
    #[serde(default = "default_one")]
    pub min_symbols: usize,
    /// Maximum number of symbols.
    #[serde(default = "default_max_symbols")]
    pub max_symbols: usize,
    /// Symbol whitelist, also used as the generator's symbol alphabet.
    #[serde(default = "default_allowed_symbols")]
    pub allowed_symbols: Vec<char>,
    /// Override for the generator's lowercase alphabet.
    #[serde(default)]
    pub lowercase_alphabet: Option<String>,
    /// Override for the generator's uppercase alphabet.
    #[serde(default)]
    pub uppercase_alphabet: Option<String>,
    /// Override for the generator's digit alphabet.
    #[serde(default)]
    pub digit_alphabet: Option<String>,
    /// Message template overrides, merged onto the built-in templates.
    #[serde(default)]
    pub error_messages: HashMap<ViolationKind, String>,
}

impl Default for PolicyConfig {
    fn default() -> Self {
        Self {
            min_length: default_min_length(),
            max_length: default_max_length(),
            min_numbers: default_one(),
            min_lowercase: default_one(),
            min_uppercase: default_one(),
            min_symbols: default_one(),
            max_symbols: default_max_symbols(),
            allowed_symbols: default_allowed_symbols(),
            lowercase_alphabet: None,
            uppercase_alphabet: None,
            digit_alphabet: None,
            error_messages: HashMap::new(),
        }
    }
}

fn default_min_length() -> usize {
    7
}

fn default_max_length() -> usize {
    15
}

fn default_one() -> usize {
    1
}

fn default_max_symbols() -> usize {
    3
}

fn default_allowed_symbols() -> Vec<char> {
    vec!['#', '@', '_', '!']
}
