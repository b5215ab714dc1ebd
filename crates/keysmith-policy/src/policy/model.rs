//! The password policy value.

use keysmith_core::config::{HashingConfig, PolicyConfig};
use keysmith_core::config::hashing::{
    default_memory_cost, default_threads, default_time_cost, default_work_cost,
};
use keysmith_core::error::AppError;
use keysmith_core::result::AppResult;
use keysmith_core::types::{HashAlgorithm, ViolationKind};

use super::alphabet::CharacterAlphabets;
use super::messages::ErrorMessages;

/// Composition rules, generator alphabets, message templates and hashing
/// parameters for one password policy.
///
/// The policy is an ordinary value: clone it freely, mutate it through the
/// setters, and hand it by reference to the generator, validator or hasher.
/// Setters only enforce what their types enforce. Cross-field consistency
/// is checked on demand by [`PasswordPolicy::check_consistency`]; an
/// inconsistent policy is accepted and simply yields passwords that fail
/// validation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PasswordPolicy {
    min_length: usize,
    max_length: usize,
    min_numbers: usize,
    min_lowercase: usize,
    min_uppercase: usize,
    min_symbols: usize,
    max_symbols: usize,
    allowed_symbols: Vec<char>,
    alphabets: CharacterAlphabets,
    error_messages: ErrorMessages,
    algorithm: HashAlgorithm,
    work_cost: u32,
    argon2_memory_cost: u32,
    argon2_time_cost: u32,
    argon2_threads: u32,
}

impl Default for PasswordPolicy {
    fn default() -> Self {
        Self {
            min_length: 7,
            max_length: 15,
            min_numbers: 1,
            min_lowercase: 1,
            min_uppercase: 1,
            min_symbols: 1,
            max_symbols: 3,
            allowed_symbols: vec!['#', '@', '_', '!'],
            alphabets: CharacterAlphabets::default(),
            error_messages: ErrorMessages::default(),
            algorithm: HashAlgorithm::Default,
            work_cost: default_work_cost(),
            argon2_memory_cost: default_memory_cost(),
            argon2_time_cost: default_time_cost(),
            argon2_threads: default_threads(),
        }
    }
}

impl PasswordPolicy {
    /// Creates a policy with the default rules.
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds a policy from its configuration sections.
    pub fn from_config(policy: &PolicyConfig, hashing: &HashingConfig) -> Self {
        let defaults = CharacterAlphabets::default();
        let alphabets = CharacterAlphabets::new(
            policy
                .lowercase_alphabet
                .clone()
                .unwrap_or(defaults.lowercase),
            policy
                .uppercase_alphabet
                .clone()
                .unwrap_or(defaults.uppercase),
            policy.digit_alphabet.clone().unwrap_or(defaults.digits),
        );

        let mut result = Self::default();
        result
            .set_min_length(policy.min_length)
            .set_max_length(policy.max_length)
            .set_min_numbers(policy.min_numbers)
            .set_min_lowercase(policy.min_lowercase)
            .set_min_uppercase(policy.min_uppercase)
            .set_min_symbols(policy.min_symbols)
            .set_max_symbols(policy.max_symbols)
            .set_allowed_symbols(policy.allowed_symbols.iter().copied())
            .set_alphabets(alphabets)
            .set_error_messages(
                policy
                    .error_messages
                    .iter()
                    .map(|(kind, template)| (*kind, template.clone())),
            )
            .set_algorithm(hashing.algorithm)
            .set_work_cost(hashing.work_cost)
            .set_argon2_memory_cost(hashing.argon2_memory_cost)
            .set_argon2_time_cost(hashing.argon2_time_cost)
            .set_argon2_threads(hashing.argon2_threads);
        result
    }

    // -- Getters ---------------------------------------------------------

    /// Minimum length, in characters.
    pub fn min_length(&self) -> usize {
        self.min_length
    }

    /// Maximum length, in characters.
    pub fn max_length(&self) -> usize {
        self.max_length
    }

    /// Minimum number of digits.
    pub fn min_numbers(&self) -> usize {
        self.min_numbers
    }

    /// Minimum number of lowercase letters.
    pub fn min_lowercase(&self) -> usize {
        self.min_lowercase
    }

    /// Minimum number of uppercase letters.
    pub fn min_uppercase(&self) -> usize {
        self.min_uppercase
    }

    /// Minimum number of symbols.
    pub fn min_symbols(&self) -> usize {
        self.min_symbols
    }

    /// Maximum number of symbols.
    pub fn max_symbols(&self) -> usize {
        self.max_symbols
    }

    /// The symbol whitelist, in insertion order without duplicates.
    pub fn allowed_symbols(&self) -> &[char] {
        &self.allowed_symbols
    }

    /// Whether `symbol` is on the whitelist.
    pub fn allows_symbol(&self, symbol: char) -> bool {
        self.allowed_symbols.contains(&symbol)
    }

    /// Whether the policy forbids symbols entirely (`min_symbols == 0 && max_symbols == 0`).
    pub fn forbids_symbols(&self) -> bool {
        self.min_symbols == 0 && self.max_symbols == 0
    }

    /// Generator alphabets.
    pub fn alphabets(&self) -> &CharacterAlphabets {
        &self.alphabets
    }

    /// Violation message templates.
    pub fn error_messages(&self) -> &ErrorMessages {
        &self.error_messages
    }

    /// Algorithm used for new hashes.
    pub fn algorithm(&self) -> HashAlgorithm {
        self.algorithm
    }

    /// bcrypt work factor.
    pub fn work_cost(&self) -> u32 {
        self.work_cost
    }

    /// Argon2 memory cost in KiB.
    pub fn argon2_memory_cost(&self) -> u32 {
        self.argon2_memory_cost
    }

    /// Argon2 iteration count.
    pub fn argon2_time_cost(&self) -> u32 {
        self.argon2_time_cost
    }

    /// Argon2 parallelism.
    pub fn argon2_threads(&self) -> u32 {
        self.argon2_threads
    }

    /// Number of characters the generator always emits before padding,
    /// counting the minimum symbol count.
    pub fn mandatory_length(&self) -> usize {
        self.min_numbers + self.min_lowercase + self.min_uppercase + self.min_symbols
    }

    // -- Setters ---------------------------------------------------------

    /// Sets the minimum length.
    pub fn set_min_length(&mut self, min_length: usize) -> &mut Self {
        self.min_length = min_length;
        self
    }

    /// Sets the maximum length.
    pub fn set_max_length(&mut self, max_length: usize) -> &mut Self {
        self.max_length = max_length;
        self
    }

    /// Sets the minimum number of digits.
    pub fn set_min_numbers(&mut self, min_numbers: usize) -> &mut Self {
        self.min_numbers = min_numbers;
        self
    }

    /// Sets the minimum number of lowercase letters.
    pub fn set_min_lowercase(&mut self, min_lowercase: usize) -> &mut Self {
        self.min_lowercase = min_lowercase;
        self
    }

    /// Sets the minimum number of uppercase letters.
    pub fn set_min_uppercase(&mut self, min_uppercase: usize) -> &mut Self {
        self.min_uppercase = min_uppercase;
        self
    }

    /// Sets the minimum number of symbols.
    pub fn set_min_symbols(&mut self, min_symbols: usize) -> &mut Self {
        self.min_symbols = min_symbols;
        self
    }

    /// Sets the maximum number of symbols.
    pub fn set_max_symbols(&mut self, max_symbols: usize) -> &mut Self {
        self.max_symbols = max_symbols;
        self
    }

    /// Replaces the symbol whitelist. Duplicates are dropped.
    pub fn set_allowed_symbols(&mut self, symbols: impl IntoIterator<Item = char>) -> &mut Self {
        let mut allowed = Vec::new();
        for symbol in symbols {
            if !allowed.contains(&symbol) {
                allowed.push(symbol);
            }
        }
        self.allowed_symbols = allowed;
        self
    }

    /// Replaces all three generator alphabets.
    pub fn set_alphabets(&mut self, alphabets: CharacterAlphabets) -> &mut Self {
        self.alphabets = alphabets;
        self
    }

    /// Replaces the lowercase generator alphabet.
    pub fn set_lowercase_alphabet(&mut self, alphabet: impl Into<String>) -> &mut Self {
        self.alphabets.lowercase = alphabet.into();
        self
    }

    /// Replaces the uppercase generator alphabet.
    pub fn set_uppercase_alphabet(&mut self, alphabet: impl Into<String>) -> &mut Self {
        self.alphabets.uppercase = alphabet.into();
        self
    }

    /// Replaces the digit generator alphabet.
    pub fn set_digit_alphabet(&mut self, alphabet: impl Into<String>) -> &mut Self {
        self.alphabets.digits = alphabet.into();
        self
    }

    /// Merges message template overrides onto the current templates.
    pub fn set_error_messages<I, S>(&mut self, overrides: I) -> &mut Self
    where
        I: IntoIterator<Item = (ViolationKind, S)>,
        S: Into<String>,
    {
        self.error_messages.merge(overrides);
        self
    }

    /// Sets the hash algorithm.
    pub fn set_algorithm(&mut self, algorithm: HashAlgorithm) -> &mut Self {
        self.algorithm = algorithm;
        self
    }

    /// Sets the hash algorithm from its numeric id (`0..=3`).
    ///
    /// Unknown ids fail with a configuration error and leave the current
    /// algorithm untouched.
    pub fn set_algorithm_id(&mut self, id: i64) -> AppResult<&mut Self> {
        self.algorithm = HashAlgorithm::try_from(id)?;
        Ok(self)
    }

    /// Sets the bcrypt work factor.
    pub fn set_work_cost(&mut self, work_cost: u32) -> &mut Self {
        self.work_cost = work_cost;
        self
    }

    /// Sets the Argon2 memory cost in KiB.
    pub fn set_argon2_memory_cost(&mut self, memory_cost: u32) -> &mut Self {
        self.argon2_memory_cost = memory_cost;
        self
    }

    /// Sets the Argon2 iteration count.
    pub fn set_argon2_time_cost(&mut self, time_cost: u32) -> &mut Self {
        self.argon2_time_cost = time_cost;
        self
    }

    /// Sets the Argon2 parallelism.
    pub fn set_argon2_threads(&mut self, threads: u32) -> &mut Self {
        self.argon2_threads = threads;
        self
    }

    // -- Consistency -----------------------------------------------------

    /// Checks that generated passwords can satisfy this policy.
    ///
    /// Returns a configuration error listing every problem found. Setters
    /// never call this; run it after configuring a policy from untrusted
    /// input.
    pub fn check_consistency(&self) -> AppResult<()> {
        let mut problems = Vec::new();

        if self.min_length > self.max_length {
            problems.push(format!(
                "min_length ({}) exceeds max_length ({})",
                self.min_length, self.max_length
            ));
        }
        if self.min_symbols > self.max_symbols {
            problems.push(format!(
                "min_symbols ({}) exceeds max_symbols ({})",
                self.min_symbols, self.max_symbols
            ));
        }
        if self.mandatory_length() > self.max_length {
            problems.push(format!(
                "character class minimums ({}) exceed max_length ({})",
                self.mandatory_length(),
                self.max_length
            ));
        }

        let required = [
            (self.min_lowercase, self.alphabets.lowercase.is_empty(), "lowercase alphabet"),
            (self.min_uppercase, self.alphabets.uppercase.is_empty(), "uppercase alphabet"),
            (self.min_numbers, self.alphabets.digits.is_empty(), "digit alphabet"),
            (self.min_symbols, self.allowed_symbols.is_empty(), "allowed_symbols"),
        ];
        for (minimum, empty, name) in required {
            if minimum > 0 && empty {
                problems.push(format!("{name} is empty but {minimum} characters are required"));
            }
        }
        if self.max_length > self.mandatory_length() && self.alphabets.padding().is_empty() {
            problems.push("all generator alphabets are empty".to_string());
        }

        if !self.alphabets.is_class_pure() {
            problems.push("generator alphabets contain characters outside their class".to_string());
        }
        if let Some(symbol) = self.allowed_symbols.iter().find(|c| c.is_ascii_alphanumeric()) {
            problems.push(format!("allowed symbol '{symbol}' is a letter or digit"));
        }

        if problems.is_empty() {
            Ok(())
        } else {
            Err(AppError::configuration(format!(
                "Inconsistent password policy: {}",
                problems.join("; ")
            )))
        }
    }
}
