//! Password policy enforcement.
//!
//! A "symbol" is any character outside `[a-zA-Z0-9]`: punctuation,
//! whitespace, control characters and all non-ASCII text alike. Lengths are
//! counted in Unicode scalar values.

use std::fmt;

use serde::Serialize;
use tracing::debug;

use keysmith_core::types::ViolationKind;

use crate::policy::PasswordPolicy;

/// A single broken rule.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Violation {
    /// Which rule was broken.
    pub kind: ViolationKind,
    /// Human-readable message rendered from the policy's templates.
    pub message: String,
}

/// Every violation found by one validation run.
///
/// A fresh value is produced for each call; nothing carries over between
/// runs.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ValidationResult {
    violations: Vec<Violation>,
}

impl ValidationResult {
    /// Whether the password satisfied every rule.
    pub fn passed(&self) -> bool {
        self.violations.is_empty()
    }

    /// The violations, in check order.
    pub fn violations(&self) -> &[Violation] {
        &self.violations
    }

    /// Consumes the result and returns its violations.
    pub fn into_violations(self) -> Vec<Violation> {
        self.violations
    }

    /// Rendered messages, in check order.
    pub fn messages(&self) -> Vec<&str> {
        self.violations.iter().map(|v| v.message.as_str()).collect()
    }

    /// Whether any violation has the given kind.
    pub fn has(&self, kind: ViolationKind) -> bool {
        self.violations.iter().any(|v| v.kind == kind)
    }

    /// Number of violations with the given kind.
    pub fn count(&self, kind: ViolationKind) -> usize {
        self.violations.iter().filter(|v| v.kind == kind).count()
    }
}

impl fmt::Display for ValidationResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.messages().join("\n"))
    }
}

/// Checks passwords against a [`PasswordPolicy`].
///
/// Every rule is evaluated; the result lists all failures, not just the
/// first one, so a user can fix everything in a single pass.
#[derive(Debug, Clone, Copy, Default)]
pub struct PasswordValidator;

impl PasswordValidator {
    /// Creates a new validator.
    pub fn new() -> Self {
        Self
    }

    /// Validates `password` against `policy`.
    pub fn validate(&self, policy: &PasswordPolicy, password: &str) -> ValidationResult {
        let messages = policy.error_messages();
        let mut violations = Vec::new();
        let mut fail = |kind: ViolationKind, param: &dyn fmt::Display| {
            violations.push(Violation {
                kind,
                message: messages.format(kind, param),
            });
        };

        let length = password.chars().count();
        if length < policy.min_length() {
            fail(ViolationKind::TooShort, &policy.min_length());
        }
        if length > policy.max_length() {
            fail(ViolationKind::TooLong, &policy.max_length());
        }

        let numbers = password.chars().filter(char::is_ascii_digit).count();
        if numbers < policy.min_numbers() {
            fail(ViolationKind::TooFewNumbers, &policy.min_numbers());
        }

        let lowercase = password.chars().filter(char::is_ascii_lowercase).count();
        if lowercase < policy.min_lowercase() {
            fail(ViolationKind::TooFewLowercase, &policy.min_lowercase());
        }

        let uppercase = password.chars().filter(char::is_ascii_uppercase).count();
        if uppercase < policy.min_uppercase() {
            fail(ViolationKind::TooFewUppercase, &policy.min_uppercase());
        }

        let symbols: Vec<char> = password
            .chars()
            .filter(|c| !c.is_ascii_alphanumeric())
            .collect();

        if policy.forbids_symbols() {
            if !symbols.is_empty() {
                fail(ViolationKind::SymbolsNotAllowed, &policy.max_symbols());
            }
        } else {
            if symbols.len() < policy.min_symbols() {
                fail(ViolationKind::TooFewSymbols, &policy.min_symbols());
            }
            if symbols.len() > policy.max_symbols() {
                fail(ViolationKind::TooManySymbols, &policy.max_symbols());
            }
            for symbol in symbols.iter().filter(|c| !policy.allows_symbol(**c)) {
                fail(ViolationKind::DisallowedSymbol, symbol);
            }
        }

        debug!(
            length,
            violations = violations.len(),
            "Validated password against policy"
        );

        ValidationResult { violations }
    }
}

/// Validates `password` against `policy` with a [`PasswordValidator`].
pub fn validate(policy: &PasswordPolicy, password: &str) -> ValidationResult {
    PasswordValidator::new().validate(policy, password)
}
