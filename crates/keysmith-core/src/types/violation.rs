//! Password policy violation kinds.

use std::fmt;

use serde::{Deserialize, Serialize};

/// The kind of rule a password broke.
///
/// Serialized in `snake_case`. The legacy option names (`min_length`,
/// `not_symbols`, ...) are accepted as aliases when deserializing so older
/// message tables keep working.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ViolationKind {
    /// Fewer characters than `min_length`.
    #[serde(alias = "min_length")]
    TooShort,
    /// More characters than `max_length`.
    #[serde(alias = "max_length")]
    TooLong,
    /// Fewer digits than `min_numbers`.
    #[serde(alias = "min_numbers")]
    TooFewNumbers,
    /// Fewer lowercase letters than `min_lowercase`.
    #[serde(alias = "min_lowercase")]
    TooFewLowercase,
    /// Fewer uppercase letters than `min_uppercase`.
    #[serde(alias = "min_uppercase")]
    TooFewUppercase,
    /// A symbol was used while the policy forbids symbols entirely.
    #[serde(alias = "not_symbols")]
    SymbolsNotAllowed,
    /// Fewer symbols than `min_symbols`.
    #[serde(alias = "min_symbols")]
    TooFewSymbols,
    /// More symbols than `max_symbols`.
    #[serde(alias = "max_symbols")]
    TooManySymbols,
    /// A symbol outside the `allowed_symbols` whitelist.
    #[serde(alias = "allowed_symbols")]
    DisallowedSymbol,
}

impl ViolationKind {
    /// Every kind, in the order the validator checks them.
    pub const ALL: [ViolationKind; 9] = [
        Self::TooShort,
        Self::TooLong,
        Self::TooFewNumbers,
        Self::TooFewLowercase,
        Self::TooFewUppercase,
        Self::SymbolsNotAllowed,
        Self::TooFewSymbols,
        Self::TooManySymbols,
        Self::DisallowedSymbol,
    ];

    /// Return the `snake_case` code for this kind.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::TooShort => "too_short",
            Self::TooLong => "too_long",
            Self::TooFewNumbers => "too_few_numbers",
            Self::TooFewLowercase => "too_few_lowercase",
            Self::TooFewUppercase => "too_few_uppercase",
            Self::SymbolsNotAllowed => "symbols_not_allowed",
            Self::TooFewSymbols => "too_few_symbols",
            Self::TooManySymbols => "too_many_symbols",
            Self::DisallowedSymbol => "disallowed_symbol",
        }
    }
}

impl fmt::Display for ViolationKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
