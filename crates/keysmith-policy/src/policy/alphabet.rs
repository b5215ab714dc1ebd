//! Character alphabets used for password generation.

use serde::{Deserialize, Serialize};

/// Lowercase letters without easily confused glyphs.
pub const DEFAULT_LOWERCASE: &str = "aeiubdghjmnpqrstvxyz";

/// Uppercase letters without easily confused glyphs.
pub const DEFAULT_UPPERCASE: &str = "AEUBDGHJLMNPQRSTVWXYZ";

/// Digits without `0` and `1`.
pub const DEFAULT_DIGITS: &str = "23456789";

/// The three alphabets the generator draws class characters and padding from.
///
/// These only affect generation. Validation always counts the full ASCII
/// ranges `a-z`, `A-Z` and `0-9`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CharacterAlphabets {
    /// Lowercase letters.
    pub lowercase: String,
    /// Uppercase letters.
    pub uppercase: String,
    /// Digits.
    pub digits: String,
}

impl Default for CharacterAlphabets {
    fn default() -> Self {
        Self {
            lowercase: DEFAULT_LOWERCASE.to_string(),
            uppercase: DEFAULT_UPPERCASE.to_string(),
            digits: DEFAULT_DIGITS.to_string(),
        }
    }
}

impl CharacterAlphabets {
    /// Create alphabets from explicit strings.
    pub fn new(
        lowercase: impl Into<String>,
        uppercase: impl Into<String>,
        digits: impl Into<String>,
    ) -> Self {
        Self {
            lowercase: lowercase.into(),
            uppercase: uppercase.into(),
            digits: digits.into(),
        }
    }

    /// Characters used to pad a password up to its target length.
    pub fn padding(&self) -> Vec<char> {
        self.lowercase
            .chars()
            .chain(self.uppercase.chars())
            .chain(self.digits.chars())
            .collect()
    }

    /// Whether every alphabet only contains characters of its own class.
    ///
    /// A generator alphabet that strays outside its class (say, a symbol in
    /// the digit alphabet) can produce passwords the validator rejects.
    pub fn is_class_pure(&self) -> bool {
        self.lowercase.chars().all(|c| c.is_ascii_lowercase())
            && self.uppercase.chars().all(|c| c.is_ascii_uppercase())
            && self.digits.chars().all(|c| c.is_ascii_digit())
    }
}
