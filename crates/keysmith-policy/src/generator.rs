//! Policy-compliant random password generation.

use rand::rngs::OsRng;
use rand::seq::SliceRandom;
use rand::{CryptoRng, Rng, RngCore};
use tracing::{debug, warn};

use keysmith_core::error::AppError;
use keysmith_core::result::AppResult;

use crate::policy::PasswordPolicy;

/// Target length selection for a generated password.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LengthMode {
    /// Exactly `min_length` characters (unless the mandatory characters need more).
    Min,
    /// Exactly `max_length` characters.
    Max,
    /// A uniformly random length in `min_length..=max_length`.
    #[default]
    Random,
}

impl From<Option<bool>> for LengthMode {
    /// `None` picks a random length, `Some(true)` the maximum, `Some(false)` the minimum.
    fn from(use_max: Option<bool>) -> Self {
        match use_max {
            None => Self::Random,
            Some(true) => Self::Max,
            Some(false) => Self::Min,
        }
    }
}

/// Generates passwords that satisfy a [`PasswordPolicy`].
///
/// The random source must implement [`CryptoRng`]; by default the operating
/// system CSPRNG is used. Supply a seeded CSPRNG through
/// [`PasswordGenerator::with_rng`] for reproducible output.
#[derive(Debug, Clone)]
pub struct PasswordGenerator<R = OsRng> {
    rng: R,
}

impl PasswordGenerator<OsRng> {
    /// Creates a generator backed by the OS random source.
    pub fn new() -> Self {
        Self { rng: OsRng }
    }
}

impl Default for PasswordGenerator<OsRng> {
    fn default() -> Self {
        Self::new()
    }
}

impl<R: RngCore + CryptoRng> PasswordGenerator<R> {
    /// Creates a generator backed by the given CSPRNG.
    pub fn with_rng(rng: R) -> Self {
        Self { rng }
    }

    /// Generates a password for `policy`.
    ///
    /// The password holds the class minimums, a random number of symbols in
    /// `min_symbols..=max_symbols`, and padding from the combined letter and
    /// digit alphabets up to the target length, all shuffled together.
    /// Mandatory characters always win over the length target, so a policy
    /// whose minimums exceed `max_length` yields a longer password.
    ///
    /// The symbol count is drawn from a range whose upper end is lowered to
    /// the room `max_length` leaves after the letter and digit minimums
    /// (never below `min_symbols`), so a satisfiable policy never gets a
    /// password that is too long. With no allowed symbols the count stays
    /// at `min_symbols`.
    pub fn generate(&mut self, policy: &PasswordPolicy, mode: LengthMode) -> AppResult<String> {
        if policy.min_symbols() > policy.max_symbols() {
            return Err(AppError::configuration(format!(
                "max_symbols ({}) is below min_symbols ({})",
                policy.max_symbols(),
                policy.min_symbols()
            )));
        }
        if policy.min_length() > policy.max_length() {
            return Err(AppError::configuration(format!(
                "max_length ({}) is below min_length ({})",
                policy.max_length(),
                policy.min_length()
            )));
        }

        let alphabets = policy.alphabets();
        let lowercase: Vec<char> = alphabets.lowercase.chars().collect();
        let uppercase: Vec<char> = alphabets.uppercase.chars().collect();
        let digits: Vec<char> = alphabets.digits.chars().collect();

        let mut password = Vec::with_capacity(policy.max_length().max(policy.mandatory_length()));
        self.push_random(&mut password, &lowercase, policy.min_lowercase(), "lowercase alphabet")?;
        self.push_random(&mut password, &uppercase, policy.min_uppercase(), "uppercase alphabet")?;
        self.push_random(&mut password, &digits, policy.min_numbers(), "digit alphabet")?;

        let room = if policy.allowed_symbols().is_empty() {
            0
        } else {
            policy.max_length().saturating_sub(password.len())
        };
        let max_symbols = policy.max_symbols().min(room).max(policy.min_symbols());
        let symbol_count = self.rng.gen_range(policy.min_symbols()..=max_symbols);
        self.push_random(
            &mut password,
            policy.allowed_symbols(),
            symbol_count,
            "allowed_symbols",
        )?;

        let target = match mode {
            LengthMode::Min => policy.min_length(),
            LengthMode::Max => policy.max_length(),
            LengthMode::Random => self
                .rng
                .gen_range(policy.min_length()..=policy.max_length()),
        };

        if password.len() > policy.max_length() {
            warn!(
                mandatory = password.len(),
                max_length = policy.max_length(),
                "Password policy minimums exceed max_length; generated password will fail validation"
            );
        }

        let padding = alphabets.padding();
        let missing = target.saturating_sub(password.len());
        self.push_random(&mut password, &padding, missing, "padding alphabet")?;

        password.shuffle(&mut self.rng);

        debug!(
            ?mode,
            target,
            symbols = symbol_count,
            length = password.len(),
            "Generated password"
        );

        Ok(password.into_iter().collect())
    }

    /// Appends `count` characters drawn uniformly from `alphabet`.
    fn push_random(
        &mut self,
        password: &mut Vec<char>,
        alphabet: &[char],
        count: usize,
        name: &str,
    ) -> AppResult<()> {
        if count == 0 {
            return Ok(());
        }
        if alphabet.is_empty() {
            return Err(AppError::configuration(format!(
                "{name} is empty but {count} characters are required"
            )));
        }
        for _ in 0..count {
            password.push(alphabet[self.rng.gen_range(0..alphabet.len())]);
        }
        Ok(())
    }
}
