//! # keysmith-policy
//!
//! Password composition policies and everything that consumes them.
//!
//! ## Modules
//!
//! - `policy` — composition rules, generator alphabets, violation messages, bulk options
//! - `generator` — policy-compliant random password generation
//! - `validator` — exhaustive policy checking with a violation report
//! - `hasher` — bcrypt / Argon2 hashing, verification, inspection, cost calibration
//! - `engine` — one-stop facade bundling a policy with all of the above

pub mod engine;
pub mod generator;
pub mod hasher;
pub mod policy;
pub mod validator;

pub use engine::PasswordEngine;
pub use generator::{LengthMode, PasswordGenerator};
pub use hasher::{CredentialHasher, HashInfo, HashParams, HashSettings, estimate_cost};
pub use policy::{CharacterAlphabets, ErrorMessages, PasswordPolicy};
pub use validator::{PasswordValidator, ValidationResult, Violation, validate};
