//! Password composition policy.

pub mod alphabet;
pub mod messages;
pub mod model;
pub mod options;

pub use alphabet::CharacterAlphabets;
pub use messages::ErrorMessages;
pub use model::PasswordPolicy;
