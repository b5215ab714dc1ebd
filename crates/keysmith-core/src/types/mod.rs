//! Value types shared across the keysmith workspace.

pub mod algorithm;
pub mod violation;

pub use algorithm::HashAlgorithm;
pub use violation::ViolationKind;
