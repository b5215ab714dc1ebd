//! # keysmith-core
//!
//! Core crate for keysmith. Contains configuration schemas, the shared
//! hash-algorithm and violation-kind types, and the unified error system.
//!
//! This crate has **no** internal dependencies on other keysmith crates.

pub mod config;
pub mod error;
pub mod result;
pub mod types;

pub use error::AppError;
pub use result::AppResult;
