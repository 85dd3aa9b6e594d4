//! # margin-core
//!
//! Core crate for Margin. Contains the unified error system, configuration
//! schemas, and the collaborator traits that the auth crate consumes.
//!
//! This crate has **no** internal dependencies on other Margin crates.

pub mod config;
pub mod error;
pub mod result;
pub mod traits;

pub use error::AppError;
pub use result::AppResult;
