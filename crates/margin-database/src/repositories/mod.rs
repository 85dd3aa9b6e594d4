//! Concrete repository implementations.

pub mod admin;

pub use admin::AdminRepository;
