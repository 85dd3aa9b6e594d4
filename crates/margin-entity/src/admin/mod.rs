//! Admin domain entities.

pub mod model;

pub use model::Admin;
