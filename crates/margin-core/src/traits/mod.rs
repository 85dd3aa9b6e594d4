//! Core traits defined in `margin-core` and implemented by other crates.

pub mod subject_lookup;

pub use subject_lookup::SubjectLookup;
