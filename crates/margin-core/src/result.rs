//! Convenience result type alias for Margin.

use crate::error::AppError;

/// A specialized `Result` type for Margin operations.
pub type AppResult<T> = Result<T, AppError>;
