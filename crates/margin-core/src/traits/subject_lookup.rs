//! Lookup-by-subject collaborator consumed by the identity resolver.

use async_trait::async_trait;

use crate::result::AppResult;

/// Looks up a stored user record by the subject a token vouches for.
///
/// Implementations must be idempotent and safe to call from async code.
/// Timeouts and backoff, if any, belong to the implementation; callers
/// invoke it at most once per resolution and never retry.
#[async_trait]
pub trait SubjectLookup: Send + Sync + 'static {
    /// The record type returned for a known subject.
    type Record: Send + Sync;

    /// Return the record for `subject`, or `None` if no such user exists.
    async fn get_by_subject(&self, subject: &str) -> AppResult<Option<Self::Record>>;
}
