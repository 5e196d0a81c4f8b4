//! Repository trait for short link data access.

use crate::domain::entities::ShortLink;
use crate::error::AppError;
use async_trait::async_trait;

/// Storage boundary for short links.
///
/// The backing store is treated as an opaque put/get-by-key collection; this
/// service only reads links and writes back incremented click counters.
///
/// # Implementations
///
/// - [`crate::infrastructure::persistence::PgLinkRepository`] - PostgreSQL implementation
/// - Test mocks available with `cfg(test)`
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait LinkRepository: Send + Sync {
    /// Finds a link by its short code.
    ///
    /// # Returns
    ///
    /// - `Ok(Some(ShortLink))` if found
    /// - `Ok(None)` if not found
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on storage errors or when the stored
    /// schedule / OpenGraph JSON fails to parse.
    async fn find_by_code(&self, code: &str) -> Result<Option<ShortLink>, AppError>;

    /// Persists a link back to storage (put-by-key, upsert semantics).
    ///
    /// A single-shot call: no transaction, no retry. Concurrent writers may
    /// race on the click counter; the lost update is an accepted
    /// approximate-counting tradeoff.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on storage errors.
    async fn save(&self, link: &ShortLink) -> Result<(), AppError>;

    /// Verifies storage connectivity, used by the health endpoint.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] when the store is unreachable.
    async fn ping(&self) -> Result<(), AppError>;
}
