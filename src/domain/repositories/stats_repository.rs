//! Repository trait for click statistics.

use crate::domain::entities::ClickStat;
use crate::error::AppError;
use async_trait::async_trait;

/// Storage boundary for the append-only click stats collection.
///
/// # Implementations
///
/// - [`crate::infrastructure::persistence::PgStatsRepository`] - PostgreSQL implementation
/// - Test mocks available with `cfg(test)`
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait StatsRepository: Send + Sync {
    /// Appends one click record. Records are never updated or read back here.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on storage errors.
    async fn record(&self, stat: &ClickStat) -> Result<(), AppError>;
}
