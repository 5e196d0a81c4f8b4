//! PostgreSQL implementation of the click statistics repository.

use async_trait::async_trait;
use sqlx::PgPool;
use std::sync::Arc;

use crate::domain::entities::ClickStat;
use crate::domain::repositories::StatsRepository;
use crate::error::{AppError, map_sqlx_error};

/// PostgreSQL repository for the append-only click stats collection.
pub struct PgStatsRepository {
    pool: Arc<PgPool>,
}

impl PgStatsRepository {
    /// Creates a new repository with a database connection pool.
    pub fn new(pool: Arc<PgPool>) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl StatsRepository for PgStatsRepository {
    async fn record(&self, stat: &ClickStat) -> Result<(), AppError> {
        sqlx::query(
            r#"
            INSERT INTO click_stats (code, id, clicked_at, query)
            VALUES ($1, $2, $3, $4)
            "#,
        )
        .bind(&stat.code)
        .bind(stat.id)
        .bind(stat.clicked_at)
        .bind(&stat.query)
        .execute(self.pool.as_ref())
        .await
        .map_err(map_sqlx_error)?;

        Ok(())
    }
}
