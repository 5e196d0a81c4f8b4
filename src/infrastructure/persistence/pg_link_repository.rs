//! PostgreSQL implementation of the link repository.

use async_trait::async_trait;
use serde_json::json;
use sqlx::PgPool;
use std::sync::Arc;

use crate::domain::entities::{OpenGraphInfo, Schedule, ShortLink};
use crate::domain::repositories::LinkRepository;
use crate::error::{AppError, map_sqlx_error};

/// PostgreSQL repository for short link storage.
///
/// The `schedules` and `open_graph` sub-documents live in JSON text columns
/// beside the structured fields; (de)serialization happens here at the
/// storage boundary, never inside the entity.
pub struct PgLinkRepository {
    pool: Arc<PgPool>,
}

impl PgLinkRepository {
    /// Creates a new repository with a database connection pool.
    pub fn new(pool: Arc<PgPool>) -> Self {
        Self { pool }
    }
}

#[derive(sqlx::FromRow)]
struct LinkRow {
    code: String,
    long_url: String,
    title: String,
    clicks: i64,
    is_archived: bool,
    use_open_graph: bool,
    open_graph: Option<String>,
    schedules: Option<String>,
}

impl LinkRow {
    /// Decodes the JSON sub-document columns into the entity.
    ///
    /// An empty or NULL column means "no schedules" / "no metadata"; a column
    /// that fails to parse is corrupt and fails the request loudly.
    fn into_entity(self) -> Result<ShortLink, AppError> {
        let schedules: Vec<Schedule> = match self.schedules.as_deref() {
            None | Some("") => Vec::new(),
            Some(raw) => serde_json::from_str(raw).map_err(|e| {
                AppError::internal(
                    "Corrupt schedule metadata",
                    json!({ "code": self.code, "reason": e.to_string() }),
                )
            })?,
        };

        let open_graph: Option<OpenGraphInfo> = match self.open_graph.as_deref() {
            None | Some("") => None,
            Some(raw) => Some(serde_json::from_str(raw).map_err(|e| {
                AppError::internal(
                    "Corrupt OpenGraph metadata",
                    json!({ "code": self.code, "reason": e.to_string() }),
                )
            })?),
        };

        Ok(ShortLink::new(
            self.code,
            self.long_url,
            self.title,
            self.clicks,
            self.is_archived,
            self.use_open_graph,
            open_graph,
            schedules,
        ))
    }
}

#[async_trait]
impl LinkRepository for PgLinkRepository {
    async fn find_by_code(&self, code: &str) -> Result<Option<ShortLink>, AppError> {
        let row = sqlx::query_as::<_, LinkRow>(
            r#"
            SELECT code, long_url, title, clicks, is_archived, use_open_graph,
                   open_graph, schedules
            FROM links
            WHERE code = $1
            "#,
        )
        .bind(code)
        .fetch_optional(self.pool.as_ref())
        .await
        .map_err(map_sqlx_error)?;

        row.map(LinkRow::into_entity).transpose()
    }

    async fn save(&self, link: &ShortLink) -> Result<(), AppError> {
        let schedules = if link.schedules.is_empty() {
            None
        } else {
            Some(serde_json::to_string(&link.schedules).map_err(|e| {
                AppError::internal(
                    "Failed to serialize schedules",
                    json!({ "code": link.code, "reason": e.to_string() }),
                )
            })?)
        };

        let open_graph = link
            .open_graph
            .as_ref()
            .map(serde_json::to_string)
            .transpose()
            .map_err(|e| {
                AppError::internal(
                    "Failed to serialize OpenGraph metadata",
                    json!({ "code": link.code, "reason": e.to_string() }),
                )
            })?;

        sqlx::query(
            r#"
            INSERT INTO links (code, long_url, title, clicks, is_archived,
                               use_open_graph, open_graph, schedules)
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8)
            ON CONFLICT (code) DO UPDATE SET
                long_url = EXCLUDED.long_url,
                title = EXCLUDED.title,
                clicks = EXCLUDED.clicks,
                is_archived = EXCLUDED.is_archived,
                use_open_graph = EXCLUDED.use_open_graph,
                open_graph = EXCLUDED.open_graph,
                schedules = EXCLUDED.schedules
            "#,
        )
        .bind(&link.code)
        .bind(&link.long_url)
        .bind(&link.title)
        .bind(link.clicks)
        .bind(link.is_archived)
        .bind(link.use_open_graph)
        .bind(open_graph)
        .bind(schedules)
        .execute(self.pool.as_ref())
        .await
        .map_err(map_sqlx_error)?;

        Ok(())
    }

    async fn ping(&self) -> Result<(), AppError> {
        sqlx::query("SELECT 1")
            .execute(self.pool.as_ref())
            .await
            .map_err(map_sqlx_error)?;
        Ok(())
    }
}
