//! HTTP server initialization and runtime setup.
//!
//! Handles database connections, migrations, service wiring, and the Axum
//! server lifecycle.

use crate::application::services::{PreviewService, RedirectService};
use crate::config::Config;
use crate::domain::repositories::{LinkRepository, StatsRepository};
use crate::infrastructure::assets::FsAssetStore;
use crate::infrastructure::persistence::{PgLinkRepository, PgStatsRepository};
use crate::routes::app_router;
use crate::state::AppState;
use crate::utils::crawler::CrawlerRules;

use anyhow::Result;
use axum::ServiceExt;
use axum::extract::Request;
use sqlx::postgres::PgPoolOptions;
use std::net::SocketAddr;
use std::sync::Arc;
use std::time::Duration;

/// Runs the HTTP server with the given configuration.
///
/// Initializes:
/// - PostgreSQL connection pool
/// - Applies migrations
/// - Repository and service wiring
/// - Axum HTTP server
///
/// # Errors
///
/// Returns an error if:
/// - Database connection fails
/// - Server bind fails
/// - Server runtime error occurs
pub async fn run(config: Config) -> Result<()> {
    let pool = PgPoolOptions::new()
        .max_connections(config.db_max_connections)
        .acquire_timeout(Duration::from_secs(config.db_connect_timeout))
        .idle_timeout(Duration::from_secs(config.db_idle_timeout))
        .max_lifetime(Duration::from_secs(config.db_max_lifetime))
        .connect(&config.database_url)
        .await?;
    tracing::info!("Connected to database");

    sqlx::migrate!("./migrations").run(&pool).await?;

    let pool = Arc::new(pool);
    let link_repository: Arc<dyn LinkRepository> = Arc::new(PgLinkRepository::new(pool.clone()));
    let stats_repository: Arc<dyn StatsRepository> = Arc::new(PgStatsRepository::new(pool.clone()));

    let redirect_service = Arc::new(RedirectService::new(
        link_repository.clone(),
        stats_repository,
        PreviewService::new(config.og_default_site_name.clone()),
        config.default_redirect_url.clone(),
    ));

    let crawler_rules = Arc::new(CrawlerRules::new(
        config.crawler_ua_prefixes.clone(),
        config.crawler_ua_substrings.clone(),
    ));

    let assets = Arc::new(FsAssetStore::new(&config.assets_dir));

    let state = AppState::new(redirect_service, link_repository, assets, crawler_rules);

    let app = app_router(state);

    let addr: SocketAddr = config.listen_addr.parse()?;
    let listener = tokio::net::TcpListener::bind(addr).await?;
    tracing::info!("Listening on http://{addr}");

    axum::serve(listener, ServiceExt::<Request>::into_make_service(app)).await?;

    Ok(())
}
