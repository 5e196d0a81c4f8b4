//! Top-level router configuration.
//!
//! # Route Structure
//!
//! - `GET /{code}` - Short link resolution (redirect, preview, or reserved asset)
//! - `GET /`       - Default redirect (blank code)
//! - `GET /health` - Health check: storage ping (public)
//!
//! # Middleware
//!
//! - **Tracing** - Structured request/response logging
//! - **Path normalization** - Trailing slash handling

use crate::api::handlers::{default_redirect_handler, health_handler, redirect_handler};
use crate::api::middleware::tracing;
use crate::state::AppState;
use axum::Router;
use axum::routing::get;
use tower::Layer;
use tower_http::normalize_path::{NormalizePath, NormalizePathLayer};

/// Constructs the application router with all routes and middleware.
pub fn app_router(state: AppState) -> NormalizePath<Router> {
    let router = Router::new()
        .route("/", get(default_redirect_handler))
        .route("/{code}", get(redirect_handler))
        .route("/health", get(health_handler))
        .with_state(state)
        .layer(tracing::layer());

    NormalizePathLayer::trim_trailing_slash().layer(router)
}
