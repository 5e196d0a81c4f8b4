//! Handler for the short link resolution endpoint.

use axum::{
    extract::{Path, RawQuery, State},
    http::{HeaderMap, StatusCode, header},
    response::{Html, IntoResponse, Response},
};
use tracing::info;

use crate::application::services::RedirectOutcome;
use crate::error::AppError;
use crate::infrastructure::assets;
use crate::state::AppState;
use crate::utils::crawler::is_crawler;
use crate::utils::request_url::canonical_request_url;

/// Resolves a short code to its terminal response.
///
/// # Endpoint
///
/// `GET /{code}`
///
/// # Request Flow
///
/// 1. Reserved well-known path (`robots.txt`, `favicon.ico`) -> streamed from
///    the asset store, 404 if absent
/// 2. Classify the request via the crawler user-agent rules
/// 3. Delegate to [`crate::application::services::RedirectService`]
/// 4. Shape the outcome: `302 Found` with `Location`, or `200 OK` with the
///    rendered OpenGraph preview (`text/html; charset=utf-8`)
///
/// Unknown and blank codes redirect to the configured default URL; they are
/// not error responses.
///
/// # Errors
///
/// Returns 500 if a storage call fails or stored link metadata is corrupt.
pub async fn redirect_handler(
    Path(code): Path<String>,
    RawQuery(query): RawQuery,
    headers: HeaderMap,
    State(state): State<AppState>,
) -> Result<Response, AppError> {
    if assets::is_reserved(&code) {
        info!(path = %code, "request for reserved asset");
        return match state.assets.load(&code).await? {
            Some(asset) => {
                Ok(([(header::CONTENT_TYPE, asset.content_type)], asset.bytes).into_response())
            }
            None => Ok(StatusCode::NOT_FOUND.into_response()),
        };
    }

    let crawler = is_crawler(&headers, &state.crawler_rules);
    let request_url = canonical_request_url(&headers, &code);

    let outcome = state
        .redirect_service
        .handle(&code, &request_url, query.as_deref(), crawler)
        .await?;

    Ok(match outcome {
        RedirectOutcome::Redirect(url) => found(&url),
        RedirectOutcome::Preview(html) => Html(html).into_response(),
    })
}

/// Serves the bare-root request: no code to look up, so the configured
/// default redirect applies directly.
pub async fn default_redirect_handler(State(state): State<AppState>) -> Result<Response, AppError> {
    let outcome = state.redirect_service.handle("", "", None, false).await?;

    Ok(match outcome {
        RedirectOutcome::Redirect(url) => found(&url),
        RedirectOutcome::Preview(html) => Html(html).into_response(),
    })
}

/// `302 Found` with the `Location` header, matching the established redirect
/// semantics (axum's `Redirect` helpers only offer 303/307/308).
fn found(location: &str) -> Response {
    (StatusCode::FOUND, [(header::LOCATION, location)]).into_response()
}
