//! Canonical request URL reconstruction from HTTP headers.

use axum::http::{HeaderMap, header};

/// Builds the canonical URL of the incoming request for use as the `og:url`
/// value in rendered previews.
///
/// Uses the `Host` header verbatim (port included, if any). Short links are
/// always served over HTTPS in deployment, so the scheme is fixed. Falls back
/// to `localhost` when the header is missing or not valid UTF-8.
pub fn canonical_request_url(headers: &HeaderMap, code: &str) -> String {
    let host = headers
        .get(header::HOST)
        .and_then(|v| v.to_str().ok())
        .unwrap_or("localhost");

    format!("https://{}/{}", host, code)
}
