//! Per-request redirect orchestration and click accounting.

use std::sync::Arc;

use chrono::{DateTime, Utc};

use crate::application::services::PreviewService;
use crate::domain::entities::{ClickStat, ShortLink};
use crate::domain::repositories::{LinkRepository, StatsRepository};
use crate::error::AppError;

/// Terminal outcome of a resolution, shaped into an HTTP response by the
/// handler layer.
#[derive(Debug)]
pub enum RedirectOutcome {
    /// `302 Found` with the given `Location` target.
    Redirect(String),
    /// `200 OK` with a rendered OpenGraph preview document.
    Preview(String),
}

/// Orchestrates a single resolution request.
///
/// Decision procedure:
///
/// 1. Blank code -> default redirect, no lookup, no accounting
/// 2. Unknown code -> default redirect, no accounting
/// 3. Crawler request on a link with preview metadata -> rendered HTML, no
///    accounting (automated preview fetches must not inflate click counts)
/// 4. Otherwise -> click accounting, then redirect to the schedule-resolved,
///    URL-decoded target
///
/// Storage failures are fatal for the request and propagate unretried.
pub struct RedirectService {
    links: Arc<dyn LinkRepository>,
    stats: Arc<dyn StatsRepository>,
    preview: PreviewService,
    default_redirect_url: String,
}

impl RedirectService {
    pub fn new(
        links: Arc<dyn LinkRepository>,
        stats: Arc<dyn StatsRepository>,
        preview: PreviewService,
        default_redirect_url: String,
    ) -> Self {
        Self {
            links,
            stats,
            preview,
            default_redirect_url,
        }
    }

    /// Resolves `code` into a terminal outcome.
    ///
    /// `request_url` is the canonical URL of the incoming request (embedded
    /// as `og:url` in previews), `query` the original query string recorded
    /// with the click, `is_crawler` the classifier verdict for this request.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] when a storage call fails or stored
    /// link metadata is corrupt.
    pub async fn handle(
        &self,
        code: &str,
        request_url: &str,
        query: Option<&str>,
        is_crawler: bool,
    ) -> Result<RedirectOutcome, AppError> {
        let code = code.trim();
        if code.is_empty() {
            tracing::info!("blank short code, serving default redirect");
            return Ok(RedirectOutcome::Redirect(self.default_redirect_url.clone()));
        }

        let Some(mut link) = self.links.find_by_code(code).await? else {
            tracing::info!(code, "unknown short code, serving default redirect");
            return Ok(RedirectOutcome::Redirect(self.default_redirect_url.clone()));
        };

        if is_crawler && link.has_preview() {
            tracing::debug!(code, "crawler fetch, serving OpenGraph preview");
            let target = decoded_target(&link, Utc::now());
            let html = self.preview.render(request_url, &target, &link);
            return Ok(RedirectOutcome::Preview(html));
        }

        self.account(&mut link, query.unwrap_or("")).await?;

        let target = decoded_target(&link, Utc::now());
        tracing::debug!(code, target = %target, "serving resolved redirect");
        Ok(RedirectOutcome::Redirect(target))
    }

    /// Records one human-attributed hit: bumps the in-memory counter from its
    /// pre-accounting value, appends a [`ClickStat`], and persists the link.
    ///
    /// The two storage calls are independent single-shot operations; no
    /// transaction spans them and neither is retried.
    async fn account(&self, link: &mut ShortLink, query: &str) -> Result<(), AppError> {
        link.clicks += 1;

        let stat = ClickStat::new(&link.code, query);
        self.stats.record(&stat).await?;
        self.links.save(link).await?;

        Ok(())
    }
}

/// Resolves the effective URL at `now` and URL-decodes it for the `Location`
/// header. A target that fails to decode is served as stored.
fn decoded_target(link: &ShortLink, now: DateTime<Utc>) -> String {
    let resolved = link.resolve_url(now);
    match urlencoding::decode(resolved) {
        Ok(decoded) => decoded.into_owned(),
        Err(_) => resolved.to_string(),
    }
}
