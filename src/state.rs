//! Shared application state injected into handlers.

use std::sync::Arc;

use crate::application::services::RedirectService;
use crate::domain::repositories::LinkRepository;
use crate::infrastructure::assets::FsAssetStore;
use crate::utils::crawler::CrawlerRules;

#[derive(Clone)]
pub struct AppState {
    pub redirect_service: Arc<RedirectService>,
    /// Kept alongside the service for the health endpoint's storage ping.
    pub links: Arc<dyn LinkRepository>,
    pub assets: Arc<FsAssetStore>,
    pub crawler_rules: Arc<CrawlerRules>,
}

impl AppState {
    pub fn new(
        redirect_service: Arc<RedirectService>,
        links: Arc<dyn LinkRepository>,
        assets: Arc<FsAssetStore>,
        crawler_rules: Arc<CrawlerRules>,
    ) -> Self {
        Self {
            redirect_service,
            links,
            assets,
            crawler_rules,
        }
    }
}
