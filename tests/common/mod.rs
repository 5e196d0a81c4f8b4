#![allow(dead_code)]

use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use axum::Router;
use axum::routing::get;

use url_redirector::api::handlers::{default_redirect_handler, health_handler, redirect_handler};
use url_redirector::application::services::{PreviewService, RedirectService};
use url_redirector::domain::entities::{ClickStat, OpenGraphImage, OpenGraphInfo, ShortLink};
use url_redirector::domain::repositories::{LinkRepository, StatsRepository};
use url_redirector::error::AppError;
use url_redirector::infrastructure::assets::FsAssetStore;
use url_redirector::state::AppState;
use url_redirector::utils::crawler::CrawlerRules;

pub const FALLBACK_URL: &str = "https://fallback.test";

/// In-memory link store standing in for the opaque key-value storage.
pub struct InMemoryLinks {
    links: Mutex<HashMap<String, ShortLink>>,
}

impl InMemoryLinks {
    pub fn new(seed: Vec<ShortLink>) -> Arc<Self> {
        let links = seed.into_iter().map(|l| (l.code.clone(), l)).collect();
        Arc::new(Self {
            links: Mutex::new(links),
        })
    }

    pub fn get(&self, code: &str) -> Option<ShortLink> {
        self.links.lock().unwrap().get(code).cloned()
    }
}

#[async_trait]
impl LinkRepository for InMemoryLinks {
    async fn find_by_code(&self, code: &str) -> Result<Option<ShortLink>, AppError> {
        Ok(self.links.lock().unwrap().get(code).cloned())
    }

    async fn save(&self, link: &ShortLink) -> Result<(), AppError> {
        self.links
            .lock()
            .unwrap()
            .insert(link.code.clone(), link.clone());
        Ok(())
    }

    async fn ping(&self) -> Result<(), AppError> {
        Ok(())
    }
}

/// Records appended click stats for assertions.
pub struct RecordedClicks {
    stats: Mutex<Vec<ClickStat>>,
}

impl RecordedClicks {
    pub fn new() -> Arc<Self> {
        Arc::new(Self {
            stats: Mutex::new(Vec::new()),
        })
    }

    pub fn all(&self) -> Vec<ClickStat> {
        self.stats.lock().unwrap().clone()
    }
}

#[async_trait]
impl StatsRepository for RecordedClicks {
    async fn record(&self, stat: &ClickStat) -> Result<(), AppError> {
        self.stats.lock().unwrap().push(stat.clone());
        Ok(())
    }
}

pub fn crawler_rules() -> CrawlerRules {
    CrawlerRules::new(
        vec![
            "facebookexternalhit/".to_string(),
            "facebot".to_string(),
            "facebookcatalog".to_string(),
        ],
        vec!["discordbot".to_string(), "twitterbot".to_string()],
    )
}

pub fn build_state(links: Arc<InMemoryLinks>, stats: Arc<RecordedClicks>) -> AppState {
    let redirect_service = Arc::new(RedirectService::new(
        links.clone(),
        stats,
        PreviewService::new("Default Site".to_string()),
        FALLBACK_URL.to_string(),
    ));

    AppState::new(
        redirect_service,
        links,
        Arc::new(FsAssetStore::new("www")),
        Arc::new(crawler_rules()),
    )
}

pub fn test_router(state: AppState) -> Router {
    Router::new()
        .route("/", get(default_redirect_handler))
        .route("/{code}", get(redirect_handler))
        .route("/health", get(health_handler))
        .with_state(state)
}

pub fn plain_link(code: &str, url: &str) -> ShortLink {
    ShortLink::new(
        code.to_string(),
        url.to_string(),
        "Example".to_string(),
        0,
        false,
        false,
        None,
        vec![],
    )
}

pub fn preview_link(code: &str, url: &str, image_urls: &[&str]) -> ShortLink {
    let mut link = plain_link(code, url);
    link.use_open_graph = true;
    link.open_graph = Some(OpenGraphInfo {
        og_type: "website".to_string(),
        description: "An example page".to_string(),
        site_name: "Example Site".to_string(),
        images: image_urls
            .iter()
            .map(|url| OpenGraphImage {
                url: url.to_string(),
                ..Default::default()
            })
            .collect(),
        videos: vec![],
    });
    link
}
