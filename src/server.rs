// Axum server for the ize docs site
//
// Serves the landing page, the docs pages (sidebar + rendered markdown) and a
// JSON health check. Rendered pages are cached in moka under the content
// file's fingerprint; the see-also listing is read fresh on every request.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Json},
    routing::get,
    Router,
};
use moka::future::Cache;
use std::path::PathBuf;
use std::sync::Arc;
use std::time::Duration;
use tower_http::{compression::CompressionLayer, services::ServeDir, trace::TraceLayer};

use crate::config::SiteConfig;
use crate::content::{ContentError, ContentFingerprint, ContentRepository, FsContentRepository};
use crate::navigation::{path_name, route_for, MenuModel};
use crate::web::handlers::{
    docs::docs_page,
    pages::{home_page, render_html, ErrorTemplate},
};

const CACHE_CAPACITY: u64 = 1_000;

// ============================================================================
// Application State
// ============================================================================

/// A docs page after markdown rendering.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderedPage {
    pub title: String,
    pub html: String,
}

/// Repository a page body was read from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ContentScope {
    /// Static menu entries.
    Pages,
    /// See-also docs.
    Docs,
}

/// Cache key of a rendered page. A changed file gets a new fingerprint and so
/// misses the cache.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct PageKey {
    pub scope: ContentScope,
    pub identifier: String,
    pub fingerprint: ContentFingerprint,
}

#[derive(Clone)]
pub struct AppState {
    /// Static menu; the see-also section is attached per request.
    pub menu: Arc<MenuModel>,
    /// Content listed in the see-also section.
    pub docs: Arc<dyn ContentRepository>,
    /// Bodies of the static menu entries.
    pub pages: Arc<dyn ContentRepository>,
    pub cache: Cache<PageKey, Arc<RenderedPage>>,
    /// Directory served under `/static`.
    pub static_dir: PathBuf,
}

impl AppState {
    pub fn new(config: &SiteConfig) -> anyhow::Result<Self> {
        tracing::info!("Loading menu...");
        let menu = config.load_menu()?;

        let docs = Arc::new(FsContentRepository::new(&config.docs_dir));
        let pages = Arc::new(FsContentRepository::new(&config.pages_dir));

        let mut state = Self::with_repositories(menu, docs, pages, config.cache_ttl);
        state.static_dir = config.static_dir.clone();
        state.report_missing_pages();
        Ok(state)
    }

    /// Build state from already-constructed parts.
    pub fn with_repositories(
        menu: MenuModel,
        docs: Arc<dyn ContentRepository>,
        pages: Arc<dyn ContentRepository>,
        cache_ttl: Duration,
    ) -> Self {
        let cache = Cache::builder()
            .max_capacity(CACHE_CAPACITY)
            .time_to_live(cache_ttl)
            .build();

        Self {
            menu: Arc::new(menu),
            docs,
            pages,
            cache,
            static_dir: PathBuf::from("static"),
        }
    }

    /// Warn about static menu entries without a content file.
    fn report_missing_pages(&self) {
        let available = self.pages.list();
        for section in self.menu.sections() {
            for entry in &section.entries {
                let identifier = path_name(entry);
                if !available.contains(&identifier) {
                    tracing::warn!(
                        section = %section.title,
                        entry = %entry,
                        route = %route_for(entry),
                        file = %identifier,
                        "Static page has no content file"
                    );
                }
            }
        }
    }
}

// ============================================================================
// Router
// ============================================================================

pub fn create_router(state: AppState) -> Router {
    let static_dir = state.static_dir.clone();

    Router::new()
        // Health check
        .route("/health", get(health_check))

        // Landing page
        .route("/", get(home_page))

        // Docs pages; the root and its trailing-slash form resolve to the landing entry
        .route("/docs", get(docs_page))
        .route("/docs/", get(docs_page))
        .route("/docs/*rest", get(docs_page))

        // Stylesheet and icons
        .nest_service("/static", ServeDir::new(static_dir))

        // Middleware (applied in reverse order)
        .layer(CompressionLayer::new()) // gzip + brotli compression
        .layer(TraceLayer::new_for_http()) // Request logging
        .with_state(state)
}

// ============================================================================
// Endpoint Handlers
// ============================================================================

async fn health_check() -> impl IntoResponse {
    Json(serde_json::json!({
        "status": "healthy",
        "timestamp": chrono::Utc::now().to_rfc3339()
    }))
}

// ============================================================================
// Error Handling
// ============================================================================

#[derive(Debug)]
pub enum AppError {
    Internal(String),
    NotFound(String),
}

impl From<ContentError> for AppError {
    fn from(error: ContentError) -> Self {
        match error {
            ContentError::NotFound(id) => AppError::NotFound(format!("Content not found: {}", id)),
            ContentError::InvalidIdentifier(id) => {
                AppError::NotFound(format!("Invalid content identifier: {}", id))
            }
            ContentError::Io(e) => AppError::Internal(format!("Failed to read content: {}", e)),
        }
    }
}

const INTERNAL_ERROR_MESSAGE: &str = "Something went wrong while rendering this page.";

impl IntoResponse for AppError {
    fn into_response(self) -> axum::response::Response {
        // internal details go to the log, not the page
        let (status, message) = match self {
            AppError::Internal(msg) => {
                tracing::error!("{}", msg);
                (StatusCode::INTERNAL_SERVER_ERROR, INTERNAL_ERROR_MESSAGE.to_string())
            }
            AppError::NotFound(msg) => (StatusCode::NOT_FOUND, msg),
        };

        let template = ErrorTemplate {
            title: status.canonical_reason().unwrap_or("error").to_lowercase(),
            message,
        };

        (status, render_html(&template)).into_response()
    }
}
