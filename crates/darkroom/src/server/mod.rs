//! HTTP server: state, routes, and startup.

mod error;
mod handlers;
mod templates;

pub use error::ApiError;

use std::sync::Arc;

use axum::extract::DefaultBodyLimit;
use axum::routing::{get, post};
use axum::Router;
use darkroom_core::{Config, FilterEngine, ImageProcessor, ImageStore, MemoryStore};

/// Shared per-request state.
///
/// The store is a trait object so callers (and tests) pick the lifetime
/// and concurrency policy; everything else is immutable after startup.
#[derive(Clone)]
pub struct AppState {
    pub store: Arc<dyn ImageStore>,
    pub processor: Arc<ImageProcessor>,
    pub engine: Arc<FilterEngine>,
    templates: Arc<minijinja::Environment<'static>>,
}

impl AppState {
    /// Build state from configuration and an injected store.
    pub fn new(config: &Config, store: Arc<dyn ImageStore>) -> Result<Self, minijinja::Error> {
        Ok(Self {
            store,
            processor: Arc::new(ImageProcessor::new(config)),
            engine: Arc::new(FilterEngine::new(&config.filters)),
            templates: Arc::new(templates::environment()?),
        })
    }

    /// Render a named page template.
    pub(crate) fn render(
        &self,
        name: &str,
        ctx: minijinja::Value,
    ) -> Result<String, minijinja::Error> {
        self.templates.get_template(name)?.render(ctx)
    }
}

/// Build the application router.
pub fn router(state: AppState, max_upload_mb: u64) -> Router {
    Router::new()
        .route("/", get(handlers::home))
        .route("/upload", post(handlers::upload))
        .route("/apply-filter", get(handlers::filter_page))
        .route("/api/apply-filter", post(handlers::apply_filter))
        .route("/download", post(handlers::download))
        // Multipart bodies carry the whole upload; leave headroom for
        // the form framing around it
        .layer(DefaultBodyLimit::max(
            (max_upload_mb as usize + 1) * 1024 * 1024,
        ))
        .with_state(state)
}

/// Run the server until shutdown.
pub async fn run(config: Config) -> anyhow::Result<()> {
    let state = AppState::new(&config, Arc::new(MemoryStore::new()))?;
    let app = router(state, config.limits.max_upload_mb);

    let addr = format!("{}:{}", config.server.host, config.server.port);
    let listener = tokio::net::TcpListener::bind(&addr).await?;
    tracing::info!("Listening on http://{addr}");

    axum::serve(listener, app).await?;
    Ok(())
}
