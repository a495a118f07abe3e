//! Personal homepage server
//!
//! Renders a single landing page: a featured hero post, a grid of recent
//! posts, and the owner's profile sections. Content comes in through a
//! `ContentSource` port (ports & adapters), so the page never cares where
//! posts are stored.

use std::net::SocketAddr;
use std::path::Path;
use std::sync::Arc;

use axum::{routing::get, Json, Router};
use serde::Serialize;
use tower_http::cors::{Any, CorsLayer};
use tower_http::services::ServeDir;
use tower_http::trace::TraceLayer;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

mod adapters;
mod app;
mod config;
mod domain;
mod error;
mod handlers;
mod pages;

#[cfg(test)]
mod test_utils;


use adapters::{JsonContentSource, SampleContentSource};
use app::HomeService;
use config::Config;
use domain::ports::ContentSource;

/// Application state shared across handlers
pub struct AppState<C: ContentSource> {
    pub home_service: Arc<HomeService<C>>,
}

// Manual Clone: the derive would require C: Clone, the Arc does not.
impl<C: ContentSource> Clone for AppState<C> {
    fn clone(&self) -> Self {
        Self {
            home_service: self.home_service.clone(),
        }
    }
}

#[derive(Serialize)]
struct HealthResponse {
    status: &'static str,
    version: &'static str,
}

async fn health() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok",
        version: env!("CARGO_PKG_VERSION"),
    })
}

/// Build the site router over any content source
pub fn build_router<C: ContentSource + 'static>(state: AppState<C>, public_dir: &str) -> Router {
    Router::new()
        .route("/", get(handlers::get_home::<C>))
        .route("/health", get(health))
        .nest_service("/images", ServeDir::new(Path::new(public_dir).join("images")))
        .layer(
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods(Any)
                .allow_headers(Any),
        )
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

#[tokio::main]
async fn main() {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info,homepage_server=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    tracing::info!("Starting homepage server...");

    // Load configuration
    let config = Config::from_env();

    // Select the content source: JSON directory if configured, otherwise
    // the built-in sample content.
    let app = match &config.content_dir {
        Some(dir) => {
            tracing::info!("Serving content from {}", dir);
            let source = Arc::new(JsonContentSource::new(dir));
            let state = AppState {
                home_service: Arc::new(HomeService::new(source)),
            };
            build_router(state, &config.public_dir)
        }
        None => {
            tracing::info!("CONTENT_DIR not set, serving built-in sample content");
            let source = Arc::new(SampleContentSource::new());
            let state = AppState {
                home_service: Arc::new(HomeService::new(source)),
            };
            build_router(state, &config.public_dir)
        }
    };

    // Start server
    let port: u16 = std::env::var("PORT")
        .ok()
        .and_then(|p| p.parse().ok())
        .unwrap_or(8080);
    let addr = SocketAddr::from(([0, 0, 0, 0], port));
    tracing::info!("Listening on {}", addr);

    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .expect("Failed to bind listener");
    axum::serve(listener, app).await.expect("Server error");
}
