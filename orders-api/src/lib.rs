//! orders-api library - HTTP surface over the unified order collection
//!
//! Orders are loaded once at startup and handed to the router inside
//! [`AppState`]; every handler is a read-only query over that collection.

use std::path::PathBuf;
use std::sync::Arc;

use axum::Router;
use orders_common::OrderStore;
use tower_http::cors::CorsLayer;
use tower_http::services::ServeDir;
use tower_http::trace::{DefaultMakeSpan, DefaultOnResponse, TraceLayer};
use tracing::Level;

pub mod api;
pub mod error;

/// Application state shared across HTTP handlers
#[derive(Clone)]
pub struct AppState {
    /// Orders loaded at startup (immutable)
    pub store: Arc<OrderStore>,
    /// Serve the browser UI from disk instead of the embedded copy
    pub static_dir: Option<PathBuf>,
}

impl AppState {
    /// Create new application state
    pub fn new(store: OrderStore) -> Self {
        Self {
            store: Arc::new(store),
            static_dir: None,
        }
    }

    pub fn with_static_dir(mut self, static_dir: Option<PathBuf>) -> Self {
        self.static_dir = static_dir;
        self
    }
}

/// Build application router
pub fn build_router(state: AppState) -> Router {
    use axum::routing::get;

    let api = Router::new()
        .route("/api/orders", get(api::list_orders))
        .route("/api/orders/search", get(api::search_orders))
        .route("/api/orders/:id", get(api::get_order))
        .merge(api::health_routes());

    // Browser UI: a configured directory wins over the embedded files
    let router = match &state.static_dir {
        Some(dir) => api.fallback_service(ServeDir::new(dir)),
        None => api
            .route("/", get(api::serve_index))
            .route("/static/app.js", get(api::serve_app_js))
            .route("/static/styles.css", get(api::serve_styles_css)),
    };

    router
        .layer(
            TraceLayer::new_for_http()
                .make_span_with(DefaultMakeSpan::new().level(Level::INFO))
                .on_response(DefaultOnResponse::new().level(Level::INFO)),
        )
        .layer(CorsLayer::permissive())
        .with_state(state)
}
