pub mod api;
pub mod config;
pub mod state;

pub use config::Config;
pub use state::AppState;

use axum::{routing::get, Router};
use std::sync::Arc;
use tower_http::{
    compression::CompressionLayer, cors::CorsLayer, services::ServeDir, trace::TraceLayer,
};

/// Assemble the application router: the search API plus the static
/// search page, behind trace/CORS/compression layers.
pub fn router(state: Arc<AppState>, static_dir: &str) -> Router {
    Router::new()
        .route("/api/search", get(api::search))
        .with_state(state)
        .fallback_service(ServeDir::new(static_dir))
        .layer(TraceLayer::new_for_http())
        // Open CORS, same stance as the rest of the public surface.
        .layer(CorsLayer::permissive())
        .layer(CompressionLayer::new())
}
