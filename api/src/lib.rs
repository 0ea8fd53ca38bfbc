pub mod config;
pub mod error;
pub mod handlers;

use axum::{
    routing::{get, post},
    Router,
};
use tower_http::cors::{Any, CorsLayer};

/// Builds the application router. Constructed once at startup and handed
/// to the listener; nothing here is process-global.
pub fn app() -> Router {
    // The extension calls from arbitrary page origins, so allow everything.
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .route("/health", get(handlers::handle_health))
        .route("/test", post(handlers::handle_test))
        .layer(cors)
}
