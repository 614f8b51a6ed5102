//! API Routes
//!
//! Configures the Axum router with all cache server endpoints.

use axum::{
    routing::{get, post, put},
    Router,
};
use tower_http::{
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};

use super::handlers::{
    clear_handler, delete_handler, get_handler, health_handler, set_handler, stats_handler,
    AppState,
};

/// Creates the main router with all endpoints configured.
///
/// # Endpoints
/// - `PUT /caches/:strategy` - Store a key-value pair
/// - `GET /caches/:strategy/:key` - Retrieve a value by key
/// - `DELETE /caches/:strategy/:key` - Delete a key
/// - `POST /caches/:strategy/clear` - Empty the cache and reset stats
/// - `GET /caches/:strategy/stats` - Get cache statistics
/// - `GET /health` - Health check endpoint
///
/// `:strategy` selects the cache implementation (`lfu` or `lru`).
///
/// # Middleware
/// - CORS: Allows any origin (configurable for production)
/// - Tracing: Logs all requests for debugging
pub fn create_router(state: AppState) -> Router {
    // Configure CORS middleware
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    // Build router with all endpoints; the static segments win over :key
    Router::new()
        .route("/caches/:strategy", put(set_handler))
        .route("/caches/:strategy/stats", get(stats_handler))
        .route("/caches/:strategy/clear", post(clear_handler))
        .route("/caches/:strategy/:key", get(get_handler).delete(delete_handler))
        .route("/health", get(health_handler))
        .layer(cors)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
