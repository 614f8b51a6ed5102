//! API Module
//!
//! HTTP handlers and routing for the cache server REST API.
//!
//! # Endpoints
//! - `PUT /caches/:strategy` - Store a key-value pair
//! - `GET /caches/:strategy/:key` - Retrieve a value by key
//! - `DELETE /caches/:strategy/:key` - Delete a key
//! - `POST /caches/:strategy/clear` - Empty the cache and reset stats
//! - `GET /caches/:strategy/stats` - Get cache statistics
//! - `GET /health` - Health check endpoint

pub mod handlers;
pub mod routes;

pub use handlers::*;
pub use routes::create_router;
