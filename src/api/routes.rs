//! API Route Configuration

use axum::{
    middleware,
    routing::{get, post},
    Router,
};
use std::sync::Arc;
use tower_http::{
    compression::CompressionLayer,
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};

use super::handlers::{self, AppState};
use super::middleware::logging_middleware;

/// Create the API router with all routes and middleware
pub fn create_router(state: Arc<AppState>) -> Router {
    // Frontend is served from another origin
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    let shipping = Router::new()
        .route("/health", get(handlers::health_check))
        // Address lookup
        .route("/provinces", get(handlers::get_provinces))
        .route("/districts/:province_id", get(handlers::get_districts))
        .route("/wards/:district_id", get(handlers::get_wards))
        .route("/services/:to_district_id", get(handlers::get_services))
        // Fee
        .route("/calculate", post(handlers::calculate_fee));

    Router::new()
        .nest("/api/shipping", shipping)
        .route("/health", get(handlers::health_check))
        .with_state(state)
        // Middleware (order matters - bottom runs first)
        .layer(CompressionLayer::new())
        .layer(TraceLayer::new_for_http())
        .layer(cors)
        .layer(middleware::from_fn(logging_middleware))
}
