// src/routes.rs

use axum::{
    Router,
    http::{HeaderValue, Method},
    routing::{get, post},
};
use tower_http::{
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};

use crate::{
    handlers::{admin, assessment, contact},
    state::AppState,
};

/// Assembles the main application router.
///
/// * Mounts all endpoints under the `/api` prefix.
/// * Applies global middleware (Trace, CORS).
/// * Injects global state (Store + Config).
pub fn create_router(state: AppState) -> Router {
    let cors = cors_layer(&state.config.cors_origins);

    let admin_routes = Router::new()
        .route("/login", post(admin::login))
        .route("/assessments", get(admin::list_assessments))
        .route("/assessments/export", get(admin::export_assessments));

    let api_routes = Router::new()
        .route("/assessments", post(assessment::create_assessment))
        .route("/contact-requests", post(contact::create_contact_request))
        .nest("/admin", admin_routes);

    Router::new()
        .nest("/api", api_routes)
        // Global Middleware (applied from outside in)
        .layer(TraceLayer::new_for_http())
        .layer(cors)
        .with_state(state)
}

/// Builds the CORS layer from the configured origins: "*" allows any origin
/// (without credentials, per CORS rules); otherwise the comma-separated
/// list is parsed into exact origins.
fn cors_layer(origins: &str) -> CorsLayer {
    if origins.trim() == "*" {
        return CorsLayer::new()
            .allow_origin(Any)
            .allow_methods(Any)
            .allow_headers(Any);
    }

    let origins: Vec<HeaderValue> = origins
        .split(',')
        .filter_map(|origin| origin.trim().parse().ok())
        .collect();

    CorsLayer::new()
        .allow_origin(origins)
        .allow_methods([Method::GET, Method::POST])
        .allow_headers([
            axum::http::header::AUTHORIZATION,
            axum::http::header::CONTENT_TYPE,
        ])
        .allow_credentials(true)
}
