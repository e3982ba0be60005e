//! Route definitions and router construction.
//!
//! This module defines the HTTP routes and creates the main router.
//! Handlers delegate to the `AppCore` facade.

use axum::Router;
use axum::extract::OriginalUri;
use axum::http::{HeaderValue, Method};
use axum::routing::get;
use std::sync::Arc;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

use crate::bootstrap::{AxumContext, CorsConfig};
use crate::error::HttpError;
use crate::handlers;
use crate::state::AppState;

/// Build CORS layer from configuration.
fn build_cors_layer(config: &CorsConfig) -> CorsLayer {
    match config {
        CorsConfig::AllowAll => CorsLayer::new()
            .allow_origin(Any)
            .allow_methods(Any)
            .allow_headers(Any),
        CorsConfig::AllowOrigins(origins) => {
            let allowed: Vec<HeaderValue> = origins
                .iter()
                .filter_map(|o| match o.parse() {
                    Ok(value) => Some(value),
                    Err(_) => {
                        tracing::warn!(origin = %o, "Ignoring invalid CORS origin");
                        None
                    }
                })
                .collect();
            CorsLayer::new()
                .allow_origin(allowed)
                .allow_methods(Any)
                .allow_headers(Any)
        }
    }
}

/// Build all API routes without `/api` prefix (for nesting under /api).
///
/// Axum 0.8 uses brace syntax for path parameters: `{id}`.
pub(crate) fn api_routes() -> Router<AppState> {
    Router::new()
        // Colaborators API
        .route(
            "/colaborator",
            get(handlers::colaborator::list).post(handlers::colaborator::create),
        )
        .route("/colaborator/{id}", get(handlers::colaborator::get))
        // Categories API
        .route(
            "/category",
            get(handlers::category::list).post(handlers::category::create),
        )
        .route(
            "/category/{id}",
            get(handlers::category::get)
                .put(handlers::category::update)
                .delete(handlers::category::remove),
        )
}

/// Create the main Axum router with all routes.
pub fn create_router(ctx: AxumContext, cors_config: &CorsConfig) -> Router {
    let state: AppState = Arc::new(ctx);

    Router::new()
        .route("/health", get(health_check))
        .route("/WeatherForecast", get(handlers::weather::forecast))
        .nest("/api", api_routes())
        .fallback(route_not_found)
        .method_not_allowed_fallback(method_not_allowed)
        .with_state(state)
        .layer(build_cors_layer(cors_config))
        .layer(TraceLayer::new_for_http())
}

/// Health check endpoint.
pub(crate) async fn health_check() -> &'static str {
    "OK"
}

/// Fallback for paths no route matches.
async fn route_not_found(OriginalUri(uri): OriginalUri) -> HttpError {
    HttpError::RouteNotFound(uri.path().to_string())
}

/// Fallback for known paths hit with an unsupported method.
///
/// Axum still appends the `Allow` header listing the accepted methods.
async fn method_not_allowed(method: Method, OriginalUri(uri): OriginalUri) -> HttpError {
    HttpError::MethodNotAllowed {
        method: method.to_string(),
        path: uri.path().to_string(),
    }
}
