//! Top-level router configuration.
//!
//! # Route Structure
//!
//! - `GET /health`   - Health check, DB ping (public)
//! - `/api/*`        - Catalog, user and admin routes, guarded per group
//!
//! # Middleware
//!
//! - **Tracing** - Structured request/response logging
//! - **Role guard** - One policy group per sub-router
use axum::routing::get;
use axum::{Router, middleware};

use crate::api;
use crate::api::handlers::health::health_handler;
use crate::api::middleware::{guard, tracing};
use crate::api::policy::RouteGroup;
use crate::state::AppState;

/// Constructs the application router with all routes and middleware.
///
/// Trailing-slash normalization wraps the returned router at serve time; see
/// [`crate::server`].
pub fn app_router(state: AppState) -> Router {
    let user = api::routes::user_routes()
        .route_layer(middleware::from_fn(guard::require(RouteGroup::User)));

    let content = api::routes::content_routes()
        .route_layer(middleware::from_fn(guard::require(RouteGroup::Content)));

    let admin = api::routes::admin_routes()
        .route_layer(middleware::from_fn(guard::require(RouteGroup::Admin)));

    let api_router = api::routes::public_routes()
        .merge(user)
        .merge(content)
        .merge(admin);

    Router::new()
        .route("/health", get(health_handler))
        .nest("/api", api_router)
        .with_state(state)
        .layer(tracing::layer())
}
