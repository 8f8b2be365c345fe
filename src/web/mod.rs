//! HTTP interface - routes, handlers, and the session route guard.
//!
//! Every back-office page maps to one endpoint; everything except the
//! login flow and the liveness probe sits behind [`guard::require_session`].

/// Session route guard middleware
pub mod guard;
/// HTTP handler implementations, one module per page
pub mod handlers;
/// Request and response bodies
pub mod models;
/// Shared application state
pub mod state;

use axum::{
    Router, middleware,
    routing::{get, post},
};
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use tracing::info;

pub use state::AppState;

use crate::errors::Result;

async fn health() -> &'static str {
    "ok"
}

/// Builds the full application router over the given state.
#[must_use]
pub fn router(state: AppState) -> Router {
    let protected = Router::new()
        .route("/api/me", get(handlers::auth::me))
        .route(
            "/api/policies",
            get(handlers::policies::list).post(handlers::policies::create),
        )
        .route("/api/policy-options", get(handlers::policies::options))
        .route("/api/renewals", get(handlers::renewals::list))
        .route("/api/finance", get(handlers::finance::view))
        .route("/api/reports", get(handlers::reports::summary))
        .route("/api/reports/export", get(handlers::reports::export))
        .route("/api/cross-sell", get(handlers::crosssell::list))
        .route("/api/dashboard", get(handlers::dashboard::view))
        .route_layer(middleware::from_fn_with_state(
            state.clone(),
            guard::require_session,
        ));

    Router::new()
        .route("/health", get(health))
        .route("/api/login", post(handlers::auth::login))
        .route("/api/logout", post(handlers::auth::logout))
        .merge(protected)
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
        .with_state(state)
}

/// Binds the listener and serves the API until the process stops.
pub async fn run_server(state: AppState) -> Result<()> {
    let bind_addr = state.config.bind_addr.clone();
    let listener = tokio::net::TcpListener::bind(&bind_addr).await?;
    info!("Listening on {bind_addr}");

    axum::serve(listener, router(state)).await?;
    Ok(())
}
