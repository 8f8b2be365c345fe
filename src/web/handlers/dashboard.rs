//! Dashboard stat-card handler.
//!
//! Serves the polled snapshot rather than querying the store per request;
//! the refresh timer keeps it at most one interval stale.

use axum::{Json, extract::State};

use crate::core::report::DashboardStats;
use crate::web::state::AppState;

/// `GET /api/dashboard`
pub async fn view(State(state): State<AppState>) -> Json<DashboardStats> {
    Json((*state.dashboard.latest()).clone())
}
