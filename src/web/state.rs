//! Shared state available to all HTTP handlers.
//!
//! This structure holds the store connection, the session store, the
//! commission-rate cache, and the polled dashboard snapshot - everything
//! a handler needs beyond its request.

use std::sync::Arc;

use chrono::Utc;
use sea_orm::DatabaseConnection;

use crate::config::AppConfig;
use crate::core::commission::RateCache;
use crate::core::report::{self, DashboardStats};
use crate::poll::Snapshot;
use crate::session::SessionStore;

/// Shared data for all handlers; cheap to clone per request
#[derive(Clone)]
pub struct AppState {
    /// Connection to the remote table store
    pub db: DatabaseConnection,
    /// The signed-in-user record
    pub sessions: Arc<SessionStore>,
    /// Fetch-once commission-rate table
    pub rates: Arc<RateCache>,
    /// Resolved application configuration
    pub config: Arc<AppConfig>,
    /// Periodically refreshed dashboard stats
    pub dashboard: Arc<Snapshot<DashboardStats>>,
}

impl AppState {
    /// Assembles the application state and starts the dashboard refresh
    /// timer.
    #[must_use]
    pub fn new(db: DatabaseConnection, config: AppConfig) -> Self {
        let sessions = Arc::new(SessionStore::new(config.session_file.clone()));
        let rates = Arc::new(RateCache::new());

        let dashboard = {
            let db = db.clone();
            let initial = DashboardStats {
                total_policies: 0,
                renewals_due: 0,
                total_premium: 0.0,
                total_outstanding: 0.0,
            };
            Arc::new(Snapshot::spawn(initial, config.poll_interval, move || {
                let db = db.clone();
                async move { report::dashboard_stats(&db, Utc::now().date_naive()).await }
            }))
        };

        Self {
            db,
            sessions,
            rates,
            config: Arc::new(config),
            dashboard,
        }
    }
}
