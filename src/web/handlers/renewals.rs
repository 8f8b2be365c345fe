//! Renewal tracking handlers.
//!
//! The scan window comes from the configured default unless the request
//! overrides it: an explicit `from`/`to` pair wins over a `lookahead`
//! horizon, which wins over the configuration.

use axum::{
    Json,
    extract::{Query, State},
};
use chrono::{Duration, Utc};

use crate::core::{customer, renewal};
use crate::web::handlers::{HandlerError, internal_error};
use crate::web::models::{RenewalListResponse, RenewalQuery, RenewalRow};
use crate::web::state::AppState;

/// `GET /api/renewals`
pub async fn list(
    State(state): State<AppState>,
    Query(query): Query<RenewalQuery>,
) -> Result<Json<RenewalListResponse>, HandlerError> {
    let today = Utc::now().date_naive();
    let config = &state.config.renewal;

    let scan = match (query.from, query.to, query.lookahead) {
        (Some(from), Some(to), _) => {
            renewal::scan_between(&state.db, config, today, from, to).await
        }
        (_, _, Some(days)) => {
            renewal::scan_between(&state.db, config, today, today, today + Duration::days(days))
                .await
        }
        _ => renewal::scan_window(&state.db, config, today).await,
    }
    .map_err(|e| internal_error("Yenilemeler yüklenirken hata oluştu", &e))?;

    let customers = customer::get_all_customers(&state.db)
        .await
        .map_err(|e| internal_error("Müşteriler yüklenirken hata oluştu", &e))?;

    let entries = scan
        .entries
        .into_iter()
        .map(|e| {
            let customer_name = customer::display_name(&customers, e.policy.customer_id);
            RenewalRow {
                policy: e.policy,
                customer_name,
                days_remaining: e.days_remaining,
                severity: e.severity,
            }
        })
        .collect();

    Ok(Json(RenewalListResponse {
        entries,
        from: scan.from,
        to: scan.to,
        lapsed_count: scan.lapsed_count,
        upcoming_count: scan.upcoming_count,
    }))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::auth::SessionUser;
    use crate::test_utils::{create_test_customer, create_test_policy_ending, setup_test_state};
    use crate::web::router;
    use axum::body::Body;
    use axum::http::{Request, StatusCode};
    use tower::ServiceExt; // For oneshot()

    async fn fetch(app: axum::Router, uri: &str) -> serde_json::Value {
        let response = app
            .oneshot(
                Request::builder()
                    .uri(uri)
                    .body(Body::empty())
                    .expect("request"),
            )
            .await
            .expect("response");
        assert_eq!(response.status(), StatusCode::OK);
        let body = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .expect("body");
        serde_json::from_slice(&body).expect("json body")
    }

    #[tokio::test]
    async fn test_default_window_and_lookahead_override() -> crate::errors::Result<()> {
        let state = setup_test_state().await?;
        state.sessions.set(&SessionUser {
            id: 1,
            username: "admin".to_string(),
            full_name: "Sistem Yöneticisi".to_string(),
            status: "Aktif".to_string(),
        })?;

        let customer = create_test_customer(&state.db, "Ahmet Yılmaz").await?;
        let today = Utc::now().date_naive();
        create_test_policy_ending(&state.db, customer.id, "P-SOON", today + Duration::days(10))
            .await?;
        create_test_policy_ending(&state.db, customer.id, "P-LATER", today + Duration::days(45))
            .await?;
        create_test_policy_ending(&state.db, customer.id, "P-GONE", today - Duration::days(2))
            .await?;

        let app = router(state);

        // Default -5/+18 offsets window
        let body = fetch(app.clone(), "/api/renewals").await;
        assert_eq!(body["entries"].as_array().expect("entries").len(), 2);
        assert_eq!(body["lapsed_count"], 1);
        assert_eq!(body["upcoming_count"], 1);

        // Lookahead override reaches the later policy but not the lapsed one
        let body = fetch(app, "/api/renewals?lookahead=60").await;
        let numbers: Vec<&str> = body["entries"]
            .as_array()
            .expect("entries")
            .iter()
            .map(|e| e["policy_number"].as_str().expect("number"))
            .collect();
        assert_eq!(numbers, vec!["P-SOON", "P-LATER"]);
        Ok(())
    }
}
