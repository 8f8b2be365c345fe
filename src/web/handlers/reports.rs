//! Reports page handlers: portfolio aggregates and the CSV download.

use axum::{
    Json,
    extract::State,
    http::header,
    response::{IntoResponse, Response},
};
use chrono::Utc;

use crate::core::{customer, policy, report};
use crate::web::handlers::{HandlerError, internal_error};
use crate::web::state::AppState;

/// `GET /api/reports`
pub async fn summary(
    State(state): State<AppState>,
) -> Result<Json<report::PortfolioReport>, HandlerError> {
    let policies = policy::get_all_policies(&state.db)
        .await
        .map_err(|e| internal_error("Rapor yüklenirken hata oluştu", &e))?;

    Ok(Json(report::build_report(&policies)))
}

/// `GET /api/reports/export`
///
/// Streams the portfolio as a BOM-prefixed CSV attachment named with the
/// export date.
pub async fn export(State(state): State<AppState>) -> Result<Response, HandlerError> {
    let policies = policy::get_all_policies(&state.db)
        .await
        .map_err(|e| internal_error("Rapor yüklenirken hata oluştu", &e))?;
    let customers = customer::get_all_customers(&state.db)
        .await
        .map_err(|e| internal_error("Müşteriler yüklenirken hata oluştu", &e))?;

    let csv = report::export_csv(&policies, &customers);
    let filename = report::csv_filename(Utc::now().date_naive());

    Ok((
        [
            (header::CONTENT_TYPE, "text/csv; charset=utf-8".to_string()),
            (
                header::CONTENT_DISPOSITION,
                format!("attachment; filename=\"{filename}\""),
            ),
        ],
        csv,
    )
        .into_response())
}
