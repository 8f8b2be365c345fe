//! Cross-sell suggestion page handler.

use axum::{Json, extract::State};

use crate::core::{crosssell, customer, policy};
use crate::web::handlers::{HandlerError, internal_error};
use crate::web::state::AppState;

/// `GET /api/cross-sell`
pub async fn list(
    State(state): State<AppState>,
) -> Result<Json<Vec<crosssell::Suggestion>>, HandlerError> {
    let policies = policy::get_all_policies(&state.db)
        .await
        .map_err(|e| internal_error("Çapraz satış fırsatları yüklenirken hata oluştu", &e))?;
    let customers = customer::get_all_customers(&state.db)
        .await
        .map_err(|e| internal_error("Müşteriler yüklenirken hata oluştu", &e))?;

    Ok(Json(crosssell::suggestions(&policies, &customers)))
}
