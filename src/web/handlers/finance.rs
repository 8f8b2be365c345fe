//! Collections page handler.

use axum::{Json, extract::State};

use crate::core::{customer, finance};
use crate::web::handlers::{HandlerError, internal_error};
use crate::web::models::{FinanceResponse, FinanceRow};
use crate::web::state::AppState;

/// `GET /api/finance`
pub async fn view(State(state): State<AppState>) -> Result<Json<FinanceResponse>, HandlerError> {
    let ledger = finance::get_cash_policies(&state.db)
        .await
        .map_err(|e| internal_error("Finans verileri yüklenirken hata oluştu", &e))?;
    let customers = customer::get_all_customers(&state.db)
        .await
        .map_err(|e| internal_error("Müşteriler yüklenirken hata oluştu", &e))?;

    let summary = finance::summarize(&ledger);
    let policies = ledger
        .into_iter()
        .map(|p| {
            let customer_name = customer::display_name(&customers, p.customer_id);
            let customer_phone = customers
                .iter()
                .find(|c| c.id == p.customer_id)
                .and_then(|c| c.phone.clone());
            let outstanding = finance::outstanding(p.premium, p.amount_paid.unwrap_or(0.0));
            FinanceRow {
                policy: p,
                customer_name,
                customer_phone,
                outstanding,
            }
        })
        .collect();

    Ok(Json(FinanceResponse { policies, summary }))
}
