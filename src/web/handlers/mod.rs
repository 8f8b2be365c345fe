//! HTTP handler implementations, one module per back-office page.

/// Login, logout, current user
pub mod auth;
/// Cross-sell suggestion page
pub mod crosssell;
/// Dashboard stat cards
pub mod dashboard;
/// Collections page
pub mod finance;
/// Policy entry and listing
pub mod policies;
/// Renewal tracking page
pub mod renewals;
/// Reports page and CSV export
pub mod reports;

use axum::Json;
use axum::http::StatusCode;
use tracing::error;

use crate::errors::Error;
use crate::web::models::ErrorResponse;

/// Error shape shared by every handler
pub type HandlerError = (StatusCode, Json<ErrorResponse>);

/// Logs a store failure and maps it to a generic 500 body.
///
/// The caller supplies the page-specific message; the underlying cause
/// stays in the logs only.
pub(crate) fn internal_error(message: &str, e: &Error) -> HandlerError {
    error!("{message}: {e}");
    (
        StatusCode::INTERNAL_SERVER_ERROR,
        Json(ErrorResponse {
            error: message.to_string(),
            code: Some("STORE_ERROR".to_string()),
        }),
    )
}
