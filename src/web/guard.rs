//! Session route guard.
//!
//! One consolidated guard protects every back-office route: it checks the
//! session store synchronously before the handler runs and injects the
//! signed-in user into the request extensions. No protected work happens
//! without a fresh check, so a sign-out takes effect on the very next
//! request.

use axum::{
    Json,
    extract::{Request, State},
    http::StatusCode,
    middleware::Next,
    response::Response,
};

use crate::web::models::ErrorResponse;
use crate::web::state::AppState;

/// Middleware that rejects requests without a session record.
///
/// # Errors
/// Returns 401 Unauthorized with a generic body when no session is
/// persisted; the caller is expected to navigate to the login view.
pub async fn require_session(
    State(state): State<AppState>,
    mut request: Request,
    next: Next,
) -> Result<Response, (StatusCode, Json<ErrorResponse>)> {
    let Some(user) = state.sessions.get() else {
        return Err((
            StatusCode::UNAUTHORIZED,
            Json(ErrorResponse {
                error: "Oturum açmanız gerekiyor".to_string(),
                code: Some("SESSION_REQUIRED".to_string()),
            }),
        ));
    };

    request.extensions_mut().insert(user);
    Ok(next.run(request).await)
}
