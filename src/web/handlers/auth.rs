//! Login view handlers.
//!
//! A successful login persists the session record; every failure cause
//! collapses to the same generic message so usernames cannot be probed.

use axum::{Extension, Json, extract::State, http::StatusCode};
use tracing::info;

use crate::core::auth::{self, SessionUser};
use crate::web::handlers::{HandlerError, internal_error};
use crate::web::models::{ErrorResponse, LoginRequest, LoginResponse};
use crate::web::state::AppState;

/// `POST /api/login`
pub async fn login(
    State(state): State<AppState>,
    Json(body): Json<LoginRequest>,
) -> Result<Json<LoginResponse>, HandlerError> {
    let user = auth::authenticate(&state.db, &body.username, &body.password)
        .await
        .map_err(|e| internal_error("Giriş yapılırken hata oluştu", &e))?;

    let Some(user) = user else {
        return Err((
            StatusCode::UNAUTHORIZED,
            Json(ErrorResponse {
                error: "Geçersiz kullanıcı adı veya şifre".to_string(),
                code: Some("INVALID_CREDENTIALS".to_string()),
            }),
        ));
    };

    state
        .sessions
        .set(&user)
        .map_err(|e| internal_error("Oturum kaydedilirken hata oluştu", &e))?;

    info!("User {} signed in", user.username);
    Ok(Json(LoginResponse { user }))
}

/// `POST /api/logout`
pub async fn logout(State(state): State<AppState>) -> Result<StatusCode, HandlerError> {
    state
        .sessions
        .clear()
        .map_err(|e| internal_error("Oturum kapatılırken hata oluştu", &e))?;
    Ok(StatusCode::NO_CONTENT)
}

/// `GET /api/me`
pub async fn me(Extension(user): Extension<SessionUser>) -> Json<SessionUser> {
    Json(user)
}
