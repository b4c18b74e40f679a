//! Authentication handlers.

use axum::{
    extract::{rejection::JsonRejection, State},
    response::Json,
    routing::post,
    Router,
};
use serde_json::Value;

use crate::api::AppState;
use crate::domain::LoginDto;
use crate::errors::{AppError, AppResult};
use crate::services::TokenResponse;

/// Create authentication routes
pub fn auth_routes() -> Router<AppState> {
    Router::new().route("/login", post(login))
}

/// Login and get JWT token
///
/// The body is read as untyped JSON so that missing or mistyped fields are
/// reported as rule violations rather than deserialization errors.
#[utoipa::path(
    post,
    path = "/auth/login",
    tag = "Authentication",
    request_body = LoginDto,
    responses(
        (status = 200, description = "Login successful", body = TokenResponse),
        (status = 400, description = "Validation error"),
        (status = 401, description = "Invalid credentials")
    )
)]
pub async fn login(
    State(state): State<AppState>,
    payload: Result<Json<Value>, JsonRejection>,
) -> AppResult<Json<TokenResponse>> {
    let Json(payload) = payload.map_err(|e| AppError::bad_request(e.body_text()))?;

    let credentials = LoginDto::from_payload(&payload).map_err(|violations| {
        tracing::debug!(count = violations.len(), "Login payload rejected");
        AppError::from(violations)
    })?;

    let token = state.auth_service.login(credentials).await?;
    Ok(Json(token))
}
