//! Handlers for the authentication endpoints.

use crate::error::ApiAuthError;
use crate::models::{LoginRequest, RegisterRequest, SesionResponse};
use crate::service::AuthService;
use axum::{Extension, Json};
use std::sync::Arc;

/// Handle taller registration.
///
/// Validates the request, creates the account and returns it together
/// with a signed token so the client is logged in immediately.
#[utoipa::path(
    post,
    path = "/auth/register",
    request_body = RegisterRequest,
    responses(
        (status = 200, description = "Account created", body = SesionResponse),
        (status = 400, description = "Validation failed or email already registered"),
    ),
    tag = "Autenticación"
)]
pub async fn register_handler(
    Extension(auth_service): Extension<Arc<AuthService>>,
    Json(request): Json<RegisterRequest>,
) -> Result<Json<SesionResponse>, ApiAuthError> {
    let session = auth_service.register(&request).await?;

    tracing::info!(taller_id = %session.id, "Registration completed");

    Ok(Json(session))
}

/// Handle taller login.
///
/// Unknown email and wrong password produce the identical 401 response.
#[utoipa::path(
    post,
    path = "/auth/login",
    request_body = LoginRequest,
    responses(
        (status = 200, description = "Login successful", body = SesionResponse),
        (status = 401, description = "Invalid credentials"),
    ),
    tag = "Autenticación"
)]
pub async fn login_handler(
    Extension(auth_service): Extension<Arc<AuthService>>,
    Json(request): Json<LoginRequest>,
) -> Result<Json<SesionResponse>, ApiAuthError> {
    let session = auth_service.login(&request).await?;

    Ok(Json(session))
}
