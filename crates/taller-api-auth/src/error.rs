//! Error types for the authentication API.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;
use taller_db::DbError;
use utoipa::ToSchema;

/// JSON body returned for every error response.
#[derive(Debug, Serialize, ToSchema)]
pub struct ErrorBody {
    /// Human-readable message in Spanish.
    pub message: String,
    /// Additional detail, present for validation and conflict errors.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

/// Error type for the authentication API.
#[derive(Debug, thiserror::Error)]
pub enum ApiAuthError {
    /// Request data failed validation.
    #[error("Validation error: {0}")]
    Validation(String),

    /// A uniqueness rule was violated (duplicate email).
    #[error("Conflict: {0}")]
    Conflict(String),

    /// Unknown email or wrong password. Deliberately indistinguishable.
    #[error("Invalid credentials")]
    InvalidCredentials,

    /// Internal server error.
    #[error("Internal server error: {0}")]
    Internal(String),

    /// Database error.
    #[error("Database error: {0}")]
    Database(#[from] DbError),
}

impl IntoResponse for ApiAuthError {
    fn into_response(self) -> Response {
        let (status, body) = match &self {
            ApiAuthError::Validation(detail) => (
                StatusCode::BAD_REQUEST,
                ErrorBody {
                    message: "Datos inválidos.".to_string(),
                    error: Some(detail.clone()),
                },
            ),
            ApiAuthError::Conflict(detail) => (
                StatusCode::BAD_REQUEST,
                ErrorBody {
                    message: "Datos inválidos.".to_string(),
                    error: Some(detail.clone()),
                },
            ),
            ApiAuthError::InvalidCredentials => (
                StatusCode::UNAUTHORIZED,
                ErrorBody {
                    message: "Credenciales inválidas.".to_string(),
                    error: None,
                },
            ),
            ApiAuthError::Internal(msg) => {
                tracing::error!("Internal error: {}", msg);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    ErrorBody {
                        message: "Ocurrió un error en el servidor.".to_string(),
                        error: Some("Error interno.".to_string()),
                    },
                )
            }
            ApiAuthError::Database(e) => {
                tracing::error!("Database error: {:?}", e);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    ErrorBody {
                        message: "Ocurrió un error en el servidor.".to_string(),
                        error: Some("Error interno.".to_string()),
                    },
                )
            }
        };

        (status, Json(body)).into_response()
    }
}
