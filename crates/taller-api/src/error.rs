//! Error types for the resource API.

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

/// Error type for the resource API.
#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    /// Request data failed validation.
    #[error("Validation error: {0}")]
    Validation(String),

    /// A per-taller uniqueness rule was violated.
    #[error("Conflict: {0}")]
    Conflict(String),

    /// Row not found, or it belongs to another taller.
    #[error("{0}")]
    NotFound(&'static str),

    /// Internal server error.
    #[error("Internal server error: {0}")]
    Internal(String),

    /// Database error.
    #[error("Database error: {0}")]
    Database(#[from] DbError),
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, body) = match &self {
            ApiError::Validation(detail) | ApiError::Conflict(detail) => (
                StatusCode::BAD_REQUEST,
                ErrorBody {
                    message: "Datos inválidos.".to_string(),
                    error: Some(detail.clone()),
                },
            ),
            ApiError::NotFound(message) => (
                StatusCode::NOT_FOUND,
                ErrorBody {
                    message: (*message).to_string(),
                    error: None,
                },
            ),
            // A unique-constraint race lost at the storage layer is the
            // same conflict the pre-check would have reported.
            ApiError::Database(DbError::UniqueViolation(_)) => (
                StatusCode::BAD_REQUEST,
                ErrorBody {
                    message: "Datos inválidos.".to_string(),
                    error: Some("Ya existe un registro con ese valor.".to_string()),
                },
            ),
            ApiError::Internal(msg) => {
                tracing::error!("Internal error: {}", msg);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    ErrorBody {
                        message: "Ocurrió un error en el servidor.".to_string(),
                        error: Some("Error interno.".to_string()),
                    },
                )
            }
            ApiError::Database(e) => {
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

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_not_found_maps_to_404() {
        let response = ApiError::NotFound("Cliente no encontrado.").into_response();
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }

    #[test]
    fn test_validation_maps_to_400() {
        let response = ApiError::Validation("El nombre es obligatorio.".to_string()).into_response();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }

    #[test]
    fn test_unique_violation_maps_to_400() {
        let err = ApiError::Database(DbError::UniqueViolation("vehiculos_taller_placa_key".into()));
        let response = err.into_response();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }

    #[test]
    fn test_internal_error_hides_detail() {
        let response = ApiError::Internal("sqlx timed out talking to pg".to_string()).into_response();
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }
}
