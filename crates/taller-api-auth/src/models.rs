//! Request and response DTOs for the authentication endpoints.

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

/// Registration request.
#[derive(Debug, Clone, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct RegisterRequest {
    /// Workshop display name.
    pub nombre: String,
    /// Login email.
    pub email: String,
    /// Plaintext password. Hashed before storage, never logged.
    pub password: String,
    /// Must match `password`.
    pub confirm_password: String,
}

/// Login request.
#[derive(Debug, Clone, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

/// Successful registration/login response: the account plus a signed token.
#[derive(Debug, Clone, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct SesionResponse {
    pub id: Uuid,
    pub nombre: String,
    pub email: String,
    pub token: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_register_request_camel_case() {
        let json = r#"{
            "nombre": "Taller Central",
            "email": "central@example.com",
            "password": "Secreta1",
            "confirmPassword": "Secreta1"
        }"#;

        let request: RegisterRequest = serde_json::from_str(json).unwrap();
        assert_eq!(request.nombre, "Taller Central");
        assert_eq!(request.confirm_password, "Secreta1");
    }

    #[test]
    fn test_sesion_response_serializes_camel_case() {
        let response = SesionResponse {
            id: Uuid::new_v4(),
            nombre: "Taller Central".to_string(),
            email: "central@example.com".to_string(),
            token: "header.payload.signature".to_string(),
        };

        let json = serde_json::to_value(&response).unwrap();
        assert!(json.get("nombre").is_some());
        assert!(json.get("token").is_some());
        // No snake_case leakage
        assert!(json.get("password_hash").is_none());
    }
}
