//! Cliente DTOs.

use serde::{Deserialize, Serialize};
use taller_db::Cliente;
use utoipa::ToSchema;
use uuid::Uuid;

/// A cliente as returned by the API.
#[derive(Debug, Clone, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ClienteDto {
    pub id: Uuid,
    pub nombre: String,
    pub telefono: String,
    pub email: String,
    pub direccion: String,
    pub cedula: String,
}

impl From<Cliente> for ClienteDto {
    fn from(row: Cliente) -> Self {
        Self {
            id: row.id,
            nombre: row.nombre,
            telefono: row.telefono,
            email: row.email,
            direccion: row.direccion,
            cedula: row.cedula,
        }
    }
}

/// Request to create a cliente. Optional fields default to blank.
#[derive(Debug, Clone, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CreateClienteRequest {
    pub nombre: String,
    #[serde(default)]
    pub telefono: String,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub direccion: String,
    #[serde(default)]
    pub cedula: String,
}

/// Sparse update request: absent fields are left untouched.
#[derive(Debug, Clone, Default, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct UpdateClienteRequest {
    pub nombre: Option<String>,
    pub telefono: Option<String>,
    pub email: Option<String>,
    pub direccion: Option<String>,
    pub cedula: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_create_request_defaults_optional_fields() {
        let request: CreateClienteRequest =
            serde_json::from_str(r#"{"nombre": "Ana Pérez"}"#).unwrap();

        assert_eq!(request.nombre, "Ana Pérez");
        assert!(request.cedula.is_empty());
        assert!(request.telefono.is_empty());
    }

    #[test]
    fn test_update_request_absent_fields_are_none() {
        let request: UpdateClienteRequest =
            serde_json::from_str(r#"{"telefono": "8888-1234"}"#).unwrap();

        assert_eq!(request.telefono.as_deref(), Some("8888-1234"));
        assert!(request.nombre.is_none());
        assert!(request.cedula.is_none());
    }

    #[test]
    fn test_dto_serializes_camel_case() {
        let dto = ClienteDto {
            id: Uuid::new_v4(),
            nombre: "Ana".to_string(),
            telefono: String::new(),
            email: String::new(),
            direccion: String::new(),
            cedula: "1-1111-1111".to_string(),
        };

        let json = serde_json::to_value(&dto).unwrap();
        assert!(json.get("cedula").is_some());
        assert!(json.get("direccion").is_some());
    }
}
