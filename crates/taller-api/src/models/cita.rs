//! Cita DTOs.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use taller_db::CitaConCliente;
use utoipa::ToSchema;
use uuid::Uuid;

/// An appointment as returned by the API, including cliente info.
#[derive(Debug, Clone, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CitaDto {
    pub id: Uuid,
    pub cliente_id: Uuid,
    pub cliente_nombre: String,
    pub cliente_cedula: String,
    pub fecha_hora: DateTime<Utc>,
    pub descripcion: String,
    pub estado: String,
}

impl From<CitaConCliente> for CitaDto {
    fn from(row: CitaConCliente) -> Self {
        Self {
            id: row.id,
            cliente_id: row.cliente_id,
            cliente_nombre: row.cliente_nombre,
            cliente_cedula: row.cliente_cedula,
            fecha_hora: row.fecha_hora,
            descripcion: row.descripcion,
            estado: row.estado,
        }
    }
}

/// Request to create a cita. Estado defaults to `Pendiente`.
#[derive(Debug, Clone, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CreateCitaRequest {
    pub cliente_id: Uuid,
    pub fecha_hora: DateTime<Utc>,
    #[serde(default)]
    pub descripcion: String,
    pub estado: Option<String>,
}

/// Sparse update request: absent fields are left untouched.
#[derive(Debug, Clone, Default, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct UpdateCitaRequest {
    pub cliente_id: Option<Uuid>,
    pub fecha_hora: Option<DateTime<Utc>>,
    pub descripcion: Option<String>,
    pub estado: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_create_request_parses_fecha_hora() {
        let json = r#"{
            "clienteId": "550e8400-e29b-41d4-a716-446655440000",
            "fechaHora": "2030-06-15T14:30:00Z",
            "descripcion": "Cambio de aceite"
        }"#;

        let request: CreateCitaRequest = serde_json::from_str(json).unwrap();
        assert_eq!(request.descripcion, "Cambio de aceite");
        assert!(request.estado.is_none());
    }

    #[test]
    fn test_dto_serializes_fecha_hora_camel_case() {
        let dto = CitaDto {
            id: Uuid::new_v4(),
            cliente_id: Uuid::new_v4(),
            cliente_nombre: "Ana".to_string(),
            cliente_cedula: String::new(),
            fecha_hora: Utc::now(),
            descripcion: String::new(),
            estado: "Pendiente".to_string(),
        };

        let json = serde_json::to_value(&dto).unwrap();
        assert!(json.get("fechaHora").is_some());
        assert_eq!(json["estado"], "Pendiente");
    }
}
