//! Servicio DTOs.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use taller_db::Servicio;
use utoipa::ToSchema;
use uuid::Uuid;

/// A service record as returned by the API.
#[derive(Debug, Clone, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ServicioDto {
    pub id: Uuid,
    pub vehiculo_id: Uuid,
    pub fecha: NaiveDate,
    pub descripcion: String,
    pub costo: f64,
    pub mecanico: String,
    pub notas: String,
}

impl From<Servicio> for ServicioDto {
    fn from(row: Servicio) -> Self {
        Self {
            id: row.id,
            vehiculo_id: row.vehiculo_id,
            fecha: row.fecha,
            descripcion: row.descripcion,
            costo: row.costo,
            mecanico: row.mecanico,
            notas: row.notas,
        }
    }
}

/// Request to create a servicio.
#[derive(Debug, Clone, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CreateServicioRequest {
    pub vehiculo_id: Uuid,
    pub fecha: NaiveDate,
    #[serde(default)]
    pub descripcion: String,
    #[serde(default)]
    pub costo: f64,
    #[serde(default)]
    pub mecanico: String,
    #[serde(default)]
    pub notas: String,
}

/// Sparse update request: absent fields are left untouched.
#[derive(Debug, Clone, Default, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct UpdateServicioRequest {
    pub vehiculo_id: Option<Uuid>,
    pub fecha: Option<NaiveDate>,
    pub descripcion: Option<String>,
    pub costo: Option<f64>,
    pub mecanico: Option<String>,
    pub notas: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_create_request_parses_fecha() {
        let json = r#"{
            "vehiculoId": "550e8400-e29b-41d4-a716-446655440000",
            "fecha": "2026-08-01",
            "costo": 125.5
        }"#;

        let request: CreateServicioRequest = serde_json::from_str(json).unwrap();
        assert_eq!(request.fecha, NaiveDate::from_ymd_opt(2026, 8, 1).unwrap());
        assert_eq!(request.costo, 125.5);
        assert!(request.mecanico.is_empty());
    }
}
