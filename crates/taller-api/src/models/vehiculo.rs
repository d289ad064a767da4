//! Vehiculo DTOs.

use serde::{Deserialize, Serialize};
use taller_db::VehiculoConCliente;
use utoipa::ToSchema;
use uuid::Uuid;

/// A vehiculo as returned by the API, including owner info.
#[derive(Debug, Clone, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct VehiculoDto {
    pub id: Uuid,
    pub cliente_id: Uuid,
    pub cliente_nombre: String,
    pub cliente_cedula: String,
    pub marca: String,
    pub modelo: String,
    pub anio: i32,
    pub placa: String,
    pub color: String,
    pub vin: String,
}

impl From<VehiculoConCliente> for VehiculoDto {
    fn from(row: VehiculoConCliente) -> Self {
        Self {
            id: row.id,
            cliente_id: row.cliente_id,
            cliente_nombre: row.cliente_nombre,
            cliente_cedula: row.cliente_cedula,
            marca: row.marca,
            modelo: row.modelo,
            anio: row.anio,
            placa: row.placa,
            color: row.color,
            vin: row.vin,
        }
    }
}

/// Request to create a vehiculo.
#[derive(Debug, Clone, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CreateVehiculoRequest {
    pub cliente_id: Uuid,
    #[serde(default)]
    pub marca: String,
    #[serde(default)]
    pub modelo: String,
    pub anio: i32,
    pub placa: String,
    #[serde(default)]
    pub color: String,
    #[serde(default)]
    pub vin: String,
}

/// Sparse update request: absent fields are left untouched.
#[derive(Debug, Clone, Default, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct UpdateVehiculoRequest {
    pub cliente_id: Option<Uuid>,
    pub marca: Option<String>,
    pub modelo: Option<String>,
    pub anio: Option<i32>,
    pub placa: Option<String>,
    pub color: Option<String>,
    pub vin: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_create_request_camel_case() {
        let json = r#"{
            "clienteId": "550e8400-e29b-41d4-a716-446655440000",
            "anio": 2021,
            "placa": "ABC-123"
        }"#;

        let request: CreateVehiculoRequest = serde_json::from_str(json).unwrap();
        assert_eq!(request.placa, "ABC-123");
        assert_eq!(request.anio, 2021);
        assert!(request.vin.is_empty());
    }

    #[test]
    fn test_dto_carries_owner_fields() {
        let dto = VehiculoDto {
            id: Uuid::new_v4(),
            cliente_id: Uuid::new_v4(),
            cliente_nombre: "Ana".to_string(),
            cliente_cedula: "1-1111-1111".to_string(),
            marca: "Toyota".to_string(),
            modelo: "Hilux".to_string(),
            anio: 2021,
            placa: "ABC-123".to_string(),
            color: "rojo".to_string(),
            vin: String::new(),
        };

        let json = serde_json::to_value(&dto).unwrap();
        assert_eq!(json["clienteNombre"], "Ana");
        assert_eq!(json["clienteCedula"], "1-1111-1111");
    }
}
