//! Material DTOs.

use serde::{Deserialize, Serialize};
use taller_db::Material;
use utoipa::ToSchema;
use uuid::Uuid;

/// An inventory item as returned by the API.
#[derive(Debug, Clone, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct MaterialDto {
    pub id: Uuid,
    pub nombre: String,
    pub descripcion: String,
    pub cantidad: i32,
    pub umbral_bajo: i32,
    pub precio_unitario: f64,
    pub categoria: String,
    pub proveedor: String,
}

impl From<Material> for MaterialDto {
    fn from(row: Material) -> Self {
        Self {
            id: row.id,
            nombre: row.nombre,
            descripcion: row.descripcion,
            cantidad: row.cantidad,
            umbral_bajo: row.umbral_bajo,
            precio_unitario: row.precio_unitario,
            categoria: row.categoria,
            proveedor: row.proveedor,
        }
    }
}

/// Request to create a material.
#[derive(Debug, Clone, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CreateMaterialRequest {
    pub nombre: String,
    #[serde(default)]
    pub descripcion: String,
    #[serde(default)]
    pub cantidad: i32,
    #[serde(default)]
    pub umbral_bajo: i32,
    #[serde(default)]
    pub precio_unitario: f64,
    #[serde(default)]
    pub categoria: String,
    #[serde(default)]
    pub proveedor: String,
}

/// Sparse update request: absent fields are left untouched.
#[derive(Debug, Clone, Default, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct UpdateMaterialRequest {
    pub nombre: Option<String>,
    pub descripcion: Option<String>,
    pub cantidad: Option<i32>,
    pub umbral_bajo: Option<i32>,
    pub precio_unitario: Option<f64>,
    pub categoria: Option<String>,
    pub proveedor: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_create_request_defaults() {
        let request: CreateMaterialRequest =
            serde_json::from_str(r#"{"nombre": "Aceite 10W40"}"#).unwrap();

        assert_eq!(request.nombre, "Aceite 10W40");
        assert_eq!(request.cantidad, 0);
        assert_eq!(request.precio_unitario, 0.0);
    }

    #[test]
    fn test_dto_serializes_umbral_bajo_camel_case() {
        let dto = MaterialDto {
            id: Uuid::new_v4(),
            nombre: "Aceite".to_string(),
            descripcion: String::new(),
            cantidad: 12,
            umbral_bajo: 3,
            precio_unitario: 8.5,
            categoria: "Lubricantes".to_string(),
            proveedor: String::new(),
        };

        let json = serde_json::to_value(&dto).unwrap();
        assert_eq!(json["umbralBajo"], 3);
        assert_eq!(json["precioUnitario"], 8.5);
    }
}
