//! Material business rules.
//!
//! The nombre is unique per taller (case-insensitive); quantities and
//! prices may not be negative.

use crate::error::ApiError;
use crate::models::{CreateMaterialRequest, MaterialDto, UpdateMaterialRequest};
use sqlx::PgPool;
use taller_core::TallerId;
use taller_db::{Material, MaterialChanges, NewMaterial};
use uuid::Uuid;

const NOT_FOUND: &str = "Material no encontrado.";

/// Material operations, scoped to a taller on every call.
pub struct MaterialService {
    pool: PgPool,
}

impl MaterialService {
    #[must_use]
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// List all materiales of the taller.
    pub async fn list(&self, taller_id: TallerId) -> Result<Vec<MaterialDto>, ApiError> {
        let rows = Material::list(&self.pool, taller_id.into_uuid()).await?;
        Ok(rows.into_iter().map(MaterialDto::from).collect())
    }

    /// Fetch one material.
    pub async fn get(&self, taller_id: TallerId, id: Uuid) -> Result<MaterialDto, ApiError> {
        Material::find_by_id(&self.pool, taller_id.into_uuid(), id)
            .await?
            .map(MaterialDto::from)
            .ok_or(ApiError::NotFound(NOT_FOUND))
    }

    /// Create a material after validating nombre, amounts and uniqueness.
    pub async fn create(
        &self,
        taller_id: TallerId,
        request: CreateMaterialRequest,
    ) -> Result<MaterialDto, ApiError> {
        let nombre = request.nombre.trim().to_string();
        if nombre.is_empty() {
            return Err(ApiError::Validation(
                "El nombre del material es obligatorio.".to_string(),
            ));
        }

        validate_cantidad(request.cantidad)?;
        validate_umbral(request.umbral_bajo)?;
        validate_precio(request.precio_unitario)?;

        if Material::nombre_exists(&self.pool, taller_id.into_uuid(), &nombre, None).await? {
            return Err(ApiError::Conflict(
                "Ya existe un material con ese nombre.".to_string(),
            ));
        }

        let row = Material::create(
            &self.pool,
            taller_id.into_uuid(),
            &NewMaterial {
                nombre,
                descripcion: request.descripcion,
                cantidad: request.cantidad,
                umbral_bajo: request.umbral_bajo,
                precio_unitario: request.precio_unitario,
                categoria: request.categoria,
                proveedor: request.proveedor,
            },
        )
        .await?;

        tracing::info!(taller_id = %taller_id, material_id = %row.id, "Material created");

        Ok(row.into())
    }

    /// Apply a sparse update, validating every supplied field.
    pub async fn update(
        &self,
        taller_id: TallerId,
        id: Uuid,
        request: UpdateMaterialRequest,
    ) -> Result<MaterialDto, ApiError> {
        let nombre = request.nombre.map(|n| n.trim().to_string());
        if let Some(ref nombre) = nombre {
            if nombre.is_empty() {
                return Err(ApiError::Validation(
                    "El nombre del material es obligatorio.".to_string(),
                ));
            }
            if Material::nombre_exists(&self.pool, taller_id.into_uuid(), nombre, Some(id)).await? {
                return Err(ApiError::Conflict(
                    "Ya existe un material con ese nombre.".to_string(),
                ));
            }
        }

        if let Some(cantidad) = request.cantidad {
            validate_cantidad(cantidad)?;
        }
        if let Some(umbral) = request.umbral_bajo {
            validate_umbral(umbral)?;
        }
        if let Some(precio) = request.precio_unitario {
            validate_precio(precio)?;
        }

        let changes = MaterialChanges {
            nombre,
            descripcion: request.descripcion,
            cantidad: request.cantidad,
            umbral_bajo: request.umbral_bajo,
            precio_unitario: request.precio_unitario,
            categoria: request.categoria,
            proveedor: request.proveedor,
        };

        Material::update(&self.pool, taller_id.into_uuid(), id, &changes)
            .await?
            .map(MaterialDto::from)
            .ok_or(ApiError::NotFound(NOT_FOUND))
    }

    /// Delete a material.
    pub async fn delete(&self, taller_id: TallerId, id: Uuid) -> Result<(), ApiError> {
        let deleted = Material::delete(&self.pool, taller_id.into_uuid(), id).await?;
        if !deleted {
            return Err(ApiError::NotFound(NOT_FOUND));
        }

        tracing::info!(taller_id = %taller_id, material_id = %id, "Material deleted");

        Ok(())
    }
}

fn validate_cantidad(cantidad: i32) -> Result<(), ApiError> {
    if cantidad < 0 {
        Err(ApiError::Validation(
            "La cantidad no puede ser negativa.".to_string(),
        ))
    } else {
        Ok(())
    }
}

fn validate_umbral(umbral: i32) -> Result<(), ApiError> {
    if umbral < 0 {
        Err(ApiError::Validation(
            "El umbral bajo no puede ser negativo.".to_string(),
        ))
    } else {
        Ok(())
    }
}

fn validate_precio(precio: f64) -> Result<(), ApiError> {
    if precio < 0.0 {
        Err(ApiError::Validation(
            "El precio unitario no puede ser negativo.".to_string(),
        ))
    } else {
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_negative_amounts_rejected() {
        assert!(validate_cantidad(-1).is_err());
        assert!(validate_umbral(-1).is_err());
        assert!(validate_precio(-0.01).is_err());
    }

    #[test]
    fn test_zero_amounts_accepted() {
        assert!(validate_cantidad(0).is_ok());
        assert!(validate_umbral(0).is_ok());
        assert!(validate_precio(0.0).is_ok());
    }
}
