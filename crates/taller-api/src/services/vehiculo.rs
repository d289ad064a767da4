//! Vehiculo business rules.
//!
//! The referenced cliente must belong to the same taller, the placa is
//! unique per taller, anio must be plausible and a non-blank VIN must
//! have the standard 17 characters.

use crate::error::ApiError;
use crate::models::{CreateVehiculoRequest, UpdateVehiculoRequest, VehiculoDto};
use chrono::{Datelike, Utc};
use sqlx::PgPool;
use taller_core::TallerId;
use taller_db::{Cliente, NewVehiculo, Vehiculo, VehiculoChanges};
use uuid::Uuid;

const NOT_FOUND: &str = "Vehículo no encontrado.";

/// Oldest accepted model year.
const MIN_ANIO: i32 = 1950;

/// Length of a standard VIN.
const VIN_LENGTH: usize = 17;

/// Vehiculo operations, scoped to a taller on every call.
pub struct VehiculoService {
    pool: PgPool,
}

impl VehiculoService {
    #[must_use]
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// List all vehiculos of the taller with owner info.
    pub async fn list(&self, taller_id: TallerId) -> Result<Vec<VehiculoDto>, ApiError> {
        let rows = Vehiculo::list_with_cliente(&self.pool, taller_id.into_uuid()).await?;
        Ok(rows.into_iter().map(VehiculoDto::from).collect())
    }

    /// Fetch one vehiculo.
    pub async fn get(&self, taller_id: TallerId, id: Uuid) -> Result<VehiculoDto, ApiError> {
        Vehiculo::find_with_cliente(&self.pool, taller_id.into_uuid(), id)
            .await?
            .map(VehiculoDto::from)
            .ok_or(ApiError::NotFound(NOT_FOUND))
    }

    /// Create a vehiculo after validating owner, anio, placa and VIN.
    pub async fn create(
        &self,
        taller_id: TallerId,
        request: CreateVehiculoRequest,
    ) -> Result<VehiculoDto, ApiError> {
        self.ensure_cliente_exists(taller_id, request.cliente_id)
            .await?;
        validate_anio(request.anio)?;

        let placa = request.placa.trim().to_string();
        if placa.is_empty() {
            return Err(ApiError::Validation(
                "La placa del vehículo es obligatoria.".to_string(),
            ));
        }

        let vin = request.vin.trim().to_string();
        validate_vin(&vin)?;

        if Vehiculo::placa_exists(&self.pool, taller_id.into_uuid(), &placa, None).await? {
            return Err(ApiError::Conflict(
                "Ya existe un vehículo con esa placa.".to_string(),
            ));
        }

        let row = Vehiculo::create(
            &self.pool,
            taller_id.into_uuid(),
            &NewVehiculo {
                cliente_id: request.cliente_id,
                marca: request.marca,
                modelo: request.modelo,
                anio: request.anio,
                placa,
                color: request.color,
                vin,
            },
        )
        .await?;

        tracing::info!(taller_id = %taller_id, vehiculo_id = %row.id, "Vehiculo created");

        self.get(taller_id, row.id).await
    }

    /// Apply a sparse update, validating every supplied field.
    pub async fn update(
        &self,
        taller_id: TallerId,
        id: Uuid,
        request: UpdateVehiculoRequest,
    ) -> Result<VehiculoDto, ApiError> {
        if let Some(cliente_id) = request.cliente_id {
            self.ensure_cliente_exists(taller_id, cliente_id).await?;
        }
        if let Some(anio) = request.anio {
            validate_anio(anio)?;
        }

        let placa = request.placa.map(|p| p.trim().to_string());
        if let Some(ref placa) = placa {
            if placa.is_empty() {
                return Err(ApiError::Validation(
                    "La placa del vehículo es obligatoria.".to_string(),
                ));
            }
            if Vehiculo::placa_exists(&self.pool, taller_id.into_uuid(), placa, Some(id)).await? {
                return Err(ApiError::Conflict(
                    "Ya existe un vehículo con esa placa.".to_string(),
                ));
            }
        }

        let vin = request.vin.map(|v| v.trim().to_string());
        if let Some(ref vin) = vin {
            validate_vin(vin)?;
        }

        let changes = VehiculoChanges {
            cliente_id: request.cliente_id,
            marca: request.marca,
            modelo: request.modelo,
            anio: request.anio,
            placa,
            color: request.color,
            vin,
        };

        let updated = Vehiculo::update(&self.pool, taller_id.into_uuid(), id, &changes).await?;
        if !updated {
            return Err(ApiError::NotFound(NOT_FOUND));
        }

        self.get(taller_id, id).await
    }

    /// Delete a vehiculo.
    pub async fn delete(&self, taller_id: TallerId, id: Uuid) -> Result<(), ApiError> {
        let deleted = Vehiculo::delete(&self.pool, taller_id.into_uuid(), id).await?;
        if !deleted {
            return Err(ApiError::NotFound(NOT_FOUND));
        }

        tracing::info!(taller_id = %taller_id, vehiculo_id = %id, "Vehiculo deleted");

        Ok(())
    }

    async fn ensure_cliente_exists(
        &self,
        taller_id: TallerId,
        cliente_id: Uuid,
    ) -> Result<(), ApiError> {
        let exists = Cliente::find_by_id(&self.pool, taller_id.into_uuid(), cliente_id)
            .await?
            .is_some();

        if exists {
            Ok(())
        } else {
            Err(ApiError::Validation(
                "El cliente especificado no existe.".to_string(),
            ))
        }
    }
}

fn validate_anio(anio: i32) -> Result<(), ApiError> {
    let max = Utc::now().year();
    if (MIN_ANIO..=max).contains(&anio) {
        Ok(())
    } else {
        Err(ApiError::Validation(format!(
            "El año debe estar entre {MIN_ANIO} y {max}."
        )))
    }
}

fn validate_vin(vin: &str) -> Result<(), ApiError> {
    if vin.is_empty() || vin.chars().count() == VIN_LENGTH {
        Ok(())
    } else {
        Err(ApiError::Validation(
            "El VIN debe tener exactamente 17 caracteres.".to_string(),
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_anio_bounds() {
        assert!(validate_anio(1950).is_ok());
        assert!(validate_anio(Utc::now().year()).is_ok());

        assert!(validate_anio(1949).is_err());
        assert!(validate_anio(Utc::now().year() + 1).is_err());
    }

    #[test]
    fn test_vin_blank_is_accepted() {
        assert!(validate_vin("").is_ok());
    }

    #[test]
    fn test_vin_length() {
        assert!(validate_vin("1HGCM82633A004352").is_ok());
        assert!(validate_vin("SHORT").is_err());
        assert!(validate_vin("1HGCM82633A004352X").is_err());
    }
}
