//! Servicio business rules.
//!
//! The referenced vehiculo must belong to the same taller, the fecha may
//! not lie in the future and the costo may not be negative.

use crate::error::ApiError;
use crate::models::{CreateServicioRequest, ServicioDto, UpdateServicioRequest};
use chrono::{NaiveDate, Utc};
use sqlx::PgPool;
use taller_core::TallerId;
use taller_db::{NewServicio, Servicio, ServicioChanges, Vehiculo};
use uuid::Uuid;

const NOT_FOUND: &str = "Servicio no encontrado.";

/// Servicio operations, scoped to a taller on every call.
pub struct ServicioService {
    pool: PgPool,
}

impl ServicioService {
    #[must_use]
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// List all servicios of the taller.
    pub async fn list(&self, taller_id: TallerId) -> Result<Vec<ServicioDto>, ApiError> {
        let rows = Servicio::list(&self.pool, taller_id.into_uuid()).await?;
        Ok(rows.into_iter().map(ServicioDto::from).collect())
    }

    /// Fetch one servicio.
    pub async fn get(&self, taller_id: TallerId, id: Uuid) -> Result<ServicioDto, ApiError> {
        Servicio::find_by_id(&self.pool, taller_id.into_uuid(), id)
            .await?
            .map(ServicioDto::from)
            .ok_or(ApiError::NotFound(NOT_FOUND))
    }

    /// Create a servicio after validating vehiculo, fecha and costo.
    pub async fn create(
        &self,
        taller_id: TallerId,
        request: CreateServicioRequest,
    ) -> Result<ServicioDto, ApiError> {
        self.ensure_vehiculo_exists(taller_id, request.vehiculo_id)
            .await?;
        validate_fecha(request.fecha)?;
        validate_costo(request.costo)?;

        let row = Servicio::create(
            &self.pool,
            taller_id.into_uuid(),
            &NewServicio {
                vehiculo_id: request.vehiculo_id,
                fecha: request.fecha,
                descripcion: request.descripcion,
                costo: request.costo,
                mecanico: request.mecanico,
                notas: request.notas,
            },
        )
        .await?;

        tracing::info!(taller_id = %taller_id, servicio_id = %row.id, "Servicio created");

        Ok(row.into())
    }

    /// Apply a sparse update, validating every supplied field.
    pub async fn update(
        &self,
        taller_id: TallerId,
        id: Uuid,
        request: UpdateServicioRequest,
    ) -> Result<ServicioDto, ApiError> {
        if let Some(vehiculo_id) = request.vehiculo_id {
            self.ensure_vehiculo_exists(taller_id, vehiculo_id).await?;
        }
        if let Some(fecha) = request.fecha {
            validate_fecha(fecha)?;
        }
        if let Some(costo) = request.costo {
            validate_costo(costo)?;
        }

        let changes = ServicioChanges {
            vehiculo_id: request.vehiculo_id,
            fecha: request.fecha,
            descripcion: request.descripcion,
            costo: request.costo,
            mecanico: request.mecanico,
            notas: request.notas,
        };

        Servicio::update(&self.pool, taller_id.into_uuid(), id, &changes)
            .await?
            .map(ServicioDto::from)
            .ok_or(ApiError::NotFound(NOT_FOUND))
    }

    /// Delete a servicio.
    pub async fn delete(&self, taller_id: TallerId, id: Uuid) -> Result<(), ApiError> {
        let deleted = Servicio::delete(&self.pool, taller_id.into_uuid(), id).await?;
        if !deleted {
            return Err(ApiError::NotFound(NOT_FOUND));
        }

        tracing::info!(taller_id = %taller_id, servicio_id = %id, "Servicio deleted");

        Ok(())
    }

    async fn ensure_vehiculo_exists(
        &self,
        taller_id: TallerId,
        vehiculo_id: Uuid,
    ) -> Result<(), ApiError> {
        if Vehiculo::exists(&self.pool, taller_id.into_uuid(), vehiculo_id).await? {
            Ok(())
        } else {
            Err(ApiError::Validation(
                "El vehículo especificado no existe.".to_string(),
            ))
        }
    }
}

fn validate_fecha(fecha: NaiveDate) -> Result<(), ApiError> {
    if fecha > Utc::now().date_naive() {
        Err(ApiError::Validation(
            "La fecha del servicio no puede estar en el futuro.".to_string(),
        ))
    } else {
        Ok(())
    }
}

fn validate_costo(costo: f64) -> Result<(), ApiError> {
    if costo < 0.0 {
        Err(ApiError::Validation(
            "El costo no puede ser negativo.".to_string(),
        ))
    } else {
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Duration;

    #[test]
    fn test_fecha_today_accepted() {
        assert!(validate_fecha(Utc::now().date_naive()).is_ok());
    }

    #[test]
    fn test_fecha_in_the_past_accepted() {
        let past = Utc::now().date_naive() - Duration::days(30);
        assert!(validate_fecha(past).is_ok());
    }

    #[test]
    fn test_fecha_in_the_future_rejected() {
        let future = Utc::now().date_naive() + Duration::days(1);
        assert!(validate_fecha(future).is_err());
    }

    #[test]
    fn test_costo_negative_rejected() {
        assert!(validate_costo(-1.0).is_err());
        assert!(validate_costo(0.0).is_ok());
    }
}
