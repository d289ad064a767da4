//! Cita business rules.
//!
//! The referenced cliente must belong to the same taller, the fecha_hora
//! may not lie in the past, and the estado is restricted to three values.

use crate::error::ApiError;
use crate::models::{CitaDto, CreateCitaRequest, UpdateCitaRequest};
use chrono::{DateTime, Utc};
use sqlx::PgPool;
use taller_core::TallerId;
use taller_db::{Cita, CitaChanges, Cliente, NewCita};
use uuid::Uuid;

const NOT_FOUND: &str = "Cita no encontrada.";

/// Estado a new cita gets when none is supplied.
pub const ESTADO_PENDIENTE: &str = "Pendiente";

/// The accepted estado values.
pub const ESTADOS: [&str; 3] = ["Pendiente", "Atendida", "Cancelada"];

/// Cita operations, scoped to a taller on every call.
pub struct CitaService {
    pool: PgPool,
}

impl CitaService {
    #[must_use]
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// List all citas of the taller with cliente info.
    pub async fn list(&self, taller_id: TallerId) -> Result<Vec<CitaDto>, ApiError> {
        let rows = Cita::list_with_cliente(&self.pool, taller_id.into_uuid()).await?;
        Ok(rows.into_iter().map(CitaDto::from).collect())
    }

    /// Fetch one cita.
    pub async fn get(&self, taller_id: TallerId, id: Uuid) -> Result<CitaDto, ApiError> {
        Cita::find_with_cliente(&self.pool, taller_id.into_uuid(), id)
            .await?
            .map(CitaDto::from)
            .ok_or(ApiError::NotFound(NOT_FOUND))
    }

    /// Create a cita after validating cliente, fecha_hora and estado.
    pub async fn create(
        &self,
        taller_id: TallerId,
        request: CreateCitaRequest,
    ) -> Result<CitaDto, ApiError> {
        self.ensure_cliente_exists(taller_id, request.cliente_id)
            .await?;
        validate_fecha_hora(request.fecha_hora)?;

        let estado = match request.estado {
            Some(estado) => validate_estado(&estado)?,
            None => ESTADO_PENDIENTE.to_string(),
        };

        let row = Cita::create(
            &self.pool,
            taller_id.into_uuid(),
            &NewCita {
                cliente_id: request.cliente_id,
                fecha_hora: request.fecha_hora,
                descripcion: request.descripcion,
                estado,
            },
        )
        .await?;

        tracing::info!(taller_id = %taller_id, cita_id = %row.id, "Cita created");

        self.get(taller_id, row.id).await
    }

    /// Apply a sparse update, validating every supplied field.
    pub async fn update(
        &self,
        taller_id: TallerId,
        id: Uuid,
        request: UpdateCitaRequest,
    ) -> Result<CitaDto, ApiError> {
        if let Some(cliente_id) = request.cliente_id {
            self.ensure_cliente_exists(taller_id, cliente_id).await?;
        }
        if let Some(fecha_hora) = request.fecha_hora {
            validate_fecha_hora(fecha_hora)?;
        }

        let estado = match request.estado {
            Some(estado) => Some(validate_estado(&estado)?),
            None => None,
        };

        let changes = CitaChanges {
            cliente_id: request.cliente_id,
            fecha_hora: request.fecha_hora,
            descripcion: request.descripcion,
            estado,
        };

        let updated = Cita::update(&self.pool, taller_id.into_uuid(), id, &changes).await?;
        if !updated {
            return Err(ApiError::NotFound(NOT_FOUND));
        }

        self.get(taller_id, id).await
    }

    /// Delete a cita.
    pub async fn delete(&self, taller_id: TallerId, id: Uuid) -> Result<(), ApiError> {
        let deleted = Cita::delete(&self.pool, taller_id.into_uuid(), id).await?;
        if !deleted {
            return Err(ApiError::NotFound(NOT_FOUND));
        }

        tracing::info!(taller_id = %taller_id, cita_id = %id, "Cita deleted");

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

fn validate_fecha_hora(fecha_hora: DateTime<Utc>) -> Result<(), ApiError> {
    if fecha_hora < Utc::now() {
        Err(ApiError::Validation(
            "La fecha y hora de la cita no puede estar en el pasado.".to_string(),
        ))
    } else {
        Ok(())
    }
}

fn validate_estado(estado: &str) -> Result<String, ApiError> {
    let estado = estado.trim();
    if ESTADOS.contains(&estado) {
        Ok(estado.to_string())
    } else {
        Err(ApiError::Validation(format!(
            "El estado debe ser uno de: {}.",
            ESTADOS.join(", ")
        )))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Duration;

    #[test]
    fn test_fecha_hora_in_the_past_rejected() {
        let past = Utc::now() - Duration::hours(1);
        assert!(validate_fecha_hora(past).is_err());
    }

    #[test]
    fn test_fecha_hora_in_the_future_accepted() {
        let future = Utc::now() + Duration::hours(1);
        assert!(validate_fecha_hora(future).is_ok());
    }

    #[test]
    fn test_estado_accepts_known_values() {
        assert_eq!(validate_estado("Pendiente").unwrap(), "Pendiente");
        assert_eq!(validate_estado("Atendida").unwrap(), "Atendida");
        assert_eq!(validate_estado("Cancelada").unwrap(), "Cancelada");
    }

    #[test]
    fn test_estado_rejects_unknown_values() {
        assert!(validate_estado("EnProceso").is_err());
        assert!(validate_estado("pendiente").is_err());
        assert!(validate_estado("").is_err());
    }

    #[test]
    fn test_estado_trims_whitespace() {
        assert_eq!(validate_estado("  Atendida  ").unwrap(), "Atendida");
    }
}
