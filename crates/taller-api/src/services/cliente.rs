//! Cliente business rules.
//!
//! A blank cedula means "not provided": any number of clientes may have
//! one, and it is exempt from the per-taller uniqueness check.

use crate::error::ApiError;
use crate::models::{ClienteDto, CreateClienteRequest, UpdateClienteRequest};
use sqlx::PgPool;
use taller_core::TallerId;
use taller_db::{Cliente, ClienteChanges, NewCliente};
use uuid::Uuid;

const NOT_FOUND: &str = "Cliente no encontrado.";

/// Cliente operations, scoped to a taller on every call.
pub struct ClienteService {
    pool: PgPool,
}

impl ClienteService {
    #[must_use]
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// List all clientes of the taller.
    pub async fn list(&self, taller_id: TallerId) -> Result<Vec<ClienteDto>, ApiError> {
        let rows = Cliente::list(&self.pool, taller_id.into_uuid()).await?;
        Ok(rows.into_iter().map(ClienteDto::from).collect())
    }

    /// Fetch one cliente. A row of another taller reports not-found.
    pub async fn get(&self, taller_id: TallerId, id: Uuid) -> Result<ClienteDto, ApiError> {
        Cliente::find_by_id(&self.pool, taller_id.into_uuid(), id)
            .await?
            .map(ClienteDto::from)
            .ok_or(ApiError::NotFound(NOT_FOUND))
    }

    /// Create a cliente after validating nombre and cedula uniqueness.
    pub async fn create(
        &self,
        taller_id: TallerId,
        request: CreateClienteRequest,
    ) -> Result<ClienteDto, ApiError> {
        let nombre = request.nombre.trim().to_string();
        if nombre.is_empty() {
            return Err(ApiError::Validation(
                "El nombre del cliente es obligatorio.".to_string(),
            ));
        }

        let cedula = request.cedula.trim().to_string();
        if !cedula.is_empty()
            && Cliente::cedula_exists(&self.pool, taller_id.into_uuid(), &cedula, None).await?
        {
            return Err(ApiError::Conflict(
                "Ya existe un cliente con esa cédula.".to_string(),
            ));
        }

        let row = Cliente::create(
            &self.pool,
            taller_id.into_uuid(),
            &NewCliente {
                nombre,
                telefono: request.telefono,
                email: request.email,
                direccion: request.direccion,
                cedula,
            },
        )
        .await?;

        tracing::info!(taller_id = %taller_id, cliente_id = %row.id, "Cliente created");

        Ok(row.into())
    }

    /// Apply a sparse update. Supplied fields are validated; a cedula
    /// change re-checks uniqueness excluding the row itself.
    pub async fn update(
        &self,
        taller_id: TallerId,
        id: Uuid,
        request: UpdateClienteRequest,
    ) -> Result<ClienteDto, ApiError> {
        if let Some(ref nombre) = request.nombre {
            if nombre.trim().is_empty() {
                return Err(ApiError::Validation(
                    "El nombre del cliente es obligatorio.".to_string(),
                ));
            }
        }

        let cedula = request.cedula.map(|c| c.trim().to_string());
        if let Some(ref cedula) = cedula {
            if !cedula.is_empty()
                && Cliente::cedula_exists(&self.pool, taller_id.into_uuid(), cedula, Some(id))
                    .await?
            {
                return Err(ApiError::Conflict(
                    "Ya existe un cliente con esa cédula.".to_string(),
                ));
            }
        }

        let changes = ClienteChanges {
            nombre: request.nombre.map(|n| n.trim().to_string()),
            telefono: request.telefono,
            email: request.email,
            direccion: request.direccion,
            cedula,
        };

        Cliente::update(&self.pool, taller_id.into_uuid(), id, &changes)
            .await?
            .map(ClienteDto::from)
            .ok_or(ApiError::NotFound(NOT_FOUND))
    }

    /// Delete a cliente.
    pub async fn delete(&self, taller_id: TallerId, id: Uuid) -> Result<(), ApiError> {
        let deleted = Cliente::delete(&self.pool, taller_id.into_uuid(), id).await?;
        if !deleted {
            return Err(ApiError::NotFound(NOT_FOUND));
        }

        tracing::info!(taller_id = %taller_id, cliente_id = %id, "Cliente deleted");

        Ok(())
    }
}
