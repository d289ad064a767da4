//! Servicio model.
//!
//! Service records document work performed on a vehicle. The fecha is a
//! calendar date and may not lie in the future (enforced by the service
//! layer).

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use sqlx::{FromRow, PgPool};
use uuid::Uuid;

use crate::DbError;

/// A service record of a taller.
#[derive(Debug, Clone, FromRow, Serialize, Deserialize)]
pub struct Servicio {
    pub id: Uuid,
    pub taller_id: Uuid,
    pub vehiculo_id: Uuid,
    pub fecha: NaiveDate,
    pub descripcion: String,
    pub costo: f64,
    pub mecanico: String,
    pub notas: String,
}

/// Fields for inserting a new servicio.
#[derive(Debug, Clone)]
pub struct NewServicio {
    pub vehiculo_id: Uuid,
    pub fecha: NaiveDate,
    pub descripcion: String,
    pub costo: f64,
    pub mecanico: String,
    pub notas: String,
}

/// Sparse update: only `Some` fields are written.
#[derive(Debug, Clone, Default)]
pub struct ServicioChanges {
    pub vehiculo_id: Option<Uuid>,
    pub fecha: Option<NaiveDate>,
    pub descripcion: Option<String>,
    pub costo: Option<f64>,
    pub mecanico: Option<String>,
    pub notas: Option<String>,
}

impl ServicioChanges {
    /// Returns `true` when no field is set.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.vehiculo_id.is_none()
            && self.fecha.is_none()
            && self.descripcion.is_none()
            && self.costo.is_none()
            && self.mecanico.is_none()
            && self.notas.is_none()
    }
}

const COLUMNS: &str = "id, taller_id, vehiculo_id, fecha, descripcion, costo, mecanico, notas";

impl Servicio {
    /// Lists all servicios of a taller, most recent first.
    pub async fn list(pool: &PgPool, taller_id: Uuid) -> Result<Vec<Self>, DbError> {
        sqlx::query_as::<_, Self>(&format!(
            "SELECT {COLUMNS} FROM servicios WHERE taller_id = $1 ORDER BY fecha DESC"
        ))
        .bind(taller_id)
        .fetch_all(pool)
        .await
        .map_err(DbError::QueryFailed)
    }

    /// Finds a servicio by id within a taller.
    pub async fn find_by_id(
        pool: &PgPool,
        taller_id: Uuid,
        id: Uuid,
    ) -> Result<Option<Self>, DbError> {
        sqlx::query_as::<_, Self>(&format!(
            "SELECT {COLUMNS} FROM servicios WHERE id = $1 AND taller_id = $2"
        ))
        .bind(id)
        .bind(taller_id)
        .fetch_optional(pool)
        .await
        .map_err(DbError::QueryFailed)
    }

    /// Inserts a new servicio and returns the created row.
    pub async fn create(
        pool: &PgPool,
        taller_id: Uuid,
        new: &NewServicio,
    ) -> Result<Self, DbError> {
        sqlx::query_as::<_, Self>(&format!(
            r#"
            INSERT INTO servicios (id, taller_id, vehiculo_id, fecha, descripcion, costo, mecanico, notas)
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8)
            RETURNING {COLUMNS}
            "#
        ))
        .bind(Uuid::new_v4())
        .bind(taller_id)
        .bind(new.vehiculo_id)
        .bind(new.fecha)
        .bind(&new.descripcion)
        .bind(new.costo)
        .bind(&new.mecanico)
        .bind(&new.notas)
        .fetch_one(pool)
        .await
        .map_err(DbError::from_query)
    }

    /// Applies a sparse update, returning the updated row.
    pub async fn update(
        pool: &PgPool,
        taller_id: Uuid,
        id: Uuid,
        changes: &ServicioChanges,
    ) -> Result<Option<Self>, DbError> {
        if changes.is_empty() {
            return Self::find_by_id(pool, taller_id, id).await;
        }

        let mut sets: Vec<String> = Vec::new();
        let mut param_idx = 1;

        for (field, set) in [
            ("vehiculo_id", changes.vehiculo_id.is_some()),
            ("fecha", changes.fecha.is_some()),
            ("descripcion", changes.descripcion.is_some()),
            ("costo", changes.costo.is_some()),
            ("mecanico", changes.mecanico.is_some()),
            ("notas", changes.notas.is_some()),
        ] {
            if set {
                sets.push(format!("{field} = ${param_idx}"));
                param_idx += 1;
            }
        }

        let sql = format!(
            "UPDATE servicios SET {} WHERE id = ${} AND taller_id = ${} RETURNING {COLUMNS}",
            sets.join(", "),
            param_idx,
            param_idx + 1
        );

        let mut query = sqlx::query_as::<_, Self>(&sql);
        if let Some(vehiculo_id) = changes.vehiculo_id {
            query = query.bind(vehiculo_id);
        }
        if let Some(fecha) = changes.fecha {
            query = query.bind(fecha);
        }
        if let Some(ref descripcion) = changes.descripcion {
            query = query.bind(descripcion);
        }
        if let Some(costo) = changes.costo {
            query = query.bind(costo);
        }
        if let Some(ref mecanico) = changes.mecanico {
            query = query.bind(mecanico);
        }
        if let Some(ref notas) = changes.notas {
            query = query.bind(notas);
        }

        query
            .bind(id)
            .bind(taller_id)
            .fetch_optional(pool)
            .await
            .map_err(DbError::from_query)
    }

    /// Deletes a servicio. Returns `true` when a row was removed.
    pub async fn delete(pool: &PgPool, taller_id: Uuid, id: Uuid) -> Result<bool, DbError> {
        let result = sqlx::query("DELETE FROM servicios WHERE id = $1 AND taller_id = $2")
            .bind(id)
            .bind(taller_id)
            .execute(pool)
            .await
            .map_err(DbError::QueryFailed)?;

        Ok(result.rows_affected() > 0)
    }
}
