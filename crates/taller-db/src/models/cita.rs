//! Cita model.
//!
//! Appointments reference a cliente of the same taller. The estado
//! column holds one of `Pendiente`, `Atendida` or `Cancelada`; the
//! report queries count rows per estado.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::{FromRow, PgPool};
use uuid::Uuid;

use crate::DbError;

/// An appointment in a taller.
#[derive(Debug, Clone, FromRow, Serialize, Deserialize)]
pub struct Cita {
    pub id: Uuid,
    pub taller_id: Uuid,
    pub cliente_id: Uuid,
    pub fecha_hora: DateTime<Utc>,
    pub descripcion: String,
    pub estado: String,
}

/// An appointment joined with the cliente's nombre and cedula.
#[derive(Debug, Clone, FromRow, Serialize, Deserialize)]
pub struct CitaConCliente {
    pub id: Uuid,
    pub taller_id: Uuid,
    pub cliente_id: Uuid,
    pub fecha_hora: DateTime<Utc>,
    pub descripcion: String,
    pub estado: String,
    pub cliente_nombre: String,
    pub cliente_cedula: String,
}

/// Fields for inserting a new cita.
#[derive(Debug, Clone)]
pub struct NewCita {
    pub cliente_id: Uuid,
    pub fecha_hora: DateTime<Utc>,
    pub descripcion: String,
    pub estado: String,
}

/// Sparse update: only `Some` fields are written.
#[derive(Debug, Clone, Default)]
pub struct CitaChanges {
    pub cliente_id: Option<Uuid>,
    pub fecha_hora: Option<DateTime<Utc>>,
    pub descripcion: Option<String>,
    pub estado: Option<String>,
}

impl CitaChanges {
    /// Returns `true` when no field is set.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cliente_id.is_none()
            && self.fecha_hora.is_none()
            && self.descripcion.is_none()
            && self.estado.is_none()
    }
}

const JOINED_COLUMNS: &str = "ci.id, ci.taller_id, ci.cliente_id, ci.fecha_hora, \
     ci.descripcion, ci.estado, c.nombre AS cliente_nombre, c.cedula AS cliente_cedula";

impl Cita {
    /// Lists all citas of a taller with cliente info, ordered by fecha_hora.
    pub async fn list_with_cliente(
        pool: &PgPool,
        taller_id: Uuid,
    ) -> Result<Vec<CitaConCliente>, DbError> {
        sqlx::query_as::<_, CitaConCliente>(&format!(
            r#"
            SELECT {JOINED_COLUMNS}
            FROM citas ci
            JOIN clientes c ON c.id = ci.cliente_id
            WHERE ci.taller_id = $1
            ORDER BY ci.fecha_hora
            "#
        ))
        .bind(taller_id)
        .fetch_all(pool)
        .await
        .map_err(DbError::QueryFailed)
    }

    /// Finds a cita by id within a taller, joined with cliente info.
    pub async fn find_with_cliente(
        pool: &PgPool,
        taller_id: Uuid,
        id: Uuid,
    ) -> Result<Option<CitaConCliente>, DbError> {
        sqlx::query_as::<_, CitaConCliente>(&format!(
            r#"
            SELECT {JOINED_COLUMNS}
            FROM citas ci
            JOIN clientes c ON c.id = ci.cliente_id
            WHERE ci.id = $1 AND ci.taller_id = $2
            "#
        ))
        .bind(id)
        .bind(taller_id)
        .fetch_optional(pool)
        .await
        .map_err(DbError::QueryFailed)
    }

    /// Checks whether the cita exists within a taller.
    pub async fn exists(pool: &PgPool, taller_id: Uuid, id: Uuid) -> Result<bool, DbError> {
        sqlx::query_scalar::<_, bool>(
            "SELECT EXISTS(SELECT 1 FROM citas WHERE id = $1 AND taller_id = $2)",
        )
        .bind(id)
        .bind(taller_id)
        .fetch_one(pool)
        .await
        .map_err(DbError::QueryFailed)
    }

    /// Inserts a new cita and returns the created row.
    pub async fn create(pool: &PgPool, taller_id: Uuid, new: &NewCita) -> Result<Self, DbError> {
        sqlx::query_as::<_, Self>(
            r#"
            INSERT INTO citas (id, taller_id, cliente_id, fecha_hora, descripcion, estado)
            VALUES ($1, $2, $3, $4, $5, $6)
            RETURNING id, taller_id, cliente_id, fecha_hora, descripcion, estado
            "#,
        )
        .bind(Uuid::new_v4())
        .bind(taller_id)
        .bind(new.cliente_id)
        .bind(new.fecha_hora)
        .bind(&new.descripcion)
        .bind(&new.estado)
        .fetch_one(pool)
        .await
        .map_err(DbError::from_query)
    }

    /// Applies a sparse update, returning `true` when a row was changed.
    pub async fn update(
        pool: &PgPool,
        taller_id: Uuid,
        id: Uuid,
        changes: &CitaChanges,
    ) -> Result<bool, DbError> {
        if changes.is_empty() {
            return Self::exists(pool, taller_id, id).await;
        }

        let mut sets: Vec<String> = Vec::new();
        let mut param_idx = 1;

        if changes.cliente_id.is_some() {
            sets.push(format!("cliente_id = ${param_idx}"));
            param_idx += 1;
        }
        if changes.fecha_hora.is_some() {
            sets.push(format!("fecha_hora = ${param_idx}"));
            param_idx += 1;
        }
        if changes.descripcion.is_some() {
            sets.push(format!("descripcion = ${param_idx}"));
            param_idx += 1;
        }
        if changes.estado.is_some() {
            sets.push(format!("estado = ${param_idx}"));
            param_idx += 1;
        }

        let sql = format!(
            "UPDATE citas SET {} WHERE id = ${} AND taller_id = ${}",
            sets.join(", "),
            param_idx,
            param_idx + 1
        );

        let mut query = sqlx::query(&sql);
        if let Some(cliente_id) = changes.cliente_id {
            query = query.bind(cliente_id);
        }
        if let Some(fecha_hora) = changes.fecha_hora {
            query = query.bind(fecha_hora);
        }
        if let Some(ref descripcion) = changes.descripcion {
            query = query.bind(descripcion);
        }
        if let Some(ref estado) = changes.estado {
            query = query.bind(estado);
        }

        let result = query
            .bind(id)
            .bind(taller_id)
            .execute(pool)
            .await
            .map_err(DbError::from_query)?;

        Ok(result.rows_affected() > 0)
    }

    /// Deletes a cita. Returns `true` when a row was removed.
    pub async fn delete(pool: &PgPool, taller_id: Uuid, id: Uuid) -> Result<bool, DbError> {
        let result = sqlx::query("DELETE FROM citas WHERE id = $1 AND taller_id = $2")
            .bind(id)
            .bind(taller_id)
            .execute(pool)
            .await
            .map_err(DbError::QueryFailed)?;

        Ok(result.rows_affected() > 0)
    }

    /// Counts all citas of a taller.
    pub async fn count(pool: &PgPool, taller_id: Uuid) -> Result<i64, DbError> {
        sqlx::query_scalar::<_, i64>("SELECT COUNT(*) FROM citas WHERE taller_id = $1")
            .bind(taller_id)
            .fetch_one(pool)
            .await
            .map_err(DbError::QueryFailed)
    }

    /// Counts the citas of a taller in a given estado.
    pub async fn count_by_estado(
        pool: &PgPool,
        taller_id: Uuid,
        estado: &str,
    ) -> Result<i64, DbError> {
        sqlx::query_scalar::<_, i64>(
            "SELECT COUNT(*) FROM citas WHERE taller_id = $1 AND estado = $2",
        )
        .bind(taller_id)
        .bind(estado)
        .fetch_one(pool)
        .await
        .map_err(DbError::QueryFailed)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_changes_is_empty() {
        assert!(CitaChanges::default().is_empty());

        let changes = CitaChanges {
            estado: Some("Atendida".to_string()),
            ..Default::default()
        };
        assert!(!changes.is_empty());
    }
}
