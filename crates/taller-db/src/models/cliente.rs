//! Cliente model.
//!
//! Clientes are the workshop's customers. The cedula (national ID) is
//! unique per taller when non-blank; a blank cedula means "not provided"
//! and never conflicts.

use serde::{Deserialize, Serialize};
use sqlx::{FromRow, PgPool};
use uuid::Uuid;

use crate::DbError;

/// A customer of a taller.
#[derive(Debug, Clone, FromRow, Serialize, Deserialize)]
pub struct Cliente {
    pub id: Uuid,
    pub taller_id: Uuid,
    pub nombre: String,
    pub telefono: String,
    pub email: String,
    pub direccion: String,
    pub cedula: String,
}

/// Fields for inserting a new cliente.
#[derive(Debug, Clone)]
pub struct NewCliente {
    pub nombre: String,
    pub telefono: String,
    pub email: String,
    pub direccion: String,
    pub cedula: String,
}

/// Sparse update: only `Some` fields are written.
#[derive(Debug, Clone, Default)]
pub struct ClienteChanges {
    pub nombre: Option<String>,
    pub telefono: Option<String>,
    pub email: Option<String>,
    pub direccion: Option<String>,
    pub cedula: Option<String>,
}

impl ClienteChanges {
    /// Returns `true` when no field is set.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.nombre.is_none()
            && self.telefono.is_none()
            && self.email.is_none()
            && self.direccion.is_none()
            && self.cedula.is_none()
    }
}

const COLUMNS: &str = "id, taller_id, nombre, telefono, email, direccion, cedula";

impl Cliente {
    /// Lists all clientes of a taller, ordered by nombre.
    pub async fn list(pool: &PgPool, taller_id: Uuid) -> Result<Vec<Self>, DbError> {
        sqlx::query_as::<_, Self>(&format!(
            "SELECT {COLUMNS} FROM clientes WHERE taller_id = $1 ORDER BY nombre"
        ))
        .bind(taller_id)
        .fetch_all(pool)
        .await
        .map_err(DbError::QueryFailed)
    }

    /// Finds a cliente by id within a taller.
    pub async fn find_by_id(
        pool: &PgPool,
        taller_id: Uuid,
        id: Uuid,
    ) -> Result<Option<Self>, DbError> {
        sqlx::query_as::<_, Self>(&format!(
            "SELECT {COLUMNS} FROM clientes WHERE id = $1 AND taller_id = $2"
        ))
        .bind(id)
        .bind(taller_id)
        .fetch_optional(pool)
        .await
        .map_err(DbError::QueryFailed)
    }

    /// Checks whether a non-blank cedula is already taken within a taller.
    ///
    /// `exclude_id` skips the row being updated so a cliente never
    /// conflicts with itself.
    pub async fn cedula_exists(
        pool: &PgPool,
        taller_id: Uuid,
        cedula: &str,
        exclude_id: Option<Uuid>,
    ) -> Result<bool, DbError> {
        sqlx::query_scalar::<_, bool>(
            r#"
            SELECT EXISTS(
                SELECT 1 FROM clientes
                WHERE taller_id = $1 AND cedula = $2 AND ($3::uuid IS NULL OR id <> $3)
            )
            "#,
        )
        .bind(taller_id)
        .bind(cedula)
        .bind(exclude_id)
        .fetch_one(pool)
        .await
        .map_err(DbError::QueryFailed)
    }

    /// Inserts a new cliente and returns the created row.
    pub async fn create(
        pool: &PgPool,
        taller_id: Uuid,
        new: &NewCliente,
    ) -> Result<Self, DbError> {
        sqlx::query_as::<_, Self>(&format!(
            r#"
            INSERT INTO clientes (id, taller_id, nombre, telefono, email, direccion, cedula)
            VALUES ($1, $2, $3, $4, $5, $6, $7)
            RETURNING {COLUMNS}
            "#
        ))
        .bind(Uuid::new_v4())
        .bind(taller_id)
        .bind(&new.nombre)
        .bind(&new.telefono)
        .bind(&new.email)
        .bind(&new.direccion)
        .bind(&new.cedula)
        .fetch_one(pool)
        .await
        .map_err(DbError::from_query)
    }

    /// Applies a sparse update, returning the updated row.
    ///
    /// `None` means the row does not exist in this taller. With no fields
    /// set, the current row is returned unchanged.
    pub async fn update(
        pool: &PgPool,
        taller_id: Uuid,
        id: Uuid,
        changes: &ClienteChanges,
    ) -> Result<Option<Self>, DbError> {
        if changes.is_empty() {
            return Self::find_by_id(pool, taller_id, id).await;
        }

        let mut sets: Vec<String> = Vec::new();
        let mut param_idx = 1;

        for (field, value) in [
            ("nombre", &changes.nombre),
            ("telefono", &changes.telefono),
            ("email", &changes.email),
            ("direccion", &changes.direccion),
            ("cedula", &changes.cedula),
        ] {
            if value.is_some() {
                sets.push(format!("{field} = ${param_idx}"));
                param_idx += 1;
            }
        }

        let sql = format!(
            "UPDATE clientes SET {} WHERE id = ${} AND taller_id = ${} RETURNING {COLUMNS}",
            sets.join(", "),
            param_idx,
            param_idx + 1
        );

        let mut query = sqlx::query_as::<_, Self>(&sql);
        for value in [
            &changes.nombre,
            &changes.telefono,
            &changes.email,
            &changes.direccion,
            &changes.cedula,
        ]
        .into_iter()
        .flatten()
        {
            query = query.bind(value);
        }

        query
            .bind(id)
            .bind(taller_id)
            .fetch_optional(pool)
            .await
            .map_err(DbError::from_query)
    }

    /// Deletes a cliente. Returns `true` when a row was removed.
    pub async fn delete(pool: &PgPool, taller_id: Uuid, id: Uuid) -> Result<bool, DbError> {
        let result = sqlx::query("DELETE FROM clientes WHERE id = $1 AND taller_id = $2")
            .bind(id)
            .bind(taller_id)
            .execute(pool)
            .await
            .map_err(DbError::QueryFailed)?;

        Ok(result.rows_affected() > 0)
    }

    /// Counts the clientes of a taller.
    pub async fn count(pool: &PgPool, taller_id: Uuid) -> Result<i64, DbError> {
        sqlx::query_scalar::<_, i64>("SELECT COUNT(*) FROM clientes WHERE taller_id = $1")
            .bind(taller_id)
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
        let changes = ClienteChanges::default();
        assert!(changes.is_empty());

        let changes = ClienteChanges {
            cedula: Some("1-234".to_string()),
            ..Default::default()
        };
        assert!(!changes.is_empty());
    }
}
