//! Material model.
//!
//! Inventory items. The nombre is unique per taller; cantidad and
//! umbral_bajo track stock against a low-stock threshold.

use serde::{Deserialize, Serialize};
use sqlx::{FromRow, PgPool};
use uuid::Uuid;

use crate::DbError;

/// An inventory item of a taller.
#[derive(Debug, Clone, FromRow, Serialize, Deserialize)]
pub struct Material {
    pub id: Uuid,
    pub taller_id: Uuid,
    pub nombre: String,
    pub descripcion: String,
    pub cantidad: i32,
    pub umbral_bajo: i32,
    pub precio_unitario: f64,
    pub categoria: String,
    pub proveedor: String,
}

/// Fields for inserting a new material.
#[derive(Debug, Clone)]
pub struct NewMaterial {
    pub nombre: String,
    pub descripcion: String,
    pub cantidad: i32,
    pub umbral_bajo: i32,
    pub precio_unitario: f64,
    pub categoria: String,
    pub proveedor: String,
}

/// Sparse update: only `Some` fields are written.
#[derive(Debug, Clone, Default)]
pub struct MaterialChanges {
    pub nombre: Option<String>,
    pub descripcion: Option<String>,
    pub cantidad: Option<i32>,
    pub umbral_bajo: Option<i32>,
    pub precio_unitario: Option<f64>,
    pub categoria: Option<String>,
    pub proveedor: Option<String>,
}

impl MaterialChanges {
    /// Returns `true` when no field is set.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.nombre.is_none()
            && self.descripcion.is_none()
            && self.cantidad.is_none()
            && self.umbral_bajo.is_none()
            && self.precio_unitario.is_none()
            && self.categoria.is_none()
            && self.proveedor.is_none()
    }
}

const COLUMNS: &str =
    "id, taller_id, nombre, descripcion, cantidad, umbral_bajo, precio_unitario, categoria, proveedor";

impl Material {
    /// Lists all materiales of a taller, ordered by nombre.
    pub async fn list(pool: &PgPool, taller_id: Uuid) -> Result<Vec<Self>, DbError> {
        sqlx::query_as::<_, Self>(&format!(
            "SELECT {COLUMNS} FROM materiales WHERE taller_id = $1 ORDER BY nombre"
        ))
        .bind(taller_id)
        .fetch_all(pool)
        .await
        .map_err(DbError::QueryFailed)
    }

    /// Finds a material by id within a taller.
    pub async fn find_by_id(
        pool: &PgPool,
        taller_id: Uuid,
        id: Uuid,
    ) -> Result<Option<Self>, DbError> {
        sqlx::query_as::<_, Self>(&format!(
            "SELECT {COLUMNS} FROM materiales WHERE id = $1 AND taller_id = $2"
        ))
        .bind(id)
        .bind(taller_id)
        .fetch_optional(pool)
        .await
        .map_err(DbError::QueryFailed)
    }

    /// Checks whether a nombre is already taken within a taller.
    pub async fn nombre_exists(
        pool: &PgPool,
        taller_id: Uuid,
        nombre: &str,
        exclude_id: Option<Uuid>,
    ) -> Result<bool, DbError> {
        sqlx::query_scalar::<_, bool>(
            r#"
            SELECT EXISTS(
                SELECT 1 FROM materiales
                WHERE taller_id = $1 AND LOWER(nombre) = LOWER($2)
                  AND ($3::uuid IS NULL OR id <> $3)
            )
            "#,
        )
        .bind(taller_id)
        .bind(nombre)
        .bind(exclude_id)
        .fetch_one(pool)
        .await
        .map_err(DbError::QueryFailed)
    }

    /// Inserts a new material and returns the created row.
    pub async fn create(
        pool: &PgPool,
        taller_id: Uuid,
        new: &NewMaterial,
    ) -> Result<Self, DbError> {
        sqlx::query_as::<_, Self>(&format!(
            r#"
            INSERT INTO materiales
                (id, taller_id, nombre, descripcion, cantidad, umbral_bajo, precio_unitario, categoria, proveedor)
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9)
            RETURNING {COLUMNS}
            "#
        ))
        .bind(Uuid::new_v4())
        .bind(taller_id)
        .bind(&new.nombre)
        .bind(&new.descripcion)
        .bind(new.cantidad)
        .bind(new.umbral_bajo)
        .bind(new.precio_unitario)
        .bind(&new.categoria)
        .bind(&new.proveedor)
        .fetch_one(pool)
        .await
        .map_err(DbError::from_query)
    }

    /// Applies a sparse update, returning the updated row.
    pub async fn update(
        pool: &PgPool,
        taller_id: Uuid,
        id: Uuid,
        changes: &MaterialChanges,
    ) -> Result<Option<Self>, DbError> {
        if changes.is_empty() {
            return Self::find_by_id(pool, taller_id, id).await;
        }

        let mut sets: Vec<String> = Vec::new();
        let mut param_idx = 1;

        for (field, set) in [
            ("nombre", changes.nombre.is_some()),
            ("descripcion", changes.descripcion.is_some()),
            ("cantidad", changes.cantidad.is_some()),
            ("umbral_bajo", changes.umbral_bajo.is_some()),
            ("precio_unitario", changes.precio_unitario.is_some()),
            ("categoria", changes.categoria.is_some()),
            ("proveedor", changes.proveedor.is_some()),
        ] {
            if set {
                sets.push(format!("{field} = ${param_idx}"));
                param_idx += 1;
            }
        }

        let sql = format!(
            "UPDATE materiales SET {} WHERE id = ${} AND taller_id = ${} RETURNING {COLUMNS}",
            sets.join(", "),
            param_idx,
            param_idx + 1
        );

        let mut query = sqlx::query_as::<_, Self>(&sql);
        if let Some(ref nombre) = changes.nombre {
            query = query.bind(nombre);
        }
        if let Some(ref descripcion) = changes.descripcion {
            query = query.bind(descripcion);
        }
        if let Some(cantidad) = changes.cantidad {
            query = query.bind(cantidad);
        }
        if let Some(umbral_bajo) = changes.umbral_bajo {
            query = query.bind(umbral_bajo);
        }
        if let Some(precio_unitario) = changes.precio_unitario {
            query = query.bind(precio_unitario);
        }
        if let Some(ref categoria) = changes.categoria {
            query = query.bind(categoria);
        }
        if let Some(ref proveedor) = changes.proveedor {
            query = query.bind(proveedor);
        }

        query
            .bind(id)
            .bind(taller_id)
            .fetch_optional(pool)
            .await
            .map_err(DbError::from_query)
    }

    /// Deletes a material. Returns `true` when a row was removed.
    pub async fn delete(pool: &PgPool, taller_id: Uuid, id: Uuid) -> Result<bool, DbError> {
        let result = sqlx::query("DELETE FROM materiales WHERE id = $1 AND taller_id = $2")
            .bind(id)
            .bind(taller_id)
            .execute(pool)
            .await
            .map_err(DbError::QueryFailed)?;

        Ok(result.rows_affected() > 0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_changes_is_empty() {
        assert!(MaterialChanges::default().is_empty());

        let changes = MaterialChanges {
            cantidad: Some(10),
            ..Default::default()
        };
        assert!(!changes.is_empty());
    }
}
