//! Vehiculo model.
//!
//! Vehicles belong to a cliente of the same taller. The placa (license
//! plate) is unique per taller. Read paths join the owning cliente so
//! the API can return its nombre and cedula alongside the vehicle.

use serde::{Deserialize, Serialize};
use sqlx::{FromRow, PgPool};
use uuid::Uuid;

use crate::DbError;

/// A vehicle registered in a taller.
#[derive(Debug, Clone, FromRow, Serialize, Deserialize)]
pub struct Vehiculo {
    pub id: Uuid,
    pub taller_id: Uuid,
    pub cliente_id: Uuid,
    pub marca: String,
    pub modelo: String,
    pub anio: i32,
    pub placa: String,
    pub color: String,
    pub vin: String,
}

/// A vehicle joined with its owner's nombre and cedula.
#[derive(Debug, Clone, FromRow, Serialize, Deserialize)]
pub struct VehiculoConCliente {
    pub id: Uuid,
    pub taller_id: Uuid,
    pub cliente_id: Uuid,
    pub marca: String,
    pub modelo: String,
    pub anio: i32,
    pub placa: String,
    pub color: String,
    pub vin: String,
    pub cliente_nombre: String,
    pub cliente_cedula: String,
}

/// Fields for inserting a new vehiculo.
#[derive(Debug, Clone)]
pub struct NewVehiculo {
    pub cliente_id: Uuid,
    pub marca: String,
    pub modelo: String,
    pub anio: i32,
    pub placa: String,
    pub color: String,
    pub vin: String,
}

/// Sparse update: only `Some` fields are written.
#[derive(Debug, Clone, Default)]
pub struct VehiculoChanges {
    pub cliente_id: Option<Uuid>,
    pub marca: Option<String>,
    pub modelo: Option<String>,
    pub anio: Option<i32>,
    pub placa: Option<String>,
    pub color: Option<String>,
    pub vin: Option<String>,
}

impl VehiculoChanges {
    /// Returns `true` when no field is set.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cliente_id.is_none()
            && self.marca.is_none()
            && self.modelo.is_none()
            && self.anio.is_none()
            && self.placa.is_none()
            && self.color.is_none()
            && self.vin.is_none()
    }
}

const JOINED_COLUMNS: &str = "v.id, v.taller_id, v.cliente_id, v.marca, v.modelo, v.anio, \
     v.placa, v.color, v.vin, c.nombre AS cliente_nombre, c.cedula AS cliente_cedula";

impl Vehiculo {
    /// Lists all vehiculos of a taller with owner info, ordered by placa.
    pub async fn list_with_cliente(
        pool: &PgPool,
        taller_id: Uuid,
    ) -> Result<Vec<VehiculoConCliente>, DbError> {
        sqlx::query_as::<_, VehiculoConCliente>(&format!(
            r#"
            SELECT {JOINED_COLUMNS}
            FROM vehiculos v
            JOIN clientes c ON c.id = v.cliente_id
            WHERE v.taller_id = $1
            ORDER BY v.placa
            "#
        ))
        .bind(taller_id)
        .fetch_all(pool)
        .await
        .map_err(DbError::QueryFailed)
    }

    /// Finds a vehiculo by id within a taller, joined with owner info.
    pub async fn find_with_cliente(
        pool: &PgPool,
        taller_id: Uuid,
        id: Uuid,
    ) -> Result<Option<VehiculoConCliente>, DbError> {
        sqlx::query_as::<_, VehiculoConCliente>(&format!(
            r#"
            SELECT {JOINED_COLUMNS}
            FROM vehiculos v
            JOIN clientes c ON c.id = v.cliente_id
            WHERE v.id = $1 AND v.taller_id = $2
            "#
        ))
        .bind(id)
        .bind(taller_id)
        .fetch_optional(pool)
        .await
        .map_err(DbError::QueryFailed)
    }

    /// Checks whether the vehiculo exists within a taller.
    pub async fn exists(pool: &PgPool, taller_id: Uuid, id: Uuid) -> Result<bool, DbError> {
        sqlx::query_scalar::<_, bool>(
            "SELECT EXISTS(SELECT 1 FROM vehiculos WHERE id = $1 AND taller_id = $2)",
        )
        .bind(id)
        .bind(taller_id)
        .fetch_one(pool)
        .await
        .map_err(DbError::QueryFailed)
    }

    /// Checks whether a placa is already taken within a taller.
    pub async fn placa_exists(
        pool: &PgPool,
        taller_id: Uuid,
        placa: &str,
        exclude_id: Option<Uuid>,
    ) -> Result<bool, DbError> {
        sqlx::query_scalar::<_, bool>(
            r#"
            SELECT EXISTS(
                SELECT 1 FROM vehiculos
                WHERE taller_id = $1 AND placa = $2 AND ($3::uuid IS NULL OR id <> $3)
            )
            "#,
        )
        .bind(taller_id)
        .bind(placa)
        .bind(exclude_id)
        .fetch_one(pool)
        .await
        .map_err(DbError::QueryFailed)
    }

    /// Inserts a new vehiculo and returns the created row.
    pub async fn create(
        pool: &PgPool,
        taller_id: Uuid,
        new: &NewVehiculo,
    ) -> Result<Self, DbError> {
        sqlx::query_as::<_, Self>(
            r#"
            INSERT INTO vehiculos (id, taller_id, cliente_id, marca, modelo, anio, placa, color, vin)
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9)
            RETURNING id, taller_id, cliente_id, marca, modelo, anio, placa, color, vin
            "#,
        )
        .bind(Uuid::new_v4())
        .bind(taller_id)
        .bind(new.cliente_id)
        .bind(&new.marca)
        .bind(&new.modelo)
        .bind(new.anio)
        .bind(&new.placa)
        .bind(&new.color)
        .bind(&new.vin)
        .fetch_one(pool)
        .await
        .map_err(DbError::from_query)
    }

    /// Applies a sparse update, returning `true` when a row was changed.
    pub async fn update(
        pool: &PgPool,
        taller_id: Uuid,
        id: Uuid,
        changes: &VehiculoChanges,
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
        if changes.anio.is_some() {
            sets.push(format!("anio = ${param_idx}"));
            param_idx += 1;
        }
        for (field, value) in [
            ("marca", &changes.marca),
            ("modelo", &changes.modelo),
            ("placa", &changes.placa),
            ("color", &changes.color),
            ("vin", &changes.vin),
        ] {
            if value.is_some() {
                sets.push(format!("{field} = ${param_idx}"));
                param_idx += 1;
            }
        }

        let sql = format!(
            "UPDATE vehiculos SET {} WHERE id = ${} AND taller_id = ${}",
            sets.join(", "),
            param_idx,
            param_idx + 1
        );

        let mut query = sqlx::query(&sql);
        if let Some(cliente_id) = changes.cliente_id {
            query = query.bind(cliente_id);
        }
        if let Some(anio) = changes.anio {
            query = query.bind(anio);
        }
        for value in [
            &changes.marca,
            &changes.modelo,
            &changes.placa,
            &changes.color,
            &changes.vin,
        ]
        .into_iter()
        .flatten()
        {
            query = query.bind(value);
        }

        let result = query
            .bind(id)
            .bind(taller_id)
            .execute(pool)
            .await
            .map_err(DbError::from_query)?;

        Ok(result.rows_affected() > 0)
    }

    /// Deletes a vehiculo. Returns `true` when a row was removed.
    pub async fn delete(pool: &PgPool, taller_id: Uuid, id: Uuid) -> Result<bool, DbError> {
        let result = sqlx::query("DELETE FROM vehiculos WHERE id = $1 AND taller_id = $2")
            .bind(id)
            .bind(taller_id)
            .execute(pool)
            .await
            .map_err(DbError::QueryFailed)?;

        Ok(result.rows_affected() > 0)
    }

    /// Counts the vehiculos of a taller.
    pub async fn count(pool: &PgPool, taller_id: Uuid) -> Result<i64, DbError> {
        sqlx::query_scalar::<_, i64>("SELECT COUNT(*) FROM vehiculos WHERE taller_id = $1")
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
        assert!(VehiculoChanges::default().is_empty());

        let changes = VehiculoChanges {
            anio: Some(2020),
            ..Default::default()
        };
        assert!(!changes.is_empty());
    }
}
