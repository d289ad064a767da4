//! Taller model: the tenant and credential store.
//!
//! Each taller (workshop) is an isolated tenant. Its row carries the
//! registered email and the Argon2id password hash; all other tables
//! reference `talleres.id` through their `taller_id` column.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::{FromRow, PgPool};
use uuid::Uuid;

use crate::DbError;

/// A registered workshop account.
#[derive(Debug, Clone, FromRow, Serialize, Deserialize)]
pub struct Taller {
    /// Unique identifier for the taller.
    pub id: Uuid,

    /// Workshop display name.
    pub nombre: String,

    /// Login email. Unique across all talleres, compared case-insensitively.
    pub email: String,

    /// Argon2id password hash in PHC string format.
    #[serde(skip_serializing)]
    pub password_hash: String,

    /// Timestamp when the account was created.
    pub created_at: DateTime<Utc>,
}

impl Taller {
    /// Finds a taller by its ID.
    pub async fn find_by_id(pool: &PgPool, id: Uuid) -> Result<Option<Self>, DbError> {
        sqlx::query_as::<_, Self>(
            r#"
            SELECT id, nombre, email, password_hash, created_at
            FROM talleres
            WHERE id = $1
            "#,
        )
        .bind(id)
        .fetch_optional(pool)
        .await
        .map_err(DbError::QueryFailed)
    }

    /// Finds a taller by email (case-insensitive).
    pub async fn find_by_email(pool: &PgPool, email: &str) -> Result<Option<Self>, DbError> {
        sqlx::query_as::<_, Self>(
            r#"
            SELECT id, nombre, email, password_hash, created_at
            FROM talleres
            WHERE LOWER(email) = LOWER($1)
            "#,
        )
        .bind(email)
        .fetch_optional(pool)
        .await
        .map_err(DbError::QueryFailed)
    }

    /// Checks whether an email is already registered (case-insensitive).
    pub async fn email_exists(pool: &PgPool, email: &str) -> Result<bool, DbError> {
        sqlx::query_scalar::<_, bool>(
            r#"
            SELECT EXISTS(SELECT 1 FROM talleres WHERE LOWER(email) = LOWER($1))
            "#,
        )
        .bind(email)
        .fetch_one(pool)
        .await
        .map_err(DbError::QueryFailed)
    }

    /// Inserts a new taller and returns the created row.
    ///
    /// A concurrent registration with the same email surfaces as
    /// `DbError::UniqueViolation` from the email constraint.
    pub async fn create(
        pool: &PgPool,
        nombre: &str,
        email: &str,
        password_hash: &str,
    ) -> Result<Self, DbError> {
        sqlx::query_as::<_, Self>(
            r#"
            INSERT INTO talleres (id, nombre, email, password_hash)
            VALUES ($1, $2, $3, $4)
            RETURNING id, nombre, email, password_hash, created_at
            "#,
        )
        .bind(Uuid::new_v4())
        .bind(nombre)
        .bind(email)
        .bind(password_hash)
        .fetch_one(pool)
        .await
        .map_err(DbError::from_query)
    }
}
