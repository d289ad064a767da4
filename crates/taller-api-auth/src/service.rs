//! Registration and login service.
//!
//! Holds the pool, the password hasher and the token settings. Login
//! returns the same error for unknown email and wrong password so the
//! response never reveals which one failed.

use crate::error::ApiAuthError;
use crate::models::{LoginRequest, RegisterRequest, SesionResponse};
use crate::validation::{validate_email, validate_password};
use sqlx::PgPool;
use taller_auth::{encode_token, JwtClaims, PasswordHasher};
use taller_core::TallerId;
use taller_db::{DbError, Taller};

/// Token lifetime: 8 hours.
pub const TOKEN_TTL_SECS: i64 = 8 * 60 * 60;

/// Settings for issuing tokens.
#[derive(Debug, Clone)]
pub struct TokenSettings {
    /// HS256 signing secret.
    pub secret: String,
    /// Value of the `iss` claim.
    pub issuer: String,
    /// Value of the `aud` claim.
    pub audience: String,
}

/// Registration and login operations.
pub struct AuthService {
    pool: PgPool,
    hasher: PasswordHasher,
    tokens: TokenSettings,
}

impl AuthService {
    /// Create a new auth service.
    #[must_use]
    pub fn new(pool: PgPool, tokens: TokenSettings) -> Self {
        Self {
            pool,
            hasher: PasswordHasher::new(),
            tokens,
        }
    }

    /// Register a new taller account.
    ///
    /// Validates the request, rejects duplicate emails, hashes the
    /// password with Argon2id and returns the account with a fresh token.
    pub async fn register(
        &self,
        request: &RegisterRequest,
    ) -> Result<SesionResponse, ApiAuthError> {
        let nombre = request.nombre.trim();
        let email = request.email.trim();

        if nombre.is_empty() {
            return Err(ApiAuthError::Validation(
                "El nombre es obligatorio.".to_string(),
            ));
        }

        validate_email(email).map_err(|e| ApiAuthError::Validation(e.message))?;

        if request.password.trim().is_empty() {
            return Err(ApiAuthError::Validation(
                "La contraseña es obligatoria.".to_string(),
            ));
        }

        if request.password != request.confirm_password {
            return Err(ApiAuthError::Validation(
                "Las contraseñas no coinciden.".to_string(),
            ));
        }

        validate_password(&request.password).map_err(|e| ApiAuthError::Validation(e.message))?;

        if Taller::email_exists(&self.pool, email).await? {
            return Err(ApiAuthError::Conflict(
                "El correo ya está registrado.".to_string(),
            ));
        }

        let password_hash = self
            .hasher
            .hash(&request.password)
            .map_err(|e| ApiAuthError::Internal(e.to_string()))?;

        // A concurrent registration can still win the race; the email
        // constraint turns that into a UniqueViolation here.
        let taller = match Taller::create(&self.pool, nombre, email, &password_hash).await {
            Ok(taller) => taller,
            Err(DbError::UniqueViolation(_)) => {
                return Err(ApiAuthError::Conflict(
                    "El correo ya está registrado.".to_string(),
                ));
            }
            Err(e) => return Err(e.into()),
        };

        tracing::info!(taller_id = %taller.id, "Taller registered");

        self.build_session(taller)
    }

    /// Authenticate a taller by email and password.
    pub async fn login(&self, request: &LoginRequest) -> Result<SesionResponse, ApiAuthError> {
        let email = request.email.trim();

        let taller = Taller::find_by_email(&self.pool, email)
            .await?
            .ok_or(ApiAuthError::InvalidCredentials)?;

        let matches = self
            .hasher
            .verify(&request.password, &taller.password_hash)
            .map_err(|e| ApiAuthError::Internal(e.to_string()))?;

        if !matches {
            tracing::info!(taller_id = %taller.id, "Login failed: wrong password");
            return Err(ApiAuthError::InvalidCredentials);
        }

        tracing::info!(taller_id = %taller.id, "Login succeeded");

        self.build_session(taller)
    }

    /// Issue a token for the taller and assemble the session response.
    fn build_session(&self, taller: Taller) -> Result<SesionResponse, ApiAuthError> {
        let claims = JwtClaims::builder()
            .subject(&taller.email)
            .issuer(&self.tokens.issuer)
            .audience(vec![self.tokens.audience.clone()])
            .taller_id(TallerId::from_uuid(taller.id))
            .email(&taller.email)
            .nombre(&taller.nombre)
            .expires_in_secs(TOKEN_TTL_SECS)
            .build();

        let token = encode_token(&claims, self.tokens.secret.as_bytes())
            .map_err(|e| ApiAuthError::Internal(e.to_string()))?;

        Ok(SesionResponse {
            id: taller.id,
            nombre: taller.nombre,
            email: taller.email,
            token,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_token_ttl_is_eight_hours() {
        assert_eq!(TOKEN_TTL_SECS, 28800);
    }

    #[test]
    fn test_token_settings_clone() {
        let settings = TokenSettings {
            secret: "s".to_string(),
            issuer: "taller-api".to_string(),
            audience: "taller-clients".to_string(),
        };
        let cloned = settings.clone();
        assert_eq!(cloned.issuer, "taller-api");
    }
}
