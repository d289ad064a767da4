//! JWT authentication middleware.
//!
//! Extracts and validates the bearer token from the Authorization header,
//! then inserts `JwtClaims` and `TallerId` into request extensions so
//! handlers never touch the token themselves.

use axum::{
    body::Body,
    extract::Request,
    http::StatusCode,
    middleware::Next,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use taller_auth::{decode_token_with_config, ValidationConfig};
use taller_core::TallerId;

/// Signing secret and validation rules, injected as a request extension.
#[derive(Clone)]
pub struct JwtAuthConfig {
    /// HS256 signing secret.
    pub secret: String,
    /// Issuer/audience/leeway validation rules.
    pub validation: ValidationConfig,
}

impl JwtAuthConfig {
    /// Create a config validating the given issuer and audience.
    #[must_use]
    pub fn new(secret: impl Into<String>, issuer: &str, audience: &str) -> Self {
        Self {
            secret: secret.into(),
            validation: ValidationConfig::default()
                .issuer(issuer)
                .audience(vec![audience]),
        }
    }
}

fn unauthorized() -> Response {
    (
        StatusCode::UNAUTHORIZED,
        Json(json!({ "message": "No autorizado." })),
    )
        .into_response()
}

/// JWT authentication middleware.
///
/// 1. Extracts the Bearer token from the Authorization header
/// 2. Decodes and validates the JWT (signature, issuer, audience, expiry)
/// 3. Inserts `JwtClaims` and `TallerId` into request extensions
///
/// # Usage
///
/// ```rust,ignore
/// use axum::{Router, routing::get, middleware};
/// use taller_api_auth::jwt_auth_middleware;
///
/// let router = Router::new()
///     .route("/clientes", get(list_clientes_handler))
///     .layer(middleware::from_fn(jwt_auth_middleware));
/// ```
pub async fn jwt_auth_middleware(
    mut request: Request<Body>,
    next: Next,
) -> Result<Response, Response> {
    let config = request
        .extensions()
        .get::<JwtAuthConfig>()
        .ok_or_else(|| {
            tracing::error!("JWT auth config not configured");
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(json!({ "message": "Ocurrió un error en el servidor." })),
            )
                .into_response()
        })?
        .clone();

    let auth_header = request
        .headers()
        .get("Authorization")
        .and_then(|h| h.to_str().ok())
        .ok_or_else(unauthorized)?;

    let token = auth_header
        .strip_prefix("Bearer ")
        .ok_or_else(unauthorized)?;

    // Reject empty bearer tokens before attempting JWT decode.
    if token.is_empty() {
        tracing::warn!("Rejected empty bearer token");
        return Err(unauthorized());
    }

    let claims = decode_token_with_config(token, config.secret.as_bytes(), &config.validation)
        .map_err(|e| {
            tracing::warn!("JWT validation failed: {}", e);
            unauthorized()
        })?;

    // The tid claim is required; a token without it cannot be scoped.
    let taller_id = claims.taller_id().ok_or_else(|| {
        tracing::warn!("Missing taller ID in JWT claims");
        unauthorized()
    })?;

    request.extensions_mut().insert(claims);
    request.extensions_mut().insert::<TallerId>(taller_id);

    Ok(next.run(request).await)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_sets_issuer_and_audience() {
        let config = JwtAuthConfig::new("secret", "taller-api", "taller-clients");

        assert_eq!(config.validation.issuer.as_deref(), Some("taller-api"));
        assert_eq!(
            config.validation.audience,
            Some(vec!["taller-clients".to_string()])
        );
    }

    #[test]
    fn test_config_default_leeway() {
        let config = JwtAuthConfig::new("secret", "iss", "aud");
        assert_eq!(config.validation.leeway, 60);
    }
}
