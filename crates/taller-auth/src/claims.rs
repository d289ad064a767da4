//! JWT claims structure with standard and custom claims.
//!
//! Provides the `JwtClaims` struct containing RFC 7519 standard claims
//! plus the custom claims the workshop API relies on (`tid`, `email`,
//! `nombre`).

use chrono::{Duration, Utc};
use serde::{Deserialize, Serialize};
use taller_core::TallerId;
use uuid::Uuid;

/// JWT claims containing standard and custom claims.
///
/// # Standard Claims (RFC 7519)
///
/// - `sub`: Subject (the account email)
/// - `iss`: Issuer
/// - `aud`: Audience
/// - `exp`: Expiration time (Unix timestamp)
/// - `iat`: Issued at (Unix timestamp)
/// - `jti`: JWT ID (unique identifier)
///
/// # Custom Claims
///
/// - `tid`: Taller ID (multi-tenant isolation)
/// - `email`: Account email
/// - `nombre`: Workshop display name
///
/// # Example
///
/// ```rust
/// use taller_auth::JwtClaims;
/// use taller_core::TallerId;
///
/// let claims = JwtClaims::builder()
///     .subject("taller@example.com")
///     .issuer("taller-api")
///     .audience(vec!["taller-clients"])
///     .taller_id(TallerId::new())
///     .expires_in_secs(3600)
///     .build();
///
/// assert_eq!(claims.sub, "taller@example.com");
/// ```
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct JwtClaims {
    /// Subject - the account email.
    pub sub: String,

    /// Issuer - who created the token.
    pub iss: String,

    /// Audience - intended recipients.
    #[serde(default)]
    pub aud: Vec<String>,

    /// Expiration time as Unix timestamp.
    pub exp: i64,

    /// Issued at as Unix timestamp.
    pub iat: i64,

    /// JWT ID - unique identifier for this token.
    pub jti: String,

    /// Taller ID for multi-tenant isolation.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tid: Option<Uuid>,

    /// Account email address.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,

    /// Workshop display name.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub nombre: Option<String>,
}

impl JwtClaims {
    /// Create a new builder for constructing JWT claims.
    #[must_use]
    pub fn builder() -> JwtClaimsBuilder {
        JwtClaimsBuilder::default()
    }

    /// Check if the token is expired.
    #[must_use]
    pub fn is_expired(&self) -> bool {
        Utc::now().timestamp() > self.exp
    }

    /// Get the taller ID if present.
    #[must_use]
    pub fn taller_id(&self) -> Option<TallerId> {
        self.tid.map(TallerId::from_uuid)
    }
}

/// Builder for constructing JWT claims.
#[derive(Debug, Default)]
pub struct JwtClaimsBuilder {
    sub: Option<String>,
    iss: Option<String>,
    aud: Vec<String>,
    exp: Option<i64>,
    iat: Option<i64>,
    jti: Option<String>,
    tid: Option<Uuid>,
    email: Option<String>,
    nombre: Option<String>,
}

impl JwtClaimsBuilder {
    /// Set the subject claim.
    #[must_use]
    pub fn subject(mut self, sub: impl Into<String>) -> Self {
        self.sub = Some(sub.into());
        self
    }

    /// Set the issuer claim.
    #[must_use]
    pub fn issuer(mut self, iss: impl Into<String>) -> Self {
        self.iss = Some(iss.into());
        self
    }

    /// Set the audience claim.
    #[must_use]
    pub fn audience(mut self, aud: Vec<impl Into<String>>) -> Self {
        self.aud = aud.into_iter().map(Into::into).collect();
        self
    }

    /// Set the expiration as an absolute Unix timestamp.
    #[must_use]
    pub fn expiration(mut self, exp: i64) -> Self {
        self.exp = Some(exp);
        self
    }

    /// Set the expiration relative to now.
    #[must_use]
    pub fn expires_in_secs(mut self, secs: i64) -> Self {
        self.exp = Some((Utc::now() + Duration::seconds(secs)).timestamp());
        self
    }

    /// Set the issued-at timestamp (defaults to now).
    #[must_use]
    pub fn issued_at(mut self, iat: i64) -> Self {
        self.iat = Some(iat);
        self
    }

    /// Set the JWT ID (defaults to a random UUID).
    #[must_use]
    pub fn jwt_id(mut self, jti: impl Into<String>) -> Self {
        self.jti = Some(jti.into());
        self
    }

    /// Set the taller ID claim.
    #[must_use]
    pub fn taller_id(mut self, tid: TallerId) -> Self {
        self.tid = Some(*tid.as_uuid());
        self
    }

    /// Set the email claim.
    #[must_use]
    pub fn email(mut self, email: impl Into<String>) -> Self {
        self.email = Some(email.into());
        self
    }

    /// Set the nombre claim.
    #[must_use]
    pub fn nombre(mut self, nombre: impl Into<String>) -> Self {
        self.nombre = Some(nombre.into());
        self
    }

    /// Build the claims, filling in defaults for anything unset.
    ///
    /// Defaults: empty subject/issuer, `iat` = now, `exp` = now + 1h,
    /// `jti` = random UUID v4.
    #[must_use]
    pub fn build(self) -> JwtClaims {
        let now = Utc::now().timestamp();

        JwtClaims {
            sub: self.sub.unwrap_or_default(),
            iss: self.iss.unwrap_or_default(),
            aud: self.aud,
            exp: self.exp.unwrap_or(now + 3600),
            iat: self.iat.unwrap_or(now),
            jti: self.jti.unwrap_or_else(|| Uuid::new_v4().to_string()),
            tid: self.tid,
            email: self.email,
            nombre: self.nombre,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builder_sets_all_fields() {
        let taller_id = TallerId::new();
        let claims = JwtClaims::builder()
            .subject("taller@example.com")
            .issuer("taller-api")
            .audience(vec!["taller-clients"])
            .taller_id(taller_id)
            .email("taller@example.com")
            .nombre("Taller El Rayo")
            .expires_in_secs(28800)
            .build();

        assert_eq!(claims.sub, "taller@example.com");
        assert_eq!(claims.iss, "taller-api");
        assert_eq!(claims.aud, vec!["taller-clients".to_string()]);
        assert_eq!(claims.taller_id(), Some(taller_id));
        assert_eq!(claims.email.as_deref(), Some("taller@example.com"));
        assert_eq!(claims.nombre.as_deref(), Some("Taller El Rayo"));
    }

    #[test]
    fn test_builder_defaults() {
        let claims = JwtClaims::builder().build();

        assert!(claims.sub.is_empty());
        assert!(!claims.jti.is_empty());
        assert!(claims.exp > claims.iat);
        assert!(claims.tid.is_none());
    }

    #[test]
    fn test_expires_in_secs_is_relative() {
        let claims = JwtClaims::builder().expires_in_secs(28800).build();
        let expected = Utc::now().timestamp() + 28800;

        // Allow slack for test execution time
        assert!((claims.exp - expected).abs() < 5);
    }

    #[test]
    fn test_is_expired() {
        let expired = JwtClaims::builder()
            .expiration(Utc::now().timestamp() - 60)
            .build();
        assert!(expired.is_expired());

        let valid = JwtClaims::builder().expires_in_secs(3600).build();
        assert!(!valid.is_expired());
    }

    #[test]
    fn test_jti_is_unique() {
        let c1 = JwtClaims::builder().build();
        let c2 = JwtClaims::builder().build();
        assert_ne!(c1.jti, c2.jti);
    }

    #[test]
    fn test_serialization_omits_absent_custom_claims() {
        let claims = JwtClaims::builder().subject("x@y.com").build();
        let json = serde_json::to_string(&claims).unwrap();

        assert!(!json.contains("tid"));
        assert!(!json.contains("nombre"));
    }

    #[test]
    fn test_serde_roundtrip() {
        let original = JwtClaims::builder()
            .subject("taller@example.com")
            .issuer("taller-api")
            .taller_id(TallerId::new())
            .nombre("Taller Central")
            .expires_in_secs(3600)
            .build();

        let json = serde_json::to_string(&original).unwrap();
        let decoded: JwtClaims = serde_json::from_str(&json).unwrap();

        assert_eq!(decoded, original);
    }
}
