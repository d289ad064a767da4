//! JWT encoding and decoding with the HS256 algorithm.
//!
//! Tokens are signed with a shared secret supplied by configuration.

use crate::claims::JwtClaims;
use crate::error::AuthError;
use jsonwebtoken::{
    decode, encode, Algorithm, DecodingKey, EncodingKey, Header, TokenData, Validation,
};

/// Configuration for JWT validation.
#[derive(Debug, Clone)]
pub struct ValidationConfig {
    /// Leeway in seconds for exp/iat validation (clock skew tolerance).
    pub leeway: u64,
    /// Expected issuer (if set, tokens with different issuer are rejected).
    pub issuer: Option<String>,
    /// Expected audience (if set, tokens without matching audience are rejected).
    pub audience: Option<Vec<String>>,
    /// Whether to validate expiration.
    pub validate_exp: bool,
}

impl Default for ValidationConfig {
    fn default() -> Self {
        Self {
            leeway: 60, // 60 seconds clock skew tolerance
            issuer: None,
            audience: None,
            validate_exp: true,
        }
    }
}

impl ValidationConfig {
    /// Create a new validation config with custom leeway.
    #[must_use]
    pub fn with_leeway(leeway: u64) -> Self {
        Self {
            leeway,
            ..Default::default()
        }
    }

    /// Set the expected issuer.
    #[must_use]
    pub fn issuer(mut self, iss: impl Into<String>) -> Self {
        self.issuer = Some(iss.into());
        self
    }

    /// Set the expected audience.
    #[must_use]
    pub fn audience(mut self, aud: Vec<impl Into<String>>) -> Self {
        self.audience = Some(aud.into_iter().map(Into::into).collect());
        self
    }

    /// Disable expiration validation (use with caution).
    #[must_use]
    pub fn skip_exp_validation(mut self) -> Self {
        self.validate_exp = false;
        self
    }
}

/// Encode JWT claims into a signed token string using HS256.
///
/// # Errors
///
/// Returns `AuthError::InvalidToken` if encoding fails.
pub fn encode_token(claims: &JwtClaims, secret: &[u8]) -> Result<String, AuthError> {
    let key = EncodingKey::from_secret(secret);
    let header = Header::new(Algorithm::HS256);

    encode(&header, claims, &key)
        .map_err(|e| AuthError::InvalidToken(format!("Encoding failed: {e}")))
}

/// Decode and validate a JWT token with default validation settings.
///
/// # Errors
///
/// - `AuthError::TokenExpired` - Token has expired
/// - `AuthError::InvalidSignature` - Signature verification failed
/// - `AuthError::InvalidToken` - Token format is invalid
/// - `AuthError::InvalidAlgorithm` - Token uses unsupported algorithm
pub fn decode_token(token: &str, secret: &[u8]) -> Result<JwtClaims, AuthError> {
    decode_token_with_config(token, secret, &ValidationConfig::default())
}

/// Decode and validate a JWT token with custom validation config.
pub fn decode_token_with_config(
    token: &str,
    secret: &[u8],
    config: &ValidationConfig,
) -> Result<JwtClaims, AuthError> {
    let key = DecodingKey::from_secret(secret);

    let mut validation = Validation::new(Algorithm::HS256);
    validation.leeway = config.leeway;
    validation.validate_exp = config.validate_exp;

    // Only accept HS256
    validation.algorithms = vec![Algorithm::HS256];

    if let Some(ref iss) = config.issuer {
        validation.set_issuer(&[iss]);
    }

    if let Some(ref aud) = config.audience {
        validation.set_audience(aud);
    } else {
        validation.validate_aud = false;
    }

    let token_data: TokenData<JwtClaims> =
        decode(token, &key, &validation).map_err(map_jwt_error)?;

    Ok(token_data.claims)
}

/// Map jsonwebtoken errors to AuthError.
fn map_jwt_error(err: jsonwebtoken::errors::Error) -> AuthError {
    use jsonwebtoken::errors::ErrorKind;

    match err.kind() {
        ErrorKind::ExpiredSignature => AuthError::TokenExpired,
        ErrorKind::InvalidSignature => AuthError::InvalidSignature,
        ErrorKind::InvalidAlgorithm => AuthError::InvalidAlgorithm,
        ErrorKind::InvalidToken => AuthError::InvalidToken("Malformed token".to_string()),
        ErrorKind::Base64(_) => AuthError::InvalidToken("Invalid base64 encoding".to_string()),
        ErrorKind::Json(_) => AuthError::InvalidToken("Invalid JSON in claims".to_string()),
        ErrorKind::MissingRequiredClaim(claim) => AuthError::MissingClaim(claim.to_string()),
        _ => AuthError::InvalidToken(format!("Token validation failed: {err}")),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::JwtClaims;
    use chrono::Utc;
    use taller_core::TallerId;

    const TEST_SECRET: &[u8] = b"test-secret-for-unit-tests-only-0123456789";
    const WRONG_SECRET: &[u8] = b"a-completely-different-secret-abcdefghijkl";

    #[test]
    fn test_encode_token_valid_claims() {
        let claims = JwtClaims::builder()
            .subject("taller@example.com")
            .issuer("test-issuer")
            .expires_in_secs(3600)
            .build();

        let token = encode_token(&claims, TEST_SECRET).unwrap();

        // Token should have 3 parts separated by dots
        assert_eq!(token.split('.').count(), 3);
    }

    #[test]
    fn test_encode_token_with_taller_id() {
        let taller_id = TallerId::new();
        let claims = JwtClaims::builder()
            .subject("taller@example.com")
            .taller_id(taller_id)
            .expires_in_secs(3600)
            .build();

        let token = encode_token(&claims, TEST_SECRET).unwrap();
        let decoded = decode_token(&token, TEST_SECRET).unwrap();

        assert_eq!(decoded.taller_id(), Some(taller_id));
    }

    #[test]
    fn test_decode_token_valid() {
        let claims = JwtClaims::builder()
            .subject("taller@example.com")
            .issuer("test-issuer")
            .nombre("Taller Norte")
            .expires_in_secs(3600)
            .build();

        let token = encode_token(&claims, TEST_SECRET).unwrap();
        let decoded = decode_token(&token, TEST_SECRET).unwrap();

        assert_eq!(decoded.sub, "taller@example.com");
        assert_eq!(decoded.iss, "test-issuer");
        assert_eq!(decoded.nombre.as_deref(), Some("Taller Norte"));
    }

    #[test]
    fn test_decode_token_expired() {
        let claims = JwtClaims::builder()
            .subject("taller@example.com")
            .expiration(Utc::now().timestamp() - 3600) // 1 hour ago
            .build();

        let token = encode_token(&claims, TEST_SECRET).unwrap();
        let result = decode_token(&token, TEST_SECRET);

        assert!(result.is_err());
        assert!(matches!(result.unwrap_err(), AuthError::TokenExpired));
    }

    #[test]
    fn test_decode_token_invalid_signature() {
        let claims = JwtClaims::builder()
            .subject("taller@example.com")
            .expires_in_secs(3600)
            .build();

        let token = encode_token(&claims, TEST_SECRET).unwrap();
        let result = decode_token(&token, WRONG_SECRET);

        assert!(result.is_err());
        assert!(matches!(result.unwrap_err(), AuthError::InvalidSignature));
    }

    #[test]
    fn test_decode_token_malformed() {
        let result = decode_token("not.a.valid.token", TEST_SECRET);

        assert!(result.is_err());
        assert!(matches!(result.unwrap_err(), AuthError::InvalidToken(_)));
    }

    #[test]
    fn test_decode_token_with_leeway() {
        // Token expired 30 seconds ago is still accepted with 60s leeway
        let claims = JwtClaims::builder()
            .subject("taller@example.com")
            .expiration(Utc::now().timestamp() - 30)
            .build();

        let token = encode_token(&claims, TEST_SECRET).unwrap();
        let result = decode_token(&token, TEST_SECRET);
        assert!(result.is_ok());

        // Token expired 120 seconds ago fails even with 60s leeway
        let claims = JwtClaims::builder()
            .subject("taller@example.com")
            .expiration(Utc::now().timestamp() - 120)
            .build();

        let token = encode_token(&claims, TEST_SECRET).unwrap();
        let result = decode_token(&token, TEST_SECRET);
        assert!(matches!(result.unwrap_err(), AuthError::TokenExpired));
    }

    #[test]
    fn test_validation_config_issuer() {
        let claims = JwtClaims::builder()
            .subject("taller@example.com")
            .issuer("correct-issuer")
            .expires_in_secs(3600)
            .build();

        let token = encode_token(&claims, TEST_SECRET).unwrap();

        let config = ValidationConfig::default().issuer("correct-issuer");
        let result = decode_token_with_config(&token, TEST_SECRET, &config);
        assert!(result.is_ok());

        let config = ValidationConfig::default().issuer("wrong-issuer");
        let result = decode_token_with_config(&token, TEST_SECRET, &config);
        assert!(result.is_err());
    }

    #[test]
    fn test_validation_config_audience() {
        let claims = JwtClaims::builder()
            .subject("taller@example.com")
            .audience(vec!["taller-clients"])
            .expires_in_secs(3600)
            .build();

        let token = encode_token(&claims, TEST_SECRET).unwrap();

        let config = ValidationConfig::default().audience(vec!["taller-clients"]);
        assert!(decode_token_with_config(&token, TEST_SECRET, &config).is_ok());

        let config = ValidationConfig::default().audience(vec!["other-audience"]);
        assert!(decode_token_with_config(&token, TEST_SECRET, &config).is_err());
    }

    #[test]
    fn test_round_trip_preserves_claims() {
        let taller_id = TallerId::new();
        let original = JwtClaims::builder()
            .subject("taller@example.com")
            .issuer("taller-api")
            .audience(vec!["taller-clients"])
            .taller_id(taller_id)
            .email("taller@example.com")
            .nombre("Taller Sur")
            .expires_in_secs(28800)
            .build();

        let token = encode_token(&original, TEST_SECRET).unwrap();
        let decoded = decode_token(&token, TEST_SECRET).unwrap();

        assert_eq!(decoded.sub, original.sub);
        assert_eq!(decoded.iss, original.iss);
        assert_eq!(decoded.aud, original.aud);
        assert_eq!(decoded.tid, original.tid);
        assert_eq!(decoded.email, original.email);
        assert_eq!(decoded.nombre, original.nombre);
        assert_eq!(decoded.jti, original.jti);
    }
}
