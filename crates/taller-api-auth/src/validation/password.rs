//! Password policy validation.
//!
//! All violations are collected and reported together so the caller can
//! fix everything in one pass.

use super::error::ValidationError;

/// Minimum password length.
const MIN_PASSWORD_LENGTH: usize = 8;

/// Validate a password against the policy:
/// at least 8 characters, one uppercase, one lowercase, one digit.
///
/// Returns all violations joined into a single message.
pub fn validate_password(password: &str) -> Result<(), ValidationError> {
    let mut violations: Vec<&str> = Vec::new();

    if password.chars().count() < MIN_PASSWORD_LENGTH {
        violations.push("al menos 8 caracteres");
    }
    if !password.chars().any(|c| c.is_uppercase()) {
        violations.push("una letra mayúscula");
    }
    if !password.chars().any(|c| c.is_lowercase()) {
        violations.push("una letra minúscula");
    }
    if !password.chars().any(|c| c.is_ascii_digit()) {
        violations.push("un número");
    }

    if violations.is_empty() {
        Ok(())
    } else {
        Err(ValidationError::new(
            "password",
            "weak_password",
            format!("La contraseña debe tener {}.", violations.join(", ")),
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_valid_password() {
        assert!(validate_password("Secreta1").is_ok());
    }

    #[test]
    fn test_valid_long_password() {
        assert!(validate_password("UnaContraseñaMuyLarga123").is_ok());
    }

    #[test]
    fn test_too_short() {
        let err = validate_password("Ab1").unwrap_err();
        assert!(err.message.contains("8 caracteres"));
    }

    #[test]
    fn test_missing_uppercase() {
        let err = validate_password("secreta1").unwrap_err();
        assert!(err.message.contains("mayúscula"));
    }

    #[test]
    fn test_missing_lowercase() {
        let err = validate_password("SECRETA1").unwrap_err();
        assert!(err.message.contains("minúscula"));
    }

    #[test]
    fn test_missing_digit() {
        let err = validate_password("SecretaX").unwrap_err();
        assert!(err.message.contains("número"));
    }

    #[test]
    fn test_all_violations_reported_together() {
        let err = validate_password("x").unwrap_err();
        assert!(err.message.contains("8 caracteres"));
        assert!(err.message.contains("mayúscula"));
        assert!(err.message.contains("número"));
        // lowercase is present in "x", so it must not be reported
        assert!(!err.message.contains("minúscula"));
    }

    #[test]
    fn test_unicode_uppercase_counts() {
        assert!(validate_password("contraseÑa1").is_ok());
    }
}
