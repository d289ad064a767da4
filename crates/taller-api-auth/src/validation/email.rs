//! Email validation following RFC 5322.
//!
//! Validates email addresses using a regex pattern that handles:
//! - Standard addresses (user@example.com)
//! - Plus addressing (user+tag@example.com)
//! - Subdomains (user@mail.example.com)

use super::error::ValidationError;
use std::sync::LazyLock;

/// RFC 5322 compliant email regex pattern.
///
/// Local part: alphanumeric, dots, underscores, plus signs, hyphens.
/// Domain: alphanumeric with hyphens, proper TLD structure.
/// No consecutive dots, no leading/trailing dots.
static EMAIL_REGEX: LazyLock<regex::Regex> = LazyLock::new(|| {
    regex::Regex::new(
        r"(?i)^[a-z0-9!#$%&'*+/=?^_`{|}~-]+(?:\.[a-z0-9!#$%&'*+/=?^_`{|}~-]+)*@(?:[a-z0-9](?:[a-z0-9-]*[a-z0-9])?\.)+[a-z0-9](?:[a-z0-9-]*[a-z0-9])?$"
    ).expect("EMAIL_REGEX is a valid regex pattern")
});

/// Maximum allowed email length (per RFC 5321).
const MAX_EMAIL_LENGTH: usize = 254;

/// Minimum reasonable email length (a@b.c).
const MIN_EMAIL_LENGTH: usize = 5;

/// Validate an email address.
///
/// # Examples
///
/// ```
/// use taller_api_auth::validation::validate_email;
///
/// assert!(validate_email("taller@example.com").is_ok());
/// assert!(validate_email("taller+sucursal@example.com").is_ok());
///
/// assert!(validate_email("no-es-correo").is_err());
/// assert!(validate_email("@example.com").is_err());
/// ```
pub fn validate_email(email: &str) -> Result<(), ValidationError> {
    let email = email.trim();

    if email.is_empty() {
        return Err(ValidationError::new(
            "email",
            "required",
            "El correo es obligatorio.",
        ));
    }

    if email.len() < MIN_EMAIL_LENGTH {
        return Err(ValidationError::new(
            "email",
            "too_short",
            format!("El correo debe tener al menos {MIN_EMAIL_LENGTH} caracteres."),
        ));
    }

    if email.len() > MAX_EMAIL_LENGTH {
        return Err(ValidationError::new(
            "email",
            "too_long",
            format!("El correo no puede exceder {MAX_EMAIL_LENGTH} caracteres."),
        ));
    }

    if !EMAIL_REGEX.is_match(email) {
        return Err(ValidationError::new(
            "email",
            "invalid_format",
            "El formato del correo no es válido.",
        ));
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_valid_standard_email() {
        assert!(validate_email("taller@example.com").is_ok());
    }

    #[test]
    fn test_valid_email_with_plus_addressing() {
        assert!(validate_email("taller+sucursal@example.com").is_ok());
    }

    #[test]
    fn test_valid_email_with_subdomain() {
        assert!(validate_email("taller@correo.example.com").is_ok());
    }

    #[test]
    fn test_valid_email_case_insensitive() {
        assert!(validate_email("Taller@Example.COM").is_ok());
    }

    #[test]
    fn test_email_trimmed() {
        assert!(validate_email("  taller@example.com  ").is_ok());
    }

    #[test]
    fn test_invalid_email_empty() {
        let err = validate_email("").unwrap_err();
        assert_eq!(err.code, "required");
    }

    #[test]
    fn test_invalid_email_whitespace_only() {
        let err = validate_email("   ").unwrap_err();
        assert_eq!(err.code, "required");
    }

    #[test]
    fn test_invalid_email_no_at_symbol() {
        let err = validate_email("no-es-correo").unwrap_err();
        assert_eq!(err.code, "invalid_format");
    }

    #[test]
    fn test_invalid_email_no_domain() {
        assert!(validate_email("taller@").is_err());
    }

    #[test]
    fn test_invalid_email_no_local_part() {
        assert!(validate_email("@example.com").is_err());
    }

    #[test]
    fn test_invalid_email_double_at() {
        assert!(validate_email("taller@@example.com").is_err());
    }

    #[test]
    fn test_invalid_email_no_tld() {
        assert!(validate_email("taller@example").is_err());
    }

    #[test]
    fn test_invalid_email_too_long() {
        let long_local = "a".repeat(250);
        let email = format!("{long_local}@example.com");
        let err = validate_email(&email).unwrap_err();
        assert_eq!(err.code, "too_long");
    }
}
