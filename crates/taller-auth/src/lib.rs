//! Authentication primitives: Argon2id password hashing and HS256 JWTs.
//!
//! This crate is deliberately free of any HTTP or database concerns; the
//! API layer composes these pieces into the login/registration flow.

pub mod claims;
pub mod error;
pub mod jwt;
pub mod password;

pub use claims::{JwtClaims, JwtClaimsBuilder};
pub use error::AuthError;
pub use jwt::{decode_token, decode_token_with_config, encode_token, ValidationConfig};
pub use password::{hash_password, verify_password, PasswordHasher};
