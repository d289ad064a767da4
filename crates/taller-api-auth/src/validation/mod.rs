//! Request validation for registration and login.

pub mod email;
pub mod error;
pub mod password;

pub use email::validate_email;
pub use error::ValidationError;
pub use password::validate_password;
