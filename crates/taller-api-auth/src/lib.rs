//! Authentication API: `/auth/register`, `/auth/login` and the bearer
//! token middleware protecting the rest of the service.

pub mod error;
pub mod handlers;
pub mod middleware;
pub mod models;
pub mod router;
pub mod service;
pub mod validation;

pub use error::ApiAuthError;
pub use middleware::{jwt_auth_middleware, JwtAuthConfig};
pub use models::{LoginRequest, RegisterRequest, SesionResponse};
pub use router::auth_router;
pub use service::{AuthService, TokenSettings};
