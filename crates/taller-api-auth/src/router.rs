//! Router for the public authentication endpoints.

use crate::handlers::{login_handler, register_handler};
use crate::service::AuthService;
use axum::{routing::post, Extension, Router};
use std::sync::Arc;

/// Build the `/auth` router. These routes are public; everything else
/// in the service sits behind the JWT middleware.
pub fn auth_router(auth_service: Arc<AuthService>) -> Router {
    Router::new()
        .route("/register", post(register_handler))
        .route("/login", post(login_handler))
        .layer(Extension(auth_service))
}
