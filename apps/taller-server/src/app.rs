//! Application router assembly.

use crate::config::Config;
use crate::openapi;
use axum::{middleware, routing::get, Extension, Json, Router};
use sqlx::PgPool;
use std::sync::Arc;
use taller_api::api_router;
use taller_api_auth::{auth_router, jwt_auth_middleware, AuthService, JwtAuthConfig, TokenSettings};
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;
use utoipa::OpenApi;

/// Assemble the full application router.
///
/// `/auth` is public; `/api` requires a valid bearer token. The health
/// probe and the `OpenAPI` spec are open.
pub fn build_app(pool: PgPool, config: &Config) -> Router {
    let auth_service = Arc::new(AuthService::new(
        pool.clone(),
        TokenSettings {
            secret: config.jwt_secret.clone(),
            issuer: config.jwt_issuer.clone(),
            audience: config.jwt_audience.clone(),
        },
    ));

    let jwt_config = JwtAuthConfig::new(
        config.jwt_secret.clone(),
        &config.jwt_issuer,
        &config.jwt_audience,
    );

    let protected = api_router(pool)
        .layer(middleware::from_fn(jwt_auth_middleware))
        .layer(Extension(jwt_config));

    Router::new()
        .route("/health", get(health_handler))
        .route(
            "/api-docs/openapi.json",
            get(|| async { Json(openapi::ApiDoc::openapi()) }),
        )
        .nest("/auth", auth_router(auth_service))
        .nest("/api", protected)
        .layer(TraceLayer::new_for_http())
        .layer(
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods(Any)
                .allow_headers(Any),
        )
}

async fn health_handler() -> Json<serde_json::Value> {
    Json(serde_json::json!({
        "status": "healthy",
        "version": env!("CARGO_PKG_VERSION"),
    }))
}
