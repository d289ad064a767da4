//! Integration tests for the bearer-token middleware.
//!
//! Built against a mini router with no database: the middleware only
//! needs a signing secret and the request extensions.

use axum::{
    body::Body,
    http::{Request, StatusCode},
    middleware,
    routing::get,
    Extension, Router,
};
use serde_json::Value;
use taller_api_auth::{jwt_auth_middleware, JwtAuthConfig};
use taller_auth::{encode_token, JwtClaims};
use taller_core::TallerId;
use tower::ServiceExt;

const SECRET: &str = "test-secret-for-middleware";
const ISSUER: &str = "taller-api";
const AUDIENCE: &str = "taller-clients";

async fn whoami(Extension(taller_id): Extension<TallerId>) -> String {
    taller_id.to_string()
}

fn protected_app() -> Router {
    Router::new()
        .route("/whoami", get(whoami))
        .layer(middleware::from_fn(jwt_auth_middleware))
        .layer(Extension(JwtAuthConfig::new(SECRET, ISSUER, AUDIENCE)))
}

fn token_for(taller_id: Option<TallerId>) -> String {
    let mut builder = JwtClaims::builder()
        .subject("taller@example.com")
        .issuer(ISSUER)
        .audience(vec![AUDIENCE.to_string()])
        .expires_in_secs(3600);

    if let Some(id) = taller_id {
        builder = builder.taller_id(id);
    }

    encode_token(&builder.build(), SECRET.as_bytes()).unwrap()
}

fn request(uri: &str, auth: Option<&str>) -> Request<Body> {
    let mut builder = Request::builder().uri(uri);
    if let Some(auth) = auth {
        builder = builder.header("Authorization", auth);
    }
    builder.body(Body::empty()).unwrap()
}

async fn body_json(response: axum::response::Response) -> Value {
    let body = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    serde_json::from_slice(&body).unwrap()
}

#[tokio::test]
async fn test_missing_token_returns_401() {
    let response = protected_app()
        .oneshot(request("/whoami", None))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);

    let json = body_json(response).await;
    assert_eq!(json["message"], "No autorizado.");
}

#[tokio::test]
async fn test_malformed_header_returns_401() {
    let response = protected_app()
        .oneshot(request("/whoami", Some("Basic abc123")))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn test_empty_bearer_token_returns_401() {
    let response = protected_app()
        .oneshot(request("/whoami", Some("Bearer ")))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn test_garbage_token_returns_401() {
    let response = protected_app()
        .oneshot(request("/whoami", Some("Bearer not.a.jwt")))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn test_token_signed_with_wrong_secret_returns_401() {
    let claims = JwtClaims::builder()
        .subject("taller@example.com")
        .issuer(ISSUER)
        .audience(vec![AUDIENCE.to_string()])
        .taller_id(TallerId::new())
        .expires_in_secs(3600)
        .build();
    let token = encode_token(&claims, b"a-different-secret").unwrap();

    let response = protected_app()
        .oneshot(request("/whoami", Some(&format!("Bearer {token}"))))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn test_token_without_taller_id_returns_401() {
    let token = token_for(None);

    let response = protected_app()
        .oneshot(request("/whoami", Some(&format!("Bearer {token}"))))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn test_valid_token_reaches_handler_with_taller_id() {
    let taller_id = TallerId::new();
    let token = token_for(Some(taller_id));

    let response = protected_app()
        .oneshot(request("/whoami", Some(&format!("Bearer {token}"))))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);

    let body = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    assert_eq!(body, taller_id.to_string().as_bytes());
}
