//! Handlers for `/clientes`.

use crate::error::ApiError;
use crate::models::{ClienteDto, CreateClienteRequest, MensajeResponse, UpdateClienteRequest};
use crate::services::ClienteService;
use axum::{extract::Path, http::StatusCode, Extension, Json};
use std::sync::Arc;
use taller_core::TallerId;
use uuid::Uuid;

/// List the clientes of the caller's taller.
#[utoipa::path(
    get,
    path = "/api/clientes",
    responses(
        (status = 200, description = "Clientes of the taller", body = [ClienteDto]),
        (status = 401, description = "Missing or invalid token"),
    ),
    security(("bearerAuth" = [])),
    tag = "Clientes"
)]
pub async fn list_clientes(
    Extension(taller_id): Extension<TallerId>,
    Extension(service): Extension<Arc<ClienteService>>,
) -> Result<Json<Vec<ClienteDto>>, ApiError> {
    let clientes = service.list(taller_id).await?;

    Ok(Json(clientes))
}

/// Fetch one cliente by id.
#[utoipa::path(
    get,
    path = "/api/clientes/{id}",
    params(("id" = Uuid, Path, description = "Cliente id")),
    responses(
        (status = 200, description = "The cliente", body = ClienteDto),
        (status = 404, description = "Cliente not found"),
    ),
    security(("bearerAuth" = [])),
    tag = "Clientes"
)]
pub async fn get_cliente(
    Extension(taller_id): Extension<TallerId>,
    Extension(service): Extension<Arc<ClienteService>>,
    Path(id): Path<Uuid>,
) -> Result<Json<ClienteDto>, ApiError> {
    let cliente = service.get(taller_id, id).await?;

    Ok(Json(cliente))
}

/// Create a cliente.
#[utoipa::path(
    post,
    path = "/api/clientes",
    request_body = CreateClienteRequest,
    responses(
        (status = 201, description = "Cliente created", body = ClienteDto),
        (status = 400, description = "Validation failed or duplicate cedula"),
    ),
    security(("bearerAuth" = [])),
    tag = "Clientes"
)]
pub async fn create_cliente(
    Extension(taller_id): Extension<TallerId>,
    Extension(service): Extension<Arc<ClienteService>>,
    Json(request): Json<CreateClienteRequest>,
) -> Result<(StatusCode, Json<ClienteDto>), ApiError> {
    let cliente = service.create(taller_id, request).await?;

    Ok((StatusCode::CREATED, Json(cliente)))
}

/// Update a cliente. Absent fields keep their stored value.
#[utoipa::path(
    put,
    path = "/api/clientes/{id}",
    params(("id" = Uuid, Path, description = "Cliente id")),
    request_body = UpdateClienteRequest,
    responses(
        (status = 200, description = "Cliente updated", body = ClienteDto),
        (status = 400, description = "Validation failed or duplicate cedula"),
        (status = 404, description = "Cliente not found"),
    ),
    security(("bearerAuth" = [])),
    tag = "Clientes"
)]
pub async fn update_cliente(
    Extension(taller_id): Extension<TallerId>,
    Extension(service): Extension<Arc<ClienteService>>,
    Path(id): Path<Uuid>,
    Json(request): Json<UpdateClienteRequest>,
) -> Result<Json<ClienteDto>, ApiError> {
    let cliente = service.update(taller_id, id, request).await?;

    Ok(Json(cliente))
}

/// Delete a cliente.
#[utoipa::path(
    delete,
    path = "/api/clientes/{id}",
    params(("id" = Uuid, Path, description = "Cliente id")),
    responses(
        (status = 200, description = "Cliente deleted", body = MensajeResponse),
        (status = 404, description = "Cliente not found"),
    ),
    security(("bearerAuth" = [])),
    tag = "Clientes"
)]
pub async fn delete_cliente(
    Extension(taller_id): Extension<TallerId>,
    Extension(service): Extension<Arc<ClienteService>>,
    Path(id): Path<Uuid>,
) -> Result<Json<MensajeResponse>, ApiError> {
    service.delete(taller_id, id).await?;

    Ok(Json(MensajeResponse::new("Cliente eliminado correctamente.")))
}
