//! Handlers for `/servicios`.

use crate::error::ApiError;
use crate::models::{CreateServicioRequest, MensajeResponse, ServicioDto, UpdateServicioRequest};
use crate::services::ServicioService;
use axum::{extract::Path, http::StatusCode, Extension, Json};
use std::sync::Arc;
use taller_core::TallerId;
use uuid::Uuid;

/// List the servicios of the caller's taller, newest first.
#[utoipa::path(
    get,
    path = "/api/servicios",
    responses(
        (status = 200, description = "Servicios of the taller", body = [ServicioDto]),
        (status = 401, description = "Missing or invalid token"),
    ),
    security(("bearerAuth" = [])),
    tag = "Servicios"
)]
pub async fn list_servicios(
    Extension(taller_id): Extension<TallerId>,
    Extension(service): Extension<Arc<ServicioService>>,
) -> Result<Json<Vec<ServicioDto>>, ApiError> {
    let servicios = service.list(taller_id).await?;

    Ok(Json(servicios))
}

/// Fetch one servicio by id.
#[utoipa::path(
    get,
    path = "/api/servicios/{id}",
    params(("id" = Uuid, Path, description = "Servicio id")),
    responses(
        (status = 200, description = "The servicio", body = ServicioDto),
        (status = 404, description = "Servicio not found"),
    ),
    security(("bearerAuth" = [])),
    tag = "Servicios"
)]
pub async fn get_servicio(
    Extension(taller_id): Extension<TallerId>,
    Extension(service): Extension<Arc<ServicioService>>,
    Path(id): Path<Uuid>,
) -> Result<Json<ServicioDto>, ApiError> {
    let servicio = service.get(taller_id, id).await?;

    Ok(Json(servicio))
}

/// Create a servicio.
#[utoipa::path(
    post,
    path = "/api/servicios",
    request_body = CreateServicioRequest,
    responses(
        (status = 201, description = "Servicio created", body = ServicioDto),
        (status = 400, description = "Validation failed"),
    ),
    security(("bearerAuth" = [])),
    tag = "Servicios"
)]
pub async fn create_servicio(
    Extension(taller_id): Extension<TallerId>,
    Extension(service): Extension<Arc<ServicioService>>,
    Json(request): Json<CreateServicioRequest>,
) -> Result<(StatusCode, Json<ServicioDto>), ApiError> {
    let servicio = service.create(taller_id, request).await?;

    Ok((StatusCode::CREATED, Json(servicio)))
}

/// Update a servicio. Absent fields keep their stored value.
#[utoipa::path(
    put,
    path = "/api/servicios/{id}",
    params(("id" = Uuid, Path, description = "Servicio id")),
    request_body = UpdateServicioRequest,
    responses(
        (status = 200, description = "Servicio updated", body = ServicioDto),
        (status = 400, description = "Validation failed"),
        (status = 404, description = "Servicio not found"),
    ),
    security(("bearerAuth" = [])),
    tag = "Servicios"
)]
pub async fn update_servicio(
    Extension(taller_id): Extension<TallerId>,
    Extension(service): Extension<Arc<ServicioService>>,
    Path(id): Path<Uuid>,
    Json(request): Json<UpdateServicioRequest>,
) -> Result<Json<ServicioDto>, ApiError> {
    let servicio = service.update(taller_id, id, request).await?;

    Ok(Json(servicio))
}

/// Delete a servicio.
#[utoipa::path(
    delete,
    path = "/api/servicios/{id}",
    params(("id" = Uuid, Path, description = "Servicio id")),
    responses(
        (status = 200, description = "Servicio deleted", body = MensajeResponse),
        (status = 404, description = "Servicio not found"),
    ),
    security(("bearerAuth" = [])),
    tag = "Servicios"
)]
pub async fn delete_servicio(
    Extension(taller_id): Extension<TallerId>,
    Extension(service): Extension<Arc<ServicioService>>,
    Path(id): Path<Uuid>,
) -> Result<Json<MensajeResponse>, ApiError> {
    service.delete(taller_id, id).await?;

    Ok(Json(MensajeResponse::new(
        "Servicio eliminado correctamente.",
    )))
}
