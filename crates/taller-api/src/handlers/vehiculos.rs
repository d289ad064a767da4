//! Handlers for `/vehiculos`.

use crate::error::ApiError;
use crate::models::{CreateVehiculoRequest, MensajeResponse, UpdateVehiculoRequest, VehiculoDto};
use crate::services::VehiculoService;
use axum::{extract::Path, http::StatusCode, Extension, Json};
use std::sync::Arc;
use taller_core::TallerId;
use uuid::Uuid;

/// List the vehiculos of the caller's taller with owner info.
#[utoipa::path(
    get,
    path = "/api/vehiculos",
    responses(
        (status = 200, description = "Vehiculos of the taller", body = [VehiculoDto]),
        (status = 401, description = "Missing or invalid token"),
    ),
    security(("bearerAuth" = [])),
    tag = "Vehículos"
)]
pub async fn list_vehiculos(
    Extension(taller_id): Extension<TallerId>,
    Extension(service): Extension<Arc<VehiculoService>>,
) -> Result<Json<Vec<VehiculoDto>>, ApiError> {
    let vehiculos = service.list(taller_id).await?;

    Ok(Json(vehiculos))
}

/// Fetch one vehiculo by id.
#[utoipa::path(
    get,
    path = "/api/vehiculos/{id}",
    params(("id" = Uuid, Path, description = "Vehiculo id")),
    responses(
        (status = 200, description = "The vehiculo", body = VehiculoDto),
        (status = 404, description = "Vehiculo not found"),
    ),
    security(("bearerAuth" = [])),
    tag = "Vehículos"
)]
pub async fn get_vehiculo(
    Extension(taller_id): Extension<TallerId>,
    Extension(service): Extension<Arc<VehiculoService>>,
    Path(id): Path<Uuid>,
) -> Result<Json<VehiculoDto>, ApiError> {
    let vehiculo = service.get(taller_id, id).await?;

    Ok(Json(vehiculo))
}

/// Create a vehiculo.
#[utoipa::path(
    post,
    path = "/api/vehiculos",
    request_body = CreateVehiculoRequest,
    responses(
        (status = 201, description = "Vehiculo created", body = VehiculoDto),
        (status = 400, description = "Validation failed or duplicate placa"),
    ),
    security(("bearerAuth" = [])),
    tag = "Vehículos"
)]
pub async fn create_vehiculo(
    Extension(taller_id): Extension<TallerId>,
    Extension(service): Extension<Arc<VehiculoService>>,
    Json(request): Json<CreateVehiculoRequest>,
) -> Result<(StatusCode, Json<VehiculoDto>), ApiError> {
    let vehiculo = service.create(taller_id, request).await?;

    Ok((StatusCode::CREATED, Json(vehiculo)))
}

/// Update a vehiculo. Absent fields keep their stored value.
#[utoipa::path(
    put,
    path = "/api/vehiculos/{id}",
    params(("id" = Uuid, Path, description = "Vehiculo id")),
    request_body = UpdateVehiculoRequest,
    responses(
        (status = 200, description = "Vehiculo updated", body = VehiculoDto),
        (status = 400, description = "Validation failed or duplicate placa"),
        (status = 404, description = "Vehiculo not found"),
    ),
    security(("bearerAuth" = [])),
    tag = "Vehículos"
)]
pub async fn update_vehiculo(
    Extension(taller_id): Extension<TallerId>,
    Extension(service): Extension<Arc<VehiculoService>>,
    Path(id): Path<Uuid>,
    Json(request): Json<UpdateVehiculoRequest>,
) -> Result<Json<VehiculoDto>, ApiError> {
    let vehiculo = service.update(taller_id, id, request).await?;

    Ok(Json(vehiculo))
}

/// Delete a vehiculo.
#[utoipa::path(
    delete,
    path = "/api/vehiculos/{id}",
    params(("id" = Uuid, Path, description = "Vehiculo id")),
    responses(
        (status = 200, description = "Vehiculo deleted", body = MensajeResponse),
        (status = 404, description = "Vehiculo not found"),
    ),
    security(("bearerAuth" = [])),
    tag = "Vehículos"
)]
pub async fn delete_vehiculo(
    Extension(taller_id): Extension<TallerId>,
    Extension(service): Extension<Arc<VehiculoService>>,
    Path(id): Path<Uuid>,
) -> Result<Json<MensajeResponse>, ApiError> {
    service.delete(taller_id, id).await?;

    Ok(Json(MensajeResponse::new(
        "Vehículo eliminado correctamente.",
    )))
}
