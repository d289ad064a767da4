//! Handlers for `/citas`.

use crate::error::ApiError;
use crate::models::{CitaDto, CreateCitaRequest, MensajeResponse, UpdateCitaRequest};
use crate::services::CitaService;
use axum::{extract::Path, http::StatusCode, Extension, Json};
use std::sync::Arc;
use taller_core::TallerId;
use uuid::Uuid;

/// List the citas of the caller's taller with cliente info.
#[utoipa::path(
    get,
    path = "/api/citas",
    responses(
        (status = 200, description = "Citas of the taller", body = [CitaDto]),
        (status = 401, description = "Missing or invalid token"),
    ),
    security(("bearerAuth" = [])),
    tag = "Citas"
)]
pub async fn list_citas(
    Extension(taller_id): Extension<TallerId>,
    Extension(service): Extension<Arc<CitaService>>,
) -> Result<Json<Vec<CitaDto>>, ApiError> {
    let citas = service.list(taller_id).await?;

    Ok(Json(citas))
}

/// Fetch one cita by id.
#[utoipa::path(
    get,
    path = "/api/citas/{id}",
    params(("id" = Uuid, Path, description = "Cita id")),
    responses(
        (status = 200, description = "The cita", body = CitaDto),
        (status = 404, description = "Cita not found"),
    ),
    security(("bearerAuth" = [])),
    tag = "Citas"
)]
pub async fn get_cita(
    Extension(taller_id): Extension<TallerId>,
    Extension(service): Extension<Arc<CitaService>>,
    Path(id): Path<Uuid>,
) -> Result<Json<CitaDto>, ApiError> {
    let cita = service.get(taller_id, id).await?;

    Ok(Json(cita))
}

/// Create a cita. The estado defaults to "Pendiente".
#[utoipa::path(
    post,
    path = "/api/citas",
    request_body = CreateCitaRequest,
    responses(
        (status = 201, description = "Cita created", body = CitaDto),
        (status = 400, description = "Validation failed"),
    ),
    security(("bearerAuth" = [])),
    tag = "Citas"
)]
pub async fn create_cita(
    Extension(taller_id): Extension<TallerId>,
    Extension(service): Extension<Arc<CitaService>>,
    Json(request): Json<CreateCitaRequest>,
) -> Result<(StatusCode, Json<CitaDto>), ApiError> {
    let cita = service.create(taller_id, request).await?;

    Ok((StatusCode::CREATED, Json(cita)))
}

/// Update a cita. Absent fields keep their stored value.
#[utoipa::path(
    put,
    path = "/api/citas/{id}",
    params(("id" = Uuid, Path, description = "Cita id")),
    request_body = UpdateCitaRequest,
    responses(
        (status = 200, description = "Cita updated", body = CitaDto),
        (status = 400, description = "Validation failed"),
        (status = 404, description = "Cita not found"),
    ),
    security(("bearerAuth" = [])),
    tag = "Citas"
)]
pub async fn update_cita(
    Extension(taller_id): Extension<TallerId>,
    Extension(service): Extension<Arc<CitaService>>,
    Path(id): Path<Uuid>,
    Json(request): Json<UpdateCitaRequest>,
) -> Result<Json<CitaDto>, ApiError> {
    let cita = service.update(taller_id, id, request).await?;

    Ok(Json(cita))
}

/// Delete a cita.
#[utoipa::path(
    delete,
    path = "/api/citas/{id}",
    params(("id" = Uuid, Path, description = "Cita id")),
    responses(
        (status = 200, description = "Cita deleted", body = MensajeResponse),
        (status = 404, description = "Cita not found"),
    ),
    security(("bearerAuth" = [])),
    tag = "Citas"
)]
pub async fn delete_cita(
    Extension(taller_id): Extension<TallerId>,
    Extension(service): Extension<Arc<CitaService>>,
    Path(id): Path<Uuid>,
) -> Result<Json<MensajeResponse>, ApiError> {
    service.delete(taller_id, id).await?;

    Ok(Json(MensajeResponse::new("Cita eliminada correctamente.")))
}
