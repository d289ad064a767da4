//! Handlers for `/materiales`.

use crate::error::ApiError;
use crate::models::{CreateMaterialRequest, MaterialDto, MensajeResponse, UpdateMaterialRequest};
use crate::services::MaterialService;
use axum::{extract::Path, http::StatusCode, Extension, Json};
use std::sync::Arc;
use taller_core::TallerId;
use uuid::Uuid;

/// List the materiales of the caller's taller.
#[utoipa::path(
    get,
    path = "/api/materiales",
    responses(
        (status = 200, description = "Materiales of the taller", body = [MaterialDto]),
        (status = 401, description = "Missing or invalid token"),
    ),
    security(("bearerAuth" = [])),
    tag = "Materiales"
)]
pub async fn list_materiales(
    Extension(taller_id): Extension<TallerId>,
    Extension(service): Extension<Arc<MaterialService>>,
) -> Result<Json<Vec<MaterialDto>>, ApiError> {
    let materiales = service.list(taller_id).await?;

    Ok(Json(materiales))
}

/// Fetch one material by id.
#[utoipa::path(
    get,
    path = "/api/materiales/{id}",
    params(("id" = Uuid, Path, description = "Material id")),
    responses(
        (status = 200, description = "The material", body = MaterialDto),
        (status = 404, description = "Material not found"),
    ),
    security(("bearerAuth" = [])),
    tag = "Materiales"
)]
pub async fn get_material(
    Extension(taller_id): Extension<TallerId>,
    Extension(service): Extension<Arc<MaterialService>>,
    Path(id): Path<Uuid>,
) -> Result<Json<MaterialDto>, ApiError> {
    let material = service.get(taller_id, id).await?;

    Ok(Json(material))
}

/// Create a material.
#[utoipa::path(
    post,
    path = "/api/materiales",
    request_body = CreateMaterialRequest,
    responses(
        (status = 201, description = "Material created", body = MaterialDto),
        (status = 400, description = "Validation failed or duplicate nombre"),
    ),
    security(("bearerAuth" = [])),
    tag = "Materiales"
)]
pub async fn create_material(
    Extension(taller_id): Extension<TallerId>,
    Extension(service): Extension<Arc<MaterialService>>,
    Json(request): Json<CreateMaterialRequest>,
) -> Result<(StatusCode, Json<MaterialDto>), ApiError> {
    let material = service.create(taller_id, request).await?;

    Ok((StatusCode::CREATED, Json(material)))
}

/// Update a material. Absent fields keep their stored value.
#[utoipa::path(
    put,
    path = "/api/materiales/{id}",
    params(("id" = Uuid, Path, description = "Material id")),
    request_body = UpdateMaterialRequest,
    responses(
        (status = 200, description = "Material updated", body = MaterialDto),
        (status = 400, description = "Validation failed or duplicate nombre"),
        (status = 404, description = "Material not found"),
    ),
    security(("bearerAuth" = [])),
    tag = "Materiales"
)]
pub async fn update_material(
    Extension(taller_id): Extension<TallerId>,
    Extension(service): Extension<Arc<MaterialService>>,
    Path(id): Path<Uuid>,
    Json(request): Json<UpdateMaterialRequest>,
) -> Result<Json<MaterialDto>, ApiError> {
    let material = service.update(taller_id, id, request).await?;

    Ok(Json(material))
}

/// Delete a material.
#[utoipa::path(
    delete,
    path = "/api/materiales/{id}",
    params(("id" = Uuid, Path, description = "Material id")),
    responses(
        (status = 200, description = "Material deleted", body = MensajeResponse),
        (status = 404, description = "Material not found"),
    ),
    security(("bearerAuth" = [])),
    tag = "Materiales"
)]
pub async fn delete_material(
    Extension(taller_id): Extension<TallerId>,
    Extension(service): Extension<Arc<MaterialService>>,
    Path(id): Path<Uuid>,
) -> Result<Json<MensajeResponse>, ApiError> {
    service.delete(taller_id, id).await?;

    Ok(Json(MensajeResponse::new(
        "Material eliminado correctamente.",
    )))
}
