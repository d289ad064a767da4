//! Handler for `/informe`.

use crate::error::ApiError;
use crate::models::InformeDto;
use crate::services::InformeService;
use axum::{Extension, Json};
use std::sync::Arc;
use taller_core::TallerId;

/// Aggregated report for the caller's taller.
#[utoipa::path(
    get,
    path = "/api/informe",
    responses(
        (status = 200, description = "The informe", body = InformeDto),
        (status = 401, description = "Missing or invalid token"),
    ),
    security(("bearerAuth" = [])),
    tag = "Informe"
)]
pub async fn get_informe(
    Extension(taller_id): Extension<TallerId>,
    Extension(service): Extension<Arc<InformeService>>,
) -> Result<Json<InformeDto>, ApiError> {
    let informe = service.generate(taller_id).await?;

    Ok(Json(informe))
}
