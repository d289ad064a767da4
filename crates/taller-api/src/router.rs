//! Router for the tenant-scoped resource endpoints.

use crate::handlers::{citas, clientes, informe, materiales, servicios, vehiculos};
use crate::services::{
    CitaService, ClienteService, InformeService, MaterialService, ServicioService, VehiculoService,
};
use axum::{routing::get, Extension, Router};
use sqlx::PgPool;
use std::sync::Arc;

/// Build the resource router. Every route expects the JWT middleware to
/// have placed the caller's `TallerId` in the request extensions.
pub fn api_router(pool: PgPool) -> Router {
    let clientes_service = Arc::new(ClienteService::new(pool.clone()));
    let vehiculos_service = Arc::new(VehiculoService::new(pool.clone()));
    let citas_service = Arc::new(CitaService::new(pool.clone()));
    let materiales_service = Arc::new(MaterialService::new(pool.clone()));
    let servicios_service = Arc::new(ServicioService::new(pool.clone()));
    let informe_service = Arc::new(InformeService::new(pool));

    Router::new()
        .route(
            "/clientes",
            get(clientes::list_clientes).post(clientes::create_cliente),
        )
        .route(
            "/clientes/:id",
            get(clientes::get_cliente)
                .put(clientes::update_cliente)
                .delete(clientes::delete_cliente),
        )
        .route(
            "/vehiculos",
            get(vehiculos::list_vehiculos).post(vehiculos::create_vehiculo),
        )
        .route(
            "/vehiculos/:id",
            get(vehiculos::get_vehiculo)
                .put(vehiculos::update_vehiculo)
                .delete(vehiculos::delete_vehiculo),
        )
        .route("/citas", get(citas::list_citas).post(citas::create_cita))
        .route(
            "/citas/:id",
            get(citas::get_cita)
                .put(citas::update_cita)
                .delete(citas::delete_cita),
        )
        .route(
            "/materiales",
            get(materiales::list_materiales).post(materiales::create_material),
        )
        .route(
            "/materiales/:id",
            get(materiales::get_material)
                .put(materiales::update_material)
                .delete(materiales::delete_material),
        )
        .route(
            "/servicios",
            get(servicios::list_servicios).post(servicios::create_servicio),
        )
        .route(
            "/servicios/:id",
            get(servicios::get_servicio)
                .put(servicios::update_servicio)
                .delete(servicios::delete_servicio),
        )
        .route("/informe", get(informe::get_informe))
        .layer(Extension(clientes_service))
        .layer(Extension(vehiculos_service))
        .layer(Extension(citas_service))
        .layer(Extension(materiales_service))
        .layer(Extension(servicios_service))
        .layer(Extension(informe_service))
}
