//! `OpenAPI` documentation for the taller API.
//!
//! The generated spec is served as plain JSON at
//! `/api-docs/openapi.json`.

use utoipa::openapi::security::{HttpAuthScheme, HttpBuilder, SecurityScheme};
use utoipa::{Modify, OpenApi};

/// Security scheme modifier for Bearer authentication.
struct SecurityAddon;

impl Modify for SecurityAddon {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        if let Some(components) = openapi.components.as_mut() {
            components.add_security_scheme(
                "bearerAuth",
                SecurityScheme::Http(
                    HttpBuilder::new()
                        .scheme(HttpAuthScheme::Bearer)
                        .bearer_format("JWT")
                        .build(),
                ),
            );
        }
    }
}

/// `OpenAPI` documentation for the taller API.
#[derive(OpenApi)]
#[openapi(
    info(
        title = "Taller API",
        version = "0.1.0",
        description = "Multi-tenant workshop management API"
    ),
    modifiers(&SecurityAddon),
    tags(
        (name = "Autenticación", description = "Registro e inicio de sesión"),
        (name = "Clientes", description = "Gestión de clientes"),
        (name = "Vehículos", description = "Gestión de vehículos"),
        (name = "Citas", description = "Gestión de citas"),
        (name = "Materiales", description = "Inventario de materiales"),
        (name = "Servicios", description = "Historial de servicios"),
        (name = "Informe", description = "Informe agregado del taller"),
    ),
    paths(
        taller_api_auth::handlers::register_handler,
        taller_api_auth::handlers::login_handler,
        taller_api::handlers::clientes::list_clientes,
        taller_api::handlers::clientes::get_cliente,
        taller_api::handlers::clientes::create_cliente,
        taller_api::handlers::clientes::update_cliente,
        taller_api::handlers::clientes::delete_cliente,
        taller_api::handlers::vehiculos::list_vehiculos,
        taller_api::handlers::vehiculos::get_vehiculo,
        taller_api::handlers::vehiculos::create_vehiculo,
        taller_api::handlers::vehiculos::update_vehiculo,
        taller_api::handlers::vehiculos::delete_vehiculo,
        taller_api::handlers::citas::list_citas,
        taller_api::handlers::citas::get_cita,
        taller_api::handlers::citas::create_cita,
        taller_api::handlers::citas::update_cita,
        taller_api::handlers::citas::delete_cita,
        taller_api::handlers::materiales::list_materiales,
        taller_api::handlers::materiales::get_material,
        taller_api::handlers::materiales::create_material,
        taller_api::handlers::materiales::update_material,
        taller_api::handlers::materiales::delete_material,
        taller_api::handlers::servicios::list_servicios,
        taller_api::handlers::servicios::get_servicio,
        taller_api::handlers::servicios::create_servicio,
        taller_api::handlers::servicios::update_servicio,
        taller_api::handlers::servicios::delete_servicio,
        taller_api::handlers::informe::get_informe,
    ),
    components(schemas(
        taller_api_auth::models::RegisterRequest,
        taller_api_auth::models::LoginRequest,
        taller_api_auth::models::SesionResponse,
        taller_api::models::ClienteDto,
        taller_api::models::CreateClienteRequest,
        taller_api::models::UpdateClienteRequest,
        taller_api::models::VehiculoDto,
        taller_api::models::CreateVehiculoRequest,
        taller_api::models::UpdateVehiculoRequest,
        taller_api::models::CitaDto,
        taller_api::models::CreateCitaRequest,
        taller_api::models::UpdateCitaRequest,
        taller_api::models::MaterialDto,
        taller_api::models::CreateMaterialRequest,
        taller_api::models::UpdateMaterialRequest,
        taller_api::models::ServicioDto,
        taller_api::models::CreateServicioRequest,
        taller_api::models::UpdateServicioRequest,
        taller_api::models::InformeDto,
        taller_api::models::MensajeResponse,
        taller_api::error::ErrorBody,
    ))
)]
pub struct ApiDoc;
