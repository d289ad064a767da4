//! DTOs and request types for the resource endpoints.

pub mod cita;
pub mod cliente;
pub mod informe;
pub mod material;
pub mod servicio;
pub mod vehiculo;

pub use cita::{CitaDto, CreateCitaRequest, UpdateCitaRequest};
pub use cliente::{ClienteDto, CreateClienteRequest, UpdateClienteRequest};
pub use informe::InformeDto;
pub use material::{CreateMaterialRequest, MaterialDto, UpdateMaterialRequest};
pub use servicio::{CreateServicioRequest, ServicioDto, UpdateServicioRequest};
pub use vehiculo::{CreateVehiculoRequest, UpdateVehiculoRequest, VehiculoDto};

use serde::Serialize;
use utoipa::ToSchema;

/// Confirmation body returned by delete endpoints.
#[derive(Debug, Serialize, ToSchema)]
pub struct MensajeResponse {
    pub message: String,
}

impl MensajeResponse {
    #[must_use]
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}
