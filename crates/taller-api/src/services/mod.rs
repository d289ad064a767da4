//! Business rules per resource. Each service holds the pool and is
//! shared across handlers behind an `Arc`.

pub mod cita;
pub mod cliente;
pub mod informe;
pub mod material;
pub mod servicio;
pub mod vehiculo;

pub use cita::CitaService;
pub use cliente::ClienteService;
pub use informe::InformeService;
pub use material::MaterialService;
pub use servicio::ServicioService;
pub use vehiculo::VehiculoService;
