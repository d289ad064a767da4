//! Database models, one module per table.

pub mod cita;
pub mod cliente;
pub mod material;
pub mod servicio;
pub mod taller;
pub mod vehiculo;

pub use cita::{Cita, CitaChanges, CitaConCliente, NewCita};
pub use cliente::{Cliente, ClienteChanges, NewCliente};
pub use material::{Material, MaterialChanges, NewMaterial};
pub use servicio::{NewServicio, Servicio, ServicioChanges};
pub use taller::Taller;
pub use vehiculo::{NewVehiculo, Vehiculo, VehiculoChanges, VehiculoConCliente};
