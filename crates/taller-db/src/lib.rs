//! Postgres persistence layer for the taller service.
//!
//! One module per table. Each model is a `FromRow` struct with static
//! async query methods; every tenant-scoped query filters on `taller_id`
//! so rows belonging to another taller are simply invisible.

pub mod error;
pub mod models;

pub use error::DbError;
pub use models::{
    Cita, CitaChanges, CitaConCliente, Cliente, ClienteChanges, Material, MaterialChanges,
    NewCita, NewCliente, NewMaterial, NewServicio, NewVehiculo, Servicio, ServicioChanges,
    Taller, Vehiculo, VehiculoChanges, VehiculoConCliente,
};
