//! HTTP handlers for the resource endpoints.
//!
//! Every handler pulls the caller's `TallerId` out of the request
//! extensions, where the JWT middleware placed it.

pub mod citas;
pub mod clientes;
pub mod informe;
pub mod materiales;
pub mod servicios;
pub mod vehiculos;
