//! Tenant-scoped resource API.
//!
//! Every handler receives the caller's `TallerId` from the JWT
//! middleware; all reads and writes are filtered by it, so a row
//! belonging to another taller is indistinguishable from a missing one.

pub mod error;
pub mod handlers;
pub mod models;
pub mod router;
pub mod services;

pub use error::ApiError;
pub use router::api_router;
