//! Shared primitives for the taller workspace.
//!
//! Currently this crate provides the strongly typed tenant identifier
//! used across the auth and API layers.

pub mod ids;

pub use ids::{ParseIdError, TallerId};
