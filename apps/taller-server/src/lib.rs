//! Router assembly and runtime support for the taller API server.
//!
//! The binary in `main.rs` only loads config, opens the pool and serves
//! the router built here; integration tests drive the same router
//! directly.

pub mod app;
pub mod config;
pub mod logging;
pub mod openapi;

pub use app::build_app;
pub use config::Config;
