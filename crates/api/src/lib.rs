//! Nexaura API server library.
//!
//! Exposes the building blocks (config, state, error handling, routes,
//! catalog seeding) so integration tests and both binaries share them.

pub mod config;
pub mod error;
pub mod handlers;
pub mod router;
pub mod routes;
pub mod seed;
pub mod state;
pub mod telemetry;
