//! Nexaura core: shared types, errors, entity schema rules and the HTTP
//! route contract.
//!
//! Nothing in this crate touches the database or the network, so the
//! server, the seed tool and any client bindings can share it.

pub mod contract;
pub mod error;
pub mod schema;
pub mod types;
