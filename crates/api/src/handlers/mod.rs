//! Request handlers for the public API.
//!
//! Each submodule provides async handler functions for one resource.
//! Handlers validate input against the route contract, delegate to the
//! [`Storage`](nexaura_db::storage::Storage) in the app state and map
//! errors via [`AppError`](crate::error::AppError).

pub mod contact;
pub mod policy;
pub mod product;
