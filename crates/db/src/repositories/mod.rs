//! Repository layer.
//!
//! Each repository is a zero-sized struct providing async methods that
//! accept `&PgPool` as the first argument. Every method issues exactly one
//! statement and returns raw `sqlx::Error`s; classification into domain
//! errors happens in [`crate::storage`].

pub mod contact_message_repo;
pub mod policy_repo;
pub mod product_repo;

pub use contact_message_repo::ContactMessageRepo;
pub use policy_repo::PolicyRepo;
pub use product_repo::ProductRepo;
