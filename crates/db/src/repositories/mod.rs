//! Repository layer.
//!
//! Each repository is a zero-sized struct providing async read methods
//! that accept `&PgPool` as the first argument.

pub mod store_app_repo;

pub use store_app_repo::StoreAppRepo;
