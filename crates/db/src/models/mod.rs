//! Domain model structs and DTOs.
//!
//! Each submodule contains:
//! - A `FromRow` entity struct matching the database row
//! - The public DTO the HTTP layer serializes

pub mod store_app;
