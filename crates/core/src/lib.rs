//! Domain core for the store-apps query service.
//!
//! Holds the shared identifier types, the domain error, and the filter
//! criteria every read path is expressed in. Nothing here touches the
//! database or HTTP.

pub mod error;
pub mod filter;
pub mod types;
