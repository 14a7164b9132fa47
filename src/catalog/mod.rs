//! Remote book catalog
//!
//! The catalog is an external service searched one keyword and one page at a
//! time. This module defines the client trait, its payload types and the
//! HTTP implementation.

mod client;
mod models;
mod traits;

#[cfg(test)]
pub(crate) mod testing;

pub use client::HttpCatalogClient;
pub use models::{CatalogRecord, RemotePage};
pub use traits::{CatalogClient, CatalogError};
