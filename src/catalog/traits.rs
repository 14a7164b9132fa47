//! Catalog client trait and error type

use super::models::RemotePage;
use async_trait::async_trait;
use thiserror::Error;

/// Failure of a single remote catalog call
#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("request failed: {0}")]
    Http(#[from] reqwest::Error),
    #[error("catalog returned HTTP {status}: {body}")]
    Status { status: u16, body: String },
    #[error("malformed catalog payload: {0}")]
    Decode(#[from] serde_json::Error),
    #[error("invalid catalog URL: {0}")]
    InvalidUrl(#[from] url::ParseError),
    #[error("{0}")]
    Other(String),
}

/// A remote book catalog, searchable one page at a time.
///
/// Pages are 1-based and hold at most [`crate::PAGE_SIZE`] records.
/// Timeouts and transport policy belong to the implementation.
#[async_trait]
pub trait CatalogClient: Send + Sync {
    /// Fetch one page of results for a single keyword
    async fn fetch_page(&self, keyword: &str, page: u32) -> Result<RemotePage, CatalogError>;
}
