//! Search error taxonomy

use crate::catalog::CatalogError;
use crate::query::QueryError;
use thiserror::Error;

/// Failure of a book search
#[derive(Debug, Error)]
pub enum SearchError {
    /// Search or page argument missing or blank
    #[error("search and page are required")]
    EmptyQuery,
    /// Keyword or page failed validation
    #[error("invalid query: {0}")]
    InvalidQuery(#[from] QueryError),
    /// A remote catalog call failed. The upstream detail is kept as the
    /// source for logging and is not part of the message.
    #[error("catalog search failed")]
    Upstream(#[from] CatalogError),
}

impl SearchError {
    /// Whether the caller is at fault (bad request) rather than the upstream
    pub fn is_client_error(&self) -> bool {
        matches!(self, Self::EmptyQuery | Self::InvalidQuery(_))
    }
}
