//! Search query and result models

use super::error::SearchError;
use crate::catalog::CatalogRecord;
use crate::query::parse_page;
use serde::{Deserialize, Serialize};

/// A validated search request: raw keyword plus 1-based page
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchQuery {
    /// The keyword exactly as the caller sent it
    pub raw_keyword: String,
    /// Page number (1-indexed)
    pub page: u32,
}

impl SearchQuery {
    /// Build a query from raw caller input.
    ///
    /// Blank input fails with [`SearchError::EmptyQuery`]; a malformed page
    /// with [`SearchError::InvalidQuery`].
    pub fn new(raw_keyword: &str, raw_page: &str) -> Result<Self, SearchError> {
        if raw_keyword.trim().is_empty() || raw_page.trim().is_empty() {
            return Err(SearchError::EmptyQuery);
        }

        Ok(Self {
            raw_keyword: raw_keyword.to_string(),
            page: parse_page(raw_page)?,
        })
    }
}

/// The subset of a catalog record surfaced to callers
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BookSummary {
    pub title: String,
    pub subtitle: String,
    pub image: String,
}

impl From<&CatalogRecord> for BookSummary {
    fn from(record: &CatalogRecord) -> Self {
        Self {
            title: record.title.clone(),
            subtitle: record.subtitle.clone(),
            image: record.image.clone(),
        }
    }
}

impl From<CatalogRecord> for BookSummary {
    fn from(record: CatalogRecord) -> Self {
        Self {
            title: record.title,
            subtitle: record.subtitle,
            image: record.image,
        }
    }
}

/// One page of search results.
///
/// `total_page == 0` with no books means "no matches", not an error.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ResultPage {
    pub total_page: u32,
    pub books: Vec<BookSummary>,
}

impl ResultPage {
    /// The "no matches" result
    pub fn empty() -> Self {
        Self::default()
    }

    /// Build a page by projecting catalog records, preserving their order
    pub fn from_records<I>(total_page: u32, records: I) -> Self
    where
        I: IntoIterator,
        I::Item: Into<BookSummary>,
    {
        Self {
            total_page,
            books: records.into_iter().map(Into::into).collect(),
        }
    }

    /// Check if the page carries no results
    pub fn is_empty(&self) -> bool {
        self.books.is_empty()
    }
}
