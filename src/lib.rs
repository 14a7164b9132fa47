//! Book-Search-RS: keyword search over a remote book catalog
//!
//! Supports plain keywords and `include-exclude` queries. Exclusion is not
//! something the catalog understands, so those queries fetch every page for
//! the include term, filter locally and paginate the filtered set.

pub mod catalog;
pub mod config;
pub mod query;
pub mod search;
pub mod web;

pub use catalog::{CatalogClient, HttpCatalogClient};
pub use config::Settings;
pub use query::KeywordExpression;
pub use search::{ResultPage, Search, SearchError, SearchQuery};

/// Application version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Records per page, both for the remote catalog and for our own results
pub const PAGE_SIZE: usize = 10;

/// Default cap on remote pages fetched by one exclusion search
pub const DEFAULT_MAX_REMOTE_PAGES: u32 = 100;

/// Number of pages needed to hold `total` records
pub fn page_count(total: u64) -> u32 {
    let pages = total.div_ceil(PAGE_SIZE as u64);
    u32::try_from(pages).unwrap_or(u32::MAX)
}
