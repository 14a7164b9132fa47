//! Include/exclude search
//!
//! The catalog cannot exclude terms, so the whole result set for the include
//! term is fetched, filtered locally and re-paginated. Page 1 is fetched
//! first to learn the total; the remaining pages are fetched concurrently and
//! merged in page order.

use super::error::SearchError;
use super::models::ResultPage;
use crate::catalog::{CatalogClient, CatalogError, CatalogRecord};
use crate::{page_count, PAGE_SIZE};
use futures::future::try_join_all;
use tracing::{debug, warn};

/// Search for `include`, drop records mentioning `exclude`, and return the
/// requested page of what is left.
///
/// Fails if the catalog reports more than `max_pages` pages.
pub async fn execute(
    catalog: &dyn CatalogClient,
    include: &str,
    exclude: &str,
    page: u32,
    max_pages: u32,
) -> Result<ResultPage, SearchError> {
    let first = catalog.fetch_page(include, 1).await?;

    if first.total < 1 {
        debug!("No catalog results for '{}'", include);
        return Ok(ResultPage::empty());
    }

    let remote_pages = first.page_count();
    if remote_pages > max_pages {
        warn!(
            "Catalog reports {} pages for '{}', limit is {}",
            remote_pages, include, max_pages
        );
        return Err(CatalogError::Other(format!(
            "catalog reported {} pages, limit is {}",
            remote_pages, max_pages
        ))
        .into());
    }

    let mut merged = first.records;

    if remote_pages > 1 {
        debug!(
            "Fetching {} more pages for '{}'",
            remote_pages - 1,
            include
        );

        // try_join_all yields in input order and fails on the first error
        let rest = try_join_all((2..=remote_pages).map(|n| catalog.fetch_page(include, n))).await?;

        for remote in rest {
            merged.extend(remote.records);
        }
    }

    let filtered = exclude_mentions(merged, exclude);
    debug!(
        "{} records left for '{}' after excluding '{}'",
        filtered.len(),
        include,
        exclude
    );

    if filtered.is_empty() {
        return Ok(ResultPage::empty());
    }

    let total_page = page_count(filtered.len() as u64);
    Ok(ResultPage::from_records(total_page, page_window(filtered, page)))
}

/// Drop records whose title or subtitle contains `exclude`, ignoring case
fn exclude_mentions(records: Vec<CatalogRecord>, exclude: &str) -> Vec<CatalogRecord> {
    let needle = exclude.to_lowercase();
    records
        .into_iter()
        .filter(|record| !record.mentions(&needle))
        .collect()
}

/// Records in `[PAGE_SIZE * (page - 1), PAGE_SIZE * page)`, empty past the end
fn page_window(records: Vec<CatalogRecord>, page: u32) -> Vec<CatalogRecord> {
    let start = (page.saturating_sub(1) as usize).saturating_mul(PAGE_SIZE);
    records.into_iter().skip(start).take(PAGE_SIZE).collect()
}
