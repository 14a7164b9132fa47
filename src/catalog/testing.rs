//! In-memory catalog used by unit tests

use super::models::{CatalogRecord, RemotePage};
use super::traits::{CatalogClient, CatalogError};
use crate::PAGE_SIZE;
use async_trait::async_trait;
use std::collections::{HashMap, HashSet};
use std::sync::Mutex;
use std::time::Duration;

/// Serves fixed record lists per keyword, paged like the real catalog.
/// Records calls, and can delay or fail individual pages.
#[derive(Default)]
pub struct StaticCatalog {
    books: HashMap<String, Vec<CatalogRecord>>,
    delays: HashMap<u32, Duration>,
    failing_pages: HashSet<u32>,
    reported_total: Option<u64>,
    calls: Mutex<Vec<(String, u32)>>,
}

impl StaticCatalog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register the full result list for a keyword
    pub fn with_books(mut self, keyword: &str, records: Vec<CatalogRecord>) -> Self {
        self.books.insert(keyword.to_string(), records);
        self
    }

    /// Delay responses for one page number
    pub fn with_delay(mut self, page: u32, delay: Duration) -> Self {
        self.delays.insert(page, delay);
        self
    }

    /// Report `total` instead of the real number of records
    pub fn with_reported_total(mut self, total: u64) -> Self {
        self.reported_total = Some(total);
        self
    }

    /// Fail every request for one page number
    pub fn failing_page(mut self, page: u32) -> Self {
        self.failing_pages.insert(page);
        self
    }

    /// Calls made so far, in arrival order
    pub fn calls(&self) -> Vec<(String, u32)> {
        self.calls.lock().unwrap().clone()
    }

    /// Pages requested so far, sorted
    pub fn requested_pages(&self) -> Vec<u32> {
        let mut pages: Vec<u32> = self.calls().into_iter().map(|(_, p)| p).collect();
        pages.sort_unstable();
        pages
    }
}

#[async_trait]
impl CatalogClient for StaticCatalog {
    async fn fetch_page(&self, keyword: &str, page: u32) -> Result<RemotePage, CatalogError> {
        self.calls.lock().unwrap().push((keyword.to_string(), page));

        if let Some(delay) = self.delays.get(&page) {
            tokio::time::sleep(*delay).await;
        }

        if self.failing_pages.contains(&page) {
            return Err(CatalogError::Status {
                status: 500,
                body: format!("page {page} unavailable"),
            });
        }

        let all = self.books.get(keyword).map(Vec::as_slice).unwrap_or_default();
        let start = (page.saturating_sub(1) as usize).saturating_mul(PAGE_SIZE);
        let records = all.iter().skip(start).take(PAGE_SIZE).cloned().collect();

        let total = self.reported_total.unwrap_or(all.len() as u64);
        Ok(RemotePage::new(total, records))
    }
}

/// `count` records titled "{prefix} 1" .. "{prefix} count"
pub fn numbered_books(prefix: &str, count: usize) -> Vec<CatalogRecord> {
    (1..=count)
        .map(|i| {
            CatalogRecord::new(format!("{prefix} {i}"), format!("Volume {i}"))
                .with_image(format!("https://img.example/{i}.png"))
        })
        .collect()
}
