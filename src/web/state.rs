//! Application state shared across handlers

use crate::catalog::{CatalogClient, HttpCatalogClient};
use crate::config::Settings;
use crate::search::Search;
use std::sync::Arc;

/// Shared application state
#[derive(Clone)]
pub struct AppState {
    /// Search executor
    pub search: Arc<Search>,
}

impl AppState {
    /// Create application state backed by the HTTP catalog client
    pub fn new(settings: &Settings) -> anyhow::Result<Self> {
        let client = HttpCatalogClient::with_settings(&settings.catalog)?;
        let search = Search::new(Arc::new(client)).with_max_pages(settings.catalog.max_pages);
        Ok(Self {
            search: Arc::new(search),
        })
    }

    /// Create application state over any catalog implementation
    pub fn with_catalog(catalog: Arc<dyn CatalogClient>) -> Self {
        Self {
            search: Arc::new(Search::new(catalog)),
        }
    }
}
