//! HTTP client for the remote book catalog

use super::models::RemotePage;
use super::traits::{CatalogClient, CatalogError};
use crate::config::CatalogSettings;
use async_trait::async_trait;
use reqwest::{Client, Response};
use std::time::Duration;
use tracing::{debug, error};
use url::Url;

/// Catalog client backed by the itbook-style REST API
/// (`GET {base_url}/search/{keyword}/{page}`)
#[derive(Clone)]
pub struct HttpCatalogClient {
    client: Client,
    base_url: Url,
}

impl HttpCatalogClient {
    /// Create a new catalog client with default settings
    pub fn new() -> Result<Self, CatalogError> {
        Self::with_settings(&CatalogSettings::default())
    }

    /// Create a new catalog client with custom settings
    pub fn with_settings(settings: &CatalogSettings) -> Result<Self, CatalogError> {
        let timeout = Duration::try_from_secs_f64(settings.request_timeout).map_err(|_| {
            CatalogError::Other(format!(
                "invalid catalog request timeout: {}",
                settings.request_timeout
            ))
        })?;

        let mut builder = Client::builder()
            .timeout(timeout)
            .pool_max_idle_per_host(settings.pool_maxsize)
            .user_agent(settings.user_agent.clone())
            .gzip(true)
            .brotli(true);

        // SSL verification
        if !settings.verify_ssl {
            builder = builder.danger_accept_invalid_certs(true);
        }

        if let Some(ref proxy_url) = settings.proxy {
            builder = builder.proxy(reqwest::Proxy::all(proxy_url)?);
        }

        let base_url = Url::parse(&settings.base_url)?;
        if base_url.cannot_be_a_base() {
            return Err(CatalogError::Other(format!(
                "catalog URL cannot be a base: {}",
                settings.base_url
            )));
        }

        Ok(Self {
            client: builder.build()?,
            base_url,
        })
    }

    /// Build the search URL for one keyword/page, percent-encoding the keyword
    pub fn search_url(&self, keyword: &str, page: u32) -> Url {
        let mut url = self.base_url.clone();
        // cannot_be_a_base was rejected in the constructor
        if let Ok(mut segments) = url.path_segments_mut() {
            segments
                .pop_if_empty()
                .push("search")
                .push(keyword)
                .push(&page.to_string());
        }
        url
    }

    /// Turn a response into a page, logging the upstream payload on failure
    async fn parse_response(response: Response) -> Result<RemotePage, CatalogError> {
        let status = response.status();
        let body = response.text().await?;

        if !status.is_success() {
            error!("Catalog returned {}: {}", status, body);
            return Err(CatalogError::Status {
                status: status.as_u16(),
                body,
            });
        }

        serde_json::from_str(&body).map_err(|e| {
            error!("Failed to parse catalog payload: {}: {}", e, body);
            CatalogError::Decode(e)
        })
    }
}

#[async_trait]
impl CatalogClient for HttpCatalogClient {
    async fn fetch_page(&self, keyword: &str, page: u32) -> Result<RemotePage, CatalogError> {
        let url = self.search_url(keyword, page);
        debug!("Fetching catalog page {}", url);

        let response = self.client.get(url).send().await.map_err(|e| {
            error!("Catalog request for '{}' page {} failed: {}", keyword, page, e);
            CatalogError::Http(e)
        })?;

        Self::parse_response(response).await
    }
}
