//! Open-data catalog HTTP client
//!
//! This module provides [`OpenDataClient`], a thin wrapper over `reqwest`
//! that fetches one page of records from a dataset of an Opendatasoft
//! Explore v2.1 catalog and decodes the `results` envelope.

use crate::config::OpenDataConfig;
use crate::domain::FetchError;
use reqwest::{Client, ClientBuilder};
use serde::de::DeserializeOwned;
use std::time::Duration;
use url::Url;

use super::models::RecordsEnvelope;

/// Upper bound on the connect phase of a request
const MAX_CONNECT_TIMEOUT_SECS: u64 = 30;

/// Connect timeout, never longer than the whole request may take
fn connect_timeout(timeout_seconds: u64) -> Duration {
    Duration::from_secs(timeout_seconds.min(MAX_CONNECT_TIMEOUT_SECS))
}

/// Client for one open-data catalog
///
/// Cloning is cheap; the underlying connection pool is shared.
#[derive(Debug, Clone)]
pub struct OpenDataClient {
    /// Catalog base URL, without a trailing slash
    base_url: String,

    /// HTTP client for making requests
    client: Client,

    /// Records requested per page
    page_size: usize,
}

impl OpenDataClient {
    /// Create a new client from configuration
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP client cannot be built.
    ///
    /// # Example
    ///
    /// ```no_run
    /// use heritage::adapters::opendata::OpenDataClient;
    /// use heritage::config::OpenDataConfig;
    ///
    /// let client = OpenDataClient::new(&OpenDataConfig::default())?;
    /// # Ok::<(), heritage::domain::FetchError>(())
    /// ```
    pub fn new(config: &OpenDataConfig) -> Result<Self, FetchError> {
        let client = ClientBuilder::new()
            .timeout(Duration::from_secs(config.timeout_seconds))
            .connect_timeout(connect_timeout(config.timeout_seconds))
            .user_agent(concat!("heritage/", env!("CARGO_PKG_VERSION")))
            .build()
            .map_err(|e| FetchError::ConnectionFailed(format!("Failed to build HTTP client: {e}")))?;

        Ok(Self {
            base_url: config.base_url.trim_end_matches('/').to_string(),
            client,
            page_size: config.page_size,
        })
    }

    /// Get the catalog base URL
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Records requested per page
    pub fn page_size(&self) -> usize {
        self.page_size
    }

    /// Build the records URL for one page of a dataset
    ///
    /// The offset parameter is only sent when given.
    pub fn records_url(&self, dataset: &str, offset: Option<usize>) -> Result<Url, FetchError> {
        let raw = format!("{}/{}/records", self.base_url, dataset);
        let mut url = Url::parse(&raw).map_err(|e| FetchError::InvalidUrl(format!("{raw}: {e}")))?;

        {
            let mut pairs = url.query_pairs_mut();
            pairs.append_pair("limit", &self.page_size.to_string());
            if let Some(offset) = offset {
                pairs.append_pair("offset", &offset.to_string());
            }
        }

        Ok(url)
    }

    /// Fetch one page of records from a dataset
    ///
    /// # Errors
    ///
    /// - [`FetchError::ConnectionFailed`] if the request cannot be sent
    /// - [`FetchError::ClientError`] / [`FetchError::ServerError`] on a
    ///   non-success status
    /// - [`FetchError::InvalidResponse`] if the body is not a `results`
    ///   envelope of `T`
    pub async fn fetch_records<T>(
        &self,
        dataset: &str,
        offset: Option<usize>,
    ) -> Result<Vec<T>, FetchError>
    where
        T: DeserializeOwned,
    {
        let url = self.records_url(dataset, offset)?;

        tracing::debug!(dataset = %dataset, url = %url, "Fetching dataset records");

        let response = self
            .client
            .get(url)
            .send()
            .await
            .map_err(|e| FetchError::ConnectionFailed(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            tracing::error!(
                dataset = %dataset,
                status = status.as_u16(),
                "Dataset request failed"
            );
            return Err(FetchError::from_status(
                status.as_u16(),
                format!("GET {dataset} records failed: {body}"),
            ));
        }

        let body = response
            .text()
            .await
            .map_err(|e| FetchError::ConnectionFailed(e.to_string()))?;

        let envelope: RecordsEnvelope<T> = serde_json::from_str(&body)
            .map_err(|e| FetchError::InvalidResponse(format!("{dataset}: {e}")))?;

        tracing::debug!(
            dataset = %dataset,
            offset = offset.unwrap_or(0),
            count = envelope.results.len(),
            total_count = ?envelope.total_count,
            "Fetched dataset records"
        );

        Ok(envelope.results)
    }
}
