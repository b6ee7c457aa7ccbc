//! Roubaix dataset
//!
//! Single page of at most `page_size` records.

use super::MonumentSource;
use crate::adapters::opendata::models::RoubaixRecord;
use crate::adapters::opendata::OpenDataClient;
use crate::domain::{FetchError, Monument};
use async_trait::async_trait;

/// Source for the Roubaix historic monuments dataset
pub struct RoubaixSource {
    client: OpenDataClient,
    dataset: String,
}

impl RoubaixSource {
    pub fn new(client: OpenDataClient, dataset: impl Into<String>) -> Self {
        Self {
            client,
            dataset: dataset.into(),
        }
    }
}

#[async_trait]
impl MonumentSource for RoubaixSource {
    fn name(&self) -> &str {
        "roubaix"
    }

    async fn fetch_monuments(&self) -> Result<Vec<Monument>, FetchError> {
        let records: Vec<RoubaixRecord> = self.client.fetch_records(&self.dataset, None).await?;
        let monuments: Vec<Monument> = records.iter().map(RoubaixRecord::to_domain).collect();

        tracing::info!(
            source = self.name(),
            count = monuments.len(),
            "Fetched monuments"
        );

        Ok(monuments)
    }
}
