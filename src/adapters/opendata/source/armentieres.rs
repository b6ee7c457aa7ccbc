//! Armentières dataset
//!
//! Single page of at most `page_size` records.

use super::MonumentSource;
use crate::adapters::opendata::models::ArmentieresRecord;
use crate::adapters::opendata::OpenDataClient;
use crate::domain::{FetchError, Monument};
use async_trait::async_trait;

/// Source for the Armentières historic monuments dataset
pub struct ArmentieresSource {
    client: OpenDataClient,
    dataset: String,
}

impl ArmentieresSource {
    pub fn new(client: OpenDataClient, dataset: impl Into<String>) -> Self {
        Self {
            client,
            dataset: dataset.into(),
        }
    }
}

#[async_trait]
impl MonumentSource for ArmentieresSource {
    fn name(&self) -> &str {
        "armentieres"
    }

    async fn fetch_monuments(&self) -> Result<Vec<Monument>, FetchError> {
        let records: Vec<ArmentieresRecord> =
            self.client.fetch_records(&self.dataset, None).await?;

        let monuments: Vec<Monument> = records.iter().map(ArmentieresRecord::to_domain).collect();

        let without_id = monuments.iter().filter(|m| m.id.is_empty()).count();
        if without_id > 0 {
            tracing::warn!(
                source = self.name(),
                count = without_id,
                "Records without photo id, monument id left empty"
            );
        }

        tracing::info!(
            source = self.name(),
            count = monuments.len(),
            "Fetched monuments"
        );

        Ok(monuments)
    }
}
