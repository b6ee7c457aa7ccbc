//! Lille dataset
//!
//! The dataset is larger than one page. A fixed number of pages is requested
//! concurrently at offsets `0, page_size, 2 * page_size, ...` and flattened
//! in offset order.

use super::MonumentSource;
use crate::adapters::opendata::models::LilleRecord;
use crate::adapters::opendata::OpenDataClient;
use crate::domain::{FetchError, Monument};
use async_trait::async_trait;
use futures::future::join_all;

/// Source for the Lille historic monuments dataset
pub struct LilleSource {
    client: OpenDataClient,
    dataset: String,
    pages: usize,
}

impl LilleSource {
    pub fn new(client: OpenDataClient, dataset: impl Into<String>, pages: usize) -> Self {
        Self {
            client,
            dataset: dataset.into(),
            pages,
        }
    }

    /// Offsets of every requested page
    pub fn page_offsets(&self) -> Vec<usize> {
        (0..self.pages)
            .map(|page| page * self.client.page_size())
            .collect()
    }
}

#[async_trait]
impl MonumentSource for LilleSource {
    fn name(&self) -> &str {
        "lille"
    }

    async fn fetch_monuments(&self) -> Result<Vec<Monument>, FetchError> {
        let requests = self.page_offsets().into_iter().map(|offset| {
            self.client
                .fetch_records::<LilleRecord>(&self.dataset, Some(offset))
        });

        // Every page runs to completion; the first failure in offset order wins.
        let pages = join_all(requests).await;

        let mut monuments = Vec::new();
        for page in pages {
            monuments.extend(page?.iter().map(LilleRecord::to_domain));
        }

        tracing::info!(
            source = self.name(),
            pages = self.pages,
            count = monuments.len(),
            "Fetched monuments"
        );

        Ok(monuments)
    }
}
