//! Aggregator
//!
//! Fetches every source concurrently and concatenates the results in source
//! order. All-or-nothing: any failing source fails the whole aggregation and
//! no partial list is returned.

use crate::adapters::opendata::MonumentSource;
use crate::domain::{HeritageError, Monument, Result};
use futures::future::join_all;
use std::sync::Arc;
use std::time::Instant;

/// Ordered set of monument sources
#[derive(Clone)]
pub struct Aggregator {
    sources: Vec<Arc<dyn MonumentSource>>,
}

impl Aggregator {
    /// Create an aggregator; results are concatenated in `sources` order
    pub fn new(sources: Vec<Arc<dyn MonumentSource>>) -> Self {
        Self { sources }
    }

    /// Names of the sources, in concatenation order
    pub fn source_names(&self) -> Vec<&str> {
        self.sources.iter().map(|s| s.name()).collect()
    }

    /// Fetch all sources and concatenate their monuments
    ///
    /// Every fetch runs to completion before the outcome is decided.
    ///
    /// # Errors
    ///
    /// Returns [`HeritageError::Aggregation`] naming the first failing source
    /// in source order.
    pub async fn aggregate(&self) -> Result<Vec<Monument>> {
        let start = Instant::now();

        let results = join_all(self.sources.iter().map(|s| s.fetch_monuments())).await;

        let mut monuments = Vec::new();
        for (source, result) in self.sources.iter().zip(results) {
            match result {
                Ok(batch) => monuments.extend(batch),
                Err(error) => {
                    tracing::error!(
                        source = source.name(),
                        error = %error,
                        "Source fetch failed, aggregation aborted"
                    );
                    return Err(HeritageError::aggregation(source.name(), error));
                }
            }
        }

        tracing::info!(
            sources = self.sources.len(),
            count = monuments.len(),
            duration_ms = start.elapsed().as_millis() as u64,
            "Aggregated monuments"
        );

        Ok(monuments)
    }
}
