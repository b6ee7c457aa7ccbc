//! Monument source trait definition
//!
//! This module defines the `MonumentSource` trait that abstracts one upstream
//! dataset. Each implementation fetches its records and normalizes them into
//! [`Monument`]s, so the aggregator never sees dataset-specific shapes.

use crate::domain::{FetchError, Monument};
use async_trait::async_trait;

/// Trait for upstream monument datasets
///
/// # Example
///
/// ```no_run
/// use heritage::adapters::opendata::{MonumentSource, OpenDataClient, RoubaixSource};
/// use heritage::config::OpenDataConfig;
///
/// # async fn example() -> Result<(), heritage::domain::FetchError> {
/// let config = OpenDataConfig::default();
/// let client = OpenDataClient::new(&config)?;
/// let source = RoubaixSource::new(client, config.datasets.roubaix.clone());
///
/// let monuments = source.fetch_monuments().await?;
/// println!("{} monuments from {}", monuments.len(), source.name());
/// # Ok(())
/// # }
/// ```
#[async_trait]
pub trait MonumentSource: Send + Sync {
    /// Short, stable name used in logs and errors
    fn name(&self) -> &str;

    /// Fetch every record of the dataset and normalize it
    ///
    /// # Errors
    ///
    /// Returns a [`FetchError`] if any request fails or any page cannot be
    /// decoded. No partial result is returned.
    async fn fetch_monuments(&self) -> Result<Vec<Monument>, FetchError>;
}
