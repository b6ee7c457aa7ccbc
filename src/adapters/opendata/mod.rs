//! Open-data catalog adapter
//!
//! This module provides the integration with the Métropole Européenne de
//! Lille open-data catalog: the HTTP client, the upstream record models and
//! one [`MonumentSource`] per dataset.

pub mod client;
pub mod models;
pub mod source;

pub use client::OpenDataClient;
pub use source::{ArmentieresSource, LilleSource, MonumentSource, RoubaixSource};

use crate::config::OpenDataConfig;
use crate::domain::FetchError;
use std::sync::Arc;

/// Builds the three dataset sources in aggregation order
///
/// The order is Armentières, Lille, Roubaix.
pub fn default_sources(config: &OpenDataConfig) -> Result<Vec<Arc<dyn MonumentSource>>, FetchError> {
    let client = OpenDataClient::new(config)?;

    Ok(vec![
        Arc::new(ArmentieresSource::new(
            client.clone(),
            config.datasets.armentieres.clone(),
        )),
        Arc::new(LilleSource::new(
            client.clone(),
            config.datasets.lille.clone(),
            config.lille_pages,
        )),
        Arc::new(RoubaixSource::new(client, config.datasets.roubaix.clone())),
    ])
}
