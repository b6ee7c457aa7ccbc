//! Monument service
//!
//! [`MonumentService`] owns the two pieces of state that live as long as
//! the service instance:
//!
//! - the **working set**, the unfiltered result of the last successful
//!   aggregation, replaced wholesale by [`MonumentService::get_all_monuments`]
//! - the **favorites**, appended to by [`MonumentService::add_to_favorites`]
//!
//! Share it behind an `Arc`. The state sits behind a `tokio::sync::RwLock`;
//! fetching happens without holding it. When two aggregations overlap, the
//! one that finishes last defines the working set seen by later calls.

use crate::adapters::opendata::{default_sources, MonumentSource};
use crate::config::OpenDataConfig;
use crate::core::aggregate::Aggregator;
use crate::core::catalog;
use crate::core::favorites::Favorites;
use crate::core::filter::MonumentFilter;
use crate::domain::{Monument, MonumentQuery, Result, TypeEntry};
use std::sync::Arc;
use tokio::sync::RwLock;

#[derive(Debug, Default)]
struct ServiceState {
    working_set: Vec<Monument>,
    favorites: Favorites,
}

/// Aggregates, filters and tracks favorites for one process
pub struct MonumentService {
    aggregator: Aggregator,
    state: RwLock<ServiceState>,
}

impl MonumentService {
    /// Create a service over explicit sources, concatenated in this order
    pub fn new(sources: Vec<Arc<dyn MonumentSource>>) -> Self {
        Self {
            aggregator: Aggregator::new(sources),
            state: RwLock::new(ServiceState::default()),
        }
    }

    /// Create a service over the three catalog datasets
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP client cannot be built.
    ///
    /// # Example
    ///
    /// ```no_run
    /// use heritage::config::OpenDataConfig;
    /// use heritage::core::MonumentService;
    /// use heritage::domain::MonumentQuery;
    ///
    /// # async fn example() -> heritage::domain::Result<()> {
    /// let service = MonumentService::from_config(&OpenDataConfig::default())?;
    ///
    /// let churches = service
    ///     .get_all_monuments(&MonumentQuery::new().with_kind("eglise"))
    ///     .await?;
    /// if let Some(first) = churches.first() {
    ///     service.add_to_favorites(&first.id).await?;
    /// }
    /// # Ok(())
    /// # }
    /// ```
    pub fn from_config(config: &OpenDataConfig) -> Result<Self> {
        Ok(Self::new(default_sources(config)?))
    }

    /// Refresh the working set, then filter it
    ///
    /// The query is validated before anything is fetched. The working set
    /// keeps the full unfiltered aggregation; only the returned list is
    /// filtered.
    ///
    /// # Errors
    ///
    /// - [`crate::domain::HeritageError::Validation`] for an invalid query
    /// - [`crate::domain::HeritageError::Aggregation`] if any source fails,
    ///   in which case the previous working set is kept
    pub async fn get_all_monuments(&self, query: &MonumentQuery) -> Result<Vec<Monument>> {
        let filter = MonumentFilter::from_query(query)?;

        let monuments = self.aggregator.aggregate().await?;
        let filtered = filter.apply(monuments.clone());

        self.state.write().await.working_set = monuments;

        tracing::info!(
            query = ?query,
            count = filtered.len(),
            "Filtered monuments"
        );

        Ok(filtered)
    }

    /// Mark a monument of the current working set as favorite
    ///
    /// Nothing is fetched.
    ///
    /// # Errors
    ///
    /// - [`crate::domain::HeritageError::NotFound`] if `id` is not in the
    ///   working set
    /// - [`crate::domain::HeritageError::AlreadyFavorited`] if `id` is
    ///   already a favorite
    pub async fn add_to_favorites(&self, id: &str) -> Result<Monument> {
        let mut state = self.state.write().await;
        let ServiceState {
            working_set,
            favorites,
        } = &mut *state;

        match favorites.add(working_set, id) {
            Ok(monument) => {
                tracing::info!(id = %id, favorites = favorites.len(), "Added favorite");
                Ok(monument)
            }
            Err(e) => {
                tracing::warn!(id = %id, error = %e, "Favorite rejected");
                Err(e)
            }
        }
    }

    /// Distinct types of the current working set
    pub async fn list_types(&self) -> Vec<TypeEntry> {
        catalog::list_types(&self.state.read().await.working_set)
    }

    /// Snapshot of the favorites, in promotion order
    pub async fn favorites(&self) -> Vec<Monument> {
        self.state.read().await.favorites.as_slice().to_vec()
    }

    /// Size of the current working set
    pub async fn working_set_len(&self) -> usize {
        self.state.read().await.working_set.len()
    }
}
