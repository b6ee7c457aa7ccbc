//! Core business logic for Heritage.
//!
//! # Modules
//!
//! - [`aggregate`] - Concurrent fetch of every source, concatenated in order
//! - [`filter`] - Decade, spatial, type and city filter pipeline
//! - [`distance`] - Haversine great-circle distance
//! - [`favorites`] - Favorites tracker
//! - [`catalog`] - Distinct monument types of a working set
//! - [`service`] - [`MonumentService`], owner of the working set and favorites
//!
//! # Query Workflow
//!
//! 1. **Validate**: Turn the query into a [`filter::MonumentFilter`]
//! 2. **Aggregate**: Fetch Armentières, Lille and Roubaix concurrently
//! 3. **Replace**: Store the unfiltered result as the new working set
//! 4. **Filter**: Apply the pipeline and return the matches
//!
//! Favorites and types read the last working set without fetching.
//!
//! # Example
//!
//! ```rust,no_run
//! use heritage::config::OpenDataConfig;
//! use heritage::core::MonumentService;
//! use heritage::domain::MonumentQuery;
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let service = MonumentService::from_config(&OpenDataConfig::default())?;
//!
//! let query = MonumentQuery::new()
//!     .with_center(50.6366, 3.0635)
//!     .with_radius(1_000.0);
//! let nearby = service.get_all_monuments(&query).await?;
//!
//! for entry in service.list_types().await {
//!     println!("{}: {}", entry.id, entry.kind);
//! }
//! # Ok(())
//! # }
//! ```

pub mod aggregate;
pub mod catalog;
pub mod distance;
pub mod favorites;
pub mod filter;
pub mod service;

pub use aggregate::Aggregator;
pub use service::MonumentService;
