//! External system integrations for Heritage.
//!
//! - [`opendata`] - Open-data catalog client and per-dataset monument sources
//!
//! # Design Pattern
//!
//! Adapters isolate upstream schemas behind the [`opendata::MonumentSource`]
//! trait, so the core only ever handles normalized monuments and tests can
//! substitute in-memory sources.
//!
//! ```rust,no_run
//! use heritage::adapters::opendata::default_sources;
//! use heritage::config::OpenDataConfig;
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! for source in default_sources(&OpenDataConfig::default())? {
//!     let monuments = source.fetch_monuments().await?;
//!     println!("{}: {}", source.name(), monuments.len());
//! }
//! # Ok(())
//! # }
//! ```

pub mod opendata;
