// Heritage - Historic monuments of the Lille metropolitan area
// Copyright (c) 2025 Heritage Contributors
// Licensed under the MIT License

//! # Heritage - Historic monuments of the Lille metropolitan area
//!
//! Heritage aggregates the historic-monument datasets that Armentières,
//! Lille and Roubaix publish on the Métropole Européenne de Lille open-data
//! catalog, normalizes them into one [`domain::Monument`] shape, and lets
//! callers filter them, mark favorites and list the monument types.
//!
//! ## Architecture
//!
//! - [`cli`] - Command-line interface and argument parsing
//! - [`core`] - Business logic (aggregation, filters, favorites, types)
//! - [`adapters`] - External integrations (the open-data catalog)
//! - [`domain`] - Core domain types and errors
//! - [`config`] - Configuration management
//! - [`logging`] - Structured logging
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use heritage::config::load_config_or_default;
//! use heritage::core::MonumentService;
//! use heritage::domain::MonumentQuery;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let config = load_config_or_default(None)?;
//!     let service = MonumentService::from_config(&config.opendata)?;
//!
//!     // Monuments of the 1850s within 2 km of the Grand Place
//!     let query = MonumentQuery::new()
//!         .with_date("1850")
//!         .with_center(50.6366, 3.0635)
//!         .with_radius(2_000.0);
//!     let monuments = service.get_all_monuments(&query).await?;
//!
//!     println!("Found {} monuments", monuments.len());
//!     Ok(())
//! }
//! ```
//!
//! ## Error Handling
//!
//! Fallible operations return [`domain::Result`], whose error type
//! [`domain::HeritageError`] maps onto an HTTP-style status through
//! [`domain::HeritageError::status_code`].

pub mod adapters;
pub mod cli;
pub mod config;
pub mod core;
pub mod domain;
pub mod logging;
