//! Configuration management for Heritage.
//!
//! Heritage reads an optional TOML file with support for:
//! - Environment variable substitution (`${VAR_NAME}`)
//! - Default values for every setting
//! - `HERITAGE_*` environment overrides
//! - Validation on load
//!
//! # Configuration Structure
//!
//! - [`ApplicationConfig`] - Application settings (log level)
//! - [`OpenDataConfig`] - Catalog URL, paging, timeout and dataset ids
//! - [`LoggingConfig`] - Local file logging
//!
//! # Example Configuration
//!
//! ```toml
//! [application]
//! log_level = "info"
//!
//! [opendata]
//! base_url = "https://opendata.lillemetropole.fr/api/explore/v2.1/catalog/datasets"
//! page_size = 100
//! lille_pages = 4
//! timeout_seconds = 30
//!
//! [opendata.datasets]
//! armentieres = "monuments-historiques-armentieres"
//! lille = "monuments-historiques-lille"
//! roubaix = "liste-monuments-historiques-de-roubaix"
//!
//! [logging]
//! local_enabled = false
//! local_path = "/var/log/heritage"
//! local_rotation = "daily"
//! ```
//!
//! # Loading
//!
//! ```rust,no_run
//! use heritage::config::load_config;
//!
//! # fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let config = load_config("heritage.toml")?;
//! println!("Catalog: {}", config.opendata.base_url);
//! # Ok(())
//! # }
//! ```

pub mod loader;
pub mod schema;

// Re-export commonly used types
pub use loader::{load_config, load_config_or_default};
pub use schema::{
    ApplicationConfig, DatasetsConfig, HeritageConfig, LoggingConfig, OpenDataConfig,
};
