//! Configuration schema types
//!
//! This module defines the configuration structure for Heritage.

use serde::{Deserialize, Serialize};

/// Base URL of the Métropole Européenne de Lille open-data catalog
pub const DEFAULT_BASE_URL: &str =
    "https://opendata.lillemetropole.fr/api/explore/v2.1/catalog/datasets";

/// Largest page the catalog API will serve
pub const MAX_PAGE_SIZE: usize = 100;

/// Main Heritage configuration
///
/// This is the root configuration structure that maps to the TOML file.
/// Every section is optional; missing sections take their defaults.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct HeritageConfig {
    /// Application-level settings
    #[serde(default)]
    pub application: ApplicationConfig,

    /// Upstream open-data settings
    #[serde(default)]
    pub opendata: OpenDataConfig,

    /// Logging configuration
    #[serde(default)]
    pub logging: LoggingConfig,
}

impl HeritageConfig {
    /// Validates the configuration
    ///
    /// # Errors
    ///
    /// Returns an error if any configuration values are invalid
    pub fn validate(&self) -> Result<(), String> {
        self.application.validate()?;
        self.opendata.validate()?;
        self.logging.validate()?;
        Ok(())
    }
}

/// Application-level configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApplicationConfig {
    /// Log level (trace, debug, info, warn, error)
    #[serde(default = "default_log_level")]
    pub log_level: String,
}

impl ApplicationConfig {
    fn validate(&self) -> Result<(), String> {
        let valid_levels = ["trace", "debug", "info", "warn", "error"];
        if !valid_levels.contains(&self.log_level.as_str()) {
            return Err(format!(
                "Invalid log_level '{}'. Must be one of: {}",
                self.log_level,
                valid_levels.join(", ")
            ));
        }
        Ok(())
    }
}

impl Default for ApplicationConfig {
    fn default() -> Self {
        Self {
            log_level: default_log_level(),
        }
    }
}

/// Open-data catalog configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OpenDataConfig {
    /// Catalog base URL; dataset ids are appended to it
    #[serde(default = "default_base_url")]
    pub base_url: String,

    /// Records requested per page
    #[serde(default = "default_page_size")]
    pub page_size: usize,

    /// Number of pages fetched from the Lille dataset
    #[serde(default = "default_lille_pages")]
    pub lille_pages: usize,

    /// HTTP timeout in seconds
    #[serde(default = "default_timeout_seconds")]
    pub timeout_seconds: u64,

    /// Dataset identifiers
    #[serde(default)]
    pub datasets: DatasetsConfig,
}

impl OpenDataConfig {
    fn validate(&self) -> Result<(), String> {
        if self.base_url.is_empty() {
            return Err("opendata.base_url cannot be empty".to_string());
        }

        if !self.base_url.starts_with("http://") && !self.base_url.starts_with("https://") {
            return Err("opendata.base_url must start with http:// or https://".to_string());
        }

        if self.page_size == 0 || self.page_size > MAX_PAGE_SIZE {
            return Err(format!(
                "opendata.page_size must be between 1 and {MAX_PAGE_SIZE}, got {}",
                self.page_size
            ));
        }

        if self.lille_pages == 0 {
            return Err("opendata.lille_pages must be > 0".to_string());
        }

        if self.timeout_seconds == 0 {
            return Err("opendata.timeout_seconds must be > 0".to_string());
        }

        self.datasets.validate()
    }
}

impl Default for OpenDataConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            page_size: default_page_size(),
            lille_pages: default_lille_pages(),
            timeout_seconds: default_timeout_seconds(),
            datasets: DatasetsConfig::default(),
        }
    }
}

/// Dataset identifiers within the catalog
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DatasetsConfig {
    #[serde(default = "default_armentieres_dataset")]
    pub armentieres: String,

    #[serde(default = "default_lille_dataset")]
    pub lille: String,

    #[serde(default = "default_roubaix_dataset")]
    pub roubaix: String,
}

impl DatasetsConfig {
    fn validate(&self) -> Result<(), String> {
        for (name, value) in [
            ("armentieres", &self.armentieres),
            ("lille", &self.lille),
            ("roubaix", &self.roubaix),
        ] {
            if value.trim().is_empty() {
                return Err(format!("opendata.datasets.{name} cannot be empty"));
            }
        }
        Ok(())
    }
}

impl Default for DatasetsConfig {
    fn default() -> Self {
        Self {
            armentieres: default_armentieres_dataset(),
            lille: default_lille_dataset(),
            roubaix: default_roubaix_dataset(),
        }
    }
}

/// Logging configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// Enable local JSON file logging
    #[serde(default)]
    pub local_enabled: bool,

    /// Local log directory
    #[serde(default = "default_local_path")]
    pub local_path: String,

    /// Log rotation strategy
    #[serde(default = "default_local_rotation")]
    pub local_rotation: String,
}

impl LoggingConfig {
    fn validate(&self) -> Result<(), String> {
        let valid_rotations = ["daily", "hourly", "never"];
        if !valid_rotations.contains(&self.local_rotation.as_str()) {
            return Err(format!(
                "Invalid logging.local_rotation '{}'. Must be one of: {}",
                self.local_rotation,
                valid_rotations.join(", ")
            ));
        }

        if self.local_enabled && self.local_path.trim().is_empty() {
            return Err("logging.local_path cannot be empty when local_enabled".to_string());
        }

        Ok(())
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            local_enabled: false,
            local_path: default_local_path(),
            local_rotation: default_local_rotation(),
        }
    }
}

// Default value functions
fn default_log_level() -> String {
    "info".to_string()
}

fn default_base_url() -> String {
    DEFAULT_BASE_URL.to_string()
}

fn default_page_size() -> usize {
    MAX_PAGE_SIZE
}

fn default_lille_pages() -> usize {
    4
}

fn default_timeout_seconds() -> u64 {
    30
}

fn default_armentieres_dataset() -> String {
    "monuments-historiques-armentieres".to_string()
}

fn default_lille_dataset() -> String {
    "monuments-historiques-lille".to_string()
}

fn default_roubaix_dataset() -> String {
    "liste-monuments-historiques-de-roubaix".to_string()
}

fn default_local_path() -> String {
    "/var/log/heritage".to_string()
}

fn default_local_rotation() -> String {
    "daily".to_string()
}
