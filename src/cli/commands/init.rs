//! Init command implementation
//!
//! This module implements the `init` command for generating a sample
//! configuration file.

use crate::cli::{EXIT_CONFIG, EXIT_FATAL, EXIT_OK};
use clap::Args;
use std::fs;
use std::path::Path;

/// Arguments for the init command
#[derive(Args, Debug)]
pub struct InitArgs {
    /// Path where to create the configuration file
    #[arg(short, long, default_value = "heritage.toml")]
    pub output: String,

    /// Overwrite existing file
    #[arg(long)]
    pub force: bool,
}

impl InitArgs {
    /// Execute the init command
    pub async fn execute(&self) -> anyhow::Result<i32> {
        tracing::info!(output = %self.output, "Initializing configuration file");

        println!("📝 Initializing Heritage configuration");
        println!();

        if Path::new(&self.output).exists() && !self.force {
            println!("❌ Configuration file already exists: {}", self.output);
            println!("   Use --force to overwrite");
            return Ok(EXIT_CONFIG);
        }

        match fs::write(&self.output, Self::sample_config()) {
            Ok(_) => {
                println!("✅ Configuration file created: {}", self.output);
                println!();
                println!("Next steps:");
                println!("  1. Edit {} if the catalog or datasets moved", self.output);
                println!("  2. Validate configuration: heritage --config {} validate-config", self.output);
                println!("  3. List monuments: heritage --config {} monuments", self.output);
                println!();
                Ok(EXIT_OK)
            }
            Err(e) => {
                println!("❌ Failed to write configuration file");
                println!("   Error: {}", e);
                Ok(EXIT_FATAL)
            }
        }
    }

    /// Sample configuration with the built-in defaults
    pub(crate) fn sample_config() -> String {
        r#"# Heritage Configuration File
# Historic monuments of Armentières, Lille and Roubaix
#
# Values of the form ${VAR} are replaced by the environment variable VAR.
# Any HERITAGE_<SECTION>_<KEY> environment variable overrides this file.

# ============================================================================
# Application Settings
# ============================================================================
[application]
# Log level (trace, debug, info, warn, error)
log_level = "info"

# ============================================================================
# Open-Data Catalog
# ============================================================================
[opendata]
# Opendatasoft Explore v2.1 datasets endpoint
base_url = "https://opendata.lillemetropole.fr/api/explore/v2.1/catalog/datasets"

# Records per request (1-100)
page_size = 100

# Pages fetched from the Lille dataset
lille_pages = 4

# Request timeout in seconds
timeout_seconds = 30

[opendata.datasets]
armentieres = "monuments-historiques-armentieres"
lille = "monuments-historiques-lille"
roubaix = "liste-monuments-historiques-de-roubaix"

# ============================================================================
# Logging Configuration
# ============================================================================
[logging]
# Enable JSON file logging
local_enabled = false

# Log directory
local_path = "/var/log/heritage"

# Log rotation (daily, hourly or never)
local_rotation = "daily"
"#
        .to_string()
    }
}
