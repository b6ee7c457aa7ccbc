//! Validate config command implementation
//!
//! This module implements the `validate-config` command for validating
//! the Heritage configuration file.

use crate::cli::{EXIT_CONFIG, EXIT_OK};
use crate::config::load_config_or_default;
use clap::Args;

/// Arguments for the validate-config command
#[derive(Args, Debug)]
pub struct ValidateArgs {}

impl ValidateArgs {
    /// Execute the validate-config command
    ///
    /// Without a path, the built-in defaults plus environment overrides are
    /// validated.
    pub async fn execute(&self, config_path: Option<&str>) -> anyhow::Result<i32> {
        let label = config_path.unwrap_or("<defaults>");
        tracing::info!(config_path = %label, "Validating configuration");

        println!("🔍 Validating configuration: {label}");
        println!();

        let config = match load_config_or_default(config_path) {
            Ok(c) => c,
            Err(e) => {
                println!("❌ Configuration is invalid");
                println!("   Error: {e}");
                return Ok(EXIT_CONFIG);
            }
        };

        println!("✅ Configuration is valid");
        println!();
        println!("Configuration Summary:");
        println!("  Log Level: {}", config.application.log_level);
        println!("  Catalog: {}", config.opendata.base_url);
        println!("  Page Size: {}", config.opendata.page_size);
        println!("  Lille Pages: {}", config.opendata.lille_pages);
        println!("  Timeout: {}s", config.opendata.timeout_seconds);
        println!("  Armentières Dataset: {}", config.opendata.datasets.armentieres);
        println!("  Lille Dataset: {}", config.opendata.datasets.lille);
        println!("  Roubaix Dataset: {}", config.opendata.datasets.roubaix);
        println!("  File Logging: {}", config.logging.local_enabled);
        println!();
        Ok(EXIT_OK)
    }
}
