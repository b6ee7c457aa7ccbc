//! CLI command implementations
//!
//! This module contains all CLI command implementations.

pub mod favorite;
pub mod init;
pub mod monuments;
pub mod types;
pub mod validate;

use crate::config::load_config_or_default;
use crate::core::MonumentService;
use crate::domain::Result;
use serde::Serialize;

/// Load configuration and build the service
pub(crate) fn build_service(config_path: Option<&str>) -> Result<MonumentService> {
    let config = load_config_or_default(config_path)?;
    MonumentService::from_config(&config.opendata)
}

/// Print a value as pretty JSON on stdout
pub(crate) fn print_json<T: Serialize + ?Sized>(value: &T) -> Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}
