//! Types command implementation

use super::{build_service, print_json};
use crate::cli::{exit_code_for, EXIT_OK};
use crate::domain::MonumentQuery;
use clap::Args;

/// Arguments for the types command
#[derive(Args, Debug)]
pub struct TypesArgs {}

impl TypesArgs {
    /// Execute the types command
    pub async fn execute(&self, config_path: Option<&str>) -> anyhow::Result<i32> {
        tracing::info!("Listing monument types");

        let service = match build_service(config_path) {
            Ok(s) => s,
            Err(e) => {
                eprintln!("❌ {e}");
                return Ok(exit_code_for(&e));
            }
        };

        if let Err(e) = service.get_all_monuments(&MonumentQuery::new()).await {
            crate::log_error_with_context!(&e, "Failed to fetch monuments");
            eprintln!("❌ {e}");
            return Ok(exit_code_for(&e));
        }

        let types = service.list_types().await;
        print_json(&types)?;
        eprintln!("✅ {} types", types.len());
        Ok(EXIT_OK)
    }
}
