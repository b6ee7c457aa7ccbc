//! Favorite command implementation
//!
//! A CLI run is its own service instance, so the working set is fetched
//! first and every id is then favorited against it, in argument order.

use super::{build_service, print_json};
use crate::cli::{exit_code_for, EXIT_OK};
use crate::domain::MonumentQuery;
use clap::Args;

/// Arguments for the favorite command
#[derive(Args, Debug)]
pub struct FavoriteArgs {
    /// Monument ids to mark as favorite
    #[arg(required = true)]
    pub ids: Vec<String>,
}

impl FavoriteArgs {
    /// Execute the favorite command
    ///
    /// Every id is attempted; the exit code reflects the last failure.
    pub async fn execute(&self, config_path: Option<&str>) -> anyhow::Result<i32> {
        tracing::info!(count = self.ids.len(), "Adding favorites");

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

        let mut exit_code = EXIT_OK;
        for id in &self.ids {
            match service.add_to_favorites(id).await {
                Ok(monument) => eprintln!("⭐ {} ({})", monument.id, monument.kind),
                Err(e) => {
                    eprintln!("❌ {e}");
                    exit_code = exit_code_for(&e);
                }
            }
        }

        print_json(&service.favorites().await)?;
        Ok(exit_code)
    }
}
