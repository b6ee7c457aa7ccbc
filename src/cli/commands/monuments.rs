//! Monuments command implementation
//!
//! Fetches every dataset, applies the filters and prints the matching
//! monuments as a JSON array.

use super::{build_service, print_json};
use crate::cli::{exit_code_for, EXIT_OK};
use crate::domain::MonumentQuery;
use clap::Args;

/// Arguments for the monuments command
#[derive(Args, Debug, Default)]
pub struct MonumentsArgs {
    /// Decade start, as a four-digit year (e.g. 1850)
    #[arg(long)]
    pub date: Option<String>,

    /// Latitude of the search center, or exact latitude without --radius
    #[arg(long, allow_hyphen_values = true)]
    pub lat: Option<f64>,

    /// Longitude of the search center, or exact longitude without --radius
    #[arg(long, allow_hyphen_values = true)]
    pub long: Option<f64>,

    /// Search radius in meters around --lat/--long
    #[arg(long)]
    pub radius: Option<f64>,

    /// Case-insensitive substring of the monument type
    #[arg(long = "type")]
    pub kind: Option<String>,

    /// Case-insensitive city name
    #[arg(long)]
    pub ville: Option<String>,
}

impl MonumentsArgs {
    /// The query these arguments describe
    pub fn to_query(&self) -> MonumentQuery {
        MonumentQuery {
            date: self.date.clone(),
            lat: self.lat,
            long: self.long,
            radius: self.radius,
            kind: self.kind.clone(),
            ville: self.ville.clone(),
        }
    }

    /// Execute the monuments command
    pub async fn execute(&self, config_path: Option<&str>) -> anyhow::Result<i32> {
        let query = self.to_query();
        tracing::info!(query = ?query, "Listing monuments");

        let service = match build_service(config_path) {
            Ok(s) => s,
            Err(e) => {
                eprintln!("❌ {e}");
                return Ok(exit_code_for(&e));
            }
        };

        match service.get_all_monuments(&query).await {
            Ok(monuments) => {
                print_json(&monuments)?;
                eprintln!("✅ {} monuments", monuments.len());
                Ok(EXIT_OK)
            }
            Err(e) => {
                crate::log_error_with_context!(&e, "Failed to list monuments");
                eprintln!("❌ {e}");
                Ok(exit_code_for(&e))
            }
        }
    }
}
