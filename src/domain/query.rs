//! Monument query parameters
//!
//! [`MonumentQuery`] is the parsed form of a caller's request. It carries no
//! validation of its own; see [`crate::core::filter::MonumentFilter`].

use serde::{Deserialize, Serialize};

/// Optional filters for a monument listing
///
/// All fields are independent and combinable.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct MonumentQuery {
    /// Start of a decade, as a four-digit year (e.g. `"1850"`)
    #[serde(default)]
    pub date: Option<String>,

    /// Latitude of the search center, or exact latitude when no radius
    #[serde(default)]
    pub lat: Option<f64>,

    /// Longitude of the search center, or exact longitude when no radius
    #[serde(default)]
    pub long: Option<f64>,

    /// Search radius in meters
    #[serde(default)]
    pub radius: Option<f64>,

    /// Case-insensitive substring of the monument type
    #[serde(default, rename = "type")]
    pub kind: Option<String>,

    /// Case-insensitive city name
    #[serde(default)]
    pub ville: Option<String>,
}

impl MonumentQuery {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_date(mut self, date: impl Into<String>) -> Self {
        self.date = Some(date.into());
        self
    }

    pub fn with_center(mut self, lat: f64, long: f64) -> Self {
        self.lat = Some(lat);
        self.long = Some(long);
        self
    }

    pub fn with_radius(mut self, radius: f64) -> Self {
        self.radius = Some(radius);
        self
    }

    pub fn with_kind(mut self, kind: impl Into<String>) -> Self {
        self.kind = Some(kind.into());
        self
    }

    pub fn with_ville(mut self, ville: impl Into<String>) -> Self {
        self.ville = Some(ville.into());
        self
    }

    /// True when no filter is set
    pub fn is_empty(&self) -> bool {
        self == &Self::default()
    }
}
