//! Monument domain model
//!
//! This module defines the normalized [`Monument`] record shared by every
//! source adapter, plus the small value types derived from it.

use serde::{Deserialize, Serialize};

/// A historic monument, normalized from one of the upstream datasets
///
/// Every field is always serialized; absent values become `null`.
///
/// # Examples
///
/// ```
/// use heritage::domain::Monument;
///
/// let monument = Monument::new("PA00107422", "Eglise")
///     .with_coordinates(Some(50.63), Some(3.06))
///     .with_date(Some(1856))
///     .with_ville(Some("Lille".to_string()));
///
/// assert_eq!(monument.kind, "Eglise");
/// assert_eq!(monument.date, Some(1856));
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Monument {
    /// Source-provided identifier, stringified
    pub id: String,

    /// Latitude in decimal degrees
    pub lat: Option<f64>,

    /// Longitude in decimal degrees
    pub long: Option<f64>,

    /// Coarse category: first word of the upstream denomination
    #[serde(rename = "type")]
    pub kind: String,

    /// Year of construction or classification
    pub date: Option<i32>,

    /// City name, case as delivered upstream
    pub ville: Option<String>,
}

impl Monument {
    /// Creates a monument with only the mandatory fields set
    pub fn new(id: impl Into<String>, kind: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            lat: None,
            long: None,
            kind: kind.into(),
            date: None,
            ville: None,
        }
    }

    /// Sets latitude and longitude
    pub fn with_coordinates(mut self, lat: Option<f64>, long: Option<f64>) -> Self {
        self.lat = lat;
        self.long = long;
        self
    }

    /// Sets the year
    pub fn with_date(mut self, date: Option<i32>) -> Self {
        self.date = date;
        self
    }

    /// Sets the city
    pub fn with_ville(mut self, ville: Option<String>) -> Self {
        self.ville = ville;
        self
    }

    /// Both coordinates, if the monument has them
    pub fn coordinates(&self) -> Option<Coordinates> {
        match (self.lat, self.long) {
            (Some(lat), Some(long)) => Some(Coordinates::new(lat, long)),
            _ => None,
        }
    }
}

/// A point in decimal degrees
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Coordinates {
    pub lat: f64,
    pub long: f64,
}

impl Coordinates {
    pub fn new(lat: f64, long: f64) -> Self {
        Self { lat, long }
    }
}

/// One entry of the monument type catalog
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TypeEntry {
    /// Zero-based index of first appearance
    pub id: usize,

    /// Lower-cased type label
    #[serde(rename = "type")]
    pub kind: String,
}
