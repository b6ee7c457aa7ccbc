//! Monument filter pipeline
//!
//! A [`MonumentFilter`] is built once from a [`MonumentQuery`] and then
//! applied to a working set. Stages run in a fixed order, each one skipped
//! when its parameter is absent:
//!
//! 1. decade (`date`)
//! 2. spatial: radius around (`lat`, `long`) when `radius` is set, otherwise
//!    exact `lat` and/or exact `long`
//! 3. type substring (`type`)
//! 4. city (`ville`)
//!
//! Relative order of the input is preserved.

use crate::core::distance::haversine_distance;
use crate::domain::{Coordinates, HeritageError, Monument, MonumentQuery, Result};

/// Years covered by one decade filter
const DECADE_SPAN: i32 = 10;

/// Spatial stage of the pipeline
#[derive(Debug, Clone, PartialEq)]
enum SpatialFilter {
    /// Great-circle distance from `center` at most `radius` meters
    Radius { center: Coordinates, radius: f64 },
    /// Independent exact matches on each axis
    Exact { lat: Option<f64>, long: Option<f64> },
}

/// Validated, case-folded form of a [`MonumentQuery`]
#[derive(Debug, Clone, PartialEq)]
pub struct MonumentFilter {
    decade_start: Option<i32>,
    spatial: SpatialFilter,
    kind: Option<String>,
    ville: Option<String>,
}

impl MonumentFilter {
    /// Validate a query and prepare its filter
    ///
    /// Empty `date`, `type` and `ville` strings count as absent.
    ///
    /// # Errors
    ///
    /// Returns [`HeritageError::Validation`] if:
    /// - `date` is not a four-digit year
    /// - `radius` is negative or not finite
    /// - `radius` is set without both `lat` and `long`
    /// - `lat` or `long` is not finite
    pub fn from_query(query: &MonumentQuery) -> Result<Self> {
        let decade_start = non_empty(&query.date).map(parse_year).transpose()?;

        for (name, value) in [("lat", query.lat), ("long", query.long)] {
            if matches!(value, Some(v) if !v.is_finite()) {
                return Err(HeritageError::Validation(format!(
                    "{name} must be a finite number"
                )));
            }
        }

        let spatial = match query.radius {
            Some(radius) => {
                if !radius.is_finite() || radius < 0.0 {
                    return Err(HeritageError::Validation(format!(
                        "radius must be a non-negative number of meters, got {radius}"
                    )));
                }
                let (Some(lat), Some(long)) = (query.lat, query.long) else {
                    return Err(HeritageError::Validation(
                        "radius requires both lat and long".to_string(),
                    ));
                };
                SpatialFilter::Radius {
                    center: Coordinates::new(lat, long),
                    radius,
                }
            }
            None => SpatialFilter::Exact {
                lat: query.lat,
                long: query.long,
            },
        };

        Ok(Self {
            decade_start,
            spatial,
            kind: non_empty(&query.kind).map(str::to_lowercase),
            ville: non_empty(&query.ville).map(str::to_lowercase),
        })
    }

    /// Keep the monuments matching every stage, in input order
    pub fn apply(&self, monuments: Vec<Monument>) -> Vec<Monument> {
        monuments.into_iter().filter(|m| self.matches(m)).collect()
    }

    /// Whether one monument passes every stage
    pub fn matches(&self, monument: &Monument) -> bool {
        self.matches_decade(monument)
            && self.matches_spatial(monument)
            && self.matches_kind(monument)
            && self.matches_ville(monument)
    }

    fn matches_decade(&self, monument: &Monument) -> bool {
        let Some(start) = self.decade_start else {
            return true;
        };
        // No date never falls inside a decade.
        monument
            .date
            .is_some_and(|date| date >= start && date < start + DECADE_SPAN)
    }

    fn matches_spatial(&self, monument: &Monument) -> bool {
        match &self.spatial {
            SpatialFilter::Radius { center, radius } => monument
                .coordinates()
                .is_some_and(|point| haversine_distance(*center, point) <= *radius),
            SpatialFilter::Exact { lat, long } => {
                lat.map_or(true, |lat| monument.lat == Some(lat))
                    && long.map_or(true, |long| monument.long == Some(long))
            }
        }
    }

    fn matches_kind(&self, monument: &Monument) -> bool {
        self.kind
            .as_deref()
            .map_or(true, |kind| monument.kind.to_lowercase().contains(kind))
    }

    fn matches_ville(&self, monument: &Monument) -> bool {
        self.ville.as_deref().map_or(true, |ville| {
            monument
                .ville
                .as_deref()
                .is_some_and(|v| v.to_lowercase() == ville)
        })
    }
}

fn non_empty(value: &Option<String>) -> Option<&str> {
    value.as_deref().filter(|s| !s.is_empty())
}

fn parse_year(date: &str) -> Result<i32> {
    if date.len() != 4 || !date.bytes().all(|b| b.is_ascii_digit()) {
        return Err(HeritageError::Validation(format!(
            "date must be a four-digit year, got '{date}'"
        )));
    }
    date.parse()
        .map_err(|e| HeritageError::Validation(format!("date '{date}': {e}")))
}
