//! Great-circle distance
//!
//! Haversine formula on a spherical Earth.

use crate::domain::Coordinates;

/// Mean Earth radius in meters
pub const EARTH_RADIUS_M: f64 = 6_371_000.0;

/// Distance in meters between two points given in decimal degrees
///
/// Symmetric, non-negative, and zero for identical points.
///
/// # Example
///
/// ```
/// use heritage::core::distance::haversine_distance;
/// use heritage::domain::Coordinates;
///
/// let lille = Coordinates::new(50.6292, 3.0573);
/// let roubaix = Coordinates::new(50.6942, 3.1746);
/// let meters = haversine_distance(lille, roubaix);
/// assert!(meters > 10_000.0 && meters < 12_000.0);
/// ```
pub fn haversine_distance(a: Coordinates, b: Coordinates) -> f64 {
    let phi1 = a.lat.to_radians();
    let phi2 = b.lat.to_radians();
    let delta_phi = (b.lat - a.lat).to_radians();
    let delta_lambda = (b.long - a.long).to_radians();

    let h = (delta_phi / 2.0).sin().powi(2)
        + phi1.cos() * phi2.cos() * (delta_lambda / 2.0).sin().powi(2);
    // Rounding can push h past 1 for near-antipodal points.
    let h = h.clamp(0.0, 1.0);
    let c = 2.0 * h.sqrt().atan2((1.0 - h).sqrt());

    EARTH_RADIUS_M * c
}
