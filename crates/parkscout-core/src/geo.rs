//! Great-circle distance between coordinate pairs, plus display formatting.

use crate::types::Coordinates;

/// Mean Earth radius in miles, matching the unit the UI presents.
const EARTH_RADIUS_MILES: f64 = 3958.8;

/// Haversine distance between two points, in miles.
///
/// Symmetric in its arguments; `distance_miles(a, a)` is `0.0`.
#[must_use]
pub fn distance_miles(from: Coordinates, to: Coordinates) -> f64 {
    let lat1 = from.latitude.to_radians();
    let lat2 = to.latitude.to_radians();
    let delta_lat = (to.latitude - from.latitude).to_radians();
    let delta_lon = (to.longitude - from.longitude).to_radians();

    let a = (delta_lat / 2.0).sin().powi(2)
        + lat1.cos() * lat2.cos() * (delta_lon / 2.0).sin().powi(2);
    let c = 2.0 * a.sqrt().atan2((1.0 - a).sqrt());

    EARTH_RADIUS_MILES * c
}

/// Formats a distance in miles for display.
///
/// Anything below a tenth of a mile collapses to `"<0.1 miles"`; otherwise
/// one decimal place, with the singular "mile" only when the rounded value
/// is exactly 1.0.
#[must_use]
pub fn format_distance(miles: f64) -> String {
    if miles < 0.1 {
        return "<0.1 miles".to_owned();
    }
    let rounded = format!("{miles:.1}");
    let unit = if rounded == "1.0" { "mile" } else { "miles" };
    format!("{rounded} {unit}")
}

#[cfg(test)]
#[path = "geo_test.rs"]
mod tests;
