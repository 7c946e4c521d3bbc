//! Overpass QL query construction.

use std::fmt::Write as _;

use parkscout_core::Coordinates;

/// The `leisure` values we query. Order matters only for readability of the
/// generated query; result ranking happens downstream.
const LEISURE_VALUES: [&str; 3] = ["park", "nature_reserve", "garden"];

/// Builds the bounded-radius query for park-like features around `origin`.
///
/// Requests both point (`node`) and area (`way`) representations for each
/// leisure value, with `out center;` so areas come back with a usable
/// centroid. The `[timeout:25]` is the server-side execution bound; the
/// client enforces its own, longer transport timeout.
#[must_use]
pub fn build_query(origin: Coordinates, radius_meters: u32) -> String {
    let lat = origin.latitude;
    let lon = origin.longitude;

    let mut clauses = String::new();
    for leisure in LEISURE_VALUES {
        for element in ["node", "way"] {
            let _ = write!(
                clauses,
                "{element}[\"leisure\"=\"{leisure}\"](around:{radius_meters},{lat},{lon});"
            );
        }
    }

    format!("[out:json][timeout:25];({clauses});out center;")
}

#[cfg(test)]
#[path = "query_test.rs"]
mod tests;
