//! Transformation from raw Overpass elements to [`Park`] records.
//!
//! Each element is transformed independently; a malformed element is dropped
//! with a debug log rather than failing the whole response.

use parkscout_core::{geo, Coordinates, Park, ParkCategory};

use crate::types::OverpassElement;

/// Converts one element into a [`Park`], or `None` when the element cannot
/// be placed on the map.
///
/// Coordinates come from the element itself (nodes) with a per-axis
/// fallback to the `center` object (ways). Name falls back to
/// `"Unnamed <leisure tag>"`, or `"Unnamed Park"` when no tag exists.
/// A `leisure` value outside the queried set still yields a park, filed
/// under [`ParkCategory::Park`].
pub(crate) fn element_to_park(element: OverpassElement, origin: Coordinates) -> Option<Park> {
    let lat = element.lat.or(element.center.map(|c| c.lat));
    let lon = element.lon.or(element.center.map(|c| c.lon));
    let (Some(lat), Some(lon)) = (lat, lon) else {
        tracing::debug!(
            element_type = %element.element_type,
            id = element.id,
            "dropping element without coordinates"
        );
        return None;
    };

    let coordinates = match Coordinates::new(lat, lon) {
        Ok(coordinates) => coordinates,
        Err(e) => {
            tracing::debug!(
                element_type = %element.element_type,
                id = element.id,
                error = %e,
                "dropping element with out-of-range coordinates"
            );
            return None;
        }
    };

    let leisure = element.tags.get("leisure").map(String::as_str);
    let category = leisure
        .and_then(ParkCategory::from_leisure)
        .unwrap_or(ParkCategory::Park);

    let name = element.tags.get("name").cloned().unwrap_or_else(|| {
        match leisure {
            Some(tag) if !tag.is_empty() => format!("Unnamed {tag}"),
            _ => "Unnamed Park".to_owned(),
        }
    });

    let distance_miles = geo::distance_miles(origin, coordinates);

    Some(Park {
        id: format!("{}-{}", element.element_type, element.id),
        name,
        category,
        coordinates,
        distance_miles,
        distance_display: geo::format_distance(distance_miles),
    })
}

#[cfg(test)]
#[path = "transform_test.rs"]
mod tests;
