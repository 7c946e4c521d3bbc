//! Overpass API response types.
//!
//! ## Observed shape from the public interpreter endpoint
//!
//! ### Coordinates
//! `node` elements carry top-level `lat`/`lon`. `way` (and `relation`)
//! elements have no intrinsic point; with `out center;` the server adds a
//! `center: {lat, lon}` object instead. Elements occasionally arrive with
//! neither (e.g. ways the server could not resolve) — transformation drops
//! those rather than failing the batch.
//!
//! ### Tags
//! The `tags` map is omitted entirely for untagged elements, so it defaults
//! to empty. `name` is frequently missing on small neighborhood parks;
//! `leisure` is expected to be one of the queried values but is not
//! guaranteed to be.
//!
//! ### `type`
//! Always one of `"node"`, `"way"`, `"relation"`. Relations are not part of
//! the query we issue but are modeled so a future relation clause would not
//! be a breaking change to the wire model.

use std::collections::HashMap;

use serde::Deserialize;

/// Top-level envelope of an `[out:json]` Overpass response.
#[derive(Debug, Deserialize)]
pub struct OverpassResponse {
    #[serde(default)]
    pub elements: Vec<OverpassElement>,
}

/// One OSM element from the `elements` array.
#[derive(Debug, Deserialize)]
pub struct OverpassElement {
    #[serde(rename = "type")]
    pub element_type: ElementType,
    pub id: i64,
    #[serde(default)]
    pub lat: Option<f64>,
    #[serde(default)]
    pub lon: Option<f64>,
    /// Centroid substitute for area-shaped elements, produced by
    /// `out center;`.
    #[serde(default)]
    pub center: Option<Center>,
    #[serde(default)]
    pub tags: HashMap<String, String>,
}

/// OSM element kind. Forms the first half of a park's stable id, so node
/// and way representations of the same feature never collide.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ElementType {
    Node,
    Way,
    Relation,
}

impl std::fmt::Display for ElementType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ElementType::Node => f.write_str("node"),
            ElementType::Way => f.write_str("way"),
            ElementType::Relation => f.write_str("relation"),
        }
    }
}

/// The `center` object attached to area-shaped elements.
#[derive(Debug, Clone, Copy, Deserialize)]
pub struct Center {
    pub lat: f64,
    pub lon: f64,
}
