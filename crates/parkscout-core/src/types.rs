//! Domain types shared across the parkscout crates.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum CoreError {
    #[error("latitude {0} out of range [-90, 90]")]
    InvalidLatitude(f64),

    #[error("longitude {0} out of range [-180, 180]")]
    InvalidLongitude(f64),

    #[error("accuracy {0} must be a non-negative number of meters")]
    InvalidAccuracy(f64),

    #[error("unknown theme \"{0}\" (expected \"light\" or \"dark\")")]
    InvalidTheme(String),
}

/// A latitude/longitude pair in decimal degrees.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Coordinates {
    pub latitude: f64,
    pub longitude: f64,
}

impl Coordinates {
    /// Builds a coordinate pair, rejecting non-finite or out-of-range values.
    ///
    /// # Errors
    ///
    /// Returns [`CoreError::InvalidLatitude`] or [`CoreError::InvalidLongitude`]
    /// when either axis is non-finite or outside its valid range.
    pub fn new(latitude: f64, longitude: f64) -> Result<Self, CoreError> {
        if !latitude.is_finite() || !(-90.0..=90.0).contains(&latitude) {
            return Err(CoreError::InvalidLatitude(latitude));
        }
        if !longitude.is_finite() || !(-180.0..=180.0).contains(&longitude) {
            return Err(CoreError::InvalidLongitude(longitude));
        }
        Ok(Self {
            latitude,
            longitude,
        })
    }
}

/// A successfully acquired device position.
///
/// Written to the cache store with a fixed TTL on every fresh acquisition;
/// never mutated afterwards.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct UserLocation {
    #[serde(flatten)]
    pub coordinates: Coordinates,
    /// Reported accuracy radius in meters.
    pub accuracy_meters: f64,
    /// Instant the position was acquired.
    pub timestamp: DateTime<Utc>,
}

impl UserLocation {
    /// # Errors
    ///
    /// Returns [`CoreError::InvalidAccuracy`] when `accuracy_meters` is
    /// negative or non-finite.
    pub fn new(
        coordinates: Coordinates,
        accuracy_meters: f64,
        timestamp: DateTime<Utc>,
    ) -> Result<Self, CoreError> {
        if !accuracy_meters.is_finite() || accuracy_meters < 0.0 {
            return Err(CoreError::InvalidAccuracy(accuracy_meters));
        }
        Ok(Self {
            coordinates,
            accuracy_meters,
            timestamp,
        })
    }
}

/// Category of a park-like feature, mirroring the OSM `leisure` values we
/// query. `Trail` and `RecreationGround` are accepted in stored data but are
/// not currently queried or produced by the Overpass provider.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ParkCategory {
    Park,
    NatureReserve,
    Garden,
    Trail,
    RecreationGround,
}

impl ParkCategory {
    /// Maps an OSM `leisure` tag value onto a queried category.
    ///
    /// Only the three values the provider actually queries are accepted;
    /// anything else returns `None` and callers fall back to [`Self::Park`].
    #[must_use]
    pub fn from_leisure(tag: &str) -> Option<Self> {
        match tag {
            "park" => Some(Self::Park),
            "nature_reserve" => Some(Self::NatureReserve),
            "garden" => Some(Self::Garden),
            _ => None,
        }
    }

    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Park => "park",
            Self::NatureReserve => "nature_reserve",
            Self::Garden => "garden",
            Self::Trail => "trail",
            Self::RecreationGround => "recreation_ground",
        }
    }
}

impl std::fmt::Display for ParkCategory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A park-like point of interest, annotated with its distance from the
/// query origin.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Park {
    /// Stable identity derived from the source element: `"node-123"`,
    /// `"way-456"`. Keeps node and way representations of the same feature
    /// distinct.
    pub id: String,
    pub name: String,
    pub category: ParkCategory,
    pub coordinates: Coordinates,
    /// Great-circle distance from the query origin, in miles.
    pub distance_miles: f64,
    /// Human-readable rendering of `distance_miles`, e.g. `"0.3 miles"`.
    pub distance_display: String,
}

/// Persisted theme preference.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    Light,
    Dark,
}

impl std::str::FromStr for Theme {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "light" => Ok(Self::Light),
            "dark" => Ok(Self::Dark),
            other => Err(CoreError::InvalidTheme(other.to_owned())),
        }
    }
}

impl std::fmt::Display for Theme {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Light => f.write_str("light"),
            Self::Dark => f.write_str("dark"),
        }
    }
}

#[cfg(test)]
#[path = "types_test.rs"]
mod tests;
