//! Well-known cache store keys.
//!
//! Keys double as file names under the cache directory, so they are limited
//! to letters, digits, `_`, `.` and `-`.

/// Cached [`parkscout_core::UserLocation`], written with a 1-hour TTL.
pub const USER_LOCATION: &str = "user_location";

/// Persisted [`parkscout_core::Theme`] preference. Never expires.
pub const THEME: &str = "theme";

/// Prefix for per-coordinate-bucket park results. Full keys look like
/// `parks_40.713_-74.006_3000` (latitude and longitude quantized to three
/// decimal places, then the radius in meters).
pub const PARKS_PREFIX: &str = "parks";
