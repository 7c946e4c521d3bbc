use thiserror::Error;

/// Classified failure to acquire a user location.
///
/// Each variant carries the technical message from the source; the
/// user-facing wording comes from [`LocationError::user_message`], which is
/// distinct per classification so the front-end can present the right hint
/// (permission-denied additionally gets platform help text downstream).
#[derive(Debug, Error)]
pub enum LocationError {
    /// The user or platform refused the location request.
    #[error("location permission denied: {0}")]
    PermissionDenied(String),

    /// The device could not produce a position, or has no way to try.
    #[error("location unavailable: {0}")]
    Unavailable(String),

    /// The device did not respond within the request timeout.
    #[error("location request timed out: {0}")]
    TimedOut(String),
}

impl LocationError {
    /// Numeric classification, matching the device-API convention:
    /// 1 = permission denied, 2 = position unavailable, 3 = timeout.
    #[must_use]
    pub fn code(&self) -> u8 {
        match self {
            LocationError::PermissionDenied(_) => 1,
            LocationError::Unavailable(_) => 2,
            LocationError::TimedOut(_) => 3,
        }
    }

    /// Message suitable for presenting directly to the end user.
    #[must_use]
    pub fn user_message(&self) -> &'static str {
        match self {
            LocationError::PermissionDenied(_) => {
                "Location access denied. We need your location to find parks nearby."
            }
            LocationError::Unavailable(_) => {
                "Unable to get your location. Check your device settings."
            }
            LocationError::TimedOut(_) => "Location request timed out. Please try again.",
        }
    }
}
