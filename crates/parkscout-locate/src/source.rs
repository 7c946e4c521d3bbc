//! The device-side primitive that produces raw position fixes.
//!
//! The provider is generic over [`PositionSource`] so front-ends can plug in
//! whatever their platform offers; [`StaticPositionSource`] covers
//! non-interactive front-ends (explicit coordinates) and tests.

use std::time::Duration;

/// Options for a device position request.
#[derive(Debug, Clone, Copy)]
pub struct PositionRequest {
    /// Ask the device for its best fix (GPS rather than coarse network
    /// positioning) when it has the choice.
    pub high_accuracy: bool,
    /// How long the source may spend producing a fix before reporting
    /// [`PositionFault::TimedOut`].
    pub timeout: Duration,
    /// Oldest device-cached fix the source may hand back without measuring
    /// again.
    pub maximum_age: Duration,
}

impl Default for PositionRequest {
    fn default() -> Self {
        Self {
            high_accuracy: true,
            timeout: Duration::from_secs(10),
            maximum_age: Duration::from_secs(300),
        }
    }
}

/// A raw fix reported by a position source. Validation happens in the
/// provider, not here.
#[derive(Debug, Clone, Copy)]
pub struct DeviceFix {
    pub latitude: f64,
    pub longitude: f64,
    pub accuracy_meters: f64,
}

/// Failure reported by a position source, before classification into a
/// [`crate::LocationError`].
#[derive(Debug, Clone)]
pub enum PositionFault {
    PermissionDenied(String),
    Unavailable(String),
    TimedOut(String),
    /// The platform has no location capability at all. Classified the same
    /// as [`PositionFault::Unavailable`].
    Unsupported(String),
}

/// Platform permission state for location access.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PermissionState {
    Granted,
    Denied,
    /// The platform will ask the user on the next request.
    Prompt,
    /// The platform cannot report permission state, or the query failed.
    Unknown,
}

impl std::fmt::Display for PermissionState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            PermissionState::Granted => f.write_str("granted"),
            PermissionState::Denied => f.write_str("denied"),
            PermissionState::Prompt => f.write_str("prompt"),
            PermissionState::Unknown => f.write_str("unknown"),
        }
    }
}

/// Produces position fixes on demand.
#[allow(async_fn_in_trait)]
pub trait PositionSource {
    /// Obtains a fix, honoring the request's timeout and accuracy hints.
    /// The call suspends until the device responds or faults.
    async fn current_position(&self, request: &PositionRequest)
        -> Result<DeviceFix, PositionFault>;

    /// Reports the platform permission state. Must never fail; sources that
    /// cannot report return [`PermissionState::Unknown`].
    async fn permission_state(&self) -> PermissionState {
        PermissionState::Unknown
    }
}

/// A source that always reports the same fixed coordinates.
#[derive(Debug, Clone, Copy)]
pub struct StaticPositionSource {
    fix: DeviceFix,
}

impl StaticPositionSource {
    /// A source reporting `latitude`/`longitude` with zero accuracy radius
    /// (the coordinates are taken at face value).
    #[must_use]
    pub fn new(latitude: f64, longitude: f64) -> Self {
        Self {
            fix: DeviceFix {
                latitude,
                longitude,
                accuracy_meters: 0.0,
            },
        }
    }
}

impl PositionSource for StaticPositionSource {
    async fn current_position(
        &self,
        _request: &PositionRequest,
    ) -> Result<DeviceFix, PositionFault> {
        Ok(self.fix)
    }

    async fn permission_state(&self) -> PermissionState {
        PermissionState::Granted
    }
}
