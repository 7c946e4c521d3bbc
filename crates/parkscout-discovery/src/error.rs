use thiserror::Error;

use parkscout_overpass::OverpassError;

/// Failure of a discovery run.
///
/// Sub-causes (transport, status, decode) are deliberately not distinguished
/// to callers — the wrapped error text carries the detail for logs, and the
/// front-end presents [`DiscoveryError::user_message`] regardless.
#[derive(Debug, Error)]
pub enum DiscoveryError {
    #[error("park discovery failed: {0}")]
    Provider(#[from] OverpassError),
}

impl DiscoveryError {
    /// Message suitable for presenting directly to the end user.
    #[must_use]
    pub fn user_message(&self) -> &'static str {
        "Couldn't load nearby parks. Please try again."
    }
}
