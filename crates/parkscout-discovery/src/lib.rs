mod error;
mod finder;

pub use error::DiscoveryError;
pub use finder::{FindParksResult, ParkFinder, SearchOptions, DEFAULT_LIMIT, DEFAULT_RADIUS_METERS};
