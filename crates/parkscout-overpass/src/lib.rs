mod client;
mod error;
mod query;
mod transform;
pub mod types;

pub use client::OverpassClient;
pub use error::OverpassError;
pub use query::build_query;
