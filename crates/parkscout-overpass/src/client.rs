//! HTTP client for the Overpass API.
//!
//! Issues the spatial query as a form-encoded POST and converts the raw
//! response into [`Park`] records. Transport failures, non-2xx statuses, and
//! undecodable bodies surface as [`OverpassError`]; individual malformed
//! elements do not fail the query (see [`crate::transform`]).

use std::time::Duration;

use percent_encoding::{utf8_percent_encode, NON_ALPHANUMERIC};
use reqwest::Client;

use parkscout_core::{Coordinates, Park};

use crate::error::OverpassError;
use crate::query::build_query;
use crate::transform::element_to_park;
use crate::types::OverpassResponse;

const DEFAULT_API_URL: &str = "https://overpass-api.de/api/interpreter";

/// Client for the Overpass interpreter endpoint.
///
/// Use [`OverpassClient::new`] for the public instance or
/// [`OverpassClient::with_base_url`] to point at a mock server in tests.
pub struct OverpassClient {
    client: Client,
    base_url: String,
}

impl OverpassClient {
    /// Creates a client pointed at the public Overpass interpreter.
    ///
    /// # Errors
    ///
    /// Returns [`OverpassError::Http`] if the underlying `reqwest::Client`
    /// cannot be constructed.
    pub fn new(timeout_secs: u64, user_agent: &str) -> Result<Self, OverpassError> {
        Self::with_base_url(timeout_secs, user_agent, DEFAULT_API_URL)
    }

    /// Creates a client with a custom interpreter URL (for testing with
    /// wiremock, or for self-hosted Overpass instances).
    ///
    /// # Errors
    ///
    /// Returns [`OverpassError::Http`] if the underlying `reqwest::Client`
    /// cannot be constructed.
    pub fn with_base_url(
        timeout_secs: u64,
        user_agent: &str,
        base_url: &str,
    ) -> Result<Self, OverpassError> {
        let client = Client::builder()
            .timeout(Duration::from_secs(timeout_secs))
            .connect_timeout(Duration::from_secs(10))
            .user_agent(user_agent)
            .build()?;
        Ok(Self {
            client,
            base_url: base_url.to_owned(),
        })
    }

    /// Searches for park-like features within `radius_meters` of `origin`.
    ///
    /// Returns the surviving transformed records in provider order —
    /// sorting and limiting are the caller's concern. Elements the provider
    /// could not place (no coordinates) are dropped, not errors.
    ///
    /// # Errors
    ///
    /// - [`OverpassError::Http`] on network failure or request timeout.
    /// - [`OverpassError::UnexpectedStatus`] on a non-2xx response.
    /// - [`OverpassError::Deserialize`] if the body is not a valid Overpass
    ///   JSON envelope.
    pub async fn search_nearby(
        &self,
        origin: Coordinates,
        radius_meters: u32,
    ) -> Result<Vec<Park>, OverpassError> {
        let query = build_query(origin, radius_meters);
        tracing::debug!(
            lat = origin.latitude,
            lon = origin.longitude,
            radius_meters,
            "querying Overpass"
        );

        let response = self
            .client
            .post(&self.base_url)
            .header(
                reqwest::header::CONTENT_TYPE,
                "application/x-www-form-urlencoded",
            )
            .body(encode_form_body(&query))
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            return Err(OverpassError::UnexpectedStatus {
                status: status.as_u16(),
                url: self.base_url.clone(),
            });
        }

        let body = response.text().await?;
        let parsed: OverpassResponse =
            serde_json::from_str(&body).map_err(|e| OverpassError::Deserialize {
                context: format!("Overpass response from {}", self.base_url),
                source: e,
            })?;

        let element_count = parsed.elements.len();
        let parks: Vec<Park> = parsed
            .elements
            .into_iter()
            .filter_map(|element| element_to_park(element, origin))
            .collect();
        tracing::debug!(
            elements = element_count,
            parks = parks.len(),
            "transformed Overpass elements"
        );

        Ok(parks)
    }
}

/// Encodes the query as the `data=<query>` form body the interpreter
/// expects. `NON_ALPHANUMERIC` escapes a superset of what the endpoint
/// requires, which is always safe.
fn encode_form_body(query: &str) -> String {
    format!("data={}", utf8_percent_encode(query, NON_ALPHANUMERIC))
}
