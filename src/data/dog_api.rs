//! Dog API client for fetching sub-breed lists
//!
//! Fetches sub-breeds from the public dog.ceo REST API. A known breed answers
//! `{"status": "success", "message": ["afghan", ...]}`; an unknown breed answers
//! HTTP 404 with `{"status": "error", "message": "Breed not found ..."}`.

use std::time::Duration;

use async_trait::async_trait;
use reqwest::{Client, StatusCode};
use serde::Deserialize;
use serde_json::Value;
use tracing::debug;

use super::{BreedError, BreedFetcher};

/// Base URL of the public dog.ceo API
pub const DEFAULT_BASE_URL: &str = "https://dog.ceo/api";

/// Request timeout used when none is configured
pub const DEFAULT_TIMEOUT_SECS: u64 = 10;

/// Configuration for the HTTP fetcher
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FetcherConfig {
    /// API base URL, without a trailing slash
    pub base_url: String,
    /// Per-request timeout
    pub timeout: Duration,
}

impl Default for FetcherConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
        }
    }
}

/// Response envelope shared by every dog.ceo endpoint
#[derive(Debug, Deserialize)]
struct ApiResponse {
    /// Either "success" or "error"
    status: String,
    /// A list of names on success, a human-readable message on error
    message: Value,
}

/// Client for fetching sub-breeds from the dog.ceo API
///
/// Every HTTP 404 is reported as `BreedError::BreedNotFound`, so a base URL
/// pointing at the wrong path makes every breed look unknown.
#[derive(Debug, Clone)]
pub struct DogApiClient {
    /// HTTP client for making requests
    http_client: Client,
    /// Base URL for the API (allows override for testing)
    base_url: String,
}

impl DogApiClient {
    /// Creates a new DogApiClient from the given configuration
    ///
    /// # Returns
    /// * `Ok(DogApiClient)` on success
    /// * `Err(BreedError::HttpError)` if the HTTP client cannot be built
    pub fn new(config: FetcherConfig) -> Result<Self, BreedError> {
        let http_client = Client::builder().timeout(config.timeout).build()?;
        Ok(Self {
            http_client,
            base_url: config.base_url.trim_end_matches('/').to_string(),
        })
    }

    /// Builds the sub-breed list URL for a breed
    fn breed_url(&self, breed: &str) -> String {
        format!("{}/breed/{}/list", self.base_url, path_escaped(breed))
    }
}

#[async_trait]
impl BreedFetcher for DogApiClient {
    async fn fetch_sub_breeds(&self, breed: &str) -> Result<Vec<String>, BreedError> {
        let url = self.breed_url(breed);
        debug!(%url, "requesting sub-breeds");

        let response = self.http_client.get(&url).send().await?;
        if response.status() == StatusCode::NOT_FOUND {
            return Err(BreedError::BreedNotFound(breed.to_string()));
        }

        let body = response.error_for_status()?.text().await?;
        parse_response(&body, breed)
    }
}

/// Parses a dog.ceo response body into the list of sub-breeds
fn parse_response(body: &str, breed: &str) -> Result<Vec<String>, BreedError> {
    let response: ApiResponse = serde_json::from_str(body)
        .map_err(|e| BreedError::ParseError(format!("Invalid JSON: {}", e)))?;

    match response.status.as_str() {
        "success" => serde_json::from_value(response.message)
            .map_err(|e| BreedError::ParseError(format!("Invalid sub-breed list: {}", e))),
        "error" => Err(BreedError::BreedNotFound(breed.to_string())),
        other => Err(BreedError::ParseError(format!(
            "Unexpected response status: {}",
            other
        ))),
    }
}

/// Percent-encodes a breed name for use as a single URL path segment
fn path_escaped(s: &str) -> String {
    let mut escaped = String::with_capacity(s.len());
    for byte in s.bytes() {
        match byte {
            b'A'..=b'Z' | b'a'..=b'z' | b'0'..=b'9' | b'-' | b'.' | b'_' | b'~' => {
                escaped.push(byte as char)
            }
            _ => escaped.push_str(&format!("%{:02X}", byte)),
        }
    }
    escaped
}
