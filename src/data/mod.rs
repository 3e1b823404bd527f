//! Breed data sources for Dog Breeds CLI
//!
//! This module defines the `BreedFetcher` capability that every data source
//! implements, the error type shared by all of them, and the two concrete
//! sources: the dog.ceo HTTP API and a local in-memory/JSON-file fetcher.

pub mod dog_api;
pub mod local;

pub use dog_api::{DogApiClient, FetcherConfig};
pub use local::LocalBreedFetcher;

use async_trait::async_trait;
use thiserror::Error;

/// Errors that can occur when fetching sub-breed data
#[derive(Debug, Error)]
pub enum BreedError {
    /// The breed is unknown to the data source
    #[error("Breed not found: {0}")]
    BreedNotFound(String),

    /// HTTP request failed or returned an unexpected status
    #[error("HTTP request failed: {0}")]
    HttpError(#[from] reqwest::Error),

    /// Failed to interpret a response body or data file
    #[error("Failed to parse breed data: {0}")]
    ParseError(String),

    /// Failed to read a local data file
    #[error("Failed to read breed data: {0}")]
    Io(#[from] std::io::Error),
}

impl BreedError {
    /// Returns true if the data source does not know the breed
    pub fn is_not_found(&self) -> bool {
        matches!(self, BreedError::BreedNotFound(_))
    }
}

/// A source of sub-breed names
///
/// Given a breed name, an implementation produces the ordered list of its
/// sub-breed names, or fails with `BreedError::BreedNotFound` when the breed
/// does not exist. Implementations may fail with other `BreedError` kinds.
#[async_trait]
pub trait BreedFetcher: Send + Sync {
    /// Fetches the sub-breeds of `breed`, in the order the source provides them
    async fn fetch_sub_breeds(&self, breed: &str) -> Result<Vec<String>, BreedError>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_breed_not_found_message_names_breed() {
        let err = BreedError::BreedNotFound("ghost".to_string());
        assert_eq!(err.to_string(), "Breed not found: ghost");
        assert!(err.is_not_found());
    }

    #[test]
    fn test_other_errors_are_not_not_found() {
        let parse = BreedError::ParseError("bad body".to_string());
        assert!(!parse.is_not_found());
        assert!(parse.to_string().contains("bad body"));

        let io = BreedError::from(std::io::Error::new(
            std::io::ErrorKind::NotFound,
            "missing.json",
        ));
        assert!(!io.is_not_found());
        assert!(io.to_string().contains("missing.json"));
    }
}
