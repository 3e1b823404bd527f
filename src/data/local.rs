//! Local breed data source
//!
//! Serves sub-breeds from memory, optionally loaded from a JSON file. Accepts
//! both the dog.ceo `breeds/list/all` envelope and a plain breed map.

use std::collections::HashMap;
use std::fs;
use std::path::Path;

use async_trait::async_trait;
use serde::Deserialize;
use tracing::debug;

use super::{BreedError, BreedFetcher};

/// Accepted layouts of a breed data file
#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum BreedFile {
    /// `{"status": "success", "message": {"hound": ["afghan", ...]}}`
    Envelope {
        message: HashMap<String, Vec<String>>,
    },
    /// `{"hound": ["afghan", ...]}`
    Plain(HashMap<String, Vec<String>>),
}

/// Fetcher backed by an in-memory breed table
#[derive(Debug, Clone, Default)]
pub struct LocalBreedFetcher {
    breeds: HashMap<String, Vec<String>>,
}

impl LocalBreedFetcher {
    /// Creates a fetcher serving the given breed table
    pub fn new(breeds: HashMap<String, Vec<String>>) -> Self {
        Self { breeds }
    }

    /// Loads the breed table from a JSON file
    ///
    /// # Returns
    /// * `Ok(LocalBreedFetcher)` if the file was read and parsed
    /// * `Err(BreedError::Io)` if the file cannot be read
    /// * `Err(BreedError::ParseError)` if the content is not a breed table
    pub fn from_json_file(path: impl AsRef<Path>) -> Result<Self, BreedError> {
        let path = path.as_ref();
        let content = fs::read_to_string(path)?;
        let fetcher = Self::from_json_str(&content)?;
        debug!(path = %path.display(), breeds = fetcher.breeds.len(), "loaded breed data");
        Ok(fetcher)
    }

    /// Parses a breed table from JSON text
    pub fn from_json_str(content: &str) -> Result<Self, BreedError> {
        let file: BreedFile = serde_json::from_str(content)
            .map_err(|e| BreedError::ParseError(format!("Invalid breed file: {}", e)))?;

        let breeds = match file {
            BreedFile::Envelope { message } => message,
            BreedFile::Plain(breeds) => breeds,
        };
        Ok(Self::new(breeds))
    }

    /// Number of breeds known to this fetcher
    pub fn len(&self) -> usize {
        self.breeds.len()
    }

    /// Returns true if no breeds are known
    pub fn is_empty(&self) -> bool {
        self.breeds.is_empty()
    }
}

#[async_trait]
impl BreedFetcher for LocalBreedFetcher {
    async fn fetch_sub_breeds(&self, breed: &str) -> Result<Vec<String>, BreedError> {
        self.breeds
            .get(breed)
            .cloned()
            .ok_or_else(|| BreedError::BreedNotFound(breed.to_string()))
    }
}
