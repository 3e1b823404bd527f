//! Dog Breeds CLI Library
//!
//! This module exposes the breed cache, data sources, and CLI parsing for use
//! by the binary and in integration tests.

pub mod cache;
pub mod cli;
pub mod data;
pub mod logging;

pub use cache::{BreedCache, SubBreeds};
pub use data::{BreedError, BreedFetcher};
