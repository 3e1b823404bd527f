//! Cache module for memoizing sub-breed lookups
//!
//! This module provides `BreedCache`, a decorator around any `BreedFetcher`
//! that stores successful lookups in memory for the lifetime of the instance
//! and counts how many calls reached the underlying fetcher. Failed lookups
//! are never stored, so retrying an unknown breed always reaches the fetcher.

mod breed_cache;

pub use breed_cache::{BreedCache, SubBreeds};
