//! Caching decorator for sub-breed lookups
//!
//! Provides a `BreedCache` that answers repeated lookups from memory and only
//! delegates to the wrapped fetcher on a miss. Entries are written once per
//! breed and never evicted.

use std::collections::HashMap;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use tracing::debug;

use crate::data::{BreedError, BreedFetcher};

/// Immutable snapshot of a breed's sub-breed names, in upstream order
pub type SubBreeds = Arc<[String]>;

/// Increments the upstream call counter when dropped
///
/// Held for the duration of one upstream call so the count is taken however
/// the call ends: success, error, or the future being dropped mid-call.
struct CallGuard<'a> {
    calls_made: &'a AtomicUsize,
}

impl<'a> CallGuard<'a> {
    fn new(calls_made: &'a AtomicUsize) -> Self {
        Self { calls_made }
    }
}

impl Drop for CallGuard<'_> {
    fn drop(&mut self) {
        self.calls_made.fetch_add(1, Ordering::SeqCst);
    }
}

/// Memoizing wrapper around a `BreedFetcher`
///
/// The wrapped fetcher is shared, not owned, so the same data source can
/// back several caches or be inspected by tests. The cache table and the call
/// counter belong to this instance.
///
/// `BreedCache` is `Send + Sync`. Concurrent misses for the same breed may
/// each reach the fetcher and each be counted; the first result stored wins
/// and every caller receives the stored snapshot.
pub struct BreedCache<F: BreedFetcher + ?Sized> {
    /// Upstream data source consulted on a miss
    fetcher: Arc<F>,
    /// Breed name -> sub-breeds, for successful lookups only
    entries: Mutex<HashMap<String, SubBreeds>>,
    /// Number of calls delegated to `fetcher`
    calls_made: AtomicUsize,
}

impl<F: BreedFetcher + ?Sized> BreedCache<F> {
    /// Creates an empty cache in front of `fetcher`
    pub fn new(fetcher: Arc<F>) -> Self {
        Self {
            fetcher,
            entries: Mutex::new(HashMap::new()),
            calls_made: AtomicUsize::new(0),
        }
    }

    /// Returns the sub-breeds of `breed`
    ///
    /// A cached breed is answered without calling the fetcher. Otherwise the
    /// fetcher is called once, the call is counted, and a successful result is
    /// stored as an immutable snapshot and returned. Errors from the fetcher
    /// are returned unchanged and nothing is stored for `breed`.
    ///
    /// The breed name is used as-is: lookups are case-sensitive.
    pub async fn get_sub_breeds(&self, breed: &str) -> Result<SubBreeds, BreedError> {
        let cached = self.entries().get(breed).cloned();
        if let Some(cached) = cached {
            debug!(breed, "cache hit");
            return Ok(cached);
        }

        debug!(breed, "cache miss, calling fetcher");
        let fetched = {
            let _call = CallGuard::new(&self.calls_made);
            self.fetcher.fetch_sub_breeds(breed).await
        };

        match fetched {
            Ok(sub_breeds) => Ok(self.store(breed, sub_breeds)),
            Err(err) => {
                debug!(breed, error = %err, "fetch failed, not caching");
                Err(err)
            }
        }
    }

    /// Number of calls made to the wrapped fetcher so far
    pub fn calls_made(&self) -> usize {
        self.calls_made.load(Ordering::SeqCst)
    }

    /// Number of breeds currently cached
    pub fn len(&self) -> usize {
        self.entries().len()
    }

    /// Returns true if nothing has been cached yet
    pub fn is_empty(&self) -> bool {
        self.entries().is_empty()
    }

    /// Returns true if `breed` has a cached result
    pub fn contains(&self, breed: &str) -> bool {
        self.entries().contains_key(breed)
    }

    /// Stores a fetched list unless another caller stored one first
    fn store(&self, breed: &str, sub_breeds: Vec<String>) -> SubBreeds {
        let mut entries = self.entries();
        let stored = entries
            .entry(breed.to_string())
            .or_insert_with(|| Arc::from(sub_breeds));
        Arc::clone(stored)
    }

    fn entries(&self) -> MutexGuard<'_, HashMap<String, SubBreeds>> {
        // The map is only ever replaced entry-by-entry, so a poisoned lock
        // still holds consistent data.
        self.entries.lock().unwrap_or_else(PoisonError::into_inner)
    }
}
