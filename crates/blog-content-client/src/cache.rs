//! One-shot cache for the metadata manifest

use std::future::Future;
use std::sync::Arc;

use tokio::sync::Mutex;

use crate::error::Result;
use crate::types::BlogMetadata;

#[derive(Debug, Default)]
enum CacheState {
    #[default]
    Unpopulated,
    Populated(Arc<[BlogMetadata]>),
}

/// Holds the manifest once it has been fetched.
///
/// The state only ever moves from unpopulated to populated. The lock is held
/// across the fetch, so concurrent first callers wait for a single fetch
/// instead of issuing their own. A failed fetch leaves the cache unpopulated.
#[derive(Debug, Default)]
pub struct MetadataCache {
    state: Mutex<CacheState>,
}

impl MetadataCache {
    pub fn new() -> Self {
        Self::default()
    }

    /// Return the cached list, running `fetch` to populate it if needed
    pub async fn get_or_try_populate<F, Fut>(&self, fetch: F) -> Result<Arc<[BlogMetadata]>>
    where
        F: FnOnce() -> Fut,
        Fut: Future<Output = Result<Vec<BlogMetadata>>>,
    {
        let mut state = self.state.lock().await;

        if let CacheState::Populated(entries) = &*state {
            return Ok(Arc::clone(entries));
        }

        let entries: Arc<[BlogMetadata]> = fetch().await?.into();
        *state = CacheState::Populated(Arc::clone(&entries));
        Ok(entries)
    }

    pub async fn is_populated(&self) -> bool {
        matches!(*self.state.lock().await, CacheState::Populated(_))
    }
}
