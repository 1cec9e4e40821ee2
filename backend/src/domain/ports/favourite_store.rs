//! Read/write port over the favourites collection.

use std::sync::Mutex;

use async_trait::async_trait;

use super::StoreError;
use crate::domain::FavouriteRecord;

/// Port providing whole-collection reads and rewrites of the favourites
/// collection.
///
/// Every write replaces the entire collection; there are no partial or
/// append writes. Callers own read-modify-write atomicity — see
/// [`FavouritesService`](crate::domain::FavouritesService) for the lock.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait FavouriteStore: Send + Sync {
    /// Load every favourite record in storage order.
    async fn load_all(&self) -> Result<Vec<FavouriteRecord>, StoreError>;

    /// Replace the entire stored collection with `records`.
    async fn replace_all(&self, records: &[FavouriteRecord]) -> Result<(), StoreError>;
}

/// In-memory favourite store for tests and local experimentation.
#[derive(Debug, Default)]
pub struct InMemoryFavouriteStore {
    records: Mutex<Vec<FavouriteRecord>>,
}

impl InMemoryFavouriteStore {
    /// Create a store pre-populated with the given records.
    pub fn new(records: Vec<FavouriteRecord>) -> Self {
        Self {
            records: Mutex::new(records),
        }
    }

    /// Return a copy of the stored records, for assertions.
    ///
    /// # Errors
    /// Returns [`StoreError::Unavailable`] when the store lock is poisoned.
    pub fn snapshot(&self) -> Result<Vec<FavouriteRecord>, StoreError> {
        let records = self
            .records
            .lock()
            .map_err(|_| StoreError::unavailable("favourite store lock poisoned"))?;
        Ok(records.clone())
    }
}

#[async_trait]
impl FavouriteStore for InMemoryFavouriteStore {
    async fn load_all(&self) -> Result<Vec<FavouriteRecord>, StoreError> {
        self.snapshot()
    }

    async fn replace_all(&self, records: &[FavouriteRecord]) -> Result<(), StoreError> {
        let mut stored = self
            .records
            .lock()
            .map_err(|_| StoreError::unavailable("favourite store lock poisoned"))?;
        *stored = records.to_vec();
        Ok(())
    }
}
