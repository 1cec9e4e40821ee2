//! Read-side port over the breed dataset.

use std::sync::Mutex;

use async_trait::async_trait;

use super::StoreError;
use crate::domain::Breed;

/// Port providing whole-collection reads of the breed dataset.
///
/// Implementations must preserve the dataset's storage order and must not
/// cache: the catalogue contract is a fresh read per call.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait BreedStore: Send + Sync {
    /// Load every breed in storage order.
    ///
    /// A valid-but-empty dataset loads as an empty vector; the caller
    /// decides whether emptiness is an error.
    async fn load_all(&self) -> Result<Vec<Breed>, StoreError>;
}

/// In-memory breed store for tests and local experimentation.
#[derive(Debug, Default)]
pub struct InMemoryBreedStore {
    breeds: Mutex<Vec<Breed>>,
}

impl InMemoryBreedStore {
    /// Create a store pre-populated with the given breeds.
    pub fn new(breeds: Vec<Breed>) -> Self {
        Self {
            breeds: Mutex::new(breeds),
        }
    }
}

#[async_trait]
impl BreedStore for InMemoryBreedStore {
    async fn load_all(&self) -> Result<Vec<Breed>, StoreError> {
        let breeds = self
            .breeds
            .lock()
            .map_err(|_| StoreError::unavailable("breed store lock poisoned"))?;
        Ok(breeds.clone())
    }
}
