//! Read-only catalogue service over the breed dataset.

use std::sync::Arc;

use tracing::warn;

use crate::domain::ports::BreedStore;
use crate::domain::{Breed, Error};

/// Read access to the full breed list.
///
/// The catalogue has no cache and no side effects: every call re-reads the
/// backing store in full, so a dataset edited on disk is visible on the
/// next request.
pub struct BreedCatalogue {
    store: Arc<dyn BreedStore>,
}

impl BreedCatalogue {
    /// Create a catalogue over the given store.
    pub fn new(store: Arc<dyn BreedStore>) -> Self {
        Self { store }
    }

    /// List every breed in the dataset's storage order.
    ///
    /// # Errors
    /// Returns [`Error::not_found`] when the dataset is absent, empty, or
    /// does not parse.
    pub async fn list_all(&self) -> Result<Vec<Breed>, Error> {
        let breeds = self
            .store
            .load_all()
            .await
            .map_err(|err| Error::not_found(format!("no breeds found: {err}")))?;
        if breeds.is_empty() {
            return Err(Error::not_found("no breeds found"));
        }
        Ok(breeds)
    }

    /// Fetch the single breed with the given id.
    ///
    /// # Errors
    /// Returns [`Error::not_found`] when no breed matches or the dataset
    /// cannot be read.
    pub async fn get_by_id(&self, id: i64) -> Result<Breed, Error> {
        let breeds = self
            .store
            .load_all()
            .await
            .map_err(|err| Error::not_found(format!("breed not found: {err}")))?;
        breeds
            .into_iter()
            .find(|breed| breed.id == id)
            .ok_or_else(|| Error::not_found("breed not found"))
    }

    /// Best-effort read of the full dataset for join-side consumers.
    ///
    /// Favourite expansion must tolerate an unreadable breed dataset by
    /// marking references dangling instead of failing, so store errors
    /// degrade to an empty snapshot here.
    pub async fn snapshot(&self) -> Vec<Breed> {
        match self.store.load_all().await {
            Ok(breeds) => breeds,
            Err(error) => {
                warn!(%error, "breed dataset unreadable; treating catalogue as empty");
                Vec::new()
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::ErrorCode;
    use crate::domain::ports::{InMemoryBreedStore, MockBreedStore, StoreError};
    use serde_json::json;

    fn breed(id: i64, name: &str) -> Breed {
        serde_json::from_value(json!({ "id": id, "name": name })).expect("breed JSON")
    }

    fn catalogue(breeds: Vec<Breed>) -> BreedCatalogue {
        BreedCatalogue::new(Arc::new(InMemoryBreedStore::new(breeds)))
    }

    #[tokio::test]
    async fn list_all_preserves_storage_order() {
        let catalogue = catalogue(vec![breed(3, "Akita"), breed(1, "Beagle")]);
        let breeds = catalogue.list_all().await.expect("list breeds");
        assert_eq!(
            breeds.iter().map(|b| b.id).collect::<Vec<_>>(),
            vec![3, 1]
        );
    }

    #[tokio::test]
    async fn list_all_rejects_empty_dataset() {
        let error = catalogue(Vec::new()).list_all().await.expect_err("empty dataset");
        assert_eq!(error.code, ErrorCode::NotFound);
    }

    #[tokio::test]
    async fn list_all_maps_store_failure_to_not_found() {
        let mut store = MockBreedStore::new();
        store
            .expect_load_all()
            .return_once(|| Err(StoreError::malformed("expected array")));
        let catalogue = BreedCatalogue::new(Arc::new(store));
        let error = catalogue.list_all().await.expect_err("unreadable dataset");
        assert_eq!(error.code, ErrorCode::NotFound);
    }

    #[tokio::test]
    async fn get_by_id_agrees_with_list_all() {
        let catalogue = catalogue(vec![breed(1, "Beagle"), breed(2, "Akita"), breed(5, "Pug")]);
        for listed in catalogue.list_all().await.expect("list breeds") {
            let fetched = catalogue.get_by_id(listed.id).await.expect("fetch breed");
            assert_eq!(fetched, listed);
        }
    }

    #[tokio::test]
    async fn get_by_id_rejects_unknown_id() {
        let error = catalogue(vec![breed(1, "Beagle")])
            .get_by_id(99)
            .await
            .expect_err("unknown breed");
        assert_eq!(error.code, ErrorCode::NotFound);
        assert_eq!(error.message, "breed not found");
    }

    #[tokio::test]
    async fn snapshot_degrades_to_empty_on_store_failure() {
        let mut store = MockBreedStore::new();
        store
            .expect_load_all()
            .return_once(|| Err(StoreError::unavailable("no such file")));
        let catalogue = BreedCatalogue::new(Arc::new(store));
        assert!(catalogue.snapshot().await.is_empty());
    }
}
