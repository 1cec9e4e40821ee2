//! Favourites collection management and catalogue joins.

use std::sync::Arc;

use tokio::sync::Mutex;
use tracing::debug;

use crate::domain::ports::{FavouriteStore, StoreError};
use crate::domain::{BreedCatalogue, Error, ExpandedFavourite, FavouriteRecord};

/// Manages the favourites collection and produces expanded views joined
/// against the breed catalogue.
///
/// Reads go straight to the store. The add and remove paths are a whole
/// read-modify-write of the collection, which the backing store cannot
/// make atomic, so they serialise behind a single in-process write lock.
/// That lock is the only concurrency guarantee: the store remains a plain
/// last-write-wins file and is safe for one process only.
pub struct FavouritesService {
    store: Arc<dyn FavouriteStore>,
    catalogue: Arc<BreedCatalogue>,
    write_lock: Mutex<()>,
}

impl FavouritesService {
    /// Create a service over the given favourite store and breed catalogue.
    pub fn new(store: Arc<dyn FavouriteStore>, catalogue: Arc<BreedCatalogue>) -> Self {
        Self {
            store,
            catalogue,
            write_lock: Mutex::new(()),
        }
    }

    fn map_store_error(error: StoreError) -> Error {
        Error::not_found(format!("favourites unreadable: {error}"))
    }

    /// List every favourite in storage order, each joined against the
    /// breed catalogue.
    ///
    /// A favourite whose `breed_id` no longer resolves is returned with
    /// `breed: None` rather than failing the whole listing.
    ///
    /// # Errors
    /// Returns [`Error::not_found`] only when the favourites store cannot
    /// be read or parsed.
    pub async fn list_all_expanded(&self) -> Result<Vec<ExpandedFavourite>, Error> {
        let records = self
            .store
            .load_all()
            .await
            .map_err(Self::map_store_error)?;
        let breeds = self.catalogue.snapshot().await;
        Ok(records
            .into_iter()
            .map(|record| ExpandedFavourite {
                id: record.id,
                breed: breeds.iter().find(|b| b.id == record.breed_id).cloned(),
            })
            .collect())
    }

    /// Fetch a single favourite by id, joined against the breed catalogue.
    ///
    /// # Errors
    /// Returns [`Error::not_found`] in three distinct cases: the store is
    /// empty or unreadable, no record matches `id`, or the matched
    /// record's breed no longer exists. The messages differ; the HTTP
    /// status does not.
    pub async fn get_by_id_expanded(&self, id: i64) -> Result<ExpandedFavourite, Error> {
        let records = self
            .store
            .load_all()
            .await
            .map_err(Self::map_store_error)?;
        if records.is_empty() {
            return Err(Error::not_found("no favourites stored"));
        }
        let record = records
            .into_iter()
            .find(|record| record.id == id)
            .ok_or_else(|| Error::not_found("favourite not found"))?;
        let breed = self
            .catalogue
            .snapshot()
            .await
            .into_iter()
            .find(|breed| breed.id == record.breed_id)
            .ok_or_else(|| Error::not_found("favourite breed not found"))?;
        Ok(ExpandedFavourite {
            id: record.id,
            breed: Some(breed),
        })
    }

    /// Add the breed with `breed_id` to the favourites collection.
    ///
    /// Adding a breed that is already a favourite is a no-op success, so
    /// the call is idempotent per breed. New records take the identifier
    /// `1 + max(existing ids)`, or `1` for an empty collection.
    ///
    /// # Errors
    /// Returns [`Error::not_found`] when no catalogue breed has `breed_id`
    /// or the favourites store cannot be read or written.
    pub async fn add(&self, breed_id: i64) -> Result<(), Error> {
        let _guard = self.write_lock.lock().await;

        let breed = self
            .catalogue
            .snapshot()
            .await
            .into_iter()
            .find(|breed| breed.id == breed_id)
            .ok_or_else(|| Error::not_found("breed not found"))?;

        let mut records = self
            .store
            .load_all()
            .await
            .map_err(Self::map_store_error)?;
        if records.iter().any(|record| record.breed_id == breed.id) {
            debug!(breed_id, "breed already a favourite; nothing to do");
            return Ok(());
        }

        let next_id = records.iter().map(|record| record.id).max().unwrap_or(0) + 1;
        records.push(FavouriteRecord {
            id: next_id,
            breed_id: breed.id,
        });
        self.store
            .replace_all(&records)
            .await
            .map_err(Self::map_store_error)?;
        debug!(breed_id, favourite_id = next_id, "favourite added");
        Ok(())
    }

    /// Remove the favourite with the given id, if present.
    ///
    /// Deletes are idempotent by design: a missing id succeeds without
    /// touching the store.
    ///
    /// # Errors
    /// Returns [`Error::not_found`] when the favourites store cannot be
    /// read or written.
    pub async fn remove(&self, id: i64) -> Result<(), Error> {
        let _guard = self.write_lock.lock().await;

        let records = self
            .store
            .load_all()
            .await
            .map_err(Self::map_store_error)?;
        let remaining: Vec<FavouriteRecord> = records
            .iter()
            .copied()
            .filter(|record| record.id != id)
            .collect();
        if remaining.len() == records.len() {
            debug!(favourite_id = id, "favourite absent; delete is a no-op");
            return Ok(());
        }
        self.store
            .replace_all(&remaining)
            .await
            .map_err(Self::map_store_error)?;
        debug!(favourite_id = id, "favourite removed");
        Ok(())
    }
}
