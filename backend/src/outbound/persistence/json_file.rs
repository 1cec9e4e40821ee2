//! JSON-file implementations of the storage ports.

use std::path::{Path, PathBuf};

use async_trait::async_trait;
use serde::Serialize;
use serde::de::DeserializeOwned;

use crate::domain::ports::{BreedStore, FavouriteStore, StoreError};
use crate::domain::{Breed, FavouriteRecord};

/// Read a whole-file JSON array.
///
/// A file containing only whitespace reads as an empty collection; the
/// original dataset treats a blank file and `[]` the same way.
async fn read_array<T: DeserializeOwned>(path: &Path) -> Result<Vec<T>, StoreError> {
    let bytes = tokio::fs::read(path)
        .await
        .map_err(|err| StoreError::unavailable(format!("{}: {err}", path.display())))?;
    if bytes.iter().all(u8::is_ascii_whitespace) {
        return Ok(Vec::new());
    }
    serde_json::from_slice(&bytes)
        .map_err(|err| StoreError::malformed(format!("{}: {err}", path.display())))
}

/// Rewrite the whole file with the given collection.
async fn write_array<T: Serialize>(path: &Path, items: &[T]) -> Result<(), StoreError> {
    let body = serde_json::to_vec(items)
        .map_err(|err| StoreError::malformed(format!("{}: {err}", path.display())))?;
    tokio::fs::write(path, body)
        .await
        .map_err(|err| StoreError::unavailable(format!("{}: {err}", path.display())))
}

/// Breed dataset backed by a single JSON file.
#[derive(Debug, Clone)]
pub struct JsonFileBreedStore {
    path: PathBuf,
}

impl JsonFileBreedStore {
    /// Create a store over the given file path.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

#[async_trait]
impl BreedStore for JsonFileBreedStore {
    async fn load_all(&self) -> Result<Vec<Breed>, StoreError> {
        read_array(&self.path).await
    }
}

/// Favourites collection backed by a single JSON file.
///
/// Writes rewrite the entire file; there is no partial update and no file
/// locking. The domain service serialises writers within the process.
#[derive(Debug, Clone)]
pub struct JsonFileFavouriteStore {
    path: PathBuf,
}

impl JsonFileFavouriteStore {
    /// Create a store over the given file path.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

#[async_trait]
impl FavouriteStore for JsonFileFavouriteStore {
    async fn load_all(&self) -> Result<Vec<FavouriteRecord>, StoreError> {
        read_array(&self.path).await
    }

    async fn replace_all(&self, records: &[FavouriteRecord]) -> Result<(), StoreError> {
        write_array(&self.path, records).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use tempfile::TempDir;

    fn write_file(dir: &TempDir, name: &str, contents: &str) -> PathBuf {
        let path = dir.path().join(name);
        std::fs::write(&path, contents).expect("seed data file");
        path
    }

    #[tokio::test]
    async fn loads_breeds_in_file_order() {
        let dir = TempDir::new().expect("temp dir");
        let path = write_file(
            &dir,
            "dogs.json",
            r#"[{"id":3,"name":"Akita"},{"id":1,"name":"Beagle"}]"#,
        );
        let store = JsonFileBreedStore::new(path);
        let breeds = store.load_all().await.expect("load breeds");
        assert_eq!(breeds.iter().map(|b| b.id).collect::<Vec<_>>(), vec![3, 1]);
    }

    #[tokio::test]
    async fn missing_file_is_unavailable() {
        let dir = TempDir::new().expect("temp dir");
        let store = JsonFileBreedStore::new(dir.path().join("absent.json"));
        let error = store.load_all().await.expect_err("missing file");
        assert!(matches!(error, StoreError::Unavailable { .. }));
    }

    #[tokio::test]
    async fn malformed_json_is_malformed() {
        let dir = TempDir::new().expect("temp dir");
        let path = write_file(&dir, "dogs.json", "{not json");
        let store = JsonFileBreedStore::new(path);
        let error = store.load_all().await.expect_err("bad file");
        assert!(matches!(error, StoreError::Malformed { .. }));
    }

    #[tokio::test]
    async fn blank_file_reads_as_empty_collection() {
        let dir = TempDir::new().expect("temp dir");
        let path = write_file(&dir, "favs.json", "  \n");
        let store = JsonFileFavouriteStore::new(path);
        assert!(store.load_all().await.expect("load favourites").is_empty());
    }

    #[tokio::test]
    async fn replace_all_rewrites_the_whole_file() {
        let dir = TempDir::new().expect("temp dir");
        let path = write_file(&dir, "favs.json", r#"[{"id":1,"breed_id":2}]"#);
        let store = JsonFileFavouriteStore::new(path.clone());

        store
            .replace_all(&[FavouriteRecord { id: 4, breed_id: 9 }])
            .await
            .expect("rewrite favourites");

        let on_disk: serde_json::Value = serde_json::from_str(
            &std::fs::read_to_string(&path).expect("read back file"),
        )
        .expect("written JSON");
        assert_eq!(on_disk, json!([{ "id": 4, "breed_id": 9 }]));
    }
}
