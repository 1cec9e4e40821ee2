//! Flat-file persistence adapters.
//!
//! Each data store is a single JSON array in one file. Adapters are thin:
//! they translate between on-disk JSON and domain types and map I/O and
//! parse failures onto [`StoreError`](crate::domain::ports::StoreError).
//! No business logic lives here, and no locking either — read-modify-write
//! atomicity belongs to the domain services.

mod json_file;

pub use json_file::{JsonFileBreedStore, JsonFileFavouriteStore};
