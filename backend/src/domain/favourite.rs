//! Favourite records and their expanded read-side view.

use serde::{Deserialize, Serialize};

use crate::domain::Breed;

/// Persisted favourite entry: a bare foreign-key reference to a breed.
///
/// Identifiers are unique within the collection and assigned monotonically
/// as `max(existing ids) + 1`. Referential integrity of `breed_id` is
/// checked only when the record is created, never re-validated afterwards.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct FavouriteRecord {
    /// Identifier assigned by this service.
    pub id: i64,
    /// Catalogue breed this favourite points at.
    pub breed_id: i64,
}

/// Response-only view of a favourite joined against the breed catalogue.
///
/// Never persisted; computed fresh on every read. A dangling `breed_id`
/// yields `breed: None` rather than failing the whole read.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ExpandedFavourite {
    /// The underlying [`FavouriteRecord`] identifier.
    pub id: i64,
    /// The resolved breed, or `None` when the reference is dangling.
    pub breed: Option<Breed>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn record_matches_on_disk_shape() {
        let record: FavouriteRecord =
            serde_json::from_value(json!({ "id": 2, "breed_id": 9 })).expect("favourite JSON");
        assert_eq!(record, FavouriteRecord { id: 2, breed_id: 9 });
        assert_eq!(
            serde_json::to_value(record).expect("serialise favourite"),
            json!({ "id": 2, "breed_id": 9 })
        );
    }

    #[test]
    fn dangling_expansion_serialises_null_breed() {
        let expanded = ExpandedFavourite { id: 4, breed: None };
        assert_eq!(
            serde_json::to_value(&expanded).expect("serialise expansion"),
            json!({ "id": 4, "breed": null })
        );
    }
}
