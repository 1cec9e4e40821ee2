//! Breed catalogue entry.

use serde::{Deserialize, Serialize};

/// A single dog breed from the catalogue.
///
/// Only `id` is interpreted by this service. The remaining attributes are
/// opaque metadata assigned externally and passed through unmodified, so
/// they are carried as a flattened JSON map rather than a fixed schema.
///
/// # Examples
/// ```
/// use backend::domain::Breed;
///
/// let breed: Breed = serde_json::from_str(
///     r#"{ "id": 3, "name": "Samoyed", "group": "Working" }"#,
/// )
/// .expect("breed JSON");
/// assert_eq!(breed.id, 3);
/// assert_eq!(breed.details["name"], "Samoyed");
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Breed {
    /// Unique, stable identifier assigned by the dataset, never by us.
    pub id: i64,
    /// Opaque breed metadata, preserved verbatim on the wire.
    #[serde(flatten)]
    pub details: serde_json::Map<String, serde_json::Value>,
}
