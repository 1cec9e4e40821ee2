//! Storage ports for the hexagonal boundary.
//!
//! The two flat-file data stores are modelled as injected dependencies so
//! tests can substitute in-memory implementations. Each port is a whole
//! collection read (and, for favourites, a whole collection rewrite) —
//! the on-disk contract has no partial or append writes.

mod breed_store;
mod favourite_store;

#[cfg(test)]
pub use breed_store::MockBreedStore;
pub use breed_store::{BreedStore, InMemoryBreedStore};
#[cfg(test)]
pub use favourite_store::MockFavouriteStore;
pub use favourite_store::{FavouriteStore, InMemoryFavouriteStore};

/// Errors raised by the backing stores.
///
/// The taxonomy is deliberately thin: the service treats both variants as
/// "store cannot be read" and surfaces them as not-found at the boundary.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum StoreError {
    /// The backing store could not be read or written.
    #[error("store unavailable: {message}")]
    Unavailable {
        /// Adapter-specific description of the failure.
        message: String,
    },
    /// The backing store was read but its contents did not parse.
    #[error("store contents malformed: {message}")]
    Malformed {
        /// Adapter-specific description of the failure.
        message: String,
    },
}

impl StoreError {
    /// Construct an [`StoreError::Unavailable`] from any displayable cause.
    pub fn unavailable(message: impl Into<String>) -> Self {
        Self::Unavailable {
            message: message.into(),
        }
    }

    /// Construct a [`StoreError::Malformed`] from any displayable cause.
    pub fn malformed(message: impl Into<String>) -> Self {
        Self::Malformed {
            message: message.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_includes_cause() {
        let err = StoreError::unavailable("no such file");
        assert_eq!(err.to_string(), "store unavailable: no such file");
        let err = StoreError::malformed("expected array");
        assert_eq!(err.to_string(), "store contents malformed: expected array");
    }
}
