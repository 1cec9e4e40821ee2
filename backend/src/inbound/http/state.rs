//! Shared HTTP adapter state.
//!
//! Handlers accept this state via `actix_web::web::Data` so they depend
//! only on domain services and remain testable without touching disk.

use std::sync::Arc;

use crate::domain::{BreedCatalogue, FavouritesService};

/// Dependency bundle for HTTP handlers.
#[derive(Clone)]
pub struct HttpState {
    /// Read-only breed catalogue.
    pub breeds: Arc<BreedCatalogue>,
    /// Favourites collection service.
    pub favourites: Arc<FavouritesService>,
}

impl HttpState {
    /// Construct state from the two domain services.
    pub fn new(breeds: Arc<BreedCatalogue>, favourites: Arc<FavouritesService>) -> Self {
        Self { breeds, favourites }
    }
}
