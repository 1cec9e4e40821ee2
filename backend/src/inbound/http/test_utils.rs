//! Helpers shared by handler tests.

use std::sync::Arc;

use actix_web::web;
use serde_json::json;

use crate::domain::ports::{InMemoryBreedStore, InMemoryFavouriteStore};
use crate::domain::{Breed, BreedCatalogue, FavouriteRecord, FavouritesService};
use crate::inbound::http::state::HttpState;

/// Build a breed with an id and a name, the minimum a test cares about.
pub fn breed(id: i64, name: &str) -> Breed {
    serde_json::from_value(json!({ "id": id, "name": name })).expect("breed JSON")
}

/// Build handler state over in-memory stores seeded with the given data.
pub fn test_state(
    breeds: Vec<Breed>,
    favourites: Vec<FavouriteRecord>,
) -> web::Data<HttpState> {
    let catalogue = Arc::new(BreedCatalogue::new(Arc::new(InMemoryBreedStore::new(
        breeds,
    ))));
    let favourites = Arc::new(FavouritesService::new(
        Arc::new(InMemoryFavouriteStore::new(favourites)),
        catalogue.clone(),
    ));
    web::Data::new(HttpState::new(catalogue, favourites))
}
