//! Wiring of file-backed stores into handler state.

use std::sync::Arc;

use actix_web::web;

use backend::domain::{BreedCatalogue, FavouritesService};
use backend::inbound::http::state::HttpState;
use backend::outbound::persistence::{JsonFileBreedStore, JsonFileFavouriteStore};

use super::ServerConfig;

/// Build HTTP handler state over the configured JSON files.
pub fn build_http_state(config: &ServerConfig) -> web::Data<HttpState> {
    let catalogue = Arc::new(BreedCatalogue::new(Arc::new(JsonFileBreedStore::new(
        config.breeds_path.clone(),
    ))));
    let favourites = Arc::new(FavouritesService::new(
        Arc::new(JsonFileFavouriteStore::new(config.favourites_path.clone())),
        catalogue.clone(),
    ));
    web::Data::new(HttpState::new(catalogue, favourites))
}
