//! Domain types, services, and ports.
//!
//! Everything in this module is transport agnostic. Inbound adapters map
//! [`Error`] values to HTTP responses; outbound adapters implement the
//! storage ports declared in [`ports`].

pub mod breed;
pub mod breed_catalogue;
pub mod error;
pub mod favourite;
pub mod favourites_service;
pub mod ports;

pub use self::breed::Breed;
pub use self::breed_catalogue::BreedCatalogue;
pub use self::error::{Error, ErrorCode};
pub use self::favourite::{ExpandedFavourite, FavouriteRecord};
pub use self::favourites_service::FavouritesService;
