//! Favourites endpoints.
//!
//! ```text
//! GET    /favorites          List favourites, expanded against the catalogue
//! GET    /favorites/{id}     Fetch one favourite, expanded
//! POST   /favorites/add/     Add a breed to the favourites
//! DELETE /favorites/{id}     Remove a favourite (idempotent)
//! ```
//!
//! Paths keep the original dataset's American spelling for client
//! compatibility.

use actix_web::{HttpResponse, delete, get, post, web};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::domain::Error;
use crate::inbound::http::ApiResult;
use crate::inbound::http::state::HttpState;
use crate::inbound::http::validation::parse_entity_id;

/// Request body for adding a favourite.
#[derive(Debug, Clone, Copy, Deserialize, Serialize, ToSchema)]
pub struct AddFavouriteRequest {
    /// Catalogue id of the breed to favourite.
    #[serde(default)]
    pub breed_id: Option<i64>,
}

/// List every favourite, expanded against the breed catalogue.
#[utoipa::path(
    get,
    path = "/favorites",
    responses(
        (status = 200, description = "All favourites with their breeds resolved; dangling references carry a null breed"),
        (status = 404, description = "Favourites store unreadable", body = Error)
    ),
    tags = ["favorites"],
    operation_id = "listFavorites"
)]
#[get("/favorites")]
pub async fn list_favourites(state: web::Data<HttpState>) -> ApiResult<HttpResponse> {
    let favourites = state.favourites.list_all_expanded().await?;
    Ok(HttpResponse::Ok().json(favourites))
}

/// Fetch a single favourite by id, expanded against the breed catalogue.
#[utoipa::path(
    get,
    path = "/favorites/{id}",
    params(("id" = String, Path, description = "Favourite identifier")),
    responses(
        (status = 200, description = "The matching favourite with its breed resolved"),
        (status = 404, description = "Store empty, no matching favourite, or breed reference dangling", body = Error)
    ),
    tags = ["favorites"],
    operation_id = "getFavoriteById"
)]
#[get("/favorites/{id}")]
pub async fn get_favourite(
    state: web::Data<HttpState>,
    path: web::Path<String>,
) -> ApiResult<HttpResponse> {
    let id = parse_entity_id(&path, "favourite not found")?;
    let favourite = state.favourites.get_by_id_expanded(id).await?;
    Ok(HttpResponse::Ok().json(favourite))
}

/// Add a breed to the favourites collection.
///
/// Adding a breed that is already a favourite succeeds without creating a
/// duplicate.
#[utoipa::path(
    post,
    path = "/favorites/add/",
    request_body = AddFavouriteRequest,
    responses(
        (status = 204, description = "Favourite recorded (or already present)"),
        (status = 400, description = "Missing breed_id", body = Error),
        (status = 404, description = "No breed with this id", body = Error)
    ),
    tags = ["favorites"],
    operation_id = "addFavorite"
)]
#[post("/favorites/add/")]
pub async fn add_favourite(
    state: web::Data<HttpState>,
    payload: web::Json<AddFavouriteRequest>,
) -> ApiResult<HttpResponse> {
    // Zero is rejected alongside absence: no real breed carries id 0 and
    // the original service treated both the same way.
    let Some(breed_id) = payload.breed_id.filter(|id| *id != 0) else {
        return Err(Error::invalid_request("breed_id is required"));
    };
    state.favourites.add(breed_id).await?;
    Ok(HttpResponse::NoContent().finish())
}

/// Remove a favourite by id.
///
/// Deletes are idempotent: unknown ids (numeric or not) return 200 with
/// no body and leave the store untouched.
#[utoipa::path(
    delete,
    path = "/favorites/{id}",
    params(("id" = String, Path, description = "Favourite identifier")),
    responses(
        (status = 200, description = "Favourite absent after the call"),
        (status = 404, description = "Favourites store unreadable", body = Error)
    ),
    tags = ["favorites"],
    operation_id = "deleteFavorite"
)]
#[delete("/favorites/{id}")]
pub async fn remove_favourite(
    state: web::Data<HttpState>,
    path: web::Path<String>,
) -> ApiResult<HttpResponse> {
    // A non-numeric id cannot match any stored favourite; the idempotent
    // delete contract makes that a success, not an error.
    let Ok(id) = path.trim().parse::<i64>() else {
        return Ok(HttpResponse::Ok().finish());
    };
    state.favourites.remove(id).await?;
    Ok(HttpResponse::Ok().finish())
}
