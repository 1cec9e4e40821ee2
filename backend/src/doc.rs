//! OpenAPI document assembled from handler annotations.

use actix_web::{HttpResponse, get};
use utoipa::OpenApi;

use crate::domain::error::{Error, ErrorCode};
use crate::inbound::http::favourites::AddFavouriteRequest;

/// OpenAPI surface for the breed catalogue and favourites endpoints.
#[derive(OpenApi)]
#[openapi(
    paths(
        crate::inbound::http::breeds::list_breeds,
        crate::inbound::http::breeds::get_breed,
        crate::inbound::http::favourites::list_favourites,
        crate::inbound::http::favourites::get_favourite,
        crate::inbound::http::favourites::add_favourite,
        crate::inbound::http::favourites::remove_favourite,
        crate::inbound::http::health::live,
        crate::inbound::http::health::ready,
    ),
    components(schemas(Error, ErrorCode, AddFavouriteRequest)),
    tags(
        (name = "breeds", description = "Read-only breed catalogue"),
        (name = "favorites", description = "User-maintained favourites list"),
        (name = "health", description = "Orchestration probes")
    )
)]
pub struct ApiDoc;

/// Serve the generated OpenAPI document as JSON.
#[get("/api-docs/openapi.json")]
pub async fn openapi_json() -> HttpResponse {
    HttpResponse::Ok().json(ApiDoc::openapi())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn document_lists_every_endpoint() {
        let doc = ApiDoc::openapi();
        let paths: Vec<_> = doc.paths.paths.keys().cloned().collect();
        for expected in [
            "/breeds",
            "/breeds/{id}",
            "/favorites",
            "/favorites/{id}",
            "/favorites/add/",
            "/health/live",
            "/health/ready",
        ] {
            assert!(paths.iter().any(|p| p == expected), "missing {expected}");
        }
    }
}
