//! Breed catalogue read endpoints.
//!
//! ```text
//! GET /breeds        List the full breed catalogue
//! GET /breeds/{id}   Fetch a single breed by id
//! ```

use actix_web::{HttpResponse, get, web};

use crate::domain::Error;
use crate::inbound::http::ApiResult;
use crate::inbound::http::state::HttpState;
use crate::inbound::http::validation::parse_entity_id;

/// List every breed in the catalogue.
#[utoipa::path(
    get,
    path = "/breeds",
    responses(
        (status = 200, description = "All breeds, in dataset order"),
        (status = 404, description = "Breed dataset absent, empty, or unreadable", body = Error)
    ),
    tags = ["breeds"],
    operation_id = "listBreeds"
)]
#[get("/breeds")]
pub async fn list_breeds(state: web::Data<HttpState>) -> ApiResult<HttpResponse> {
    let breeds = state.breeds.list_all().await?;
    Ok(HttpResponse::Ok().json(breeds))
}

/// Fetch a single breed by id.
#[utoipa::path(
    get,
    path = "/breeds/{id}",
    params(("id" = String, Path, description = "Breed identifier")),
    responses(
        (status = 200, description = "The matching breed"),
        (status = 404, description = "No breed with this id", body = Error)
    ),
    tags = ["breeds"],
    operation_id = "getBreedById"
)]
#[get("/breeds/{id}")]
pub async fn get_breed(
    state: web::Data<HttpState>,
    path: web::Path<String>,
) -> ApiResult<HttpResponse> {
    let id = parse_entity_id(&path, "breed not found")?;
    let breed = state.breeds.get_by_id(id).await?;
    Ok(HttpResponse::Ok().json(breed))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::inbound::http::test_utils::{breed, test_state};
    use actix_web::http::StatusCode;
    use actix_web::{App, test as actix_test};
    use serde_json::Value;

    fn sample_breeds() -> Vec<crate::domain::Breed> {
        vec![breed(1, "Beagle"), breed(7, "Samoyed")]
    }

    fn breeds_app(
        breeds: Vec<crate::domain::Breed>,
    ) -> App<
        impl actix_web::dev::ServiceFactory<
            actix_web::dev::ServiceRequest,
            Config = (),
            Response = actix_web::dev::ServiceResponse,
            Error = actix_web::Error,
            InitError = (),
        >,
    > {
        App::new()
            .app_data(test_state(breeds, Vec::new()))
            .service(list_breeds)
            .service(get_breed)
    }

    #[actix_web::test]
    async fn list_returns_dataset_order() {
        let app = actix_test::init_service(breeds_app(sample_breeds())).await;
        let req = actix_test::TestRequest::get().uri("/breeds").to_request();
        let res = actix_test::call_service(&app, req).await;
        assert_eq!(res.status(), StatusCode::OK);
        let body: Value = actix_test::read_body_json(res).await;
        let ids: Vec<_> = body
            .as_array()
            .expect("array body")
            .iter()
            .map(|b| b["id"].as_i64())
            .collect();
        assert_eq!(ids, vec![Some(1), Some(7)]);
    }

    #[actix_web::test]
    async fn list_of_empty_dataset_is_404() {
        let app = actix_test::init_service(breeds_app(Vec::new())).await;
        let req = actix_test::TestRequest::get().uri("/breeds").to_request();
        let res = actix_test::call_service(&app, req).await;
        assert_eq!(res.status(), StatusCode::NOT_FOUND);
    }

    #[actix_web::test]
    async fn get_by_id_returns_full_object() {
        let app = actix_test::init_service(breeds_app(sample_breeds())).await;
        let req = actix_test::TestRequest::get().uri("/breeds/7").to_request();
        let res = actix_test::call_service(&app, req).await;
        assert_eq!(res.status(), StatusCode::OK);
        let body: Value = actix_test::read_body_json(res).await;
        assert_eq!(body["id"], 7);
        assert_eq!(body["name"], "Samoyed");
    }

    #[actix_web::test]
    async fn get_with_non_numeric_id_is_404_not_400() {
        let app = actix_test::init_service(breeds_app(sample_breeds())).await;
        let req = actix_test::TestRequest::get()
            .uri("/breeds/husky")
            .to_request();
        let res = actix_test::call_service(&app, req).await;
        assert_eq!(res.status(), StatusCode::NOT_FOUND);
    }
}
