use std::sync::Arc;

use axum::extract::{Extension, Path, Query};
use axum::http::{HeaderMap, StatusCode, header};
use axum::response::{IntoResponse, Response};
use axum::routing::get;
use axum::{Json, Router};

use catalog_core::ProductId;
use catalog_products::SearchCriteria;

use crate::app::dto::{ProductPayload, ProductResponse};
use crate::app::errors::{catalog_error_to_response, json_error};
use crate::app::services::AppServices;

pub fn router() -> Router {
    Router::new()
        .route("/", get(find_products).post(create_product))
        .route("/name/:prefix", get(names_by_prefix))
        .route("/:id", get(get_product).put(update_product))
}

/// GET /api/products/:id
///
/// Serves the enriched product together with its `ETag`. A matching
/// `If-None-Match` short-circuits to 304 with no body.
async fn get_product(
    Extension(services): Extension<Arc<AppServices>>,
    Path(id): Path<String>,
    headers: HeaderMap,
) -> Response {
    let id: ProductId = match id.parse() {
        Ok(id) => id,
        Err(err) => return catalog_error_to_response(err),
    };

    let product = match services.reads.find_by_id(id).await {
        Ok(product) => product,
        Err(err) => return catalog_error_to_response(err),
    };

    let current = product.revision.quoted();
    let if_none_match = headers
        .get(header::IF_NONE_MATCH)
        .and_then(|value| value.to_str().ok());
    if if_none_match == Some(current.as_str()) {
        return StatusCode::NOT_MODIFIED.into_response();
    }

    (
        StatusCode::OK,
        [(header::ETAG, current)],
        Json(ProductResponse::from(product)),
    )
        .into_response()
}

/// GET /api/products?name=...&owner=...
async fn find_products(
    Extension(services): Extension<Arc<AppServices>>,
    Query(params): Query<Vec<(String, String)>>,
) -> Response {
    let criteria = SearchCriteria::from_pairs(params);
    match services.reads.find(&criteria).await {
        Ok(products) => {
            let body: Vec<ProductResponse> =
                products.into_iter().map(ProductResponse::from).collect();
            (StatusCode::OK, Json(body)).into_response()
        }
        Err(err) => catalog_error_to_response(err),
    }
}

/// GET /api/products/name/:prefix
async fn names_by_prefix(
    Extension(services): Extension<Arc<AppServices>>,
    Path(prefix): Path<String>,
) -> Response {
    match services.reads.find_names_by_prefix(&prefix).await {
        Ok(names) => (StatusCode::OK, Json(names)).into_response(),
        Err(err) => catalog_error_to_response(err),
    }
}

/// POST /api/products
///
/// Replies 201 with a `Location` header and an empty body.
async fn create_product(
    Extension(services): Extension<Arc<AppServices>>,
    Json(payload): Json<ProductPayload>,
) -> Response {
    match services.mutations.create(payload.into_draft()).await {
        Ok(stored) => (
            StatusCode::CREATED,
            [(header::LOCATION, format!("/api/products/{}", stored.id))],
            (),
        )
            .into_response(),
        Err(err) => catalog_error_to_response(err),
    }
}

/// PUT /api/products/:id
///
/// The `If-Match` header carries the version token. Replies 204 with the
/// new `ETag` on success.
async fn update_product(
    Extension(services): Extension<Arc<AppServices>>,
    Path(id): Path<String>,
    headers: HeaderMap,
    Json(payload): Json<ProductPayload>,
) -> Response {
    let id: ProductId = match id.parse() {
        Ok(id) => id,
        Err(err) => return catalog_error_to_response(err),
    };

    let raw_token = match headers.get(header::IF_MATCH) {
        Some(value) => match value.to_str() {
            Ok(raw) => Some(raw),
            Err(_) => {
                return json_error(
                    StatusCode::PRECONDITION_FAILED,
                    "token_malformed",
                    "version token is not valid text",
                );
            }
        },
        None => None,
    };

    match services
        .mutations
        .update(id, payload.into_draft(), raw_token)
        .await
    {
        Ok(updated) => (
            StatusCode::NO_CONTENT,
            [(header::ETAG, updated.revision.quoted())],
            (),
        )
            .into_response(),
        Err(err) => catalog_error_to_response(err),
    }
}
