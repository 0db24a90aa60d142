//! # JSON API
//!
//! Read-only views of the store for scripts and tests, the OpenAPI
//! document describing them, and a live event stream.

pub mod catalog;
pub mod events;

use axum::{
    http::{header, StatusCode},
    response::{IntoResponse, Response},
    routing::get,
    Router,
};
use utoipa::OpenApi;

use crate::app::AppState;
use catalog::{CartLine, CartResponse, CatalogResponse, FiltersResponse, ProductSummary};

#[derive(OpenApi)]
#[openapi(
    info(
        title = "Storefront API",
        version = "1.0.0",
        description = "Read models for the Storefront catalog and cart"
    ),
    paths(catalog::get_catalog, catalog::get_cart),
    components(schemas(
        CatalogResponse,
        FiltersResponse,
        ProductSummary,
        CartResponse,
        CartLine
    )),
    tags(
        (name = "catalog", description = "Catalog status and filtered products"),
        (name = "cart", description = "Cart contents")
    )
)]
pub struct ApiDoc;

async fn serve_openapi() -> Response {
    match ApiDoc::openapi().to_json() {
        Ok(doc) => ([(header::CONTENT_TYPE, "application/json")], doc).into_response(),
        Err(e) => {
            tracing::error!(error = %e, "Failed to render OpenAPI document");
            StatusCode::INTERNAL_SERVER_ERROR.into_response()
        }
    }
}

/// Routes mounted under `/api/v1`
pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/catalog", get(catalog::get_catalog))
        .route("/cart", get(catalog::get_cart))
        .route("/events", get(events::events))
        .route("/openapi.json", get(serve_openapi))
}
