//! Product detail page

use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::Html,
};

use crate::app::AppState;
use crate::views::{layout, product};

pub async fn detail(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> (StatusCode, Html<String>) {
    let flash = state.store.take_flash().await;
    let id = id.parse::<u64>().ok();

    state
        .store
        .read(|s| {
            let count = s.cart.item_count();
            match id.and_then(|id| s.product(id)) {
                Some(found) => {
                    let related = s.related_products(found.id);
                    let body = product::render(found, &related);
                    (
                        StatusCode::OK,
                        Html(layout::page(&found.title, count, flash.as_deref(), &body)),
                    )
                }
                None => (
                    StatusCode::NOT_FOUND,
                    Html(layout::page(
                        "Product not found",
                        count,
                        flash.as_deref(),
                        product::not_found(),
                    )),
                ),
            }
        })
        .await
}
