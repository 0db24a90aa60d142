//! Cart drawer page and cart mutations

use axum::{
    extract::{Path, State},
    http::{header, HeaderMap},
    response::{Html, Redirect},
};
use storefront_core::models::ProductId;
use storefront_core::state::StoreAction;

use crate::app::AppState;
use crate::views::{cart, layout};

pub async fn drawer(State(state): State<AppState>) -> Html<String> {
    let flash = state.store.take_flash().await;
    let html = state
        .store
        .read(|s| {
            layout::page(
                "Your Cart",
                s.cart.item_count(),
                flash.as_deref(),
                &cart::render(&s.cart),
            )
        })
        .await;
    Html(html)
}

/// Add one unit, then go back to the page the button was on
pub async fn add(
    State(state): State<AppState>,
    Path(id): Path<ProductId>,
    headers: HeaderMap,
) -> Redirect {
    state.store.dispatch(StoreAction::AddToCart(id)).await;
    Redirect::to(&back_to(&headers, "/"))
}

pub async fn increment(State(state): State<AppState>, Path(id): Path<ProductId>) -> Redirect {
    state
        .store
        .dispatch(StoreAction::AdjustQuantity { id, delta: 1 })
        .await;
    Redirect::to("/cart")
}

pub async fn decrement(State(state): State<AppState>, Path(id): Path<ProductId>) -> Redirect {
    state
        .store
        .dispatch(StoreAction::AdjustQuantity { id, delta: -1 })
        .await;
    Redirect::to("/cart")
}

pub async fn remove(State(state): State<AppState>, Path(id): Path<ProductId>) -> Redirect {
    state.store.dispatch(StoreAction::RemoveFromCart(id)).await;
    Redirect::to("/cart")
}

/// Local path from the Referer header
///
/// Only the path and query are kept so the redirect never leaves this host.
fn back_to(headers: &HeaderMap, fallback: &str) -> String {
    let Some(referer) = headers.get(header::REFERER).and_then(|v| v.to_str().ok()) else {
        return fallback.to_string();
    };

    let path = match referer.split_once("://") {
        Some((_, rest)) => rest.find('/').map(|i| &rest[i..]),
        None => Some(referer),
    };

    match path {
        Some(p) if p.starts_with('/') && !p.starts_with("//") => p.to_string(),
        _ => fallback.to_string(),
    }
}
