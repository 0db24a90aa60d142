//! # Shop Pages
//!
//! Catalog page, filter updates, and the full-reload recovery action.

use axum::{
    extract::State,
    response::{Html, Redirect},
    Form,
};
use rust_decimal::Decimal;
use serde::Deserialize;
use std::str::FromStr;
use storefront_core::state::{CategoryFilter, StoreAction};

use crate::app::AppState;
use crate::views::{layout, shop};

/// Filter bar submission; absent fields are left unchanged
#[derive(Debug, Default, Deserialize)]
pub struct FilterForm {
    pub search: Option<String>,
    pub category: Option<String>,
    pub max_price: Option<String>,
}

pub async fn index(State(state): State<AppState>) -> Html<String> {
    let flash = state.store.take_flash().await;
    let html = state
        .store
        .read(|s| {
            layout::page(
                "Shop",
                s.cart.item_count(),
                flash.as_deref(),
                &shop::render(s),
            )
        })
        .await;
    Html(html)
}

pub async fn update_filters(
    State(state): State<AppState>,
    Form(form): Form<FilterForm>,
) -> Redirect {
    if let Some(search) = form.search {
        state.store.dispatch(StoreAction::SetSearch(search)).await;
    }
    if let Some(category) = form.category {
        state
            .store
            .dispatch(StoreAction::SetCategory(CategoryFilter::parse(&category)))
            .await;
    }
    if let Some(raw) = form.max_price {
        match Decimal::from_str(raw.trim()) {
            Ok(max_price) => {
                state
                    .store
                    .dispatch(StoreAction::SetMaxPrice(max_price))
                    .await;
            }
            Err(e) => tracing::debug!(value = %raw, error = %e, "Ignoring invalid max price"),
        }
    }
    Redirect::to("/")
}

pub async fn clear_filters(State(state): State<AppState>) -> Redirect {
    state.store.dispatch(StoreAction::ClearFilters).await;
    Redirect::to("/")
}

/// Drop all state and fetch the catalog again
pub async fn reload(State(state): State<AppState>) -> Redirect {
    // Outcome is recorded in the store either way
    let _ = state.store.reload(state.catalog.as_ref()).await;
    Redirect::to("/")
}
