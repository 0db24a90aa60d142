//! # HTML Pages
//!
//! Handlers for the browser-facing routes. Every form post answers with a
//! `303 See Other` so a refresh never resubmits.

pub mod auth;
pub mod cart;
pub mod product;
pub mod shop;

use axum::{extract::State, http::StatusCode, response::Html};

use crate::app::AppState;
use crate::views::layout;

/// Fallback for unknown routes
pub async fn not_found(State(state): State<AppState>) -> (StatusCode, Html<String>) {
    let count = state.store.read(|s| s.cart.item_count()).await;
    (
        StatusCode::NOT_FOUND,
        Html(layout::page(
            "Page not found",
            count,
            None,
            r#"<div class="panel empty"><h2>Page not found</h2><a href="/" class="button">Back to Shop</a></div>"#,
        )),
    )
}
