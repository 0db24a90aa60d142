//! JSON read models over the store
//!
//! Prices are rendered as fixed two-decimal strings so clients never see
//! float artifacts.

use axum::{extract::State, Json};
use rust_decimal::Decimal;
use serde::Serialize;
use storefront_core::models::{CartItem, Product, ProductId};
use storefront_core::state::{CatalogStatus, StoreState};
use utoipa::ToSchema;

use crate::app::AppState;

fn money(amount: Decimal) -> String {
    format!("{:.2}", amount.round_dp(2))
}

#[derive(Debug, Serialize, ToSchema)]
pub struct ProductSummary {
    pub id: ProductId,
    pub title: String,
    pub price: String,
    pub category: String,
    pub image: String,
    pub rating: f64,
    pub reviews: u32,
}

impl From<&Product> for ProductSummary {
    fn from(p: &Product) -> Self {
        Self {
            id: p.id,
            title: p.title.clone(),
            price: money(p.price),
            category: p.category.clone(),
            image: p.image.clone(),
            rating: p.rating.rate,
            reviews: p.rating.count,
        }
    }
}

#[derive(Debug, Serialize, ToSchema)]
pub struct FiltersResponse {
    pub search: String,
    /// `all` or a category name
    pub category: String,
    pub max_price: String,
}

/// Catalog status plus the products that pass the current filters
#[derive(Debug, Serialize, ToSchema)]
pub struct CatalogResponse {
    /// `loading`, `loaded` or `failed`
    pub status: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
    pub categories: Vec<String>,
    pub price_ceiling: String,
    pub filters: FiltersResponse,
    /// Size of the whole catalog
    pub total: usize,
    pub products: Vec<ProductSummary>,
}

impl From<&StoreState> for CatalogResponse {
    fn from(state: &StoreState) -> Self {
        let (status, message) = match &state.status {
            CatalogStatus::Loading => ("loading", None),
            CatalogStatus::Loaded => ("loaded", None),
            CatalogStatus::Failed { message } => ("failed", Some(message.clone())),
        };
        let products = match state.status {
            CatalogStatus::Loaded => state
                .filters
                .apply(&state.products)
                .into_iter()
                .map(ProductSummary::from)
                .collect(),
            _ => Vec::new(),
        };

        Self {
            status: status.to_string(),
            message,
            categories: state.categories.clone(),
            price_ceiling: money(state.price_ceiling),
            filters: FiltersResponse {
                search: state.filters.search.clone(),
                category: state.filters.category.as_str().to_string(),
                max_price: money(state.filters.max_price),
            },
            total: state.products.len(),
            products,
        }
    }
}

#[derive(Debug, Serialize, ToSchema)]
pub struct CartLine {
    pub id: ProductId,
    pub title: String,
    pub price: String,
    pub quantity: u32,
    pub line_total: String,
}

impl From<&CartItem> for CartLine {
    fn from(item: &CartItem) -> Self {
        Self {
            id: item.id,
            title: item.title.clone(),
            price: money(item.price),
            quantity: item.quantity,
            line_total: money(item.line_total()),
        }
    }
}

#[derive(Debug, Serialize, ToSchema)]
pub struct CartResponse {
    pub items: Vec<CartLine>,
    /// Sum of quantities, as shown on the header badge
    pub item_count: u32,
    pub total: String,
}

/// Catalog status, filters and visible products
#[utoipa::path(
    get,
    path = "/api/v1/catalog",
    tag = "catalog",
    responses(
        (status = 200, description = "Current catalog view", body = CatalogResponse)
    )
)]
pub async fn get_catalog(State(state): State<AppState>) -> Json<CatalogResponse> {
    Json(state.store.read(|s| CatalogResponse::from(s)).await)
}

/// Cart contents and totals
#[utoipa::path(
    get,
    path = "/api/v1/cart",
    tag = "cart",
    responses(
        (status = 200, description = "Current cart", body = CartResponse)
    )
)]
pub async fn get_cart(State(state): State<AppState>) -> Json<CartResponse> {
    let response = state
        .store
        .read(|s| CartResponse {
            items: s.cart.items().iter().map(CartLine::from).collect(),
            item_count: s.cart.item_count(),
            total: money(s.cart.total()),
        })
        .await;
    Json(response)
}
