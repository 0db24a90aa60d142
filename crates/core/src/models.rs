//! # Storefront Models
//!
//! Wire types for the remote catalog API and the cart line items built
//! from them. Prices are exact decimals so cart totals never drift.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Product identifier as issued by the catalog API
pub type ProductId = u64;

/// Average review score and number of reviews
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Rating {
    pub rate: f64,
    pub count: u32,
}

/// A catalog product
///
/// Loaded once from the catalog API and never mutated locally.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Product {
    pub id: ProductId,
    pub title: String,
    #[serde(with = "rust_decimal::serde::float")]
    pub price: Decimal,
    #[serde(default)]
    pub description: String,
    pub category: String,
    #[serde(default)]
    pub image: String,
    #[serde(default = "Rating::unrated")]
    pub rating: Rating,
}

impl Rating {
    fn unrated() -> Self {
        Self { rate: 0.0, count: 0 }
    }
}

/// A line in the cart
///
/// Carries a copy of the display fields so the drawer can render without
/// going back to the catalog.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct CartItem {
    pub id: ProductId,
    pub title: String,
    #[serde(with = "rust_decimal::serde::float")]
    pub price: Decimal,
    pub image: String,
    pub quantity: u32,
}

impl CartItem {
    /// Start a new line for `product` with quantity 1
    pub fn from_product(product: &Product) -> Self {
        Self {
            id: product.id,
            title: product.title.clone(),
            price: product.price,
            image: product.image.clone(),
            quantity: 1,
        }
    }

    /// Price times quantity for this line
    pub fn line_total(&self) -> Decimal {
        self.price * Decimal::from(self.quantity)
    }
}

/// Format a price the way every view displays it: two decimals
pub fn format_price(amount: Decimal) -> String {
    format!("${:.2}", amount.round_dp(2))
}
