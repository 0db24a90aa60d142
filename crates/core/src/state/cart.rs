//! # Cart Store
//!
//! In-memory, quantity-keyed list of selected products. Lines keep the
//! order in which they were first added.

use crate::models::{CartItem, Product, ProductId};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct Cart {
    items: Vec<CartItem>,
}

impl Cart {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn items(&self) -> &[CartItem] {
        &self.items
    }

    pub fn get(&self, id: ProductId) -> Option<&CartItem> {
        self.items.iter().find(|item| item.id == id)
    }

    /// Quantity for `id`; zero when absent
    pub fn quantity(&self, id: ProductId) -> u32 {
        self.get(id).map(|item| item.quantity).unwrap_or(0)
    }

    /// Add one unit of `product`
    ///
    /// Returns the resulting quantity.
    pub fn add(&mut self, product: &Product) -> u32 {
        match self.items.iter_mut().find(|item| item.id == product.id) {
            Some(item) => {
                item.quantity = item.quantity.saturating_add(1);
                item.quantity
            }
            None => {
                self.items.push(CartItem::from_product(product));
                1
            }
        }
    }

    /// Change a line's quantity by `delta`, never going below 1
    ///
    /// Unknown ids are ignored. Returns the resulting quantity, if the
    /// line exists.
    pub fn adjust_quantity(&mut self, id: ProductId, delta: i64) -> Option<u32> {
        let item = self.items.iter_mut().find(|item| item.id == id)?;
        let next = (i64::from(item.quantity) + delta).clamp(1, i64::from(u32::MAX));
        item.quantity = next as u32;
        Some(item.quantity)
    }

    /// Remove a line regardless of its quantity
    ///
    /// Returns the removed line.
    pub fn remove(&mut self, id: ProductId) -> Option<CartItem> {
        let index = self.items.iter().position(|item| item.id == id)?;
        Some(self.items.remove(index))
    }

    /// Sum of price × quantity over all lines
    pub fn total(&self) -> Decimal {
        self.items.iter().map(CartItem::line_total).sum()
    }

    /// Units in the cart, shown on the header badge
    pub fn item_count(&self) -> u32 {
        self.items
            .iter()
            .fold(0u32, |acc, item| acc.saturating_add(item.quantity))
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}
