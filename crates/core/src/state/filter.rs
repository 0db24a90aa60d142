//! # Filter View
//!
//! Derives the visible product subset from the loaded catalog and three
//! independent criteria. Recomputed from scratch on every call, in load
//! order.

use crate::models::Product;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Sentinel used by the category selector for "no category filter"
pub const ALL_CATEGORIES: &str = "all";

/// Price ceiling in effect before the catalog has loaded
pub const DEFAULT_MAX_PRICE: u32 = 1000;

/// Category selection
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "snake_case")]
pub enum CategoryFilter {
    #[default]
    All,
    Only(String),
}

impl CategoryFilter {
    /// Parse a selector value; `"all"` and the empty string mean no filter
    pub fn parse(value: &str) -> Self {
        match value {
            "" | ALL_CATEGORIES => Self::All,
            other => Self::Only(other.to_string()),
        }
    }

    /// Value to put back into the selector
    pub fn as_str(&self) -> &str {
        match self {
            Self::All => ALL_CATEGORIES,
            Self::Only(category) => category,
        }
    }

    pub fn matches(&self, category: &str) -> bool {
        match self {
            Self::All => true,
            Self::Only(selected) => selected == category,
        }
    }
}

/// The (search, category, price ceiling) tuple
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct FilterCriteria {
    pub search: String,
    pub category: CategoryFilter,
    #[serde(with = "rust_decimal::serde::float")]
    pub max_price: Decimal,
}

impl Default for FilterCriteria {
    fn default() -> Self {
        Self::cleared(Decimal::from(DEFAULT_MAX_PRICE))
    }
}

impl FilterCriteria {
    /// Criteria that match everything priced at or below `ceiling`
    pub fn cleared(ceiling: Decimal) -> Self {
        Self {
            search: String::new(),
            category: CategoryFilter::All,
            max_price: ceiling,
        }
    }

    /// Whether these criteria are the cleared state for `ceiling`
    pub fn is_default(&self, ceiling: Decimal) -> bool {
        *self == Self::cleared(ceiling)
    }

    /// Whether a single product passes all three predicates
    pub fn matches(&self, product: &Product) -> bool {
        self.matches_search(&product.title)
            && self.category.matches(&product.category)
            && product.price <= self.max_price
    }

    fn matches_search(&self, title: &str) -> bool {
        self.search.is_empty() || title.to_lowercase().contains(&self.search.to_lowercase())
    }

    /// Filter `products`, keeping load order
    pub fn apply<'a>(&self, products: &'a [Product]) -> Vec<&'a Product> {
        products.iter().filter(|p| self.matches(p)).collect()
    }
}
