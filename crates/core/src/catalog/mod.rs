//! # Catalog Loader
//!
//! Fetches the product list and the category list from the remote catalog
//! API. Both requests are issued together and awaited jointly; the load
//! only succeeds when both do.
//!
//! ```text
//! load_catalog(source)
//!      ├── fetch_products()   ─┐
//!      └── fetch_categories() ─┴─ try_join ──> Catalog | CatalogError
//! ```

pub mod client;
pub mod error;

pub use client::HttpCatalog;
pub use error::{CatalogError, LOAD_FAILED_MESSAGE};

use crate::models::Product;
use async_trait::async_trait;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Public demo catalog used when no base URL is configured
pub const DEFAULT_API_BASE_URL: &str = "https://fakestoreapi.com";

/// Configuration for the catalog client
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CatalogConfig {
    /// Base URL of the catalog API, without trailing slash
    pub base_url: String,
    /// Per-request timeout; `None` waits indefinitely
    pub timeout: Option<Duration>,
}

impl Default for CatalogConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_API_BASE_URL.to_string(),
            timeout: Some(Duration::from_secs(10)),
        }
    }
}

impl CatalogConfig {
    /// Create a config for a specific base URL
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into().trim_end_matches('/').to_string(),
            ..Self::default()
        }
    }

    /// Override the request timeout
    pub fn with_timeout(mut self, timeout: Option<Duration>) -> Self {
        self.timeout = timeout;
        self
    }

    pub fn products_url(&self) -> String {
        format!("{}/products", self.base_url)
    }

    pub fn categories_url(&self) -> String {
        format!("{}/products/categories", self.base_url)
    }
}

/// Where the catalog comes from
#[async_trait]
pub trait CatalogSource: Send + Sync {
    /// Fetch the full product collection
    async fn fetch_products(&self) -> Result<Vec<Product>, CatalogError>;

    /// Fetch the category labels
    async fn fetch_categories(&self) -> Result<Vec<String>, CatalogError>;
}

/// A successfully loaded catalog
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Catalog {
    pub products: Vec<Product>,
    pub categories: Vec<String>,
}

impl Catalog {
    /// Highest product price rounded up to a whole unit
    ///
    /// Zero for an empty catalog.
    pub fn price_ceiling(&self) -> Decimal {
        price_ceiling(&self.products)
    }
}

/// Highest price in `products`, rounded up to a whole unit
pub fn price_ceiling(products: &[Product]) -> Decimal {
    products
        .iter()
        .map(|p| p.price)
        .max()
        .map(|max| max.ceil())
        .unwrap_or(Decimal::ZERO)
}

/// Load products and categories concurrently
///
/// Fails as soon as either request fails.
#[tracing::instrument(skip(source))]
pub async fn load_catalog(source: &dyn CatalogSource) -> Result<Catalog, CatalogError> {
    let (products, categories) =
        tokio::try_join!(source.fetch_products(), source.fetch_categories())?;

    tracing::info!(
        products = products.len(),
        categories = categories.len(),
        "Catalog loaded"
    );

    Ok(Catalog {
        products,
        categories,
    })
}
