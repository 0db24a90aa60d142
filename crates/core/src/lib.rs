//! # Storefront Core
//!
//! Everything the storefront knows that is not markup: the catalog wire
//! types, the dual-request catalog loader, the filter view, the cart, the
//! mock auth forms, and the store that owns all of it.
//!
//! ## Architecture
//!
//! - `models` - Product, rating and cart line types
//! - `catalog/` - `CatalogSource` trait and the `reqwest` implementation
//! - `state/` - Filter view, cart, and the observable `Store`
//! - `auth/` - Presence-only login/signup validation and the mock acceptor
//!
//! ## Usage
//!
//! ```rust,ignore
//! use storefront_core::catalog::{CatalogConfig, HttpCatalog};
//! use storefront_core::state::{Store, StoreAction};
//!
//! let store = Store::new();
//! let source = HttpCatalog::new(CatalogConfig::default())?;
//! store.load(&source).await?;
//! store.dispatch(StoreAction::AddToCart(1)).await;
//! ```

pub mod auth;
pub mod catalog;
pub mod models;
pub mod state;
