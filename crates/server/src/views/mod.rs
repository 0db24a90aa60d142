//! # Views
//!
//! Pure functions from store snapshots to HTML. Nothing here touches the
//! store or the network.

pub mod auth;
pub mod cart;
pub mod html;
pub mod layout;
pub mod product;
pub mod shop;
