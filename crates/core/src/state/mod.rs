pub mod cart;
pub mod events;
pub mod filter;
pub mod store;

pub use cart::Cart;
pub use events::{StoreEvent, StoreEventKind};
pub use filter::{CategoryFilter, FilterCriteria, ALL_CATEGORIES, DEFAULT_MAX_PRICE};
pub use store::{CatalogStatus, CatalogView, Change, Store, StoreAction, StoreState};
