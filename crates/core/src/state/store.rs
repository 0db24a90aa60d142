//! # Store
//!
//! The single owner of all storefront UI state. Every mutation goes
//! through [`StoreState::apply`], a synchronous transition function; the
//! [`Store`] wrapper serializes access and publishes a [`StoreEvent`] for
//! each transition that changed something.

use super::cart::Cart;
use super::events::{StoreEvent, StoreEventKind};
use super::filter::{CategoryFilter, FilterCriteria, DEFAULT_MAX_PRICE};
use crate::catalog::{load_catalog, Catalog, CatalogError, CatalogSource};
use crate::models::{Product, ProductId};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use serde_json::json;
use std::sync::atomic::{AtomicU64, Ordering};
use tokio::sync::{broadcast, RwLock};

/// How many similar products the detail view shows
pub const RELATED_PRODUCTS_LIMIT: usize = 4;

/// Catalog load lifecycle
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(tag = "state", rename_all = "snake_case")]
pub enum CatalogStatus {
    #[default]
    Loading,
    Loaded,
    Failed { message: String },
}

/// Inputs to [`StoreState::apply`]
#[derive(Debug, Clone)]
pub enum StoreAction {
    CatalogLoaded(Catalog),
    CatalogFailed(String),
    /// Back to the initial state, as after a full page reload
    Reset,
    SetSearch(String),
    SetCategory(CategoryFilter),
    SetMaxPrice(Decimal),
    ClearFilters,
    AddToCart(ProductId),
    AdjustQuantity { id: ProductId, delta: i64 },
    RemoveFromCart(ProductId),
    Flash(String),
    TakeFlash,
}

/// What a transition changed
#[derive(Debug, Clone, PartialEq)]
pub struct Change {
    pub kind: StoreEventKind,
    pub data: Option<serde_json::Value>,
}

impl Change {
    fn new(kind: StoreEventKind) -> Self {
        Self { kind, data: None }
    }

    fn with_data(mut self, data: serde_json::Value) -> Self {
        self.data = Some(data);
        self
    }
}

/// The visible state of the catalog page
#[derive(Debug, Clone, PartialEq)]
pub enum CatalogView<'a> {
    Loading,
    Failed { message: &'a str },
    /// Loaded, but nothing passes the current filters
    Empty,
    Products(Vec<&'a Product>),
}

/// All mutable UI state
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct StoreState {
    pub status: CatalogStatus,
    pub products: Vec<Product>,
    pub categories: Vec<String>,
    pub filters: FilterCriteria,
    /// Highest loaded price rounded up; what "clear filters" resets to
    #[serde(with = "rust_decimal::serde::float")]
    pub price_ceiling: Decimal,
    pub cart: Cart,
    #[serde(default)]
    pub flash: Option<String>,
}

impl Default for StoreState {
    fn default() -> Self {
        let ceiling = Decimal::from(DEFAULT_MAX_PRICE);
        Self {
            status: CatalogStatus::Loading,
            products: Vec::new(),
            categories: Vec::new(),
            filters: FilterCriteria::cleared(ceiling),
            price_ceiling: ceiling,
            cart: Cart::new(),
            flash: None,
        }
    }
}

impl StoreState {
    /// Apply one action; `None` when nothing changed
    pub fn apply(&mut self, action: StoreAction) -> Option<Change> {
        match action {
            StoreAction::CatalogLoaded(catalog) => {
                let ceiling = catalog.price_ceiling();
                let data = json!({
                    "products": catalog.products.len(),
                    "categories": catalog.categories.len(),
                    "price_ceiling": ceiling.to_string(),
                });
                self.products = catalog.products;
                self.categories = catalog.categories;
                self.price_ceiling = ceiling;
                self.filters.max_price = ceiling;
                self.status = CatalogStatus::Loaded;
                Some(Change::new(StoreEventKind::CatalogLoaded).with_data(data))
            }
            StoreAction::CatalogFailed(message) => {
                self.products.clear();
                self.categories.clear();
                self.status = CatalogStatus::Failed {
                    message: message.clone(),
                };
                Some(
                    Change::new(StoreEventKind::CatalogFailed)
                        .with_data(json!({ "message": message })),
                )
            }
            StoreAction::Reset => {
                *self = Self::default();
                Some(Change::new(StoreEventKind::Reset))
            }
            StoreAction::SetSearch(search) => {
                if self.filters.search == search {
                    return None;
                }
                self.filters.search = search;
                Some(self.filters_changed())
            }
            StoreAction::SetCategory(category) => {
                if self.filters.category == category {
                    return None;
                }
                self.filters.category = category;
                Some(self.filters_changed())
            }
            StoreAction::SetMaxPrice(max_price) => {
                let max_price = max_price.max(Decimal::ZERO);
                if self.filters.max_price == max_price {
                    return None;
                }
                self.filters.max_price = max_price;
                Some(self.filters_changed())
            }
            StoreAction::ClearFilters => {
                let cleared = FilterCriteria::cleared(self.price_ceiling);
                if self.filters == cleared {
                    return None;
                }
                self.filters = cleared;
                Some(self.filters_changed())
            }
            StoreAction::AddToCart(id) => {
                let product = self.product(id)?.clone();
                let quantity = self.cart.add(&product);
                Some(self.cart_changed(id, quantity))
            }
            StoreAction::AdjustQuantity { id, delta } => {
                let before = self.cart.quantity(id);
                let after = self.cart.adjust_quantity(id, delta)?;
                if before == after {
                    return None;
                }
                Some(self.cart_changed(id, after))
            }
            StoreAction::RemoveFromCart(id) => {
                self.cart.remove(id)?;
                Some(self.cart_changed(id, 0))
            }
            StoreAction::Flash(message) => {
                self.flash = Some(message);
                Some(Change::new(StoreEventKind::FlashChanged))
            }
            StoreAction::TakeFlash => {
                self.flash.take()?;
                Some(Change::new(StoreEventKind::FlashChanged))
            }
        }
    }

    fn filters_changed(&self) -> Change {
        Change::new(StoreEventKind::FiltersChanged).with_data(json!({
            "search": self.filters.search,
            "category": self.filters.category.as_str(),
            "max_price": self.filters.max_price.to_string(),
        }))
    }

    fn cart_changed(&self, id: ProductId, quantity: u32) -> Change {
        Change::new(StoreEventKind::CartChanged).with_data(json!({
            "id": id,
            "quantity": quantity,
            "item_count": self.cart.item_count(),
            "total": self.cart.total().round_dp(2).to_string(),
        }))
    }

    /// Derive the catalog page state from the current filters
    pub fn catalog_view(&self) -> CatalogView<'_> {
        match &self.status {
            CatalogStatus::Loading => CatalogView::Loading,
            CatalogStatus::Failed { message } => CatalogView::Failed {
                message: message.as_str(),
            },
            CatalogStatus::Loaded => {
                let visible = self.filters.apply(&self.products);
                if visible.is_empty() {
                    CatalogView::Empty
                } else {
                    CatalogView::Products(visible)
                }
            }
        }
    }

    /// Whether the "clear filters" control should be offered
    pub fn is_filtered(&self) -> bool {
        !self.filters.is_default(self.price_ceiling)
    }

    pub fn product(&self, id: ProductId) -> Option<&Product> {
        self.products.iter().find(|p| p.id == id)
    }

    /// Other products in the same category as `id`, in load order
    pub fn related_products(&self, id: ProductId) -> Vec<&Product> {
        let Some(product) = self.product(id) else {
            return Vec::new();
        };
        self.products
            .iter()
            .filter(|p| p.category == product.category && p.id != product.id)
            .take(RELATED_PRODUCTS_LIMIT)
            .collect()
    }
}

/// Shared, observable wrapper around [`StoreState`]
///
/// Events are published while the write lock is held, so subscribers see
/// them in the order the transitions happened.
pub struct Store {
    state: RwLock<StoreState>,
    events: broadcast::Sender<StoreEvent>,
    seq: AtomicU64,
    /// Bumped on every reload; loads started earlier are discarded
    generation: AtomicU64,
}

impl Default for Store {
    fn default() -> Self {
        Self::new()
    }
}

impl Store {
    pub fn new() -> Self {
        Self::with_state(StoreState::default())
    }

    pub fn with_state(state: StoreState) -> Self {
        let (events, _) = broadcast::channel(100);
        Self {
            state: RwLock::new(state),
            events,
            seq: AtomicU64::new(0),
            generation: AtomicU64::new(0),
        }
    }

    /// Apply an action and publish the resulting event, if any
    pub async fn dispatch(&self, action: StoreAction) -> Option<StoreEvent> {
        let mut state = self.state.write().await;
        let change = state.apply(action)?;
        Some(self.publish(change))
    }

    /// Must be called with the write lock held
    fn publish(&self, change: Change) -> StoreEvent {
        let seq = self.seq.fetch_add(1, Ordering::Relaxed) + 1;
        let mut event = StoreEvent::new(seq, change.kind);
        if let Some(data) = change.data {
            event = event.with_data(data);
        }
        // No subscribers is fine
        let _ = self.events.send(event.clone());
        event
    }

    /// Receive every event published after this call
    pub fn subscribe(&self) -> broadcast::Receiver<StoreEvent> {
        self.events.subscribe()
    }

    /// Clone of the current state
    pub async fn snapshot(&self) -> StoreState {
        self.state.read().await.clone()
    }

    /// Run `f` against the current state without cloning it
    pub async fn read<R>(&self, f: impl FnOnce(&StoreState) -> R) -> R {
        let state = self.state.read().await;
        f(&*state)
    }

    /// Consume the pending notice, if any
    pub async fn take_flash(&self) -> Option<String> {
        let mut state = self.state.write().await;
        let message = state.flash.clone()?;
        if let Some(change) = state.apply(StoreAction::TakeFlash) {
            self.publish(change);
        }
        Some(message)
    }

    /// Fetch the catalog and record the outcome
    ///
    /// The error is returned as is; the state only gets the user-facing
    /// message. If a reload started while this was in flight the outcome
    /// is dropped.
    pub async fn load(&self, source: &dyn CatalogSource) -> Result<(), CatalogError> {
        let generation = self.generation.load(Ordering::SeqCst);
        let (action, result) = match load_catalog(source).await {
            Ok(catalog) => (StoreAction::CatalogLoaded(catalog), Ok(())),
            Err(e) => {
                tracing::warn!(error = %e, "Catalog load failed");
                (
                    StoreAction::CatalogFailed(e.user_message().to_string()),
                    Err(e),
                )
            }
        };

        let mut state = self.state.write().await;
        if self.generation.load(Ordering::SeqCst) != generation {
            tracing::debug!(generation, "Discarding superseded catalog load");
            return result;
        }
        if let Some(change) = state.apply(action) {
            self.publish(change);
        }
        result
    }

    /// Full reload: drop every piece of state, then load again
    pub async fn reload(&self, source: &dyn CatalogSource) -> Result<(), CatalogError> {
        tracing::info!("Reloading storefront state");
        {
            let mut state = self.state.write().await;
            self.generation.fetch_add(1, Ordering::SeqCst);
            if let Some(change) = state.apply(StoreAction::Reset) {
                self.publish(change);
            }
        }
        self.load(source).await
    }
}
