//! # Store Events
//!
//! Change notifications published by the [`Store`](super::Store) after
//! each state transition.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Kind of store change
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum StoreEventKind {
    /// State reset to its initial loading state
    Reset,
    /// Catalog fetched successfully
    CatalogLoaded,
    /// Catalog fetch failed
    CatalogFailed,
    /// Search, category or price ceiling changed
    FiltersChanged,
    /// A cart line was added, adjusted or removed
    CartChanged,
    /// A one-shot notice was set or consumed
    FlashChanged,
}

/// A published change
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StoreEvent {
    /// Monotonic sequence number within one store
    pub seq: u64,
    pub timestamp: DateTime<Utc>,
    pub kind: StoreEventKind,
    /// Kind-specific payload
    #[serde(default)]
    pub data: Option<serde_json::Value>,
}

impl StoreEvent {
    pub fn new(seq: u64, kind: StoreEventKind) -> Self {
        Self {
            seq,
            timestamp: Utc::now(),
            kind,
            data: None,
        }
    }

    pub fn with_data(mut self, data: serde_json::Value) -> Self {
        self.data = Some(data);
        self
    }
}
