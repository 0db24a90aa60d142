//! Catalog load errors

use thiserror::Error;

/// What the shop shows for any failed load
pub const LOAD_FAILED_MESSAGE: &str = "Failed to fetch data";

/// Failure while loading the catalog
///
/// Every variant ends up as the same user-facing failure; the distinction
/// only matters for logs.
#[derive(Debug, Error)]
pub enum CatalogError {
    /// Network error, timeout, or refused connection
    #[error("Failed to fetch data: {0}")]
    Request(#[from] reqwest::Error),

    /// The API answered with a non-success status
    #[error("Failed to fetch data ({status} from {endpoint})")]
    Status { endpoint: String, status: u16 },

    /// The body was not the expected JSON shape
    #[error("Failed to read {endpoint}: {message}")]
    Decode { endpoint: String, message: String },
}

impl CatalogError {
    /// Message for the failure panel; the cause stays in the logs
    pub fn user_message(&self) -> &'static str {
        LOAD_FAILED_MESSAGE
    }
}
