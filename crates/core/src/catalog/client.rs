//! # HTTP Catalog Client
//!
//! `reqwest` implementation of [`CatalogSource`].

use super::{CatalogConfig, CatalogError, CatalogSource};
use crate::models::Product;
use async_trait::async_trait;
use serde::de::DeserializeOwned;

/// Catalog source backed by the remote HTTP API
#[derive(Debug, Clone)]
pub struct HttpCatalog {
    client: reqwest::Client,
    config: CatalogConfig,
}

impl HttpCatalog {
    pub fn new(config: CatalogConfig) -> Result<Self, CatalogError> {
        let mut builder = reqwest::Client::builder();
        if let Some(timeout) = config.timeout {
            builder = builder.timeout(timeout);
        }
        let client = builder.build()?;
        Ok(Self { client, config })
    }

    pub fn config(&self) -> &CatalogConfig {
        &self.config
    }

    async fn get_json<T: DeserializeOwned>(&self, url: &str) -> Result<T, CatalogError> {
        tracing::debug!(%url, "GET");
        let response = self.client.get(url).send().await?;

        let status = response.status();
        if !status.is_success() {
            tracing::warn!(%url, status = status.as_u16(), "Catalog request rejected");
            return Err(CatalogError::Status {
                endpoint: url.to_string(),
                status: status.as_u16(),
            });
        }

        let body = response.bytes().await?;
        serde_json::from_slice(&body).map_err(|e| CatalogError::Decode {
            endpoint: url.to_string(),
            message: e.to_string(),
        })
    }
}

#[async_trait]
impl CatalogSource for HttpCatalog {
    async fn fetch_products(&self) -> Result<Vec<Product>, CatalogError> {
        self.get_json(&self.config.products_url()).await
    }

    async fn fetch_categories(&self) -> Result<Vec<String>, CatalogError> {
        self.get_json(&self.config.categories_url()).await
    }
}
