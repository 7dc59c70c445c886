//! Product creation against the backend REST API.

use product_core::{CreatedProduct, NewProduct, ProductResponse, ProductTransport};
use reqwest::Client;
use thiserror::Error;

use crate::ClientConfig;

/// Errors raised before a usable response was obtained.
#[derive(Debug, Error)]
pub enum ClientError {
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),
    #[error("Invalid product response: {0}")]
    Decode(#[from] serde_json::Error),
}

/// Client for `POST /api/products`.
///
/// Cloning is cheap and shares the underlying connection pool.
/// No request timeout is set; a request waits until the transport settles.
#[derive(Debug, Clone)]
pub struct ProductClient {
    http: Client,
    products_url: String,
}

impl ProductClient {
    /// Build a client with a default `reqwest` client.
    pub fn new(config: ClientConfig) -> Self {
        Self::with_client(config, Client::new())
    }

    /// Build a client from an existing `reqwest` client.
    pub fn with_client(config: ClientConfig, http: Client) -> Self {
        Self {
            http,
            products_url: config.products_url(),
        }
    }

    /// Build a client for the current platform's configuration.
    pub fn from_env() -> Self {
        Self::new(ClientConfig::from_env())
    }
}

impl ProductTransport for ProductClient {
    type Error = ClientError;

    async fn create_product(&self, product: &NewProduct) -> Result<ProductResponse, ClientError> {
        tracing::debug!("POST {} sku={}", self.products_url, product.sku);

        let response = self.http.post(&self.products_url).json(product).send().await?;
        let status = response.status();
        let body = response.text().await?;

        if status.is_success() {
            let created: CreatedProduct = serde_json::from_str(&body)?;
            Ok(ProductResponse::Created(created))
        } else {
            Ok(ProductResponse::Rejected {
                status: status.as_u16(),
                body,
            })
        }
    }
}
