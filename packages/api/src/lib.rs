//! HTTP client for the product backend.
//!
//! This crate talks to the external product service:
//! - `ClientConfig` resolves where the backend lives
//! - `ProductClient` posts new products and classifies the response

mod config;
mod products;

/// Path of the create-product endpoint.
pub const PRODUCTS_PATH: &str = "/api/products";

pub use config::{API_URL_ENV, ClientConfig, DEFAULT_API_URL};
pub use products::{ClientError, ProductClient};

// Re-export core types for convenience
pub use product_core::{CreatedProduct, NewProduct, ProductId, ProductResponse, ProductTransport};
