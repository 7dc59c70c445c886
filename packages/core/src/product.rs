//! Wire types for the `POST /api/products` contract.

use serde::{Deserialize, Deserializer, Serialize};
use thiserror::Error;

use crate::FormDraft;

/// Request body for creating a product.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct NewProduct {
    pub sku: String,
    pub name: String,
    pub description: String,
}

impl From<FormDraft> for NewProduct {
    fn from(draft: FormDraft) -> Self {
        Self {
            sku: draft.sku,
            name: draft.name,
            description: draft.description,
        }
    }
}

/// Error returned when a product id has an unusable JSON shape.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ProductIdError {
    #[error("product id is missing or null")]
    Missing,
    #[error("product id must be a number or a string, got {0}")]
    InvalidType(&'static str),
}

/// Identifier assigned to a product by the backend.
///
/// The backend issues numeric ids, but any string id is shown as-is too.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ProductId {
    Number(serde_json::Number),
    Text(String),
}

impl ProductId {
    /// Convert a raw JSON value into an id.
    pub fn from_value(value: serde_json::Value) -> Result<Self, ProductIdError> {
        use serde_json::Value;

        match value {
            Value::Number(n) => Ok(Self::Number(n)),
            Value::String(s) => Ok(Self::Text(s)),
            Value::Null => Err(ProductIdError::Missing),
            Value::Bool(_) => Err(ProductIdError::InvalidType("boolean")),
            Value::Array(_) => Err(ProductIdError::InvalidType("array")),
            Value::Object(_) => Err(ProductIdError::InvalidType("object")),
        }
    }
}

impl<'de> Deserialize<'de> for ProductId {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let value = serde_json::Value::deserialize(deserializer)?;
        Self::from_value(value).map_err(serde::de::Error::custom)
    }
}

impl From<u64> for ProductId {
    fn from(id: u64) -> Self {
        Self::Number(id.into())
    }
}

impl From<&str> for ProductId {
    fn from(id: &str) -> Self {
        Self::Text(id.to_string())
    }
}

impl std::fmt::Display for ProductId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            // Whole floats such as `1.0` print as `1`, like a JSON client would.
            ProductId::Number(n) if n.is_f64() => match n.as_f64() {
                Some(x) => write!(f, "{}", x),
                None => write!(f, "{}", n),
            },
            ProductId::Number(n) => write!(f, "{}", n),
            ProductId::Text(s) => write!(f, "{}", s),
        }
    }
}

/// The product representation returned on a successful create.
///
/// Only `id` is required. Unknown fields are ignored.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct CreatedProduct {
    pub id: ProductId,
    #[serde(default)]
    pub sku: Option<String>,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
    /// Lifecycle status assigned by the backend (e.g. `draft`).
    #[serde(default)]
    pub status: Option<String>,
}

impl CreatedProduct {
    pub fn new(id: impl Into<ProductId>) -> Self {
        Self {
            id: id.into(),
            sku: None,
            name: None,
            description: None,
            status: None,
        }
    }
}

/// A response obtained from the backend.
#[derive(Debug, Clone, PartialEq)]
pub enum ProductResponse {
    /// 2xx status with a parsed product body.
    Created(CreatedProduct),
    /// Any other status. The body is the raw response text.
    Rejected { status: u16, body: String },
}
