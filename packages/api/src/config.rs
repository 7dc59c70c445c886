//! Client configuration.

/// Environment variable holding the backend base URL for native builds.
pub const API_URL_ENV: &str = "PRODUCT_API_URL";

/// Backend used when nothing else is configured.
pub const DEFAULT_API_URL: &str = "http://localhost:8080";

/// Configuration for the product backend client.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClientConfig {
    /// Scheme, host and optional port of the backend, e.g. `http://localhost:8080`.
    pub base_url: String,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_API_URL.to_string(),
        }
    }
}

impl ClientConfig {
    /// Resolve the configuration for the current platform.
    ///
    /// Browser builds target the origin that served the page. Native builds
    /// read `PRODUCT_API_URL` and fall back to the local backend.
    pub fn from_env() -> Self {
        #[cfg(target_arch = "wasm32")]
        {
            match page_origin() {
                Some(origin) => Self::default().with_base_url(origin),
                None => {
                    tracing::warn!("Page origin unavailable, using {}", DEFAULT_API_URL);
                    Self::default()
                }
            }
        }

        #[cfg(not(target_arch = "wasm32"))]
        {
            match std::env::var(API_URL_ENV) {
                Ok(url) if !url.trim().is_empty() => Self::default().with_base_url(url),
                _ => Self::default(),
            }
        }
    }

    /// Set the backend base URL.
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    /// Full URL of the create-product endpoint.
    pub fn products_url(&self) -> String {
        format!("{}{}", self.base_url.trim_end_matches('/'), crate::PRODUCTS_PATH)
    }
}

#[cfg(target_arch = "wasm32")]
fn page_origin() -> Option<String> {
    web_sys::window()?.location().origin().ok()
}
