// HTTP client for the shop backend
//
// Four endpoints, all relative to one configured base URL:
//   GET  /products  - the catalog (JSON array of Product)
//   POST /seed      - populate demo data, response body ignored
//   POST /orders    - submit an OrderRequest, only the status is consulted
//   GET  /test      - health check, status surfaced verbatim
//
// No timeouts and no retries are configured; recovery is always a manual
// user action. "Server unreachable" and "server returned an error status"
// deliberately collapse into the same anyhow error.

use crate::catalog::Product;
use crate::order::OrderRequest;
use anyhow::{Context, Result};

/// Thin wrapper over a shared `reqwest::Client`
///
/// Cheap to clone; each background task owns its own copy.
#[derive(Debug, Clone)]
pub struct ApiClient {
    base_url: String,
    http: reqwest::Client,
}

impl ApiClient {
    pub fn new(base_url: impl Into<String>) -> Self {
        let mut base_url = base_url.into();
        // Joined paths all start with '/'
        while base_url.ends_with('/') {
            base_url.pop();
        }
        Self {
            base_url,
            http: reqwest::Client::new(),
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    /// Fetch the full catalog
    pub async fn fetch_products(&self) -> Result<Vec<Product>> {
        let response = self
            .http
            .get(self.url("/products"))
            .send()
            .await
            .context("GET /products failed")?
            .error_for_status()
            .context("backend rejected GET /products")?;

        let products: Vec<Product> = response
            .json()
            .await
            .context("invalid product list in /products response")?;

        tracing::debug!("Fetched {} products", products.len());
        Ok(products)
    }

    /// Ask the backend to populate demo data
    ///
    /// The response body is ignored; only the status decides success.
    pub async fn seed(&self) -> Result<()> {
        self.http
            .post(self.url("/seed"))
            .send()
            .await
            .context("POST /seed failed")?
            .error_for_status()
            .context("backend rejected POST /seed")?;
        Ok(())
    }

    /// Submit an order; 2xx means accepted
    pub async fn submit_order(&self, order: &OrderRequest) -> Result<()> {
        self.http
            .post(self.url("/orders"))
            .json(order)
            .send()
            .await
            .context("POST /orders failed")?
            .error_for_status()
            .context("backend rejected the order")?;
        Ok(())
    }

    /// Backend health check; returns the raw status code, body unread
    pub async fn health(&self) -> Result<u16> {
        let response = self
            .http
            .get(self.url("/test"))
            .send()
            .await
            .context("GET /test failed")?;
        Ok(response.status().as_u16())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_url_joining() {
        let api = ApiClient::new("http://localhost:8000");
        assert_eq!(api.url("/products"), "http://localhost:8000/products");
    }

    #[test]
    fn test_trailing_slashes_stripped() {
        let api = ApiClient::new("http://localhost:8000//");
        assert_eq!(api.base_url(), "http://localhost:8000");
        assert_eq!(api.url("/seed"), "http://localhost:8000/seed");
    }
}
