//! Catalog API client.
//!
//! Low-level HTTP client that issues raw requests and normalizes failures.
//! Item operations are implemented via traits on [`Item`](crate::Item).

use std::env;
use std::sync::Arc;

use reqwest::{Client, Response, StatusCode};
use serde::de::DeserializeOwned;
use serde::Serialize;
use url::Url;

use crate::error::{CatalogError, Result};

const DEFAULT_API_URL: &str = "http://localhost:8000";
const USER_AGENT: &str = concat!("itemcat/", env!("CARGO_PKG_VERSION"));

/// Low-level catalog API client.
///
/// This struct is cheaply cloneable; clones reference the same underlying
/// connection pool. No request timeout is configured, so a hung backend
/// leaves the caller waiting.
///
/// # Example
///
/// ```no_run
/// use itemcat::CatalogClient;
///
/// # fn example() -> itemcat::Result<()> {
/// // Create from environment variables
/// let client = CatalogClient::from_env()?;
///
/// // Or configure manually
/// let client = CatalogClient::new("http://localhost:8000")?;
/// # Ok(())
/// # }
/// ```
#[derive(Clone)]
pub struct CatalogClient {
    http: Client,
    base_url: Arc<Url>,
}

impl std::fmt::Debug for CatalogClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CatalogClient")
            .field("base_url", &self.base_url.as_str())
            .finish_non_exhaustive()
    }
}

impl CatalogClient {
    /// Create a client from environment variables.
    ///
    /// Uses `ITEMCAT_API_URL` for the base URL (defaults to
    /// `http://localhost:8000`).
    ///
    /// # Errors
    ///
    /// Returns an error if the configured URL is invalid.
    pub fn from_env() -> Result<Self> {
        let base_url = env::var("ITEMCAT_API_URL").unwrap_or_else(|_| DEFAULT_API_URL.to_string());
        Self::new(&base_url)
    }

    /// Create a new client for the given base URL.
    ///
    /// # Errors
    ///
    /// Returns an error if the base URL is empty or invalid.
    pub fn new(base_url: &str) -> Result<Self> {
        if base_url.trim().is_empty() {
            return Err(CatalogError::ConfigMissing("API base URL is empty".to_string()));
        }

        // Ensure base URL ends with /
        let base_url_str = if base_url.ends_with('/') {
            base_url.to_string()
        } else {
            format!("{base_url}/")
        };

        let base_url = Url::parse(&base_url_str)?;

        let http = Client::builder()
            .user_agent(USER_AGENT)
            .brotli(true)
            .gzip(true)
            .deflate(true)
            .build()
            .map_err(CatalogError::HttpError)?;

        Ok(Self {
            http,
            base_url: Arc::new(base_url),
        })
    }

    /// Get the base URL.
    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    /// Make a GET request and decode the JSON body.
    #[tracing::instrument(skip(self))]
    pub async fn get<T: DeserializeOwned>(&self, path: &str) -> Result<T> {
        let url = self.base_url.join(path.trim_start_matches('/'))?;

        let response = self
            .http
            .get(url)
            .send()
            .await
            .map_err(CatalogError::HttpError)?;

        let response = Self::check_response(response).await?;
        response.json().await.map_err(CatalogError::HttpError)
    }

    /// Make a POST request with a JSON body and decode the JSON response.
    #[tracing::instrument(skip(self, body))]
    pub async fn post<T, B>(&self, path: &str, body: &B) -> Result<T>
    where
        T: DeserializeOwned,
        B: Serialize + ?Sized,
    {
        let url = self.base_url.join(path.trim_start_matches('/'))?;

        let response = self
            .http
            .post(url)
            .json(body)
            .send()
            .await
            .map_err(CatalogError::HttpError)?;

        let response = Self::check_response(response).await?;
        response.json().await.map_err(CatalogError::HttpError)
    }

    /// Check response status and convert errors.
    async fn check_response(response: Response) -> Result<Response> {
        let status = response.status();

        if status.is_success() {
            return Ok(response);
        }

        let body = response.text().await.unwrap_or_default();
        let message = extract_error_message(&body, status);
        tracing::debug!(status = status.as_u16(), %message, "request failed");

        Err(CatalogError::ApiError {
            message,
            status_code: Some(status.as_u16()),
        })
    }
}

/// Extract a user-facing message from a failed response body.
///
/// Prefers a JSON `detail` field, then `message`, then the raw body, then a
/// generic message naming the status code.
pub(crate) fn extract_error_message(body: &str, status: StatusCode) -> String {
    if let Ok(json) = serde_json::from_str::<serde_json::Value>(body) {
        match json.get("detail") {
            Some(serde_json::Value::String(detail)) => return detail.clone(),
            Some(serde_json::Value::Null) | None => {}
            Some(other) => return other.to_string(),
        }
        if let Some(msg) = json.get("message").and_then(|m| m.as_str()) {
            return msg.to_string();
        }
    }

    if body.is_empty() {
        format!("Request failed: {}", status.as_u16())
    } else {
        body.to_string()
    }
}
