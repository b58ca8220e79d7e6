//! Error types for catalog operations.

use thiserror::Error;

/// Errors that can occur while talking to the catalog API or driving its views.
#[derive(Debug, Error)]
pub enum CatalogError {
    /// Configuration is missing or incomplete.
    #[error("Catalog configuration required: {0}")]
    ConfigMissing(String),

    /// An item id that is not a non-negative integer.
    #[error("Invalid item id")]
    InvalidItemId(String),

    /// Non-2xx response. The message is already normalized from the body.
    #[error("{message}")]
    ApiError {
        message: String,
        status_code: Option<u16>,
    },

    /// HTTP transport error.
    #[error("HTTP error: {0}")]
    HttpError(#[from] reqwest::Error),

    /// JSON parsing error.
    #[error("Failed to parse response: {0}")]
    ParseError(#[from] serde_json::Error),

    /// URL parsing error.
    #[error("Invalid URL: {0}")]
    UrlError(#[from] url::ParseError),

    /// Settings file could not be read or written.
    #[error("Settings error: {0}")]
    Settings(String),

    /// Filesystem error.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Form rejected locally before any request was made.
    #[error("{0}")]
    Validation(String),

    /// The backend answered `success: false`.
    #[error("{0}")]
    Submission(String),
}

impl CatalogError {
    /// HTTP status code of an API error, if any.
    pub fn status_code(&self) -> Option<u16> {
        match self {
            CatalogError::ApiError { status_code, .. } => *status_code,
            CatalogError::HttpError(e) => e.status().map(|s| s.as_u16()),
            _ => None,
        }
    }

    /// Whether the backend reported the entity as missing.
    pub fn is_not_found(&self) -> bool {
        self.status_code() == Some(404)
    }
}

/// Result type alias for catalog operations.
pub type Result<T> = core::result::Result<T, CatalogError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_api_error_displays_message_verbatim() {
        let err = CatalogError::ApiError {
            message: "Item not found".to_string(),
            status_code: Some(404),
        };
        assert_eq!(err.to_string(), "Item not found");
        assert!(err.is_not_found());
    }

    #[test]
    fn test_invalid_item_id_message() {
        let err = CatalogError::InvalidItemId("abc".to_string());
        assert_eq!(err.to_string(), "Invalid item id");
        assert_eq!(err.status_code(), None);
    }
}
